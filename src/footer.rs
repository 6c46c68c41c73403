//! Footer copyright line, rendered once at startup.
//!
//! The year is computed at load and never refreshed; a page left open over
//! New Year shows the old year until reload.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Attribution text for `owner` in `year`.
#[must_use]
pub fn footer_text(owner: &str, year: u32) -> String {
    format!("\u{a9} {year} {owner}. All Rights Reserved.")
}

/// Current calendar year from the browser clock.
#[cfg(feature = "hydrate")]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Write the footer line into `.footer p`.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use crate::consts::FOOTER_TEXT_SELECTOR;
    use crate::error::PageError;

    let paragraph = crate::dom::query::<web_sys::Element>(&ctx.document, FOOTER_TEXT_SELECTOR)?
        .ok_or(PageError::MissingElement(FOOTER_TEXT_SELECTOR))?;
    paragraph.set_text_content(Some(&footer_text(&ctx.config.owner, current_year())));
    Ok(())
}
