//! Smooth scrolling for in-page anchors.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id targeted by an in-page `href`, if it names one.
///
/// `"#about"` targets `about`; a bare `"#"` or an external link targets
/// nothing.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Intercept every `a[href^="#"]` and scroll its target into view.
///
/// Default navigation is always prevented; an unknown fragment is a no-op.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use crate::consts::ANCHOR_SELECTOR;

    let anchors = crate::dom::query_all::<web_sys::Element>(&ctx.document, ANCHOR_SELECTOR)?;
    for anchor in anchors {
        let document = ctx.document.clone();
        let href_source = anchor.clone();
        crate::dom::listen(&anchor, "click", move |ev: web_sys::Event| {
            ev.prevent_default();
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id)) else {
                log::debug!("no scroll target for {href}");
                return;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
