//! Recovery for images that fail to load.
//!
//! The preloader mark is hidden and replaced by a large glyph; the profile
//! photo is swapped for an inline SVG placeholder. Handlers stay attached
//! and run on every failed load attempt; the failed URL is never retried.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

/// Text shown in place of a broken preloader mark.
pub const FALLBACK_GLYPH: &str = "R";

/// Inline style of the fallback glyph.
pub const GLYPH_STYLE: [(&str, &str); 3] = [("font-size", "80px"), ("font-weight", "900"), ("color", "#fff")];

const PLACEHOLDER_SIZE: u32 = 200;
const PLACEHOLDER_FILL: &str = "#667eea";

/// Data URI for a square placeholder with a centered glyph.
#[must_use]
pub fn profile_placeholder_uri() -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"#,
            r#"<rect fill="{fill}" width="{size}" height="{size}"/>"#,
            r##"<text fill="#fff" font-size="100" font-weight="bold" x="50%" y="50%" text-anchor="middle" dy=".3em">{glyph}</text>"##,
            "</svg>",
        ),
        size = PLACEHOLDER_SIZE,
        fill = PLACEHOLDER_FILL,
        glyph = FALLBACK_GLYPH,
    );
    format!("data:image/svg+xml,{}", encode_svg(&svg))
}

/// Percent-encode the characters that break an unquoted SVG data URI.
fn encode_svg(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len() + svg.len() / 4);
    for ch in svg.chars() {
        match ch {
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '%' => out.push_str("%25"),
            _ => out.push(ch),
        }
    }
    out
}

/// Attach error handlers to the preloader and profile images. Either image
/// may be absent.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use crate::consts::{PRELOADER_IMAGE_SELECTOR, PROFILE_IMAGE_SELECTOR};

    if let Some(image) = crate::dom::query::<web_sys::HtmlImageElement>(&ctx.document, PRELOADER_IMAGE_SELECTOR)? {
        let document = ctx.document.clone();
        let broken = image.clone();
        crate::dom::listen(&image, "error", move |_ev: web_sys::Event| {
            log::warn!("preloader image failed to load");
            crate::dom::set_style(&broken, "display", "none");
            if let Err(err) = append_glyph(&document, &broken) {
                log::warn!("preloader glyph fallback failed: {err}");
            }
        })?;
    }

    if let Some(image) = crate::dom::query::<web_sys::HtmlImageElement>(&ctx.document, PROFILE_IMAGE_SELECTOR)? {
        let broken = image.clone();
        crate::dom::listen(&image, "error", move |_ev: web_sys::Event| {
            log::warn!("profile image failed to load");
            broken.set_src(&profile_placeholder_uri());
        })?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn append_glyph(document: &web_sys::Document, image: &web_sys::HtmlImageElement) -> Result<(), crate::error::PageError> {
    use wasm_bindgen::JsCast;

    use crate::error::PageError;

    let parent = image.parent_element().ok_or(PageError::MissingElement("preloader image parent"))?;
    let glyph = document
        .create_element("span")?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|el| PageError::Js(format!("{el:?} is not an HtmlElement")))?;
    glyph.set_text_content(Some(FALLBACK_GLYPH));
    for (property, value) in GLYPH_STYLE {
        crate::dom::set_style(&glyph, property, value);
    }
    parent.append_child(&glyph)?;
    Ok(())
}
