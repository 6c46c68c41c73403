//! Small page touches: a console greeting for curious developers and a
//! horizontal-overflow lock for mobile browsers.

#[cfg(test)]
#[path = "extras_test.rs"]
mod extras_test;

/// `(message, css)` pairs printed with `%c` styling.
pub const GREETING: [(&str, &str); 3] = [
    ("\u{1f44b} Hello, Developer!", "font-size: 20px; font-weight: bold; color: #667eea;"),
    ("Looking to connect? Reach out via the links above!", "font-size: 14px; color: #764ba2;"),
    ("\u{1f319} Try toggling dark mode!", "font-size: 14px; color: #764ba2;"),
];

#[cfg(feature = "hydrate")]
pub fn print_greeting() {
    use wasm_bindgen::JsValue;

    for (message, css) in GREETING {
        web_sys::console::log_2(&JsValue::from_str(&format!("%c{message}")), &JsValue::from_str(css));
    }
}

/// Stop sideways scrolling on `<body>` and `<html>`.
#[cfg(feature = "hydrate")]
pub fn lock_horizontal_overflow(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use wasm_bindgen::JsCast;

    crate::dom::set_style(&crate::dom::body(&ctx.document)?, "overflow-x", "hidden");
    if let Some(root) = ctx
        .document
        .document_element()
        .and_then(|el| el.dyn_ref::<web_sys::HtmlElement>().cloned())
    {
        crate::dom::set_style(&root, "overflow-x", "hidden");
    }
    Ok(())
}
