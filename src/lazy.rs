//! Lazy image loading.
//!
//! Browsers with native `img.loading` support get `loading="lazy"` on every
//! image. Others get the lazysizes polyfill script appended to `<body>`;
//! whether that script loads is not checked.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// How to obtain lazy image loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyStrategy {
    /// Mark images with `loading="lazy"`.
    Native,
    /// Inject the polyfill script.
    Polyfill,
}

impl LazyStrategy {
    #[must_use]
    pub fn choose(native_supported: bool) -> Self {
        if native_supported { Self::Native } else { Self::Polyfill }
    }
}

/// `"loading" in HTMLImageElement.prototype`.
#[cfg(feature = "hydrate")]
fn native_supported(window: &web_sys::Window) -> Result<bool, crate::error::PageError> {
    use wasm_bindgen::JsValue;

    let ctor = js_sys::Reflect::get(window, &JsValue::from_str("HTMLImageElement"))?;
    if ctor.is_undefined() {
        return Ok(false);
    }
    let prototype = js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype"))?;
    js_sys::Reflect::has(&prototype, &JsValue::from_str("loading")).map_err(Into::into)
}

#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    let window = crate::dom::window()?;
    match LazyStrategy::choose(native_supported(&window)?) {
        LazyStrategy::Native => {
            let images = crate::dom::query_all::<web_sys::HtmlImageElement>(&ctx.document, "img")?;
            for image in &images {
                image.set_attribute("loading", "lazy")?;
            }
            log::debug!("native lazy loading on {} images", images.len());
        }
        LazyStrategy::Polyfill => {
            use wasm_bindgen::JsCast;

            let script = ctx
                .document
                .create_element("script")?
                .dyn_into::<web_sys::HtmlScriptElement>()
                .map_err(|el| crate::error::PageError::Js(format!("{el:?} is not a script element")))?;
            script.set_src(&ctx.config.lazy_fallback_url);
            crate::dom::body(&ctx.document)?.append_child(&script)?;
            log::debug!("lazy loading polyfill injected");
        }
    }
    Ok(())
}
