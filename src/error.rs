//! Error type shared by every page behavior.
//!
//! DESIGN
//! ======
//! Wiring a behavior can fail when the page is missing an element or a
//! browser API rejects a call. None of these are fatal: the controller logs
//! the error and keeps installing the remaining behaviors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned while wiring or running a page behavior.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No global `window` object (not running in a browser page).
    #[error("window is not available")]
    NoWindow,
    /// The window has no `document`.
    #[error("document is not available")]
    NoDocument,
    /// A required element is absent from the page.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The inline page configuration could not be parsed.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
