//! Scroll-reveal for social links.
//!
//! Elements start hidden by CSS (faded, shifted down). When enough of one
//! enters the viewport it is made opaque and moved into place. Reveals are
//! monotonic: leaving the viewport never hides an element again. The
//! observer stays attached; later reports for a revealed element are no-ops.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};

/// Inline style applied to a revealed element.
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Intersection trigger parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction required to trigger.
    pub threshold: f64,
    /// Pixels removed from the bottom of the trigger region.
    pub bottom_margin_px: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX }
    }
}

impl RevealOptions {
    /// CSS margin string for the observer root.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// Per-element reveal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealState {
    /// Feed an intersection report. Returns true only on the transition to
    /// revealed; exits are ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == Self::Unrevealed {
            *self = Self::Revealed;
            return true;
        }
        false
    }
}

/// Observe every social link and reveal it on first intersection.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::consts::SOCIAL_LINK_SELECTOR;

    let links = crate::dom::query_all::<web_sys::HtmlElement>(&ctx.document, SOCIAL_LINK_SELECTOR)?;
    let observed = links.clone();
    let mut states = vec![RevealState::default(); links.len()];

    let options = ctx.config.reveal_options();
    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(idx) = observed.iter().position(|link| **link == target) else {
                    continue;
                };
                if states[idx].observe(entry.is_intersecting()) {
                    for (property, value) in REVEALED_STYLE {
                        crate::dom::set_style(&observed[idx], property, value);
                    }
                }
            }
        },
    );
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for link in &links {
        observer.observe(link);
    }
    log::debug!("reveal observing {} links", links.len());
    Ok(())
}
