//! Click ripple on social links.
//!
//! Each click spawns an independent circle centered on the pointer and sized
//! to the link's larger side. Every ripple is detached after its lifetime
//! whether or not more clicks happened; overlapping ripples are fine.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use std::rc::Rc;

use crate::scheduler::Scheduler;

/// Bounding box in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and offset of a ripple inside its host, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Place a ripple so its center lands on the click point.
    #[must_use]
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// `(property, value)` pairs for the ripple element's inline style.
    #[must_use]
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.size)),
            ("height", px(self.size)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Element that can show ripples.
pub trait RippleHost {
    type Node: 'static;

    /// Create and append a ripple. `None` if the element could not be made.
    fn attach(&self, geometry: &RippleGeometry) -> Option<Self::Node>;

    /// Remove a ripple. Must tolerate an already-detached node.
    fn detach(node: &Self::Node);
}

/// Attach a ripple to `host` and schedule its removal. Returns whether a
/// ripple was created.
pub fn spawn<H: RippleHost + 'static>(host: &H, scheduler: &Rc<dyn Scheduler>, geometry: RippleGeometry, lifetime_ms: u32) -> bool {
    let Some(node) = host.attach(&geometry) else {
        return false;
    };
    scheduler.schedule(lifetime_ms, Box::new(move || H::detach(&node)));
    true
}

/// Ripple host over a live link element.
#[cfg(feature = "hydrate")]
pub struct LinkRipple {
    pub document: web_sys::Document,
    pub link: web_sys::HtmlElement,
}

#[cfg(feature = "hydrate")]
impl RippleHost for LinkRipple {
    type Node = web_sys::HtmlElement;

    fn attach(&self, geometry: &RippleGeometry) -> Option<Self::Node> {
        use wasm_bindgen::JsCast;

        let ripple = match self.document.create_element("span") {
            Ok(el) => el.dyn_ref::<web_sys::HtmlElement>().cloned()?,
            Err(err) => {
                log::warn!("ripple: create_element failed: {err:?}");
                return None;
            }
        };
        for (property, value) in geometry.style() {
            crate::dom::set_style(&ripple, property, &value);
        }
        crate::dom::add_class(&ripple, crate::consts::RIPPLE_CLASS);
        if let Err(err) = self.link.append_child(&ripple) {
            log::warn!("ripple: append failed: {err:?}");
            return None;
        }
        Some(ripple)
    }

    fn detach(node: &Self::Node) {
        node.remove();
    }
}

/// Wire ripples onto every social link.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use crate::consts::SOCIAL_LINK_SELECTOR;

    let links = crate::dom::query_all::<web_sys::HtmlElement>(&ctx.document, SOCIAL_LINK_SELECTOR)?;
    for link in links {
        let host = LinkRipple { document: ctx.document.clone(), link: link.clone() };
        let scheduler = Rc::clone(&ctx.scheduler);
        let lifetime_ms = ctx.config.ripple_ms;
        crate::dom::listen(&link, "click", move |ev: web_sys::MouseEvent| {
            let bounds = host.link.get_bounding_client_rect();
            let rect = Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() };
            let geometry = RippleGeometry::from_click(rect, f64::from(ev.client_x()), f64::from(ev.client_y()));
            spawn(&host, &scheduler, geometry, lifetime_ms);
        })?;
    }
    Ok(())
}
