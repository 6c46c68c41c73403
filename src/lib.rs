//! # portfolio-page
//!
//! Client-side behavior for a static portfolio landing page, compiled to
//! WebAssembly. The page works without it; this crate adds the preloader
//! sequence, the persisted light/dark theme, click ripples, smooth anchor
//! scrolling, scroll-reveal, the footer year, keyboard navigation across the
//! social links, image-load fallbacks and lazy image loading.
//!
//! Pure decision logic compiles everywhere and is unit tested natively.
//! Browser wiring is behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Shared context and isolated installation of behaviors |
//! | [`preloader`] | `Loading -> FadingOut -> Hidden` overlay sequence |
//! | [`theme`] | Theme state, preference store, system-change handling |
//! | [`ripple`] | Click ripple geometry and lifetime |
//! | [`scroll`] | In-page anchor smooth scrolling |
//! | [`reveal`] | Scroll-reveal trigger state |
//! | [`footer`] | Footer attribution line |
//! | [`roving`] | Arrow-key roving focus |
//! | [`fallback`] | Broken-image recovery |
//! | [`lazy`] | Native lazy loading or polyfill injection |
//! | [`extras`] | Console greeting and overflow lock |
//! | [`scheduler`] | Timer abstraction and virtual clock |
//! | [`config`] | Page configuration with defaults |
//! | [`consts`] | Timings, selectors, and fixed text |

pub mod config;
pub mod consts;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod extras;
pub mod fallback;
pub mod footer;
pub mod lazy;
pub mod preloader;
pub mod reveal;
pub mod ripple;
pub mod roving;
pub mod scheduler;
pub mod scroll;
pub mod theme;

pub use controller::{PageContext, PageController};
pub use error::PageError;

/// WASM entry point: install logging, greet, and wire the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!("logger init failed: {err}")));
    }
    extras::print_greeting();

    match PageController::from_page() {
        Ok(controller) => {
            let report = controller.install();
            log::info!(
                "page ready: {} behaviors installed, {} failed",
                report.installed.len(),
                report.failed.len()
            );
        }
        Err(err) => log::warn!("page behaviors unavailable: {err}"),
    }
}
