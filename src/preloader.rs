//! Preloader sequencing.
//!
//! After `load`, the overlay stays fully visible for a minimum time, fades
//! out, and is then hidden while the main content is shown:
//!
//! ```text
//! Loading --(min_display_ms)--> FadingOut --(fade_ms)--> Hidden
//! ```
//!
//! The sequence runs exactly once and cannot be cancelled. DOM effects go
//! through [`PreloaderSurface`] so the sequence is testable on a virtual
//! clock.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::{PRELOADER_FADE_MS, PRELOADER_MIN_DISPLAY_MS};
use crate::scheduler::Scheduler;

/// Visibility phase of the preloader overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
    /// Overlay fully visible.
    #[default]
    Loading,
    /// Fade transition applied.
    FadingOut,
    /// Overlay hidden and main content shown.
    Hidden,
}

/// Delays for the two preloader stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloaderTiming {
    pub min_display_ms: u32,
    pub fade_ms: u32,
}

impl Default for PreloaderTiming {
    fn default() -> Self {
        Self { min_display_ms: PRELOADER_MIN_DISPLAY_MS, fade_ms: PRELOADER_FADE_MS }
    }
}

impl PreloaderTiming {
    /// Earliest time after `load` at which the overlay is hidden.
    #[must_use]
    pub fn total_ms(self) -> u32 {
        self.min_display_ms.saturating_add(self.fade_ms)
    }
}

/// When the sequence should start, given `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadHook {
    /// `load` already fired; start right away.
    StartNow,
    /// Wait for the window `load` event.
    AwaitLoad,
}

impl LoadHook {
    /// Decide from the raw `readyState` string. Only `"complete"` means
    /// `load` has fired; `"loading"`, `"interactive"` and anything unknown
    /// wait for the event.
    #[must_use]
    pub fn from_ready_state(ready_state: &str) -> Self {
        if ready_state == "complete" { Self::StartNow } else { Self::AwaitLoad }
    }
}

/// DOM effects performed by the sequence.
pub trait PreloaderSurface {
    /// Start the fade transition on the overlay.
    fn begin_fade(&self);
    /// Remove the overlay from layout.
    fn hide_overlay(&self);
    /// Reveal the main page content.
    fn show_content(&self);
}

/// Handle to a running preloader sequence.
#[derive(Clone, Debug, Default)]
pub struct Preloader {
    phase: Rc<Cell<PreloaderPhase>>,
}

impl Preloader {
    /// Start the sequence. Call once, when the page has finished loading.
    pub fn start<P>(scheduler: Rc<dyn Scheduler>, surface: P, timing: PreloaderTiming) -> Self
    where
        P: PreloaderSurface + 'static,
    {
        let phase = Rc::new(Cell::new(PreloaderPhase::Loading));
        let surface = Rc::new(surface);

        let phase_fade = Rc::clone(&phase);
        let inner_scheduler = Rc::clone(&scheduler);
        scheduler.schedule(
            timing.min_display_ms,
            Box::new(move || {
                surface.begin_fade();
                phase_fade.set(PreloaderPhase::FadingOut);
                log::debug!("preloader fading out");

                let phase_hide = Rc::clone(&phase_fade);
                inner_scheduler.schedule(
                    timing.fade_ms,
                    Box::new(move || {
                        surface.hide_overlay();
                        surface.show_content();
                        phase_hide.set(PreloaderPhase::Hidden);
                        log::debug!("preloader hidden");
                    }),
                );
            }),
        );

        Self { phase }
    }

    #[must_use]
    pub fn phase(&self) -> PreloaderPhase {
        self.phase.get()
    }
}

/// Preloader surface over the live page. Missing elements turn the
/// corresponding step into a logged no-op.
#[cfg(feature = "hydrate")]
pub struct DomPreloader {
    overlay: Option<web_sys::HtmlElement>,
    content: Option<web_sys::Element>,
}

#[cfg(feature = "hydrate")]
impl DomPreloader {
    pub fn from_document(document: &web_sys::Document) -> Self {
        use wasm_bindgen::JsCast;

        use crate::consts::{MAIN_CONTENT_ID, PRELOADER_ID};

        let overlay = document
            .get_element_by_id(PRELOADER_ID)
            .and_then(|el| el.dyn_ref::<web_sys::HtmlElement>().cloned());
        let content = document.get_element_by_id(MAIN_CONTENT_ID);
        if overlay.is_none() {
            log::warn!("preloader: #{PRELOADER_ID} not found");
        }
        if content.is_none() {
            log::warn!("preloader: #{MAIN_CONTENT_ID} not found");
        }
        Self { overlay, content }
    }
}

#[cfg(feature = "hydrate")]
impl PreloaderSurface for DomPreloader {
    fn begin_fade(&self) {
        if let Some(overlay) = &self.overlay {
            crate::dom::add_class(overlay, crate::consts::FADE_OUT_CLASS);
        }
    }

    fn hide_overlay(&self) {
        if let Some(overlay) = &self.overlay {
            crate::dom::set_style(overlay, "display", "none");
        }
    }

    fn show_content(&self) {
        if let Some(content) = &self.content {
            crate::dom::add_class(content, crate::consts::SHOW_CLASS);
        }
    }
}

/// Start the preloader sequence on window `load`, or right away when the
/// page finished loading before this module initialized.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    let timing = ctx.config.preloader_timing();
    if LoadHook::from_ready_state(&ctx.document.ready_state()) == LoadHook::StartNow {
        Preloader::start(Rc::clone(&ctx.scheduler), DomPreloader::from_document(&ctx.document), timing);
        return Ok(());
    }

    let window = crate::dom::window()?;
    let document = ctx.document.clone();
    let scheduler = Rc::clone(&ctx.scheduler);
    crate::dom::listen_once(&window, "load", move |_ev: web_sys::Event| {
        Preloader::start(Rc::clone(&scheduler), DomPreloader::from_document(&document), timing);
    })
}
