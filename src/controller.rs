//! Page controller: owns the shared context and installs every behavior.
//!
//! DESIGN
//! ======
//! Behaviors share nothing but the [`PageContext`]: the config, the
//! scheduler and the preference store (plus the document in the browser).
//! Each installer runs in isolation; a failure is logged and recorded, and
//! the remaining behaviors are still installed.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::scheduler::Scheduler;
use crate::theme::{PreferenceStore, ThemeManager};

/// Independently installable page behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Preloader,
    Theme,
    ThemeToggle,
    Ripple,
    SmoothScroll,
    Reveal,
    Footer,
    KeyboardNav,
    ImageFallback,
    LazyLoad,
    OverflowLock,
}

impl Behavior {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Preloader => "preloader",
            Self::Theme => "theme",
            Self::ThemeToggle => "theme-toggle",
            Self::Ripple => "ripple",
            Self::SmoothScroll => "smooth-scroll",
            Self::Reveal => "reveal",
            Self::Footer => "footer",
            Self::KeyboardNav => "keyboard-nav",
            Self::ImageFallback => "image-fallback",
            Self::LazyLoad => "lazy-load",
            Self::OverflowLock => "overflow-lock",
        }
    }
}

/// Order in which `PageController::install` runs the behaviors.
pub const INSTALL_ORDER: [Behavior; 11] = [
    Behavior::Preloader,
    Behavior::Theme,
    Behavior::ThemeToggle,
    Behavior::Ripple,
    Behavior::SmoothScroll,
    Behavior::Reveal,
    Behavior::Footer,
    Behavior::KeyboardNav,
    Behavior::LazyLoad,
    Behavior::ImageFallback,
    Behavior::OverflowLock,
];

/// Shared state threaded through every installer.
pub struct PageContext {
    pub config: PageConfig,
    pub scheduler: Rc<dyn Scheduler>,
    pub store: Rc<dyn PreferenceStore>,
    #[cfg(feature = "hydrate")]
    pub document: web_sys::Document,
}

impl PageContext {
    /// Theme manager over this context's store and key.
    #[must_use]
    pub fn theme_manager(&self) -> ThemeManager {
        ThemeManager::new(Rc::clone(&self.store), self.config.theme_key.clone())
    }
}

/// Installer signature shared by all behaviors.
pub type Installer = fn(&PageContext) -> Result<(), PageError>;

/// Outcome of installing a set of behaviors.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub installed: Vec<Behavior>,
    pub failed: Vec<(Behavior, String)>,
}

impl InstallReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every installer, continuing past failures.
pub fn run_isolated(ctx: &PageContext, steps: &[(Behavior, Installer)]) -> InstallReport {
    let mut report = InstallReport::default();
    for (behavior, install) in steps {
        match install(ctx) {
            Ok(()) => {
                log::debug!("{} installed", behavior.name());
                report.installed.push(*behavior);
            }
            Err(err) => {
                log::warn!("{} not installed: {err}", behavior.name());
                report.failed.push((*behavior, err.to_string()));
            }
        }
    }
    report
}

pub struct PageController {
    ctx: PageContext,
}

impl PageController {
    #[must_use]
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    /// Build a controller over the live page: `localStorage`, `setTimeout`,
    /// and the inline config block if present.
    #[cfg(feature = "hydrate")]
    pub fn from_page() -> Result<Self, PageError> {
        let document = crate::dom::document()?;
        Ok(Self::new(PageContext {
            config: PageConfig::from_page(&document),
            scheduler: Rc::new(crate::scheduler::TimeoutScheduler),
            store: Rc::new(crate::theme::LocalStore),
            document,
        }))
    }

    /// Install every behavior on the page.
    #[cfg(feature = "hydrate")]
    pub fn install(&self) -> InstallReport {
        run_isolated(&self.ctx, &INSTALL_ORDER.map(|behavior| (behavior, installer(behavior))))
    }
}

#[cfg(feature = "hydrate")]
fn installer(behavior: Behavior) -> Installer {
    match behavior {
        Behavior::Preloader => crate::preloader::install,
        Behavior::Theme => crate::theme::install,
        Behavior::ThemeToggle => crate::theme::install_toggle,
        Behavior::Ripple => crate::ripple::install,
        Behavior::SmoothScroll => crate::scroll::install,
        Behavior::Reveal => crate::reveal::install,
        Behavior::Footer => crate::footer::install,
        Behavior::KeyboardNav => crate::roving::install,
        Behavior::LazyLoad => crate::lazy::install,
        Behavior::ImageFallback => crate::fallback::install,
        Behavior::OverflowLock => crate::extras::lock_horizontal_overflow,
    }
}
