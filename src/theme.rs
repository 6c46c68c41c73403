//! Light/dark theme with a persisted preference.
//!
//! The preference lives under a single storage key as `"light"` or
//! `"dark"`. An absent key means the user never chose, so the page starts
//! light and follows live operating-system theme changes. Once the user
//! toggles, the stored value wins and system changes are ignored.
//!
//! TRADE-OFFS
//! ==========
//! Storage is read at every decision point instead of caching the startup
//! value, so a preference written by any call site is seen immediately.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
use std::rc::Rc;

/// Visual theme variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than `"dark"` / `"light"` is
    /// rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// String key-value store for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage`. Reads and writes are best-effort: an unavailable
/// storage (private mode, disabled cookies) behaves as an empty store.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
        }
    }
}

/// Tracks the applied theme and decides how it reacts to user and system
/// events. Applying the theme to the page is the caller's job.
pub struct ThemeManager {
    store: Rc<dyn PreferenceStore>,
    key: String,
    applied: Cell<Theme>,
}

impl ThemeManager {
    pub fn new(store: Rc<dyn PreferenceStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into(), applied: Cell::new(Theme::Light) }
    }

    /// Stored preference, if one was ever written and is valid.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.store.read(&self.key).as_deref().and_then(Theme::parse)
    }

    /// True once a preference has been persisted.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.store.read(&self.key).is_some()
    }

    /// Theme to apply at startup: the stored preference, or light.
    pub fn initialize(&self) -> Theme {
        let theme = self.stored().unwrap_or_default();
        self.applied.set(theme);
        theme
    }

    /// Record a theme applied elsewhere on the page without persisting it.
    pub fn sync(&self, theme: Theme) {
        self.applied.set(theme);
    }

    /// Invert the applied theme and persist it.
    pub fn toggle(&self) -> Theme {
        let next = self.applied.get().toggled();
        self.applied.set(next);
        self.store.write(&self.key, next.as_str());
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    /// React to an operating-system theme change. Returns the theme to apply,
    /// or `None` when a user preference exists and the change is ignored.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_preference() {
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.applied.set(theme);
        Some(theme)
    }

    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied.get()
    }
}

#[cfg(feature = "hydrate")]
fn apply(body: &web_sys::HtmlElement, theme: Theme) {
    use crate::consts::DARK_MODE_CLASS;

    if theme.is_dark() {
        crate::dom::add_class(body, DARK_MODE_CLASS);
    } else {
        crate::dom::remove_class(body, DARK_MODE_CLASS);
    }
}

/// Apply the stored theme and follow operating-system changes. The toggle
/// control is wired separately by [`install_toggle`], so a page without a
/// switch still gets its persisted theme.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use crate::consts::PREFERS_DARK_QUERY;

    let body = crate::dom::body(&ctx.document)?;
    let manager = ctx.theme_manager();
    apply(&body, manager.initialize());

    let window = crate::dom::window()?;
    if let Some(query) = window.match_media(PREFERS_DARK_QUERY)? {
        crate::dom::listen(&query, "change", move |ev: web_sys::MediaQueryListEvent| {
            if let Some(theme) = manager.on_system_change(ev.matches()) {
                apply(&body, theme);
            }
        })?;
    }
    Ok(())
}

/// Wire the toggle control: click flips and persists the theme with a short
/// bounce, Enter/Space activate it from the keyboard.
///
/// The applied theme is read back from the body class at click time, since
/// the system-change listener owns its own manager.
#[cfg(feature = "hydrate")]
pub fn install_toggle(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use crate::consts::{DARK_MODE_CLASS, THEME_SWITCH_ID};

    let switch = crate::dom::by_id(&ctx.document, THEME_SWITCH_ID)?;
    let body = crate::dom::body(&ctx.document)?;
    let manager = ctx.theme_manager();
    {
        let target = switch.clone();
        let scheduler = Rc::clone(&ctx.scheduler);
        let bounce_ms = ctx.config.bounce_ms;
        crate::dom::listen(&switch, "click", move |_ev: web_sys::MouseEvent| {
            let current = if body.class_list().contains(DARK_MODE_CLASS) { Theme::Dark } else { Theme::Light };
            manager.sync(current);
            apply(&body, manager.toggle());
            crate::dom::set_style(&target, "transform", "scale(0.9)");
            let target = target.clone();
            scheduler.schedule(bounce_ms, Box::new(move || crate::dom::set_style(&target, "transform", "")));
        })?;
    }
    {
        let target = switch.clone();
        crate::dom::listen(&switch, "keydown", move |ev: web_sys::KeyboardEvent| {
            if crate::roving::is_activation_key(&ev.key()) {
                ev.prevent_default();
                target.click();
            }
        })?;
    }
    Ok(())
}
