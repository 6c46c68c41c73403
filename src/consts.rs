//! Shared constants: timings, selectors, and fixed page text.

// ── Timing (milliseconds) ───────────────────────────────────────

/// Minimum time the preloader stays fully visible after `load`.
pub const PRELOADER_MIN_DISPLAY_MS: u32 = 2000;

/// Length of the preloader fade; matches the CSS transition.
pub const PRELOADER_FADE_MS: u32 = 600;

/// Lifetime of a ripple element; matches the CSS animation.
pub const RIPPLE_LIFETIME_MS: u32 = 700;

/// Duration of the theme toggle's scale-down bounce.
pub const THEME_BOUNCE_MS: u32 = 150;

// ── Scroll reveal ───────────────────────────────────────────────

/// Visible fraction at which an observed element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Pixels trimmed from the bottom of the viewport's trigger region.
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 80;

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Page structure ──────────────────────────────────────────────

pub const PRELOADER_ID: &str = "preloader";
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const THEME_SWITCH_ID: &str = "theme-switch";
pub const PAGE_CONFIG_ID: &str = "page-config";
pub const FOOTER_TEXT_SELECTOR: &str = ".footer p";
pub const SOCIAL_LINK_SELECTOR: &str = ".social-link";
pub const PRELOADER_IMAGE_SELECTOR: &str = ".preloader-image";
pub const PROFILE_IMAGE_SELECTOR: &str = ".profile-image";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// ── Classes ─────────────────────────────────────────────────────

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const FADE_OUT_CLASS: &str = "fade-out";
pub const SHOW_CLASS: &str = "show";
pub const RIPPLE_CLASS: &str = "ripple";

// ── Text ────────────────────────────────────────────────────────

/// Name rendered in the footer attribution.
pub const OWNER_NAME: &str = "Augustine Lysander Robin";

/// Media query for the operating system's dark-mode setting.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Lazy-loading polyfill injected when `img.loading` is unsupported.
pub const LAZYSIZES_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/lazysizes/5.3.2/lazysizes.min.js";
