//! Shared constants: attribute names, messages, and default identifiers.

// ── Attributes and classes ──────────────────────────────────────

/// Attribute on the document root carrying the active theme mode.
pub const THEME_ATTR: &str = "data-theme";

/// Pressed-state attribute on theme toggle controls.
pub const PRESSED_ATTR: &str = "aria-pressed";

/// Expanded-state attribute on the menu trigger.
pub const EXPANDED_ATTR: &str = "aria-expanded";

/// Marker attribute that hides the menu panel.
pub const HIDDEN_ATTR: &str = "hidden";

/// Attribute that makes an element keyboard-focusable.
pub const TABINDEX_ATTR: &str = "tabindex";

/// Inline style property used for status message coloring.
pub const COLOR_PROPERTY: &str = "color";

// ── Keys ────────────────────────────────────────────────────────

/// Key name (as reported by the browser) that dismisses the menu.
pub const CANCEL_KEY: &str = "Escape";

/// Name of the form field holding the email address.
pub const EMAIL_FIELD: &str = "email";

// ── Messages ────────────────────────────────────────────────────

/// Status text shown when the email field fails validation.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";

/// Status text shown when a submission is accepted.
pub const SENT_MESSAGE: &str = "Message sent! ✅";

/// Status color for a rejected submission.
pub const WARNING_COLOR: &str = "var(--warning)";

/// Status color for an accepted submission.
pub const SUCCESS_COLOR: &str = "var(--success)";

// ── Defaults ────────────────────────────────────────────────────

/// Storage key for the persisted theme preference.
pub const DEFAULT_THEME_KEY: &str = "nebula-theme";

/// Fraction of an element that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;

/// Class marking elements that animate in on scroll.
pub const DEFAULT_REVEAL_CLASS: &str = "reveal";

/// Class added to a reveal element once it has entered the viewport.
pub const DEFAULT_VISIBLE_CLASS: &str = "visible";

pub const DEFAULT_MENU_BUTTON_ID: &str = "menuBtn";
pub const DEFAULT_MENU_PANEL_ID: &str = "mobileMenu";
pub const DEFAULT_THEME_TOGGLE_ID: &str = "themeToggle";
pub const DEFAULT_YEAR_ID: &str = "year";
pub const DEFAULT_FORM_ID: &str = "contactForm";
pub const DEFAULT_FORM_STATUS_ID: &str = "formMsg";

/// Media query for the user's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
