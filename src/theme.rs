//! Light/dark theme on the document root.
//!
//! The mode lives in the root element's `data-theme` attribute. Every theme
//! toggle control mirrors it through `aria-pressed`, which is `"true"` only
//! in dark mode. Updates are broadcast to all toggles at once, so desktop and
//! mobile variants never drift apart.
//!
//! TRADE-OFFS
//! ==========
//! An absent attribute means "follow the system scheme" and is left to CSS.
//! Clicking a toggle always produces an explicit mode; there is no way back
//! to "unset" short of clearing storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{PRESSED_ATTR, THEME_ATTR};
use crate::dom::DomNode;
use crate::store::{PreferenceStore, StorageBackend};

/// An explicit theme mode. "Unset" is modeled as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Mode a toggle click moves to from `current`.
    #[must_use]
    pub fn next(current: Option<Self>) -> Self {
        match current {
            Some(Self::Dark) => Self::Light,
            Some(Self::Light) | None => Self::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0:?}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownThemeMode(other.to_owned())),
        }
    }
}

pub struct ThemeController<N, B> {
    root: N,
    toggles: Vec<N>,
    store: PreferenceStore<B>,
}

impl<N: DomNode, B: StorageBackend> ThemeController<N, B> {
    pub fn new(root: N, toggles: Vec<N>, store: PreferenceStore<B>) -> Self {
        Self { root, toggles, store }
    }

    #[must_use]
    pub fn toggles(&self) -> &[N] {
        &self.toggles
    }

    /// Mode currently shown on the root element.
    ///
    /// An attribute value other than `light`/`dark` reads as unset.
    #[must_use]
    pub fn current(&self) -> Option<ThemeMode> {
        let value = self.root.read_attr(THEME_ATTR)?;
        match value.parse() {
            Ok(mode) => Some(mode),
            Err(UnknownThemeMode(_)) => None,
        }
    }

    /// Reflect `mode` on the root and every toggle.
    pub fn apply(&self, mode: Option<ThemeMode>) {
        match mode {
            Some(mode) => self.root.write_attr(THEME_ATTR, mode.as_str()),
            None => self.root.clear_attr(THEME_ATTR),
        }
        let pressed = if mode == Some(ThemeMode::Dark) { "true" } else { "false" };
        for toggle in &self.toggles {
            toggle.write_attr(PRESSED_ATTR, pressed);
        }
    }

    /// Apply the stored preference, if any. Without one the root is left
    /// untouched so the system scheme wins.
    pub fn initialize(&self) -> Option<ThemeMode> {
        let stored = self.store.get()?;
        match stored.parse::<ThemeMode>() {
            Ok(mode) => {
                self.apply(Some(mode));
                Some(mode)
            }
            Err(err) => {
                log::debug!("ignoring stored theme: {err}");
                None
            }
        }
    }

    /// Flip to the opposite mode, apply it, and persist it.
    pub fn on_toggle_clicked(&self) -> ThemeMode {
        let next = ThemeMode::next(self.current());
        self.apply(Some(next));
        self.store.set(next.as_str());
        log::debug!("theme switched to {next}");
        next
    }
}
