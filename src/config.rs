//! Site configuration: which elements to attach to and how to behave.
//!
//! Every field has a default matching the stock markup, so an empty JSON
//! object (or no config at all) wires the standard page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_FORM_ID, DEFAULT_FORM_STATUS_ID, DEFAULT_MENU_BUTTON_ID, DEFAULT_MENU_PANEL_ID, DEFAULT_REVEAL_CLASS,
    DEFAULT_REVEAL_THRESHOLD, DEFAULT_THEME_KEY, DEFAULT_THEME_TOGGLE_ID, DEFAULT_VISIBLE_CLASS, DEFAULT_YEAR_ID,
};
use crate::form::SubmitPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub menu_button_id: String,
    pub menu_panel_id: String,
    /// All theme toggle controls; missing ids are skipped.
    pub theme_toggle_ids: Vec<String>,
    pub year_id: String,
    pub form_id: String,
    pub form_status_id: String,
    pub reveal_class: String,
    pub visible_class: String,
    pub theme_key: String,
    pub reveal_threshold: f64,
    pub submit_policy: SubmitPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_button_id: DEFAULT_MENU_BUTTON_ID.to_owned(),
            menu_panel_id: DEFAULT_MENU_PANEL_ID.to_owned(),
            theme_toggle_ids: vec![DEFAULT_THEME_TOGGLE_ID.to_owned()],
            year_id: DEFAULT_YEAR_ID.to_owned(),
            form_id: DEFAULT_FORM_ID.to_owned(),
            form_status_id: DEFAULT_FORM_STATUS_ID.to_owned(),
            reveal_class: DEFAULT_REVEAL_CLASS.to_owned(),
            visible_class: DEFAULT_VISIBLE_CLASS.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            submit_policy: SubmitPolicy::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config. Omitted fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve an optional JSON string; `None` or blank means defaults.
    pub fn from_optional_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        for (name, value) in [
            ("theme_key", &self.theme_key),
            ("reveal_class", &self.reveal_class),
            ("visible_class", &self.visible_class),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
