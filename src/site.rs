//! Composition root: one controller per feature, built from the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser shell collects a [`Page`] of optional elements, samples the
//! [`Environment`] once, and hands both here. Each feature checks its own
//! elements, so a missing piece of markup disables exactly one feature and
//! nothing else. After [`Site::start`] the shell only routes events to the
//! public controller fields.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::SiteConfig;
use crate::dom::{DomNode, EmailForm, Lookup, VisibilityWatcher};
use crate::footer::stamp_year;
use crate::form::FormValidator;
use crate::hash_focus::HashFocus;
use crate::menu::MenuController;
use crate::reveal::{RevealController, RevealMode};
use crate::store::{PreferenceStore, StorageBackend};
use crate::theme::ThemeController;

/// Elements the site attaches to. Everything except `root` is optional.
pub struct Page<N, F> {
    pub root: N,
    pub theme_toggles: Vec<N>,
    pub menu_trigger: Option<N>,
    pub menu_panel: Option<N>,
    pub year_slot: Option<N>,
    pub form: Option<F>,
    pub form_status: Option<N>,
    pub reveal: Vec<N>,
}

/// System signals sampled once at start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub reduce_motion: bool,
    pub year: i32,
    /// Fragment at load time, including the leading `#` if any.
    pub hash: String,
}

/// What [`Site::start`] ended up enabling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReport {
    pub menu: bool,
    pub theme_toggles: usize,
    pub year: bool,
    pub form: bool,
    pub reveal: RevealMode,
    pub reveal_elements: usize,
    pub initial_focus: bool,
}

pub struct Site<N, F, B, L> {
    pub theme: ThemeController<N, B>,
    pub menu: MenuController<N>,
    pub reveal: RevealController<N>,
    pub form: Option<FormValidator<F, N>>,
    pub hash_focus: HashFocus<L>,
    year_slot: Option<N>,
}

impl<N, F, B, L> Site<N, F, B, L>
where
    N: DomNode,
    F: EmailForm,
    B: StorageBackend,
    L: Lookup<N>,
{
    pub fn new(page: Page<N, F>, config: &SiteConfig, backend: B, lookup: L) -> Self {
        let store = PreferenceStore::new(backend, config.theme_key.clone());
        let form = match (page.form, page.form_status) {
            (Some(form), Some(status)) => Some(FormValidator::new(form, status, config.submit_policy)),
            (Some(_), None) => {
                log::debug!("form found without status slot #{}; validation disabled", config.form_status_id);
                None
            }
            _ => None,
        };
        Self {
            theme: ThemeController::new(page.root, page.theme_toggles, store),
            menu: MenuController::new(page.menu_trigger, page.menu_panel),
            reveal: RevealController::new(page.reveal, config.visible_class.clone()),
            form,
            hash_focus: HashFocus::new(lookup),
            year_slot: page.year_slot,
        }
    }

    /// Run every feature's one-time setup.
    ///
    /// Order: year, theme, menu, reveal, initial fragment focus. Each step is
    /// independent; none can stop the ones after it.
    pub fn start<W: VisibilityWatcher<N>>(&mut self, env: &Environment, watcher: &mut W) -> StartReport {
        if let Some(slot) = &self.year_slot {
            stamp_year(slot, env.year);
        }

        self.theme.initialize();

        // Markup may ship the panel open for no-script visitors.
        let menu = self.menu.toggle(Some(false)).is_some();

        let reveal = self.reveal.install(env.reduce_motion, watcher);
        let initial_focus = self.hash_focus.on_hash_change::<N>(&env.hash);

        let report = StartReport {
            menu,
            theme_toggles: self.theme.toggles().len(),
            year: self.year_slot.is_some(),
            form: self.form.is_some(),
            reveal,
            reveal_elements: self.reveal.len(),
            initial_focus,
        };
        log::info!("site started: {report:?}");
        report
    }
}
