//! Mobile navigation menu: a two-state machine held entirely in the DOM.
//!
//! The panel's `hidden` attribute is the state; the trigger's
//! `aria-expanded` mirrors it after every transition. If either element is
//! missing from the markup the whole feature is inert.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{CANCEL_KEY, EXPANDED_ATTR, HIDDEN_ATTR};
use crate::dom::DomNode;

pub struct MenuController<N> {
    trigger: Option<N>,
    panel: Option<N>,
}

impl<N: DomNode> MenuController<N> {
    pub fn new(trigger: Option<N>, panel: Option<N>) -> Self {
        Self { trigger, panel }
    }

    fn parts(&self) -> Option<(&N, &N)> {
        Some((self.trigger.as_ref()?, self.panel.as_ref()?))
    }

    /// Whether both elements are present.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.parts().is_some()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.parts().is_some_and(|(_, panel)| !panel.has_attr(HIDDEN_ATTR))
    }

    /// Open iff `open` is `Some(true)`, close on `Some(false)`, flip on `None`.
    ///
    /// Returns the resulting state, or `None` when the menu is disabled.
    pub fn toggle(&self, open: Option<bool>) -> Option<bool> {
        let (trigger, panel) = self.parts()?;
        let will_open = open.unwrap_or_else(|| panel.has_attr(HIDDEN_ATTR));
        trigger.write_attr(EXPANDED_ATTR, if will_open { "true" } else { "false" });
        if will_open {
            panel.clear_attr(HIDDEN_ATTR);
        } else {
            panel.write_attr(HIDDEN_ATTR, "");
        }
        Some(will_open)
    }

    pub fn on_trigger_click(&self) {
        self.toggle(None);
    }

    /// Close on the cancel key. Other keys, or a closed menu, do nothing.
    pub fn on_key_down(&self, key: &str) {
        if key == CANCEL_KEY && self.is_open() {
            self.toggle(Some(false));
        }
    }

    /// Close when a click lands outside both the panel and the trigger.
    ///
    /// `target` is `None` when the click did not hit an element; that counts
    /// as outside.
    pub fn on_document_click(&self, target: Option<&N>) {
        let Some((trigger, panel)) = self.parts() else {
            return;
        };
        if !self.is_open() {
            return;
        }
        let inside = target.is_some_and(|t| panel.encloses(t) || trigger.encloses(t));
        if !inside {
            self.toggle(Some(false));
        }
    }
}
