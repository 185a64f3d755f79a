//! Moves keyboard focus to the in-page target named by the URL fragment.
//!
//! Native fragment navigation already scrolls; this only makes sure focus
//! follows, so keyboard and screen-reader users land where the page did.

#[cfg(test)]
#[path = "hash_focus_test.rs"]
mod hash_focus_test;

use crate::consts::TABINDEX_ATTR;
use crate::dom::{DomNode, Lookup};

/// Element id named by `hash`, with or without the leading `#`.
///
/// Returns `None` for an empty fragment.
#[must_use]
pub fn fragment_id(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    if id.is_empty() { None } else { Some(id) }
}

pub struct HashFocus<L> {
    lookup: L,
}

impl<L> HashFocus<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Focus the element named by `hash`. Returns whether focus moved.
    pub fn on_hash_change<N>(&self, hash: &str) -> bool
    where
        L: Lookup<N>,
        N: DomNode,
    {
        let Some(id) = fragment_id(hash) else {
            return false;
        };
        let Some(target) = self.lookup.element_by_id(id) else {
            log::debug!("no element for fragment #{id}");
            return false;
        };
        if !target.has_attr(TABINDEX_ATTR) {
            target.write_attr(TABINDEX_ATTR, "-1");
        }
        target.focus_in_place();
        true
    }
}
