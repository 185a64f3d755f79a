//! Scroll reveal: a one-shot `Pending -> Visible` latch per tagged element.
//!
//! The controller does not know how visibility is detected. It registers its
//! pending elements with a [`VisibilityWatcher`] and is fed intersection
//! reports back through [`RevealController::on_intersections`]. An element
//! that intersects is marked with the visible class and unregistered in the
//! same step; later reports for it are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::dom::{DomNode, VisibilityWatcher};

/// Per-element latch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Visible,
}

/// How the controller was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Everything was shown at once; no watcher registrations.
    Immediate,
    /// Elements are waiting on intersection reports.
    Observed,
}

/// One report from the watcher.
#[derive(Debug, Clone)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

pub struct RevealController<N> {
    items: Vec<(N, RevealState)>,
    visible_class: String,
}

impl<N: DomNode> RevealController<N> {
    pub fn new(nodes: Vec<N>, visible_class: impl Into<String>) -> Self {
        let items = nodes.into_iter().map(|node| (node, RevealState::Pending)).collect();
        Self { items, visible_class: visible_class.into() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.items.iter().filter(|(_, state)| *state == RevealState::Pending).count()
    }

    /// Latch state of `node`, or `None` if it is not tracked.
    #[must_use]
    pub fn state_of(&self, node: &N) -> Option<RevealState> {
        self.items.iter().find(|(n, _)| n.is_same(node)).map(|(_, state)| *state)
    }

    /// Start revealing. With `reduce_motion` every element is shown now and
    /// `watcher` is never touched; otherwise each pending element is
    /// registered with it.
    pub fn install<W: VisibilityWatcher<N>>(&mut self, reduce_motion: bool, watcher: &mut W) -> RevealMode {
        if reduce_motion {
            for (node, state) in &mut self.items {
                node.add_class(&self.visible_class);
                *state = RevealState::Visible;
            }
            log::debug!("reduced motion: revealed {} elements immediately", self.items.len());
            return RevealMode::Immediate;
        }
        for (node, state) in &self.items {
            if *state == RevealState::Pending {
                watcher.observe(node);
            }
        }
        RevealMode::Observed
    }

    /// Handle one batch of intersection reports, in delivery order.
    ///
    /// Returns how many elements were revealed by this batch.
    pub fn on_intersections<W: VisibilityWatcher<N>>(
        &mut self,
        entries: &[Intersection<N>],
        watcher: &mut W,
    ) -> usize {
        let mut revealed = 0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some((node, state)) = self.items.iter_mut().find(|(n, _)| n.is_same(&entry.target)) else {
                continue;
            };
            if *state == RevealState::Visible {
                continue;
            }
            node.add_class(&self.visible_class);
            *state = RevealState::Visible;
            watcher.unobserve(node);
            revealed += 1;
        }
        revealed
    }
}
