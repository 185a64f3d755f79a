//! Footer year stamp.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use crate::dom::DomNode;

/// Write `year` into the footer slot.
pub fn stamp_year<N: DomNode>(slot: &N, year: i32) {
    slot.write_text(&year.to_string());
}
