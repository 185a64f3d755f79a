//! Capability traits between the controllers and the page.
//!
//! Controllers never look elements up on their own. They are handed values
//! implementing these traits, which the browser shell backs with `web-sys`
//! types and tests back with in-memory fakes. Every method is infallible from
//! the caller's point of view: implementations log and swallow host errors.

/// A single page element.
pub trait DomNode {
    /// Current value of attribute `name`, if present.
    fn read_attr(&self, name: &str) -> Option<String>;

    /// Set attribute `name` to `value`, creating it if needed.
    fn write_attr(&self, name: &str, value: &str);

    /// Remove attribute `name` if present.
    fn clear_attr(&self, name: &str);

    /// Whether attribute `name` is present (with any value).
    fn has_attr(&self, name: &str) -> bool {
        self.read_attr(name).is_some()
    }

    /// Add `class` to the element's class list.
    fn add_class(&self, class: &str);

    /// Whether the element's class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Replace the element's text content.
    fn write_text(&self, text: &str);

    /// Set an inline style property.
    fn write_style(&self, property: &str, value: &str);

    /// Whether `other` is this element or one of its descendants.
    fn encloses(&self, other: &Self) -> bool;

    /// Whether `other` refers to the same element.
    fn is_same(&self, other: &Self) -> bool;

    /// Move input focus here without scrolling the viewport.
    fn focus_in_place(&self);
}

/// A form carrying an email field.
pub trait EmailForm {
    /// Raw value of the email field, or `None` when the form has no such field.
    fn email_value(&self) -> Option<String>;

    /// Restore every field to its initial value.
    fn reset(&self);
}

/// Element lookup by identifier.
pub trait Lookup<N> {
    fn element_by_id(&self, id: &str) -> Option<N>;
}

/// Source of viewport-intersection events.
///
/// Registered nodes are later reported back through
/// [`crate::reveal::RevealController::on_intersections`].
pub trait VisibilityWatcher<N> {
    fn observe(&mut self, node: &N);
    fn unobserve(&mut self, node: &N);
}
