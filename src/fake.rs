//! In-memory stand-ins for the page, used by unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dom::{DomNode, EmailForm, Lookup, VisibilityWatcher};

#[derive(Debug, Default)]
struct NodeData {
    id: String,
    attrs: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    style: BTreeMap<String, String>,
    children: Vec<FakeNode>,
    focus_calls: usize,
}

/// A fake element. Clones are handles to the same element.
#[derive(Debug, Clone)]
pub struct FakeNode {
    data: Rc<RefCell<NodeData>>,
    active: Rc<RefCell<Option<String>>>,
}

impl FakeNode {
    /// An element not attached to any [`FakeDocument`].
    pub fn detached(id: &str) -> Self {
        Self::with_focus_cell(id, Rc::new(RefCell::new(None)))
    }

    fn with_focus_cell(id: &str, active: Rc<RefCell<Option<String>>>) -> Self {
        let data = NodeData { id: id.to_owned(), ..NodeData::default() };
        Self { data: Rc::new(RefCell::new(data)), active }
    }

    pub fn id(&self) -> String {
        self.data.borrow().id.clone()
    }

    pub fn append(&self, child: &FakeNode) {
        self.data.borrow_mut().children.push(child.clone());
    }

    pub fn text(&self) -> String {
        self.data.borrow().text.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.data.borrow().style.get(property).cloned()
    }

    pub fn focus_calls(&self) -> usize {
        self.data.borrow().focus_calls
    }
}

impl DomNode for FakeNode {
    fn read_attr(&self, name: &str) -> Option<String> {
        self.data.borrow().attrs.get(name).cloned()
    }

    fn write_attr(&self, name: &str, value: &str) {
        self.data.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
    }

    fn clear_attr(&self, name: &str) {
        self.data.borrow_mut().attrs.remove(name);
    }

    fn add_class(&self, class: &str) {
        self.data.borrow_mut().classes.insert(class.to_owned());
    }

    fn has_class(&self, class: &str) -> bool {
        self.data.borrow().classes.contains(class)
    }

    fn write_text(&self, text: &str) {
        text.clone_into(&mut self.data.borrow_mut().text);
    }

    fn write_style(&self, property: &str, value: &str) {
        self.data.borrow_mut().style.insert(property.to_owned(), value.to_owned());
    }

    fn encloses(&self, other: &Self) -> bool {
        self.is_same(other) || self.data.borrow().children.iter().any(|child| child.encloses(other))
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    fn focus_in_place(&self) {
        self.data.borrow_mut().focus_calls += 1;
        *self.active.borrow_mut() = Some(self.id());
    }
}

/// A fake document: an id-indexed set of elements sharing one focus cell.
#[derive(Debug, Clone, Default)]
pub struct FakeDocument {
    nodes: Rc<RefCell<Vec<FakeNode>>>,
    active: Rc<RefCell<Option<String>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register an element with identifier `id`.
    pub fn element(&self, id: &str) -> FakeNode {
        let node = FakeNode::with_focus_cell(id, Rc::clone(&self.active));
        self.nodes.borrow_mut().push(node.clone());
        node
    }

    /// Identifier of the focused element, if any.
    pub fn active_id(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    /// Simulate a user moving focus somewhere else.
    pub fn set_active(&self, id: &str) {
        *self.active.borrow_mut() = Some(id.to_owned());
    }
}

impl Lookup<FakeNode> for FakeDocument {
    fn element_by_id(&self, id: &str) -> Option<FakeNode> {
        self.nodes.borrow().iter().find(|node| node.id() == id).cloned()
    }
}

/// A fake form with an optional email field.
#[derive(Debug, Clone, Default)]
pub struct FakeForm {
    email: Rc<RefCell<Option<String>>>,
    resets: Rc<RefCell<usize>>,
}

impl FakeForm {
    pub fn with_email(value: &str) -> Self {
        let form = Self::default();
        form.set_email(value);
        form
    }

    /// A form without any email field.
    pub fn without_email() -> Self {
        Self::default()
    }

    pub fn set_email(&self, value: &str) {
        *self.email.borrow_mut() = Some(value.to_owned());
    }

    pub fn email(&self) -> Option<String> {
        self.email.borrow().clone()
    }

    pub fn resets(&self) -> usize {
        *self.resets.borrow()
    }
}

impl EmailForm for FakeForm {
    fn email_value(&self) -> Option<String> {
        self.email()
    }

    fn reset(&self) {
        if let Some(value) = self.email.borrow_mut().as_mut() {
            value.clear();
        }
        *self.resets.borrow_mut() += 1;
    }
}

/// A fake intersection watcher recording registrations.
#[derive(Debug, Default)]
pub struct FakeWatcher {
    observed: Vec<FakeNode>,
    pub observe_calls: usize,
    pub unobserve_calls: usize,
}

impl FakeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observed(&self, node: &FakeNode) -> bool {
        self.observed.iter().any(|n| n.is_same(node))
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

impl VisibilityWatcher<FakeNode> for FakeWatcher {
    fn observe(&mut self, node: &FakeNode) {
        self.observe_calls += 1;
        if !self.is_observed(node) {
            self.observed.push(node.clone());
        }
    }

    fn unobserve(&mut self, node: &FakeNode) {
        self.unobserve_calls += 1;
        self.observed.retain(|n| !n.is_same(node));
    }
}
