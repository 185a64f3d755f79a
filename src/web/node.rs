//! `web-sys` implementations of the page capability traits.
//!
//! Host calls that can throw are inspected and logged at `warn`; the trait
//! contract is infallible so controllers never see a `JsValue` error.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FocusOptions, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::consts::EMAIL_FIELD;
use crate::dom::{DomNode, EmailForm, Lookup};

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

impl DomNode for Element {
    fn read_attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn write_attr(&self, name: &str, value: &str) {
        warn_on_err("setAttribute", Element::set_attribute(self, name, value));
    }

    fn clear_attr(&self, name: &str) {
        warn_on_err("removeAttribute", Element::remove_attribute(self, name));
    }

    fn has_attr(&self, name: &str) -> bool {
        Element::has_attribute(self, name)
    }

    fn add_class(&self, class: &str) {
        warn_on_err("classList.add", self.class_list().add_1(class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn write_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn write_style(&self, property: &str, value: &str) {
        match self.dyn_ref::<HtmlElement>() {
            Some(el) => warn_on_err("style.setProperty", el.style().set_property(property, value)),
            None => log::warn!("cannot style non-HTML element <{}>", self.tag_name()),
        }
    }

    fn encloses(&self, other: &Self) -> bool {
        let other: &web_sys::Node = other;
        web_sys::Node::contains(self, Some(other))
    }

    fn is_same(&self, other: &Self) -> bool {
        let other: &web_sys::Node = other;
        web_sys::Node::is_same_node(self, Some(other))
    }

    fn focus_in_place(&self) {
        let Some(el) = self.dyn_ref::<HtmlElement>() else {
            log::warn!("cannot focus non-HTML element <{}>", self.tag_name());
            return;
        };
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        warn_on_err("focus", el.focus_with_options(&options));
    }
}

impl EmailForm for HtmlFormElement {
    fn email_value(&self) -> Option<String> {
        let selector = format!("[name=\"{EMAIL_FIELD}\"]");
        match self.query_selector(&selector) {
            Ok(Some(field)) => field.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value),
            Ok(None) => None,
            Err(err) => {
                log::warn!("email field lookup failed: {err:?}");
                None
            }
        }
    }

    fn reset(&self) {
        HtmlFormElement::reset(self);
    }
}

impl Lookup<Element> for Document {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}
