//! `IntersectionObserver` as a [`VisibilityWatcher`].

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::VisibilityWatcher;
use crate::reveal::Intersection;

/// Borrowed observer handle, valid for one call into the reveal controller.
pub struct ObserverWatcher<'a>(pub &'a IntersectionObserver);

impl VisibilityWatcher<Element> for ObserverWatcher<'_> {
    fn observe(&mut self, node: &Element) {
        self.0.observe(node);
    }

    fn unobserve(&mut self, node: &Element) {
        self.0.unobserve(node);
    }
}

/// Watcher used when no observer exists; it never reports anything.
pub struct InertWatcher;

impl VisibilityWatcher<Element> for InertWatcher {
    fn observe(&mut self, _node: &Element) {}

    fn unobserve(&mut self, _node: &Element) {}
}

/// Convert a callback's entry array into intersection reports.
#[must_use]
pub fn intersections(entries: &Array) -> Vec<Intersection<Element>> {
    entries
        .iter()
        .filter_map(|value| match value.dyn_into::<IntersectionObserverEntry>() {
            Ok(entry) => Some(entry),
            Err(other) => {
                log::warn!("unexpected intersection entry: {other:?}");
                None
            }
        })
        .map(|entry| Intersection { target: entry.target(), is_intersecting: entry.is_intersecting() })
        .collect()
}

/// Build an observer firing at `threshold` that forwards every batch to
/// `on_batch`. The callback is leaked; observers live as long as the page.
pub fn create<F>(threshold: f64, mut on_batch: F) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(Vec<Intersection<Element>>, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        on_batch(intersections(&entries), &observer);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}
