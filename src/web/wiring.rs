//! Page wiring: find elements, sample the environment, start the site, and
//! register event listeners.
//!
//! Listeners are registered once and leaked; they live as long as the page.
//! The only unregistration is the reveal controller unobserving elements.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, IntersectionObserver, KeyboardEvent, Window};

use super::observer::{self, InertWatcher, ObserverWatcher};
use super::storage::LocalStorage;
use crate::config::SiteConfig;
use crate::consts::REDUCED_MOTION_QUERY;
use crate::site::{Environment, Page, Site};

type BrowserSite = Site<Element, HtmlFormElement, LocalStorage, Document>;
type SharedSite = Rc<RefCell<BrowserSite>>;

/// Keeps the site and its observer alive after [`mount`] returns.
struct Mounted {
    _site: SharedSite,
    _observer: Option<IntersectionObserver>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

/// Elements that receive listeners, cloned out before the page is consumed.
struct Hooks {
    menu_trigger: Option<Element>,
    theme_toggles: Vec<Element>,
    form: Option<HtmlFormElement>,
}

/// Wire every feature to the current document. Repeated calls are ignored.
pub fn mount(config: &SiteConfig) {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("site already mounted; ignoring repeated boot");
        return;
    }
    let Some(window) = web_sys::window() else {
        log::warn!("no window; interaction layer disabled");
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; interaction layer disabled");
        return;
    };
    let Some(root) = document.document_element() else {
        log::warn!("no root element; interaction layer disabled");
        return;
    };

    let page = collect_page(&document, root, config);
    let hooks = Hooks {
        menu_trigger: page.menu_trigger.clone(),
        theme_toggles: page.theme_toggles.clone(),
        form: page.form.clone(),
    };
    let sampled = sample_environment(&window);
    let site: SharedSite = Rc::new(RefCell::new(Site::new(page, config, LocalStorage, document.clone())));

    let observer = if sampled.reduce_motion { None } else { create_observer(&site, config.reveal_threshold) };
    // Without an observer nothing would ever be revealed; show it all instead.
    let env = Environment { reduce_motion: observer.is_none(), ..sampled };
    with_site(&site, |s| match &observer {
        Some(obs) => s.start(&env, &mut ObserverWatcher(obs)),
        None => s.start(&env, &mut InertWatcher),
    });

    wire(&window, &document, &hooks, &site);
    MOUNTED.with(|m| *m.borrow_mut() = Some(Mounted { _site: site, _observer: observer }));
}

fn create_observer(site: &SharedSite, threshold: f64) -> Option<IntersectionObserver> {
    let site = Rc::clone(site);
    let created = observer::create(threshold, move |batch, obs| {
        with_site(&site, |s| s.reveal.on_intersections(&batch, &mut ObserverWatcher(obs)));
    });
    match created {
        Ok(obs) => Some(obs),
        Err(err) => {
            log::warn!("IntersectionObserver unavailable ({err:?}); revealing immediately");
            None
        }
    }
}

fn collect_page(document: &Document, root: Element, config: &SiteConfig) -> Page<Element, HtmlFormElement> {
    let by_id = |id: &str| document.get_element_by_id(id);
    let form = by_id(&config.form_id).and_then(|el| match el.dyn_into::<HtmlFormElement>() {
        Ok(form) => Some(form),
        Err(el) => {
            log::warn!("#{} is a <{}>, not a form; validation disabled", config.form_id, el.tag_name());
            None
        }
    });
    Page {
        root,
        theme_toggles: config.theme_toggle_ids.iter().filter_map(|id| by_id(id)).collect(),
        menu_trigger: by_id(&config.menu_button_id),
        menu_panel: by_id(&config.menu_panel_id),
        year_slot: by_id(&config.year_id),
        form,
        form_status: by_id(&config.form_status_id),
        reveal: elements_by_class(document, &config.reveal_class),
    }
}

fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    // Copied out of the live collection so later class changes don't shift it.
    let list = document.get_elements_by_class_name(class);
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn sample_environment(window: &Window) -> Environment {
    let reduce_motion = match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::warn!("matchMedia failed: {err:?}");
            false
        }
    };
    let year = i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default();
    Environment { reduce_motion, year, hash: current_fragment(window) }
}

/// Percent-decoded `location.hash`, or the raw value if it does not decode.
fn current_fragment(window: &Window) -> String {
    let raw = match window.location().hash() {
        Ok(hash) => hash,
        Err(err) => {
            log::warn!("location.hash unavailable: {err:?}");
            return String::new();
        }
    };
    match js_sys::decode_uri_component(&raw) {
        Ok(decoded) => decoded.into(),
        Err(_) => raw,
    }
}

fn with_site<R>(site: &SharedSite, f: impl FnOnce(&mut BrowserSite) -> R) -> Option<R> {
    match site.try_borrow_mut() {
        Ok(mut site) => Some(f(&mut site)),
        Err(_) => {
            log::warn!("re-entrant event dropped");
            None
        }
    }
}

fn event_element(event: &Event) -> Option<Element> {
    match event.target()?.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        Ok(()) => callback.forget(),
        Err(err) => log::warn!("addEventListener({event}) failed: {err:?}"),
    }
}

fn wire(window: &Window, document: &Document, hooks: &Hooks, site: &SharedSite) {
    if let Some(trigger) = &hooks.menu_trigger {
        let site = Rc::clone(site);
        listen(trigger, "click", move |_| {
            with_site(&site, |s| s.menu.on_trigger_click());
        });
    }

    {
        let site = Rc::clone(site);
        listen(document, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                with_site(&site, |s| s.menu.on_key_down(&key));
            }
        });
    }

    {
        let site = Rc::clone(site);
        listen(document, "click", move |event| {
            let target = event_element(&event);
            with_site(&site, |s| s.menu.on_document_click(target.as_ref()));
        });
    }

    for toggle in &hooks.theme_toggles {
        let site = Rc::clone(site);
        listen(toggle, "click", move |_| {
            with_site(&site, |s| s.theme.on_toggle_clicked());
        });
    }

    if let Some(form) = &hooks.form {
        let site = Rc::clone(site);
        listen(form, "submit", move |event| {
            let outcome = with_site(&site, |s| s.form.as_ref().map(|v| v.on_submit())).flatten();
            if outcome.is_some_and(|o| o.prevents_default()) {
                event.prevent_default();
            }
        });
    }

    {
        let site = Rc::clone(site);
        let window_for_cb = window.clone();
        listen(window, "hashchange", move |_| {
            let hash = current_fragment(&window_for_cb);
            with_site(&site, |s| s.hash_focus.on_hash_change::<Element>(&hash));
        });
    }
}
