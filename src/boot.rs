//! Startup wiring: build the page context once, then attach every feature.
//!
//! ARCHITECTURE
//! ============
//! [`Page`] is the explicit application context: window, document, resolved
//! config, and the navigation state shared by the toggle, the anchor links,
//! and the Escape handler. Each feature is wired by its own function and a
//! failure in one is logged without stopping the rest.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::Array;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{
    Document, Element, HtmlButtonElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, Window,
};

use crate::config::{self, CONFIG_ELEMENT_ID, SiteConfig};
use crate::consts::{
    BACK_TO_TOP_ID, CLASS_ACTIVE, CLASS_PARTICLE, CLASS_SCROLLED, CLASS_VISIBLE, CONTACT_FORM_ID, COUNT_ATTRIBUTE,
    COUNTER_SELECTOR, DEFERRED_SRC_ATTRIBUTE, LAZY_IMAGE_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID,
    NAVBAR_ID, PARTICLES_ID, SECTION_SELECTOR, SUBMIT_BUTTON_SELECTOR, THEME_TOGGLE_ID, TYPED_ID,
};
use crate::contact::{ButtonView, SubmitRelay};
use crate::dom::{self, js_err, listen, report};
use crate::error::WireError;
use crate::nav::{NavController, NavVisual, anchor_target, is_in_page, scroll_destination};
use crate::particles;
use crate::showcase::{self, PANEL_MARKER_ID};
use crate::theme::{DocumentRoot, LocalStorage, MemoryStore, PreferenceStore, ThemeController, system_prefers_dark};
use crate::trigger::{Counter, IntersectionEntry, LazyImage, TargetId, TriggerSet};
use crate::vendor;
use crate::viewport::{LinkHighlight, ScrollView, SectionBoundary, ViewportObserver, link_targets_section};

type Wire = fn(&Rc<Page>) -> Result<(), WireError>;

/// Features in startup order.
const FEATURES: [(&str, Wire); 11] = [
    ("theme", wire_theme),
    ("navigation", wire_navigation),
    ("back to top", wire_back_to_top),
    ("contact form", wire_contact_form),
    ("scroll state", wire_scroll),
    ("typed text", wire_typed),
    ("scroll reveal", wire_reveal),
    ("counters", wire_counters),
    ("particles", wire_particles),
    ("lazy images", wire_lazy_images),
    ("record panel", wire_showcase),
];

/// Application context handed to every feature.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
    nav: RefCell<NavController>,
}

impl Page {
    fn load() -> Result<Self, WireError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
        let config = config::resolve(raw.as_deref());
        Ok(Self { window, document, config, nav: RefCell::new(NavController::new()) })
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn apply_nav(&self, visual: NavVisual) -> Result<(), WireError> {
        for id in [NAV_TOGGLE_ID, NAV_MENU_ID] {
            if let Some(el) = self.by_id(id) {
                dom::set_class(&el, CLASS_ACTIVE, visual.open)?;
            }
        }
        if let Some(body) = self.document.body() {
            let style = body.style();
            if visual.lock_scroll {
                style.set_property("overflow", "hidden").map_err(js_err)?;
            } else {
                style.remove_property("overflow").map_err(js_err)?;
            }
        }
        Ok(())
    }

    fn close_nav(&self) {
        let visual = self.nav.borrow_mut().close();
        if let Some(visual) = visual {
            report("closing navigation", self.apply_nav(visual));
        }
    }
}

/// WebAssembly entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {e}");
    }

    let page = match Page::load() {
        Ok(page) => Rc::new(page),
        Err(e) => {
            log::error!("portfolio not initialized: {e}");
            return;
        }
    };

    if page.document.ready_state() == "loading" {
        let document = page.document.clone();
        let on_ready = Closure::once_into_js(move || init(&page));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("portfolio not initialized: {}", js_err(e));
        }
    } else {
        init(&page);
    }
}

fn init(page: &Rc<Page>) {
    for (name, wire) in FEATURES {
        match wire(page) {
            Ok(()) => log::debug!("{name} wired"),
            Err(e) => log::warn!("{name} skipped: {e}"),
        }
    }
    log::info!("portfolio initialized");
}

// ── Theme ───────────────────────────────────────────────────────

fn wire_theme(page: &Rc<Page>) -> Result<(), WireError> {
    let root = page.document.document_element().ok_or(WireError::MissingElement("html"))?;
    let store: Box<dyn PreferenceStore> = match LocalStorage::open(&page.window) {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("localStorage unavailable, theme preference is session-only");
            Box::new(MemoryStore::default())
        }
    };
    let controller = ThemeController::init(store, DocumentRoot(root), system_prefers_dark(&page.window));

    let Some(button) = page.by_id(THEME_TOGGLE_ID) else {
        return Ok(());
    };
    let controller = RefCell::new(controller);
    listen(&button, "click", move |_| {
        let theme = controller.borrow_mut().toggle();
        log::debug!("theme toggled to {}", theme.as_str());
    })
}

// ── Navigation ──────────────────────────────────────────────────

fn wire_navigation(page: &Rc<Page>) -> Result<(), WireError> {
    if let Some(toggle) = page.by_id(NAV_TOGGLE_ID) {
        let page_for_cb = Rc::clone(page);
        listen(&toggle, "click", move |_| {
            let visual = page_for_cb.nav.borrow_mut().toggle();
            report("toggling navigation", page_for_cb.apply_nav(visual));
        })?;
    }

    for link in dom::query_all(&page.document, NAV_LINK_SELECTOR)? {
        let page_for_cb = Rc::clone(page);
        let link_for_cb = link.clone();
        listen(&link, "click", move |event| {
            let Some(href) = link_for_cb.get_attribute("href") else {
                return;
            };
            if !is_in_page(&href) {
                return;
            }
            event.prevent_default();
            let Some(target) = anchor_target(&href).and_then(|id| page_for_cb.by_id(id)) else {
                return;
            };
            let top = scroll_destination(dom::offset_top(&target), page_for_cb.config.header_offset_px);
            dom::smooth_scroll_to(&page_for_cb.window, top);
            page_for_cb.close_nav();
        })?;
    }

    let page_for_cb = Rc::clone(page);
    listen(&page.document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let visual = page_for_cb.nav.borrow_mut().on_key(&key);
        if let Some(visual) = visual {
            report("closing navigation", page_for_cb.apply_nav(visual));
        }
    })
}

fn wire_back_to_top(page: &Rc<Page>) -> Result<(), WireError> {
    let Some(button) = page.by_id(BACK_TO_TOP_ID) else {
        return Ok(());
    };
    let window = page.window.clone();
    listen(&button, "click", move |event| {
        event.prevent_default();
        dom::smooth_scroll_to(&window, 0.0);
    })
}

// ── Scroll state ────────────────────────────────────────────────

fn measure_sections(document: &Document) -> Result<Vec<SectionBoundary>, WireError> {
    Ok(dom::query_all(document, SECTION_SELECTOR)?
        .iter()
        .map(|el| SectionBoundary::new(el.id(), dom::offset_top(el), dom::offset_height(el)))
        .collect())
}

struct ScrollTargets {
    navbar: Option<Element>,
    back_to_top: Option<Element>,
    links: Vec<Element>,
}

impl ScrollTargets {
    fn apply(&self, view: &ScrollView) -> Result<(), WireError> {
        if let Some(navbar) = &self.navbar {
            dom::set_class(navbar, CLASS_SCROLLED, view.nav_scrolled)?;
        }
        if let Some(button) = &self.back_to_top {
            dom::set_class(button, CLASS_VISIBLE, view.back_to_top_visible)?;
        }
        match &view.highlight {
            LinkHighlight::Keep => {}
            LinkHighlight::Activate(section_id) => {
                for link in &self.links {
                    let on = link.get_attribute("href").is_some_and(|href| link_targets_section(&href, section_id));
                    dom::set_class(link, CLASS_ACTIVE, on)?;
                }
            }
            LinkHighlight::ClearAll => {
                for link in &self.links {
                    dom::set_class(link, CLASS_ACTIVE, false)?;
                }
            }
        }
        Ok(())
    }
}

fn wire_scroll(page: &Rc<Page>) -> Result<(), WireError> {
    let targets = ScrollTargets {
        navbar: page.by_id(NAVBAR_ID),
        back_to_top: page.by_id(BACK_TO_TOP_ID),
        links: dom::query_all(&page.document, NAV_LINK_SELECTOR)?,
    };
    let mut observer = ViewportObserver::new(page.config.viewport());
    let page_for_cb = Rc::clone(page);
    let mut tick = move || -> Result<(), WireError> {
        let offset = page_for_cb.window.scroll_y().map_err(js_err)?;
        let sections = measure_sections(&page_for_cb.document)?;
        let view = observer.on_scroll(offset, &sections);
        targets.apply(&view)
    };

    // Eager pass so a restored or anchored scroll position renders correctly.
    tick()?;
    listen(&page.window, "scroll", move |_| report("scroll update", tick()))
}

// ── Third-party libraries ───────────────────────────────────────

fn wire_typed(page: &Rc<Page>) -> Result<(), WireError> {
    if page.by_id(TYPED_ID).is_none() {
        return Ok(());
    }
    if !vendor::init_typed(&page.config.typed)? {
        log::debug!("typed-text library not loaded");
    }
    Ok(())
}

fn wire_reveal(page: &Rc<Page>) -> Result<(), WireError> {
    if !vendor::init_reveal(&page.config.reveal)? {
        log::debug!("scroll-reveal library not loaded");
    }
    Ok(())
}

// ── Viewport-triggered effects ──────────────────────────────────

/// Translate an observer batch into entries addressed by registration index.
fn collect_entries(entries: &Array, elements: &[Element]) -> Vec<IntersectionEntry> {
    entries
        .iter()
        .filter_map(|value| {
            let entry = value.dyn_ref::<IntersectionObserverEntry>()?;
            let target = entry.target();
            let index = elements.iter().position(|el| *el == target)?;
            Some(IntersectionEntry {
                target: index,
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
        })
        .collect()
}

/// Observe `elements` at `threshold`; `on_fire` runs once per fired target.
fn observe_once<T, F>(
    elements: Vec<Element>,
    set: Rc<RefCell<TriggerSet<T>>>,
    mut on_fire: F,
) -> Result<(), WireError>
where
    T: 'static,
    F: FnMut(&Rc<RefCell<TriggerSet<T>>>, TargetId) + 'static,
{
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(set.borrow().threshold()));

    let watched = elements.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch = collect_entries(&entries, &watched);
            let fired = set.borrow_mut().on_intersection(&batch);
            for id in fired {
                if let Some(el) = watched.get(id) {
                    observer.unobserve(el);
                }
                on_fire(&set, id);
            }
        },
    );
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).map_err(js_err)?;
    callback.forget();
    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}

struct CounterTarget {
    element: Element,
    counter: Counter,
}

fn wire_counters(page: &Rc<Page>) -> Result<(), WireError> {
    let mut set = TriggerSet::new(page.config.counter_visibility_ratio);
    let mut elements = Vec::new();
    for element in dom::query_all(&page.document, COUNTER_SELECTOR)? {
        let raw = element.get_attribute(COUNT_ATTRIBUTE).unwrap_or_default();
        match Counter::parse_target(&raw) {
            Ok(target) => {
                let counter = Counter::new(target, page.config.counter_duration_ms);
                set.register(CounterTarget { element: element.clone(), counter });
                elements.push(element);
            }
            Err(e) => log::warn!("counter skipped: {e}"),
        }
    }
    if elements.is_empty() {
        return Ok(());
    }

    let window = page.window.clone();
    observe_once(elements, Rc::new(RefCell::new(set)), move |set, id| {
        let started = set.borrow_mut().get_mut(id).is_some_and(|t| t.counter.start());
        if !started {
            return;
        }
        let set = Rc::clone(set);
        let frames = dom::animate(&window, move |now| {
            let mut set = set.borrow_mut();
            let Some(target) = set.get_mut(id) else {
                return false;
            };
            let Some(frame) = target.counter.frame(now) else {
                return false;
            };
            target.element.set_text_content(Some(&frame.value.to_string()));
            !frame.done
        });
        report("counter animation", frames);
    })
}

fn wire_lazy_images(page: &Rc<Page>) -> Result<(), WireError> {
    let mut set = TriggerSet::new(page.config.image_visibility_ratio);
    let mut elements = Vec::new();
    for element in dom::query_all(&page.document, LAZY_IMAGE_SELECTOR)? {
        if let Some(src) = element.get_attribute(DEFERRED_SRC_ATTRIBUTE) {
            set.register(LazyImage::new(src));
            elements.push(element);
        }
    }
    if elements.is_empty() {
        return Ok(());
    }

    let images = elements.clone();
    observe_once(elements, Rc::new(RefCell::new(set)), move |set, id| {
        let mut set = set.borrow_mut();
        let (Some(image), Some(element)) = (set.get_mut(id), images.get(id)) else {
            return;
        };
        if let Some(src) = image.promote() {
            let promoted = element
                .set_attribute("src", src)
                .and_then(|()| element.remove_attribute(DEFERRED_SRC_ATTRIBUTE))
                .map_err(js_err);
            report("lazy image load", promoted);
        }
    })
}

// ── Decoration ──────────────────────────────────────────────────

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wire_particles(page: &Rc<Page>) -> Result<(), WireError> {
    let Some(container) = page.by_id(PARTICLES_ID) else {
        return Ok(());
    };
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let mut rng = SmallRng::seed_from_u64(seed);
    for particle in particles::generate(page.config.particle_count, &mut rng) {
        let el = page.document.create_element("div").map_err(js_err)?;
        el.set_class_name(CLASS_PARTICLE);
        el.set_attribute("style", &particle.css_text()).map_err(js_err)?;
        container.append_child(&el).map_err(js_err)?;
    }
    Ok(())
}

// ── Contact form ────────────────────────────────────────────────

fn apply_button(button: &Element, view: &ButtonView) {
    button.set_inner_html(&view.label);
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(view.disabled);
    }
}

fn wire_contact_form(page: &Rc<Page>) -> Result<(), WireError> {
    let Some(form) = page.by_id(CONTACT_FORM_ID) else {
        return Ok(());
    };
    let relay = Rc::new(RefCell::new(SubmitRelay::new()));
    let delay = Duration::from_millis(u64::from(page.config.form_reset_delay_ms));
    let form_for_cb = form.clone();
    // The default submission is left alone: the browser posts to the form endpoint.
    listen(&form, "submit", move |_| {
        let button = match form_for_cb.query_selector(SUBMIT_BUTTON_SELECTOR) {
            Ok(Some(button)) => button,
            Ok(None) => return,
            Err(e) => {
                log::warn!("submit button lookup failed: {}", js_err(e));
                return;
            }
        };
        let view = relay.borrow_mut().begin(&button.inner_html());
        let Some(view) = view else {
            return;
        };
        apply_button(&button, &view);

        let relay = Rc::clone(&relay);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            let view = relay.borrow_mut().reset();
            if let Some(view) = view {
                apply_button(&button, &view);
            }
        });
    })
}

// ── Record panel ────────────────────────────────────────────────

fn wire_showcase(page: &Rc<Page>) -> Result<(), WireError> {
    if page.by_id(PANEL_MARKER_ID).is_none() {
        return Ok(());
    }
    let endpoint = page.config.showcase_endpoint.clone();
    let document = page.document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match showcase::fetch_record(&endpoint).await {
            Ok(record) => {
                log::debug!("record panel loaded: {record:?}");
                for (id, text) in record.fields() {
                    if let Some(el) = document.get_element_by_id(id) {
                        el.set_text_content(Some(&text));
                    }
                }
            }
            Err(e) => log::error!("record panel fetch failed: {e}"),
        }
    });
    Ok(())
}
