use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::scroll::{RevealProbe, Section, Viewport};

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Monotonic page clock in milliseconds, from `performance.now()`.
pub fn now_ms() -> u64 {
    window()
        .and_then(|win| win.performance())
        .map(|performance| performance.now() as u64)
        .unwrap_or(0)
}

pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn data_index(element: &Element, name: &str) -> Option<usize> {
    data_attr(element, name)?.parse::<usize>().ok()
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

pub fn header_height() -> f64 {
    document()
        .and_then(|d| d.query_selector("header").ok().flatten())
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0)
}

pub fn viewport() -> Viewport {
    let scroll_y = window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    let (_, height) = viewport_size();

    Viewport {
        scroll_y,
        height,
        header_height: header_height(),
    }
}

/// Reads live section geometry; ids without a matching element are skipped.
pub fn measure_sections<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<Section> {
    let Some(document) = document() else {
        return Vec::new();
    };

    ids.into_iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(Section::new(
                id,
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ))
        })
        .collect()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn reveal_probes(selector: &str, id_attribute: &str) -> Vec<RevealProbe> {
    query_all(selector)
        .iter()
        .filter_map(|element| {
            Some(RevealProbe {
                id: data_index(element, id_attribute)?,
                top: element.get_bounding_client_rect().top(),
            })
        })
        .collect()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Detaches its listener when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn new(
        target: impl Into<EventTarget>,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let target = target.into();
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target,
            kind,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

pub struct VisibilityEntry<'a> {
    pub target: Element,
    pub intersecting: bool,
    pub ratio: f64,
    pub observer: &'a IntersectionObserver,
}

impl VisibilityEntry<'_> {
    pub fn unobserve(&self) {
        self.observer.unobserve(&self.target);
    }
}

/// Disconnects its intersection observer when dropped.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverGuard {
    pub fn observe_all(
        selector: &str,
        threshold: f64,
        root_margin: &str,
        mut handler: impl FnMut(VisibilityEntry<'_>) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };

                    handler(VisibilityEntry {
                        target: entry.target(),
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                        observer: &observer,
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for element in query_all(selector) {
            observer.observe(&element);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
