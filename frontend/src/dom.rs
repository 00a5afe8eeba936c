use std::fmt::Debug;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Vertical extent of one `section[id]` on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Turns a failed browser call into `None`, logging it on the way.
pub fn ok_or_warn<T, E: Debug>(what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{} failed: {:?}", what, err);
            None
        }
    }
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| ok_or_warn("window.scrollY", w.scroll_y()))
        .unwrap_or(0.0)
}

/// Viewport `(width, height)` in CSS pixels, zero when unavailable.
pub fn viewport() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = ok_or_warn("window.innerWidth", window.inner_width())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = ok_or_warn("window.innerHeight", window.inner_height())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn section_spans() -> Vec<SectionSpan> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Some(nodes) = ok_or_warn("querySelectorAll(section[id])", document.query_selector_all("section[id]")) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionSpan {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

/// Smoothly scrolls to the element an in-page `#id` href points at, leaving
/// room for the fixed navbar. Returns false when there is no such element.
pub fn smooth_scroll_to(href: &str) -> bool {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return false;
    };
    let Some(window) = window() else {
        return false;
    };
    let target = window
        .document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        debug!("no scroll target for {}", href);
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(target.offset_top() as f64 - config::SMOOTH_SCROLL_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_calls_pass_through() {
        assert_eq!(ok_or_warn("style.left", Ok::<_, String>("12px")), Some("12px"));
        assert_eq!(ok_or_warn("removeEventListener", Ok::<(), String>(())), Some(()));
    }

    #[test]
    fn failed_calls_become_none() {
        assert_eq!(ok_or_warn::<(), _>("removeEventListener", Err("detached")), None);
        assert_eq!(ok_or_warn::<f64, _>("window.scrollY", Err(-1)), None);
    }
}
