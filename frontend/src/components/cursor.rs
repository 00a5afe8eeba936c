use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::ok_or_warn;

const HOVER_TAGS: &[&str] = &["a", "button"];
const HOVER_CLASSES: &[&str] = &["service-card", "gallery-item"];

/// Whether an element sits inside an interactive target. `chain` yields
/// `(tag_name, class_name)` from the element itself up through its ancestors.
pub fn within_hover_target<'a, I>(chain: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    chain.into_iter().any(|(tag, class)| {
        HOVER_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
            || class.split_whitespace().any(|c| HOVER_CLASSES.contains(&c))
    })
}

fn hovers(el: Option<Element>) -> bool {
    let mut chain = Vec::new();
    let mut current = el;
    while let Some(el) = current {
        chain.push((el.tag_name(), el.class_name()));
        current = el.parent_element();
    }
    within_hover_target(chain.iter().map(|(tag, class)| (tag.as_str(), class.as_str())))
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Moves `factor` of the remaining distance toward `target`.
    pub fn approach(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub pointer: Point,
    pub dot: Point,
    pub ring: Point,
}

impl CursorState {
    pub fn point_at(&mut self, x: f64, y: f64) {
        self.pointer = Point { x, y };
    }

    pub fn tick(&mut self) {
        self.dot = self.dot.approach(self.pointer, config::CURSOR_DOT_SMOOTHING);
        self.ring = self.ring.approach(self.pointer, config::CURSOR_RING_SMOOTHING);
    }
}

struct CursorLoop {
    state: CursorState,
    dot: HtmlElement,
    ring: HtmlElement,
    frame: Option<AnimationFrame>,
}

impl CursorLoop {
    fn apply(&self) {
        place(&self.dot, self.state.dot);
        place(&self.ring, self.state.ring);
    }
}

fn place(el: &HtmlElement, at: Point) {
    let style = el.style();
    ok_or_warn("cursor left", style.set_property("left", &format!("{}px", at.x)));
    ok_or_warn("cursor top", style.set_property("top", &format!("{}px", at.y)));
}

fn schedule(cursor: Rc<RefCell<CursorLoop>>) {
    let next = cursor.clone();
    let frame = request_animation_frame(move |_| {
        {
            let mut cursor = next.borrow_mut();
            cursor.state.tick();
            cursor.apply();
        }
        schedule(next);
    });
    cursor.borrow_mut().frame = Some(frame);
}

/// Running follower. Dropping it stops the frame loop and the listeners.
pub struct CursorBinding {
    cursor: Rc<RefCell<CursorLoop>>,
    _listeners: Vec<EventListener>,
}

impl Drop for CursorBinding {
    fn drop(&mut self) {
        self.cursor.borrow_mut().frame.take();
    }
}

fn bind_cursor(dot: HtmlElement, ring: HtmlElement, on_hover: Callback<bool>) -> Option<CursorBinding> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let cursor = Rc::new(RefCell::new(CursorLoop {
        state: CursorState::default(),
        dot,
        ring,
        frame: None,
    }));

    let mut listeners = Vec::new();
    {
        let cursor = cursor.clone();
        listeners.push(EventListener::new(&window, "mousemove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                cursor.borrow_mut().state.point_at(e.client_x() as f64, e.client_y() as f64);
            }
        }));
    }
    {
        let on_hover = on_hover.clone();
        listeners.push(EventListener::new(&document, "mouseover", move |event| {
            let entered = event.target().and_then(|target| target.dyn_into::<Element>().ok());
            on_hover.emit(hovers(entered));
        }));
    }
    // Leaving the page has no follow-up mouseover, so judge by where the pointer went
    listeners.push(EventListener::new(&document, "mouseout", move |event| {
        let entered = event
            .dyn_ref::<MouseEvent>()
            .and_then(|e| e.related_target())
            .and_then(|target| target.dyn_into::<Element>().ok());
        on_hover.emit(hovers(entered));
    }));

    schedule(cursor.clone());
    debug!("cursor follower running");

    Some(CursorBinding {
        cursor,
        _listeners: listeners,
    })
}

#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let dot = use_node_ref();
    let ring = use_node_ref();
    let hovering = use_state_eq(|| false);

    {
        let dot = dot.clone();
        let ring = ring.clone();
        let hovering = hovering.clone();
        use_effect_with_deps(move |_| {
            let on_hover = Callback::from(move |hover: bool| hovering.set(hover));
            let binding = match (dot.cast::<HtmlElement>(), ring.cast::<HtmlElement>()) {
                (Some(dot), Some(ring)) => bind_cursor(dot, ring, on_hover),
                _ => None,
            };
            if binding.is_none() {
                debug!("cursor follower disabled");
            }
            move || drop(binding)
        }, ());
    }

    html! {
        <div class={classes!("custom-cursor", (*hovering).then_some("cursor-hover"))}>
            <div ref={dot} class="cursor-dot"></div>
            <div ref={ring} class="cursor-ring"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn one_tick_moves_fixed_fraction() {
        let mut cursor = CursorState::default();
        cursor.point_at(100.0, 50.0);
        cursor.tick();

        assert!(close(cursor.dot.x, 20.0) && close(cursor.dot.y, 10.0));
        assert!(close(cursor.ring.x, 10.0) && close(cursor.ring.y, 5.0));
    }

    #[test]
    fn dot_follows_tighter_than_ring() {
        let mut cursor = CursorState::default();
        cursor.point_at(300.0, 300.0);
        for _ in 0..5 {
            cursor.tick();
            assert!(cursor.dot.x > cursor.ring.x);
        }
    }

    #[test]
    fn converges_on_still_pointer() {
        let mut cursor = CursorState::default();
        cursor.point_at(640.0, 360.0);
        for _ in 0..400 {
            cursor.tick();
        }
        assert!(close(cursor.dot.x, 640.0) && close(cursor.ring.y, 360.0));
    }

    #[test]
    fn links_buttons_and_cards_count_as_hover_targets() {
        assert!(within_hover_target([("A", "nav-link")]));
        assert!(within_hover_target([("BUTTON", "")]));
        assert!(within_hover_target([("IMG", ""), ("DIV", "gallery-item visible")]));
        assert!(within_hover_target([("H3", "service-name"), ("DIV", "service-card active")]));
    }

    #[test]
    fn plain_content_and_leaving_the_page_clear_hover() {
        assert!(!within_hover_target([("P", "hero-subtitle"), ("SECTION", "hero"), ("BODY", "")]));
        assert!(!within_hover_target([("DIV", "gallery-grid")]));
        // No element entered: the pointer left the document
        assert!(!within_hover_target(std::iter::empty()));
    }

    #[test]
    fn resting_cursor_does_not_drift() {
        let mut cursor = CursorState::default();
        cursor.tick();
        assert_eq!(cursor, CursorState::default());
    }
}
