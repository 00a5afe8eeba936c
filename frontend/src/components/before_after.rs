use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::content::BEFORE_AFTER;

/// Horizontal pointer position as a percentage of the slider width, clamped
/// to `[0, 100]`. A collapsed slider reports the midpoint.
pub fn reveal_percent(pointer_x: f64, left: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 50.0;
    }
    ((pointer_x - left) / width * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    pub dragging: bool,
    pub percent: f64,
}

impl Default for SliderState {
    fn default() -> Self {
        Self { dragging: false, percent: 50.0 }
    }
}

impl SliderState {
    pub fn press(&mut self, percent: f64) {
        self.dragging = true;
        self.percent = percent;
    }

    /// Moves the divider only while a drag is in progress.
    pub fn drag_to(&mut self, percent: f64) -> bool {
        if !self.dragging {
            return false;
        }
        self.percent = percent;
        true
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn clip_style(&self) -> String {
        format!("clip-path: inset(0 {}% 0 0);", 100.0 - self.percent)
    }

    pub fn handle_style(&self) -> String {
        format!("left: {}%;", self.percent)
    }
}

fn mouse_x(event: &Event) -> Option<f64> {
    event.dyn_ref::<MouseEvent>().map(|e| e.client_x() as f64)
}

fn touch_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()?
        .touches()
        .get(0)
        .map(|touch| touch.client_x() as f64)
}

/// Events that end a drag. A system gesture can cancel a touch without a
/// `touchend`.
pub const RELEASE_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Live listeners of one slider. Dropping it detaches all of them.
pub struct SliderBinding {
    _listeners: Vec<EventListener>,
}

fn bind_slider(container: HtmlElement, on_change: Callback<SliderState>) -> Option<SliderBinding> {
    let window = web_sys::window()?;
    let state = Rc::new(RefCell::new(SliderState::default()));

    let percent_at = {
        let container = container.clone();
        move |x: f64| {
            let rect = container.get_bounding_client_rect();
            reveal_percent(x, rect.left(), rect.width())
        }
    };

    let press = {
        let state = state.clone();
        let on_change = on_change.clone();
        let percent_at = percent_at.clone();
        move |x: f64| {
            let snapshot = {
                let mut state = state.borrow_mut();
                state.press(percent_at(x));
                *state
            };
            on_change.emit(snapshot);
        }
    };

    let drag = {
        let state = state.clone();
        let on_change = on_change.clone();
        move |x: f64| {
            let moved = {
                let mut state = state.borrow_mut();
                state.drag_to(percent_at(x)).then_some(*state)
            };
            if let Some(snapshot) = moved {
                on_change.emit(snapshot);
            }
        }
    };

    let release = {
        let state = state.clone();
        move |_: &Event| {
            let released = {
                let mut state = state.borrow_mut();
                let was_dragging = state.dragging;
                state.release();
                was_dragging.then_some(*state)
            };
            if let Some(snapshot) = released {
                on_change.emit(snapshot);
            }
        }
    };

    let mut listeners = Vec::new();

    {
        let press = press.clone();
        listeners.push(EventListener::new_with_options(
            &container,
            "mousedown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some(x) = mouse_x(event) {
                    // Stops the browser's native image drag
                    event.prevent_default();
                    press(x);
                }
            },
        ));
    }
    // Passive, so a tap still registers as a click
    listeners.push(EventListener::new(&container, "touchstart", move |event| {
        if let Some(x) = touch_x(event) {
            press(x);
        }
    }));
    {
        let drag = drag.clone();
        listeners.push(EventListener::new(&window, "mousemove", move |event| {
            if let Some(x) = mouse_x(event) {
                drag(x);
            }
        }));
    }
    {
        let state = state.clone();
        listeners.push(EventListener::new_with_options(
            &container,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if !state.borrow().dragging {
                    return;
                }
                event.prevent_default();
                if let Some(x) = touch_x(event) {
                    drag(x);
                }
            },
        ));
    }
    // Window level so releasing outside the slider still ends the drag
    for name in RELEASE_EVENTS {
        listeners.push(EventListener::new(&window, name, release.clone()));
    }

    Some(SliderBinding { _listeners: listeners })
}

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    let node = use_node_ref();
    let view = use_state_eq(SliderState::default);

    {
        let node = node.clone();
        let view = view.clone();
        use_effect_with_deps(move |_| {
            let on_change = Callback::from(move |state: SliderState| view.set(state));
            let binding = node
                .cast::<HtmlElement>()
                .and_then(|container| bind_slider(container, on_change));
            if binding.is_none() {
                debug!("before/after slider not bound");
            }
            move || drop(binding)
        }, ());
    }

    let (before, after) = BEFORE_AFTER;

    html! {
        <section class="before-after-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"Transformations"}</span>
                    <h2 class="section-title">{"Before & After"}</h2>
                </div>
                <div ref={node} class={classes!("before-after", view.dragging.then_some("dragging"))}>
                    <img class="ba-before" src={before} alt="Before" draggable="false" />
                    <img class="ba-after" src={after} alt="After" draggable="false" style={view.clip_style()} />
                    <div class="ba-handle" style={view.handle_style()}>
                        <span class="ba-handle-knob"></span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_tracks_pointer_inside_bounds() {
        assert_eq!(reveal_percent(100.0, 100.0, 400.0), 0.0);
        assert_eq!(reveal_percent(200.0, 100.0, 400.0), 25.0);
        assert_eq!(reveal_percent(500.0, 100.0, 400.0), 100.0);
    }

    #[test]
    fn percent_clamps_outside_bounds() {
        assert_eq!(reveal_percent(-30.0, 100.0, 400.0), 0.0);
        assert_eq!(reveal_percent(99.0, 100.0, 400.0), 0.0);
        assert_eq!(reveal_percent(501.0, 100.0, 400.0), 100.0);
        assert_eq!(reveal_percent(10_000.0, 100.0, 400.0), 100.0);
    }

    #[test]
    fn zero_width_slider_stays_centered() {
        assert_eq!(reveal_percent(42.0, 0.0, 0.0), 50.0);
    }

    #[test]
    fn moves_only_while_dragging() {
        let mut slider = SliderState::default();
        assert!(!slider.drag_to(80.0));
        assert_eq!(slider.percent, 50.0);

        slider.press(20.0);
        assert!(slider.dragging);
        assert!(slider.drag_to(70.0));
        assert_eq!(slider.percent, 70.0);

        slider.release();
        assert!(!slider.drag_to(10.0));
        assert_eq!(slider.percent, 70.0);
    }

    #[test]
    fn cancelled_touch_ends_the_drag() {
        assert!(RELEASE_EVENTS.contains(&"touchcancel"));
        assert!(RELEASE_EVENTS.contains(&"touchend"));
        assert!(RELEASE_EVENTS.contains(&"mouseup"));

        let mut slider = SliderState::default();
        slider.press(40.0);
        slider.release();
        assert!(!slider.dragging);
        assert!(!slider.drag_to(90.0));
        assert_eq!(slider.percent, 40.0);
    }

    #[test]
    fn styles_follow_percent() {
        let mut slider = SliderState::default();
        slider.press(30.0);
        assert_eq!(slider.clip_style(), "clip-path: inset(0 70% 0 0);");
        assert_eq!(slider.handle_style(), "left: 30%;");
    }
}
