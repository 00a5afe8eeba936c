use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

/// Current `window.scrollY`, refreshed on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(dom::scroll_y);
    {
        let scroll_y = scroll_y.clone();
        use_event_with_window("scroll", move |_: Event| {
            scroll_y.set(dom::scroll_y());
        });
    }
    *scroll_y
}

/// Current viewport `(width, height)`, refreshed on resize.
#[hook]
pub fn use_viewport() -> (f64, f64) {
    let viewport = use_state(dom::viewport);
    {
        let viewport = viewport.clone();
        use_event_with_window("resize", move |_: Event| {
            viewport.set(dom::viewport());
        });
    }
    *viewport
}
