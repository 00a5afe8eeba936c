use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::ok_or_warn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// One-shot viewport-intersection watch on a single element.
///
/// The callback runs on the first intersecting entry, after which the element
/// is unobserved. Dropping the watch disconnects the observer.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn once<F>(target: &Element, options: WatchOptions, on_visible: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut pending = Some(on_visible);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .find(|entry| entry.is_intersecting());
                if let Some(entry) = entered {
                    observer.unobserve(&entry.target());
                    if let Some(on_visible) = pending.take() {
                        on_visible();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = ok_or_warn(
            "new IntersectionObserver",
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
        )?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
