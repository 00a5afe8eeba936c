use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::observe::{VisibilityWatch, WatchOptions};

const REVEAL: WatchOptions = WatchOptions {
    threshold: config::REVEAL_THRESHOLD,
    root_margin: config::REVEAL_ROOT_MARGIN,
};

const STAGGER: WatchOptions = WatchOptions {
    threshold: config::STAGGER_THRESHOLD,
    root_margin: "0px",
};

pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config::STAGGER_STEP_MS)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its content in the first time it enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let target = node.cast::<Element>();
            let show = visible.clone();
            let watch = target.and_then(|el| VisibilityWatch::once(&el, REVEAL, move || show.set(true)));
            if watch.is_none() {
                // Without an observer the content would stay hidden for good
                debug!("reveal watch unavailable, showing content");
                visible.set(true);
            }
            move || drop(watch)
        }, ());
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), (*visible).then_some("visible"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerGridProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Grid whose items appear one after another once the grid itself is in view.
#[function_component(StaggerGrid)]
pub fn stagger_grid(props: &StaggerGridProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| 0usize);
    let count = props.children.len();

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(move |count| {
            let count = *count;
            let timers: Rc<RefCell<Vec<Timeout>>> = Rc::default();

            let watch = {
                let timers = timers.clone();
                let setter = revealed.setter();
                node.cast::<Element>().and_then(|grid| {
                    VisibilityWatch::once(&grid, STAGGER, move || {
                        let mut timers = timers.borrow_mut();
                        for index in 0..count {
                            let setter = setter.clone();
                            timers.push(Timeout::new(stagger_delay_ms(index), move || setter.set(index + 1)));
                        }
                    })
                })
            };
            if watch.is_none() {
                debug!("stagger watch unavailable, showing all {} items", count);
                revealed.set(count);
            }

            move || {
                drop(watch);
                timers.borrow_mut().clear();
            }
        }, count);
    }

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(index, child)| html! {
                <div class={classes!("stagger-item", (index < *revealed).then_some("visible"))}>
                    { child }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delay_grows_by_one_step_per_item() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(7), 700);
    }

    #[test]
    fn stagger_delay_saturates() {
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }
}
