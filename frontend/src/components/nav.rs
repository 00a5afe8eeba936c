use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::SECTIONS;
use crate::dom::{self, SectionSpan};

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= config::NAVBAR_SCROLLED_AT
}

/// Id of the section under the marker line just below the navbar. When
/// sections overlap the later one in document order wins.
pub fn active_section(scroll_y: f64, spans: &[SectionSpan]) -> Option<&str> {
    let marker = scroll_y + config::ACTIVE_LINK_OFFSET;
    spans
        .iter()
        .rev()
        .find(|span| marker >= span.top && marker < span.top + span.height)
        .map(|span| span.id.as_str())
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::smooth_scroll_to(&href);
            on_navigate.emit(());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let update = move || {
                let scroll_y = dom::scroll_y();
                scrolled.set(is_scrolled(scroll_y));
                // No section under the marker keeps the previous highlight
                if let Some(id) = active_section(scroll_y, &dom::section_spans()) {
                    active.set(Some(id.to_string()));
                }
            };

            // Initial check
            update();

            let listener = web_sys::window().and_then(|window| {
                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                dom::ok_or_warn(
                    "add scroll listener",
                    window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                )?;
                debug!("navbar bound to scroll");
                Some((window, scroll_callback))
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    dom::ok_or_warn(
                        "remove scroll listener",
                        window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let menu_class = (*menu_open).then_some("active");

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo" on_navigate={close_menu.clone()}>
                    {"Sensible"}<span>{" Korean Salon"}</span>
                </AnchorLink>

                <button id="navToggle" class={classes!("nav-toggle", menu_class)} onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navMenu" class={classes!("nav-menu", menu_class)}>
                    { for SECTIONS.iter().map(|(id, label)| {
                        let is_active = active.as_deref() == Some(*id);
                        html! {
                            <li>
                                <AnchorLink
                                    href={format!("#{}", id)}
                                    class={classes!("nav-link", is_active.then_some("active"))}
                                    on_navigate={close_menu.clone()}
                                >
                                    {*label}
                                </AnchorLink>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan { id: id.to_string(), top, height }
    }

    #[test]
    fn navbar_scrolled_from_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(is_scrolled(50.0));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn active_section_reads_just_below_navbar() {
        let spans = vec![span("home", 0.0, 800.0), span("about", 800.0, 600.0), span("services", 1400.0, 900.0)];

        assert_eq!(active_section(0.0, &spans), Some("home"));
        // 699 + 100 is still inside home, 700 + 100 is the first pixel of about
        assert_eq!(active_section(699.0, &spans), Some("home"));
        assert_eq!(active_section(700.0, &spans), Some("about"));
        assert_eq!(active_section(1350.0, &spans), Some("services"));
    }

    #[test]
    fn active_section_none_past_last_section() {
        let spans = vec![span("home", 0.0, 500.0), span("contact", 500.0, 500.0)];
        assert_eq!(active_section(950.0, &spans), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn overlapping_sections_prefer_later_one() {
        let spans = vec![span("hero", 0.0, 1000.0), span("about", 600.0, 400.0)];
        assert_eq!(active_section(600.0, &spans), Some("about"));
    }
}
