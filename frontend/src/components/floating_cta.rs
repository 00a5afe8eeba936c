use yew::prelude::*;

use crate::config;
use crate::hooks::use_scroll_y;

pub fn floating_cta_visible(scroll_y: f64) -> bool {
    scroll_y >= config::FLOATING_CTA_VISIBLE_AT
}

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub href: AttrValue,
}

#[function_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    let visible = floating_cta_visible(use_scroll_y());

    html! {
        <a
            class={classes!("floating-cta", "book-btn", visible.then_some("visible"))}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Book on WhatsApp"
        >
            {"Book now"}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_past_threshold() {
        assert!(floating_cta_visible(600.0));
        assert!(floating_cta_visible(500.0));
    }

    #[test]
    fn hidden_near_top() {
        assert!(!floating_cta_visible(100.0));
        assert!(!floating_cta_visible(0.0));
    }
}
