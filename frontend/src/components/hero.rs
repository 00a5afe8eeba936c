use yew::prelude::*;

use crate::components::nav::AnchorLink;
use crate::config;
use crate::hooks::{use_scroll_y, use_viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    pub fn style(&self) -> String {
        format!("transform: translateY({}px); opacity: {};", self.translate_y, self.opacity)
    }
}

/// Offset and fade for the hero copy. `None` on narrow viewports, where the
/// effect is skipped entirely. Past one viewport height the frame holds still.
pub fn parallax_frame(scroll_y: f64, viewport_width: f64, viewport_height: f64) -> Option<ParallaxFrame> {
    if viewport_width < config::PARALLAX_MIN_WIDTH || viewport_height <= 0.0 {
        return None;
    }
    let scrolled = scroll_y.clamp(0.0, viewport_height);
    Some(ParallaxFrame {
        translate_y: scrolled * config::PARALLAX_RATE,
        opacity: 1.0 - (scrolled / viewport_height) * config::PARALLAX_FADE,
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_y = use_scroll_y();
    let (width, height) = use_viewport();
    let style = parallax_frame(scroll_y, width, height).map(|frame| frame.style());

    html! {
        <section id="home" class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-content" {style}>
                <p class="hero-kicker">{"Seoul-trained stylists in the heart of the city"}</p>
                <h1 class="hero-title">{"Sensible Korean Salon"}</h1>
                <p class="hero-subtitle">{"Soft perms, precision cuts and head spa rituals, done the Korean way."}</p>
                <div class="hero-buttons">
                    <AnchorLink href="#contact" class="btn btn-primary">{"Book a visit"}</AnchorLink>
                    <AnchorLink href="#services" class="btn btn-outline">{"Our services"}</AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_below_tablet_width() {
        assert_eq!(parallax_frame(200.0, 767.0, 900.0), None);
        assert!(parallax_frame(200.0, 768.0, 900.0).is_some());
    }

    #[test]
    fn moves_and_fades_with_scroll() {
        let frame = parallax_frame(400.0, 1280.0, 800.0).unwrap();
        assert!((frame.translate_y - 120.0).abs() < 1e-9);
        assert!((frame.opacity - 0.75).abs() < 1e-9);

        let top = parallax_frame(0.0, 1280.0, 800.0).unwrap();
        assert_eq!(top, ParallaxFrame { translate_y: 0.0, opacity: 1.0 });
    }

    #[test]
    fn holds_past_one_viewport() {
        let edge = parallax_frame(800.0, 1280.0, 800.0);
        assert_eq!(parallax_frame(5_000.0, 1280.0, 800.0), edge);
        assert!((edge.unwrap().opacity - 0.5).abs() < 1e-9);
    }
}
