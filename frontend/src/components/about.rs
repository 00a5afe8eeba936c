use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::ABOUT_IMAGES;

/// Which of the two about images sits in front, and whether the pair is
/// mid-fade.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AboutSwap {
    pub swapped: bool,
    pub fading: bool,
}

impl AboutSwap {
    pub fn fade_out(self) -> Self {
        Self { fading: true, ..self }
    }

    /// Exchanges the sources and fades back in.
    pub fn swap(self) -> Self {
        Self { swapped: !self.swapped, fading: false }
    }

    /// `(main, accent)` image sources.
    pub fn sources(&self, pair: (&'static str, &'static str)) -> (&'static str, &'static str) {
        if self.swapped {
            (pair.1, pair.0)
        } else {
            pair
        }
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let swap = use_state_eq(AboutSwap::default);
    let pending_fade = use_mut_ref(|| None::<Timeout>);

    {
        let swap = swap.clone();
        use_interval(
            move || {
                let faded = swap.fade_out();
                swap.set(faded);
                let setter = swap.setter();
                *pending_fade.borrow_mut() = Some(Timeout::new(config::ABOUT_SWAP_FADE_MS, move || {
                    setter.set(faded.swap());
                }));
            },
            config::ABOUT_SWAP_INTERVAL_MS,
        );
    }

    let (main_src, accent_src) = swap.sources(ABOUT_IMAGES);
    let fade_class = swap.fading.then_some("fading");

    html! {
        <section id="about" class="about">
            <div class="container about-grid">
                <Reveal class="about-images">
                    <img class={classes!("about-img-main", fade_class)} src={main_src} alt="Inside Sensible Korean Salon" />
                    <img class={classes!("about-img-accent", fade_class)} src={accent_src} alt="The Sensible team" />
                </Reveal>
                <Reveal class="about-content">
                    <span class="section-tag">{"Our Story"}</span>
                    <h2 class="section-title">{"Korean Craft, Unhurried Care"}</h2>
                    <p>{"Our stylists trained in Seoul's busiest salons and brought the ritual with them: a real consultation, a scalp-first wash and a finish that still works on day three."}</p>
                    <p>{"We keep the book small so nobody is rushed, and every visit ends with styling tips you can actually repeat at home."}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: (&str, &str) = ("a.webp", "b.webp");

    #[test]
    fn swap_cycle_alternates_sources() {
        let start = AboutSwap::default();
        assert_eq!(start.sources(PAIR), ("a.webp", "b.webp"));

        let faded = start.fade_out();
        assert!(faded.fading);
        // Sources only change once the fade completes
        assert_eq!(faded.sources(PAIR), ("a.webp", "b.webp"));

        let swapped = faded.swap();
        assert!(!swapped.fading);
        assert_eq!(swapped.sources(PAIR), ("b.webp", "a.webp"));

        assert_eq!(swapped.fade_out().swap().sources(PAIR), PAIR);
    }
}
