use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::content::TOUR_SLIDES;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

/// Slide position. `index` stays in `[0, len)`; an empty deck pins it at 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(index) => self.go_to(index),
        }
    }

    pub fn track_style(&self) -> String {
        format!("transform: translateX(-{}%);", self.index * 100)
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(TourCarousel)]
pub fn tour_carousel() -> Html {
    let carousel = use_reducer(|| Carousel::new(TOUR_SLIDES.len()));
    // Bumped on every manual navigation to restart the auto-advance countdown
    let restarts = use_state(|| 0u32);

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(move |_| {
            let interval = (TOUR_SLIDES.len() > 1).then(|| {
                Interval::new(config::CAROUSEL_INTERVAL_MS, move || {
                    dispatcher.dispatch(CarouselAction::Next);
                })
            });
            debug!("carousel auto-advance (re)started");
            move || drop(interval)
        }, *restarts);
    }

    let navigate = {
        let dispatcher = carousel.dispatcher();
        let restarts = restarts.clone();
        move |action: CarouselAction| {
            let dispatcher = dispatcher.clone();
            let restarts = restarts.clone();
            Callback::from(move |_: MouseEvent| {
                dispatcher.dispatch(action);
                restarts.set(restarts.wrapping_add(1));
            })
        }
    };

    let current = carousel.index();

    html! {
        <section id="tour" class="tour">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"Salon Tour"}</span>
                    <h2 class="section-title">{"Step Inside"}</h2>
                </div>
                <div class="carousel">
                    <div class="carousel-viewport">
                        <div class="carousel-track" style={carousel.track_style()}>
                            { for TOUR_SLIDES.iter().map(|slide| html! {
                                <div class="carousel-slide">
                                    <img src={slide.src} alt={slide.title} loading="lazy" />
                                    <p class="slide-caption">{slide.title}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <button class="carousel-btn prev" onclick={navigate(CarouselAction::Prev)} aria-label="Previous slide">{"‹"}</button>
                    <button class="carousel-btn next" onclick={navigate(CarouselAction::Next)} aria-label="Next slide">{"›"}</button>
                    <div class="carousel-dots">
                        { for (0..TOUR_SLIDES.len()).map(|index| html! {
                            <button
                                class={classes!("carousel-dot", (index == current).then_some("active"))}
                                onclick={navigate(CarouselAction::GoTo(index))}
                                aria-label={format!("Go to slide {}", index + 1)}
                            />
                        }) }
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
    fn next_wraps_to_first() {
        let mut deck = Carousel::new(3);
        deck.next();
        deck.next();
        assert_eq!(deck.index(), 2);
        deck.next();
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut deck = Carousel::new(4);
        deck.prev();
        assert_eq!(deck.index(), 3);
    }

    #[test]
    fn next_then_prev_is_identity() {
        for start in 0..5 {
            let mut deck = Carousel::new(5);
            deck.go_to(start);
            deck.next();
            deck.prev();
            assert_eq!(deck.index(), start);
        }
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        let actions = [
            CarouselAction::Prev,
            CarouselAction::Prev,
            CarouselAction::GoTo(9),
            CarouselAction::Next,
            CarouselAction::GoTo(2),
            CarouselAction::Next,
            CarouselAction::Next,
            CarouselAction::Prev,
        ];
        let mut deck = Carousel::new(3);
        for action in actions {
            deck.apply(action);
            assert!(deck.index() < 3);
        }
    }

    #[test]
    fn out_of_range_dot_is_ignored() {
        let mut deck = Carousel::new(3);
        deck.go_to(1);
        deck.go_to(3);
        assert_eq!(deck.index(), 1);
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut deck = Carousel::new(0);
        deck.next();
        deck.prev();
        deck.go_to(0);
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn track_translates_by_whole_slides() {
        let mut deck = Carousel::new(4);
        assert_eq!(deck.track_style(), "transform: translateX(-0%);");
        deck.go_to(2);
        assert_eq!(deck.track_style(), "transform: translateX(-200%);");
    }

    #[test]
    fn reducer_applies_action() {
        let deck = Rc::new(Carousel::new(2));
        let deck = deck.reduce(CarouselAction::Next);
        assert_eq!(deck.index(), 1);
    }
}
