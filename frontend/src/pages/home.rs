use yew::prelude::*;

use crate::components::{
    about::About,
    accordion::{Faq, Services},
    before_after::BeforeAfter,
    booking::{Booking, BookingSelection},
    carousel::TourCarousel,
    floating_cta::FloatingCta,
    hero::Hero,
    lightbox::Gallery,
    reveal::StaggerGrid,
};
use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"Reviews"}</span>
                    <h2 class="section-title">{"What Guests Say"}</h2>
                </div>
                <StaggerGrid class="testimonials-slider">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <blockquote class="testimonial-card">
                            <p>{t.quote}</p>
                            <cite>{t.author}</cite>
                        </blockquote>
                    }) }
                </StaggerGrid>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Shared by every booking button on the page
    let selection = use_state(BookingSelection::default);

    let on_selection_change = {
        let selection = selection.clone();
        Callback::from(move |next: BookingSelection| selection.set(next))
    };

    let booking_href: AttrValue = selection.url().into();

    html! {
        <>
            <Hero />
            <About />
            <Services />
            <BeforeAfter />
            <Gallery />
            <TourCarousel />
            <Testimonials />
            <Faq />
            <Booking selection={(*selection).clone()} on_change={on_selection_change} />
            <FloatingCta href={booking_href} />
        </>
    }
}
