use std::rc::Rc;

use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::reveal::StaggerGrid;
use crate::content::{FAQS, SERVICES};

/// Exclusive open state for one group of items: at most one is open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Closes `index` if it is open, otherwise opens it and closes the rest.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index() == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

impl Reducible for Accordion {
    /// Index of the item to toggle.
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let mut next = *self;
        next.toggle(index);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // Height-based reveal: open answers grow to their content height
    let answer_style = if props.open {
        answer_ref
            .cast::<HtmlElement>()
            .map(|answer| format!("max-height: {}px;", answer.scroll_height()))
            .unwrap_or_else(|| "max-height: none;".to_string())
    } else {
        "max-height: 0px;".to_string()
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("active"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{&*props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div ref={answer_ref} class="faq-answer" style={answer_style}>
                <p>{&*props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"FAQ"}</span>
                    <h2 class="section-title">{"Good to Know"}</h2>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let dispatcher = accordion.dispatcher();
                        html! {
                            <FaqItem
                                question={*question}
                                answer={*answer}
                                open={accordion.is_open(index)}
                                on_toggle={Callback::from(move |_: ()| dispatcher.dispatch(index))}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"What We Do"}</span>
                    <h2 class="section-title">{"Our Services"}</h2>
                </div>
                <StaggerGrid class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let dispatcher = accordion.dispatcher();
                        let open = accordion.is_open(index);
                        html! {
                            <div
                                class={classes!("service-card", open.then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(index))}
                            >
                                <h3 class="service-name">{service.name}</h3>
                                <p class="service-summary">{service.summary}</p>
                                <span class="service-price">{service.price}</span>
                                <div class="service-details">
                                    <p>{service.details}</p>
                                </div>
                            </div>
                        }
                    }) }
                </StaggerGrid>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let mut group = Accordion::default();
        group.toggle(0);
        group.toggle(2);
        assert!(!group.is_open(0));
        assert!(group.is_open(2));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut group = Accordion::default();
        group.toggle(1);
        group.toggle(1);
        assert_eq!(group.open_index(), None);
    }

    #[test]
    fn is_open_agrees_with_open_index() {
        let mut group = Accordion::default();
        for index in [3, 1, 1, 4] {
            group.toggle(index);
            for i in 0..6 {
                assert_eq!(group.is_open(i), group.open_index() == Some(i));
            }
        }
    }

    #[test]
    fn at_most_one_open_after_any_toggle_sequence() {
        let mut group = Accordion::default();
        for index in [3, 1, 1, 4, 0, 0, 0, 2, 4] {
            group.toggle(index);
            let open = (0..5).filter(|&i| group.is_open(i)).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn groups_are_independent() {
        let mut faq = Accordion::default();
        let mut cards = Accordion::default();
        faq.toggle(0);
        cards.toggle(3);
        assert_eq!(faq.open_index(), Some(0));
        assert_eq!(cards.open_index(), Some(3));
    }
}
