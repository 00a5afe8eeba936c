use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::StaggerGrid;
use crate::config;
use crate::content::{GalleryImage, GALLERY};

#[derive(Clone, Debug, PartialEq)]
pub enum LightboxAction {
    Open(GalleryImage),
    Close,
    /// Sent a short while after closing so the hidden image stops loading.
    ClearImage,
}

/// The single shared overlay: whether it is shown and which image it holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    active: bool,
    image: Option<GalleryImage>,
}

impl Lightbox {
    pub fn open(&mut self, image: GalleryImage) {
        self.image = Some(image);
        self.active = true;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    /// Drops the copied source, unless the overlay was reopened meanwhile.
    pub fn clear_image(&mut self) {
        if !self.active {
            self.image = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn image(&self) -> Option<&GalleryImage> {
        self.image.as_ref()
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Open(image) => self.open(image),
            LightboxAction::Close => self.close(),
            LightboxAction::ClearImage => self.clear_image(),
        }
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Escape closes the overlay, and only while it is showing.
pub fn closes_on_key(active: bool, key: &str) -> bool {
    active && key == "Escape"
}

/// A click closes only when it lands on the backdrop itself, not on its content.
pub fn is_backdrop_click<T: PartialEq>(target: Option<T>, overlay: Option<T>) -> bool {
    target.is_some() && target == overlay
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_reducer(Lightbox::default);
    let overlay = use_node_ref();
    let pending_clear = use_mut_ref(|| None::<Timeout>);

    let close: Rc<dyn Fn()> = {
        let dispatcher = lightbox.dispatcher();
        let pending_clear = pending_clear.clone();
        Rc::new(move || {
            dispatcher.dispatch(LightboxAction::Close);
            let dispatcher = dispatcher.clone();
            *pending_clear.borrow_mut() = Some(Timeout::new(config::LIGHTBOX_CLEAR_DELAY_MS, move || {
                dispatcher.dispatch(LightboxAction::ClearImage);
            }));
        })
    };

    {
        let close = close.clone();
        let active = lightbox.is_active();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closes_on_key(active, &e.key()) {
                close();
            }
        });
    }

    let on_close = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close())
    };

    // Only clicks on the backdrop itself close; clicks on the image do not
    let on_backdrop = {
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            if is_backdrop_click(e.target_dyn_into::<Element>(), overlay.cast::<Element>()) {
                close();
            }
        })
    };

    let open = |image: &GalleryImage| {
        let dispatcher = lightbox.dispatcher();
        let pending_clear = pending_clear.clone();
        let image = image.clone();
        Callback::from(move |_: MouseEvent| {
            pending_clear.borrow_mut().take();
            dispatcher.dispatch(LightboxAction::Open(image.clone()));
        })
    };

    let shown = lightbox.image();

    html! {
        <>
            <section id="gallery" class="gallery">
                <div class="container">
                    <div class="section-header">
                        <span class="section-tag">{"Portfolio"}</span>
                        <h2 class="section-title">{"Recent Work"}</h2>
                    </div>
                    <StaggerGrid class="gallery-grid">
                        { for GALLERY.iter().map(|image| html! {
                            <div class="gallery-item" onclick={open(image)}>
                                <img src={image.src} alt={image.caption} loading="lazy" />
                                <div class="gallery-overlay">
                                    <span>{image.caption}</span>
                                </div>
                            </div>
                        }) }
                    </StaggerGrid>
                </div>
            </section>
            <div ref={overlay} class={classes!("lightbox", lightbox.is_active().then_some("active"))} onclick={on_backdrop}>
                <button class="lightbox-close" onclick={on_close} aria-label="Close">{"×"}</button>
                <div class="lightbox-content">
                    <img class="lightbox-img" src={shown.map(|image| image.src)} alt={shown.map(|image| image.caption)} />
                    <p class="lightbox-caption">{shown.map(|image| image.caption).unwrap_or_default()}</p>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_copies_clicked_image_exactly() {
        for (i, image) in GALLERY.iter().enumerate() {
            let mut lightbox = Lightbox::default();
            lightbox.apply(LightboxAction::Open(GALLERY[i].clone()));
            assert!(lightbox.is_active());
            assert_eq!(lightbox.image().map(|img| img.src), Some(image.src));
            assert_eq!(lightbox.image().map(|img| img.caption), Some(image.caption));
        }
    }

    #[test]
    fn close_clears_active_and_later_the_source() {
        let mut lightbox = Lightbox::default();
        lightbox.open(GALLERY[0].clone());

        lightbox.apply(LightboxAction::Close);
        assert!(!lightbox.is_active());
        assert!(lightbox.image().is_some());

        lightbox.apply(LightboxAction::ClearImage);
        assert_eq!(lightbox.image(), None);
    }

    #[test]
    fn late_clear_does_not_blank_a_reopened_lightbox() {
        let mut lightbox = Lightbox::default();
        lightbox.open(GALLERY[0].clone());
        lightbox.close();
        lightbox.open(GALLERY[1].clone());
        lightbox.clear_image();

        assert!(lightbox.is_active());
        assert_eq!(lightbox.image(), Some(&GALLERY[1]));
    }

    #[test]
    fn escape_closes_only_an_open_lightbox() {
        assert!(closes_on_key(true, "Escape"));
        assert!(!closes_on_key(false, "Escape"));
        assert!(!closes_on_key(true, "Enter"));
        assert!(!closes_on_key(true, "Esc "));
    }

    #[test]
    fn escape_or_backdrop_click_clears_active_state() {
        let mut lightbox = Lightbox::default();
        lightbox.open(GALLERY[2].clone());
        if closes_on_key(lightbox.is_active(), "Escape") {
            lightbox.apply(LightboxAction::Close);
        }
        assert!(!lightbox.is_active());

        lightbox.open(GALLERY[2].clone());
        if is_backdrop_click(Some("overlay"), Some("overlay")) {
            lightbox.apply(LightboxAction::Close);
        }
        assert!(!lightbox.is_active());
    }

    #[test]
    fn clicks_inside_content_are_not_backdrop_clicks() {
        assert!(is_backdrop_click(Some(1), Some(1)));
        assert!(!is_backdrop_click(Some(2), Some(1)));
        assert!(!is_backdrop_click(Some(2), None));
        assert!(!is_backdrop_click::<u8>(None, None));
    }

    #[test]
    fn closing_twice_is_harmless() {
        let mut lightbox = Lightbox::default();
        lightbox.close();
        lightbox.close();
        assert_eq!(lightbox, Lightbox::default());
    }
}
