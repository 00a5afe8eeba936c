use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod hooks;
mod observe;
mod components {
    pub mod about;
    pub mod accordion;
    pub mod before_after;
    pub mod booking;
    pub mod carousel;
    pub mod cursor;
    pub mod floating_cta;
    pub mod footer;
    pub mod hero;
    pub mod lightbox;
    pub mod nav;
    pub mod reveal;
    pub mod styles;
}
mod pages {
    pub mod home;
}

use components::{
    cursor::CursorFollower,
    footer::Footer,
    nav::Nav,
    styles::RuntimeStyles,
};
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <RuntimeStyles />
            <CursorFollower />
            <Nav />
            <main>
                <Home />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Sensible Korean Salon website loaded");
    yew::Renderer::<App>::new().render();
}
