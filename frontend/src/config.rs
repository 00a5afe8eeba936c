use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose binding logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Scroll thresholds, in CSS pixels
pub const NAVBAR_SCROLLED_AT: f64 = 50.0;
pub const FLOATING_CTA_VISIBLE_AT: f64 = 500.0;
pub const ACTIVE_LINK_OFFSET: f64 = 100.0;
pub const SMOOTH_SCROLL_OFFSET: f64 = 80.0;

// Hero parallax
pub const PARALLAX_MIN_WIDTH: f64 = 768.0;
pub const PARALLAX_RATE: f64 = 0.3;
pub const PARALLAX_FADE: f64 = 0.5;

// Visibility reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STAGGER_THRESHOLD: f64 = 0.2;
pub const STAGGER_STEP_MS: u32 = 100;

// Timers, in milliseconds
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const ABOUT_SWAP_INTERVAL_MS: u32 = 4_000;
pub const ABOUT_SWAP_FADE_MS: u32 = 600;
pub const LIGHTBOX_CLEAR_DELAY_MS: u32 = 300;

// Cursor smoothing factors
pub const CURSOR_DOT_SMOOTHING: f64 = 0.2;
pub const CURSOR_RING_SMOOTHING: f64 = 0.1;

// Booking deep link
pub const WHATSAPP_NUMBER: &str = "821012345678";
pub const ANY_STYLIST: &str = "Any Stylist";

pub const FOOTER_YEAR_PLACEHOLDER: &str = "2024";
