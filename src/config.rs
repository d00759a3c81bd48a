use log::Level;

pub const SLIDE_INTERVAL_MS: u32 = 5_000;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// Header turns more opaque once the page has scrolled past this offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const HEADER_BG_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const HEADER_BG_TOP: &str = "rgba(255, 255, 255, 0.96)";

// Marker line below the viewport top used to pick the active section.
pub const ACTIVE_NAV_OFFSET: f64 = 200.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const SHARE_POPUP_FEATURES: &str = "width=600,height=400";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}
