use log::Level;

pub const BUSINESS_NAME: &str = "Nova Durham Plumbing";
pub const BUSINESS_LEGAL_NAME: &str = "Nova Durham Plumbing Experts";

pub const PHONE_DISPLAY: &str = "(919) 655-5864";
pub const PHONE_URI: &str = "tel:+19196555864";

/// Pixels of vertical scroll after which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Height reserved for the fixed header when scrolling to an anchor.
pub const HEADER_OFFSET: f64 = 80.0;

/// Length of the mobile menu close transition.
pub const MENU_EXIT_MS: u32 = 250;

/// How many services the footer lists.
pub const FOOTER_SERVICE_COUNT: usize = 5;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose logging for local builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
