//! Shared UI crate for the Pruftnet site. Components, localization and the
//! waitlist flow live here; platform crates only provide routing and launch.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;
pub mod waitlist;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod dialog;
    pub use dialog::Dialog;
}

mod hero;
pub use hero::Hero;

/// Shared site theme, for platforms loading stylesheets as assets (web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
