//! Site configuration, provided to components through the Dioxus context.
//!
//! Launchers call [`SiteConfig::load`] once and hand the result to
//! `use_context_provider`; components read it back with [`use_site_config`],
//! which falls back to [`SiteConfig::default`] when nothing was provided.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::platform::{self, Platform};

/// Environment variable overriding the backend base URL.
pub const API_BASE_ENV: &str = "PRUFTNET_API_BASE";

/// Backend used when nothing else is configured (local dev server).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3333";

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/franktronics/pruftnet.app";

/// Delay between closing the waitlist dialog and resetting its status, so the
/// closing animation never shows the form flipping back.
pub const DEFAULT_RESET_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_base: String,
    pub repository_url: String,
    pub reset_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Resolve configuration for the running platform.
    ///
    /// `api_base` comes from (first hit wins): the runtime environment (native
    /// only), the build environment, the page origin (web), the local default.
    pub fn load() -> Self {
        let runtime = if cfg!(target_arch = "wasm32") {
            None
        } else {
            std::env::var(API_BASE_ENV).ok()
        };
        let api_base = resolve_api_base(
            runtime,
            option_env!("PRUFTNET_API_BASE"),
            platform::page_origin(),
        );
        debug!(platform = ?Platform::current(), api_base = %api_base, "Site configuration resolved");

        Self {
            api_base,
            ..Self::default()
        }
    }
}

fn resolve_api_base(
    runtime: Option<String>,
    build_time: Option<&str>,
    page_origin: Option<String>,
) -> String {
    [runtime, build_time.map(str::to_string), page_origin]
        .into_iter()
        .flatten()
        .map(|base| base.trim().to_string())
        .find(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Read the site configuration from context, or the defaults.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}
