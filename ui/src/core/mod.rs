//! Platform-agnostic plumbing shared by the site components.

pub mod config;
pub mod platform;
pub mod timing;
