//! Application configuration.
//!
//! Centralized configuration for the BandConnect frontend.
//! Registration limits (file count, sizes, lengths) live in
//! [`bandconnect::config`]; this module only holds web-side settings.

/// Registration API base URL.
pub const API_BASE_URL: &str = "http://localhost:3000/api";

/// Application name.
///
/// Displayed in the page title and the footer.
pub const APP_NAME: &str = "BandConnect";

/// Where the "Log in here" link points.
pub const LOGIN_URL: &str = "/login";
