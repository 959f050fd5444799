//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Base path for API requests.
///
/// Relative on purpose: the reverse proxy in front of the app forwards
/// `/api/*` to the backend, so the frontend never needs to know the
/// backend's host or port.
pub const API_BASE: &str = "/api";

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("/orders"), "/api/orders");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}
