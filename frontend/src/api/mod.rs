//! HTTP access to the discovery API.
//!
//! Views never build absolute URLs, read the session token or talk to
//! `gloo_net` directly: they receive an [`ApiClient`] as a prop and call it.

mod client;

pub use client::{load_console_config, request_token, ApiClient};
