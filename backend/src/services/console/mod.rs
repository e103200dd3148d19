//! Runtime configuration endpoint for the browser console.
//!
//! The frontend bundle is static and knows nothing about the environment it
//! runs in. On boot it requests `GET /console/config.json`, which returns the
//! `ConsoleConfig` this host resolved from its environment at start: the
//! discovery API base URL and the authorization scheme to sign requests with.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod get_config;

const API_PATH: &str = "/console";

/// Configures and returns the Actix scope for console routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config.json", get().to(get_config::process))
}
