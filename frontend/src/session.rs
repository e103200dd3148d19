//! Session token storage.
//!
//! The only place in the console that touches `localStorage`. The app reads
//! the token once at boot and passes it into the `ApiClient`.

use web_sys::Storage;

const TOKEN_KEY: &str = "authToken";

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Token saved by a previous login, if any.
pub fn restore_token() -> Option<String> {
    storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(TOKEN_KEY, token).is_err() {
            gloo_console::error!("Could not persist the session token");
        }
    }
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
