//! Small browser utilities shared by the pages.
//!
//! - **Clock**: `now()` reads the browser clock as a `chrono` UTC timestamp,
//!   used for the "last refreshed" stamp and relative scan times.
//! - **User Feedback**: `show_toast` displays a temporary notification.
//! - **Formatting**: `format_count` renders counts with thousands separators.

use chrono::{DateTime, Utc};
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How often relative times ("3 minutes ago") are re-rendered.
pub const TICK_MILLIS: u32 = 30_000;

/// Current browser time.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

pub fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

/// Displays a temporary notification message in the corner of the screen.
///
/// Creates and injects a styled `div` into the DOM. The toast removes itself
/// after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
