//! Shared model and console logic for the discovery console.
//!
//! Everything in this crate is free of browser and server dependencies so the
//! frontend and the console host agree on the wire format, and so the list,
//! selection and drill-down behavior can be tested natively.

pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod forms;
pub mod list;
pub mod model;
pub mod requests;
pub mod selection;
pub mod time;
