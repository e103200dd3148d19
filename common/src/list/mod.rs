//! Remote list controller: binds user adjustable view state (sort, filters,
//! page) to a query against a paginated collection endpoint.
//!
//! - `schema`: the static description of a list (columns, filters, defaults).
//! - `view_state`: the client side state and its URL round trip.
//! - `query`: canonical serialization of a view state into a request query.
//! - `controller`: request bookkeeping, stale response discard and outcome.
//! - `pagination`: page arithmetic for the pagination controls.

pub mod controller;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod view_state;

pub use controller::{ListController, ListRequest, ListView, Resolution, Ticket};
pub use pagination::Pagination;
pub use schema::{Column, FilterCategory, ListSchema, CREDENTIALS_LIST, SOURCES_LIST};
pub use view_state::{Sort, SortDirection, ViewState, ViewStateError};
