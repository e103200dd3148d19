pub mod context_icon;
pub mod filter_toolbar;
pub mod pagination;
pub mod refresh_time_button;
pub mod simple_dropdown;
pub mod table_header;
