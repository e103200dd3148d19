pub mod add_source;
pub mod connections;
pub mod credentials;
