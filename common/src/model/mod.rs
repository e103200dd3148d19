pub mod connection;
pub mod credential;
pub mod page;
pub mod source;
