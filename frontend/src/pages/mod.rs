pub mod credentials;
pub mod login;
pub mod sources;
