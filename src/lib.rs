pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod nav;
pub mod session;
pub mod store;
pub mod types;
