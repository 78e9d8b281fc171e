// wyzely-api: Async Rust client for the Wyze cloud IoT API

pub mod actions;
pub mod auth;
pub mod client;
pub mod devices;
pub mod error;
pub mod events;
pub mod models;
pub mod properties;
pub mod token;
pub mod transport;

pub use client::WyzeClient;
pub use error::Error;
pub use transport::TransportConfig;
