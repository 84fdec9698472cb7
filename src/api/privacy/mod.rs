pub mod client;
pub mod models;

pub use client::PrivacyClient;
pub use models::{ApiError, Transaction};
