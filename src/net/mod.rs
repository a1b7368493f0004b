//! Outbound request plumbing.

pub mod api;

pub use api::ApiClient;
