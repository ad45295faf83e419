//! External Services
//!
//! - api: background worker that performs file server requests off the UI loop

pub mod api;

pub use api::{ApiRequest, ApiResponse, Operation, Priority};
