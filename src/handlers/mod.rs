//! Event Handlers
//!
//! - api: responses from the background API service
//! - keyboard: user keyboard input
//! - mouse: clicks on the rendered view

pub mod api;
pub mod keyboard;
pub mod mouse;

pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
