//! Type definitions shared by every layer
//!
//! - `response` - API success envelope

pub mod response;

pub use response::ApiResponse;
