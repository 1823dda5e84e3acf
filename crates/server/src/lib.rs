//! HTTP API server for the upclink barcode proxy.
//!
//! This crate provides the HTTP surface:
//! - Single item lookup by barcode/UPC
//! - Bulk lookup via file upload or comma-separated query list
//! - Health check

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
