//! HTTP request handlers.

pub mod bulk;
pub mod health;
pub mod search;

pub use bulk::*;
pub use health::*;
pub use search::*;
