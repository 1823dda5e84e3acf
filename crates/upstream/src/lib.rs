//! Upstream marketplace API client for the upclink barcode proxy.
//!
//! This crate owns all outbound HTTP:
//! - OAuth2 client-credentials token exchange
//! - Single item-summary search calls
//! - Bulk fan-out sharing one token per batch

pub mod client;
pub mod error;

pub use client::EbayClient;
pub use error::UpstreamError;
