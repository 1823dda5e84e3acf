//! Core domain types and shared logic for the upclink barcode proxy.
//!
//! This crate defines the canonical data model used across all other crates:
//! - Query identifiers (barcodes/UPCs) and batch parsing
//! - Lookup results and their wire representation
//! - Bearer access tokens
//! - Application configuration

pub mod config;
pub mod error;
pub mod lookup;
pub mod query;
pub mod token;

pub use config::{AppConfig, ServerConfig, UpstreamConfig};
pub use error::{Error, Result};
pub use lookup::LookupResult;
pub use query::Query;
pub use token::AccessToken;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;
