//! # MaxCDN Domain
//!
//! Data types and models for the MaxCDN REST API client.
//!
//! This crate contains:
//! - The client error type and `Result` alias
//! - Client configuration structures
//! - Form parameter container used for query strings and request bodies
//! - The endpoint path catalog
//! - Typed payload mappers for the commonly called endpoints
//!
//! ## Architecture
//! - No dependencies on other MaxCDN crates
//! - No I/O; signing, transport and parsing live in `maxcdn-infra`

pub mod config;
pub mod constants;
pub mod endpoints;
pub mod errors;
pub mod form;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use form::Form;
pub use types::*;
