//! MaxCDN API client
//!
//! Request assembly, dispatch, envelope parsing and concurrent fan-out for
//! the REST API at `{host}/{alias}/...`.
//!
//! # Architecture
//!
//! - [`request::RequestBuilder`] signs and assembles requests (no I/O)
//! - [`crate::http::Transport`] performs the round trip and is swappable
//! - [`envelope`] turns a response into an envelope or an error
//! - [`fanout`] runs one operation over many targets concurrently
//! - [`MaxCdn`] ties these together, plus typed and purge helpers

pub mod client;
pub mod envelope;
pub mod fanout;
pub mod purge;
pub mod request;
pub mod resources;

pub use client::MaxCdn;
pub use envelope::{decode_data, parse_envelope};
pub use fanout::{fan_out, FanOutReport, Outcome};
pub use request::RequestBuilder;
