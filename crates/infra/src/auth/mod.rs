//! Request authentication
//!
//! MaxCDN authenticates every call with a two-legged OAuth1 signature made
//! from the consumer key/secret pair. There is no token exchange and no
//! refresh.

pub mod oauth1;

pub use oauth1::Signer;
