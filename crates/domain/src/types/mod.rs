//! Typed payload mappers for the commonly called endpoints
//!
//! Each type describes the `data` member of a response envelope. Fields the
//! mapper does not name are kept in a flattened `extra` map so a payload
//! survives a decode/encode cycle intact.
//!
//! Numeric fields go through the lenient helpers in [`de`]: the API returns
//! the same logical value as an integer, a float literal or a numeric string
//! depending on endpoint and API version.

pub mod account;
pub mod de;
pub mod envelope;
pub mod logs;
pub mod reports;
pub mod users;
pub mod zones;

pub use account::{Account, AccountAddress, AccountDetails, Address};
pub use envelope::{Envelope, ErrorObject};
pub use logs::{LogRecord, Logs};
pub use reports::{PopularFile, PopularFiles, PopularFilesSummary, Stats, StatsRecord, StatsSummary};
pub use users::{User, UserDetails, Users};
pub use zones::{Pullzone, PullzoneDetails, Pullzones};

/// Untyped remainder of a payload object.
pub type Extra = serde_json::Map<String, serde_json::Value>;
