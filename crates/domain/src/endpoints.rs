//! Endpoint path catalog
//!
//! Paths are relative to `{host}/{alias}`; the leading slash is optional when
//! handed to the client.
//!
//! ```rust
//! use maxcdn_domain::endpoints::{self, StatsReport};
//!
//! assert_eq!(endpoints::pull_zone(123456), "/zones/pull.json/123456");
//! assert_eq!(endpoints::pull_zone_cache("123456"), "/zones/pull.json/123456/cache");
//! assert_eq!(endpoints::stats_by(StatsReport::Hourly), "/reports/stats.json/hourly");
//! ```

use std::fmt::Display;

pub const ACCOUNT: &str = "/account.json";
pub const ACCOUNT_ADDRESS: &str = "/account.json/address";
pub const ZONES: &str = "/zones.json";
pub const PULL_ZONES: &str = "/zones/pull.json";
pub const POPULAR_FILES: &str = "/reports/popularfiles.json";
pub const STATS: &str = "/reports/stats.json";
pub const LOGS: &str = "/v3/reporting/logs.json";
pub const USERS: &str = "/users.json";

/// Granularity of a time-bucketed stats report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsReport {
    Hourly,
    Daily,
    Monthly,
}

crate::impl_path_segment_conversions!(StatsReport {
    Hourly => "hourly",
    Daily => "daily",
    Monthly => "monthly",
});

/// `/zones/pull.json/{zone_id}`
pub fn pull_zone(zone_id: impl Display) -> String {
    format!("{PULL_ZONES}/{zone_id}")
}

/// `/zones/pull.json/{zone_id}/cache`, the purge target for a zone.
pub fn pull_zone_cache(zone_id: impl Display) -> String {
    format!("{PULL_ZONES}/{zone_id}/cache")
}

/// `/reports/stats.json/{report}`
pub fn stats_by(report: StatsReport) -> String {
    format!("{STATS}/{report}")
}

/// `/users.json/{user_id}`
pub fn user(user_id: impl Display) -> String {
    format!("{USERS}/{user_id}")
}
