//! Mapper for the paginated raw access-log report

use serde::{Deserialize, Serialize};

use super::de::{lenient_i64, lenient_opt_string, lenient_string};
use super::Extra;

/// `data` of `GET /v3/reporting/logs.json`
///
/// Pages are chained through `next_page_key`; pass it back as the
/// `start` form parameter to fetch the following page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logs {
    #[serde(deserialize_with = "lenient_i64")]
    pub limit: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub next_page_key: Option<String>,
    pub records: Vec<LogRecord>,
}

impl Logs {
    pub fn has_next_page(&self) -> bool {
        self.next_page_key.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogRecord {
    pub time: String,
    #[serde(deserialize_with = "lenient_string")]
    pub zone_id: String,
    pub client_ip: String,
    pub method: String,
    pub scheme: String,
    pub hostname: String,
    pub uri: String,
    pub query_string: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub status: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub bytes: i64,
    pub cache_status: String,
    pub referer: String,
    pub user_agent: String,
    pub pop: String,
    #[serde(flatten)]
    pub extra: Extra,
}
