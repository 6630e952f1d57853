//! Mappers for the popular-files and traffic-stats reports

use serde::{Deserialize, Serialize};

use super::de::{lenient_i64, lenient_string};
use super::Extra;

/// `data` of `GET /reports/popularfiles.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularFiles {
    #[serde(deserialize_with = "lenient_i64")]
    pub current_page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub pages: i64,
    #[serde(rename = "popularfiles")]
    pub popular_files: Vec<PopularFile>,
    pub summary: PopularFilesSummary,
    #[serde(deserialize_with = "lenient_i64")]
    pub total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularFile {
    #[serde(deserialize_with = "lenient_string")]
    pub bucket_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub size: String,
    pub timestamp: String,
    pub uri: String,
    pub vhost: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularFilesSummary {
    #[serde(deserialize_with = "lenient_string")]
    pub hit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub size: String,
}

/// One traffic bucket (or the aggregate of several).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub cache_hit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub noncache_hit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub size: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `data` of `GET /reports/stats.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSummary {
    pub stats: StatsRecord,
    #[serde(deserialize_with = "lenient_i64")]
    pub total: i64,
}

/// `data` of `GET /reports/stats.json/{report}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "lenient_i64")]
    pub current_page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub pages: i64,
    pub stats: Vec<StatsRecord>,
    pub summary: StatsRecord,
    #[serde(deserialize_with = "lenient_i64")]
    pub total: i64,
}
