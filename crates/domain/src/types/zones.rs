//! Mappers for `/zones/pull.json`

use serde::{Deserialize, Serialize};

use super::de::{lenient_i64, lenient_string};
use super::Extra;

/// `data` of `GET /zones/pull.json/{zone_id}` and `POST|PUT /zones/pull.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pullzone {
    pub pullzone: PullzoneDetails,
}

/// `data` of `GET /zones/pull.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pullzones {
    #[serde(deserialize_with = "lenient_i64")]
    pub current_page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub pages: i64,
    pub pullzones: Vec<PullzoneDetails>,
    #[serde(deserialize_with = "lenient_i64")]
    pub total: i64,
}

// Most flags arrive as "0"/"1" strings; a few endpoints send bare numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullzoneDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub label: String,
    pub url: String,
    pub cdn_url: String,
    pub tmp_url: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub zone_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub port: String,
    #[serde(deserialize_with = "lenient_string")]
    pub compress: String,
    #[serde(deserialize_with = "lenient_string")]
    pub backend_compress: String,
    #[serde(deserialize_with = "lenient_string")]
    pub queries: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cache_valid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub expires: String,
    #[serde(deserialize_with = "lenient_string")]
    pub inactive: String,
    #[serde(deserialize_with = "lenient_string")]
    pub locked: String,
    #[serde(deserialize_with = "lenient_string")]
    pub suspend: String,
    pub creation_date: String,
    #[serde(flatten)]
    pub extra: Extra,
}
