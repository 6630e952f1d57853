//! Mappers for `/account.json` and `/account.json/address`

use serde::{Deserialize, Serialize};

use super::de::lenient_string;
use super::Extra;

/// `data` of `GET|PUT /account.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub account: AccountDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub alias: String,
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    pub date_created: String,
    pub date_updated: String,
    #[serde(deserialize_with = "lenient_string")]
    pub zone_credits: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ssl_credits: String,
    #[serde(deserialize_with = "lenient_string")]
    pub storage_quota: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `data` of `GET|PUT /account.json/address`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAddress {
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    #[serde(deserialize_with = "lenient_string")]
    pub zip: String,
    pub country: String,
    pub date_created: String,
    pub date_updated: String,
    #[serde(flatten)]
    pub extra: Extra,
}
