//! Mappers for `/users.json`

use serde::{Deserialize, Serialize};

use super::de::{lenient_i64, lenient_string};
use super::Extra;

/// `data` of `GET /users.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Users {
    #[serde(deserialize_with = "lenient_i64")]
    pub current_page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub page_size: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub pages: i64,
    pub users: Vec<UserDetails>,
    #[serde(deserialize_with = "lenient_i64")]
    pub total: i64,
}

/// `data` of `GET|PUT /users.json/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user: UserDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub timezone: String,
    pub date_created: String,
    pub date_last_login: String,
    #[serde(deserialize_with = "lenient_string")]
    pub brand_id: String,
    #[serde(flatten)]
    pub extra: Extra,
}
