//! Typed helpers for the commonly used endpoints

use std::fmt::Display;

use maxcdn_domain::endpoints::{self, StatsReport};
use maxcdn_domain::types::{
    Account, AccountAddress, Logs, PopularFiles, Pullzone, Pullzones, Stats, StatsSummary, User,
    Users,
};
use maxcdn_domain::{Envelope, Form, Result};
use reqwest::Method;

use super::client::MaxCdn;

impl MaxCdn {
    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn account(&self) -> Result<Account> {
        self.fetch(Method::GET, endpoints::ACCOUNT, None).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn account_address(&self) -> Result<AccountAddress> {
        self.fetch(Method::GET, endpoints::ACCOUNT_ADDRESS, None).await
    }

    /// List pull zones; `form` carries paging (`page`, `page_size`).
    ///
    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn pull_zones(&self, form: Option<&Form>) -> Result<Pullzones> {
        self.fetch(Method::GET, endpoints::PULL_ZONES, form).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn pull_zone(&self, zone_id: impl Display + Send) -> Result<Pullzone> {
        self.fetch(Method::GET, &endpoints::pull_zone(zone_id), None).await
    }

    /// Create a pull zone; `form` needs at least `name` and `url`.
    ///
    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn create_pull_zone(&self, form: &Form) -> Result<Pullzone> {
        self.fetch(Method::POST, endpoints::PULL_ZONES, Some(form)).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn update_pull_zone(
        &self,
        zone_id: impl Display + Send,
        form: &Form,
    ) -> Result<Pullzone> {
        self.fetch(Method::PUT, &endpoints::pull_zone(zone_id), Some(form)).await
    }

    /// # Errors
    /// See [`MaxCdn::request`].
    pub async fn delete_pull_zone(&self, zone_id: impl Display + Send) -> Result<Envelope> {
        self.delete(&endpoints::pull_zone(zone_id), None).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn popular_files(&self, form: Option<&Form>) -> Result<PopularFiles> {
        self.fetch(Method::GET, endpoints::POPULAR_FILES, form).await
    }

    /// Aggregate traffic over the requested window.
    ///
    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn stats_summary(&self, form: Option<&Form>) -> Result<StatsSummary> {
        self.fetch(Method::GET, endpoints::STATS, form).await
    }

    /// Traffic bucketed by `report`.
    ///
    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn stats(&self, report: StatsReport, form: Option<&Form>) -> Result<Stats> {
        self.fetch(Method::GET, &endpoints::stats_by(report), form).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn hourly_stats(&self, form: Option<&Form>) -> Result<Stats> {
        self.stats(StatsReport::Hourly, form).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn daily_stats(&self, form: Option<&Form>) -> Result<Stats> {
        self.stats(StatsReport::Daily, form).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn monthly_stats(&self, form: Option<&Form>) -> Result<Stats> {
        self.stats(StatsReport::Monthly, form).await
    }

    /// One page of raw access logs. Pass the returned `next_page_key` back
    /// as `start` to continue.
    ///
    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn logs(&self, form: Option<&Form>) -> Result<Logs> {
        self.fetch(Method::GET, endpoints::LOGS, form).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn users(&self) -> Result<Users> {
        self.fetch(Method::GET, endpoints::USERS, None).await
    }

    /// # Errors
    /// See [`MaxCdn::fetch`].
    pub async fn user(&self, user_id: impl Display + Send) -> Result<User> {
        self.fetch(Method::GET, &endpoints::user(user_id), None).await
    }
}
