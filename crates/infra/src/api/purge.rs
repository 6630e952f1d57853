//! Cache purge
//!
//! Purging a zone is a `DELETE` on `/zones/pull.json/{zone}/cache`. Adding a
//! `file` form parameter narrows the purge to that path.

use std::fmt::Display;

use maxcdn_domain::endpoints::pull_zone_cache;
use maxcdn_domain::{Envelope, Form, Result};
use tracing::instrument;

use super::client::MaxCdn;
use super::fanout::{fan_out, FanOutReport};

impl MaxCdn {
    /// Purge a zone's entire cache.
    ///
    /// # Errors
    /// See [`MaxCdn::request`].
    #[instrument(skip(self, zone_id), fields(zone = %zone_id))]
    pub async fn purge_zone(&self, zone_id: impl Display + Send) -> Result<Envelope> {
        self.delete(&pull_zone_cache(zone_id), None).await
    }

    /// Purge one file from a zone's cache.
    ///
    /// # Errors
    /// See [`MaxCdn::request`].
    #[instrument(skip(self, zone_id), fields(zone = %zone_id))]
    pub async fn purge_file(&self, zone_id: impl Display + Send, file: &str) -> Result<Envelope> {
        let form = Form::new().with("file", file);
        self.delete(&pull_zone_cache(zone_id), Some(&form)).await
    }

    /// Purge several zones concurrently.
    ///
    /// Every zone is attempted; check [`FanOutReport::has_failures`] or
    /// collapse with [`FanOutReport::into_result`].
    pub async fn purge_zones<I>(&self, zone_ids: I) -> FanOutReport<String>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let targets: Vec<String> = zone_ids.into_iter().map(|id| id.to_string()).collect();
        let client = self.clone();
        fan_out(targets, move |zone| {
            let client = client.clone();
            async move { client.purge_zone(zone).await }
        })
        .await
    }

    /// Purge several files of one zone concurrently, one request per file.
    pub async fn purge_files<I>(&self, zone_id: impl Display, files: I) -> FanOutReport<String>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let zone = zone_id.to_string();
        let targets: Vec<String> = files.into_iter().map(Into::into).collect();
        let client = self.clone();
        fan_out(targets, move |file| {
            let client = client.clone();
            let zone = zone.clone();
            async move { client.purge_file(zone, &file).await }
        })
        .await
    }
}
