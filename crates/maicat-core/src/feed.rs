use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::error::Result;
use crate::reconcile::CommunityEntry;
use crate::record::RawSong;

/// HTTP client for the upstream JSON feeds.
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the primary song feed.
    pub async fn fetch_songs(&self, url: &str) -> Result<Vec<RawSong>> {
        let records: Vec<RawSong> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!("Fetched {} song records from {}", records.len(), url);
        Ok(records)
    }

    /// Fetch the community difficulty dataset.
    pub async fn fetch_community(&self, url: &str) -> Result<Vec<CommunityEntry>> {
        let entries: Vec<CommunityEntry> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!("Fetched {} community ratings from {}", entries.len(), url);
        Ok(entries)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}
