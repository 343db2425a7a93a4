use crate::error::SourceError;
use crate::models::ListingKind;
use crate::sources::decode::decode_listings;
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Reads one listing kind from the marketplace REST API
pub struct RestListingSource<T> {
    client: Client,
    url: String,
    _listing: PhantomData<fn() -> T>,
}

impl<T> RestListingSource<T> {
    /// Create a source for `kind` under `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: &str, kind: ListingKind) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self::with_client(client, base_url, kind))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(client: Client, base_url: &str, kind: ListingKind) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), kind.endpoint());
        Self {
            client,
            url,
            _listing: PhantomData,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<T> ListingSource for RestListingSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn fetch(&self) -> Result<Vec<T>, SourceError> {
        info!("Fetching listings from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Listing API returned status: {}", response.status());
            return Err(SourceError::Status(response.status()));
        }

        let payload: Value = response.json().await?;
        debug!("Received listing payload from {}", self.url);

        Ok(decode_listings(payload, self.source_name()))
    }

    fn source_name(&self) -> &'static str {
        "marketplace API"
    }
}
