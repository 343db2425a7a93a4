use crate::error::SourceError;
use crate::sources::decode::decode_listings;
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a saved API response (a JSON array of listings) from disk
pub struct JsonFileSource<T> {
    path: PathBuf,
    _listing: PhantomData<fn() -> T>,
}

impl<T> JsonFileSource<T> {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _listing: PhantomData,
        }
    }
}

#[async_trait]
impl<T> ListingSource for JsonFileSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn fetch(&self) -> Result<Vec<T>, SourceError> {
        info!("Loading listings from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let payload: Value = serde_json::from_str(&raw)?;

        Ok(decode_listings(payload, self.source_name()))
    }

    fn source_name(&self) -> &'static str {
        "listing file"
    }
}
