use crate::error::SourceError;
use async_trait::async_trait;

/// Common trait for everything that can hand a listing page its collection.
/// The page fetches once when it is activated and filters locally afterwards.
#[async_trait]
pub trait ListingSource: Send + Sync {
    type Item: Send;

    /// Fetch the full listing collection
    async fn fetch(&self) -> Result<Vec<Self::Item>, SourceError>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

/// In-memory collections are their own source.
#[async_trait]
impl<T> ListingSource for Vec<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    async fn fetch(&self) -> Result<Vec<T>, SourceError> {
        Ok(self.clone())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
