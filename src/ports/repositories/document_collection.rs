use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::MarketResult;
use crate::domain::models::{
    Banner, DiscoverTag, EmploymentRequest, Friendship, Job, Notification, Office, Tournament,
    User, UserReport,
};
use crate::domain::value_objects::RecordId;

/// A persistable aggregate root
pub trait Document: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Name of the backing collection
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;
}

macro_rules! document {
    ($ty:ty, $collection:literal) => {
        impl Document for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> &RecordId {
                &self.id
            }
        }
    };
}

document!(User, "users");
document!(Job, "jobs");
document!(Office, "offices");
document!(DiscoverTag, "discover_tags");
document!(Banner, "banners");
document!(Tournament, "tournaments");
document!(EmploymentRequest, "employment_requests");
document!(Notification, "notifications");
document!(Friendship, "friendships");
document!(UserReport, "user_reports");

/// Port over one collection of the document database.
///
/// The surface is deliberately full-document read and replace: callers load
/// an aggregate, mutate it in memory and write the whole thing back. There
/// is no field-level patching at this layer.
#[async_trait]
pub trait DocumentCollection<T: Document>: Send + Sync + 'static {
    /// Insert a new document
    async fn insert(&self, document: T) -> MarketResult<()>;

    /// Fetch a document by id
    async fn find(&self, id: &RecordId) -> MarketResult<Option<T>>;

    /// Replace an existing document whole; false when the id is absent
    async fn replace(&self, document: &T) -> MarketResult<bool>;

    /// Remove a document; false when the id is absent
    async fn remove(&self, id: &RecordId) -> MarketResult<bool>;

    /// All documents in insertion order
    async fn list(&self) -> MarketResult<Vec<T>>;

    /// Number of documents in the collection
    async fn count(&self) -> MarketResult<u64>;
}
