use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        value_objects::RecordId,
    },
    ports::repositories::{Document, DocumentCollection},
};

/// In-memory collection for testing and development.
///
/// Documents live in a Vec so listings keep insertion order; lookups are
/// linear scans.
#[derive(Clone)]
pub struct InMemoryCollection<T: Document> {
    data: Arc<RwLock<Vec<T>>>,
}

impl<T: Document> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Document> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> DocumentCollection<T> for InMemoryCollection<T> {
    async fn insert(&self, document: T) -> MarketResult<()> {
        let mut data = self.data.write().await;

        if data.iter().any(|d| d.id() == document.id()) {
            return Err(MarketError::upstream(
                "insert",
                format!("duplicate id in {}: {}", T::COLLECTION, document.id()),
            ));
        }

        data.push(document);
        Ok(())
    }

    async fn find(&self, id: &RecordId) -> MarketResult<Option<T>> {
        let data = self.data.read().await;
        Ok(data.iter().find(|d| d.id() == id).cloned())
    }

    async fn replace(&self, document: &T) -> MarketResult<bool> {
        let mut data = self.data.write().await;

        match data.iter_mut().find(|d| d.id() == document.id()) {
            Some(slot) => {
                *slot = document.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &RecordId) -> MarketResult<bool> {
        let mut data = self.data.write().await;

        match data.iter().position(|d| d.id() == id) {
            Some(idx) => {
                data.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> MarketResult<Vec<T>> {
        let data = self.data.read().await;
        Ok(data.clone())
    }

    async fn count(&self) -> MarketResult<u64> {
        let data = self.data.read().await;
        Ok(data.len() as u64)
    }
}
