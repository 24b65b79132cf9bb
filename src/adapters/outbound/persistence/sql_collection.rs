use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::marker::PhantomData;

use crate::{
    domain::{
        errors::{MarketError, MarketResult},
        value_objects::RecordId,
    },
    ports::repositories::{Document, DocumentCollection},
};

/// PostgreSQL-backed collection: one table per document type, each row
/// holding the full document as JSONB. The `position` sequence provides
/// insertion order for listings.
#[derive(Clone)]
pub struct SqlCollection<T: Document> {
    pool: PgPool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Document> SqlCollection<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Create the backing table. Table names come from the compile-time
    /// collection constants, never from input. One statement per call;
    /// the prepared-statement protocol rejects batched commands.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        let table_ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                position BIGSERIAL,
                id TEXT PRIMARY KEY,
                doc JSONB NOT NULL
            )
            "#,
            table = T::COLLECTION
        );
        sqlx::query(&table_ddl).execute(&self.pool).await?;

        let index_ddl = format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_position ON {table}(position)",
            table = T::COLLECTION
        );
        sqlx::query(&index_ddl).execute(&self.pool).await?;

        Ok(())
    }

    fn encode(document: &T) -> MarketResult<serde_json::Value> {
        serde_json::to_value(document).map_err(|e| MarketError::upstream("encode document", e))
    }

    fn decode(value: serde_json::Value) -> MarketResult<T> {
        serde_json::from_value(value).map_err(|e| MarketError::upstream("decode document", e))
    }
}

#[async_trait]
impl<T: Document> DocumentCollection<T> for SqlCollection<T> {
    async fn insert(&self, document: T) -> MarketResult<()> {
        let doc = Self::encode(&document)?;

        sqlx::query(&format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2)",
            T::COLLECTION
        ))
        .bind(document.id().as_str())
        .bind(doc)
        .execute(&self.pool)
        .await
        .map_err(|e| MarketError::upstream("insert document", e))?;

        Ok(())
    }

    async fn find(&self, id: &RecordId) -> MarketResult<Option<T>> {
        let row = sqlx::query(&format!("SELECT doc FROM {} WHERE id = $1", T::COLLECTION))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MarketError::upstream("fetch document", e))?;

        match row {
            Some(row) => Ok(Some(Self::decode(row.get("doc"))?)),
            None => Ok(None),
        }
    }

    async fn replace(&self, document: &T) -> MarketResult<bool> {
        let doc = Self::encode(document)?;

        let result = sqlx::query(&format!(
            "UPDATE {} SET doc = $2 WHERE id = $1",
            T::COLLECTION
        ))
        .bind(document.id().as_str())
        .bind(doc)
        .execute(&self.pool)
        .await
        .map_err(|e| MarketError::upstream("replace document", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: &RecordId) -> MarketResult<bool> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", T::COLLECTION))
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| MarketError::upstream("remove document", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> MarketResult<Vec<T>> {
        let rows = sqlx::query(&format!(
            "SELECT doc FROM {} ORDER BY position",
            T::COLLECTION
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MarketError::upstream("list documents", e))?;

        rows.into_iter()
            .map(|row| Self::decode(row.get("doc")))
            .collect()
    }

    async fn count(&self) -> MarketResult<u64> {
        let row = sqlx::query(&format!("SELECT COUNT(*) AS total FROM {}", T::COLLECTION))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| MarketError::upstream("count documents", e))?;

        let total: i64 = row.get("total");
        Ok(total as u64)
    }
}
