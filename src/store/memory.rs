//! In-memory [`RecordStore`] implementations: a seedable store for running
//! the services without PostgreSQL, and an always-failing store that models
//! an unavailable backend.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::HasId;
use crate::store::RecordStore;

pub struct MemoryStore<E> {
    rows: Vec<E>,
}

impl<E> MemoryStore<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl<E> RecordStore for MemoryStore<E>
where
    E: Serialize + HasId + Clone + Send + Sync + 'static,
{
    type Entity = E;

    async fn list_all(&self) -> AppResult<Vec<E>> {
        Ok(self.rows.clone())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<E>> {
        Ok(self.rows.iter().find(|row| row.id() == id).cloned())
    }
}

/// Store whose backend is down; every call fails with an infrastructure
/// error, exercising the generic-500 path.
pub struct UnavailableStore<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> UnavailableStore<E> {
    pub fn new() -> Self {
        Self { _entity: PhantomData }
    }
}

impl<E> Default for UnavailableStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E> RecordStore for UnavailableStore<E>
where
    E: Serialize + Send + Sync + 'static,
{
    type Entity = E;

    async fn list_all(&self) -> AppResult<Vec<E>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn get_by_id(&self, _id: i32) -> AppResult<Option<E>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn list_all_returns_every_seeded_row() {
        let store = MemoryStore::new(seed::products());
        let products = store.list_all().await.unwrap();
        assert_eq!(products.len(), 5);
    }

    #[tokio::test]
    async fn get_by_id_finds_each_seeded_id() {
        let store = MemoryStore::new(seed::categories());
        for id in 1..=5 {
            let category = store.get_by_id(id).await.unwrap();
            assert_eq!(category.unwrap().id, id);
        }
    }

    #[tokio::test]
    async fn get_by_id_missing_is_none() {
        let store = MemoryStore::new(seed::products());
        assert!(store.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = UnavailableStore::<crate::models::Product>::new();
        assert!(store.list_all().await.is_err());
        assert!(store.get_by_id(1).await.is_err());
    }
}
