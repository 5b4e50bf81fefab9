pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AppResult;

/// Read-side contract of the record store for one entity type. Services hold
/// an injected handle to an implementation; there is no ambient singleton.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    type Entity: Serialize + Send + Sync + 'static;

    /// Every row, ordered by id so repeated responses are byte-identical.
    async fn list_all(&self) -> AppResult<Vec<Self::Entity>>;

    /// The matching row, or `None` when the id is absent.
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Self::Entity>>;
}
