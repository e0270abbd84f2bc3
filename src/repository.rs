use async_trait::async_trait;

use crate::error::StoreError;
use crate::actor_framework::Entity;

/// Abstract persistence interface the services are written against.
///
/// Matching semantics of [`Repository::search`] and the ordering of every
/// listing are defined by the implementation.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Stores the entity. An entity without an identifier gets a fresh one.
    async fn save(&self, entity: T) -> Result<T, StoreError>;
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError>;
    /// Looks up by identifier and `is_active()` in a single predicate.
    async fn find_active_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError>;
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;
    async fn find_all_active(&self) -> Result<Vec<T>, StoreError>;
    async fn search(&self, keyword: &str) -> Result<Vec<T>, StoreError>;
}
