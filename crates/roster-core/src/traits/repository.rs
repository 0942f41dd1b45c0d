//! Generic repository trait for store access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// query methods live on traits that extend this one.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Find all entities, ordered by primary key.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Persist every field of an already stored entity and return it.
    async fn save(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: &Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
