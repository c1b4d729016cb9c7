use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// List every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity: insert if absent, replace wholesale if present.
    /// Returns the stored value.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting an absent ID is a no-op.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the port handlers are constructed against.
pub trait PostRepository: BaseRepository<Post, i32> {}
