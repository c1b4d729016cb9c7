//! In-memory post repository - used as fallback when PostgreSQL is unavailable.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::domain::Post;
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository};

/// In-memory post store using a BTreeMap with async RwLock.
///
/// The BTreeMap keeps records in ascending id order, so `find_all` is
/// deterministic. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<BTreeMap<i32, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id);
        Ok(())
    }
}

impl PostRepository for InMemoryPostRepository {}
