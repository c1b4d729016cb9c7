//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbConn, EntityTrait, QueryOrder};

use scribe_core::domain::Post;
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        // The id is client-assigned, so an insert with ON CONFLICT replaces
        // the row wholesale when it already exists.
        let active_model: post::ActiveModel = post.into();

        let model = PostEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(post::Column::Id)
                    .update_columns([
                        post::Column::UserId,
                        post::Column::Title,
                        post::Column::Body,
                        post::Column::Version,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        // Deleting an absent row is a no-op; callers guard with a lookup
        // when absence matters.
        PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}

impl PostRepository for PostgresPostRepository {}
