//! Post CRUD handlers.
//!
//! All routes live under `/api/posts`. Mutating handlers validate the
//! request body before touching the repository, so a rejected payload
//! never causes a partial state change.

use actix_web::{HttpResponse, web};

use scribe_core::domain::Post;
use scribe_core::error::DomainError;
use scribe_core::ports::BaseRepository;
use scribe_shared::dto::PostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn find_by_id(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let candidate = into_post(body.into_inner());
    candidate.validate()?;

    // No collision check: saving to an existing id replaces that record.
    let saved = state.posts.save(candidate).await?;

    Ok(HttpResponse::Created().json(saved))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    // Validation runs before the lookup, so a bad payload is a 400 even
    // when the id does not exist.
    let candidate = into_post(body.into_inner());
    candidate.validate()?;

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    let merged = existing.merge(candidate);
    let saved = state.posts.save(merged).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    state.posts.delete(existing.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Build a domain Post from the request payload, taking every field literally.
fn into_post(req: PostRequest) -> Post {
    Post {
        id: req.id,
        user_id: req.user_id,
        title: req.title,
        body: req.body,
        version: req.version,
    }
}
