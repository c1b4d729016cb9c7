//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request body for creating or updating a post.
///
/// `id`, `userId` and `version` may be omitted on the wire. Create
/// persists whatever the client supplied, literally; update discards all
/// three in favour of the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub user_id: i32,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub version: Option<i32>,
}
