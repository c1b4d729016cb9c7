use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - represents a single published post.
///
/// `id` is assigned by the caller at creation time and never changes.
/// `user_id` is fixed once the record exists. `version` is reserved for
/// optimistic concurrency and is currently carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub version: Option<i32>,
}

impl Post {
    /// Check the client-supplied content constraints.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut problems = Vec::new();

        if self.title.is_empty() {
            problems.push("title must not be empty");
        }
        if self.body.is_empty() {
            problems.push("body must not be empty");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(problems.join(", ")))
        }
    }

    /// Merge an update candidate into this stored record.
    ///
    /// Only `title` and `body` are taken from the candidate. `id`,
    /// `user_id` and `version` always come from the stored record, so a
    /// client cannot move a post to another id, reassign its owner, or
    /// tamper with the version counter through an update.
    pub fn merge(&self, candidate: Post) -> Post {
        Post {
            id: self.id,
            user_id: self.user_id,
            title: candidate.title,
            body: candidate.body,
            version: self.version,
        }
    }
}
