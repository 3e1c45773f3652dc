use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bookmark entity - marks a blog as saved by a user.
///
/// At most one bookmark may exist per (user, blog) pair; the storage layer
/// enforces this with a composite unique index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub blog_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Create a new bookmark for `blog_id` owned by `user_id`.
    pub fn new(user_id: Uuid, blog_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            blog_id,
            created_at: Utc::now(),
        }
    }
}
