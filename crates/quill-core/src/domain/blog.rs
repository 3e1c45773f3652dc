use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum description length accepted at creation, counted in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

/// Blog entity - a user-authored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update over a blog. Only these four fields are mutable;
/// anything else submitted by a client is ignored upstream.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl Blog {
    /// Create a new blog owned by `user_id`.
    pub fn new(
        user_id: Uuid,
        title: String,
        thumbnail: String,
        description: String,
        category: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            thumbnail,
            description,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `patch` over this record, field by field. Identity, ownership
    /// and timestamps are carried over unchanged, so the result compares
    /// equal to `self` exactly when the patch changes nothing.
    pub fn apply_patch(&self, patch: &BlogPatch) -> Blog {
        let mut merged = self.clone();
        if let Some(title) = &patch.title {
            merged.title = title.clone();
        }
        if let Some(thumbnail) = &patch.thumbnail {
            merged.thumbnail = thumbnail.clone();
        }
        if let Some(description) = &patch.description {
            merged.description = description.clone();
        }
        if let Some(category) = &patch.category {
            merged.category = category.clone();
        }
        merged
    }
}
