//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire, matching the original frontend
//! contract (`userId`, `blogId`, `userName`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a blog.
///
/// Fields are optional at the serde level so that required-field checks can
/// name the first missing field instead of failing opaquely at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Partial update for a blog. Unknown fields in the request body are
/// silently dropped; only these four are mutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Request to bookmark a blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest {
    pub blog_id: Option<String>,
}

/// A blog as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A bookmark as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub blog_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A blog enriched with its author's public profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBlogResponse {
    #[serde(flatten)]
    pub blog: BlogResponse,
    pub user_name: String,
    pub user_profile: String,
}

/// Plain confirmation message for writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
