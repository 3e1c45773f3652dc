//! Blog handlers - CRUD on user-authored blogs, scoped to the caller.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Blog, BlogPatch, MIN_DESCRIPTION_CHARS};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogRepository, BookmarkRepository};
use quill_shared::dto::{BlogResponse, CreateBlogRequest, MessageResponse, UpdateBlogRequest};

use crate::handlers::{parse_id, require_field};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn blog_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        user_id: blog.user_id,
        title: blog.title,
        thumbnail: blog.thumbnail,
        description: blog.description,
        category: blog.category,
        created_at: blog.created_at,
        updated_at: blog.updated_at,
    }
}

/// Plain lookup followed by an explicit ownership check. A blog owned by
/// someone else reports NotFound, indistinguishable from an absent one.
async fn find_owned(state: &AppState, user_id: Uuid, blog_id: Uuid) -> Result<Blog, AppError> {
    let blog = state
        .blogs
        .find_by_id(blog_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    if blog.user_id != user_id {
        return Err(AppError::NotFound("Blog not found".to_string()));
    }

    Ok(blog)
}

/// GET /user-blog/{id}
pub async fn get_owned_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let blog_id = parse_id("id", &path.into_inner())?;
    let blog = find_owned(&state, identity.user_id, blog_id).await?;

    Ok(HttpResponse::Ok().json(blog_response(blog)))
}

/// PUT /user-blog/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let blog_id = parse_id("id", &path.into_inner())?;
    let existing = find_owned(&state, identity.user_id, blog_id).await?;

    let req = body.into_inner();
    let patch = BlogPatch {
        title: req.title,
        thumbnail: req.thumbnail,
        description: req.description,
        category: req.category,
    };

    let merged = existing.apply_patch(&patch);
    if merged == existing {
        return Err(AppError::NoChanges(
            "the submitted fields match the stored blog".to_string(),
        ));
    }

    let mut updated = merged;
    updated.updated_at = chrono::Utc::now();
    state.blogs.update(updated).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog updated successfully")))
}

/// DELETE /user-blog/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let blog_id = parse_id("id", &path.into_inner())?;
    find_owned(&state, identity.user_id, blog_id).await?;

    state.blogs.delete(blog_id).await.map_err(|e| match e {
        RepoError::NotFound => AppError::OperationFailed("Blog was not deleted".to_string()),
        other => other.into(),
    })?;

    // Bookmarks referencing a blog do not outlive it.
    let purged = state.bookmarks.delete_by_blog_id(blog_id).await?;
    if purged > 0 {
        tracing::debug!(blog_id = %blog_id, purged, "Removed bookmarks of deleted blog");
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted successfully")))
}

/// GET /user-blog
pub async fn list_owned_blogs(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_by_user_id(identity.user_id).await?;

    let items: Vec<BlogResponse> = blogs.into_iter().map(blog_response).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// POST /user-blog
pub async fn create_blog(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let title = require_field(req.title.as_deref(), "title")?;
    let thumbnail = require_field(req.thumbnail.as_deref(), "thumbnail")?;
    let description = require_field(req.description.as_deref(), "description")?;
    let category = require_field(req.category.as_deref(), "category")?;

    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(AppError::BadRequest(format!(
            "description must be at least {MIN_DESCRIPTION_CHARS} characters"
        )));
    }

    let blog = Blog::new(
        identity.user_id,
        title.to_string(),
        thumbnail.to_string(),
        description.to_string(),
        category.to_string(),
    );
    state.blogs.insert(blog).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog created successfully")))
}
