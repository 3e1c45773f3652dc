//! Public single-blog view - a blog joined with its author's profile.

use actix_web::{HttpResponse, web};

use quill_core::ports::BaseRepository;
use quill_shared::dto::PublicBlogResponse;

use crate::handlers::blog::blog_response;
use crate::handlers::parse_id;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /{id}
///
/// No ownership scoping: any authenticated user may read any blog here.
pub async fn get_public_blog(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let blog_id = parse_id("id", &path.into_inner())?;

    let blog = state
        .blogs
        .find_by_id(blog_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    let user = state
        .users
        .find_by_id(blog.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PublicBlogResponse {
        blog: blog_response(blog),
        user_name: user.name,
        user_profile: user.photo_url,
    }))
}
