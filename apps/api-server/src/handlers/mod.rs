//! HTTP handlers and route configuration.

mod blog;
mod bookmark;
mod health;
mod public;

use actix_web::web;
use uuid::Uuid;

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// The bare `/{id}` route is the public single-blog view and must stay
/// last: actix matches routes in registration order.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/user-blog", web::get().to(blog::list_owned_blogs))
        .route("/user-blog", web::post().to(blog::create_blog))
        .route("/user-blog/{id}", web::get().to(blog::get_owned_blog))
        .route("/user-blog/{id}", web::put().to(blog::update_blog))
        .route("/user-blog/{id}", web::delete().to(blog::delete_blog))
        .route("/bookmark", web::get().to(bookmark::list_bookmarks))
        .route("/bookmark", web::post().to(bookmark::create_bookmark))
        .route("/bookmark/{id}", web::delete().to(bookmark::delete_bookmark))
        .route("/{id}", web::get().to(public::get_public_blog));
}

/// Reject empty or malformed identifiers, naming the offending field.
pub(crate) fn parse_id(name: &str, raw: &str) -> Result<Uuid, AppError> {
    if raw.is_empty() {
        return Err(AppError::BadRequest(format!("{name} is required")));
    }
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("{name} is not a valid id")))
}

/// Required-field check for request bodies. Fields are checked one at a
/// time so the error names the first missing one.
pub(crate) fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{name} is required"))),
    }
}
