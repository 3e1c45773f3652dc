//! Bookmark handlers - saving and unsaving blogs, scoped to the caller.

use actix_web::{HttpResponse, web};

use quill_core::domain::Bookmark;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BookmarkRepository};
use quill_shared::dto::{BookmarkResponse, CreateBookmarkRequest, MessageResponse};

use crate::handlers::{parse_id, require_field};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn bookmark_response(bookmark: Bookmark) -> BookmarkResponse {
    BookmarkResponse {
        id: bookmark.id,
        user_id: bookmark.user_id,
        blog_id: bookmark.blog_id,
        created_at: bookmark.created_at,
    }
}

/// GET /bookmark
pub async fn list_bookmarks(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let bookmarks = state.bookmarks.find_by_user_id(identity.user_id).await?;

    let items: Vec<BookmarkResponse> = bookmarks.into_iter().map(bookmark_response).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// POST /bookmark
///
/// No existence pre-check: the storage-level unique index on
/// (user_id, blog_id) decides, so concurrent saves cannot both win.
pub async fn create_bookmark(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBookmarkRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let raw = require_field(req.blog_id.as_deref(), "blogId")?;
    let blog_id = parse_id("blogId", raw)?;

    let bookmark = Bookmark::new(identity.user_id, blog_id);
    state.bookmarks.insert(bookmark).await.map_err(|e| match e {
        RepoError::Constraint(_) => AppError::Conflict("Bookmark already saved".to_string()),
        other => other.into(),
    })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Bookmark saved successfully")))
}

/// DELETE /bookmark/{id}
///
/// The path id may be either the bookmark's own id or the id of the
/// bookmarked blog; both address the same record for the caller.
pub async fn delete_bookmark(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let ref_id = parse_id("id", &path.into_inner())?;

    let bookmark = state
        .bookmarks
        .find_by_user_and_ref(identity.user_id, ref_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bookmark not found".to_string()))?;

    state
        .bookmarks
        .delete(bookmark.id)
        .await
        .map_err(|e| match e {
            RepoError::NotFound => {
                AppError::OperationFailed("Bookmark was not deleted".to_string())
            }
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Bookmark deleted successfully")))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::json;
    use uuid::Uuid;

    use quill_core::domain::Bookmark;
    use quill_core::ports::{BaseRepository, BookmarkRepository};
    use quill_shared::ErrorResponse;
    use quill_shared::dto::BookmarkResponse;

    use crate::handlers::test_support::{self, test_app};
    use crate::state::AppState;

    #[actix_rt::test]
    async fn create_requires_blog_id() {
        let state = AppState::in_memory();
        let tokens = test_support::token_service();
        let app = test_app!(state, tokens);

        let req = test::TestRequest::post()
            .uri("/bookmark")
            .insert_header(test_support::bearer(&tokens, Uuid::new_v4()))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.detail.as_deref(), Some("blogId is required"));
    }

    #[actix_rt::test]
    async fn second_save_of_same_blog_conflicts() {
        let state = AppState::in_memory();
        let tokens = test_support::token_service();
        let app = test_app!(state, tokens);
        let user_id = Uuid::new_v4();
        let blog_id = Uuid::new_v4();

        let first = test::TestRequest::post()
            .uri("/bookmark")
            .insert_header(test_support::bearer(&tokens, user_id))
            .set_json(json!({ "blogId": blog_id }))
            .to_request();
        let resp = test::call_service(&app, first).await;
        assert_eq!(resp.status(), 200);

        let second = test::TestRequest::post()
            .uri("/bookmark")
            .insert_header(test_support::bearer(&tokens, user_id))
            .set_json(json!({ "blogId": blog_id }))
            .to_request();
        let resp = test::call_service(&app, second).await;
        assert_eq!(resp.status(), 409);

        // Only the first record survives.
        assert_eq!(state.bookmarks.find_by_user_id(user_id).await.unwrap().len(), 1);
    }

    #[actix_rt::test]
    async fn different_users_may_save_the_same_blog() {
        let state = AppState::in_memory();
        let tokens = test_support::token_service();
        let app = test_app!(state, tokens);
        let blog_id = Uuid::new_v4();

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/bookmark")
                .insert_header(test_support::bearer(&tokens, Uuid::new_v4()))
                .set_json(json!({ "blogId": blog_id }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);
        }
    }

    #[actix_rt::test]
    async fn list_returns_only_callers_bookmarks() {
        let state = AppState::in_memory();
        let tokens = test_support::token_service();
        let app = test_app!(state, tokens);
        let user_id = Uuid::new_v4();

        state
            .bookmarks
            .insert(Bookmark::new(user_id, Uuid::new_v4()))
            .await
            .unwrap();
        state
            .bookmarks
            .insert(Bookmark::new(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/bookmark")
            .insert_header(test_support::bearer(&tokens, user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Vec<BookmarkResponse> = test::read_body_json(resp).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].user_id, user_id);
    }

    #[actix_rt::test]
    async fn delete_works_by_bookmark_id() {
        let state = AppState::in_memory();
        let tokens = test_support::token_service();
        let app = test_app!(state, tokens);
        let user_id = Uuid::new_v4();
        let bookmark = state
            .bookmarks
            .insert(Bookmark::new(user_id, Uuid::new_v4()))
            .await
            .unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/bookmark/{}", bookmark.id))
            .insert_header(test_support::bearer(&tokens, user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert!(state.bookmarks.find_by_user_id(user_id).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn delete_works_by_blog_id() {
        let state = AppState::in_memory();
        let tokens = test_support::token_service();
        let app = test_app!(state, tokens);
        let user_id = Uuid::new_v4();
        let blog_id = Uuid::new_v4();
        state
            .bookmarks
            .insert(Bookmark::new(user_id, blog_id))
            .await
            .unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/bookmark/{}", blog_id))
            .insert_header(test_support::bearer(&tokens, user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert!(state.bookmarks.find_by_user_id(user_id).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn delete_is_scoped_to_the_caller() {
        let state = AppState::in_memory();
        let tokens = test_support::token_service();
        let app = test_app!(state, tokens);
        let owner = Uuid::new_v4();
        let bookmark = state
            .bookmarks
            .insert(Bookmark::new(owner, Uuid::new_v4()))
            .await
            .unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/bookmark/{}", bookmark.id))
            .insert_header(test_support::bearer(&tokens, Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        assert_eq!(state.bookmarks.find_by_user_id(owner).await.unwrap().len(), 1);
    }
}
