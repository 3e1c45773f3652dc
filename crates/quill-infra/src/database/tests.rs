#[cfg(test)]
mod tests {
    use crate::database::entity::blog;
    use crate::database::postgres_repo::{PostgresBlogRepository, PostgresBookmarkRepository};
    use quill_core::domain::Blog;
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, BookmarkRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_find_blog_by_id() {
        let blog_id = uuid::Uuid::new_v4();
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog::Model {
                id: blog_id,
                user_id,
                title: "Test Blog".to_owned(),
                thumbnail: "https://cdn.example.com/t.png".to_owned(),
                description: "d".repeat(120),
                category: "rust".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result: Option<Blog> = repo.find_by_id(blog_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Blog");
        assert_eq!(found.id, blog_id);
        assert_eq!(found.user_id, user_id);
    }

    #[tokio::test]
    async fn test_delete_with_no_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = repo.delete(uuid::Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_by_blog_id_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();

        let repo = PostgresBookmarkRepository::new(db);

        let removed = repo.delete_by_blog_id(uuid::Uuid::new_v4()).await.unwrap();
        assert_eq!(removed, 2);
    }
}
