//! In-memory repository implementations.
//!
//! Used as the fallback when no database is configured, and as the store
//! behind handler tests. Mirrors the PostgreSQL repositories' observable
//! behavior, including the unique (user_id, blog_id) bookmark constraint.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Blog, Bookmark, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogRepository, BookmarkRepository, UserRepository};

/// In-memory blog repository over an async RwLock'd HashMap.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<HashMap<Uuid, Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id) {
            return Err(RepoError::Constraint("blog id already exists".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;
        let mut blogs: Vec<Blog> = store
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        blogs.sort_by_key(|b| b.created_at);
        Ok(blogs)
    }
}

/// In-memory bookmark repository.
#[derive(Default)]
pub struct InMemoryBookmarkRepository {
    store: RwLock<HashMap<Uuid, Bookmark>>,
}

impl InMemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Bookmark, Uuid> for InMemoryBookmarkRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: Bookmark) -> Result<Bookmark, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id) {
            return Err(RepoError::Constraint(
                "bookmark id already exists".to_string(),
            ));
        }
        // Same uniqueness the bookmarks table enforces with its composite
        // index on (user_id, blog_id).
        if store
            .values()
            .any(|b| b.user_id == entity.user_id && b.blog_id == entity.blog_id)
        {
            return Err(RepoError::Constraint(
                "bookmark already exists for this user and blog".to_string(),
            ));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Bookmark) -> Result<Bookmark, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Bookmark>, RepoError> {
        let store = self.store.read().await;
        let mut bookmarks: Vec<Bookmark> = store
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookmarks.sort_by_key(|b| b.created_at);
        Ok(bookmarks)
    }

    async fn find_by_user_and_ref(
        &self,
        user_id: Uuid,
        ref_id: Uuid,
    ) -> Result<Option<Bookmark>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .find(|b| b.user_id == user_id && (b.id == ref_id || b.blog_id == ref_id))
            .cloned())
    }

    async fn delete_by_blog_id(&self, blog_id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, b| b.blog_id != blog_id);
        Ok((before - store.len()) as u64)
    }
}

/// In-memory user repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id) {
            return Err(RepoError::Constraint("user id already exists".to_string()));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl UserRepository for InMemoryUserRepository {}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_for(user_id: Uuid) -> Blog {
        Blog::new(
            user_id,
            "Title".to_string(),
            "https://cdn.example.com/t.png".to_string(),
            "d".repeat(120),
            "rust".to_string(),
        )
    }

    #[tokio::test]
    async fn insert_and_find_blog() {
        let repo = InMemoryBlogRepository::new();
        let blog = blog_for(Uuid::new_v4());

        repo.insert(blog.clone()).await.unwrap();

        let found = repo.find_by_id(blog.id).await.unwrap();
        assert_eq!(found, Some(blog));
    }

    #[tokio::test]
    async fn find_by_user_id_only_returns_that_users_blogs() {
        let repo = InMemoryBlogRepository::new();
        let owner = Uuid::new_v4();
        repo.insert(blog_for(owner)).await.unwrap();
        repo.insert(blog_for(owner)).await.unwrap();
        repo.insert(blog_for(Uuid::new_v4())).await.unwrap();

        let blogs = repo.find_by_user_id(owner).await.unwrap();
        assert_eq!(blogs.len(), 2);
        assert!(blogs.iter().all(|b| b.user_id == owner));
    }

    #[tokio::test]
    async fn delete_missing_blog_reports_not_found() {
        let repo = InMemoryBlogRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn duplicate_bookmark_violates_constraint() {
        let repo = InMemoryBookmarkRepository::new();
        let user_id = Uuid::new_v4();
        let blog_id = Uuid::new_v4();

        repo.insert(Bookmark::new(user_id, blog_id)).await.unwrap();
        let result = repo.insert(Bookmark::new(user_id, blog_id)).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.find_by_user_id(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_blog_bookmarked_by_two_users_is_allowed() {
        let repo = InMemoryBookmarkRepository::new();
        let blog_id = Uuid::new_v4();

        repo.insert(Bookmark::new(Uuid::new_v4(), blog_id))
            .await
            .unwrap();
        repo.insert(Bookmark::new(Uuid::new_v4(), blog_id))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn find_by_user_and_ref_matches_bookmark_id_or_blog_id() {
        let repo = InMemoryBookmarkRepository::new();
        let user_id = Uuid::new_v4();
        let bookmark = repo
            .insert(Bookmark::new(user_id, Uuid::new_v4()))
            .await
            .unwrap();

        let by_own_id = repo
            .find_by_user_and_ref(user_id, bookmark.id)
            .await
            .unwrap();
        assert_eq!(by_own_id.as_ref(), Some(&bookmark));

        let by_blog_id = repo
            .find_by_user_and_ref(user_id, bookmark.blog_id)
            .await
            .unwrap();
        assert_eq!(by_blog_id.as_ref(), Some(&bookmark));

        // Another user cannot address this bookmark.
        let other = repo
            .find_by_user_and_ref(Uuid::new_v4(), bookmark.id)
            .await
            .unwrap();
        assert_eq!(other, None);
    }

    #[tokio::test]
    async fn delete_by_blog_id_removes_all_referencing_bookmarks() {
        let repo = InMemoryBookmarkRepository::new();
        let blog_id = Uuid::new_v4();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();

        repo.insert(Bookmark::new(user_a, blog_id)).await.unwrap();
        repo.insert(Bookmark::new(user_b, blog_id)).await.unwrap();
        repo.insert(Bookmark::new(user_a, Uuid::new_v4()))
            .await
            .unwrap();

        let removed = repo.delete_by_blog_id(blog_id).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(repo.find_by_user_id(user_a).await.unwrap().len(), 1);
        assert!(repo.find_by_user_id(user_b).await.unwrap().is_empty());
    }
}
