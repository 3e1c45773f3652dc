use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, Bookmark, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity. Uniqueness violations surface as
    /// [`RepoError::Constraint`].
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns [`RepoError::NotFound`] when the
    /// delete affects no rows.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// All blogs owned by `user_id`.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Blog>, RepoError>;
}

/// Bookmark repository.
#[async_trait]
pub trait BookmarkRepository: BaseRepository<Bookmark, Uuid> {
    /// All bookmarks owned by `user_id`.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Bookmark>, RepoError>;

    /// A bookmark owned by `user_id` whose own id OR referenced blog id
    /// equals `ref_id`. Clients may address a bookmark either way.
    async fn find_by_user_and_ref(
        &self,
        user_id: Uuid,
        ref_id: Uuid,
    ) -> Result<Option<Bookmark>, RepoError>;

    /// Remove every bookmark referencing `blog_id`, across all users.
    /// Returns the number of rows removed.
    async fn delete_by_blog_id(&self, blog_id: Uuid) -> Result<u64, RepoError>;
}

/// User repository - read-only lookups in this service.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {}
