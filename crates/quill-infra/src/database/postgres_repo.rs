//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use uuid::Uuid;

use quill_core::domain::{Blog, Bookmark, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogRepository, BookmarkRepository, UserRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::bookmark::{self, Entity as BookmarkEntity};
use super::entity::user::Entity as UserEntity;

fn map_query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// Writes distinguish uniqueness violations (Conflict upstream) and updates
/// that matched no row (NotFound) from plain query failures.
fn map_write_err(e: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
        return RepoError::Constraint(msg);
    }
    match e {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// PostgreSQL blog repository.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for PostgresBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let result = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: Blog) -> Result<Blog, RepoError> {
        let active: blog::ActiveModel = entity.into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn update(&self, entity: Blog) -> Result<Blog, RepoError> {
        let active: blog::ActiveModel = entity.into();
        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Blog>, RepoError> {
        let result = BlogEntity::find()
            .filter(blog::Column::UserId.eq(user_id))
            .order_by_asc(blog::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// PostgreSQL bookmark repository.
pub struct PostgresBookmarkRepository {
    db: DbConn,
}

impl PostgresBookmarkRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Bookmark, Uuid> for PostgresBookmarkRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, RepoError> {
        let result = BookmarkEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: Bookmark) -> Result<Bookmark, RepoError> {
        let active: bookmark::ActiveModel = entity.into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn update(&self, entity: Bookmark) -> Result<Bookmark, RepoError> {
        let active: bookmark::ActiveModel = entity.into();
        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BookmarkEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl BookmarkRepository for PostgresBookmarkRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Bookmark>, RepoError> {
        let result = BookmarkEntity::find()
            .filter(bookmark::Column::UserId.eq(user_id))
            .order_by_asc(bookmark::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_user_and_ref(
        &self,
        user_id: Uuid,
        ref_id: Uuid,
    ) -> Result<Option<Bookmark>, RepoError> {
        let result = BookmarkEntity::find()
            .filter(bookmark::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(bookmark::Column::Id.eq(ref_id))
                    .add(bookmark::Column::BlogId.eq(ref_id)),
            )
            .one(&self.db)
            .await
            .map_err(map_query_err)?;

        Ok(result.map(Into::into))
    }

    async fn delete_by_blog_id(&self, blog_id: Uuid) -> Result<u64, RepoError> {
        let result = BookmarkEntity::delete_many()
            .filter(bookmark::Column::BlogId.eq(blog_id))
            .exec(&self.db)
            .await
            .map_err(map_query_err)?;

        Ok(result.rows_affected)
    }
}

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for PostgresUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        let active: super::entity::user::ActiveModel = entity.into();
        let model = active.insert(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        let active: super::entity::user::ActiveModel = entity.into();
        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

impl UserRepository for PostgresUserRepository {}
