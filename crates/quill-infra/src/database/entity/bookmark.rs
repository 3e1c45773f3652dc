//! Bookmark entity for SeaORM.
//!
//! The `(user_id, blog_id)` pair carries a unique index; duplicate
//! bookmarks are rejected by the database rather than a read-then-insert
//! check.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookmarks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub blog_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::blog::Entity",
        from = "Column::BlogId",
        to = "super::blog::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Blog,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::blog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Bookmark.
impl From<Model> for quill_core::domain::Bookmark {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            blog_id: model.blog_id,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Bookmark to SeaORM ActiveModel.
impl From<quill_core::domain::Bookmark> for ActiveModel {
    fn from(bookmark: quill_core::domain::Bookmark) -> Self {
        Self {
            id: Set(bookmark.id),
            user_id: Set(bookmark.user_id),
            blog_id: Set(bookmark.blog_id),
            created_at: Set(bookmark.created_at.into()),
        }
    }
}
