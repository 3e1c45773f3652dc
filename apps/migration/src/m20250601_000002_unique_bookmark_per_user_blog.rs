use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // At most one bookmark per (user, blog) pair. The API relies on
        // this index instead of a check-then-insert, so concurrent saves
        // cannot create duplicates.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bookmarks_user_id_blog_id_unique")
                    .table(Alias::new("bookmarks"))
                    .col(Alias::new("user_id"))
                    .col(Alias::new("blog_id"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookmarks_user_id_blog_id_unique")
                    .table(Alias::new("bookmarks"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
