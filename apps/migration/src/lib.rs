//! Database migrations for the Quill blogging service.

pub use sea_orm_migration::prelude::*;

mod m20250601_000001_initial_schema;
mod m20250601_000002_unique_bookmark_per_user_blog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_initial_schema::Migration),
            Box::new(m20250601_000002_unique_bookmark_per_user_blog::Migration),
        ]
    }
}
