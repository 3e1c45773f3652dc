//! SeaORM entities for the blogging schema.

pub mod blog;
pub mod bookmark;
pub mod user;
