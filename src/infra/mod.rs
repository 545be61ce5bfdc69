//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - The generic store engine and entity-specific stores

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    AuthorRepository, AuthorStore, CommentRepository, CommentStore, NewsRepository, NewsStore,
    TagRepository, TagStore, UserRepository, UserStore,
};
