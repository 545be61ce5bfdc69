//! Repository layer - Data access abstraction
//!
//! One generic engine (see `base`) implements pagination, filtering,
//! sorting, and CRUD for every entity. Concrete stores add only the
//! per-entity merge logic and relationship finders.

mod author_repository;
mod base;
mod comment_repository;
pub mod entities;
mod news_repository;
mod tag_repository;
mod user_repository;

pub use author_repository::{AuthorRepository, AuthorStore};
pub use base::{CrudStore, DeleteStore, EntityKey, KeyOf, ReadStore, WriteStore};
pub use comment_repository::{CommentRepository, CommentStore};
pub use news_repository::{NewsRepository, NewsStore};
pub use tag_repository::{TagRepository, TagStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use author_repository::MockAuthorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use news_repository::MockNewsRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use tag_repository::MockTagRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
