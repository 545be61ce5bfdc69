//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::infra::repositories::{AuthorStore, CommentStore, NewsStore, TagStore, UserStore};
use crate::infra::Database;
use crate::services::{
    AuthorManager, AuthorService, CommentManager, CommentService, NewsManager, NewsService,
    TagManager, TagService, UserManager, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<dyn AuthorService>,
    pub news_service: Arc<dyn NewsService>,
    pub tag_service: Arc<dyn TagService>,
    pub comment_service: Arc<dyn CommentService>,
    pub user_service: Arc<dyn UserService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire stores and services from a live database connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let db = database.get_connection();
        let authors = Arc::new(AuthorStore::new(db.clone()));
        let news = Arc::new(NewsStore::new(db.clone()));
        let tags = Arc::new(TagStore::new(db.clone()));
        let comments = Arc::new(CommentStore::new(db.clone()));
        let users = Arc::new(UserStore::new(db));

        Self {
            author_service: Arc::new(AuthorManager::new(authors.clone())),
            news_service: Arc::new(NewsManager::new(news.clone(), authors, tags.clone())),
            tag_service: Arc::new(TagManager::new(tags, news.clone())),
            comment_service: Arc::new(CommentManager::new(comments, news)),
            user_service: Arc::new(UserManager::new(users)),
            database,
        }
    }
}
