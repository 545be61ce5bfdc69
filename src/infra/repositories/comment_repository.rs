//! Comment store: merge logic plus comment-specific finders.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use super::base::{DeleteStore, ReadStore, WriteStore};
use super::entities::comment;
use crate::errors::AppResult;
use crate::types::{Page, Pagination, SearchFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment data access contract consumed by the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<comment::Model>>;

    async fn read_by_id(&self, id: i32) -> AppResult<Option<comment::Model>>;

    /// Comments on a given news item, oldest first
    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<comment::Model>>;

    async fn create(&self, content: String, news_id: i32) -> AppResult<comment::Model>;

    async fn update(&self, incoming: comment::Model) -> AppResult<Option<comment::Model>>;

    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;
}

/// Concrete comment store backed by the generic engine.
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadStore<comment::Entity, comment::Model> for CommentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteStore<comment::Entity, comment::Model, comment::ActiveModel> for CommentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(current: &mut comment::ActiveModel, incoming: comment::Model) {
        current.content = Set(incoming.content);
        current.news_id = Set(incoming.news_id);
        current.updated_at = Set(Utc::now());
    }
}

impl DeleteStore<comment::Entity> for CommentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<comment::Model>> {
        ReadStore::read_all(self, pagination, filter).await
    }

    async fn read_by_id(&self, id: i32) -> AppResult<Option<comment::Model>> {
        ReadStore::read_by_id(self, id).await
    }

    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<comment::Model>> {
        comment::Entity::find()
            .filter(comment::Column::NewsId.eq(news_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn create(&self, content: String, news_id: i32) -> AppResult<comment::Model> {
        let now = Utc::now();
        let model = comment::ActiveModel {
            id: NotSet,
            content: Set(content),
            news_id: Set(news_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        WriteStore::create(self, model).await
    }

    async fn update(&self, incoming: comment::Model) -> AppResult<Option<comment::Model>> {
        WriteStore::update(self, incoming.id, incoming).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        DeleteStore::delete_by_id(self, id).await
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        ReadStore::exists_by_id(self, id).await
    }
}
