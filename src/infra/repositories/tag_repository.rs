//! Tag store: merge logic plus tag-specific finders.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, NotSet, QueryFilter, QuerySelect,
    RelationTrait, Set,
};

use super::base::{DeleteStore, ReadStore, WriteStore};
use super::entities::{news_tag, tag};
use crate::errors::AppResult;
use crate::types::{Page, Pagination, SearchFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Tag data access contract consumed by the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<tag::Model>>;

    async fn read_by_id(&self, id: i32) -> AppResult<Option<tag::Model>>;

    /// Tags attached to a given news item, joined through the association
    /// table
    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<tag::Model>>;

    async fn create(&self, name: String) -> AppResult<tag::Model>;

    async fn update(&self, incoming: tag::Model) -> AppResult<Option<tag::Model>>;

    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;
}

/// Concrete tag store backed by the generic engine.
pub struct TagStore {
    db: DatabaseConnection,
}

impl TagStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadStore<tag::Entity, tag::Model> for TagStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteStore<tag::Entity, tag::Model, tag::ActiveModel> for TagStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(current: &mut tag::ActiveModel, incoming: tag::Model) {
        current.name = Set(incoming.name);
    }
}

impl DeleteStore<tag::Entity> for TagStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl TagRepository for TagStore {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<tag::Model>> {
        ReadStore::read_all(self, pagination, filter).await
    }

    async fn read_by_id(&self, id: i32) -> AppResult<Option<tag::Model>> {
        ReadStore::read_by_id(self, id).await
    }

    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<tag::Model>> {
        tag::Entity::find()
            .join_rev(JoinType::InnerJoin, news_tag::Relation::Tag.def())
            .filter(news_tag::Column::NewsId.eq(news_id))
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn create(&self, name: String) -> AppResult<tag::Model> {
        let model = tag::ActiveModel {
            id: NotSet,
            name: Set(name),
        };
        WriteStore::create(self, model).await
    }

    async fn update(&self, incoming: tag::Model) -> AppResult<Option<tag::Model>> {
        WriteStore::update(self, incoming.id, incoming).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        DeleteStore::delete_by_id(self, id).await
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        ReadStore::exists_by_id(self, id).await
    }
}
