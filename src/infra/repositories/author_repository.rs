//! Author store: merge logic plus author-specific finders.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, NotSet, QueryFilter, QuerySelect,
    RelationTrait, Set,
};

use super::base::{DeleteStore, EntityKey, ReadStore, WriteStore};
use super::entities::{author, news};
use crate::errors::AppResult;
use crate::types::{Page, Pagination, SearchFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Author data access contract consumed by the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Paginated, sorted, optionally filtered author listing
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<author::Model>>;

    async fn read_by_id(&self, id: i32) -> AppResult<Option<author::Model>>;

    /// The author of a given news item, joined through the news table
    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Option<author::Model>>;

    async fn create(&self, name: String) -> AppResult<author::Model>;

    /// Merge the mutable fields of `incoming` onto the stored row.
    /// `None` when the id does not exist.
    async fn update(&self, incoming: author::Model) -> AppResult<Option<author::Model>>;

    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;

    /// Key handle for wiring news to an author without loading the row
    fn reference(&self, id: i32) -> EntityKey<author::Entity>;
}

/// Concrete author store backed by the generic engine.
pub struct AuthorStore {
    db: DatabaseConnection,
}

impl AuthorStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadStore<author::Entity, author::Model> for AuthorStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteStore<author::Entity, author::Model, author::ActiveModel> for AuthorStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(current: &mut author::ActiveModel, incoming: author::Model) {
        current.name = Set(incoming.name);
        current.updated_at = Set(Utc::now());
    }
}

impl DeleteStore<author::Entity> for AuthorStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl AuthorRepository for AuthorStore {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<author::Model>> {
        ReadStore::read_all(self, pagination, filter).await
    }

    async fn read_by_id(&self, id: i32) -> AppResult<Option<author::Model>> {
        ReadStore::read_by_id(self, id).await
    }

    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Option<author::Model>> {
        author::Entity::find()
            .join_rev(JoinType::InnerJoin, news::Relation::Author.def())
            .filter(news::Column::Id.eq(news_id))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn create(&self, name: String) -> AppResult<author::Model> {
        let now = Utc::now();
        let model = author::ActiveModel {
            id: NotSet,
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
        };
        WriteStore::create(self, model).await
    }

    async fn update(&self, incoming: author::Model) -> AppResult<Option<author::Model>> {
        WriteStore::update(self, incoming.id, incoming).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        DeleteStore::delete_by_id(self, id).await
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        ReadStore::exists_by_id(self, id).await
    }

    fn reference(&self, id: i32) -> EntityKey<author::Entity> {
        ReadStore::reference(self, id)
    }
}
