//! News store: merge logic plus the tag-association protocol.
//!
//! The tag set of a news item is replaced wholesale on update, never
//! diff-merged. Row changes and association changes share one
//! transaction.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, NotSet, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::base::{DeleteStore, EntityKey, ReadStore, WriteStore};
use super::entities::{author, news, news_tag};
use crate::errors::AppResult;
use crate::types::{Page, Pagination, SearchFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// News data access contract consumed by the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<news::Model>>;

    async fn read_by_id(&self, id: i32) -> AppResult<Option<news::Model>>;

    /// Insert a news row and its tag associations atomically.
    async fn create(
        &self,
        title: String,
        content: String,
        author: EntityKey<author::Entity>,
        tag_ids: Vec<i32>,
    ) -> AppResult<news::Model>;

    /// Merge `incoming` onto the stored row and replace the tag set
    /// wholesale. `None` when the id does not exist.
    async fn update(&self, incoming: news::Model, tag_ids: Vec<i32>)
        -> AppResult<Option<news::Model>>;

    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;

    /// Tag ids currently associated with a news row
    async fn tag_ids(&self, news_id: i32) -> AppResult<Vec<i32>>;
}

/// Concrete news store backed by the generic engine.
pub struct NewsStore {
    db: DatabaseConnection,
}

impl NewsStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Wholesale replacement of the news/tag associations.
    async fn replace_tags<C: ConnectionTrait>(
        conn: &C,
        news_id: i32,
        tag_ids: &[i32],
    ) -> AppResult<()> {
        news_tag::Entity::delete_many()
            .filter(news_tag::Column::NewsId.eq(news_id))
            .exec(conn)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let rows = tag_ids.iter().map(|tag_id| news_tag::ActiveModel {
            news_id: Set(news_id),
            tag_id: Set(*tag_id),
        });
        news_tag::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}

impl ReadStore<news::Entity, news::Model> for NewsStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteStore<news::Entity, news::Model, news::ActiveModel> for NewsStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(current: &mut news::ActiveModel, incoming: news::Model) {
        current.title = Set(incoming.title);
        current.content = Set(incoming.content);
        current.author_id = Set(incoming.author_id);
        current.updated_at = Set(Utc::now());
    }
}

impl DeleteStore<news::Entity> for NewsStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl NewsRepository for NewsStore {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<news::Model>> {
        ReadStore::read_all(self, pagination, filter).await
    }

    async fn read_by_id(&self, id: i32) -> AppResult<Option<news::Model>> {
        ReadStore::read_by_id(self, id).await
    }

    async fn create(
        &self,
        title: String,
        content: String,
        author: EntityKey<author::Entity>,
        tag_ids: Vec<i32>,
    ) -> AppResult<news::Model> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let model = news::ActiveModel {
            id: NotSet,
            title: Set(title),
            content: Set(content),
            author_id: Set(author.into_id()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
        Self::replace_tags(&txn, model.id, &tag_ids).await?;

        txn.commit().await?;
        Ok(model)
    }

    async fn update(
        &self,
        incoming: news::Model,
        tag_ids: Vec<i32>,
    ) -> AppResult<Option<news::Model>> {
        let txn = self.db.begin().await?;

        let Some(current) = news::Entity::find_by_id(incoming.id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active = current.into_active_model();
        <Self as WriteStore<news::Entity, news::Model, news::ActiveModel>>::merge(
            &mut active,
            incoming,
        );
        let updated = active.update(&txn).await?;
        Self::replace_tags(&txn, updated.id, &tag_ids).await?;

        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        DeleteStore::delete_by_id(self, id).await
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        ReadStore::exists_by_id(self, id).await
    }

    async fn tag_ids(&self, news_id: i32) -> AppResult<Vec<i32>> {
        let rows = news_tag::Entity::find()
            .filter(news_tag::Column::NewsId.eq(news_id))
            .order_by_asc(news_tag::Column::TagId)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|row| row.tag_id).collect())
    }
}
