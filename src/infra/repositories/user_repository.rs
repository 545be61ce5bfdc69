//! User store: merge logic plus the username lookup.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::base::{DeleteStore, ReadStore, WriteStore};
use super::entities::user;
use crate::errors::AppResult;
use crate::types::{Page, Pagination, SearchFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User data access contract consumed by the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<user::Model>>;

    async fn read_by_id(&self, id: i32) -> AppResult<Option<user::Model>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>>;

    async fn create(&self, username: String, password_hash: String) -> AppResult<user::Model>;

    async fn update(&self, incoming: user::Model) -> AppResult<Option<user::Model>>;

    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;
}

/// Concrete user store backed by the generic engine.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadStore<user::Entity, user::Model> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteStore<user::Entity, user::Model, user::ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn merge(current: &mut user::ActiveModel, incoming: user::Model) {
        current.username = Set(incoming.username);
        current.password_hash = Set(incoming.password_hash);
        current.updated_at = Set(Utc::now());
    }
}

impl DeleteStore<user::Entity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<user::Model>> {
        ReadStore::read_all(self, pagination, filter).await
    }

    async fn read_by_id(&self, id: i32) -> AppResult<Option<user::Model>> {
        ReadStore::read_by_id(self, id).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn create(&self, username: String, password_hash: String) -> AppResult<user::Model> {
        let now = Utc::now();
        let model = user::ActiveModel {
            id: NotSet,
            username: Set(username),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };
        WriteStore::create(self, model).await
    }

    async fn update(&self, incoming: user::Model) -> AppResult<Option<user::Model>> {
        WriteStore::update(self, incoming.id, incoming).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        DeleteStore::delete_by_id(self, id).await
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        ReadStore::exists_by_id(self, id).await
    }
}
