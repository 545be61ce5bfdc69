//! User service - user-related business logic.
//!
//! Passwords are hashed at this layer; the store only ever sees hashes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{CreateUser, Password, PatchUser, UpdateUser, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::user;
use crate::infra::repositories::UserRepository;
use crate::types::{Page, Pagination, SearchFilter};

/// User use cases.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<UserResponse>>;

    async fn read_by_id(&self, id: i32) -> AppResult<UserResponse>;

    async fn create(&self, request: CreateUser) -> AppResult<UserResponse>;

    async fn update(&self, id: i32, request: UpdateUser) -> AppResult<UserResponse>;

    /// Partial update: a missing username keeps the stored one, a missing
    /// password keeps the stored hash, then the full update runs
    async fn patch(&self, request: PatchUser) -> AppResult<UserResponse>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation backed by the user store.
pub struct UserManager<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new service instance
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Shared tail of update and patch: uniqueness check, merge, persist.
    async fn apply_update(
        &self,
        id: i32,
        username: String,
        password_hash: String,
    ) -> AppResult<UserResponse> {
        if let Some(existing) = self.users.find_by_username(&username).await? {
            if existing.id != id {
                return Err(AppError::conflict(format!("User '{}'", username)));
            }
        }

        let now = Utc::now();
        let incoming = user::Model {
            id,
            username,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        let updated = self.users.update(incoming).await?.ok_or_else(|| {
            tracing::warn!(id, "user not found, unable to update");
            AppError::not_found("User", id)
        })?;
        Ok(updated.into())
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<UserResponse>> {
        tracing::info!(page = pagination.page, "reading all users");
        let page = self.users.read_all(&pagination, &filter).await?;
        Ok(page.map(UserResponse::from))
    }

    async fn read_by_id(&self, id: i32) -> AppResult<UserResponse> {
        let user = self
            .users
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;
        Ok(user.into())
    }

    async fn create(&self, request: CreateUser) -> AppResult<UserResponse> {
        tracing::info!(username = %request.username, "creating user");
        if self
            .users
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!("User '{}'", request.username)));
        }

        let password_hash = Password::new(&request.password)?.into_string();
        let user = self.users.create(request.username, password_hash).await?;
        Ok(user.into())
    }

    async fn update(&self, id: i32, request: UpdateUser) -> AppResult<UserResponse> {
        tracing::info!(id, "updating user");
        let password_hash = Password::new(&request.password)?.into_string();
        self.apply_update(id, request.username, password_hash).await
    }

    async fn patch(&self, request: PatchUser) -> AppResult<UserResponse> {
        let id = request
            .id
            .ok_or_else(|| AppError::not_found("User", "null"))?;
        tracing::info!(id, "patching user");
        let current = self
            .users
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))?;

        let username = request.username.unwrap_or(current.username);
        // A missing password keeps the stored hash; a supplied one is hashed
        let password_hash = match request.password {
            Some(password) => Password::new(&password)?.into_string(),
            None => current.password_hash,
        };
        self.apply_update(id, username, password_hash).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        tracing::info!(id, "deleting user");
        if !self.users.exists_by_id(id).await? {
            tracing::warn!(id, "user not found, unable to delete");
            return Err(AppError::not_found("User", id));
        }
        self.users.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;

    fn user_model(id: i32, username: &str, password_hash: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_rejects_taken_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|username| Ok(Some(user_model(1, username, "hash"))));

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .create(CreateUser {
                username: "jdoe".to_string(),
                password: "LongEnough123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn patch_without_password_keeps_stored_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_read_by_id()
            .returning(|id| Ok(Some(user_model(id, "jdoe", "stored-hash"))));
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_update()
            .withf(|incoming| {
                incoming.username == "renamed" && incoming.password_hash == "stored-hash"
            })
            .returning(|incoming| Ok(Some(incoming)));

        let service = UserManager::new(Arc::new(repo));
        let patched = service
            .patch(PatchUser {
                id: Some(5),
                username: Some("renamed".to_string()),
                password: None,
            })
            .await
            .unwrap();

        assert_eq!(patched.username, "renamed");
    }

    #[tokio::test]
    async fn update_rejects_username_taken_by_another_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|username| Ok(Some(user_model(99, username, "hash"))));

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .update(
                5,
                UpdateUser {
                    username: "taken".to_string(),
                    password: "LongEnough123".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
