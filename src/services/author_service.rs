//! Author service - author-related business logic.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{AuthorResponse, CreateAuthor, PatchAuthor, UpdateAuthor};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::author;
use crate::infra::repositories::AuthorRepository;
use crate::types::{Page, Pagination, SearchFilter};

/// Author use cases.
#[async_trait]
pub trait AuthorService: Send + Sync {
    /// Paginated author listing with optional single-field filtering
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<AuthorResponse>>;

    async fn read_by_id(&self, id: i32) -> AppResult<AuthorResponse>;

    /// The author of a news item
    async fn read_by_news_id(&self, news_id: i32) -> AppResult<AuthorResponse>;

    async fn create(&self, request: CreateAuthor) -> AppResult<AuthorResponse>;

    async fn update(&self, id: i32, request: UpdateAuthor) -> AppResult<AuthorResponse>;

    /// Partial update: missing fields fall back to stored values, then the
    /// full update runs
    async fn patch(&self, request: PatchAuthor) -> AppResult<AuthorResponse>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation backed by the author store.
pub struct AuthorManager<R: AuthorRepository> {
    authors: Arc<R>,
}

impl<R: AuthorRepository> AuthorManager<R> {
    /// Create new service instance
    pub fn new(authors: Arc<R>) -> Self {
        Self { authors }
    }
}

#[async_trait]
impl<R: AuthorRepository> AuthorService for AuthorManager<R> {
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<AuthorResponse>> {
        tracing::info!(page = pagination.page, "reading all authors");
        let page = self.authors.read_all(&pagination, &filter).await?;
        Ok(page.map(AuthorResponse::from))
    }

    async fn read_by_id(&self, id: i32) -> AppResult<AuthorResponse> {
        let author = self
            .authors
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Author", id))?;
        Ok(author.into())
    }

    async fn read_by_news_id(&self, news_id: i32) -> AppResult<AuthorResponse> {
        let author = self
            .authors
            .read_by_news_id(news_id)
            .await?
            .ok_or_else(|| AppError::not_found("News", news_id))?;
        Ok(author.into())
    }

    async fn create(&self, request: CreateAuthor) -> AppResult<AuthorResponse> {
        tracing::info!(name = %request.name, "creating author");
        let author = self.authors.create(request.name).await?;
        Ok(author.into())
    }

    async fn update(&self, id: i32, request: UpdateAuthor) -> AppResult<AuthorResponse> {
        tracing::info!(id, "updating author");
        let now = Utc::now();
        let incoming = author::Model {
            id,
            name: request.name,
            created_at: now,
            updated_at: now,
        };
        let updated = self
            .authors
            .update(incoming)
            .await?
            .ok_or_else(|| {
                tracing::warn!(id, "author not found, unable to update");
                AppError::not_found("Author", id)
            })?;
        Ok(updated.into())
    }

    async fn patch(&self, request: PatchAuthor) -> AppResult<AuthorResponse> {
        let id = request
            .id
            .ok_or_else(|| AppError::not_found("Author", "null"))?;
        tracing::info!(id, "patching author");
        let current = self
            .authors
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Author", id))?;

        let update = UpdateAuthor {
            name: request.name.unwrap_or(current.name),
        };
        self.update(id, update).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        tracing::info!(id, "deleting author");
        if !self.authors.exists_by_id(id).await? {
            tracing::warn!(id, "author not found, unable to delete");
            return Err(AppError::not_found("Author", id));
        }
        self.authors.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockAuthorRepository;
    use mockall::predicate::eq;

    fn author_model(id: i32, name: &str) -> author::Model {
        let now = Utc::now();
        author::Model {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn read_by_id_returns_author() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_read_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(author_model(id, "Ann"))));

        let service = AuthorManager::new(Arc::new(repo));
        let author = service.read_by_id(7).await.unwrap();

        assert_eq!(author.id, 7);
        assert_eq!(author.name, "Ann");
    }

    #[tokio::test]
    async fn read_by_id_missing_is_not_found() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_read_by_id().returning(|_| Ok(None));

        let service = AuthorManager::new(Arc::new(repo));
        let err = service.read_by_id(7).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_update().returning(|_| Ok(None));

        let service = AuthorManager::new(Arc::new(repo));
        let err = service
            .update(
                1,
                UpdateAuthor {
                    name: "Whoever".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn patch_fills_missing_name_from_stored_row() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_read_by_id()
            .returning(|id| Ok(Some(author_model(id, "Stored"))));
        repo.expect_update()
            .withf(|incoming| incoming.name == "Stored")
            .returning(|incoming| Ok(Some(incoming)));

        let service = AuthorManager::new(Arc::new(repo));
        let patched = service
            .patch(PatchAuthor {
                id: Some(3),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(patched.name, "Stored");
    }

    #[tokio::test]
    async fn patch_with_value_overrides_stored_row() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_read_by_id()
            .returning(|id| Ok(Some(author_model(id, "Stored"))));
        repo.expect_update()
            .withf(|incoming| incoming.name == "Fresh")
            .returning(|incoming| Ok(Some(incoming)));

        let service = AuthorManager::new(Arc::new(repo));
        let patched = service
            .patch(PatchAuthor {
                id: Some(3),
                name: Some("Fresh".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(patched.name, "Fresh");
    }

    #[tokio::test]
    async fn patch_without_id_is_not_found() {
        // No expectations: the store must not be touched
        let repo = MockAuthorRepository::new();

        let service = AuthorManager::new(Arc::new(repo));
        let err = service.patch(PatchAuthor::default()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_checks_existence_first() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        // delete_by_id is not expected; calling it would fail the test

        let service = AuthorManager::new(Arc::new(repo));
        let err = service.delete_by_id(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_existing_author() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(true));
        repo.expect_delete_by_id().with(eq(42)).returning(|_| Ok(true));

        let service = AuthorManager::new(Arc::new(repo));
        assert!(service.delete_by_id(42).await.is_ok());
    }
}
