//! Tag service - tag-related business logic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CreateTag, PatchTag, TagResponse, UpdateTag};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::tag;
use crate::infra::repositories::{NewsRepository, TagRepository};
use crate::types::{Page, Pagination, SearchFilter};

/// Tag use cases.
#[async_trait]
pub trait TagService: Send + Sync {
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<TagResponse>>;

    async fn read_by_id(&self, id: i32) -> AppResult<TagResponse>;

    /// Tags attached to a news item
    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<TagResponse>>;

    async fn create(&self, request: CreateTag) -> AppResult<TagResponse>;

    async fn update(&self, id: i32, request: UpdateTag) -> AppResult<TagResponse>;

    /// Partial update: missing fields fall back to stored values, then the
    /// full update runs
    async fn patch(&self, request: PatchTag) -> AppResult<TagResponse>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation backed by the tag store.
pub struct TagManager<T, N>
where
    T: TagRepository,
    N: NewsRepository,
{
    tags: Arc<T>,
    news: Arc<N>,
}

impl<T, N> TagManager<T, N>
where
    T: TagRepository,
    N: NewsRepository,
{
    /// Create new service instance
    pub fn new(tags: Arc<T>, news: Arc<N>) -> Self {
        Self { tags, news }
    }
}

#[async_trait]
impl<T, N> TagService for TagManager<T, N>
where
    T: TagRepository,
    N: NewsRepository,
{
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<TagResponse>> {
        tracing::info!(page = pagination.page, "reading all tags");
        let page = self.tags.read_all(&pagination, &filter).await?;
        Ok(page.map(TagResponse::from))
    }

    async fn read_by_id(&self, id: i32) -> AppResult<TagResponse> {
        let tag = self
            .tags
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tag", id))?;
        Ok(tag.into())
    }

    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<TagResponse>> {
        if !self.news.exists_by_id(news_id).await? {
            return Err(AppError::not_found("News", news_id));
        }
        let tags = self.tags.read_by_news_id(news_id).await?;
        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    async fn create(&self, request: CreateTag) -> AppResult<TagResponse> {
        tracing::info!(name = %request.name, "creating tag");
        let tag = self.tags.create(request.name).await?;
        Ok(tag.into())
    }

    async fn update(&self, id: i32, request: UpdateTag) -> AppResult<TagResponse> {
        tracing::info!(id, "updating tag");
        let incoming = tag::Model {
            id,
            name: request.name,
        };
        let updated = self.tags.update(incoming).await?.ok_or_else(|| {
            tracing::warn!(id, "tag not found, unable to update");
            AppError::not_found("Tag", id)
        })?;
        Ok(updated.into())
    }

    async fn patch(&self, request: PatchTag) -> AppResult<TagResponse> {
        let id = request
            .id
            .ok_or_else(|| AppError::not_found("Tag", "null"))?;
        tracing::info!(id, "patching tag");
        let current = self
            .tags
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tag", id))?;

        let update = UpdateTag {
            name: request.name.unwrap_or(current.name),
        };
        self.update(id, update).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        tracing::info!(id, "deleting tag");
        if !self.tags.exists_by_id(id).await? {
            tracing::warn!(id, "tag not found, unable to delete");
            return Err(AppError::not_found("Tag", id));
        }
        self.tags.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockNewsRepository, MockTagRepository};

    fn service(
        tags: MockTagRepository,
        news: MockNewsRepository,
    ) -> TagManager<MockTagRepository, MockNewsRepository> {
        TagManager::new(Arc::new(tags), Arc::new(news))
    }

    #[tokio::test]
    async fn patch_fills_missing_name_from_stored_row() {
        let mut tags = MockTagRepository::new();
        tags.expect_read_by_id().returning(|id| {
            Ok(Some(tag::Model {
                id,
                name: "politics".to_string(),
            }))
        });
        tags.expect_update()
            .withf(|incoming| incoming.name == "politics")
            .returning(|incoming| Ok(Some(incoming)));

        let patched = service(tags, MockNewsRepository::new())
            .patch(PatchTag {
                id: Some(2),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(patched.name, "politics");
    }

    #[tokio::test]
    async fn read_by_news_id_requires_existing_news() {
        let tags = MockTagRepository::new();
        let mut news = MockNewsRepository::new();
        news.expect_exists_by_id().returning(|_| Ok(false));

        let err = service(tags, news).read_by_news_id(8).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
