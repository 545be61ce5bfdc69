//! Comment service - comment-related business logic.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{CommentResponse, CreateComment, PatchComment, UpdateComment};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::comment;
use crate::infra::repositories::{CommentRepository, NewsRepository};
use crate::types::{Page, Pagination, SearchFilter};

/// Comment use cases.
#[async_trait]
pub trait CommentService: Send + Sync {
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<CommentResponse>>;

    async fn read_by_id(&self, id: i32) -> AppResult<CommentResponse>;

    /// Comments on a news item, oldest first
    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<CommentResponse>>;

    async fn create(&self, request: CreateComment) -> AppResult<CommentResponse>;

    async fn update(&self, id: i32, request: UpdateComment) -> AppResult<CommentResponse>;

    /// Partial update: missing fields fall back to stored values, then the
    /// full update runs
    async fn patch(&self, request: PatchComment) -> AppResult<CommentResponse>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation backed by the comment and news stores.
pub struct CommentManager<C, N>
where
    C: CommentRepository,
    N: NewsRepository,
{
    comments: Arc<C>,
    news: Arc<N>,
}

impl<C, N> CommentManager<C, N>
where
    C: CommentRepository,
    N: NewsRepository,
{
    /// Create new service instance
    pub fn new(comments: Arc<C>, news: Arc<N>) -> Self {
        Self { comments, news }
    }

    async fn require_news(&self, news_id: i32) -> AppResult<()> {
        if !self.news.exists_by_id(news_id).await? {
            tracing::warn!(news_id, "news not found");
            return Err(AppError::not_found("News", news_id));
        }
        Ok(())
    }
}

#[async_trait]
impl<C, N> CommentService for CommentManager<C, N>
where
    C: CommentRepository,
    N: NewsRepository,
{
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<CommentResponse>> {
        tracing::info!(page = pagination.page, "reading all comments");
        let page = self.comments.read_all(&pagination, &filter).await?;
        Ok(page.map(CommentResponse::from))
    }

    async fn read_by_id(&self, id: i32) -> AppResult<CommentResponse> {
        let comment = self
            .comments
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment", id))?;
        Ok(comment.into())
    }

    async fn read_by_news_id(&self, news_id: i32) -> AppResult<Vec<CommentResponse>> {
        self.require_news(news_id).await?;
        let comments = self.comments.read_by_news_id(news_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    async fn create(&self, request: CreateComment) -> AppResult<CommentResponse> {
        tracing::info!(news_id = request.news_id, "creating comment");
        self.require_news(request.news_id).await?;
        let comment = self
            .comments
            .create(request.content, request.news_id)
            .await?;
        Ok(comment.into())
    }

    async fn update(&self, id: i32, request: UpdateComment) -> AppResult<CommentResponse> {
        tracing::info!(id, "updating comment");
        self.require_news(request.news_id).await?;

        let now = Utc::now();
        let incoming = comment::Model {
            id,
            content: request.content,
            news_id: request.news_id,
            created_at: now,
            updated_at: now,
        };
        let updated = self.comments.update(incoming).await?.ok_or_else(|| {
            tracing::warn!(id, "comment not found, unable to update");
            AppError::not_found("Comment", id)
        })?;
        Ok(updated.into())
    }

    async fn patch(&self, request: PatchComment) -> AppResult<CommentResponse> {
        let id = request
            .id
            .ok_or_else(|| AppError::not_found("Comment", "null"))?;
        tracing::info!(id, "patching comment");
        let current = self
            .comments
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment", id))?;

        let update = UpdateComment {
            content: request.content.unwrap_or(current.content),
            news_id: request.news_id.unwrap_or(current.news_id),
        };
        self.update(id, update).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        tracing::info!(id, "deleting comment");
        if !self.comments.exists_by_id(id).await? {
            tracing::warn!(id, "comment not found, unable to delete");
            return Err(AppError::not_found("Comment", id));
        }
        self.comments.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockCommentRepository, MockNewsRepository};

    fn comment_model(id: i32, content: &str, news_id: i32) -> comment::Model {
        let now = Utc::now();
        comment::Model {
            id,
            content: content.to_string(),
            news_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(
        comments: MockCommentRepository,
        news: MockNewsRepository,
    ) -> CommentManager<MockCommentRepository, MockNewsRepository> {
        CommentManager::new(Arc::new(comments), Arc::new(news))
    }

    #[tokio::test]
    async fn create_requires_existing_news() {
        let comments = MockCommentRepository::new();
        let mut news = MockNewsRepository::new();
        news.expect_exists_by_id().returning(|_| Ok(false));

        let err = service(comments, news)
            .create(CreateComment {
                content: "A thoughtful remark".to_string(),
                news_id: 11,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn patch_keeps_stored_news_link_when_missing() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_read_by_id()
            .returning(|id| Ok(Some(comment_model(id, "Stored remark", 11))));
        comments
            .expect_update()
            .withf(|incoming| incoming.content == "Edited remark" && incoming.news_id == 11)
            .returning(|incoming| Ok(Some(incoming)));
        let mut news = MockNewsRepository::new();
        news.expect_exists_by_id().returning(|_| Ok(true));

        let patched = service(comments, news)
            .patch(PatchComment {
                id: Some(6),
                content: Some("Edited remark".to_string()),
                news_id: None,
            })
            .await
            .unwrap();

        assert_eq!(patched.content, "Edited remark");
        assert_eq!(patched.news_id, 11);
    }
}
