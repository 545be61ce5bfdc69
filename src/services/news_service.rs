//! News service - news-related business logic.
//!
//! Create and update validate every referenced author and tag id before
//! touching the store, so a failed lookup names the missing entity.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{CreateNews, NewsResponse, PatchNews, UpdateNews};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::news;
use crate::infra::repositories::{AuthorRepository, NewsRepository, TagRepository};
use crate::types::{Page, Pagination, SearchFilter};

/// News use cases.
#[async_trait]
pub trait NewsService: Send + Sync {
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<NewsResponse>>;

    async fn read_by_id(&self, id: i32) -> AppResult<NewsResponse>;

    async fn create(&self, request: CreateNews) -> AppResult<NewsResponse>;

    async fn update(&self, id: i32, request: UpdateNews) -> AppResult<NewsResponse>;

    /// Partial update: missing fields fall back to stored values (a missing
    /// tag list keeps the current associations), then the full update runs
    async fn patch(&self, request: PatchNews) -> AppResult<NewsResponse>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation backed by the news, author, and tag stores.
pub struct NewsManager<N, A, T>
where
    N: NewsRepository,
    A: AuthorRepository,
    T: TagRepository,
{
    news: Arc<N>,
    authors: Arc<A>,
    tags: Arc<T>,
}

impl<N, A, T> NewsManager<N, A, T>
where
    N: NewsRepository,
    A: AuthorRepository,
    T: TagRepository,
{
    /// Create new service instance
    pub fn new(news: Arc<N>, authors: Arc<A>, tags: Arc<T>) -> Self {
        Self {
            news,
            authors,
            tags,
        }
    }

    async fn require_author(&self, author_id: i32) -> AppResult<()> {
        if !self.authors.exists_by_id(author_id).await? {
            tracing::warn!(author_id, "author not found");
            return Err(AppError::not_found("Author", author_id));
        }
        Ok(())
    }

    async fn require_tags(&self, tag_ids: &[i32]) -> AppResult<()> {
        for tag_id in tag_ids {
            if !self.tags.exists_by_id(*tag_id).await? {
                tracing::warn!(tag_id, "tag not found");
                return Err(AppError::not_found("Tag", *tag_id));
            }
        }
        Ok(())
    }

    async fn to_response(&self, model: news::Model) -> AppResult<NewsResponse> {
        let tag_ids = self.news.tag_ids(model.id).await?;
        Ok(NewsResponse::from_model(model, tag_ids))
    }
}

#[async_trait]
impl<N, A, T> NewsService for NewsManager<N, A, T>
where
    N: NewsRepository,
    A: AuthorRepository,
    T: TagRepository,
{
    async fn read_all(
        &self,
        pagination: Pagination,
        filter: SearchFilter,
    ) -> AppResult<Page<NewsResponse>> {
        tracing::info!(page = pagination.page, "reading all news");
        let page = self.news.read_all(&pagination, &filter).await?;

        let Page {
            items,
            page: number,
            per_page,
            total,
            total_pages,
        } = page;
        let mut responses = Vec::with_capacity(items.len());
        for model in items {
            responses.push(self.to_response(model).await?);
        }

        Ok(Page {
            items: responses,
            page: number,
            per_page,
            total,
            total_pages,
        })
    }

    async fn read_by_id(&self, id: i32) -> AppResult<NewsResponse> {
        let model = self
            .news
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("News", id))?;
        self.to_response(model).await
    }

    async fn create(&self, request: CreateNews) -> AppResult<NewsResponse> {
        tracing::info!(title = %request.title, "creating news");
        self.require_author(request.author_id).await?;
        self.require_tags(&request.tag_ids).await?;

        let author = self.authors.reference(request.author_id);
        let model = self
            .news
            .create(request.title, request.content, author, request.tag_ids)
            .await?;
        self.to_response(model).await
    }

    async fn update(&self, id: i32, request: UpdateNews) -> AppResult<NewsResponse> {
        tracing::info!(id, "updating news");
        if !self.news.exists_by_id(id).await? {
            tracing::warn!(id, "news not found, unable to update");
            return Err(AppError::not_found("News", id));
        }
        self.require_author(request.author_id).await?;
        self.require_tags(&request.tag_ids).await?;

        let now = Utc::now();
        let incoming = news::Model {
            id,
            title: request.title,
            content: request.content,
            author_id: request.author_id,
            created_at: now,
            updated_at: now,
        };
        let updated = self
            .news
            .update(incoming, request.tag_ids)
            .await?
            .ok_or_else(|| AppError::not_found("News", id))?;
        self.to_response(updated).await
    }

    async fn patch(&self, request: PatchNews) -> AppResult<NewsResponse> {
        let id = request
            .id
            .ok_or_else(|| AppError::not_found("News", "null"))?;
        tracing::info!(id, "patching news");
        let current = self
            .news
            .read_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("News", id))?;

        let tag_ids = match request.tag_ids {
            Some(tag_ids) => tag_ids,
            None => self.news.tag_ids(id).await?,
        };
        let update = UpdateNews {
            title: request.title.unwrap_or(current.title),
            content: request.content.unwrap_or(current.content),
            author_id: request.author_id.unwrap_or(current.author_id),
            tag_ids,
        };
        self.update(id, update).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        tracing::info!(id, "deleting news");
        if !self.news.exists_by_id(id).await? {
            tracing::warn!(id, "news not found, unable to delete");
            return Err(AppError::not_found("News", id));
        }
        self.news.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{
        MockAuthorRepository, MockNewsRepository, MockTagRepository,
    };

    fn news_model(id: i32) -> news::Model {
        let now = Utc::now();
        news::Model {
            id,
            title: "Stored title".to_string(),
            content: "Stored content".to_string(),
            author_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(
        news: MockNewsRepository,
        authors: MockAuthorRepository,
        tags: MockTagRepository,
    ) -> NewsManager<MockNewsRepository, MockAuthorRepository, MockTagRepository> {
        NewsManager::new(Arc::new(news), Arc::new(authors), Arc::new(tags))
    }

    #[tokio::test]
    async fn create_rejects_missing_author() {
        let news = MockNewsRepository::new();
        let mut authors = MockAuthorRepository::new();
        authors.expect_exists_by_id().returning(|_| Ok(false));
        let tags = MockTagRepository::new();

        let err = service(news, authors, tags)
            .create(CreateNews {
                title: "A fresh headline".to_string(),
                content: "Some content".to_string(),
                author_id: 9,
                tag_ids: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("Author")));
    }

    #[tokio::test]
    async fn update_rejects_missing_tag() {
        let mut news = MockNewsRepository::new();
        news.expect_exists_by_id().returning(|_| Ok(true));
        let mut authors = MockAuthorRepository::new();
        authors.expect_exists_by_id().returning(|_| Ok(true));
        let mut tags = MockTagRepository::new();
        tags.expect_exists_by_id().returning(|_| Ok(false));

        let err = service(news, authors, tags)
            .update(
                1,
                UpdateNews {
                    title: "A fresh headline".to_string(),
                    content: "Some content".to_string(),
                    author_id: 1,
                    tag_ids: vec![5],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("Tag")));
    }

    #[tokio::test]
    async fn patch_with_no_fields_replays_the_stored_row() {
        let mut news = MockNewsRepository::new();
        news.expect_read_by_id()
            .returning(|id| Ok(Some(news_model(id))));
        news.expect_tag_ids().returning(|_| Ok(vec![1, 2]));
        news.expect_exists_by_id().returning(|_| Ok(true));
        news.expect_update()
            .withf(|incoming, tag_ids| {
                incoming.title == "Stored title"
                    && incoming.content == "Stored content"
                    && incoming.author_id == 1
                    && *tag_ids == vec![1, 2]
            })
            .returning(|incoming, _| Ok(Some(incoming)));

        let mut authors = MockAuthorRepository::new();
        authors.expect_exists_by_id().returning(|_| Ok(true));
        let mut tags = MockTagRepository::new();
        tags.expect_exists_by_id().returning(|_| Ok(true));

        let patched = service(news, authors, tags)
            .patch(PatchNews {
                id: Some(4),
                ..PatchNews::default()
            })
            .await
            .unwrap();

        assert_eq!(patched.title, "Stored title");
        assert_eq!(patched.tag_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn patch_changes_only_the_supplied_field() {
        let mut news = MockNewsRepository::new();
        news.expect_read_by_id()
            .returning(|id| Ok(Some(news_model(id))));
        news.expect_tag_ids().returning(|_| Ok(vec![3]));
        news.expect_exists_by_id().returning(|_| Ok(true));
        news.expect_update()
            .withf(|incoming, tag_ids| {
                incoming.title == "Patched title"
                    && incoming.content == "Stored content"
                    && *tag_ids == vec![3]
            })
            .returning(|incoming, _| Ok(Some(incoming)));

        let mut authors = MockAuthorRepository::new();
        authors.expect_exists_by_id().returning(|_| Ok(true));
        let mut tags = MockTagRepository::new();
        tags.expect_exists_by_id().returning(|_| Ok(true));

        let patched = service(news, authors, tags)
            .patch(PatchNews {
                id: Some(4),
                title: Some("Patched title".to_string()),
                ..PatchNews::default()
            })
            .await
            .unwrap();

        assert_eq!(patched.title, "Patched title");
        assert_eq!(patched.content, "Stored content");
    }

    #[tokio::test]
    async fn patch_missing_news_is_not_found() {
        let mut news = MockNewsRepository::new();
        news.expect_read_by_id().returning(|_| Ok(None));
        let authors = MockAuthorRepository::new();
        let tags = MockTagRepository::new();

        let err = service(news, authors, tags)
            .patch(PatchNews {
                id: Some(4),
                ..PatchNews::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
