//! News handlers, including the news sub-resources.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ListParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{
    AuthorResponse, CommentResponse, CreateNews, NewsResponse, PatchNews, TagResponse, UpdateNews,
};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Page};

/// Create news routes
pub fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_news).post(create_news))
        .route(
            "/:id",
            get(get_news)
                .put(update_news)
                .patch(patch_news)
                .delete(delete_news),
        )
        .route("/:id/author", get(get_news_author))
        .route("/:id/tags", get(get_news_tags))
        .route("/:id/comments", get(get_news_comments))
}

/// List news with pagination, sorting, and filtering
#[utoipa::path(
    get,
    path = "/news",
    tag = "News",
    params(ListParams),
    responses(
        (status = 200, description = "One page of news"),
        (status = 400, description = "Unknown sort or filter field")
    )
)]
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<NewsResponse>>> {
    let page = state
        .news_service
        .read_all(params.pagination(), params.filter()?)
        .await?;
    Ok(Json(page))
}

/// Get a single news item
#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = "News",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News found", body = NewsResponse),
        (status = 404, description = "News does not exist")
    )
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<NewsResponse>> {
    Ok(Json(state.news_service.read_by_id(id).await?))
}

/// Create a news item
#[utoipa::path(
    post,
    path = "/news",
    tag = "News",
    request_body = CreateNews,
    responses(
        (status = 201, description = "News created", body = NewsResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced author or tag does not exist")
    )
)]
pub async fn create_news(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateNews>,
) -> AppResult<Created<NewsResponse>> {
    Ok(Created(state.news_service.create(payload).await?))
}

/// Replace a news item
#[utoipa::path(
    put,
    path = "/news/{id}",
    tag = "News",
    params(("id" = i32, Path, description = "News id")),
    request_body = UpdateNews,
    responses(
        (status = 200, description = "News updated", body = NewsResponse),
        (status = 404, description = "News, author, or tag does not exist")
    )
)]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateNews>,
) -> AppResult<Json<NewsResponse>> {
    Ok(Json(state.news_service.update(id, payload).await?))
}

/// Partially update a news item
#[utoipa::path(
    patch,
    path = "/news/{id}",
    tag = "News",
    params(("id" = i32, Path, description = "News id")),
    request_body = PatchNews,
    responses(
        (status = 200, description = "News patched", body = NewsResponse),
        (status = 404, description = "News, author, or tag does not exist")
    )
)]
pub async fn patch_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(mut payload): ValidatedJson<PatchNews>,
) -> AppResult<Json<NewsResponse>> {
    payload.id = Some(id);
    Ok(Json(state.news_service.patch(payload).await?))
}

/// Delete a news item
#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = "News",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 204, description = "News deleted"),
        (status = 404, description = "News does not exist")
    )
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.news_service.delete_by_id(id).await?;
    Ok(NoContent)
}

/// Get the author of a news item
#[utoipa::path(
    get,
    path = "/news/{id}/author",
    tag = "News",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "Author of the news item", body = AuthorResponse),
        (status = 404, description = "News does not exist")
    )
)]
pub async fn get_news_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorResponse>> {
    Ok(Json(state.author_service.read_by_news_id(id).await?))
}

/// Get the tags attached to a news item
#[utoipa::path(
    get,
    path = "/news/{id}/tags",
    tag = "News",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "Tags of the news item"),
        (status = 404, description = "News does not exist")
    )
)]
pub async fn get_news_tags(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<TagResponse>>> {
    Ok(Json(state.tag_service.read_by_news_id(id).await?))
}

/// Get the comments on a news item
#[utoipa::path(
    get,
    path = "/news/{id}/comments",
    tag = "News",
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "Comments on the news item"),
        (status = 404, description = "News does not exist")
    )
)]
pub async fn get_news_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    Ok(Json(state.comment_service.read_by_news_id(id).await?))
}
