//! Comment handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ListParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CommentResponse, CreateComment, PatchComment, UpdateComment};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Page};

/// Create comment routes
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route(
            "/:id",
            get(get_comment)
                .put(update_comment)
                .patch(patch_comment)
                .delete(delete_comment),
        )
}

/// List comments with pagination, sorting, and filtering
#[utoipa::path(
    get,
    path = "/comments",
    tag = "Comments",
    params(ListParams),
    responses(
        (status = 200, description = "One page of comments"),
        (status = 400, description = "Unknown sort or filter field")
    )
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<CommentResponse>>> {
    let page = state
        .comment_service
        .read_all(params.pagination(), params.filter()?)
        .await?;
    Ok(Json(page))
}

/// Get a single comment
#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = "Comments",
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment found", body = CommentResponse),
        (status = 404, description = "Comment does not exist")
    )
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CommentResponse>> {
    Ok(Json(state.comment_service.read_by_id(id).await?))
}

/// Create a comment
#[utoipa::path(
    post,
    path = "/comments",
    tag = "Comments",
    request_body = CreateComment,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced news does not exist")
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateComment>,
) -> AppResult<Created<CommentResponse>> {
    Ok(Created(state.comment_service.create(payload).await?))
}

/// Replace a comment
#[utoipa::path(
    put,
    path = "/comments/{id}",
    tag = "Comments",
    params(("id" = i32, Path, description = "Comment id")),
    request_body = UpdateComment,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 404, description = "Comment or news does not exist")
    )
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateComment>,
) -> AppResult<Json<CommentResponse>> {
    Ok(Json(state.comment_service.update(id, payload).await?))
}

/// Partially update a comment
#[utoipa::path(
    patch,
    path = "/comments/{id}",
    tag = "Comments",
    params(("id" = i32, Path, description = "Comment id")),
    request_body = PatchComment,
    responses(
        (status = 200, description = "Comment patched", body = CommentResponse),
        (status = 404, description = "Comment or news does not exist")
    )
)]
pub async fn patch_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(mut payload): ValidatedJson<PatchComment>,
) -> AppResult<Json<CommentResponse>> {
    payload.id = Some(id);
    Ok(Json(state.comment_service.patch(payload).await?))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = "Comments",
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Comment does not exist")
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.comment_service.delete_by_id(id).await?;
    Ok(NoContent)
}
