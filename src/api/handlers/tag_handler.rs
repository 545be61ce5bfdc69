//! Tag handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ListParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateTag, PatchTag, TagResponse, UpdateTag};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Page};

/// Create tag routes
pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tags).post(create_tag))
        .route(
            "/:id",
            get(get_tag)
                .put(update_tag)
                .patch(patch_tag)
                .delete(delete_tag),
        )
}

/// List tags with pagination, sorting, and filtering
#[utoipa::path(
    get,
    path = "/tags",
    tag = "Tags",
    params(ListParams),
    responses(
        (status = 200, description = "One page of tags"),
        (status = 400, description = "Unknown sort or filter field")
    )
)]
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<TagResponse>>> {
    let page = state
        .tag_service
        .read_all(params.pagination(), params.filter()?)
        .await?;
    Ok(Json(page))
}

/// Get a single tag
#[utoipa::path(
    get,
    path = "/tags/{id}",
    tag = "Tags",
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag found", body = TagResponse),
        (status = 404, description = "Tag does not exist")
    )
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TagResponse>> {
    Ok(Json(state.tag_service.read_by_id(id).await?))
}

/// Create a tag
#[utoipa::path(
    post,
    path = "/tags",
    tag = "Tags",
    request_body = CreateTag,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTag>,
) -> AppResult<Created<TagResponse>> {
    Ok(Created(state.tag_service.create(payload).await?))
}

/// Replace a tag
#[utoipa::path(
    put,
    path = "/tags/{id}",
    tag = "Tags",
    params(("id" = i32, Path, description = "Tag id")),
    request_body = UpdateTag,
    responses(
        (status = 200, description = "Tag updated", body = TagResponse),
        (status = 404, description = "Tag does not exist")
    )
)]
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTag>,
) -> AppResult<Json<TagResponse>> {
    Ok(Json(state.tag_service.update(id, payload).await?))
}

/// Partially update a tag
#[utoipa::path(
    patch,
    path = "/tags/{id}",
    tag = "Tags",
    params(("id" = i32, Path, description = "Tag id")),
    request_body = PatchTag,
    responses(
        (status = 200, description = "Tag patched", body = TagResponse),
        (status = 404, description = "Tag does not exist")
    )
)]
pub async fn patch_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(mut payload): ValidatedJson<PatchTag>,
) -> AppResult<Json<TagResponse>> {
    payload.id = Some(id);
    Ok(Json(state.tag_service.patch(payload).await?))
}

/// Delete a tag
#[utoipa::path(
    delete,
    path = "/tags/{id}",
    tag = "Tags",
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 404, description = "Tag does not exist")
    )
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.tag_service.delete_by_id(id).await?;
    Ok(NoContent)
}
