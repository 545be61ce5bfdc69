//! Author handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ListParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{AuthorResponse, CreateAuthor, PatchAuthor, UpdateAuthor};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Page};

/// Create author routes
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/:id",
            get(get_author)
                .put(update_author)
                .patch(patch_author)
                .delete(delete_author),
        )
}

/// List authors with pagination, sorting, and filtering
#[utoipa::path(
    get,
    path = "/authors",
    tag = "Authors",
    params(ListParams),
    responses(
        (status = 200, description = "One page of authors"),
        (status = 400, description = "Unknown sort or filter field")
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<AuthorResponse>>> {
    let page = state
        .author_service
        .read_all(params.pagination(), params.filter()?)
        .await?;
    Ok(Json(page))
}

/// Get a single author
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "Authors",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author found", body = AuthorResponse),
        (status = 404, description = "Author does not exist")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorResponse>> {
    Ok(Json(state.author_service.read_by_id(id).await?))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "Authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAuthor>,
) -> AppResult<Created<AuthorResponse>> {
    Ok(Created(state.author_service.create(payload).await?))
}

/// Replace an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "Authors",
    params(("id" = i32, Path, description = "Author id")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 404, description = "Author does not exist")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAuthor>,
) -> AppResult<Json<AuthorResponse>> {
    Ok(Json(state.author_service.update(id, payload).await?))
}

/// Partially update an author
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "Authors",
    params(("id" = i32, Path, description = "Author id")),
    request_body = PatchAuthor,
    responses(
        (status = 200, description = "Author patched", body = AuthorResponse),
        (status = 404, description = "Author does not exist")
    )
)]
pub async fn patch_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(mut payload): ValidatedJson<PatchAuthor>,
) -> AppResult<Json<AuthorResponse>> {
    payload.id = Some(id);
    Ok(Json(state.author_service.patch(payload).await?))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "Authors",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author does not exist")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.author_service.delete_by_id(id).await?;
    Ok(NoContent)
}
