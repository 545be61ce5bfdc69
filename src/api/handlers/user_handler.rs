//! User handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ListParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateUser, PatchUser, UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Page};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user)
                .put(update_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

/// List users with pagination, sorting, and filtering
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListParams),
    responses(
        (status = 200, description = "One page of users"),
        (status = 400, description = "Unknown sort or filter field")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<UserResponse>>> {
    let page = state
        .user_service
        .read_all(params.pagination(), params.filter()?)
        .await?;
    Ok(Json(page))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User does not exist")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.user_service.read_by_id(id).await?))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created<UserResponse>> {
    Ok(Created(state.user_service.create(payload).await?))
}

/// Replace a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User does not exist"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.user_service.update(id, payload).await?))
}

/// Partially update a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = PatchUser,
    responses(
        (status = 200, description = "User patched", body = UserResponse),
        (status = 404, description = "User does not exist")
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(mut payload): ValidatedJson<PatchUser>,
) -> AppResult<Json<UserResponse>> {
    payload.id = Some(id);
    Ok(Json(state.user_service.patch(payload).await?))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User does not exist")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.user_service.delete_by_id(id).await?;
    Ok(NoContent)
}
