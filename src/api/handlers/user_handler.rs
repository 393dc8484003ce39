//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{UserId, ValidatedJson};
use crate::api::AppState;
use crate::config::MSG_USER_DELETED;
use crate::domain::{UserPatch, UserPayload, UserResponse};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid user id")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Replace a user (omitted `age` is cleared)
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User replaced", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn replace_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.replace_user(id, payload).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Partially update a user
///
/// Only `name`, `email` and `age` may be sent; any other key is rejected.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Unknown field or invalid value")
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(patch): ValidatedJson<UserPatch>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.patch_user(id, patch).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid user id")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(MessageResponse::new(MSG_USER_DELETED)))
}
