use axum::{
    extract::State,
    Json,
};
use common::types::Detail;
use models::{NewUser, User, UserPatch, UserSearch};
use tracing::info;

use crate::{errors::JsonApiError, extract::{ApiJson, ApiQuery, RecordId}, routes::ServerState};

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Created, body is the new user id", body = u64),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<NewUser>) -> Json<u64> {
    let user = state.users.create(input).await;
    Json(user.id)
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 404, description = "No users")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<User>>, JsonApiError> {
    let users = state.users.list().await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID, greater than 0")),
    responses(
        (status = 200, description = "OK", body = User),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Invalid id")
    )
)]
pub async fn get(State(state): State<ServerState>, RecordId(id): RecordId) -> Result<Json<User>, JsonApiError> {
    Ok(Json(state.users.get(id).await?))
}

#[utoipa::path(
    patch, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID, greater than 0")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "Updated", body = User),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    RecordId(id): RecordId,
    ApiJson(patch): ApiJson<UserPatch>,
) -> Result<Json<User>, JsonApiError> {
    Ok(Json(state.users.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID, greater than 0")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DetailResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, RecordId(id): RecordId) -> Result<Json<Detail>, JsonApiError> {
    let user = state.users.delete(id).await?;
    Ok(Json(Detail::new(format!("User: {}, has been deleted", user.id))))
}

#[utoipa::path(
    get, path = "/users/search", tag = "users",
    params(UserSearch),
    responses(
        (status = 200, description = "Matching users", body = [User]),
        (status = 404, description = "No match"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<UserSearch>,
) -> Result<Json<Vec<User>>, JsonApiError> {
    let users = state.users.search(query).await?;
    info!(count = users.len(), "search users");
    Ok(Json(users))
}
