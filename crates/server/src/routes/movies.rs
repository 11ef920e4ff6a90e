use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use models::{Movie, MoviePatch, MovieSearch, NewMovie};
use tracing::info;

use crate::{errors::JsonApiError, extract::{ApiJson, ApiQuery, RecordId}, routes::ServerState};

#[utoipa::path(
    post, path = "/movies", tag = "movies",
    request_body = NewMovie,
    responses(
        (status = 201, description = "Created", body = Movie),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<NewMovie>) -> (StatusCode, Json<Movie>) {
    let movie = state.movies.create(input).await;
    (StatusCode::CREATED, Json(movie))
}

#[utoipa::path(
    get, path = "/movies", tag = "movies",
    params(MovieSearch),
    responses((status = 200, description = "Matching movies, possibly empty", body = [Movie]))
)]
pub async fn list(State(state): State<ServerState>, ApiQuery(query): ApiQuery<MovieSearch>) -> Json<Vec<Movie>> {
    let movies = state.movies.list(query).await;
    info!(count = movies.len(), "list movies");
    Json(movies)
}

#[utoipa::path(
    get, path = "/movies/{id}", tag = "movies",
    params(("id" = i64, Path, description = "Movie ID, greater than 0")),
    responses(
        (status = 200, description = "OK", body = Movie),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Invalid id")
    )
)]
pub async fn get(State(state): State<ServerState>, RecordId(id): RecordId) -> Result<Json<Movie>, JsonApiError> {
    Ok(Json(state.movies.get(id).await?))
}

#[utoipa::path(
    patch, path = "/movies/{id}", tag = "movies",
    params(("id" = i64, Path, description = "Movie ID, greater than 0")),
    request_body = MoviePatch,
    responses(
        (status = 200, description = "Updated", body = Movie),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    RecordId(id): RecordId,
    ApiJson(patch): ApiJson<MoviePatch>,
) -> Result<Json<Movie>, JsonApiError> {
    Ok(Json(state.movies.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/movies/{id}", tag = "movies",
    params(("id" = i64, Path, description = "Movie ID, greater than 0")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, RecordId(id): RecordId) -> Result<StatusCode, JsonApiError> {
    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
