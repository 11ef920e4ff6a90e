pub mod movies;
pub mod users;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::{MovieService, UserService};

use crate::openapi::ApiDoc;

/// Services injected into every handler.
#[derive(Clone, Default)]
pub struct ServerState {
    pub users: UserService,
    pub movies: MovieService,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, docs, users and movies.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // 静态路径 /users/search 优先于 /users/:id 匹配
    let user_routes = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/search", get(users::search))
        .route("/users/:id", get(users::get).patch(users::update).delete(users::delete));

    let movie_routes = Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/:id", get(movies::get).patch(movies::update).delete(movies::delete));

    public
        .merge(user_routes)
        .merge(movie_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx 以 ERROR 级别记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
