use models::{Gender, Movie, MoviePatch, NewMovie, NewUser, User, UserPatch};
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct DetailResponse { pub detail: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::users::search,
        crate::routes::movies::create,
        crate::routes::movies::list,
        crate::routes::movies::get,
        crate::routes::movies::update,
        crate::routes::movies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            DetailResponse,
            ErrorResponse,
            Gender,
            User,
            NewUser,
            UserPatch,
            Movie,
            NewMovie,
            MoviePatch,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "movies")
    )
)]
pub struct ApiDoc;
