//! Service layer providing business-oriented CRUD operations on top of models.
//! - Keeps records in insertion-ordered in-memory stores, one per entity kind.
//! - Turns absence into `ServiceError::NotFound` where the HTTP contract needs it.
//! - Reuses validation and record definitions from the `models` crate.

pub mod errors;
pub mod movie_service;
pub mod seed;
pub mod storage;
pub mod user_service;

pub use movie_service::MovieService;
pub use user_service::UserService;
