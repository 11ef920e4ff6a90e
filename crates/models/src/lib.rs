//! Plain data types shared by the service and HTTP layers.
//!
//! Records, request payloads and the typed criteria used to query the
//! in-memory stores. Nothing here knows about storage or HTTP.

pub mod errors;
pub mod movie;
pub mod user;
pub mod validation;

pub use movie::{Movie, MovieCriterion, MoviePatch, MovieSearch, NewMovie};
pub use user::{Gender, NewUser, User, UserCriterion, UserPatch, UserSearch};
