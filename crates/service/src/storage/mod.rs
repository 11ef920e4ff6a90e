//! Storage abstractions for service layer
//!
//! A single generic, insertion-ordered in-memory store serves every entity
//! kind; `SharedStore` is the lock-guarded handle handed to services.

pub mod entity;
pub mod memory_store;

pub use entity::Entity;
pub use memory_store::{EntityStore, SharedStore};
