//! Domain layer containing the roster entities and storage contracts.
//!
//! - [`entities`] - The [`entities::Student`] entity and its value objects
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no knowledge of the persisted record format.

pub mod entities;
pub mod repositories;
