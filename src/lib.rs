//! # Student Roster
//!
//! Validating JSON persistence for a student roster.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Student` entity, its value objects and the storage trait
//! - **Application Layer** ([`application`]) - Roster loading and saving service
//! - **Infrastructure Layer** ([`infrastructure`]) - Persisted record format and JSON file storage
//!
//! ## Loading and saving
//!
//! On load, a [`infrastructure::persistence::StudentRecord`] is deserialized from
//! JSON and converted with `to_model_type`, which re-checks every field
//! invariant. On save, a `Student` is converted back with `StudentRecord::from`.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RosterService;
    pub use crate::domain::entities::{
        FieldValue, Student, StudentEmail, StudentId, StudentName, StudentScore, Tag,
        TutorialGroup,
    };
    pub use crate::domain::repositories::RosterStorage;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{JsonRosterStorage, RosterRecord, StudentRecord};
}
