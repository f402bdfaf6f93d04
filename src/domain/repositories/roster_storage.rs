//! Storage trait for the persisted roster.

use crate::domain::entities::Student;
use crate::error::AppError;

/// Storage interface for loading and saving the whole roster.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonRosterStorage`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RosterStorage: Send + Sync {
    /// Reads and materializes every student in the roster.
    ///
    /// Returns `Ok(None)` if no roster has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalValue`] if any record violates a field constraint.
    /// Returns [`AppError::Parse`] if the stored data is not a valid roster document.
    /// Returns [`AppError::Io`] if the underlying store cannot be read.
    fn read_roster(&self) -> Result<Option<Vec<Student>>, AppError>;

    /// Persists `students`, replacing any previously stored roster.
    ///
    /// Tags and scores are not part of the persisted format and are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the underlying store cannot be written.
    fn save_roster(&self, students: &[Student]) -> Result<(), AppError>;
}
