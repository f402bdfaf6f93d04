//! Roster loading and saving service.

use std::sync::Arc;

use crate::domain::entities::Student;
use crate::domain::repositories::RosterStorage;
use crate::error::AppError;

/// Service that loads and saves the roster through a [`RosterStorage`].
///
/// An absent roster is treated as an empty one; any record that fails
/// validation aborts the load.
pub struct RosterService<S: RosterStorage> {
    storage: Arc<S>,
}

impl<S: RosterStorage> RosterService<S> {
    /// Creates a new roster service.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Loads every student, or an empty roster if none has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalValue`] if a persisted record is invalid.
    /// Returns [`AppError::Parse`] or [`AppError::Io`] if the store is unreadable.
    pub fn load(&self) -> Result<Vec<Student>, AppError> {
        match self.storage.read_roster()? {
            Some(students) => Ok(students),
            None => {
                tracing::info!("No roster found, starting with an empty roster");
                Ok(Vec::new())
            }
        }
    }

    /// Persists `students`, replacing the stored roster.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the store cannot be written.
    pub fn save(&self, students: &[Student]) -> Result<(), AppError> {
        self.storage.save_roster(students)?;
        tracing::info!(count = students.len(), "Roster saved");
        Ok(())
    }
}
