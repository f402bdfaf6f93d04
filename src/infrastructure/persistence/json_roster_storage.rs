//! JSON file implementation of roster storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::RosterRecord;
use crate::domain::entities::Student;
use crate::domain::repositories::RosterStorage;
use crate::error::AppError;

/// Reads and writes a roster as a single pretty-printed JSON document.
///
/// Writes go straight to the target file; there is no locking or atomic rename.
#[derive(Debug, Clone)]
pub struct JsonRosterStorage {
    path: PathBuf,
}

impl JsonRosterStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw roster document without materializing its records.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the file cannot be read.
    /// Returns [`AppError::Parse`] if the content is not a roster document.
    pub fn read_records(&self) -> Result<Option<RosterRecord>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Roster file not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let roster = serde_json::from_str(&content)?;
        Ok(Some(roster))
    }
}

impl RosterStorage for JsonRosterStorage {
    fn read_roster(&self) -> Result<Option<Vec<Student>>, AppError> {
        let Some(roster) = self.read_records()? else {
            return Ok(None);
        };

        let students = roster.to_model_type().inspect_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Illegal value in roster file");
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = students.len(),
            "Roster loaded"
        );
        Ok(Some(students))
    }

    fn save_roster(&self, students: &[Student]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let roster = RosterRecord::from_students(students);
        let content = serde_json::to_string_pretty(&roster)?;
        fs::write(&self.path, content)?;

        tracing::debug!(
            path = %self.path.display(),
            count = students.len(),
            "Roster saved"
        );
        Ok(())
    }
}
