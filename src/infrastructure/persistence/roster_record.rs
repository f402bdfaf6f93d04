//! Serializable envelope holding every student record of a roster file.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::StudentRecord;
use crate::domain::entities::Student;
use crate::error::AppError;

/// Top-level JSON document: `{ "students": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    #[serde(default)]
    students: Vec<StudentRecord>,
}

impl RosterRecord {
    pub fn new(students: Vec<StudentRecord>) -> Self {
        Self { students }
    }

    /// Builds the envelope from domain students, one record per student.
    pub fn from_students(students: &[Student]) -> Self {
        Self {
            students: students.iter().map(StudentRecord::from).collect(),
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Materializes every record, stopping at the first invalid one.
    ///
    /// No cross-record checks (such as duplicate IDs) are performed.
    ///
    /// # Errors
    ///
    /// Returns the first record's [`AppError::IllegalValue`], with the record's
    /// zero-based position added to its details under `index`.
    pub fn to_model_type(&self) -> Result<Vec<Student>, AppError> {
        self.students
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .to_model_type()
                    .map_err(|e| e.with_detail("index", json!(index)))
            })
            .collect()
    }

    /// Materializes each record independently, in order.
    pub fn materialize_each(&self) -> Vec<Result<Student, AppError>> {
        self.students
            .iter()
            .map(StudentRecord::to_model_type)
            .collect()
    }
}
