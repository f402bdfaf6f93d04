//! Score obtained by a student in one assessment.

use serde_json::json;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentScore {
    assessment: String,
    score: u32,
}

impl StudentScore {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Assessment names should not be blank";

    /// Creates a score for `assessment`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalValue`] if the assessment name is blank.
    pub fn new(assessment: impl Into<String>, score: u32) -> Result<Self, AppError> {
        let assessment = assessment.into();
        if assessment.trim().is_empty() {
            return Err(AppError::illegal_value(
                Self::MESSAGE_CONSTRAINTS,
                json!({ "field": "StudentScore", "reason": "invalid" }),
            ));
        }
        Ok(Self { assessment, score })
    }

    pub fn assessment(&self) -> &str {
        &self.assessment
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
