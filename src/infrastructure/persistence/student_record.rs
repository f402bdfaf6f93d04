//! Serializable form of a [`Student`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::entities::{
    FieldValue, Student, StudentEmail, StudentId, StudentName, TutorialGroup,
};
use crate::error::AppError;

/// Flat, JSON-friendly record of one student.
///
/// Every field is optional so that an absent key (or `null`) can be told apart
/// from a present but malformed value. Tags and scores are not part of the
/// persisted format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    student_id: Option<String>,
    student_name: Option<String>,
    student_email: Option<String>,
    tutorial_group: Option<String>,
}

impl StudentRecord {
    /// Creates a record from raw field values without validating them.
    pub fn new(
        student_id: Option<String>,
        student_name: Option<String>,
        student_email: Option<String>,
        tutorial_group: Option<String>,
    ) -> Self {
        Self {
            student_id,
            student_name,
            student_email,
            tutorial_group,
        }
    }

    pub fn student_id(&self) -> Option<&str> {
        self.student_id.as_deref()
    }

    pub fn student_name(&self) -> Option<&str> {
        self.student_name.as_deref()
    }

    pub fn student_email(&self) -> Option<&str> {
        self.student_email.as_deref()
    }

    pub fn tutorial_group(&self) -> Option<&str> {
        self.tutorial_group.as_deref()
    }

    /// Converts this record into a validated [`Student`].
    ///
    /// Fields are checked one at a time in the order id, name, email, tutorial
    /// group; the first absent or malformed field aborts the conversion. The
    /// resulting student has no tags and no scores.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalValue`] with the missing-field message if a
    /// field is absent, or with the field's constraint message if it is malformed.
    pub fn to_model_type(&self) -> Result<Student, AppError> {
        let student_id: StudentId = materialize(self.student_id())?;
        let name: StudentName = materialize(self.student_name())?;
        let email: StudentEmail = materialize(self.student_email())?;
        let tutorial_group: TutorialGroup = materialize(self.tutorial_group())?;

        // TODO: persist tags and scores once the record format carries them.
        let scores = Vec::new();
        let tags = HashSet::new();

        Ok(Student::new(
            student_id,
            name,
            email,
            tutorial_group,
            scores,
            tags,
        ))
    }
}

fn materialize<T: FieldValue>(raw: Option<&str>) -> Result<T, AppError> {
    let raw = raw.ok_or_else(|| AppError::missing_field(T::KIND))?;
    T::parse(raw)
}

impl From<&Student> for StudentRecord {
    fn from(source: &Student) -> Self {
        if !source.tags().is_empty() || !source.scores().is_empty() {
            tracing::warn!(
                student_id = %source.student_id(),
                tags = source.tags().len(),
                scores = source.scores().len(),
                "Tags and scores are not persisted and will be dropped"
            );
        }

        Self {
            student_id: Some(source.student_id().as_str().to_owned()),
            student_name: Some(source.name().as_str().to_owned()),
            student_email: Some(source.email().as_str().to_owned()),
            tutorial_group: Some(source.tutorial_group().as_str().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{StudentScore, Tag};
    use crate::error::missing_field_message;
    use serde_json::json;

    fn record(
        id: Option<&str>,
        name: Option<&str>,
        email: Option<&str>,
        group: Option<&str>,
    ) -> StudentRecord {
        StudentRecord::new(
            id.map(str::to_owned),
            name.map(str::to_owned),
            email.map(str::to_owned),
            group.map(str::to_owned),
        )
    }

    fn valid() -> StudentRecord {
        record(Some("A0123456X"), Some("Alice"), Some("a@x.com"), Some("T01"))
    }

    #[test]
    fn test_valid_record_materializes() {
        let student = valid().to_model_type().unwrap();

        assert_eq!(student.student_id().as_str(), "A0123456X");
        assert_eq!(student.name().as_str(), "Alice");
        assert_eq!(student.email().as_str(), "a@x.com");
        assert_eq!(student.tutorial_group().as_str(), "T01");
        assert!(student.tags().is_empty());
        assert!(student.scores().is_empty());
    }

    #[test]
    fn test_null_student_id() {
        let err = record(None, Some("Alice"), Some("a@x.com"), Some("T01"))
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), missing_field_message(StudentId::KIND));
    }

    #[test]
    fn test_invalid_student_name() {
        let err = record(Some("A0123456X"), Some(""), Some("a@x.com"), Some("T01"))
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), StudentName::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_null_student_name() {
        let err = record(Some("A0123456X"), None, Some("a@x.com"), Some("T01"))
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), missing_field_message(StudentName::KIND));
    }

    #[test]
    fn test_invalid_email() {
        let err = record(Some("A0123456X"), Some("Alice"), Some("not-an-email"), Some("T01"))
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), StudentEmail::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_null_email() {
        let err = record(Some("A0123456X"), Some("Alice"), None, Some("T01"))
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), missing_field_message(StudentEmail::KIND));
    }

    #[test]
    fn test_invalid_tutorial_group() {
        let err = record(Some("A0123456X"), Some("Alice"), Some("a@x.com"), Some("tut 1"))
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), TutorialGroup::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_null_tutorial_group() {
        let err = record(Some("A0123456X"), Some("Alice"), Some("a@x.com"), None)
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), missing_field_message(TutorialGroup::KIND));
    }

    #[test]
    fn test_first_bad_field_wins() {
        let err = record(Some("bad"), None, Some("bad"), None)
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), StudentId::MESSAGE_CONSTRAINTS);

        let err = StudentRecord::default().to_model_type().unwrap_err();
        assert_eq!(err.to_string(), missing_field_message(StudentId::KIND));
    }

    #[test]
    fn test_missing_and_invalid_messages_differ() {
        let missing = record(None, Some("Alice"), Some("a@x.com"), Some("T01"))
            .to_model_type()
            .unwrap_err();
        let invalid = record(Some("X"), Some("Alice"), Some("a@x.com"), Some("T01"))
            .to_model_type()
            .unwrap_err();

        assert_ne!(missing.to_string(), invalid.to_string());
        assert_eq!(missing.details().unwrap()["reason"], "missing");
        assert_eq!(invalid.details().unwrap()["reason"], "invalid");
    }

    #[test]
    fn test_from_student_copies_raw_strings() {
        let student = valid().to_model_type().unwrap();
        let record = StudentRecord::from(&student);

        assert_eq!(record, valid());
    }

    #[test]
    fn test_from_student_drops_tags_and_scores() {
        let base = valid().to_model_type().unwrap();
        let student = Student::new(
            base.student_id().clone(),
            base.name().clone(),
            base.email().clone(),
            base.tutorial_group().clone(),
            vec![StudentScore::new("Final", 70).unwrap()],
            HashSet::from([Tag::parse("tutor").unwrap()]),
        );

        let reloaded = StudentRecord::from(&student).to_model_type().unwrap();
        assert_eq!(reloaded, base);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(valid()).unwrap();
        assert_eq!(
            value,
            json!({
                "studentId": "A0123456X",
                "studentName": "Alice",
                "studentEmail": "a@x.com",
                "tutorialGroup": "T01"
            })
        );
    }

    #[test]
    fn test_absent_and_null_keys_deserialize_to_none() {
        let record: StudentRecord =
            serde_json::from_value(json!({ "studentId": null, "studentName": "Alice" })).unwrap();

        assert!(record.student_id().is_none());
        assert_eq!(record.student_name(), Some("Alice"));
        assert!(record.student_email().is_none());
        assert!(record.tutorial_group().is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record: StudentRecord = serde_json::from_value(json!({
            "studentId": "A0123456X",
            "studentName": "Alice",
            "studentEmail": "a@x.com",
            "tutorialGroup": "T01",
            "tags": ["friend"]
        }))
        .unwrap();

        let student = record.to_model_type().unwrap();
        assert!(student.tags().is_empty());
    }
}
