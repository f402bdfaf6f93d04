//! Matriculation identifier of a student.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::field_value::field_value_type;

static STUDENT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A[0-9]{7}[A-Z]$").unwrap());

field_value_type! {
    /// A student identifier such as `A0123456X`.
    StudentId {
        kind: "StudentId",
        constraints: "Student ID should start with 'A', followed by 7 digits \
             and end with a capital letter, e.g. A0123456X",
        is_valid: |raw| STUDENT_ID_REGEX.is_match(raw),
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
