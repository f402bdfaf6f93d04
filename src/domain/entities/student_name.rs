//! Full name of a student.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::field_value::field_value_type;

/// First character must not be a space, otherwise `" "` would be a valid name.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").unwrap());

field_value_type! {
    StudentName {
        kind: "StudentName",
        constraints:
            "Names should only contain alphanumeric characters and spaces, and it should not be blank",
        is_valid: |raw| NAME_REGEX.is_match(raw),
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
