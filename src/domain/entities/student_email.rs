//! Contact email of a student.

use std::fmt;
use validator::ValidateEmail;

use super::field_value::field_value_type;

field_value_type! {
    StudentEmail {
        kind: "StudentEmail",
        constraints: "Emails should be of the format local-part@domain \
             and adhere to the standard email address rules",
        is_valid: |raw| !raw.chars().any(char::is_whitespace) && raw.validate_email(),
    }
}

impl fmt::Display for StudentEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
