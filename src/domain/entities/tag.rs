//! Free-form label attached to a student.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::field_value::field_value_type;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").unwrap());

field_value_type! {
    Tag {
        kind: "Tag",
        constraints: "Tags names should be alphanumeric",
        is_valid: |raw| TAG_REGEX.is_match(raw),
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldValue;

    #[test]
    fn test_tag_validation() {
        assert!(Tag::is_valid("friends"));
        assert!(Tag::is_valid("TA2"));
        assert!(!Tag::is_valid(""));
        assert!(!Tag::is_valid("best friends"));
        assert!(!Tag::is_valid("#hashtag"));
    }

    #[test]
    fn test_tag_display_is_bracketed() {
        let tag = Tag::parse("late").unwrap();
        assert_eq!(tag.to_string(), "[late]");
        assert_eq!(tag.as_str(), "late");
    }

    #[test]
    fn test_tag_from_str_and_as_ref() {
        let tag: Tag = "mentor".parse().unwrap();
        assert_eq!(tag.as_ref(), "mentor");

        let err = "two words".parse::<Tag>().unwrap_err();
        assert_eq!(err.to_string(), Tag::MESSAGE_CONSTRAINTS);
        assert_eq!(err.details().unwrap()["field"], "Tag");
    }
}
