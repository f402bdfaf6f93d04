//! Tutorial group a student is allocated to.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::field_value::field_value_type;

static TUTORIAL_GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{2}$").unwrap());

field_value_type! {
    /// A tutorial group name such as `T01`.
    TutorialGroup {
        kind: "TutorialGroup",
        constraints: "Tutorial group should be a capital letter followed by two digits, e.g. T01",
        is_valid: |raw| TUTORIAL_GROUP_REGEX.is_match(raw),
    }
}

impl fmt::Display for TutorialGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
