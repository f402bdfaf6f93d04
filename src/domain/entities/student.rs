//! Student entity.

use std::collections::HashSet;

use super::{StudentEmail, StudentId, StudentName, StudentScore, Tag, TutorialGroup};

/// A student on the roster.
///
/// Every field is an already-validated value object, so a `Student` is valid by
/// construction. Fields are private to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    student_id: StudentId,
    name: StudentName,
    email: StudentEmail,
    tutorial_group: TutorialGroup,
    scores: Vec<StudentScore>,
    tags: HashSet<Tag>,
}

impl Student {
    /// Creates a new Student instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let student = Student::new(
    ///     StudentId::parse("A0123456X")?,
    ///     StudentName::parse("Alice")?,
    ///     StudentEmail::parse("a@x.com")?,
    ///     TutorialGroup::parse("T01")?,
    ///     Vec::new(),
    ///     HashSet::new(),
    /// );
    /// ```
    pub fn new(
        student_id: StudentId,
        name: StudentName,
        email: StudentEmail,
        tutorial_group: TutorialGroup,
        scores: Vec<StudentScore>,
        tags: HashSet<Tag>,
    ) -> Self {
        Self {
            student_id,
            name,
            email,
            tutorial_group,
            scores,
            tags,
        }
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }

    pub fn email(&self) -> &StudentEmail {
        &self.email
    }

    pub fn tutorial_group(&self) -> &TutorialGroup {
        &self.tutorial_group
    }

    pub fn scores(&self) -> &[StudentScore] {
        &self.scores
    }

    pub fn tags(&self) -> &HashSet<Tag> {
        &self.tags
    }
}
