//! Core domain entities of the roster.
//!
//! A [`Student`] is composed of single-string value objects, each implementing
//! [`FieldValue`]: it can only be built through a validating smart constructor.
//!
//! # Entity Types
//!
//! - [`Student`] - A student on the roster
//! - [`StudentId`], [`StudentName`], [`StudentEmail`], [`TutorialGroup`] - Persisted fields
//! - [`Tag`], [`StudentScore`] - In-memory collections, not persisted

pub mod field_value;
pub mod student;
pub mod student_email;
pub mod student_id;
pub mod student_name;
pub mod student_score;
pub mod tag;
pub mod tutorial_group;

pub use field_value::FieldValue;
pub use student::Student;
pub use student_email::StudentEmail;
pub use student_id::StudentId;
pub use student_name::StudentName;
pub use student_score::StudentScore;
pub use tag::Tag;
pub use tutorial_group::TutorialGroup;
