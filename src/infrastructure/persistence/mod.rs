//! JSON persistence for the roster.
//!
//! - [`StudentRecord`] - Validating adapter between a persisted record and a `Student`
//! - [`RosterRecord`] - Document envelope holding every record of a roster
//! - [`JsonRosterStorage`] - File-backed [`crate::domain::repositories::RosterStorage`]

pub mod json_roster_storage;
pub mod roster_record;
pub mod student_record;

pub use json_roster_storage::JsonRosterStorage;
pub use roster_record::RosterRecord;
pub use student_record::StudentRecord;
