#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use student_roster::domain::entities::{
    FieldValue, Student, StudentEmail, StudentId, StudentName, TutorialGroup,
};
use student_roster::infrastructure::persistence::StudentRecord;

pub const VALID_ID: &str = "A0123456X";
pub const VALID_NAME: &str = "Alice";
pub const VALID_EMAIL: &str = "a@x.com";
pub const VALID_GROUP: &str = "T01";

pub fn record(
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

pub fn valid_record() -> StudentRecord {
    record(
        Some(VALID_ID),
        Some(VALID_NAME),
        Some(VALID_EMAIL),
        Some(VALID_GROUP),
    )
}

pub fn create_test_student(id: &str, name: &str, email: &str, group: &str) -> Student {
    Student::new(
        StudentId::parse(id).unwrap(),
        StudentName::parse(name).unwrap(),
        StudentEmail::parse(email).unwrap(),
        TutorialGroup::parse(group).unwrap(),
        Vec::new(),
        HashSet::new(),
    )
}

pub fn sample_students() -> Vec<Student> {
    vec![
        create_test_student("A0000001A", "Alice Tan", "alice@u.nus.edu", "T01"),
        create_test_student("A0000002B", "Bob Lim", "bob@u.nus.edu", "T01"),
        create_test_student("A0000003C", "Charlie Ng", "charlie@u.nus.edu", "T02"),
    ]
}

pub fn write_roster(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
