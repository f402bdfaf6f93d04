//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod roster_storage;

pub use roster_storage::RosterStorage;

#[cfg(test)]
pub use roster_storage::MockRosterStorage;
