//! Business logic services for the application layer.

pub mod roster_service;

pub use roster_service::RosterService;
