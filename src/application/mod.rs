//! Application layer services.
//!
//! Services consume storage traits and provide a clean API for the CLI.
//!
//! # Available Services
//!
//! - [`services::roster_service::RosterService`] - Roster loading and saving

pub mod services;
