//! Domain logic for ShotPilot.
//!
//! Pure types and rules shared by the database, RAG, and API crates. Nothing
//! in here performs I/O.

pub mod brief;
pub mod credits;
pub mod error;
pub mod mention;
pub mod roles;
pub mod specialist;
pub mod types;
pub mod validation;
