//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod character;
pub mod credit;
pub mod object_item;
pub mod project;
pub mod prompt_history;
pub mod scene;
pub mod session;
pub mod shot;
pub mod user;
