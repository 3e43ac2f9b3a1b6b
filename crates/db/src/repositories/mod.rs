//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lookups that are reachable
//! from a user request take the owning `user_id` and only return rows inside
//! that user's (non-deleted) projects.

pub mod character_repo;
pub mod credit_repo;
pub mod object_repo;
pub mod project_repo;
pub mod prompt_history_repo;
pub mod scene_repo;
pub mod session_repo;
pub mod shot_repo;
pub mod user_repo;

pub use character_repo::CharacterRepo;
pub use credit_repo::{CreditRepo, GenerationCharge};
pub use object_repo::ObjectRepo;
pub use project_repo::ProjectRepo;
pub use prompt_history_repo::PromptHistoryRepo;
pub use scene_repo::SceneRepo;
pub use session_repo::SessionRepo;
pub use shot_repo::ShotRepo;
pub use user_repo::UserRepo;
