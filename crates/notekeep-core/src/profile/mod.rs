//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: the `Profile` entity, `Gender` and input types
//! - `repository`: Profile repository trait for persistence

mod model;
pub mod repository;

pub use model::{Gender, PROFILE_NAME_MAX_CHARS, Profile, ProfileInput, ProfileParams};
pub use repository::ProfileRepository;
