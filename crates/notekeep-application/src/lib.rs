//! Application layer for Notekeep.
//!
//! Use cases over the repository traits, the explicit shared UI state, the
//! navigation guard with its router, and the view-model services that bind
//! them to the current identity.

pub mod auth_session;
pub mod bootstrap;
pub mod context;
pub mod navigation_guard;
pub mod profile_session;
pub mod router;
pub mod usecase;

pub use auth_session::AuthSession;
pub use bootstrap::{AppServices, wait_for_initial_auth_state};
pub use context::{AppContext, Observable};
pub use navigation_guard::{NavigationGuard, ProfileExistenceCheck};
pub use profile_session::ProfileSession;
pub use router::{NavigationResult, Router};
