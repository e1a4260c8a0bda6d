//! Use cases: one business operation each, over exactly one repository.

mod check_profile_exists;
mod create_note;
mod get_profile;
mod get_user_notes;
mod save_profile;

#[cfg(test)]
pub(crate) mod mocks;

pub use check_profile_exists::CheckProfileExists;
pub use create_note::{CreateNote, CreateNoteInput};
pub use get_profile::GetProfile;
pub use get_user_notes::GetUserNotes;
pub use save_profile::SaveProfile;
