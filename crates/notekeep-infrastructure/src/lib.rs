//! Infrastructure layer for Notekeep: document store drivers, store-backed
//! repositories, identity provider, paths and configuration loading.

pub mod config_service;
pub mod document_note_repository;
pub mod document_profile_repository;
pub mod document_store;
pub mod identity_provider;
pub mod paths;

#[cfg(test)]
mod test_support;

pub use crate::config_service::ConfigService;
pub use crate::document_note_repository::DocumentNoteRepository;
pub use crate::document_profile_repository::DocumentProfileRepository;
pub use crate::document_store::{
    DocumentStore, InMemoryDocumentStore, JsonDirDocumentStore, StoreError,
};
pub use crate::identity_provider::InMemoryIdentityProvider;
