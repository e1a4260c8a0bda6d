//! In-memory repository doubles shared by use case tests.

use async_trait::async_trait;
use notekeep_core::error::{NotekeepError, Result, StoreOperation};
use notekeep_core::note::{Note, NoteRepository};
use notekeep_core::profile::{Profile, ProfileRepository};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// Mock NoteRepository for testing
#[derive(Default)]
pub struct MockNoteRepository {
    pub notes: Mutex<HashMap<String, Note>>,
    pub save_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl MockNoteRepository {
    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Direct lookup for assertions; panics when the note is missing.
    pub fn find_by_id_sync(&self, id: &str) -> Note {
        self.notes
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_else(|| panic!("note {id} was not saved"))
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn save(&self, note: &Note) -> Result<String> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let id = note.id.clone().unwrap_or_else(|| {
            format!("note-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
        });
        let mut stored = note.clone();
        stored.id = Some(id.clone());
        self.notes.lock().unwrap().insert(id.clone(), stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.notes.lock().unwrap().get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .values()
            .filter(|note| note.user_id == user_id)
            .cloned()
            .collect())
    }
}

// Mock ProfileRepository for testing
#[derive(Default)]
pub struct MockProfileRepository {
    pub profiles: Mutex<HashMap<String, Profile>>,
    pub exists_calls: AtomicUsize,
    /// When set, `find_by_user_id` fails with this message.
    pub fail_reads: Mutex<Option<String>>,
}

impl MockProfileRepository {
    pub fn with_profile(profile: Profile) -> Self {
        let repo = Self::default();
        repo.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile);
        repo
    }

    pub fn failing(message: &str) -> Self {
        let repo = Self::default();
        *repo.fail_reads.lock().unwrap() = Some(message.to_string());
        repo
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn save(&self, profile: &Profile) -> Result<()> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        if let Some(message) = self.fail_reads.lock().unwrap().clone() {
            return Err(NotekeepError::store(StoreOperation::FetchProfile, message));
        }
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    async fn exists(&self, user_id: &str) -> bool {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles.lock().unwrap().contains_key(user_id)
    }

    async fn update(&self, mut profile: Profile) -> Result<Profile> {
        profile.touch();
        self.save(&profile).await?;
        Ok(profile)
    }
}
