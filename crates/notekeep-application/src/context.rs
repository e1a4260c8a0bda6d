//! Explicit shared UI state.
//!
//! One `AppContext` is created at startup and shared by `Arc` between the
//! navigation guard and the session services. Every field is an
//! [`Observable`] so a view layer can subscribe to changes.

use notekeep_core::profile::Profile;
use tokio::sync::watch;

/// A value with change notification, backed by a `watch` channel.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Stores `value`, notifying subscribers only when it differs.
    pub fn set(&self, value: T) {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Process-wide view state.
#[derive(Debug, Default)]
pub struct AppContext {
    /// Global loading indicator driven by navigation.
    pub loading: Observable<bool>,
    pub profile: Observable<Option<Profile>>,
    pub profile_loading: Observable<bool>,
    pub profile_error: Observable<Option<String>>,
    pub auth_loading: Observable<bool>,
    pub auth_error: Observable<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything known about the signed-in user's profile.
    pub fn reset_profile_state(&self) {
        self.profile.set(None);
        self.profile_loading.set(false);
        self.profile_error.set(None);
    }
}
