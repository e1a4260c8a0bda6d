//! Application wiring and the startup gate.

use notekeep_core::config::RootConfig;
use notekeep_core::identity::{AuthState, Authenticator, IdentityProvider};
use notekeep_core::note::NoteRepository;
use notekeep_core::profile::ProfileRepository;
use notekeep_infrastructure::{DocumentNoteRepository, DocumentProfileRepository, DocumentStore};
use std::sync::Arc;

use crate::auth_session::AuthSession;
use crate::context::AppContext;
use crate::navigation_guard::NavigationGuard;
use crate::profile_session::ProfileSession;
use crate::router::Router;
use crate::usecase::{CheckProfileExists, CreateNote, GetProfile, GetUserNotes, SaveProfile};

/// Waits until the identity provider has reported its first state.
///
/// Views must not be mounted before this resolves: until then
/// `current_identity()` cannot distinguish "signed out" from "not known yet".
pub async fn wait_for_initial_auth_state(identity: &dyn IdentityProvider) -> AuthState {
    let mut rx = identity.subscribe();
    let state = match rx.wait_for(AuthState::is_resolved).await {
        Ok(state) => state.clone(),
        // The provider went away without ever resolving.
        Err(_) => AuthState::SignedOut,
    };
    tracing::info!("[Bootstrap] Initial auth state: {:?}", state);
    state
}

/// Every service the view layer talks to, built once at startup.
pub struct AppServices {
    pub context: Arc<AppContext>,
    pub identity: Arc<dyn IdentityProvider>,
    pub create_note: CreateNote,
    pub get_user_notes: GetUserNotes,
    pub save_profile: SaveProfile,
    pub get_profile: GetProfile,
    pub profile_session: ProfileSession,
    pub auth_session: AuthSession,
    pub guard: Arc<NavigationGuard>,
    pub router: Router,
}

impl AppServices {
    /// Wires store-backed repositories over `store` using the collection
    /// names and navigation settings from `config`.
    pub fn new(
        config: &RootConfig,
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let note_repository: Arc<dyn NoteRepository> = Arc::new(
            DocumentNoteRepository::with_collection(
                store.clone(),
                config.storage.notes_collection.clone(),
            ),
        );
        let profile_repository: Arc<dyn ProfileRepository> = Arc::new(
            DocumentProfileRepository::with_collection(
                store,
                config.storage.profiles_collection.clone(),
            ),
        );

        let context = Arc::new(AppContext::new());
        let guard = Arc::new(NavigationGuard::new(
            identity.clone(),
            Arc::new(CheckProfileExists::new(profile_repository.clone())),
            context.clone(),
            &config.navigation,
        ));
        let router = Router::new(guard.clone(), &config.navigation);

        tracing::debug!(
            "[Bootstrap] Services wired (notes: {}, profiles: {})",
            config.storage.notes_collection,
            config.storage.profiles_collection
        );

        Self {
            create_note: CreateNote::new(note_repository.clone()),
            get_user_notes: GetUserNotes::new(note_repository),
            save_profile: SaveProfile::new(profile_repository.clone()),
            get_profile: GetProfile::new(profile_repository.clone()),
            profile_session: ProfileSession::new(
                identity.clone(),
                profile_repository,
                context.clone(),
            ),
            auth_session: AuthSession::new(authenticator, context.clone()),
            context,
            identity,
            guard,
            router,
        }
    }
}
