//! Guard state machine values.

use serde::{Deserialize, Serialize};

/// Where the navigation guard is within one transition.
///
/// `Idle` only appears before the first navigation; afterwards the guard rests
/// in the terminal state of the last transition (`Allowed` or `Redirecting`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GuardState {
    #[default]
    Idle,
    CheckingAuth {
        target: String,
    },
    CheckingProfile {
        target: String,
        user_id: String,
    },
    Redirecting {
        from: String,
        to: String,
    },
    Allowed {
        target: String,
    },
}

impl GuardState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuardState::Redirecting { .. } | GuardState::Allowed { .. })
    }
}

/// Outcome of a single guarded transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationDecision {
    Allow,
    Redirect(String),
}
