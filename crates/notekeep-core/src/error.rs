//! Error types for the Notekeep application.
//!
//! The `Display` text of every user-facing variant is surfaced to the view
//! layer unchanged, so message wording is part of the public contract.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

/// Entity invariant violations.
///
/// Raised synchronously by `Note::validate` and `Profile::validate`, always
/// for the first rule that fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("ユーザーIDは必須です")]
    UserIdRequired,

    #[error("タイトルは必須です")]
    TitleRequired,

    #[error("タイトルは100文字以内で入力してください")]
    TitleTooLong,

    #[error("タグは配列である必要があります")]
    TagsNotSequence,

    #[error("名前は必須です")]
    NameRequired,

    #[error("名前は50文字以内で入力してください")]
    NameTooLong,

    #[error("性別を選択してください")]
    GenderInvalid,
}

/// The store operation a wrapped `Store` error came from.
///
/// Its `Display` form is the human-readable prefix placed in front of the
/// driver's own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum StoreOperation {
    #[strum(to_string = "ノートの保存に失敗しました")]
    SaveNote,
    #[strum(to_string = "ノートの取得に失敗しました")]
    FetchNote,
    #[strum(to_string = "ノート一覧の取得に失敗しました")]
    ListNotes,
    #[strum(to_string = "プロフィールの保存に失敗しました")]
    SaveProfile,
    #[strum(to_string = "プロフィールの取得に失敗しました")]
    FetchProfile,
}

/// A shared error type for the entire Notekeep application.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotekeepError {
    /// Entity invariant violated
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A read use case was called without a user id
    #[error("ユーザーIDが指定されていません")]
    UserIdNotSpecified,

    /// Underlying document store failure, wrapped with an operation prefix
    #[error("{operation}: {message}")]
    Store {
        operation: StoreOperation,
        message: String,
    },

    /// An action needs a signed-in identity and there is none
    #[error("ユーザーが認証されていません")]
    Unauthenticated,

    /// Identity provider rejected a sign-in, sign-up or reset request
    #[error("{0}")]
    Auth(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Navigation target does not exist in the route table
    #[error("No route matches path '{path}'")]
    UnknownRoute { path: String },

    /// Guard redirects did not settle
    #[error("Navigation to '{path}' exceeded {hops} redirects")]
    RedirectLoop { path: String, hops: usize },
}

impl NotekeepError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Wraps a driver failure for the given operation.
    pub fn store(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::Store {
            operation,
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a wrapped store error
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}

impl From<std::io::Error> for NotekeepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for NotekeepError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A type alias for `Result<T, NotekeepError>`.
pub type Result<T> = std::result::Result<T, NotekeepError>;
