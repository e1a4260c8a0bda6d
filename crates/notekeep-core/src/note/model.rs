//! Note domain model.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::document::{Document, string_field};
use crate::error::ValidationError;
use crate::timestamp::now_iso;

/// Maximum title length, in characters.
pub const NOTE_TITLE_MAX_CHARS: usize = 100;

/// Loosely-typed field bag a `Note` is built from.
///
/// Mirrors what a view or a stored document can hand over: every field may be
/// missing, and `tags` is kept as raw JSON so that a non-sequence value can be
/// reported by `Note::validate` instead of failing construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteParams {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A user's note.
///
/// `id` is absent until the store assigns one on first insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Raw `tags` input that was not a sequence of strings.
    #[serde(skip)]
    rejected_tags: Option<Value>,
}

impl Note {
    /// Builds a note from a field bag, applying defaults.
    ///
    /// `content` defaults to empty, `tags` to an empty list and both
    /// timestamps to the current time. An empty `id` counts as no id.
    /// Nothing is validated here.
    pub fn new(params: NoteParams) -> Self {
        let (tags, rejected_tags) = split_tags(params.tags);
        Self {
            id: params.id.filter(|id| !id.is_empty()),
            user_id: params.user_id.unwrap_or_default(),
            title: params.title.unwrap_or_default(),
            content: params.content.unwrap_or_default(),
            tags,
            created_at: params.created_at.unwrap_or_else(now_iso),
            updated_at: params.updated_at.unwrap_or_else(now_iso),
            rejected_tags,
        }
    }

    /// Checks the note's invariants, reporting the first violated rule.
    ///
    /// Order: user id, title presence, title length, tags.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::UserIdRequired);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.title.chars().count() > NOTE_TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong);
        }
        if self.rejected_tags.is_some() {
            return Err(ValidationError::TagsNotSequence);
        }
        Ok(())
    }

    /// Refreshes `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = now_iso();
    }

    /// Converts to the stored document. The `id` is the document key and is omitted.
    pub fn to_store_format(&self) -> Document {
        let value = json!({
            "userId": self.user_id,
            "title": self.title,
            "content": self.content,
            "tags": self.tags,
            "createdAt": self.created_at,
            "updatedAt": self.updated_at,
        });
        match value {
            Value::Object(map) => map,
            _ => Document::new(),
        }
    }

    /// Rebuilds a note from its document key and stored fields.
    pub fn from_store(id: impl Into<String>, document: &Document) -> Self {
        Self::new(NoteParams {
            id: Some(id.into()),
            user_id: string_field(document, "userId"),
            title: string_field(document, "title"),
            content: string_field(document, "content"),
            tags: document.get("tags").cloned(),
            created_at: string_field(document, "createdAt"),
            updated_at: string_field(document, "updatedAt"),
        })
    }
}

/// Splits raw tags into the accepted list and, if unusable, the rejected raw value.
fn split_tags(raw: Option<Value>) -> (Vec<String>, Option<Value>) {
    match raw {
        None | Some(Value::Null) => (Vec::new(), None),
        Some(Value::Array(items)) => {
            let tags: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            match tags {
                Some(tags) => (tags, None),
                None => (Vec::new(), Some(Value::Array(items))),
            }
        }
        Some(other) => (Vec::new(), Some(other)),
    }
}
