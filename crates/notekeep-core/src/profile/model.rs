//! Profile domain model.
//!
//! A profile is keyed by the owner's user id; there is no separate surrogate id.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::document::{Document, string_field};
use crate::error::ValidationError;
use crate::timestamp::now_iso;

/// Maximum name length, in characters.
pub const PROFILE_NAME_MAX_CHARS: usize = 50;

/// The accepted gender values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Fields a caller supplies when saving a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub gender: String,
}

/// Loosely-typed field bag a `Profile` is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileParams {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A user's profile.
///
/// `gender` keeps the raw submitted value so that `validate` can reject
/// anything outside [`Gender`]; use [`Profile::gender`] for the typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub gender: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Profile {
    /// Builds a profile from a field bag. Timestamps default to now.
    pub fn new(params: ProfileParams) -> Self {
        Self {
            user_id: params.user_id.unwrap_or_default(),
            name: params.name.unwrap_or_default(),
            gender: params.gender.unwrap_or_default(),
            created_at: params.created_at.unwrap_or_else(now_iso),
            updated_at: params.updated_at.unwrap_or_else(now_iso),
        }
    }

    /// Checks the profile's invariants, reporting the first violated rule.
    ///
    /// Order: user id, name presence, name length, gender.
    /// The name is never trimmed for storage; trimming only decides presence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::UserIdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.name.chars().count() > PROFILE_NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong);
        }
        if self.gender().is_none() {
            return Err(ValidationError::GenderInvalid);
        }
        Ok(())
    }

    /// The typed gender, or `None` if the stored value is not a known one.
    pub fn gender(&self) -> Option<Gender> {
        self.gender.parse().ok()
    }

    /// Refreshes `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = now_iso();
    }

    /// Converts to the stored document. The user id is the document key and is omitted.
    pub fn to_store_format(&self) -> Document {
        let value = json!({
            "name": self.name,
            "gender": self.gender,
            "createdAt": self.created_at,
            "updatedAt": self.updated_at,
        });
        match value {
            Value::Object(map) => map,
            _ => Document::new(),
        }
    }

    /// Rebuilds a profile from its document key (the user id) and stored fields.
    pub fn from_store(user_id: impl Into<String>, document: &Document) -> Self {
        Self::new(ProfileParams {
            user_id: Some(user_id.into()),
            name: string_field(document, "name"),
            gender: string_field(document, "gender"),
            created_at: string_field(document, "createdAt"),
            updated_at: string_field(document, "updatedAt"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn profile(user_id: &str, name: &str, gender: &str) -> Profile {
        Profile::new(ProfileParams {
            user_id: Some(user_id.to_string()),
            name: Some(name.to_string()),
            gender: Some(gender.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_valid_profile_for_each_gender() {
        for gender in Gender::iter() {
            let p = profile("user123", "山田太郎", gender.as_ref());
            assert_eq!(p.validate(), Ok(()));
            assert_eq!(p.gender(), Some(gender));
        }
    }

    #[test]
    fn test_validate_rules_in_order() {
        assert_eq!(
            profile("", "", "unknown").validate(),
            Err(ValidationError::UserIdRequired)
        );
        assert_eq!(
            profile("user123", " ", "unknown").validate(),
            Err(ValidationError::NameRequired)
        );
        assert_eq!(
            profile("user123", &"a".repeat(51), "unknown").validate(),
            Err(ValidationError::NameTooLong)
        );
        assert_eq!(
            profile("user123", &"a".repeat(50), "unknown").validate(),
            Err(ValidationError::GenderInvalid)
        );
        assert_eq!(
            profile("user123", "Taro", "").validate(),
            Err(ValidationError::GenderInvalid)
        );
        assert_eq!(
            profile("user123", "Taro", "Male").validate(),
            Err(ValidationError::GenderInvalid)
        );
    }

    #[test]
    fn test_name_is_not_trimmed() {
        let p = profile("user123", "  Taro  ", "other");
        assert_eq!(p.validate(), Ok(()));
        assert_eq!(p.to_store_format()["name"], json!("  Taro  "));
    }

    #[test]
    fn test_to_store_format_omits_user_id() {
        let p = Profile::new(ProfileParams {
            user_id: Some("user123".to_string()),
            name: Some("Taro".to_string()),
            gender: Some("male".to_string()),
            created_at: Some("2024-01-01T00:00:00.000Z".to_string()),
            updated_at: Some("2024-01-02T00:00:00.000Z".to_string()),
        });

        let document = p.to_store_format();

        assert!(!document.contains_key("userId"));
        assert_eq!(
            Value::Object(document.clone()),
            json!({
                "name": "Taro",
                "gender": "male",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-02T00:00:00.000Z",
            })
        );

        let restored = Profile::from_store("user123", &document);
        assert_eq!(restored, p);
        assert_eq!(restored.to_store_format(), document);
    }
}
