//! Validated name and identity newtypes
//!
//! These newtypes ensure values are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a character name
const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for externally issued identifiers (player, session)
const MAX_EXTERNAL_ID_LENGTH: usize = 128;

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 100 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

// ============================================================================
// External identifiers
// ============================================================================

macro_rules! define_external_id {
    ($name:ident, $label:literal) => {
        #[doc = concat!("A validated ", $label, " issued outside this system (non-empty, trimmed)")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!($label, " cannot be empty")));
                }
                if trimmed.len() > MAX_EXTERNAL_ID_LENGTH {
                    return Err(DomainError::invalid_id(format!(
                        "{} cannot exceed {} characters",
                        $label, MAX_EXTERNAL_ID_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_external_id!(PlayerId, "Player id");
define_external_id!(SessionId, "Session id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_name_is_trimmed() {
        let name = CharacterName::new("  Thorin  ").unwrap();
        assert_eq!(name.as_str(), "Thorin");
    }

    #[test]
    fn character_name_rejects_blank() {
        assert!(matches!(
            CharacterName::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn character_name_rejects_overlong() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(CharacterName::new(long).is_err());
        assert!(CharacterName::new("a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn character_name_deserialization_validates() {
        let ok: Result<CharacterName, _> = serde_json::from_str("\"Lia\"");
        assert!(ok.is_ok());
        let bad: Result<CharacterName, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }

    #[test]
    fn player_id_rejects_empty() {
        assert!(matches!(PlayerId::new(""), Err(DomainError::InvalidId(_))));
        assert_eq!(PlayerId::new(" player-1 ").unwrap().as_str(), "player-1");
    }

    #[test]
    fn session_id_displays_raw_value() {
        let session = SessionId::new("table-42").unwrap();
        assert_eq!(session.to_string(), "table-42");
    }
}
