//! Free-text place name value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A free-text place name such as `"Santiago, Chile"`
///
/// Not unique and never persisted. The only validation is that the trimmed
/// text is non-empty; encoding for URLs is left to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceName(String);

impl PlaceName {
    /// Create a place name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPlaceName` if nothing remains after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyPlaceName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlaceName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceName> for String {
    fn from(name: PlaceName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = PlaceName::new("  Mendoza, Argentina \n").unwrap();
        assert_eq!(name.as_str(), "Mendoza, Argentina");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(PlaceName::new(""), Err(DomainError::EmptyPlaceName));
        assert_eq!(PlaceName::new("   "), Err(DomainError::EmptyPlaceName));
    }

    #[test]
    fn keeps_punctuation_and_unicode() {
        let name = PlaceName::new("Viña del Mar, Valparaíso, Chile").unwrap();
        assert_eq!(name.to_string(), "Viña del Mar, Valparaíso, Chile");
    }

    #[test]
    fn deserialize_rejects_blank() {
        let result: Result<PlaceName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
