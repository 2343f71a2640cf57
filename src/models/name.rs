//! Contact name field

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name a contact is stored and looked up under
///
/// Stored verbatim. Lookups compare names with ASCII case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a name from any string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this name matches another (case-insensitive)
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_verbatim() {
        let name = Name::new("  John Smith ");
        assert_eq!(name.as_str(), "  John Smith ");
    }

    #[test]
    fn test_name_matching() {
        let name = Name::new("Alice");
        assert!(name.matches("alice"));
        assert!(name.matches("ALICE"));
        assert!(!name.matches("Alicia"));
    }

    #[test]
    fn test_name_serializes_as_string() {
        let json = serde_json::to_string(&Name::new("Bob")).unwrap();
        assert_eq!(json, "\"Bob\"");
    }
}
