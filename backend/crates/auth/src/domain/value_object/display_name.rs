//! Display Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum display name length in characters
const DISPLAY_NAME_MAX_LENGTH: usize = 64;

/// Human-readable name shown alongside the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Display name cannot be empty"));
        }

        let char_count = name.chars().count();
        if char_count > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Display name must be at most {} characters",
                DISPLAY_NAME_MAX_LENGTH
            )));
        }

        // Control characters would corrupt logs and rendered pages
        if name.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request(
                "Display name contains invalid characters",
            ));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_valid() {
        assert!(DisplayName::new("Ada Lovelace").is_ok());
        assert!(DisplayName::new("名前").is_ok());
    }

    #[test]
    fn test_display_name_trimmed() {
        let name = DisplayName::new("  Ada  ").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_display_name_invalid() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("a".repeat(DISPLAY_NAME_MAX_LENGTH + 1)).is_err());
        assert!(DisplayName::new("bad\u{0000}name").is_err());
    }
}
