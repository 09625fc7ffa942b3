//! Shared types used across the application.

use crate::common::error::LookupError;

/// A parsed `Name-Realm` lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub character_name: String,
    /// Lowercased realm slug; hyphens after the first one are kept as-is.
    pub realm: String,
}

impl LookupRequest {
    /// Parse raw modal input of the form `CharacterName-ServerName`.
    ///
    /// Splits on the first hyphen only, so `Thrall-Argent-Dawn` yields the
    /// realm `argent-dawn`.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let (name, realm) = raw
            .trim()
            .split_once('-')
            .ok_or(LookupError::InvalidFormat)?;

        Ok(Self {
            character_name: name.trim().to_string(),
            realm: realm.trim().to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_realm() {
        let request = LookupRequest::parse("Thrall-Stormrage").unwrap();
        assert_eq!(request.character_name, "Thrall");
        assert_eq!(request.realm, "stormrage");
    }

    #[test]
    fn test_parse_splits_on_first_hyphen_only() {
        let request = LookupRequest::parse("  Jaina - Argent-Dawn ").unwrap();
        assert_eq!(request.character_name, "Jaina");
        assert_eq!(request.realm, "argent-dawn");
    }

    #[test]
    fn test_parse_keeps_spaces_in_realm() {
        let request = LookupRequest::parse("Anduin-Twisting Nether").unwrap();
        assert_eq!(request.realm, "twisting nether");
    }

    #[test]
    fn test_parse_without_hyphen_fails() {
        assert_eq!(
            LookupRequest::parse("ThrallStormrage"),
            Err(LookupError::InvalidFormat)
        );
        assert_eq!(LookupRequest::parse("Thrall Stormrage"), Err(LookupError::InvalidFormat));
    }
}
