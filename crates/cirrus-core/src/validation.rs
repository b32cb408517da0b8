//! City query validation.
//!
//! Pure input checks applied before any search reaches the weather lookup.

use crate::error::CirrusError;

/// Maximum accepted city query length, after trimming.
pub const MAX_CITY_QUERY_LEN: usize = 64;

/// Outcome of validating a raw city query.
///
/// `cleaned` always carries the trimmed input, valid or not, so callers can
/// echo back what was actually checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub cleaned: String,
    pub error: Option<String>,
}

impl ValidationResult {
    fn ok(cleaned: String) -> Self {
        Self {
            valid: true,
            cleaned,
            error: None,
        }
    }

    fn fail(cleaned: String, error: &str) -> Self {
        Self {
            valid: false,
            cleaned,
            error: Some(error.to_string()),
        }
    }

    /// Converts into a `Result`, mapping a failed check to a
    /// `CirrusError::Validation` carrying the user-facing message.
    pub fn into_result(self) -> crate::error::Result<String> {
        if self.valid {
            Ok(self.cleaned)
        } else {
            Err(CirrusError::validation(
                self.error
                    .unwrap_or_else(|| "Invalid input.".to_string()),
            ))
        }
    }
}

/// Validates a user-provided city query.
///
/// Rules:
/// - whitespace is trimmed
/// - must be non-empty after trimming
/// - at most 64 characters
/// - only letters (including accented letters), spaces, hyphens,
///   apostrophes, periods, and commas
///
/// On success the trimmed value is returned unchanged; no case
/// normalization is applied. No side effects.
pub fn validate_city_query(value: &str) -> ValidationResult {
    let cleaned = value.trim().to_string();

    if cleaned.is_empty() {
        return ValidationResult::fail(cleaned, "Please enter a city name.");
    }

    if cleaned.chars().count() > MAX_CITY_QUERY_LEN {
        return ValidationResult::fail(cleaned, "City name is too long (max 64 characters).");
    }

    if !cleaned.chars().all(is_allowed_char) {
        return ValidationResult::fail(
            cleaned,
            "Use letters, spaces, hyphens, apostrophes, periods, or commas only.",
        );
    }

    ValidationResult::ok(cleaned)
}

fn is_allowed_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | '\u{2019}' | '.' | ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_queries_pass_through_trimmed() {
        for raw in [
            "Paris",
            "  Paris  ",
            "New York",
            "Saint-Étienne",
            "L'Aquila",
            "Coeur d\u{2019}Alene",
            "St. Louis",
            "Washington, D.C.",
        ] {
            let result = validate_city_query(raw);
            assert!(result.valid, "expected valid: {raw:?}");
            assert_eq!(result.cleaned, raw.trim());
            assert_eq!(result.error, None);
        }
    }

    #[test]
    fn test_no_case_normalization() {
        let result = validate_city_query("pArIs");
        assert!(result.valid);
        assert_eq!(result.cleaned, "pArIs");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        for raw in ["", "   ", "\t\n"] {
            let result = validate_city_query(raw);
            assert!(!result.valid);
            assert_eq!(result.error.as_deref(), Some("Please enter a city name."));
        }
    }

    #[test]
    fn test_too_long() {
        let raw = "a".repeat(65);
        let result = validate_city_query(&raw);
        assert!(!result.valid);
        assert_eq!(
            result.error.as_deref(),
            Some("City name is too long (max 64 characters).")
        );

        // Exactly 64 is still fine.
        assert!(validate_city_query(&"a".repeat(64)).valid);
    }

    #[test]
    fn test_disallowed_characters() {
        for raw in ["Paris1", "Berlin!", "<script>", "Oslo;", "São_Paulo"] {
            let result = validate_city_query(raw);
            assert!(!result.valid, "expected invalid: {raw:?}");
            assert_eq!(
                result.error.as_deref(),
                Some("Use letters, spaces, hyphens, apostrophes, periods, or commas only.")
            );
        }
    }

    #[test]
    fn test_into_result() {
        assert_eq!(
            validate_city_query("Paris").into_result().unwrap(),
            "Paris"
        );
        let err = validate_city_query("").into_result().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please enter a city name.");
    }
}
