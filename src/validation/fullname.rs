// Validation System - Full Name Validator
// Accepts two or more capitalized word tokens

use crate::error::Result;
use crate::validation::traits::Validator;
use once_cell::sync::Lazy;
use regex::Regex;

/// One uppercase letter followed by lowercase letters, at least two tokens
pub const FULLNAME_PATTERN: &str = r"^\p{Lu}\p{Ll}*(?:\s+\p{Lu}\p{Ll}*)+$";

static FULLNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(FULLNAME_PATTERN).expect("FULLNAME_PATTERN is a valid regex"));

/// Validator for human full names such as "Andy Miller".
///
/// Letter classes are Unicode-aware, so "Алексей Попов" passes while
/// "McDavid", "D'Jardine" and "Paulo-Antonio" do not.
#[derive(Debug, Clone)]
pub struct FullNameValidator {
    pattern: Regex,
}

impl FullNameValidator {
    pub fn new() -> Self {
        Self {
            pattern: FULLNAME_REGEX.clone(),
        }
    }

    /// Validator over a caller-supplied pattern, e.g. a stricter alphabet
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

impl Default for FullNameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for FullNameValidator {
    fn validate(&self, name: &str) -> bool {
        self.is_match(name)
    }

    fn description(&self) -> &str {
        "full name format"
    }
}

impl Validator<String> for FullNameValidator {
    fn validate(&self, name: &String) -> bool {
        self.is_match(name)
    }

    fn description(&self) -> &str {
        "full name format"
    }
}

/// Check a name against the full-name pattern
pub fn check_fullname(name: &str) -> bool {
    FULLNAME_REGEX.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&str] = &[
        "Andy Miller",
        "Andrey Stepanovich Ivanov",
        "John Nicolsen",
        "Jenel Larone",
        "Lionel Messi",
        "Agatha Kristi",
        "Paul Van Deik",
        "Park U Soon",
        "Viktor An",
    ];

    const INVALID: &[&str] = &[
        "Andy",
        "Popov alexey Sergeevich",
        "Connor McDavid",
        "Koko D'Jardine",
        "Enrike Paulo-Antonio",
        "Martin St.Piere",
        "Romero Baptista jn",
    ];

    #[test]
    fn test_valid_fullnames() {
        let validator = FullNameValidator::new();
        for name in VALID {
            assert!(validator.is_match(name), "expected {:?} to pass", name);
        }
    }

    #[test]
    fn test_invalid_fullnames() {
        let validator = FullNameValidator::new();
        for name in INVALID {
            assert!(!validator.is_match(name), "expected {:?} to fail", name);
        }
    }

    #[test]
    fn test_cyrillic_names() {
        let validator = FullNameValidator::new();
        assert!(validator.is_match("Алексей Попов"));
        assert!(!validator.is_match("алексей Попов"));
    }

    #[test]
    fn test_empty_and_whitespace() {
        let validator = FullNameValidator::new();
        assert!(!validator.is_match(""));
        assert!(!validator.is_match("   "));
        assert!(!validator.is_match(" Andy Miller"));
        assert!(!validator.is_match("Andy Miller "));
    }

    #[test]
    fn test_check_fullname() {
        assert!(check_fullname("Andy Miller"));
        assert!(!check_fullname("Andy"));
        for _ in 0..3 {
            assert!(check_fullname("Lionel Messi"));
            assert!(!check_fullname("Connor McDavid"));
        }
    }

    #[test]
    fn test_with_pattern() {
        let ascii = FullNameValidator::with_pattern(r"^[A-Z][a-z]*(?: [A-Z][a-z]*)+$").unwrap();
        assert!(ascii.is_match("Andy Miller"));
        assert!(!ascii.is_match("Алексей Попов"));
    }

    #[test]
    fn test_with_pattern_rejects_bad_regex() {
        let err = FullNameValidator::with_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, crate::error::VettedError::Pattern(_)));
    }

    #[test]
    fn test_validator_impls() {
        let validator = FullNameValidator::new();
        assert!(Validator::<str>::validate(&validator, "Lionel Messi"));
        assert!(Validator::<String>::validate(&validator, &"Lionel Messi".to_string()));
        assert_eq!(Validator::<str>::description(&validator), "full name format");
    }
}
