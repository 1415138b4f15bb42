// Validation System - Locale Validator
// Checks that a record is exactly `{"locale": <supported tag>}`

use crate::error::Result;
use crate::validation::traits::Validator;
use serde_json::Value;

/// Locale tags the name generator has tables for
pub const SUPPORTED_LOCALES: &[&str] = &[
    "en", "en_US", "en_GB", "de_DE", "fr_FR", "es_ES", "it_IT", "ru_RU",
];

/// The only field a locale record may carry
pub const LOCALE_FIELD: &str = "locale";

/// Validator for locale records.
///
/// A record passes when it is a JSON object with a single `locale` field
/// holding one of the supported tags. Missing fields, extra fields and
/// non-string tags are all rejected.
#[derive(Debug, Clone)]
pub struct LocaleValidator {
    supported: Vec<String>,
}

impl LocaleValidator {
    /// Create a validator accepting the built-in locale set
    pub fn new() -> Self {
        Self::with_locales(SUPPORTED_LOCALES.iter().copied())
    }

    /// Create a validator accepting a custom locale set
    pub fn with_locales<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: locales.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.supported.iter().any(|s| s == tag)
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }
}

impl Default for LocaleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<Value> for LocaleValidator {
    fn validate(&self, record: &Value) -> bool {
        let Some(fields) = record.as_object() else {
            return false;
        };
        if fields.len() != 1 {
            return false;
        }
        fields
            .get(LOCALE_FIELD)
            .and_then(Value::as_str)
            .is_some_and(|tag| self.is_supported(tag))
    }

    fn description(&self) -> &str {
        "locale schema"
    }
}

/// Check a record against the built-in locale set
pub fn validate_locale(record: &Value) -> bool {
    LocaleValidator::new().validate(record)
}

/// Build a locale record for `tag`
pub fn locale_record(tag: &str) -> Value {
    serde_json::json!({ LOCALE_FIELD: tag })
}

/// Parse a locale record from JSON text
pub fn parse_record(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Read the locale tag out of a record, if present
pub fn record_locale(record: &Value) -> Option<&str> {
    record.get(LOCALE_FIELD).and_then(Value::as_str)
}
