//! Dynamic argument bundles
//!
//! A guarded function is generic over its argument type, so tuples and
//! structs forward as-is. `CallArgs` is for callers that need an open-ended
//! shape: ordered positional values plus ordered named values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, VettedError};

/// Positional and named arguments forwarded unchanged to a guarded function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub named: Vec<(String, Value)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument (builder pattern)
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument, replacing an earlier one with the same name
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.named.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.named.push((name, value)),
        }
        self
    }

    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Parse a `name=value` pair; the value is read as JSON when it parses,
    /// otherwise kept as a string
    pub fn parse_kwarg(text: &str) -> Result<(String, Value)> {
        let (name, raw) = text
            .split_once('=')
            .ok_or_else(|| VettedError::InvalidArgument(format!("missing '=' in {}", text)))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(VettedError::InvalidArgument(format!("empty name in {}", text)));
        }
        Ok((name.to_string(), parse_value(raw)))
    }
}

/// Read a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

impl fmt::Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positional: Vec<String> = self.positional.iter().map(Value::to_string).collect();
        let named: Vec<String> = self
            .named
            .iter()
            .map(|(k, v)| format!("{:?}: {}", k, v))
            .collect();
        write!(f, "([{}], {{{}}})", positional.join(", "), named.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let args = CallArgs::new().arg("Привет").kwarg("x", 2);
        assert_eq!(args.positional(0), Some(&json!("Привет")));
        assert_eq!(args.named("x"), Some(&json!(2)));
        assert_eq!(args.named("y"), None);
        assert_eq!(args.len(), 2);
        assert!(!args.is_empty());
    }

    #[test]
    fn test_kwarg_replaces_existing() {
        let args = CallArgs::new().kwarg("x", 1).kwarg("y", 2).kwarg("x", 3);
        assert_eq!(args.named, vec![("x".to_string(), json!(3)), ("y".to_string(), json!(2))]);
    }

    #[test]
    fn test_display() {
        let args = CallArgs::new().arg("hi").arg(1).kwarg("x", 2);
        assert_eq!(args.to_string(), r#"(["hi", 1], {"x": 2})"#);
        assert_eq!(CallArgs::new().to_string(), "([], {})");
    }

    #[test]
    fn test_parse_kwarg() {
        assert_eq!(CallArgs::parse_kwarg("x=2").unwrap(), ("x".to_string(), json!(2)));
        assert_eq!(
            CallArgs::parse_kwarg("city=Milan").unwrap(),
            ("city".to_string(), json!("Milan"))
        );
        assert_eq!(
            CallArgs::parse_kwarg("flags=[true,false]").unwrap(),
            ("flags".to_string(), json!([true, false]))
        );
    }

    #[test]
    fn test_parse_kwarg_errors() {
        assert!(matches!(
            CallArgs::parse_kwarg("x2"),
            Err(VettedError::InvalidArgument(_))
        ));
        assert!(matches!(
            CallArgs::parse_kwarg("=2"),
            Err(VettedError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("12"), json!(12));
        assert_eq!(parse_value("hello"), json!("hello"));
        assert_eq!(parse_value(r#""quoted""#), json!("quoted"));
    }
}
