// Validation System - Traits
// Core predicate interface injected into a guard

/// Trait for predicates that accept or reject a value.
///
/// Any `Fn(&T) -> bool + Send + Sync` closure is a validator; concrete
/// validators are plain structs implementing this trait.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Return true when `value` is acceptable
    fn validate(&self, value: &T) -> bool;

    /// Get a description of what this validator checks
    fn description(&self) -> &str {
        "validator"
    }
}

impl<T, F> Validator<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn validate(&self, value: &T) -> bool {
        self(value)
    }
}

/// A closure validator carrying a description for diagnostics
pub struct Described<F> {
    predicate: F,
    description: String,
}

impl<F> Described<F> {
    pub fn new(description: impl Into<String>, predicate: F) -> Self {
        Self {
            predicate,
            description: description.into(),
        }
    }
}

impl<T, F> Validator<T> for Described<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    fn validate(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Accepts everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<T: ?Sized> Validator<T> for AcceptAll {
    fn validate(&self, _value: &T) -> bool {
        true
    }

    fn description(&self) -> &str {
        "accept all"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock validator for testing the trait
    struct MockValidator {
        should_pass: bool,
    }

    impl Validator<str> for MockValidator {
        fn validate(&self, _value: &str) -> bool {
            self.should_pass
        }

        fn description(&self) -> &str {
            "mock validator"
        }
    }

    #[test]
    fn test_validator_trait_pass() {
        let validator = MockValidator { should_pass: true };
        assert!(validator.validate("anything"));
    }

    #[test]
    fn test_validator_trait_fail() {
        let validator = MockValidator { should_pass: false };
        assert!(!validator.validate("anything"));
    }

    #[test]
    fn test_validator_description() {
        let validator = MockValidator { should_pass: true };
        assert_eq!(validator.description(), "mock validator");
    }

    #[test]
    fn test_closure_is_validator() {
        let even = |n: &i32| n % 2 == 0;
        assert!(even.validate(&4));
        assert!(!even.validate(&3));
        assert_eq!(Validator::<i32>::description(&even), "validator");
    }

    #[test]
    fn test_described_validator() {
        let positive = Described::new("positive number", |n: &i64| *n > 0);
        assert!(positive.validate(&1));
        assert!(!positive.validate(&-1));
        assert_eq!(Validator::<i64>::description(&positive), "positive number");
    }

    #[test]
    fn test_accept_all() {
        assert!(Validator::<str>::validate(&AcceptAll, ""));
        assert!(AcceptAll.validate(&Some(3)));
    }
}
