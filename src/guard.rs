//! Validating retry wrapper.
//!
//! A [`Guard`] holds the immutable configuration (input validator, result
//! validator, retry budget, optional fallback). Wrapping a function with it
//! yields a [`Guarded`] callable that:
//!
//! 1. Rejects arguments failing input validation without invoking the function
//! 2. Invokes the function and returns the first result passing validation
//! 3. Re-invokes with the original arguments while the retry budget lasts
//! 4. On exhaustion returns the fallback's value, or the most recent failure
//!
//! All per-call state (remaining retries, failure record) lives on the stack
//! of a single call, so one `Guarded` can be reused and shared freely.

use std::fmt;

use log::{debug, info, warn};

use crate::error::GuardError;
use crate::validation::Validator;

/// How many additional invocations are allowed after the first failed
/// result validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryBudget {
    /// At most this many retries; `Limited(n)` means `n + 1` invocations in total
    Limited(u32),
    /// Retry until a result validates.
    ///
    /// There is no other exit: a function that never produces a valid result
    /// keeps the call running until the process is stopped.
    Unbounded,
}

impl RetryBudget {
    /// Negative values select unbounded retry
    pub fn from_signed(n: i64) -> Self {
        if n < 0 {
            Self::Unbounded
        } else {
            Self::Limited(u32::try_from(n).unwrap_or(u32::MAX))
        }
    }

    /// Inverse of [`RetryBudget::from_signed`]; unbounded maps to -1
    pub fn as_signed(&self) -> i64 {
        match self {
            Self::Limited(n) => i64::from(*n),
            Self::Unbounded => -1,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::Limited(1)
    }
}

impl From<i64> for RetryBudget {
    fn from(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl From<i32> for RetryBudget {
    fn from(n: i32) -> Self {
        Self::from_signed(i64::from(n))
    }
}

impl From<u32> for RetryBudget {
    fn from(n: u32) -> Self {
        Self::Limited(n)
    }
}

impl fmt::Display for RetryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{} retries", n),
            Self::Unbounded => write!(f, "unbounded retries"),
        }
    }
}

/// One failed result validation within a call
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<R> {
    /// 1-based invocation number that produced the value
    pub attempt: u64,
    /// The rejected result
    pub value: R,
}

impl<R> Failure<R> {
    pub fn new(attempt: u64, value: R) -> Self {
        Self { attempt, value }
    }
}

impl<R: fmt::Debug> Failure<R> {
    /// Human-readable description of the failure
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl<R: fmt::Debug> fmt::Display for Failure<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result {:?} of attempt {} is invalid", self.value, self.attempt)
    }
}

/// What happened during one guarded call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallReport {
    /// Times the wrapped function was invoked
    pub invocations: u64,
    /// Times its result failed validation
    pub failures: u64,
    /// Whether the fallback supplied the returned value
    pub used_fallback: bool,
}

type Fallback<R> = Box<dyn Fn() -> R + Send + Sync>;

/// Immutable wrapper configuration
pub struct Guard<A, R> {
    input_validation: Box<dyn Validator<A>>,
    result_validation: Box<dyn Validator<R>>,
    retry_budget: RetryBudget,
    fallback: Option<Fallback<R>>,
}

impl<A, R> Guard<A, R> {
    /// Create a guard with the default budget of one retry and no fallback
    pub fn new<I, V>(input_validation: I, result_validation: V) -> Self
    where
        I: Validator<A> + 'static,
        V: Validator<R> + 'static,
    {
        Self {
            input_validation: Box::new(input_validation),
            result_validation: Box::new(result_validation),
            retry_budget: RetryBudget::default(),
            fallback: None,
        }
    }

    /// Set the retry budget (builder pattern); negative integers mean unbounded
    pub fn retry_budget(mut self, budget: impl Into<RetryBudget>) -> Self {
        self.retry_budget = budget.into();
        self
    }

    /// Produce this value instead of failing once the budget is exhausted
    pub fn fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn budget(&self) -> RetryBudget {
        self.retry_budget
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn input_description(&self) -> &str {
        self.input_validation.description()
    }

    pub fn result_description(&self) -> &str {
        self.result_validation.description()
    }

    /// Wrap `func`, producing a callable with the same argument bundle and result
    pub fn wrap<F>(self, func: F) -> Guarded<A, R, F>
    where
        F: Fn(&A) -> R,
    {
        Guarded { guard: self, func }
    }
}

impl<A, R> fmt::Debug for Guard<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("input_validation", &self.input_validation.description())
            .field("result_validation", &self.result_validation.description())
            .field("retry_budget", &self.retry_budget)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// A function wrapped by a [`Guard`]
pub struct Guarded<A, R, F> {
    guard: Guard<A, R>,
    func: F,
}

impl<A, R, F> Guarded<A, R, F>
where
    F: Fn(&A) -> R,
{
    /// Call the wrapped function under the guard's policy
    pub fn call(&self, args: A) -> Result<R, GuardError<A, R>> {
        self.call_with_report(args).0
    }

    /// Like [`Guarded::call`], also reporting what the call did
    pub fn call_with_report(&self, args: A) -> (Result<R, GuardError<A, R>>, CallReport) {
        let guard = &self.guard;
        let mut report = CallReport::default();

        if !guard.input_validation.validate(&args) {
            warn!("Input parameters rejected by {}", guard.input_validation.description());
            return (Err(GuardError::InputInvalid(args)), report);
        }

        // Only the most recent failure is kept; unbounded mode runs in constant memory.
        let mut remaining = guard.retry_budget;
        let last_failure = loop {
            report.invocations += 1;
            debug!("Invocation {}", report.invocations);

            let result = (self.func)(&args);
            if guard.result_validation.validate(&result) {
                return (Ok(result), report);
            }

            let failure = Failure::new(report.invocations, result);
            report.failures += 1;
            warn!(
                "Result of attempt {} rejected by {}",
                failure.attempt,
                guard.result_validation.description()
            );

            match remaining {
                RetryBudget::Limited(0) => break failure,
                RetryBudget::Limited(n) => remaining = RetryBudget::Limited(n - 1),
                RetryBudget::Unbounded => {}
            }
            info!(
                "Calling again after failed result validation, {} left",
                remaining
            );
        };

        if let Some(fallback) = &guard.fallback {
            info!(
                "Retry budget exhausted after {} invocations, using fallback",
                report.invocations
            );
            report.used_fallback = true;
            return (Ok(fallback()), report);
        }

        (Err(GuardError::ResultInvalid(last_failure)), report)
    }
}

impl<A, R, F> Guarded<A, R, F> {
    /// The configuration this function is wrapped with
    pub fn guard(&self) -> &Guard<A, R> {
        &self.guard
    }

    /// Unwrap, returning the original function
    pub fn into_inner(self) -> F {
        self.func
    }
}
