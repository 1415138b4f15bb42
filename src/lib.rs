//! Vetted - a validating retry wrapper
//!
//! Wrap any function with an input validator, a result validator, a retry
//! budget and an optional fallback. Inputs failing validation never reach the
//! function; invalid results are retried until the budget runs out.

pub mod args;
pub mod error;
pub mod guard;
pub mod names;
pub mod validation;

pub use args::CallArgs;
pub use error::{GuardError, Result, VettedError};
pub use guard::{CallReport, Failure, Guard, Guarded, RetryBudget};
