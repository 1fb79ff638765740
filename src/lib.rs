//! Transact: outcome values and short-circuiting step pipelines
//!
//! Transact models multi-step operations as explicit data flow instead of
//! early returns or panics. Each step takes a value and returns an
//! [`Outcome`]; a [`Transaction`] threads the value through its steps and
//! stops at the first failure.
//!
//! # Core Concepts
//!
//! - **Outcome**: `Success(value)` or `Failure(value)`, immutable once built
//! - **Step**: a shareable function from a value to an outcome
//! - **Transaction**: an ordered list of steps run with short-circuit on failure
//!
//! # Example
//!
//! ```rust
//! use transact::{failure, run_once, success, transaction};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Value {
//!     Int(i64),
//!     Error(String),
//! }
//!
//! let increment = |value: Value| match value {
//!     Value::Int(n) if n % 2 == 0 => failure(Value::Error("i can't even".into())),
//!     Value::Int(n) => success(Value::Int(n + 1)),
//!     other => failure(other),
//! };
//!
//! let pipeline = transaction![increment];
//! assert_eq!(pipeline.invoke(Value::Int(1)), success(Value::Int(2)));
//!
//! let outcome = run_once(Value::Int(120), [increment]);
//! assert_eq!(outcome.error_value(), Some(&Value::Error("i can't even".into())));
//! ```

pub mod core;
mod macros;

// Re-export commonly used types
pub use crate::core::{failure, run_once, success, Outcome, Step, StepFailure, Transaction};
