//! Core outcome and pipeline types.
//!
//! This module contains the whole runtime of the crate:
//! - `Outcome` values tagging a payload as success or failure
//! - `Step` functions mapping a value to an outcome
//! - `Transaction` pipelines chaining steps with short-circuit on failure
//!
//! Nothing in here holds global state or performs I/O.

mod error;
mod outcome;
mod step;
mod transaction;

pub use error::StepFailure;
pub use outcome::{failure, success, Outcome};
pub use step::{Step, StepFn};
pub use transaction::{run_once, Transaction};
