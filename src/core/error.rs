//! Error type for failed outcomes crossing into `Result`-based code.

use thiserror::Error;

/// A failed outcome converted into a std error.
///
/// Carries the failing step's payload exactly as the step produced it.
#[derive(Debug, Error)]
#[error("transaction step failed: {payload:?}")]
pub struct StepFailure<V> {
    payload: V,
}

impl<V> StepFailure<V> {
    pub fn new(payload: V) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &V {
        &self.payload
    }

    pub fn into_payload(self) -> V {
        self.payload
    }
}
