//! Tagged success/failure values.
//!
//! An [`Outcome`] records how a single operation ended. Both variants carry
//! a payload of the same type, so a failing step can hand back whatever it
//! likes (a diagnostic, the partially updated input, an error value).

use super::error::StepFailure;
use serde::{Deserialize, Serialize};

/// The outcome of one operation: either `Success` or `Failure`, each
/// wrapping a value.
///
/// Outcomes are immutable values. Every accessor is pure and none of them
/// panic; asking a `Failure` for its success value simply yields `None`.
///
/// # Example
///
/// ```rust
/// use transact::{failure, success};
///
/// let ok = success(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&42));
/// assert_eq!(ok.error_value(), None);
///
/// let bad = failure("out of range");
/// assert!(bad.is_failure());
/// assert_eq!(bad.error_value(), Some(&"out of range"));
/// assert_eq!(bad.wrapped(), &"out of range");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<V> {
    /// The operation succeeded
    Success(V),

    /// The operation failed
    Failure(V),
}

/// Wrap a value in a successful outcome.
pub fn success<V>(value: V) -> Outcome<V> {
    Outcome::Success(value)
}

/// Wrap a value in a failed outcome.
pub fn failure<V>(value: V) -> Outcome<V> {
    Outcome::Failure(value)
}

impl<V> Outcome<V> {
    /// The wrapped value, whichever variant holds it.
    pub fn wrapped(&self) -> &V {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }

    /// Consume the outcome and return the wrapped value, whichever variant
    /// holds it.
    pub fn into_wrapped(self) -> V {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The wrapped value if this is a `Success`, otherwise `None`.
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The wrapped value if this is a `Failure`, otherwise `None`.
    pub fn error_value(&self) -> Option<&V> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    /// Owned counterpart of [`Outcome::value`].
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Owned counterpart of [`Outcome::error_value`].
    pub fn into_error_value(self) -> Option<V> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    /// Transform the payload, keeping the success/failure tag.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(value) => Outcome::Failure(f(value)),
        }
    }

    /// Run `f` on the payload of a `Success`. A `Failure` is returned
    /// untouched and `f` is never called.
    pub fn and_then<F>(self, f: F) -> Outcome<V>
    where
        F: FnOnce(V) -> Outcome<V>,
    {
        match self {
            Self::Success(value) => f(value),
            failed @ Self::Failure(_) => failed,
        }
    }

    /// Convert into a std `Result` so callers can propagate a failure with
    /// `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transact::{failure, success, StepFailure};
    ///
    /// assert_eq!(success(3).into_result().ok(), Some(3));
    ///
    /// let err: StepFailure<&str> = failure("boom").into_result().unwrap_err();
    /// assert_eq!(err.into_payload(), "boom");
    /// ```
    pub fn into_result(self) -> Result<V, StepFailure<V>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(payload) => Err(StepFailure::new(payload)),
        }
    }
}

impl<V> From<Outcome<V>> for Result<V, V> {
    fn from(outcome: Outcome<V>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(value) => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reports_success() {
        let outcome = success("turned to gold");

        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&"turned to gold"));
        assert_eq!(outcome.error_value(), None);
    }

    #[test]
    fn failure_reports_failure() {
        let outcome = failure("watnow");

        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.error_value(), Some(&"watnow"));
    }

    #[test]
    fn wrapped_ignores_the_tag() {
        assert_eq!(success(7).wrapped(), &7);
        assert_eq!(failure(7).wrapped(), &7);
        assert_eq!(success(7).into_wrapped(), 7);
        assert_eq!(failure(7).into_wrapped(), 7);
    }

    #[test]
    fn owned_accessors_match_borrowed_ones() {
        assert_eq!(success(1).into_value(), Some(1));
        assert_eq!(success(1).into_error_value(), None);
        assert_eq!(failure(1).into_value(), None);
        assert_eq!(failure(1).into_error_value(), Some(1));
    }

    #[test]
    fn map_keeps_the_tag() {
        assert_eq!(success(2).map(|v| v * 10), success(20));
        assert_eq!(failure(2).map(|v| v * 10), failure(20));
    }

    #[test]
    fn and_then_skips_failures() {
        let mut called = false;
        let outcome = failure(1).and_then(|v| {
            called = true;
            success(v + 1)
        });

        assert_eq!(outcome, failure(1));
        assert!(!called);
        assert_eq!(success(1).and_then(|v| success(v + 1)), success(2));
        assert_eq!(success(1).and_then(failure), failure(1));
    }

    #[test]
    fn converts_into_std_result() {
        let ok: Result<i32, i32> = success(5).into();
        let err: Result<i32, i32> = failure(6).into();

        assert_eq!(ok, Ok(5));
        assert_eq!(err, Err(6));
    }

    #[test]
    fn into_result_wraps_failure_payload() {
        let err = failure(String::from("i can't even"))
            .into_result()
            .unwrap_err();

        assert_eq!(err.payload(), "i can't even");
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcome = failure(String::from("nope"));
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(json, r#"{"Failure":"nope"}"#);
        assert_eq!(outcome, deserialized);
    }
}
