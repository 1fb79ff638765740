//! Pipeline steps.
//!
//! A step is one stage of a transaction: a function from a value to an
//! [`Outcome`]. Steps are cheap to clone and can be shared between
//! transactions.

use super::outcome::Outcome;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, debug_span, warn};

/// Type alias for the function a step wraps.
pub type StepFn<V> = Arc<dyn Fn(V) -> Outcome<V> + Send + Sync>;

/// One stage of a transaction.
///
/// Any state a step needs must arrive through the value it is called with
/// or be captured by the closure; the transaction itself keeps none.
///
/// # Example
///
/// ```rust
/// use transact::{failure, success, Step};
///
/// let increment = Step::named("increment", |n: i32| {
///     if n % 2 == 0 {
///         failure(n)
///     } else {
///         success(n + 1)
///     }
/// });
///
/// assert_eq!(increment.name(), Some("increment"));
/// assert_eq!(increment.call(3).value(), Some(&4));
/// assert!(increment.call(4).is_failure());
/// ```
pub struct Step<V> {
    name: Option<String>,
    func: StepFn<V>,
}

impl<V> Step<V> {
    /// Create an anonymous step from a function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(V) -> Outcome<V> + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Create a step with a display name.
    ///
    /// The name is only used for diagnostics (see [`Step::traced`]).
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(V) -> Outcome<V> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run the step on a value.
    pub fn call(&self, value: V) -> Outcome<V> {
        (self.func)(value)
    }

    /// Wrap the step so each call is recorded with `tracing`.
    ///
    /// Calls run inside a `step` span carrying the step name. A success is
    /// logged at debug level and a failure at warn level. Payloads are not
    /// logged.
    pub fn traced(self) -> Self
    where
        V: 'static,
    {
        let label = self.name.clone().unwrap_or_else(|| "anonymous".to_string());
        let inner = self.func;

        Self {
            name: self.name,
            func: Arc::new(move |value| {
                let span = debug_span!("step", name = %label);
                let _enter = span.enter();

                let outcome = inner(value);
                if outcome.is_failure() {
                    warn!(step = %label, "step failed");
                } else {
                    debug!(step = %label, "step succeeded");
                }
                outcome
            }),
        }
    }
}

impl<V, F> From<F> for Step<V>
where
    F: Fn(V) -> Outcome<V> + Send + Sync + 'static,
{
    fn from(func: F) -> Self {
        Step::new(func)
    }
}

impl<V> Clone for Step<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            func: Arc::clone(&self.func),
        }
    }
}

impl<V> fmt::Debug for Step<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::{failure, success};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn halve(n: i32) -> Outcome<i32> {
        if n % 2 == 0 {
            success(n / 2)
        } else {
            failure(n)
        }
    }

    #[test]
    fn call_runs_the_function() {
        let step = Step::new(halve);

        assert_eq!(step.call(8), success(4));
        assert_eq!(step.call(7), failure(7));
    }

    #[test]
    fn anonymous_steps_have_no_name() {
        assert_eq!(Step::new(halve).name(), None);
        assert_eq!(Step::named("halve", halve).name(), Some("halve"));
    }

    #[test]
    fn clones_share_the_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let step = Step::new(move |n: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            success(n)
        });
        let copy = step.clone();

        step.call(1);
        copy.call(2);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn closures_convert_into_steps() {
        let step: Step<i32> = (|n: i32| success(n + 1)).into();

        assert_eq!(step.call(1), success(2));
    }

    #[test]
    fn traced_step_keeps_behavior() {
        let step = Step::named("halve", halve).traced();

        assert_eq!(step.name(), Some("halve"));
        assert_eq!(step.call(10), success(5));
        assert_eq!(step.call(5), failure(5));
    }

    #[test]
    fn debug_shows_name() {
        let step = Step::named("halve", halve);

        assert_eq!(format!("{step:?}"), r#"Step { name: Some("halve") }"#);
    }
}
