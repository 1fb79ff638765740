//! Sequential, short-circuiting step pipelines.

use super::outcome::Outcome;
use super::step::Step;

/// An ordered sequence of steps run over a threaded value.
///
/// Invoking a transaction feeds the input to the first step, the wrapped
/// value of each successful outcome to the next step, and stops at the
/// first failure. Invocation only borrows the transaction, so the same
/// transaction can be invoked any number of times.
///
/// # Example
///
/// ```rust
/// use transact::{failure, success, Transaction};
///
/// let mut pipeline = Transaction::<i32>::new();
/// pipeline
///     .add_step(|n: i32| success(n * 2))
///     .add_step(|n: i32| if n > 10 { failure(n) } else { success(n + 1) });
///
/// assert_eq!(pipeline.invoke(3).value(), Some(&7));
/// assert_eq!(pipeline.invoke(6).error_value(), Some(&12));
/// ```
pub struct Transaction<V> {
    steps: Vec<Step<V>>,
}

impl<V> Transaction<V> {
    /// Create an empty transaction. Invoking it returns its input as a
    /// success.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Create a transaction from an initial list of steps, kept in the
    /// given order.
    pub fn with_steps<I>(steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Step<V>>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a step to the end of the transaction.
    ///
    /// Returns the same transaction for chaining.
    pub fn add_step(&mut self, step: impl Into<Step<V>>) -> &mut Self {
        self.steps.push(step.into());
        self
    }

    /// Consuming variant of [`Transaction::add_step`].
    pub fn step(mut self, step: impl Into<Step<V>>) -> Self {
        self.add_step(step);
        self
    }

    pub fn steps(&self) -> &[Step<V>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, starting from `value`.
    ///
    /// Returns the first failure verbatim, without running the remaining
    /// steps, or the last step's outcome when all of them succeed. An
    /// empty transaction returns `Success(value)`.
    pub fn invoke(&self, value: V) -> Outcome<V> {
        let mut outcome = Outcome::Success(value);

        for step in &self.steps {
            outcome = step.call(outcome.into_wrapped());

            if outcome.is_failure() {
                return outcome;
            }
        }

        outcome
    }

    /// Turn the whole transaction into a single step, so it can be nested
    /// inside another transaction.
    pub fn into_step(self) -> Step<V>
    where
        V: 'static,
    {
        Step::new(move |value| self.invoke(value))
    }
}

/// Build a throwaway transaction from `steps` and invoke it on `value`.
///
/// # Example
///
/// ```rust
/// use transact::{run_once, success, Step};
///
/// let outcome = run_once(
///     String::from("a"),
///     [
///         Step::new(|s: String| success(s + "b")),
///         Step::new(|s: String| success(s + "c")),
///     ],
/// );
///
/// assert_eq!(outcome.into_value().as_deref(), Some("abc"));
/// ```
pub fn run_once<V, I>(value: V, steps: I) -> Outcome<V>
where
    I: IntoIterator,
    I::Item: Into<Step<V>>,
{
    Transaction::with_steps(steps).invoke(value)
}

impl<V> Default for Transaction<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Transaction<V> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<V> std::fmt::Debug for Transaction<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction")
            .field("steps", &self.steps)
            .finish()
    }
}

impl<V> FromIterator<Step<V>> for Transaction<V> {
    fn from_iter<I: IntoIterator<Item = Step<V>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<V> Extend<Step<V>> for Transaction<V> {
    fn extend<I: IntoIterator<Item = Step<V>>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}
