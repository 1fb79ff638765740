//! Macros for ergonomic transaction construction.

/// Build a [`Transaction`](crate::Transaction) from a list of steps.
///
/// Each entry may be a [`Step`](crate::Step) or any closure or function
/// that converts into one. Steps keep the order they are listed in.
///
/// # Example
///
/// ```
/// use transact::{success, transaction, Step};
///
/// let pipeline = transaction![
///     |n: i32| success(n + 1),
///     Step::named("double", |n: i32| success(n * 2)),
/// ];
///
/// assert_eq!(pipeline.len(), 2);
/// assert_eq!(pipeline.invoke(1), success(4));
/// ```
#[macro_export]
macro_rules! transaction {
    () => {
        $crate::Transaction::new()
    };

    ($($step:expr),+ $(,)?) => {{
        let mut transaction = $crate::Transaction::new();
        $(
            transaction.add_step($step);
        )+
        transaction
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{failure, success, Step, Transaction};

    #[test]
    fn macro_builds_empty_transaction() {
        let pipeline: Transaction<i32> = transaction![];

        assert!(pipeline.is_empty());
        assert_eq!(pipeline.invoke(9), success(9));
    }

    #[test]
    fn macro_keeps_step_order() {
        let pipeline = transaction![
            Step::named("append a", |s: String| success(s + "a")),
            |s: String| success(s + "b"),
            Step::named("append c", |s: String| success(s + "c")),
        ];

        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.steps()[0].name(), Some("append a"));
        assert_eq!(pipeline.steps()[1].name(), None);
        assert_eq!(pipeline.invoke(String::new()), success(String::from("abc")));
    }

    #[test]
    fn macro_pipeline_short_circuits() {
        let pipeline = transaction![
            |n: i32| success(n + 1),
            |n: i32| failure(n * 100),
            |n: i32| success(n + 1),
        ];

        assert_eq!(pipeline.invoke(1), failure(200));
    }
}
