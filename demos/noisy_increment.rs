//! Noisy Increment
//!
//! This demo runs a small two-step transaction twice in a row by nesting
//! it inside an outer transaction.
//!
//! Key concepts:
//! - Steps pass a closed value type through the pipeline
//! - A transaction can be reused as a step of another transaction
//! - The first failure stops everything and is returned untouched
//! - `Step::traced` logs each step through `tracing`
//!
//! Run with: RUST_LOG=debug cargo run --example noisy_increment -- 121

use anyhow::Context;
use std::fmt;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use transact::{failure, success, transaction, Outcome, Step, Transaction};

#[derive(Clone, Debug, PartialEq)]
enum Value {
    Int(i64),
    Error(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Error(message) => write!(f, "error: {message}"),
        }
    }
}

fn show(value: Value) -> Outcome<Value> {
    info!(%value, "current value");
    success(value)
}

fn increment(value: Value) -> Outcome<Value> {
    match value {
        Value::Int(n) if n % 2 == 0 => failure(Value::Error("i can't even".to_string())),
        Value::Int(n) => success(Value::Int(n + 1)),
        Value::Error(_) => failure(Value::Error("value isn't an integer".to_string())),
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let start: i64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("start value must be an integer")?,
        None => 120,
    };

    let noisy_increment = transaction![
        Step::named("show", show).traced(),
        Step::named("increment", increment).traced(),
    ];

    let outcome = Transaction::with_steps([
        noisy_increment.clone().into_step(),
        noisy_increment.into_step(),
    ])
    .invoke(Value::Int(start));

    if let Some(reason) = outcome.error_value() {
        error!(%reason, "transaction failed");
    }

    let total = outcome.into_result()?;
    println!("Final total: {total}");

    Ok(())
}
