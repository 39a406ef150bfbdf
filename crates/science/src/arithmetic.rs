//! Arithmetic engine: n-ary numeric operations for the calculator tool.
//!
//! Every input is coerced to `f64` before anything else happens. The
//! checks run in a fixed order: empty input, unparsable numbers, unknown
//! operation, then the per-operation arity rules.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tutorlab_core::{ErrorKind, Failure, normalize_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Average,
    Max,
    Min,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Average,
        Operation::Max,
        Operation::Min,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Average => "average",
            Operation::Max => "max",
            Operation::Min => "min",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|op| op.as_str()).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == key)
            .ok_or(ArithmeticError::UnknownOperation(key))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("No numbers provided")]
    EmptyInput,

    #[error("All arguments must be numbers: element {index} is {value}")]
    InvalidNumber { index: usize, value: String },

    #[error("The {operation} operation requires {expected}, got {got}")]
    Arity {
        operation: Operation,
        expected: &'static str,
        got: usize,
    },

    #[error("Division by zero")]
    DivisionByZero { index: usize },

    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("The result of {operation} is not a finite number")]
    NonFinite { operation: Operation },
}

impl From<ArithmeticError> for Failure {
    fn from(err: ArithmeticError) -> Self {
        let message = err.to_string();
        match err {
            ArithmeticError::EmptyInput => Failure::new(ErrorKind::EmptyInput, message),
            ArithmeticError::InvalidNumber { index, value } => {
                Failure::new(ErrorKind::InvalidNumber, message)
                    .with_hint("index", index)
                    .with_hint("value", value)
            }
            ArithmeticError::Arity { got, expected, .. } => Failure::new(ErrorKind::ArityError, message)
                .with_hint("expected", expected)
                .with_hint("received", got),
            ArithmeticError::DivisionByZero { index } => {
                Failure::new(ErrorKind::DivisionByZero, message).with_hint("index", index)
            }
            ArithmeticError::UnknownOperation(_) => Failure::new(ErrorKind::UnknownOperation, message)
                .with_hint("available_operations", Operation::names()),
            ArithmeticError::NonFinite { .. } => Failure::new(ErrorKind::CalculationError, message),
        }
    }
}

/// A successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computation {
    pub result: f64,
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub units: &'static str,
    pub explanation: String,
}

/// Coerce raw JSON values to `f64`. Numbers pass through; strings are
/// parsed after trimming; anything else is rejected.
pub fn parse_numbers(raw: &[Value]) -> Result<Vec<f64>, ArithmeticError> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            parsed.ok_or_else(|| ArithmeticError::InvalidNumber {
                index,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Validate raw inputs, resolve the operation name and apply it.
pub fn calculate(operation: &str, raw: &[Value]) -> Result<Computation, ArithmeticError> {
    if raw.is_empty() {
        return Err(ArithmeticError::EmptyInput);
    }
    let numbers = parse_numbers(raw)?;
    let op: Operation = operation.parse()?;
    tracing::debug!(operation = %op, count = numbers.len(), "Applying arithmetic operation");
    apply(op, &numbers)
}

/// Apply `op` to already-parsed numbers.
pub fn apply(op: Operation, numbers: &[f64]) -> Result<Computation, ArithmeticError> {
    let Some((&first, rest)) = numbers.split_first() else {
        return Err(ArithmeticError::EmptyInput);
    };

    let result = match op {
        Operation::Add => numbers.iter().sum(),
        Operation::Subtract => rest.iter().fold(first, |acc, n| acc - n),
        Operation::Multiply => numbers.iter().product(),
        Operation::Divide => {
            if rest.is_empty() {
                return Err(ArithmeticError::Arity {
                    operation: op,
                    expected: "at least 2 numbers",
                    got: numbers.len(),
                });
            }
            let mut acc = first;
            for (offset, &divisor) in rest.iter().enumerate() {
                if divisor == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { index: offset + 1 });
                }
                acc /= divisor;
            }
            acc
        }
        Operation::Power => {
            if numbers.len() != 2 {
                return Err(ArithmeticError::Arity {
                    operation: op,
                    expected: "exactly 2 numbers (base, exponent)",
                    got: numbers.len(),
                });
            }
            first.powf(numbers[1])
        }
        Operation::Average => numbers.iter().sum::<f64>() / numbers.len() as f64,
        Operation::Max => rest.iter().copied().fold(first, f64::max),
        Operation::Min => rest.iter().copied().fold(first, f64::min),
    };

    if !result.is_finite() {
        return Err(ArithmeticError::NonFinite { operation: op });
    }

    Ok(Computation {
        result,
        operation: op,
        operands: numbers.to_vec(),
        units: "dimensionless",
        explanation: explain(op, numbers, result),
    })
}

fn explain(op: Operation, numbers: &[f64], result: f64) -> String {
    let join = |sep: &str| {
        numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(sep)
    };
    match op {
        Operation::Add => format!("{} = {result}", join(" + ")),
        Operation::Subtract => format!("{} = {result}", join(" − ")),
        Operation::Multiply => format!("{} = {result}", join(" × ")),
        Operation::Divide => format!("{} = {result}", join(" ÷ ")),
        Operation::Power => format!("{} ^ {} = {result}", numbers[0], numbers[1]),
        Operation::Average => format!("({}) / {} = {result}", join(" + "), numbers.len()),
        Operation::Max => format!("max({}) = {result}", join(", ")),
        Operation::Min => format!("min({}) = {result}", join(", ")),
    }
}
