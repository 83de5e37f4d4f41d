//! Operation categories and the calculation entry points
//!
//! [`calculate`] maps a category and a pair of operands onto the kind's
//! arithmetic; [`calculate_list`] does the same for an ordered sequence.
//! Categories without a wired behavior yield the kind's zero value rather
//! than an error — callers relying on the reserved vocabulary get a
//! well-defined result, not a failure.

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::numeric::Numeric;
use crate::summable::Summable;

/// The caller-facing selector for which behavior to invoke.
///
/// Only Addition, Subtraction, Division, Multiplication, Difference,
/// Percentage, Sum, and Average are wired; Mean, Median, Mode, and
/// StandardDeviation are reserved vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition = 1,
    Subtraction,
    Division,
    Multiplication,
    Difference,
    Percentage,
    Sum,
    Average,
    Mean,
    Median,
    Mode,
    StandardDeviation,
}

impl Operation {
    /// Human-readable description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Addition => "addition of two operands, or the sum of a sequence",
            Operation::Subtraction => "subtraction of two operands, or the average of a sequence",
            Operation::Division => "division of one operand by another",
            Operation::Multiplication => "multiplication of two operands",
            Operation::Difference => "difference between two operands",
            Operation::Percentage => "division of one operand by the integer form of the other",
            Operation::Sum => "sum over a sequence",
            Operation::Average => "division of one operand by the integer form of the other",
            Operation::Mean => "reserved, no wired behavior",
            Operation::Median => "reserved, no wired behavior",
            Operation::Mode => "reserved, no wired behavior",
            Operation::StandardDeviation => "reserved, no wired behavior",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Division => "Division",
            Operation::Multiplication => "Multiplication",
            Operation::Difference => "Difference",
            Operation::Percentage => "Percentage",
            Operation::Sum => "Sum",
            Operation::Average => "Average",
            Operation::Mean => "Mean",
            Operation::Median => "Median",
            Operation::Mode => "Mode",
            Operation::StandardDeviation => "StandardDeviation",
        })
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Case-insensitive parse of the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "addition" => Ok(Operation::Addition),
            "subtraction" => Ok(Operation::Subtraction),
            "division" => Ok(Operation::Division),
            "multiplication" => Ok(Operation::Multiplication),
            "difference" => Ok(Operation::Difference),
            "percentage" => Ok(Operation::Percentage),
            "sum" => Ok(Operation::Sum),
            "average" => Ok(Operation::Average),
            "mean" => Ok(Operation::Mean),
            "median" => Ok(Operation::Median),
            "mode" => Ok(Operation::Mode),
            "standarddeviation" => Ok(Operation::StandardDeviation),
            _ => Err(Error::UnknownOperation(s.to_string())),
        }
    }
}

/// Apply `op` to a pair of operands.
///
/// Average and Percentage both divide `a` by the integer form of `b`;
/// Percentage is deliberately not scaled by 100. Categories with no wired
/// pair behavior (Sum, Mean, Median, Mode, StandardDeviation) return the
/// kind's zero.
pub fn calculate<T: Numeric>(op: Operation, a: T, b: T) -> T {
    trace!("calculate {op:?} over ({a:?}, {b:?})");
    match op {
        Operation::Addition => T::add(a, b),
        Operation::Subtraction => T::sub(a, b),
        Operation::Difference => T::difference(a, b),
        Operation::Multiplication => T::mul(a, b),
        Operation::Division => T::div(a, b),
        Operation::Average | Operation::Percentage => T::div_int(a, b.to_divisor()),
        _ => T::zero(),
    }
}

/// Apply `op` to an ordered sequence of values.
///
/// Addition aggregates to the sum; Subtraction aggregates to the average
/// (a long-standing mapping this crate keeps, misleading name and all).
/// Every other category returns the kind's zero.
pub fn calculate_list<T: Numeric>(op: Operation, values: &[T]) -> T {
    trace!("calculate {op:?} over {} values", values.len());
    match op {
        Operation::Addition => Summable::from(values).sum(),
        Operation::Subtraction => Summable::from(values).average(),
        _ => T::zero(),
    }
}
