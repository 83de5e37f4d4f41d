//! The untyped numeric kind
//!
//! [`Dynamic`] holds a value whose exact numeric shape is not known until
//! runtime. Its arithmetic is a deliberate best-effort path: both operands
//! are coerced to `f64` before every operation and the result is always
//! `Float`. Precision loss for integers beyond 2^53 is accepted behavior.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::numeric::Numeric;

/// A numeric value whose kind is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Dynamic {
    Int(i64),
    Float(f64),
}

impl Dynamic {
    /// The `f64` view every operation works through.
    pub fn as_f64(self) -> f64 {
        match self {
            Dynamic::Int(v) => v as f64,
            Dynamic::Float(v) => v,
        }
    }
}

impl From<i32> for Dynamic {
    fn from(v: i32) -> Self {
        Dynamic::Int(i64::from(v))
    }
}

impl From<i64> for Dynamic {
    fn from(v: i64) -> Self {
        Dynamic::Int(v)
    }
}

impl From<f64> for Dynamic {
    fn from(v: f64) -> Self {
        Dynamic::Float(v)
    }
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Int(v) => write!(f, "{v}"),
            Dynamic::Float(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Dynamic {
    type Err = Error;

    /// Reads an integer literal as `Int` and anything float-shaped as
    /// `Float`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Dynamic::Int(v));
        }
        trimmed
            .parse::<f64>()
            .map(Dynamic::Float)
            .map_err(|_| Error::InvalidNumber(s.to_string()))
    }
}

impl Numeric for Dynamic {
    fn zero() -> Self {
        Dynamic::Float(0.0)
    }

    fn add(a: Self, b: Self) -> Self {
        Dynamic::Float(a.as_f64() + b.as_f64())
    }

    fn sub(a: Self, b: Self) -> Self {
        Dynamic::Float(a.as_f64() - b.as_f64())
    }

    fn mul(a: Self, b: Self) -> Self {
        Dynamic::Float(a.as_f64() * b.as_f64())
    }

    fn div(a: Self, b: Self) -> Self {
        Dynamic::Float(a.as_f64() / b.as_f64())
    }

    fn div_int(a: Self, n: i32) -> Self {
        Dynamic::Float(a.as_f64() / f64::from(n))
    }

    fn to_divisor(self) -> i32 {
        self.as_f64().round() as i32
    }
}

// Standard operator and num-traits impls so `Dynamic` composes with code
// written against the wider numeric ecosystem.

impl Add for Dynamic {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Numeric::add(self, rhs)
    }
}

impl Sub for Dynamic {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Numeric::sub(self, rhs)
    }
}

impl Mul for Dynamic {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Numeric::mul(self, rhs)
    }
}

impl Div for Dynamic {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Numeric::div(self, rhs)
    }
}

impl Zero for Dynamic {
    fn zero() -> Self {
        Dynamic::Float(0.0)
    }

    fn is_zero(&self) -> bool {
        self.as_f64() == 0.0
    }
}

impl One for Dynamic {
    fn one() -> Self {
        Dynamic::Float(1.0)
    }
}

impl ToPrimitive for Dynamic {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Dynamic::Int(v) => Some(*v),
            Dynamic::Float(v) => v.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Dynamic::Int(v) => v.to_u64(),
            Dynamic::Float(v) => v.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_yields_float() {
        let a = Dynamic::Int(6);
        let b = Dynamic::Int(4);

        assert_eq!(Numeric::add(a, b), Dynamic::Float(10.0));
        assert_eq!(Numeric::sub(a, b), Dynamic::Float(2.0));
        assert_eq!(Numeric::difference(a, b), Dynamic::Float(2.0));
        assert_eq!(Numeric::mul(a, b), Dynamic::Float(24.0));
        assert_eq!(Numeric::div(a, b), Dynamic::Float(1.5));
        assert_eq!(Numeric::div_int(a, 4), Dynamic::Float(1.5));
    }

    #[test]
    fn test_mixed_variant_arithmetic() {
        let a = Dynamic::Int(3);
        let b = Dynamic::Float(0.5);
        assert_eq!(a + b, Dynamic::Float(3.5));
        assert_eq!(a * b, Dynamic::Float(1.5));
    }

    #[test]
    fn test_division_by_zero_follows_float_semantics() {
        let q = Dynamic::Int(10) / Dynamic::Int(0);
        assert_eq!(q.as_f64(), f64::INFINITY);
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<Dynamic>().unwrap(), Dynamic::Int(42));
        assert_eq!(" -7 ".parse::<Dynamic>().unwrap(), Dynamic::Int(-7));
        assert_eq!("2.5".parse::<Dynamic>().unwrap(), Dynamic::Float(2.5));
        assert!("twelve".parse::<Dynamic>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dynamic::Int(42).to_string(), "42");
        assert_eq!(Dynamic::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_to_divisor_rounds() {
        assert_eq!(Dynamic::Float(2.5).to_divisor(), 3);
        assert_eq!(Dynamic::Int(4).to_divisor(), 4);
    }

    #[test]
    fn test_num_traits_impls() {
        assert!(<Dynamic as Zero>::zero().is_zero());
        assert!(Dynamic::Int(0).is_zero());
        assert_eq!(<Dynamic as One>::one().as_f64(), 1.0);
        assert_eq!(Dynamic::Float(7.9).to_i64(), Some(7));
        assert_eq!(Dynamic::Int(7).to_f64(), Some(7.0));
    }
}
