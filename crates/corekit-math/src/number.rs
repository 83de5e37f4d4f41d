//! Infix-friendly wrapper over a single numeric value
//!
//! [`Number`] exists so arithmetic over any supported kind can be written
//! with operators. The operator impls are exactly the named forwarding
//! calls on [`Numeric`]; wrapping and unwrapping are explicit and lossless.

use std::ops::{Add, Div, Mul, Sub};

use crate::numeric::Numeric;

/// A transparent wrapper around one value of a supported numeric kind.
///
/// # Example
///
/// ```rust
/// use corekit_math::Number;
///
/// let product = Number::new(6) * Number::new(7);
/// assert_eq!(product.get(), 42);
///
/// // Integer-divisor division, as used for averaging.
/// let half = Number::new(9) / 2;
/// assert_eq!(half.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Number<T>(T);

impl<T: Numeric> Number<T> {
    /// Wrap a raw value. Never fails.
    pub fn new(value: T) -> Self {
        Number(value)
    }

    /// Unwrap back to the raw value. Never fails.
    pub fn get(self) -> T {
        self.0
    }

    // Named forms of the operator surface, for call sites that prefer
    // a function call over an operator.

    pub fn add(a: T, b: T) -> T {
        T::add(a, b)
    }

    pub fn sub(a: T, b: T) -> T {
        T::sub(a, b)
    }

    pub fn difference(a: T, b: T) -> T {
        T::difference(a, b)
    }

    pub fn multiply(a: T, b: T) -> T {
        T::mul(a, b)
    }

    pub fn divide(a: T, b: T) -> T {
        T::div(a, b)
    }

    /// Division by a plain integer divisor.
    pub fn divide_by(a: T, n: i32) -> T {
        T::div_int(a, n)
    }
}

impl<T: Numeric> From<T> for Number<T> {
    fn from(value: T) -> Self {
        Number(value)
    }
}

impl<T: Numeric> Default for Number<T> {
    /// The kind's zero value.
    fn default() -> Self {
        Number(T::zero())
    }
}

impl<T: Numeric> Add for Number<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Number(T::add(self.0, rhs.0))
    }
}

impl<T: Numeric> Sub for Number<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Number(T::sub(self.0, rhs.0))
    }
}

impl<T: Numeric> Mul for Number<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Number(T::mul(self.0, rhs.0))
    }
}

impl<T: Numeric> Div for Number<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Number(T::div(self.0, rhs.0))
    }
}

impl<T: Numeric> Div<i32> for Number<T> {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Number(T::div_int(self.0, rhs))
    }
}
