//! The arithmetic contract implemented once per supported numeric kind
//!
//! This module defines the closed set of numeric kinds the engine operates
//! on and the operations each kind must provide. Dispatch is resolved at
//! compile time through monomorphization: instantiating any generic surface
//! of this crate with a kind selects that kind's implementation once, and
//! every later use of the same kind reuses the already-compiled code.
//!
//! # Design Philosophy
//!
//! - **Closed kind set**: the trait is sealed; `i32`, `i64`, `f64`, and
//!   [`Dynamic`](crate::Dynamic) are the only implementors
//! - **Native failure semantics**: integer division by zero stays fatal,
//!   float division by zero yields an infinity or NaN, and the two are
//!   never unified
//! - **No runtime resolution**: an unsupported kind is rejected by the
//!   compiler, not discovered at first use

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for crate::dynamic::Dynamic {}
}

/// Operations every supported numeric kind provides.
///
/// The trait is sealed: using any other type where a `Numeric` bound is
/// required fails to compile with a diagnostic naming that type.
///
/// ```compile_fail
/// use corekit_math::Number;
///
/// // `&str` is not a supported numeric kind.
/// let n = Number::new("twelve");
/// ```
pub trait Numeric: sealed::Sealed + Copy + PartialEq + Debug + Send + Sync + 'static {
    /// The kind's additive identity, used as the fold seed for sums.
    fn zero() -> Self;

    /// Native addition.
    fn add(a: Self, b: Self) -> Self;

    /// Native subtraction.
    fn sub(a: Self, b: Self) -> Self;

    /// Alias of [`sub`](Numeric::sub), kept as a distinct named operation
    /// for call-site clarity.
    fn difference(a: Self, b: Self) -> Self {
        Self::sub(a, b)
    }

    /// Native multiplication.
    fn mul(a: Self, b: Self) -> Self;

    /// Native division by another value of the same kind.
    fn div(a: Self, b: Self) -> Self;

    /// Division by a plain integer divisor, used for averaging. The
    /// divisor type is `i32` for every kind.
    fn div_int(a: Self, n: i32) -> Self;

    /// The integer form of this value, used where an operand stands in
    /// for a divisor or count.
    fn to_divisor(self) -> i32;
}

impl Numeric for i32 {
    fn zero() -> Self {
        0
    }

    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    fn mul(a: Self, b: Self) -> Self {
        a * b
    }

    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    fn div_int(a: Self, n: i32) -> Self {
        a / n
    }

    fn to_divisor(self) -> i32 {
        self
    }
}

impl Numeric for i64 {
    fn zero() -> Self {
        0
    }

    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    fn mul(a: Self, b: Self) -> Self {
        a * b
    }

    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    fn div_int(a: Self, n: i32) -> Self {
        a / i64::from(n)
    }

    fn to_divisor(self) -> i32 {
        self as i32
    }
}

impl Numeric for f64 {
    fn zero() -> Self {
        0.0
    }

    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    fn mul(a: Self, b: Self) -> Self {
        a * b
    }

    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    fn div_int(a: Self, n: i32) -> Self {
        a / f64::from(n)
    }

    fn to_divisor(self) -> i32 {
        self.round() as i32
    }
}

// =============================================================================
// Tests
// =============================================================================
