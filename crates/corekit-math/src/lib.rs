//! Generic arithmetic and aggregation over a closed set of numeric kinds
//!
//! This crate lets calling code perform arithmetic and simple aggregate
//! statistics over a value whose numeric representation (`i32`, `i64`,
//! `f64`, or the untyped [`Dynamic`]) is chosen at the call site through
//! a type parameter.
//!
//! # Architecture Overview
//!
//! Two layers, leaves first:
//!
//! 1. **Kind contract** — [`Numeric`], a sealed trait implemented exactly
//!    once per supported kind, carrying the five primitive operations plus
//!    the integer-divisor division used for averaging
//! 2. **Calling surface** — the [`Number`] wrapper for infix syntax, the
//!    [`Summable`] sequence for sum/average, and the [`calculate`] /
//!    [`calculate_list`] facade selecting behavior by [`Operation`]
//!
//! Dispatch is monomorphized: selecting a kind costs nothing at runtime,
//! and a kind outside the closed set is rejected at compile time.
//!
//! # Example
//!
//! ```rust
//! use corekit_math::{calculate, calculate_list, Number, Operation};
//!
//! let total = calculate_list(Operation::Addition, &[1, 2, 3, 4]);
//! assert_eq!(total, 10);
//!
//! let scaled = Number::new(6) * Number::new(7);
//! assert_eq!(scaled.get(), 42);
//! ```

pub mod dynamic;
pub mod error;
pub mod number;
pub mod numeric;
pub mod ops;
pub mod summable;

pub use dynamic::Dynamic;
pub use error::{Error, Result};
pub use number::Number;
pub use numeric::Numeric;
pub use ops::{calculate, calculate_list, Operation};
pub use summable::Summable;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{calculate, calculate_list, Dynamic, Number, Numeric, Operation, Summable};
}
