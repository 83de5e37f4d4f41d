//! corekit — utility toolkit
//!
//! A small utility library in two parts:
//!
//! - [`math`]: generic arithmetic and aggregation over a closed set of
//!   numeric kinds (`i32`, `i64`, `f64`, and the untyped
//!   [`Dynamic`](math::Dynamic)), dispatched at compile time
//! - [`util`]: string, date, number-formatting, and collection helpers
//!
//! # Example
//!
//! ```rust
//! use corekit::prelude::*;
//!
//! let total = calculate_list(Operation::Addition, &[1, 2, 3, 4]);
//! assert_eq!(total, 10);
//!
//! assert_eq!(short_format(total as f64 * 1e6, false), "10M");
//! ```

pub use corekit_math as math;
pub use corekit_util as util;

pub use corekit_math::{calculate, calculate_list, Dynamic, Number, Numeric, Operation, Summable};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use corekit_math::prelude::*;
    pub use corekit_util::{
        contains_ignore_case, date_range, humanize, short_format, truncate_at, Frequency, Group,
        IterExt, Tense,
    };
}
