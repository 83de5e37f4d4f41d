//! String, date, number-formatting, and collection helpers
//!
//! The incidental-glue side of the toolkit: small, self-contained
//! functions and types with no dependency on the arithmetic engine.
//!
//! # Example
//!
//! ```rust
//! use corekit_util::text::truncate_at;
//! use corekit_util::numfmt::short_format;
//!
//! assert_eq!(truncate_at("a very long headline", 6), "a very...");
//! assert_eq!(short_format(1_500_000.0, false), "1.5M");
//! ```

pub mod collections;
pub mod date;
pub mod error;
pub mod numfmt;
pub mod text;

pub use collections::{Group, IterExt};
pub use date::{date_range, date_range_by_month, humanize, Frequency, Tense};
pub use error::{Error, Result};
pub use numfmt::short_format;
pub use text::{contains_ignore_case, parse_julian_date, parse_or, truncate_at};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
