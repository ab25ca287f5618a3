//! Interval Domain Layer
//!
//! An immutable, generic range over any totally ordered value type.
//!
//! ## Key Concepts
//!
//! - **Range**: a contiguous region of an ordered type, bounded by one or two endpoints
//! - **Bound type**: the fixed rule deciding whether each endpoint is itself a member
//! - **Half-bounded range**: one endpoint absent (unbounded on that side)
//! - **Fully-bounded range**: both endpoints present, lower strictly below upper
//!
//! ## Example
//!
//! ```
//! use interval_domain::Range;
//!
//! let range = Range::closed_open(5, 7).unwrap();
//! assert!(range.contains(&5));
//! assert!(!range.contains(&7));
//! assert_eq!(range.to_string(), "[5,7)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bound_type;
pub mod error;
pub mod range;

// Re-exports for convenience
pub use bound_type::BoundType;
pub use error::{RangeError, Result};
pub use range::Range;
