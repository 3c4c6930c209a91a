//! Transformations over sequences of heterogeneous values.
//!
//! Each operation takes the sequence as a [`serde_json::Value`] and validates
//! that it is an array, so callers holding arbitrary JSON get a type-mismatch
//! diagnostic rather than a panic. Inputs are never mutated; every operation
//! returns a new vector.
//!
//! # Modules
//!
//! - [`cleaning`]: drop absent values (`null` and empty strings)
//! - [`filtering`]: keep elements satisfying a predicate
//! - [`mapping`]: replace each element with a mapped value
//!
//! # Example
//!
//! ```
//! use dataprep::transformations::{drop_missing, filter_values};
//! use serde_json::json;
//!
//! let cleaned = drop_missing(&json!([1, null, 2, "", 3]));
//! let odds = filter_values(&json!([1, 2, 3, 4]), |v| {
//!     Ok(v.as_i64().map(|n| n % 2 == 1).unwrap_or(false))
//! });
//! assert_eq!(cleaned, vec![json!(1), json!(2), json!(3)]);
//! assert_eq!(odds, vec![json!(1), json!(3)]);
//! ```

pub mod cleaning;
pub mod filtering;
pub mod mapping;

pub use cleaning::{drop_missing, try_drop_missing};
pub use filtering::{filter_values, try_filter_values};
pub use mapping::{map_values, try_map_values};
