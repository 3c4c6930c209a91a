//! Data preparation utilities for heterogeneous JSON values.
//!
//! The operations in this crate work on ordered sequences of
//! [`serde_json::Value`] elements and share a common failure policy: every
//! public operation has a fallible `try_` form returning [`error::DataResult`],
//! and a defaulting form that logs a diagnostic and returns a safe default
//! (an empty vector or an all-absent summary) instead of an error.
//!
//! # Modules
//!
//! - [`transformations`]: cleaning, filtering, and mapping of value sequences
//! - [`analysis`]: summary statistics over the numeric elements of a sequence
//! - [`error`]: error types shared by all operations
//!
//! # Example
//!
//! ```
//! use dataprep::transformations::drop_missing;
//! use serde_json::json;
//!
//! let cleaned = drop_missing(&json!([1, null, "", "kept"]));
//! assert_eq!(cleaned, vec![json!(1), json!("kept")]);
//! ```

pub mod analysis;
pub mod error;
pub mod transformations;
