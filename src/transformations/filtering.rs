use serde_json::Value;

use crate::error::{expect_array, DataResult};

/// Keep the elements of a sequence for which a predicate holds.
///
/// The predicate is fallible; an `Err` from it aborts the operation and is
/// reported as a callback error. Surviving elements keep their input order.
///
/// # Arguments
/// * `input` - JSON value expected to be an array
/// * `predicate` - returns `Ok(true)` for elements to keep
pub fn try_filter_values<F>(input: &Value, predicate: F) -> DataResult<Vec<Value>>
where
    F: Fn(&Value) -> DataResult<bool>,
{
    let items = expect_array(input)?;
    let mut kept = Vec::new();
    for item in items {
        if predicate(item)? {
            kept.push(item.clone());
        }
    }
    Ok(kept)
}

/// Defaulting form of [`try_filter_values`]: on any failure, including one
/// raised by the predicate itself, emit a diagnostic and return an empty
/// vector instead of an error.
pub fn filter_values<F>(input: &Value, predicate: F) -> Vec<Value>
where
    F: Fn(&Value) -> DataResult<bool>,
{
    try_filter_values(input, predicate).unwrap_or_else(|e| {
        log::warn!("Failed to filter values: {}", e);
        Vec::new()
    })
}
