use serde_json::Value;

use crate::error::{expect_array, DataResult};

/// Replace each element of a sequence with a mapped value.
///
/// The output has the same length and order as the input. The mapper is
/// fallible; an `Err` from it aborts the operation and is reported as a
/// callback error.
///
/// # Arguments
/// * `input` - JSON value expected to be an array
/// * `mapper` - produces the replacement for each element
pub fn try_map_values<F>(input: &Value, mapper: F) -> DataResult<Vec<Value>>
where
    F: Fn(&Value) -> DataResult<Value>,
{
    let items = expect_array(input)?;
    let mut mapped = Vec::with_capacity(items.len());
    for item in items {
        mapped.push(mapper(item)?);
    }
    Ok(mapped)
}

/// Defaulting form of [`try_map_values`]: on any failure, including one
/// raised by the mapper itself, emit a diagnostic and return an empty vector
/// instead of an error.
pub fn map_values<F>(input: &Value, mapper: F) -> Vec<Value>
where
    F: Fn(&Value) -> DataResult<Value>,
{
    try_map_values(input, mapper).unwrap_or_else(|e| {
        log::warn!("Failed to transform values: {}", e);
        Vec::new()
    })
}
