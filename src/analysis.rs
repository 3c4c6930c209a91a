//! Summary statistics over the numeric elements of a value sequence.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{expect_array, DataResult};

/// Summary statistics for a sequence of values.
///
/// Statistics are computed over the numeric elements only. `None` marks a
/// statistic that does not exist because the sequence held no numeric
/// elements; the default value is the all-absent summary with `count == 0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueSummary {
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub average: Option<f64>,
    pub sum: Option<f64>,
    pub count: usize,
}

/// Compute summary statistics over the numeric elements of a sequence.
///
/// Non-numeric elements are skipped. Booleans never count as numeric, even
/// where a caller would accept a 0/1 coercion.
///
/// # Arguments
/// * `input` - JSON value expected to be an array
///
/// # Returns
/// The summary over the numeric subset, or a type-mismatch error if `input`
/// is not an array.
pub fn try_summarize(input: &Value) -> DataResult<ValueSummary> {
    let items = expect_array(input)?;
    let numbers: Vec<f64> = items.iter().filter_map(numeric_value).collect();

    if numbers.is_empty() {
        return Ok(ValueSummary::default());
    }

    let count = numbers.len();
    let sum: f64 = numbers.iter().sum();
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);

    Ok(ValueSummary {
        max: Some(max),
        min: Some(min),
        average: Some(sum / count as f64),
        sum: Some(sum),
        count,
    })
}

/// Defaulting form of [`try_summarize`]: on any failure, emit a diagnostic
/// and return the all-absent summary instead of an error.
pub fn summarize(input: &Value) -> ValueSummary {
    try_summarize(input).unwrap_or_else(|e| {
        log::warn!("Failed to summarize values: {}", e);
        ValueSummary::default()
    })
}

/// Numeric reading of an element. Booleans are deliberately not numeric.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(_) => None,
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
