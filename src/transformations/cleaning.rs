use serde_json::Value;

use crate::error::{expect_array, DataResult};

/// Remove absent values from a sequence.
///
/// Keeps every element except `null` and the empty string, preserving order.
///
/// # Arguments
/// * `input` - JSON value expected to be an array
///
/// # Returns
/// The surviving elements, or a type-mismatch error if `input` is not an array.
pub fn try_drop_missing(input: &Value) -> DataResult<Vec<Value>> {
    let items = expect_array(input)?;
    let kept = items
        .iter()
        .filter(|item| !is_missing(item))
        .cloned()
        .collect();
    Ok(kept)
}

/// Defaulting form of [`try_drop_missing`]: on any failure, emit a diagnostic
/// and return an empty vector instead of an error.
pub fn drop_missing(input: &Value) -> Vec<Value> {
    try_drop_missing(input).unwrap_or_else(|e| {
        log::warn!("Failed to clean values: {}", e);
        Vec::new()
    })
}

/// An element is absent if it is `null` or an empty string. Empty arrays and
/// objects are values in their own right and survive cleaning.
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_drop_missing_removes_null_and_empty_strings() {
        let raw = json!([1, null, "hello", "", 42, null, "world", "", 3.14]);
        let cleaned = drop_missing(&raw);
        assert_eq!(
            cleaned,
            vec![json!(1), json!("hello"), json!(42), json!("world"), json!(3.14)]
        );
    }

    #[test]
    fn test_drop_missing_keeps_falsy_but_present_values() {
        let raw = json!([0, false, [], {}, " "]);
        let cleaned = drop_missing(&raw);
        assert_eq!(cleaned.len(), 5);
    }

    #[test]
    fn test_drop_missing_empty_input() {
        assert!(drop_missing(&json!([])).is_empty());
    }

    #[test]
    fn test_drop_missing_rejects_non_array() {
        let err = try_drop_missing(&json!("not a list")).unwrap_err();
        assert!(matches!(err, DataError::TypeMismatch { .. }));

        // The defaulting form swallows the error and yields an empty result.
        assert!(drop_missing(&json!("not a list")).is_empty());
        assert!(drop_missing(&json!(42)).is_empty());
    }

    fn scalar_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1000i64..1000).prop_map(|n| json!(n)),
            "[a-z]{0,6}".prop_map(Value::String),
        ]
    }

    proptest! {
        #[test]
        fn prop_clean_keeps_exactly_the_present_elements(
            items in prop::collection::vec(scalar_value(), 0..40)
        ) {
            let cleaned = try_drop_missing(&Value::Array(items.clone())).unwrap();
            let expected: Vec<Value> = items
                .iter()
                .filter(|v| !(v.is_null() || v.as_str() == Some("")))
                .cloned()
                .collect();
            prop_assert_eq!(cleaned, expected);
        }
    }
}
