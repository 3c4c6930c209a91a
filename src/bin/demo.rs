use serde_json::{json, Value};

use dataprep::analysis::summarize;
use dataprep::transformations::{drop_missing, filter_values, map_values};

fn print_summary(data: &Value) {
    let summary = summarize(data);
    println!("   data: {}", data);
    println!(
        "     max: {:?}  min: {:?}  average: {:?}  sum: {:?}  count: {}",
        summary.max, summary.min, summary.average, summary.sum, summary.count
    );
}

fn main() {
    env_logger::init();

    println!("{}", "=".repeat(50));
    println!("Data preparation demo");
    println!("{}", "=".repeat(50));

    println!("\n1. Cleaning:");
    let raw = json!([1, null, "hello", "", 42, null, "world", "", 3.14]);
    println!("   input:   {}", raw);
    let cleaned = drop_missing(&raw);
    println!("   cleaned: {}", Value::Array(cleaned));

    println!("\n2. Filtering:");
    let numbers = json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    println!("   input:      {}", numbers);
    let evens = filter_values(&numbers, |v| {
        Ok(v.as_i64().map(|n| n % 2 == 0).unwrap_or(false))
    });
    println!("   evens:      {}", Value::Array(evens));
    let above_five = filter_values(&numbers, |v| {
        Ok(v.as_f64().map(|n| n > 5.0).unwrap_or(false))
    });
    println!("   above five: {}", Value::Array(above_five));

    println!("\n3. Transforming:");
    println!("   input:    {}", numbers);
    let squared = map_values(&numbers, |v| match v.as_i64() {
        Some(n) => Ok(json!(n * n)),
        None => Err("expected an integer".into()),
    });
    println!("   squared:  {}", Value::Array(squared));
    let labelled = map_values(&numbers, |v| Ok(json!(format!("Number-{}", v))));
    println!("   labelled: {}", Value::Array(labelled));

    println!("\n4. Statistics:");
    print_summary(&json!([10, 20, 30, 40, 50]));
    println!("\n   with non-numeric entries:");
    print_summary(&json!([10, 20, "invalid", null, 30, 40]));

    println!("\n5. Error handling:");
    // A non-sequence input is reported via the log and defaults to empty.
    let not_a_list = json!("not a list");
    let result = drop_missing(&not_a_list);
    println!("   cleaning {} yields: {}", not_a_list, Value::Array(result));

    println!("\n{}", "=".repeat(50));
    println!("Demo complete");
    println!("{}", "=".repeat(50));
}
