use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use dataprep::analysis::summarize;
use dataprep::transformations::{drop_missing, filter_values, map_values};

fn sample_values(len: usize) -> Value {
    let items: Vec<Value> = (0..len)
        .map(|i| match i % 5 {
            0 => Value::Null,
            1 => json!(""),
            2 => json!(i as f64 * 0.5),
            3 => json!(format!("item-{}", i)),
            _ => json!(i),
        })
        .collect();
    Value::Array(items)
}

fn bench_cleaning(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleaning");
    let data = sample_values(1_000);

    group.bench_function("drop_missing_1000", |b| {
        b.iter(|| drop_missing(black_box(&data)));
    });

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let data = sample_values(1_000);

    group.bench_function("filter_numeric_1000", |b| {
        b.iter(|| filter_values(black_box(&data), |v| Ok(v.as_f64().is_some())));
    });

    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");
    let data = sample_values(1_000);

    group.bench_function("label_values_1000", |b| {
        b.iter(|| map_values(black_box(&data), |v| Ok(json!(v.to_string()))));
    });

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let data = sample_values(1_000);

    group.bench_function("summarize_1000", |b| {
        b.iter(|| summarize(black_box(&data)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cleaning,
    bench_filtering,
    bench_mapping,
    bench_analysis
);
criterion_main!(benches);
