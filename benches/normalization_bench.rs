//! Body-normalizer benchmarks.
//!
//! Measures each repair strategy on input it is the first to accept, and
//! how the tolerant parser scales with body size.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `strategies` | One pass per strategy: strict, quote-swap, tolerant |
//! | `scaling` | Tolerant parse time for 10/100/1000-field bodies |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use curlify_core::normalize::normalize;
use std::fmt::Write;
use std::hint::black_box;

/// A log-style pseudo-JSON body with `fields` unquoted key/value pairs.
fn messy_body(fields: usize) -> String {
    let mut out = String::from("{");
    for i in 0..fields {
        if i > 0 {
            out.push_str(",\n");
        }
        write!(out, "field_{i}: value with spaces {i}").unwrap();
    }
    out.push('}');
    out
}

// ---------------------------------------------------------------------------
// Strategies: which repair pass ends up doing the work
// ---------------------------------------------------------------------------

fn strategy_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    let inputs = [
        ("strict", r#"{"name": "John", "age": 30, "tags": ["a", "b"]}"#.to_string()),
        ("quote_swap", "{'name': 'John', 'age': 30, 'tags': ['a', 'b']}".to_string()),
        ("tolerant", "{name: John, age: 30, note: leave at door}".to_string()),
    ];

    for (name, input) in &inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| normalize(black_box(input)).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling: tolerant parse vs body size
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for fields in [10usize, 100, 1_000] {
        let input = messy_body(fields);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fields), &input, |b, input| {
            b.iter(|| normalize(black_box(input)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, strategy_bench, scaling_bench);
criterion_main!(benches);
