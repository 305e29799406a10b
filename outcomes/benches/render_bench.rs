//! Benchmarks for template rendering and pack aggregation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outcomes::prelude::*;
use outcomes::template;

fn render_benchmark(c: &mut Criterion) {
    let args = template::to_args(["alpha", "beta", "gamma"]);
    c.bench_function("render_three_placeholders", |b| {
        b.iter(|| template::render(black_box("Values {a}, {b} and {c}"), black_box(&args)))
    });

    let adversarial = "{".repeat(10_000);
    c.bench_function("render_unclosed_braces", |b| {
        b.iter(|| template::render(black_box(&adversarial), black_box(&args)))
    });
}

fn pack_benchmark(c: &mut Criterion) {
    let pack: OutcomePack = (0..1_000)
        .map(|i| match i % 3 {
            0 => Outcome::success_with_message("Row {n} ok").with_args([i]),
            1 => Outcome::warning("Row {n} slow").with_args([i]),
            _ => Outcome::error("Row {n} failed").with_args([i]),
        })
        .collect();

    c.bench_function("pack_summarize_1000", |b| b.iter(|| black_box(&pack).summarize()));
    c.bench_function("pack_render_1000", |b| {
        b.iter(|| black_box(&pack).render_with_separator(true, "\n"))
    });
}

criterion_group!(benches, render_benchmark, pack_benchmark);
criterion_main!(benches);
