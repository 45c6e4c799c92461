use criterion::{Criterion, criterion_group, criterion_main};
use markdown_fragment_engine::{Pipeline, RenderOptions, render};
mod common;

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let options = RenderOptions::default();
    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_function(format!("mixed_{size}"), |b| {
            b.iter(|| render(std::hint::black_box(&content), &options));
        });
    }

    group.finish();
}

fn bench_stack_machines(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_machines");
    group.sample_size(10);

    let options = RenderOptions::default();
    let lists = common::generate_nested_list(8, 20);
    group.bench_function("nested_lists", |b| {
        b.iter(|| render(std::hint::black_box(&lists), &options));
    });

    let quotes = common::generate_nested_quotes(16);
    group.bench_function("nested_quotes", |b| {
        b.iter(|| render(std::hint::black_box(&quotes), &options));
    });

    group.finish();
}

fn bench_traced_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    group.sample_size(10);

    let pipeline = Pipeline::standard();
    let content = common::generate_markdown_content(10);
    group.bench_function("run_traced", |b| {
        b.iter(|| pipeline.run_traced(std::hint::black_box(&content)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_pipeline,
    bench_stack_machines,
    bench_traced_run
);
criterion_main!(benches);
