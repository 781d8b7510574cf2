use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use summary::Config;

const ROWS: usize = 1_000_000;

fn criterion_benchmark(c: &mut Criterion) {
    let mut data = Vec::new();
    generate::write_measurements(&mut data, ROWS, 42, generate::LineEnding::Lf)
        .unwrap_or_else(|e| panic!("generating input: {e}"));

    let mut group = c.benchmark_group("summary");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(data.len() as u64));

    let max = rayon::current_num_threads().max(1);
    let mut workers = vec![1, max];
    workers.dedup();
    for w in workers {
        let config = Config::default().with_workers(w);
        group.bench_with_input(BenchmarkId::new("workers", w), &config, |b, config| {
            b.iter(|| black_box(summary::solve_bytes(&data, config).unwrap()))
        });
    }

    group.bench_function("sequential", |b| {
        b.iter(|| {
            black_box(summary::summarize_sequential(&data, &Default::default()).unwrap())
        })
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark,
);

criterion_main!(benches);
