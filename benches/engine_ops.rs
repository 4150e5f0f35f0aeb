use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morphospace::domains;
use morphospace::{ParameterPoint, Waveform};

fn bench_metric_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_ops");

    let a = ParameterPoint::new([0.13, 0.87, 0.41, 0.02, 0.99]).unwrap();
    let b = ParameterPoint::new([0.91, 0.05, 0.66, 0.77, 0.38]).unwrap();

    group.bench_function("distance", |bencher| {
        bencher.iter(|| black_box(&a).distance(black_box(&b)))
    });

    group.bench_function("lerp", |bencher| {
        bencher.iter(|| black_box(&a).lerp(black_box(&b), black_box(0.37)))
    });

    let engine = domains::weathering().unwrap();
    group.bench_function("nearest", |bencher| {
        bencher.iter(|| engine.registry().nearest(black_box(&a)))
    });

    group.finish();
}

fn bench_engine_ops(c: &mut Criterion) {
    let engine = domains::weathering().unwrap();
    let mut group = c.benchmark_group("engine_ops");

    group.bench_function("classify", |bencher| {
        bencher.iter(|| engine.classify(black_box("rust-streaked iron beam in rain")))
    });

    group.bench_function("vocabulary_extract", |bencher| {
        let point = ParameterPoint::new([0.45, 0.5, 0.5, 0.5, 0.45]).unwrap();
        bencher.iter(|| engine.extract_vocabulary(black_box(&point)))
    });

    for period in [16usize, 30, 60] {
        group.bench_with_input(
            BenchmarkId::new("oscillate", period),
            &period,
            |bencher, &period| {
                bencher.iter(|| {
                    engine.oscillate(
                        black_box("fresh_pristine"),
                        black_box("total_ruin"),
                        period,
                        Waveform::Sinusoidal,
                        1,
                        0.0,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_metric_ops, bench_engine_ops);
criterion_main!(benches);
