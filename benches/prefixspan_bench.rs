use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use prefixspan::PrefixSpan;

/// Generate synthetic symbol sequences
///
/// Parameters:
/// - num_sequences: Number of sequences
/// - alphabet: Number of distinct symbols
/// - avg_len: Average sequence length
fn generate_sequences(num_sequences: usize, alphabet: u32, avg_len: usize) -> Vec<Vec<u32>> {
    let mut rng = rand::thread_rng();

    (0..num_sequences)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let len = (avg_len as f64 * (0.5 + random_factor)).round() as usize;
            (0..len).map(|_| rng.gen_range(0..alphabet)).collect()
        })
        .collect()
}

/// Benchmark gapped mining with different database sizes
fn bench_frequent_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequent_scaling");

    let configs = vec![
        ("small_100seq", 100, 20, 8),
        ("medium_500seq", 500, 30, 10),
        ("large_1000seq", 1000, 40, 12),
    ];

    for (name, num_seq, alphabet, avg_len) in configs {
        let ps = PrefixSpan::new(generate_sequences(num_seq, alphabet, avg_len)).with_maxlen(4);
        let minsup = num_seq / 10;

        group.bench_with_input(BenchmarkId::from_parameter(name), &ps, |b, ps| {
            b.iter(|| ps.frequent(black_box(minsup), true));
        });
    }

    group.finish();
}

/// Benchmark sequential against parallel growth and contiguous mode
fn bench_frequent_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequent_modes");

    let ps = PrefixSpan::new(generate_sequences(1000, 30, 12)).with_maxlen(5);

    group.bench_function("gap_sequential", |b| b.iter(|| ps.frequent(black_box(50), true)));
    group.bench_function("gap_parallel", |b| b.iter(|| ps.frequent_par(black_box(50), true)));
    group.bench_function("contiguous", |b| b.iter(|| ps.frequent(black_box(5), false)));

    group.finish();
}

/// Benchmark top-k with different k
fn bench_topk(c: &mut Criterion) {
    let mut group = c.benchmark_group("topk");

    let ps = PrefixSpan::new(generate_sequences(1000, 30, 12));

    for &k in &[1usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| ps.topk(black_box(k)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frequent_scaling, bench_frequent_modes, bench_topk);
criterion_main!(benches);
