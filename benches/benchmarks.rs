//! Performance benchmarks for SUFT
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use suft::tree::{Alphabet, SuffixTree};

/// Deterministic pseudo-random lowercase text (xorshift, no RNG dependency).
fn synthetic_text(len: usize) -> Vec<u8> {
    let mut state = 0x9e3779b97f4a7c15u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b'a' + (state % 26) as u8
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &size in &[1_000usize, 10_000, 100_000] {
        let text = synthetic_text(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| SuffixTree::build(black_box(text.clone()), Alphabet::lowercase()).unwrap())
        });
    }

    // maximal edge-splitting pressure: a single repeated letter
    let runs = vec![b'a'; 10_000];
    group.bench_function("single_letter_10k", |b| {
        b.iter(|| SuffixTree::build(black_box(runs.clone()), Alphabet::lowercase()).unwrap())
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let text = synthetic_text(100_000);
    let tree = SuffixTree::build(text.clone(), Alphabet::lowercase()).unwrap();

    // 64 patterns cut from the text itself, so every lookup succeeds
    let present: Vec<&[u8]> = (0..64).map(|i| &text[i * 512..i * 512 + 20]).collect();

    let mut group = c.benchmark_group("queries");

    group.bench_function("present_20b_x64", |b| {
        b.iter(|| {
            for pattern in &present {
                black_box(tree.index_of(pattern));
            }
        })
    });

    group.bench_function("absent_21b", |b| {
        b.iter(|| black_box(tree.index_of(b"zzzzzzzzzzzzzzzzzzzzz")))
    });

    group.bench_function("batch_parallel_x64", |b| {
        b.iter(|| black_box(tree.index_of_batch(&present)))
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
