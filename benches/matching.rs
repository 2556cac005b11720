//! Benchmarks for patdfa construction and scanning.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use patdfa::Dfa;

const TEXT: &str = "she sells seashells by the seashore; the shells she sells \
                    are surely seashells, so if she sells shells on the seashore, \
                    i'm sure she sells seashore shells";

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_short_pattern", |b| {
        b.iter(|| Dfa::new(black_box("seashells").chars()))
    });

    let long: String = "abcdefgh".repeat(64);
    c.bench_function("build_long_pattern", |b| {
        b.iter(|| Dfa::new(black_box(long.as_str()).chars()))
    });
}

fn bench_scan(c: &mut Criterion) {
    c.bench_function("scan_match_count", |b| {
        let mut dfa = Dfa::new("seashells".chars());
        b.iter(|| dfa.matches_in(black_box(TEXT).chars()).count())
    });

    c.bench_function("scan_no_match", |b| {
        let mut dfa = Dfa::new("zzzz".chars());
        b.iter(|| dfa.matches_in(black_box(TEXT).chars()).count())
    });

    c.bench_function("scan_step_loop", |b| {
        let mut dfa = Dfa::new("seashore".chars());
        b.iter(|| {
            dfa.reset();
            let mut hits = 0u32;
            for e in black_box(TEXT).chars() {
                dfa.step(&e);
                if dfa.is_at_final_state() {
                    hits += 1;
                    dfa.reset();
                }
            }
            hits
        })
    });
}

criterion_group!(benches, bench_build, bench_scan);
criterion_main!(benches);
