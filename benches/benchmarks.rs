// benches/benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nums::fraction::Fraction;
use nums::integer_math::{gcf, PrimeSieve};
use nums::number_theory::{integral, integral_of, IntegralMethod, IntegralOptions};
use nums::sequences::{fib, is_prime};

fn bench_primes(c: &mut Criterion) {
    c.bench_function("sieve 1_000_000", |b| b.iter(|| PrimeSieve::new(black_box(1_000_000)).map(|s| s.count())));
    c.bench_function("segment 1e9..1e9+100_000", |b| {
        b.iter(|| PrimeSieve::segment(black_box(1_000_000_000), black_box(1_000_100_000)))
    });
    c.bench_function("trial division 1_000_003", |b| b.iter(|| is_prime(black_box(1_000_003))));
}

fn bench_fractions(c: &mut Criterion) {
    let a = Fraction::new(355, 113).unwrap();
    let d = Fraction::new(22, 7).unwrap();
    c.bench_function("fraction add", |b| b.iter(|| black_box(a) + black_box(d)));
    c.bench_function("gcf", |b| b.iter(|| gcf(black_box(1_234_567_890i64), black_box(987_654_321i64))));
}

fn bench_integral(c: &mut Criterion) {
    let options = IntegralOptions { method: IntegralMethod::Simpson, ..Default::default() };
    c.bench_function("integral closure", |b| b.iter(|| integral(|x| x * x, black_box(&options))));
    c.bench_function("integral expression", |b| b.iter(|| integral_of(black_box("x**2"), &options)));
    c.bench_function("fib 1000", |b| b.iter(|| fib(black_box(1000))));
}

criterion_group!(benches, bench_primes, bench_fractions, bench_integral);
criterion_main!(benches);
