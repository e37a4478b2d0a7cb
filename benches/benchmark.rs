use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frac64::Fraction;
use rand;

fn random_fraction() -> Fraction {
    let nume = rand::random_range(-1_000_000..=1_000_000i64);
    let deno = rand::random_range(1..=1_000_000i64);
    Fraction::new(nume, deno).unwrap()
}

fn benchmark_construction(c: &mut Criterion) {
    c.bench_function("new(normalize)", |b| {
        b.iter(|| {
            Fraction::new(
                black_box(rand::random_range(-1_000_000..=1_000_000i64)),
                black_box(rand::random_range(1..=1_000_000i64)),
            )
        })
    });
}

fn benchmark_arithmetic(c: &mut Criterion) {
    c.bench_function("add(fraction)", |b| {
        let (x, y) = (random_fraction(), random_fraction());
        b.iter(|| black_box(x) + black_box(y))
    });

    c.bench_function("mul(fraction)", |b| {
        let (x, y) = (random_fraction(), random_fraction());
        b.iter(|| black_box(x) * black_box(y))
    });

    c.bench_function("add(f64)", |b| {
        let (x, y) = (random_fraction(), random_fraction());
        let (x, y) = (x.decimal_value(), y.decimal_value());
        b.iter(|| black_box(x) + black_box(y))
    });
}

criterion_group!(benches, benchmark_construction, benchmark_arithmetic);
criterion_main!(benches);
