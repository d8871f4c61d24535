//! Benchmarks for field arithmetic over index-addressed elements.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gfcalc_field::irreducible::find_irreducible;
use gfcalc_field::number_theory::factor;
use gfcalc_field::{FastModulus, Field, Scratch};

fn field(order: u64) -> Field {
    let (p, k) = factor(order).unwrap();
    let irreducible = find_irreducible(FastModulus::new(p as u16), k).unwrap();
    Field::new(order, Some(&irreducible)).unwrap()
}

fn bench_fast_mod(c: &mut Criterion) {
    let mut group = c.benchmark_group("FastModulus");
    let m = FastModulus::new(65521);

    group.bench_function("reduce", |bencher| {
        bencher.iter(|| m.reduce(black_box(4_000_000_000)))
    });

    group.bench_function("remainder_operator", |bencher| {
        bencher.iter(|| black_box(4_000_000_000u64) % black_box(65521u64))
    });

    group.bench_function("inverse_table", |bencher| bencher.iter(|| m.inverse_table()));

    group.finish();
}

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field Operations");

    for order in [256u64, 2187, 65536] {
        let f = field(order);
        let (a, b) = (order / 3, order / 2 + 1);

        group.bench_with_input(BenchmarkId::new("add", order), &f, |bencher, f| {
            bencher.iter(|| f.add(black_box(a), black_box(b)))
        });

        group.bench_with_input(BenchmarkId::new("mul", order), &f, |bencher, f| {
            bencher.iter(|| f.mul(black_box(a), black_box(b)))
        });

        group.bench_with_input(BenchmarkId::new("mul_with", order), &f, |bencher, f| {
            let mut scratch = Scratch::new();
            bencher.iter(|| f.mul_with(&mut scratch, black_box(a), black_box(b)))
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("Division");
    group.sample_size(20);

    for order in [16u64, 256, 2187] {
        let f = field(order);
        group.bench_with_input(BenchmarkId::new("div", order), &f, |bencher, f| {
            let mut scratch = Scratch::new();
            bencher.iter(|| f.div_with(&mut scratch, black_box(1), black_box(order - 1)))
        });
    }

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let f = field(64);
    c.bench_function("multiplication_table_64", |bencher| {
        let mut scratch = Scratch::new();
        bencher.iter(|| {
            let mut sum = 0u64;
            for i in 0..64 {
                for j in 0..64 {
                    sum += f.mul_with(&mut scratch, i, j);
                }
            }
            sum
        })
    });
}

criterion_group!(
    benches,
    bench_fast_mod,
    bench_field_operations,
    bench_division,
    bench_table
);
criterion_main!(benches);
