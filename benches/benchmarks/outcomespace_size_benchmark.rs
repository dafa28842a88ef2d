//! Construction and sampling time as the domain grows.
use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use expmech::{DPMechanism, Exponential, GeneratorOpenSSL};

/// Utilities `|i - j|` over `n` values.
fn utility_list(n: usize) -> Vec<(String, String, f64)> {
    let mut list = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            list.push((i.to_string(), j.to_string(), (j - i) as f64));
        }
    }
    list
}

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Exponential construction");
    for &n in [10usize, 50, 100].iter() {
        let list = utility_list(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &list, |b, list| {
            b.iter(|| Exponential::new(1.0, list.clone()).unwrap())
        });
    }
    group.finish();
}

pub fn sampling_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Exponential randomise");
    for &n in [10usize, 50, 100, 200].iter() {
        let mech = Exponential::new(1.0, utility_list(n)).unwrap();
        let mut rng = GeneratorOpenSSL {};
        group.bench_with_input(BenchmarkId::from_parameter(n), &mech, |b, mech| {
            b.iter(|| mech.randomise(black_box("0"), &mut rng).unwrap().len())
        });
    }
    group.finish();
}

criterion_group!(benches, construction_benchmark, sampling_benchmark);
