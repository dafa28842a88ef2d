//! Translation of balanced hierarchies of increasing height.
use criterion::{criterion_group, BenchmarkId, Criterion};
use expmech::{ExponentialHierarchical, Node};

/// A hierarchy where every group has `width` children, `height` levels deep.
fn balanced(width: usize, height: usize, prefix: String) -> Vec<Node> {
    (0..width)
        .map(|i| {
            let name = format!("{}{}", prefix, i);
            if height == 1 {
                Node::leaf(name)
            } else {
                Node::Group(balanced(width, height - 1, format!("{}.", name)))
            }
        })
        .collect()
}

pub fn hierarchy_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hierarchy construction");
    for &height in [1usize, 2, 3].iter() {
        let hierarchy = balanced(4, height, String::new());
        group.bench_with_input(BenchmarkId::from_parameter(height), &hierarchy, |b, hierarchy| {
            b.iter(|| ExponentialHierarchical::new(1.0, hierarchy.clone()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, hierarchy_benchmark);
