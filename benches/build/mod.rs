use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use intermed::IntervalTree;

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Benchmark constructing a tree over `n_values` random ranges.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let ranges = (0..n_values)
        .map(|_| rand.next_range())
        .collect::<Vec<_>>();

    g.throughput(Throughput::Elements(n_values as _)); // Ranges per second
    g.bench_function(BenchmarkId::new("n_values", n_values), |b| {
        b.iter_batched(
            || ranges.as_slice(),
            |ranges| IntervalTree::new(ranges).unwrap(),
            BatchSize::SmallInput,
        )
    });
}
