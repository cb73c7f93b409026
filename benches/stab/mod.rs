use criterion::{
    measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use intermed::{IntervalTree, NumericRangeExclusive, Range};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}_values_{}_n_lookups", v.n_values, v.bench),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("stab");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Number of point lookups
        for n_lookups in [100, 1_000] {
            bench_param(&mut g, n_values, n_lookups)
        }
    }
}

/// For a tree over `n_values` ranges, perform two benchmarks that each stab
/// `n_lookups` points, one run causing hits, one run causing all misses.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_lookups: usize)
where
    M: Measurement,
{
    // The tree must be at least as big as the number of lookups.
    assert!(n_values >= n_lookups);

    // Generate the ranges and the tree over them.
    let mut rand = Lfsr::default();
    let ranges = (0..n_values)
        .map(|_| rand.next_range())
        .collect::<Vec<_>>();
    let t = IntervalTree::new(&ranges).unwrap();

    bench_hits(n_values, n_lookups, g, &ranges, &t);
    bench_misses(n_values, n_lookups, g, &ranges, &t);
}

macro_rules! stab_bench {
    (
        $name:ident,
        points = $points:expr,
        want_any_hit = $want_any_hit:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(
                n_values: usize,
                n_lookups: usize,
                g: &mut BenchmarkGroup<'_, M>,
                ranges: &[NumericRangeExclusive<i64>],
                t: &IntervalTree<'_, NumericRangeExclusive<i64>>,
            ) where
                M: Measurement,
            {
                let bench_name = BenchName {
                    bench: stringify!($name),
                    n_values,
                    n_lookups,
                };

                #[allow(clippy::redundant_closure_call)]
                let points: Vec<i64> = (0..n_lookups).map(|i| ($points)(ranges, i)).collect();

                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        let mut any_hit = false;
                        for p in &points {
                            any_hit |= !t.search_point(p).is_empty();
                        }
                        assert_eq!(any_hit, $want_any_hit);
                    })
                });
            }
        }
    };
}

// Stab the start point of every indexed range (a hit unless the range is
// empty).
stab_bench!(
    hits,
    points = |ranges: &[NumericRangeExclusive<i64>], i: usize| ranges[i].start(),
    want_any_hit = true
);

// Stab points past the value domain of the generated ranges.
stab_bench!(
    misses,
    points = |_ranges: &[NumericRangeExclusive<i64>], i: usize| 70_000 + i as i64,
    want_any_hit = false
);
