use proptest::prelude::*;

use crate::range::NumericRangeExclusive;

const POINT_MAX: i64 = 20;

/// Generate arbitrary (potentially negative!) endpoint pairs with bounds from
/// [0..[`POINT_MAX`]).
pub(crate) fn arbitrary_endpoints() -> impl Strategy<Value = (i64, i64)> {
    (0..POINT_MAX, 0..POINT_MAX)
}

/// Generate valid unit-step exclusive ranges with bounds from
/// [0..[`POINT_MAX`]).
pub(crate) fn arbitrary_valid_range() -> impl Strategy<Value = NumericRangeExclusive<i64>> {
    arbitrary_endpoints()
        .prop_map(|(a, b)| NumericRangeExclusive::new(a.min(b), a.max(b), 1))
}
