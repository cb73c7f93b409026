use std::{cmp::Ordering, collections::BTreeSet, fmt::Debug};

use crate::{
    error::NegativeRangeError,
    node::{divide_intervals, point_search, Node},
    range::Range,
};

/// The injected total order over endpoint values.
type Comparator<'a, P> = Box<dyn Fn(&P, &P) -> Ordering + 'a>;

/// A static centered interval tree over a borrowed slice of ranges.
///
/// The tree is built once by [`IntervalTree::new()`] (or
/// [`IntervalTree::with_comparator()`]) and is read-only thereafter - there is
/// no insertion, removal or rebalancing. It never copies the input ranges;
/// search results borrow straight from the caller's slice.
///
/// # Query model
///
/// [`IntervalTree::search_point()`] walks the tree once. A range matches a
/// point `p` iff `start ≤ p < end` - the inclusive range types fold their
/// upper bound into this half-open form at construction, so a single test
/// covers both policies.
///
/// [`IntervalTree::search_range()`] decomposes the query into its discretised
/// point sequence and stabs the tree once per point, merging the hits. Its
/// cost therefore scales with the number of points the query range produces,
/// not just the tree depth - pick the query step accordingly.
///
/// Both return their results deduplicated (by input-slice identity, not value
/// equality) and sorted ascending by `(start, end)`.
///
/// # Example
///
/// ```
/// use intermed::{IntervalTree, NumericRangeInclusive, Range};
///
/// let ranges = vec![
///     NumericRangeInclusive::new(1, 5, 1),
///     NumericRangeInclusive::new(4, 7, 1),
///     NumericRangeInclusive::new(10, 15, 1),
/// ];
///
/// let tree = IntervalTree::new(&ranges)?;
///
/// let hits = tree.search_point(&4);
/// assert_eq!(hits.len(), 2);
/// assert_eq!(hits[0].start(), 1);
/// assert_eq!(hits[1].start(), 4);
/// # Ok::<(), intermed::NegativeRangeError>(())
/// ```
pub struct IntervalTree<'a, R: Range> {
    ranges: &'a [R],
    root: Option<Box<Node<R::Point>>>,
    cmp: Comparator<'a, R::Point>,
}

impl<R> Debug for IntervalTree<'_, R>
where
    R: Range,
    R::Point: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTree")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<'a, R> IntervalTree<'a, R>
where
    R: Range,
    R::Point: Ord,
{
    /// Build a tree over `ranges` using the natural [`Ord`] ordering of the
    /// endpoint values.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeRangeError`] if any range has `start > end`.
    pub fn new(ranges: &'a [R]) -> Result<Self, NegativeRangeError> {
        Self::with_comparator(ranges, |a: &R::Point, b: &R::Point| a.cmp(b))
    }
}

impl<'a, R> IntervalTree<'a, R>
where
    R: Range,
{
    /// Build a tree over `ranges` using a caller-supplied comparator.
    ///
    /// The comparator is stored once and used for every comparison the tree
    /// makes: construction-time validation, center selection, partitioning,
    /// overlap tests and result ordering. It must be a pure, consistent total
    /// order over the endpoint domain; supplying anything else leaves the
    /// tree's behaviour undefined (this is not detected at runtime).
    ///
    /// # Errors
    ///
    /// Returns [`NegativeRangeError`] if any range has `start > end` under
    /// `cmp` - the whole construction fails, nothing is swapped or dropped.
    pub fn with_comparator<F>(ranges: &'a [R], cmp: F) -> Result<Self, NegativeRangeError>
    where
        F: Fn(&R::Point, &R::Point) -> Ordering + 'a,
    {
        for (index, range) in ranges.iter().enumerate() {
            if cmp(&range.start(), &range.end()) == Ordering::Greater {
                return Err(NegativeRangeError::new(index, range));
            }
        }

        let root = divide_intervals(ranges, (0..ranges.len()).collect(), &cmp);

        Ok(Self {
            ranges,
            root,
            cmp: Box::new(cmp),
        })
    }

    /// Return all ranges covering `point`, ordered ascending by
    /// `(start, end)`.
    ///
    /// An empty tree yields an empty `Vec`.
    pub fn search_point(&self, point: &R::Point) -> Vec<&'a R> {
        let mut hits = BTreeSet::new();

        if let Some(root) = self.root.as_deref() {
            point_search(root, self.ranges, point, &*self.cmp, &mut hits);
        }

        self.collect_sorted(hits)
    }

    /// Return all ranges overlapping any discretised point of `query`,
    /// ordered ascending by `(start, end)`.
    ///
    /// The query may be any [`Range`] over the same point domain - it does
    /// not have to be the same concrete type as the indexed ranges. Each
    /// range appears at most once in the result, no matter how many query
    /// points it covers.
    pub fn search_range<Q>(&self, query: &Q) -> Vec<&'a R>
    where
        Q: Range<Point = R::Point>,
    {
        let mut hits = BTreeSet::new();

        if let Some(root) = self.root.as_deref() {
            for point in query.points() {
                point_search(root, self.ranges, &point, &*self.cmp, &mut hits);
            }
        }

        self.collect_sorted(hits)
    }

    /// Resolve accumulated hit indices into ranges sorted by `(start, end)`.
    fn collect_sorted(&self, hits: BTreeSet<usize>) -> Vec<&'a R> {
        let mut hits = hits.into_iter().collect::<Vec<_>>();

        hits.sort_by(|&a, &b| {
            let (a, b) = (&self.ranges[a], &self.ranges[b]);
            match (self.cmp)(&a.start(), &b.start()) {
                Ordering::Equal => (self.cmp)(&a.end(), &b.end()),
                v => v,
            }
        });

        hits.into_iter().map(|i| &self.ranges[i]).collect()
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node<R::Point>> {
        self.root.as_deref()
    }
}
