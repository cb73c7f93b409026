use std::{cmp::Ordering, collections::BTreeSet};

use crate::range::Range;

/// A single node in the centered tree.
///
/// Ranges are identified by their index into the caller's input slice. Each
/// index appears in exactly one node of the whole tree: either here in the
/// center set, or somewhere in the left/right subtrees (a true 3-way split).
#[derive(Debug, Clone)]
pub(crate) struct Node<P> {
    /// The start value of the median-by-start input range at this level.
    center: P,

    /// Indices of the ranges whose span covers `center`, sorted ascending by
    /// range start (ties keep input order).
    overlapping: Vec<usize>,

    /// Subtrees of the ranges strictly left and right of `center`.
    left: Option<Box<Node<P>>>,
    right: Option<Box<Node<P>>>,
}

impl<P> Node<P> {
    pub(crate) fn center(&self) -> &P {
        &self.center
    }

    pub(crate) fn overlapping(&self) -> &[usize] {
        &self.overlapping
    }

    pub(crate) fn left(&self) -> Option<&Node<P>> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Node<P>> {
        self.right.as_deref()
    }
}

/// Recursively partition `indices` (positions into `ranges`) into a subtree.
///
/// Picks the node center as the start of the median-by-start range (the lower
/// median, index `n >> 1`, for even counts), then splits every range into
/// exactly one of: left subtree (`end < center`), right subtree
/// (`start > center`), or this node's center set.
pub(crate) fn divide_intervals<R, F>(
    ranges: &[R],
    indices: Vec<usize>,
    cmp: &F,
) -> Option<Box<Node<R::Point>>>
where
    R: Range,
    F: Fn(&R::Point, &R::Point) -> Ordering + ?Sized,
{
    if indices.is_empty() {
        return None;
    }

    let center = center_point(ranges, &indices, cmp);

    let mut s_center = Vec::new();
    let mut s_left = Vec::new();
    let mut s_right = Vec::new();

    // Partition in input order so the recursion (and the center set tie
    // ordering) is deterministic.
    for i in indices {
        let r = &ranges[i];
        if cmp(&r.end(), &center) == Ordering::Less {
            s_left.push(i);
        } else if cmp(&r.start(), &center) == Ordering::Greater {
            s_right.push(i);
        } else {
            s_center.push(i);
        }
    }

    s_center.sort_by(|&a, &b| cmp(&ranges[a].start(), &ranges[b].start()));

    Some(Box::new(Node {
        center,
        overlapping: s_center,
        left: divide_intervals(ranges, s_left, cmp),
        right: divide_intervals(ranges, s_right, cmp),
    }))
}

/// Return the start of the median-by-start range in `indices`.
fn center_point<R, F>(ranges: &[R], indices: &[usize], cmp: &F) -> R::Point
where
    R: Range,
    F: Fn(&R::Point, &R::Point) -> Ordering + ?Sized,
{
    let mut by_start = indices.to_vec();
    by_start.sort_by(|&a, &b| cmp(&ranges[a].start(), &ranges[b].start()));

    ranges[by_start[by_start.len() >> 1]].start()
}

/// Collect into `hits` the indices of all ranges in the subtree rooted at
/// `node` that cover `point` under the half-open test
/// `start ≤ point < end`.
///
/// Recursion is directional: strictly left of the center descends left only,
/// strictly right descends right only, and a point equal to the center stops
/// here - both subtrees hold ranges strictly past the center by construction.
pub(crate) fn point_search<R, F>(
    node: &Node<R::Point>,
    ranges: &[R],
    point: &R::Point,
    cmp: &F,
    hits: &mut BTreeSet<usize>,
) where
    R: Range,
    F: Fn(&R::Point, &R::Point) -> Ordering + ?Sized,
{
    for &i in &node.overlapping {
        let r = &ranges[i];
        if cmp(&r.start(), point) != Ordering::Greater && cmp(&r.end(), point) == Ordering::Greater
        {
            hits.insert(i);
        }
    }

    match cmp(point, &node.center) {
        Ordering::Less => {
            if let Some(left) = node.left() {
                point_search(left, ranges, point, cmp, hits);
            }
        }
        Ordering::Greater => {
            if let Some(right) = node.right() {
                point_search(right, ranges, point, cmp, hits);
            }
        }
        Ordering::Equal => {}
    }
}
