use std::{
    fmt::{self, Display},
    ops::Add,
};

use super::{bump_end, Range};

/// A numeric range covering `start ≤ p < end`, discretised in increments of
/// `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRangeExclusive<T> {
    start: T,
    end: T,
    step: T,
}

impl<T> NumericRangeExclusive<T> {
    /// Construct a range covering `start ≤ p < end`.
    ///
    /// The `step` controls the point sequence produced by
    /// [`Range::points()`] only - it has no effect on overlap searches. A
    /// step of one yields every integer in the span.
    pub fn new(start: T, end: T, step: T) -> Self {
        Self { start, end, step }
    }
}

impl<T> Display for NumericRangeExclusive<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl<T> Range for NumericRangeExclusive<T>
where
    T: Copy + PartialOrd + Add<Output = T> + Display,
{
    type Point = T;
    type Iter = StepIter<T>;

    fn start(&self) -> T {
        self.start
    }

    fn end(&self) -> T {
        self.end
    }

    fn points(&self) -> StepIter<T> {
        StepIter {
            next: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

/// A numeric range covering `start ≤ p ≤ end`, discretised in increments of
/// `step`.
///
/// Stored as the equivalent exclusive range `start ≤ p < end + step`, so the
/// half-open overlap test covers both forms uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRangeInclusive<T> {
    start: T,
    end: T,
    step: T,
}

impl<T> NumericRangeInclusive<T>
where
    T: Copy + Add<Output = T>,
{
    /// Construct a range covering `start ≤ p ≤ end`.
    ///
    /// Note that when `end - start` is not an exact multiple of `step`, the
    /// point sequence runs one step past `end`: the stored upper bound is
    /// `end + step`, and iteration stops at the last point strictly below it.
    /// `(10, 15, 2)` therefore yields `10, 12, 14, 16`.
    pub fn new(start: T, end: T, step: T) -> Self {
        Self {
            start,
            end: bump_end(end, step),
            step,
        }
    }
}

impl<T> Display for NumericRangeInclusive<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl<T> Range for NumericRangeInclusive<T>
where
    T: Copy + PartialOrd + Add<Output = T> + Display,
{
    type Point = T;
    type Iter = StepIter<T>;

    fn start(&self) -> T {
        self.start
    }

    fn end(&self) -> T {
        self.end
    }

    fn points(&self) -> StepIter<T> {
        StepIter {
            next: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

/// Iterator over the step-spaced points of a numeric range.
#[derive(Debug, Clone)]
pub struct StepIter<T> {
    next: T,
    end: T,
    step: T,
}

impl<T> Iterator for StepIter<T>
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next < self.end {
            let v = self.next;
            self.next = v + self.step;
            Some(v)
        } else {
            None
        }
    }
}
