use std::{fmt::Display, ops::Add};

mod date;
mod numeric;

pub use date::*;
pub use numeric::*;

/// A discretisable span of totally-ordered points.
///
/// A [`Range`] exposes its bounds and a lazy, finite, restartable sequence of
/// the discrete points it covers - each call to [`Range::points()`] yields a
/// fresh iterator starting over from [`Range::start()`].
///
/// Implementations come in two flavours per point domain: an "exclusive" form
/// that covers `start ≤ p < end`, and an "inclusive" form that folds its upper
/// bound into the exclusive representation at construction time by pushing the
/// stored end one step past the requested end. All downstream overlap logic
/// then uses a single half-open test regardless of which form was declared.
pub trait Range: Display {
    /// The endpoint value type.
    type Point: Clone;

    /// The iterator type returned by [`Range::points()`].
    type Iter: Iterator<Item = Self::Point>;

    /// The lower bound of this range.
    fn start(&self) -> Self::Point;

    /// The upper bound of this range, always exclusive.
    ///
    /// For inclusive range types this is the adjusted value (one step past the
    /// end given at construction), not the literal end the caller provided.
    fn end(&self) -> Self::Point;

    /// Yield the discretised points of this range: `start`, `start + step`,
    /// `start + 2*step`, and so on while strictly less than [`Range::end()`].
    fn points(&self) -> Self::Iter;
}

/// Push an upper bound one step past itself, converting an inclusive end into
/// the exclusive form used by the half-open overlap test.
pub(crate) fn bump_end<T, S>(end: T, step: S) -> T
where
    T: Add<S, Output = T>,
{
    end + step
}
