use std::fmt::{self, Display};

use chrono::{DateTime, Duration, Utc};

use super::{bump_end, Range};

/// A date/time range covering `start ≤ p < end`, discretised in increments of
/// a [`Duration`] step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeExclusive {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

impl DateRangeExclusive {
    /// Construct a range covering `start ≤ p < end`, stepping by `step`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, step: Duration) -> Self {
        Self { start, end, step }
    }

    /// Construct a range covering `start ≤ p < end` with a one day step.
    pub fn days(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(start, end, Duration::days(1))
    }
}

impl Display for DateRangeExclusive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl Range for DateRangeExclusive {
    type Point = DateTime<Utc>;
    type Iter = DateIter;

    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }

    fn points(&self) -> DateIter {
        DateIter {
            next: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

/// A date/time range covering `start ≤ p ≤ end`, discretised in increments of
/// a [`Duration`] step.
///
/// Stored as the equivalent exclusive range ending one step past `end`, so the
/// half-open overlap test covers both forms uniformly. As with
/// [`NumericRangeInclusive`], a span that is not an exact multiple of the step
/// iterates one step past the literal end.
///
/// [`NumericRangeInclusive`]: crate::NumericRangeInclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeInclusive {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

impl DateRangeInclusive {
    /// Construct a range covering `start ≤ p ≤ end`, stepping by `step`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, step: Duration) -> Self {
        Self {
            start,
            end: bump_end(end, step),
            step,
        }
    }

    /// Construct a range covering `start ≤ p ≤ end` with a one day step.
    pub fn days(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(start, end, Duration::days(1))
    }
}

impl Display for DateRangeInclusive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl Range for DateRangeInclusive {
    type Point = DateTime<Utc>;
    type Iter = DateIter;

    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }

    fn points(&self) -> DateIter {
        DateIter {
            next: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

/// Iterator over the step-spaced points of a date/time range.
#[derive(Debug, Clone)]
pub struct DateIter {
    next: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

impl Iterator for DateIter {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        if self.next < self.end {
            let v = self.next;
            self.next = v + self.step;
            Some(v)
        } else {
            None
        }
    }
}
