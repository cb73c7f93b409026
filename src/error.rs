use std::{error::Error, fmt};

/// The error returned when building an [`IntervalTree`] from an input
/// containing a range whose start lies after its end.
///
/// Carries the position of the offending range in the input slice and its
/// rendered form for diagnostics.
///
/// [`IntervalTree`]: crate::IntervalTree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeRangeError {
    index: usize,
    range: String,
}

impl NegativeRangeError {
    pub(crate) fn new<R>(index: usize, range: &R) -> Self
    where
        R: fmt::Display,
    {
        Self {
            index,
            range: range.to_string(),
        }
    }

    /// The position of the offending range in the input slice.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NegativeRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "range {} at index {} is negative (maybe you entered the range in reverse order?)",
            self.range, self.index
        )
    }
}

impl Error for NegativeRangeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::NumericRangeExclusive;

    #[test]
    fn test_display() {
        let err = NegativeRangeError::new(3, &NumericRangeExclusive::new(9, 2, 1));

        assert_eq!(
            err.to_string(),
            "range 9..2 at index 3 is negative (maybe you entered the range in reverse order?)"
        );
        assert_eq!(err.index(), 3);
    }
}
