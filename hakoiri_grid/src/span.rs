// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 1-D half-open intervals along a single grid axis.
//!
//! Dividers and the auto-layout synthesizer work one axis at a time: the span
//! of a divider segment along its line, the horizontal extent of a sweet when
//! deciding whether it touches a candidate separator line, and the gaps
//! between merged groups of items that remain to be sealed. [`Span`] is the
//! shared vocabulary for all of those.

use alloc::vec::Vec;

/// A half-open interval `[start, end)` along one grid axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Inclusive start coordinate.
    pub start: i32,
    /// Exclusive end coordinate.
    pub end: i32,
}

impl Span {
    /// Creates a span from its endpoints.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Interval length; zero or negative means empty.
    #[must_use]
    pub const fn len(&self) -> i32 {
        self.end - self.start
    }

    /// Returns `true` if the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` if the two spans share interior, exclusive of touching.
    ///
    /// `[0,2)` and `[2,4)` do not overlap. Empty spans overlap nothing.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

/// Merges spans into maximal disjoint intervals.
///
/// Overlapping *and* adjacent spans coalesce: `[0,2)` and `[2,4)` merge into
/// `[0,4)`. Empty spans are discarded. The result is sorted by start.
#[must_use]
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted: Vec<Span> = spans.iter().copied().filter(|s| !s.is_empty()).collect();
    sorted.sort_unstable_by_key(|s| (s.start, s.end));

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Gaps left uncovered by `merged` within `bounds`.
///
/// `merged` must be the output of [`merge_spans`] (sorted, disjoint,
/// non-adjacent). Includes the leading gap from `bounds.start` to the first
/// interval and the trailing gap from the last interval to `bounds.end`.
/// Intervals are clipped to `bounds` before gap computation.
#[must_use]
pub fn span_gaps(merged: &[Span], bounds: Span) -> Vec<Span> {
    let mut gaps = Vec::new();
    let mut cursor = bounds.start;
    for span in merged {
        let start = span.start.max(bounds.start);
        let end = span.end.min(bounds.end);
        if end <= start {
            continue;
        }
        if start > cursor {
            gaps.push(Span::new(cursor, start));
        }
        cursor = cursor.max(end);
    }
    if cursor < bounds.end {
        gaps.push(Span::new(cursor, bounds.end));
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn overlap_is_exclusive_of_touching() {
        assert!(Span::new(0, 3).overlaps(&Span::new(2, 5)));
        assert!(!Span::new(0, 2).overlaps(&Span::new(2, 4)));
        assert!(!Span::new(0, 0).overlaps(&Span::new(0, 4)));
    }

    #[test]
    fn merge_coalesces_overlapping_and_adjacent() {
        let merged = merge_spans(&[
            Span::new(4, 6),
            Span::new(0, 2),
            Span::new(2, 4),
            Span::new(5, 8),
        ]);
        assert_eq!(merged, vec![Span::new(0, 8)]);
    }

    #[test]
    fn merge_keeps_disjoint_intervals_apart() {
        let merged = merge_spans(&[Span::new(6, 8), Span::new(0, 2), Span::new(3, 5)]);
        assert_eq!(
            merged,
            vec![Span::new(0, 2), Span::new(3, 5), Span::new(6, 8)]
        );
    }

    #[test]
    fn merge_drops_empty_spans() {
        assert_eq!(
            merge_spans(&[Span::new(3, 3), Span::new(1, 2)]),
            vec![Span::new(1, 2)]
        );
        assert!(merge_spans(&[]).is_empty());
    }

    #[test]
    fn gaps_include_leading_and_trailing() {
        let merged = vec![Span::new(2, 4), Span::new(6, 8)];
        let gaps = span_gaps(&merged, Span::new(0, 10));
        assert_eq!(
            gaps,
            vec![Span::new(0, 2), Span::new(4, 6), Span::new(8, 10)]
        );
    }

    #[test]
    fn full_coverage_yields_no_gaps() {
        assert!(span_gaps(&[Span::new(0, 10)], Span::new(0, 10)).is_empty());
    }

    #[test]
    fn empty_coverage_yields_one_gap() {
        assert_eq!(span_gaps(&[], Span::new(0, 5)), vec![Span::new(0, 5)]);
    }

    #[test]
    fn intervals_outside_bounds_are_clipped() {
        let merged = vec![Span::new(-3, 1), Span::new(9, 12)];
        let gaps = span_gaps(&merged, Span::new(0, 10));
        assert_eq!(gaps, vec![Span::new(1, 9)]);
    }
}
