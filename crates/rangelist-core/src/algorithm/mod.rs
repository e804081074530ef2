// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Ordered Search
//!
//! Locate routines for slices that hold a canonical range list: intervals
//! sorted by start, pairwise disjoint and not touching.
//!
//! Adding and removing search along two different axes. An add is placed by
//! the start of its operand, while a removal is bounded by where it stops, so
//! there is one search keyed on interval starts and a separate one keyed on
//! interval ends. Both share the same tie-break rule: an exact key match
//! returns immediately, otherwise the lower bound advances past every element
//! whose key is smaller. On a canonical slice both keys are strictly
//! increasing, so the result is the first position whose key is `>= key`.

use crate::math::interval::ClosedOpenInterval;
use num_traits::PrimInt;

/// Checks whether the given intervals form a canonical range list.
///
/// Returns `true` if every interval is non-empty and each interval ends
/// strictly before the next one starts (no overlap, no touching).
#[inline(always)]
pub fn is_canonical<T>(intervals: &[ClosedOpenInterval<T>]) -> bool
where
    T: PrimInt,
{
    intervals.iter().all(|iv| !iv.is_empty())
        && intervals.windows(2).all(|w| w[0].end() < w[1].start())
}

/// Binary search over `key_of` with the shared tie-break rule.
#[inline(always)]
fn position_by<T, K>(intervals: &[ClosedOpenInterval<T>], key: T, key_of: K) -> usize
where
    T: PrimInt,
    K: Fn(&ClosedOpenInterval<T>) -> T,
{
    let mut lo: usize = 0;
    let mut hi: usize = intervals.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        debug_assert!(
            mid < intervals.len(),
            "search computed mid index out of bounds"
        );
        // SAFETY: mid is always in bounds because lo < hi <= intervals.len(),
        // therefore mid < intervals.len()
        let mid_key = key_of(unsafe { intervals.get_unchecked(mid) });
        if mid_key == key {
            return mid;
        }
        if mid_key < key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Returns the first position whose interval starts at or after `key`.
///
/// Returns `intervals.len()` if every interval starts before `key`.
///
/// # Panics
///
/// In debug builds, this function will panic if `intervals` is not canonical.
///
/// # Examples
///
/// ```rust
/// # use rangelist_core::algorithm::position_by_start;
/// # use rangelist_core::math::interval::ClosedOpenInterval;
///
/// let v = [ClosedOpenInterval::new(1, 5), ClosedOpenInterval::new(10, 21)];
/// assert_eq!(position_by_start(&v, 3), 1);
/// assert_eq!(position_by_start(&v, 10), 1);
/// assert_eq!(position_by_start(&v, 22), 2);
/// ```
#[inline]
pub fn position_by_start<T>(intervals: &[ClosedOpenInterval<T>], key: T) -> usize
where
    T: PrimInt,
{
    debug_assert!(
        is_canonical(intervals),
        "called `position_by_start` with intervals that are not canonical"
    );
    position_by(intervals, key, ClosedOpenInterval::start)
}

/// Returns the first position whose interval ends at or after `key`.
///
/// Returns `intervals.len()` if every interval ends before `key`.
///
/// # Panics
///
/// In debug builds, this function will panic if `intervals` is not canonical.
///
/// # Examples
///
/// ```rust
/// # use rangelist_core::algorithm::position_by_end;
/// # use rangelist_core::math::interval::ClosedOpenInterval;
///
/// let v = [ClosedOpenInterval::new(1, 8), ClosedOpenInterval::new(11, 21)];
/// assert_eq!(position_by_end(&v, 8), 0);
/// assert_eq!(position_by_end(&v, 9), 1);
/// assert_eq!(position_by_end(&v, 29), 2);
/// ```
#[inline]
pub fn position_by_end<T>(intervals: &[ClosedOpenInterval<T>], key: T) -> usize
where
    T: PrimInt,
{
    debug_assert!(
        is_canonical(intervals),
        "called `position_by_end` with intervals that are not canonical"
    );
    position_by(intervals, key, ClosedOpenInterval::end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    type IntegerType = i64;

    fn iv(s: IntegerType, e: IntegerType) -> ClosedOpenInterval<IntegerType> {
        ClosedOpenInterval::new(s, e)
    }

    #[test]
    fn test_is_canonical_true_empty() {
        let v: Vec<ClosedOpenInterval<IntegerType>> = vec![];
        assert!(is_canonical(&v));
    }

    #[test]
    fn test_is_canonical_true_multiple() {
        let v = vec![iv(0, 5), iv(6, 10), iv(12, 20)];
        assert!(is_canonical(&v));
    }

    #[test]
    fn test_is_canonical_false_touching() {
        // Touching intervals must have been merged
        let v = vec![iv(0, 5), iv(5, 10)];
        assert!(!is_canonical(&v));
    }

    #[test]
    fn test_is_canonical_false_overlap() {
        let v = vec![iv(0, 10), iv(9, 15)];
        assert!(!is_canonical(&v));
    }

    #[test]
    fn test_is_canonical_false_unsorted() {
        let v = vec![iv(10, 20), iv(0, 5)];
        assert!(!is_canonical(&v));
    }

    #[test]
    fn test_is_canonical_false_empty_interval() {
        let v = vec![iv(0, 5), iv(7, 7)];
        assert!(!is_canonical(&v));
    }

    #[test]
    fn test_position_by_start_basic() {
        let v = vec![iv(0, 5), iv(6, 10), iv(12, 20)];
        assert_eq!(position_by_start(&v, -1), 0);
        assert_eq!(position_by_start(&v, 0), 0);
        assert_eq!(position_by_start(&v, 4), 1);
        assert_eq!(position_by_start(&v, 6), 1);
        assert_eq!(position_by_start(&v, 7), 2);
        assert_eq!(position_by_start(&v, 12), 2);
        assert_eq!(position_by_start(&v, 21), 3);
    }

    #[test]
    fn test_position_by_end_basic() {
        let v = vec![iv(0, 5), iv(6, 10), iv(12, 20)];
        assert_eq!(position_by_end(&v, 0), 0);
        assert_eq!(position_by_end(&v, 5), 0);
        assert_eq!(position_by_end(&v, 6), 1);
        assert_eq!(position_by_end(&v, 10), 1);
        assert_eq!(position_by_end(&v, 11), 2);
        assert_eq!(position_by_end(&v, 20), 2);
        assert_eq!(position_by_end(&v, 21), 3);
    }

    #[test]
    fn test_positions_on_empty_slice() {
        let v: Vec<ClosedOpenInterval<IntegerType>> = vec![];
        assert_eq!(position_by_start(&v, 7), 0);
        assert_eq!(position_by_end(&v, 7), 0);
    }

    #[test]
    fn test_positions_match_partition_point() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..200 {
            // Build a random canonical list with gaps of at least one.
            let mut v = Vec::new();
            let mut cursor: IntegerType = rng.random_range(-50..50);
            for _ in 0..rng.random_range(0..12) {
                let start = cursor + rng.random_range(1..5);
                let end = start + rng.random_range(1..6);
                v.push(iv(start, end));
                cursor = end;
            }
            assert!(is_canonical(&v));

            for key in -60..cursor + 5 {
                assert_eq!(
                    position_by_start(&v, key),
                    v.partition_point(|x| x.start() < key)
                );
                assert_eq!(
                    position_by_end(&v, key),
                    v.partition_point(|x| x.end() < key)
                );
            }
        }
    }
}
