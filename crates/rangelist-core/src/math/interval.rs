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

use num_traits::{PrimInt, ToPrimitive};
use std::{
    cmp::{max, min},
    iter::FusedIterator,
};

/// Selects how the start bounds are compared in [`ClosedOpenInterval::wraps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartBound {
    /// The enclosing interval may start at the same point as the enclosed one.
    Inclusive,
    /// The enclosing interval must start strictly before the enclosed one.
    Exclusive,
}

/// A half-open interval `[start, end)` defined by a start (inclusive) and end (exclusive).
///
/// Range lists store these as their elements and also use them to carry the
/// operand of an add or remove. The boundaries are mutable so that a store can
/// trim, extend or split an element in place.
///
/// # Invariants
/// `start_inclusive` must always be less than or equal to `end_exclusive`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedOpenInterval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_exclusive: T,
}

/// An iterator over the integer points contained within a `ClosedOpenInterval`.
///
/// # Examples
///
/// ```rust
/// # use rangelist_core::math::interval::ClosedOpenInterval;
///
/// let iv = ClosedOpenInterval::new(1, 5);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct ClosedOpenIntervalIterator<T>
where
    T: PrimInt,
{
    end_exclusive: T,
    current: T,
}

impl<T> Iterator for ClosedOpenIntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            let result = self.current;
            self.current = self.current + T::one();
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match remaining(self.current, self.end_exclusive) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for ClosedOpenIntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            self.end_exclusive = self.end_exclusive - T::one();
            Some(self.end_exclusive)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for ClosedOpenIntervalIterator<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        remaining(self.current, self.end_exclusive)
            .expect("ClosedOpenIntervalIterator: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for ClosedOpenIntervalIterator<T> where T: PrimInt {}

/// Number of points in `[from, to)`, or `None` if it does not fit in a `usize`.
///
/// Signed intervals wider than `T::max_value()` overflow `to - from`; those are
/// measured in `i128` instead.
fn remaining<T>(from: T, to: T) -> Option<usize>
where
    T: PrimInt,
{
    if to <= from {
        return Some(0);
    }
    match to.checked_sub(&from) {
        Some(dist) => dist.to_usize(),
        None => to.to_i128()?.checked_sub(from.to_i128()?)?.to_usize(),
    }
}

impl<T> ClosedOpenInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedOpenInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(0, 10);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T) -> Self {
        assert!(
            start_inclusive <= end_exclusive,
            "Invalid range: start must be less than or equal to end"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates a new `ClosedOpenInterval` if the inputs are valid.
    ///
    /// Returns `None` if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// assert!(ClosedOpenInterval::try_new(0, 10).is_some());
    /// assert!(ClosedOpenInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_exclusive: T) -> Option<Self> {
        if start_inclusive <= end_exclusive {
            Some(Self {
                start_inclusive,
                end_exclusive,
            })
        } else {
            None
        }
    }

    /// Creates a new `ClosedOpenInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `start_inclusive <= end_exclusive`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start_inclusive: T, end_exclusive: T) -> Self {
        debug_assert!(
            start_inclusive <= end_exclusive,
            "Invalid range: start must be less than or equal to end"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Returns the inclusive start bound of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the exclusive end bound of the interval.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Moves the inclusive start bound to `start`.
    ///
    /// In debug builds this asserts that the interval does not become inverted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// let mut iv = ClosedOpenInterval::new(10, 21);
    /// iv.set_start(11);
    /// assert_eq!(iv, ClosedOpenInterval::new(11, 21));
    /// ```
    #[inline]
    pub fn set_start(&mut self, start: T) {
        debug_assert!(
            start <= self.end_exclusive,
            "called `set_start` with a start past the end of the interval"
        );
        self.start_inclusive = start;
    }

    /// Moves the exclusive end bound to `end`.
    ///
    /// In debug builds this asserts that the interval does not become inverted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// let mut iv = ClosedOpenInterval::new(1, 5);
    /// iv.set_end(8);
    /// assert_eq!(iv, ClosedOpenInterval::new(1, 8));
    /// ```
    #[inline]
    pub fn set_end(&mut self, end: T) {
        debug_assert!(
            self.start_inclusive <= end,
            "called `set_end` with an end before the start of the interval"
        );
        self.end_exclusive = end;
    }

    /// Returns `true` if this interval fully encloses `other`.
    ///
    /// The end bounds are always compared inclusively (`self.end >= other.end`).
    /// The start bounds are compared according to `start_bound`: with
    /// [`StartBound::Exclusive`] an interval that begins at the same point as
    /// `other` does not wrap it. Removal relies on that distinction to tell a
    /// removal touching the left edge apart from one strictly inside.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::{ClosedOpenInterval, StartBound};
    ///
    /// let a = ClosedOpenInterval::new(10, 21);
    /// assert!(a.wraps(&ClosedOpenInterval::new(10, 11), StartBound::Inclusive));
    /// assert!(!a.wraps(&ClosedOpenInterval::new(10, 11), StartBound::Exclusive));
    /// assert!(a.wraps(&ClosedOpenInterval::new(15, 17), StartBound::Exclusive));
    /// ```
    #[inline]
    pub fn wraps(&self, other: &Self, start_bound: StartBound) -> bool {
        let start_ok = match start_bound {
            StartBound::Inclusive => self.start_inclusive <= other.start_inclusive,
            StartBound::Exclusive => self.start_inclusive < other.start_inclusive,
        };
        start_ok && self.end_exclusive >= other.end_exclusive
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// Unlike [`contains_point`](Self::contains_point) the end bound counts as
    /// contained here. Removal uses this to decide whether the interval left of
    /// the removed range has to be trimmed back to the removal start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start_inclusive <= value && self.end_exclusive >= value
    }

    /// Returns `true` if `value` is contained in the interval `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(9));
    /// assert!(!iv.contains_point(10));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start_inclusive <= value && value < self.end_exclusive
    }

    /// Returns `true` if the intervals either intersect or share a boundary.
    ///
    /// Two intervals for which this holds must be merged before they can be
    /// stored side by side in a range list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0, 10);
    /// assert!(a.touches_or_overlaps(&ClosedOpenInterval::new(10, 20))); // Touching
    /// assert!(a.touches_or_overlaps(&ClosedOpenInterval::new(5, 15)));  // Overlapping
    /// assert!(!a.touches_or_overlaps(&ClosedOpenInterval::new(12, 20))); // Gap
    /// ```
    #[inline]
    pub fn touches_or_overlaps(&self, other: &Self) -> bool {
        self.start_inclusive <= other.end_exclusive && other.start_inclusive <= self.end_exclusive
    }

    /// Grows this interval to the smallest interval covering both `self` and `other`.
    ///
    /// Only meaningful when [`touches_or_overlaps`](Self::touches_or_overlaps) holds,
    /// otherwise the gap between the two would be absorbed as well.
    #[inline]
    pub fn absorb(&mut self, other: &Self) {
        debug_assert!(
            self.touches_or_overlaps(other),
            "called `absorb` with an interval separated by a gap"
        );
        self.start_inclusive = min(self.start_inclusive, other.start_inclusive);
        self.end_exclusive = max(self.end_exclusive, other.end_exclusive);
    }

    /// Returns the length of the interval (`end - start`), saturating at
    /// `T::max_value()` when the distance does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// assert_eq!(ClosedOpenInterval::new(10, 20).len(), 10);
    /// assert_eq!(ClosedOpenInterval::new(i8::MIN, i8::MAX).len(), i8::MAX);
    /// ```
    #[inline]
    pub fn len(&self) -> T {
        self.end_exclusive
            .checked_sub(&self.start_inclusive)
            .unwrap_or_else(T::max_value)
    }

    /// Returns `true` if the interval is empty (`start == end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// assert!(ClosedOpenInterval::new(10, 10).is_empty());
    /// assert!(!ClosedOpenInterval::new(10, 11).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    /// Creates an iterator over the points in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangelist_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(1, 4);
    /// let points: Vec<_> = iv.iter().collect();
    /// assert_eq!(points, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ClosedOpenIntervalIterator<T> {
        ClosedOpenIntervalIterator {
            end_exclusive: self.end_exclusive,
            current: self.start_inclusive,
        }
    }
}

impl<T> std::fmt::Debug for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedOpenInterval")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_exclusive", &self.end_exclusive)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedOpenInterval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start_inclusive)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end_exclusive)
    }
}

impl<T> IntoIterator for ClosedOpenInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedOpenIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedOpenInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedOpenIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for ClosedOpenInterval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<ClosedOpenInterval<T>> for std::ops::Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: ClosedOpenInterval<T>) -> Self {
        std::ops::Range {
            start: iv.start_inclusive,
            end: iv.end_exclusive,
        }
    }
}
