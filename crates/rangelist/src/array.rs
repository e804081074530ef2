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

//! Array-backed range list.
//!
//! `ArrayRangeList<T>` keeps its intervals in a contiguous `Vec`, sorted by
//! start. Every operation first locates its splice points with a binary search
//! (`O(log n)`) and then edits the vector in place: inserting, resizing or
//! draining a run of elements.
//!
//! Adding searches by interval start only. Removing searches twice: once by
//! start for where the removal begins, and once by end for where it stops,
//! since the element that survives to the right of a removal is identified by
//! its end rather than its start.

use crate::{chain::ChainRangeList, store::RangeStore};
use log::trace;
use num_traits::PrimInt;
use rangelist_core::{
    algorithm::{is_canonical, position_by_end, position_by_start},
    math::interval::{ClosedOpenInterval, StartBound},
};
use std::{fmt::Display, ops::Range};

/// A canonical list of disjoint half-open ranges stored in a sorted `Vec`.
///
/// # Examples
///
/// ```rust
/// # use rangelist::array::ArrayRangeList;
/// # use rangelist::store::RangeStore;
///
/// let mut list = ArrayRangeList::new();
/// list.add(1..5);
/// list.add(10..20);
/// list.add(20..21);
/// assert_eq!(list.to_string(), "[1,5) [10,21)");
///
/// list.remove(15..17);
/// assert_eq!(list.to_string(), "[1,5) [10,15) [17,21)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ArrayRangeList<T>
where
    T: PrimInt,
{
    intervals: Vec<ClosedOpenInterval<T>>,
}

impl<T> ArrayRangeList<T>
where
    T: PrimInt + Display,
{
    /// Creates a new, empty list. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a new, empty list able to hold `capacity` intervals without
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Returns the stored intervals as a sorted, canonical slice.
    #[inline]
    pub fn as_slice(&self) -> &[ClosedOpenInterval<T>] {
        &self.intervals
    }

    /// Places `candidate` at `position`, the first element starting at or
    /// after the candidate.
    ///
    /// Returns `false` if the element already there covers the candidate and
    /// nothing changed.
    #[inline]
    fn upsert_at(&mut self, position: usize, candidate: ClosedOpenInterval<T>) -> bool {
        match self.intervals.get_mut(position) {
            Some(existing) if existing.wraps(&candidate, StartBound::Inclusive) => {
                trace!("add {}: already covered by {}", candidate, existing);
                return false;
            }
            Some(existing) if existing.start() == candidate.start() => {
                trace!("add {}: extending {} in place", candidate, existing);
                existing.set_end(candidate.end());
            }
            _ => {
                trace!("add {}: inserting at {}", candidate, position);
                self.intervals.insert(position, candidate);
            }
        }
        true
    }

    /// Merges the element at `position` with its predecessor and with every
    /// following element it overlaps or touches.
    ///
    /// A single forward sweep suffices because an upsert changes exactly one
    /// element, so overlaps can only form in a contiguous run around it.
    fn coalesce_from(&mut self, position: usize) {
        debug_assert!(position < self.intervals.len());

        let head = match position.checked_sub(1) {
            Some(previous)
                if self.intervals[previous].end() >= self.intervals[position].start() =>
            {
                previous
            }
            _ => position,
        };

        let mut merged = self.intervals[head];
        let mut scan = head + 1;
        while scan < self.intervals.len() && merged.end() >= self.intervals[scan].start() {
            merged.absorb(&self.intervals[scan]);
            scan += 1;
        }

        if scan > head + 1 {
            trace!("add: merged {} intervals into {}", scan - head, merged);
            self.intervals[head] = merged;
            self.intervals.drain(head + 1..scan);
        }
    }

    /// Applies the removal of `candidate` given its two located positions.
    ///
    /// `from` is the first element starting at or after the removal start and
    /// `to` the first element ending at or after the removal end.
    fn delete_between(&mut self, from: usize, to: usize, candidate: ClosedOpenInterval<T>) {
        // Exclusive upper bound of the run that is dropped entirely.
        let mut upper = to + 1;

        if let Some(last) = self.intervals.get_mut(to) {
            if last.wraps(&candidate, StartBound::Exclusive) {
                let old_end = last.end();
                last.set_end(candidate.start());
                if old_end > candidate.end() {
                    let remainder = ClosedOpenInterval::new_unchecked(candidate.end(), old_end);
                    trace!(
                        "remove {}: split into {} and {}",
                        candidate, last, remainder
                    );
                    self.intervals.insert(to + 1, remainder);
                } else {
                    trace!("remove {}: trimmed right edge to {}", candidate, last);
                }
                return;
            }

            if last.end() != candidate.end() {
                // Survives to the right of the removal.
                if last.start() < candidate.end() {
                    last.set_start(candidate.end());
                    trace!("remove {}: trimmed left edge to {}", candidate, last);
                }
                upper = to;
            }
        }

        if let Some(previous) = from.checked_sub(1).and_then(|p| self.intervals.get_mut(p)) {
            if previous.start() != candidate.start() && previous.contains(candidate.start()) {
                previous.set_end(candidate.start());
                trace!("remove {}: trimmed right edge to {}", candidate, previous);
            }
        }

        let upper = upper.min(self.intervals.len());
        if from < upper {
            trace!(
                "remove {}: dropping {} covered intervals",
                candidate,
                upper - from
            );
            self.intervals.drain(from..upper);
        }
    }

    #[inline(always)]
    fn debug_assert_canonical(&self) {
        debug_assert!(
            is_canonical(&self.intervals),
            "range list lost its canonical form"
        );
    }
}

impl<T> RangeStore<T> for ArrayRangeList<T>
where
    T: PrimInt + Display,
{
    type Iter<'a>
        = std::slice::Iter<'a, ClosedOpenInterval<T>>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, range: Range<T>) {
        let candidate = ClosedOpenInterval::from(range);
        if candidate.is_empty() {
            return;
        }

        if self.intervals.is_empty() {
            trace!("add {}: first interval", candidate);
            self.intervals.push(candidate);
            return;
        }

        let position = position_by_start(&self.intervals, candidate.start());
        if self.upsert_at(position, candidate) {
            self.coalesce_from(position);
        }
        self.debug_assert_canonical();
    }

    fn remove(&mut self, range: Range<T>) {
        let candidate = ClosedOpenInterval::from(range);
        if self.intervals.is_empty() || candidate.is_empty() {
            return;
        }

        let from = position_by_start(&self.intervals, candidate.start());
        let to = position_by_end(&self.intervals, candidate.end());
        self.delete_between(from, to, candidate);
        self.debug_assert_canonical();
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.intervals.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.intervals.clear();
    }
}

impl<T> std::fmt::Display for ArrayRangeList<T>
where
    T: PrimInt + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.display(), f)
    }
}

impl<'a, T> IntoIterator for &'a ArrayRangeList<T>
where
    T: PrimInt + Display,
{
    type Item = &'a ClosedOpenInterval<T>;
    type IntoIter = std::slice::Iter<'a, ClosedOpenInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<Range<T>> for ArrayRangeList<T>
where
    T: PrimInt + Display,
{
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl<T> FromIterator<Range<T>> for ArrayRangeList<T>
where
    T: PrimInt + Display,
{
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<&ChainRangeList<T>> for ArrayRangeList<T>
where
    T: PrimInt + Display,
{
    /// Copies the canonical enumeration of `chain`; no merging is needed.
    fn from(chain: &ChainRangeList<T>) -> Self {
        let list = Self {
            intervals: chain.iter().copied().collect(),
        };
        list.debug_assert_canonical();
        list
    }
}
