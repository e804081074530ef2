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

//! Chain-backed range list.
//!
//! `ChainRangeList<T>` keeps its intervals in a singly linked chain of owned
//! nodes, each node exclusively owning its successor. Operations walk the
//! chain from the head while holding the link (`&mut Option<Box<Node>>`) that
//! leads to the current node, so a node can be spliced in front of, or cut out
//! at, the current position without a back pointer. Locating is linear in the
//! number of stored intervals.
//!
//! Traversal is iterative throughout, including teardown: dropping a long
//! chain unlinks one node at a time instead of recursing through `Box` drops.

use crate::{array::ArrayRangeList, store::RangeStore};
use log::trace;
use num_traits::PrimInt;
use rangelist_core::math::interval::{ClosedOpenInterval, StartBound};
use std::{fmt::Display, iter::FusedIterator, ops::Range};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T>
where
    T: PrimInt,
{
    interval: ClosedOpenInterval<T>,
    next: Link<T>,
}

impl<T> Node<T>
where
    T: PrimInt,
{
    #[inline]
    fn boxed(interval: ClosedOpenInterval<T>, next: Link<T>) -> Box<Self> {
        Box::new(Self { interval, next })
    }
}

/// Advances `link` past every node whose interval satisfies `skip`.
///
/// Returns the link leading to the first node that does not, or the
/// trailing `None` link if there is no such node.
#[inline]
fn seek<T, F>(mut link: &mut Link<T>, skip: F) -> &mut Link<T>
where
    T: PrimInt,
    F: Fn(&ClosedOpenInterval<T>) -> bool,
{
    while link.as_ref().is_some_and(|node| skip(&node.interval)) {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

/// Folds every successor that overlaps or touches `node` into it.
///
/// Returns the number of nodes unlinked.
fn absorb_successors<T>(node: &mut Node<T>) -> usize
where
    T: PrimInt,
{
    let mut absorbed = 0;
    while let Some(next) = node.next.take() {
        if next.interval.start() > node.interval.end() {
            node.next = Some(next);
            break;
        }
        let next = *next;
        node.interval.absorb(&next.interval);
        node.next = next.next;
        absorbed += 1;
    }
    absorbed
}

/// A canonical list of disjoint half-open ranges stored in a singly linked chain.
///
/// Observable behavior is identical to
/// [`ArrayRangeList`](crate::array::ArrayRangeList); only the locate and splice
/// mechanics differ.
///
/// # Examples
///
/// ```rust
/// # use rangelist::chain::ChainRangeList;
/// # use rangelist::store::RangeStore;
///
/// let mut list = ChainRangeList::new();
/// list.add(1..8);
/// list.add(10..21);
/// list.remove(3..19);
/// assert_eq!(list.to_string(), "[1,3) [19,21)");
/// ```
pub struct ChainRangeList<T>
where
    T: PrimInt,
{
    head: Link<T>,
    len: usize,
}

impl<T> ChainRangeList<T>
where
    T: PrimInt + Display,
{
    /// Creates a new, empty list.
    #[inline]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Builds a chain from intervals that already form a canonical list.
    fn from_sorted<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = ClosedOpenInterval<T>>,
    {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for interval in intervals {
            tail = &mut tail.insert(Node::boxed(interval, None)).next;
            list.len += 1;
        }
        list.debug_assert_canonical();
        list
    }

    /// Walks the chain once checking that no interval is empty and that each
    /// one ends strictly before its successor starts.
    fn holds_canonical_form(&self) -> bool {
        self.iter().all(|interval| !interval.is_empty())
            && self
                .iter()
                .zip(self.iter().skip(1))
                .all(|(prev, next)| prev.end() < next.start())
    }

    #[inline(always)]
    fn debug_assert_canonical(&self) {
        debug_assert!(
            self.holds_canonical_form(),
            "range list lost its canonical form"
        );
    }
}

impl<T> RangeStore<T> for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    /// Walks to the first node that overlaps or touches the candidate and
    /// widens it, or links the candidate in front of it when they are apart.
    ///
    /// The node found is either the predecessor reaching the candidate start
    /// or the first node starting at or after it. Widening replaces both the
    /// same-start extension and the merge with the predecessor; a node that
    /// already wraps the candidate is left as is. The widened node then
    /// absorbs successors until a gap appears.
    fn add(&mut self, range: Range<T>) {
        let candidate = ClosedOpenInterval::from(range);
        if candidate.is_empty() {
            return;
        }

        let link = seek(&mut self.head, |iv| iv.end() < candidate.start());
        let reaches = link
            .as_ref()
            .is_some_and(|node| node.interval.start() <= candidate.end());

        if !reaches {
            trace!("add {}: linking new node", candidate);
            let next = link.take();
            *link = Some(Node::boxed(candidate, next));
            self.len += 1;
            self.debug_assert_canonical();
            return;
        }

        if let Some(node) = link {
            if node.interval.wraps(&candidate, StartBound::Inclusive) {
                trace!("add {}: already covered by {}", candidate, node.interval);
                return;
            }
            node.interval.absorb(&candidate);
            let absorbed = absorb_successors(node);
            trace!(
                "add {}: widened to {}, absorbing {} successors",
                candidate, node.interval, absorbed
            );
            self.len -= absorbed;
        }
        self.debug_assert_canonical();
    }

    /// Walks to the first node ending past the removal start, then trims,
    /// splits or unlinks nodes until the first node ending past the removal
    /// end, whose left edge is trimmed.
    fn remove(&mut self, range: Range<T>) {
        let candidate = ClosedOpenInterval::from(range);
        if self.head.is_none() || candidate.is_empty() {
            return;
        }

        // Nodes ending at or before the removal start keep all their points.
        let mut link = seek(&mut self.head, |iv| iv.end() <= candidate.start());

        let straddles_start = link
            .as_ref()
            .is_some_and(|node| node.interval.start() < candidate.start());
        if straddles_start {
            if let Some(node) = link {
                if node.interval.end() > candidate.end() {
                    let remainder =
                        ClosedOpenInterval::new_unchecked(candidate.end(), node.interval.end());
                    node.interval.set_end(candidate.start());
                    trace!(
                        "remove {}: split into {} and {}",
                        candidate, node.interval, remainder
                    );
                    let rest = node.next.take();
                    node.next = Some(Node::boxed(remainder, rest));
                    self.len += 1;
                    self.debug_assert_canonical();
                    return;
                }
                node.interval.set_end(candidate.start());
                trace!(
                    "remove {}: trimmed right edge to {}",
                    candidate, node.interval
                );
                link = &mut node.next;
            }
        }

        while link
            .as_ref()
            .is_some_and(|node| node.interval.end() <= candidate.end())
        {
            if let Some(node) = link.take() {
                trace!("remove {}: unlinking {}", candidate, node.interval);
                *link = node.next;
                self.len -= 1;
            }
        }

        if let Some(node) = link {
            if node.interval.start() < candidate.end() {
                node.interval.set_start(candidate.end());
                trace!(
                    "remove {}: trimmed left edge to {}",
                    candidate, node.interval
                );
            }
        }
        self.debug_assert_canonical();
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Drop for ChainRangeList<T>
where
    T: PrimInt,
{
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    fn clone(&self) -> Self {
        Self::from_sorted(self.iter().copied())
    }
}

impl<T> PartialEq for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for ChainRangeList<T> where T: PrimInt + Display {}

impl<T> std::fmt::Debug for ChainRangeList<T>
where
    T: PrimInt + Display + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> std::fmt::Display for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.display(), f)
    }
}

impl<'a, T> IntoIterator for &'a ChainRangeList<T>
where
    T: PrimInt + Display,
{
    type Item = &'a ClosedOpenInterval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<Range<T>> for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl<T> FromIterator<Range<T>> for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<&ArrayRangeList<T>> for ChainRangeList<T>
where
    T: PrimInt + Display,
{
    fn from(array: &ArrayRangeList<T>) -> Self {
        Self::from_sorted(array.iter().copied())
    }
}

/// An iterator over the intervals of a [`ChainRangeList`], in ascending order.
pub struct Iter<'a, T>
where
    T: PrimInt,
{
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T>
where
    T: PrimInt,
{
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: PrimInt,
{
    type Item = &'a ClosedOpenInterval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.interval
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> where T: PrimInt {}

impl<T> FusedIterator for Iter<'_, T> where T: PrimInt {}

impl<T> std::fmt::Debug for Iter<'_, T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
