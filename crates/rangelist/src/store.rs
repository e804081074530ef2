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

//! The contract shared by every range list layout.
//!
//! A range store holds a canonical list of half-open intervals: sorted by
//! start, pairwise disjoint, never touching and never empty. Adding a range
//! merges it with everything it overlaps or touches; removing a range trims,
//! splits or deletes whatever it covers. A range with `start == end` is a
//! no-op for both operations.
//!
//! Two implementations exist. [`ArrayRangeList`](crate::array::ArrayRangeList)
//! locates splice points by binary search and is the one to use in production.
//! [`ChainRangeList`](crate::chain::ChainRangeList) walks an owned linked chain
//! and serves as an independent implementation to validate against.

use crate::{
    display::RangeListDisplay,
    error::{InvalidRangeError, checked_interval},
};
use num_traits::PrimInt;
use rangelist_core::math::interval::ClosedOpenInterval;
use std::ops::Range;

/// Operations common to all range list layouts.
///
/// Any two stores fed the same sequence of operations enumerate the same
/// intervals.
pub trait RangeStore<T>
where
    T: PrimInt,
{
    /// Enumeration of the stored intervals in ascending start order.
    type Iter<'a>: Iterator<Item = &'a ClosedOpenInterval<T>> + Clone
    where
        Self: 'a,
        T: 'a;

    /// Adds `range` to the list, merging it with every stored interval it
    /// overlaps or touches.
    ///
    /// # Panics
    ///
    /// Panics if `range.start > range.end`. Use [`try_add`](Self::try_add) to
    /// handle such ranges gracefully.
    fn add(&mut self, range: Range<T>);

    /// Removes `range` from the list, trimming or splitting the stored
    /// intervals it partially covers and dropping those it fully covers.
    ///
    /// # Panics
    ///
    /// Panics if `range.start > range.end`. Use [`try_remove`](Self::try_remove)
    /// to handle such ranges gracefully.
    fn remove(&mut self, range: Range<T>);

    /// Returns an iterator over the stored intervals in ascending start order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the number of stored intervals.
    fn len(&self) -> usize;

    /// Removes every stored interval.
    fn clear(&mut self);

    /// Returns `true` if no interval is stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `range`, or returns an error and leaves the list untouched if
    /// `range.start > range.end`.
    #[inline]
    fn try_add(&mut self, range: Range<T>) -> Result<(), InvalidRangeError<T>> {
        let interval = checked_interval(range)?;
        self.add(interval.into());
        Ok(())
    }

    /// Removes `range`, or returns an error and leaves the list untouched if
    /// `range.start > range.end`.
    #[inline]
    fn try_remove(&mut self, range: Range<T>) -> Result<(), InvalidRangeError<T>> {
        let interval = checked_interval(range)?;
        self.remove(interval.into());
        Ok(())
    }

    /// Returns a formatter rendering the list as `[a,b) [c,d) ...`, or `()`
    /// when empty.
    #[inline]
    fn display(&self) -> RangeListDisplay<Self::Iter<'_>> {
        RangeListDisplay::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array::ArrayRangeList, chain::ChainRangeList};
    use fixedbitset::FixedBitSet;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rangelist_core::algorithm::is_canonical;

    type IntegerType = i64;

    /// Points `0..DOMAIN` of the boolean reference model.
    const DOMAIN: usize = 96;

    #[derive(Debug, Clone)]
    enum Op {
        Add(Range<IntegerType>),
        Remove(Range<IntegerType>),
    }

    fn apply<S>(store: &mut S, op: &Op)
    where
        S: RangeStore<IntegerType>,
    {
        match op {
            Op::Add(r) => store.add(r.clone()),
            Op::Remove(r) => store.remove(r.clone()),
        }
    }

    fn apply_model(model: &mut FixedBitSet, op: &Op) {
        match op {
            Op::Add(r) => model.set_range(r.start as usize..r.end as usize, true),
            Op::Remove(r) => model.set_range(r.start as usize..r.end as usize, false),
        }
    }

    fn snapshot<S>(store: &S) -> Vec<ClosedOpenInterval<IntegerType>>
    where
        S: RangeStore<IntegerType>,
    {
        store.iter().copied().collect()
    }

    fn to_bitset<S>(store: &S) -> FixedBitSet
    where
        S: RangeStore<IntegerType>,
    {
        let mut bits = FixedBitSet::with_capacity(DOMAIN);
        for interval in store.iter() {
            for point in interval.iter() {
                bits.insert(point as usize);
            }
        }
        bits
    }

    fn random_range(rng: &mut StdRng) -> Range<IntegerType> {
        let start = rng.random_range(0..DOMAIN as IntegerType);
        // Zero-length ranges are drawn on purpose.
        let end = rng.random_range(start..=(start + 24).min(DOMAIN as IntegerType));
        start..end
    }

    fn random_ops(rng: &mut StdRng, count: usize) -> Vec<Op> {
        (0..count)
            .map(|_| {
                let range = random_range(rng);
                if rng.random_bool(0.6) {
                    Op::Add(range)
                } else {
                    Op::Remove(range)
                }
            })
            .collect()
    }

    fn run_scenario<S>(mut store: S)
    where
        S: RangeStore<IntegerType>,
    {
        let steps: [(Op, &str); 11] = [
            (Op::Add(1..5), "[1,5)"),
            (Op::Add(10..20), "[1,5) [10,20)"),
            (Op::Add(20..20), "[1,5) [10,20)"),
            (Op::Add(20..21), "[1,5) [10,21)"),
            (Op::Add(2..4), "[1,5) [10,21)"),
            (Op::Add(3..8), "[1,8) [10,21)"),
            (Op::Remove(10..10), "[1,8) [10,21)"),
            (Op::Remove(10..11), "[1,8) [11,21)"),
            (Op::Remove(15..17), "[1,8) [11,15) [17,21)"),
            (Op::Remove(3..19), "[1,3) [19,21)"),
            (Op::Remove(1..29), "()"),
        ];

        assert_eq!(store.display().to_string(), "()");
        for (op, expected) in steps.iter() {
            apply(&mut store, op);
            assert_eq!(store.display().to_string(), *expected, "after {:?}", op);
        }
        assert!(store.is_empty());
    }

    fn check_against_model<S>(mut store: S, seed: u64)
    where
        S: RangeStore<IntegerType>,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut model = FixedBitSet::with_capacity(DOMAIN);
        for op in random_ops(&mut rng, 400) {
            apply(&mut store, &op);
            apply_model(&mut model, &op);

            let intervals = snapshot(&store);
            assert!(
                is_canonical(&intervals),
                "not canonical after {:?}: {:?}",
                op, intervals
            );
            assert_eq!(
                to_bitset(&store),
                model,
                "diverged from model after {:?}",
                op
            );
            assert_eq!(store.len(), intervals.len());
        }
    }

    #[test]
    fn test_scenario_array() {
        run_scenario(ArrayRangeList::new());
    }

    #[test]
    fn test_scenario_chain() {
        run_scenario(ChainRangeList::new());
    }

    #[test]
    fn test_model_equivalence_array() {
        for seed in 0..16 {
            check_against_model(ArrayRangeList::new(), seed);
        }
    }

    #[test]
    fn test_model_equivalence_chain() {
        for seed in 0..16 {
            check_against_model(ChainRangeList::new(), seed);
        }
    }

    #[test]
    fn test_stores_agree() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut array = ArrayRangeList::new();
        let mut chain = ChainRangeList::new();
        for op in random_ops(&mut rng, 2_000) {
            apply(&mut array, &op);
            apply(&mut chain, &op);
            assert_eq!(
                snapshot(&array),
                snapshot(&chain),
                "stores diverged after {:?}",
                op
            );
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut array = ArrayRangeList::new();
            let mut chain = ChainRangeList::new();
            for op in random_ops(&mut rng, 20) {
                apply(&mut array, &op);
                apply(&mut chain, &op);
            }

            let range = random_range(&mut rng);
            array.add(range.clone());
            chain.add(range.clone());
            let array_once = snapshot(&array);
            let chain_once = snapshot(&chain);
            array.add(range.clone());
            chain.add(range);
            assert_eq!(snapshot(&array), array_once);
            assert_eq!(snapshot(&chain), chain_once);
        }
    }

    #[test]
    fn test_zero_length_is_noop() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut array = ArrayRangeList::new();
        let mut chain = ChainRangeList::new();
        for op in random_ops(&mut rng, 50) {
            apply(&mut array, &op);
            apply(&mut chain, &op);
        }
        let before = snapshot(&array);
        for k in -2..DOMAIN as IntegerType + 2 {
            array.add(k..k);
            array.remove(k..k);
            chain.add(k..k);
            chain.remove(k..k);
        }
        assert_eq!(snapshot(&array), before);
        assert_eq!(snapshot(&chain), before);
    }

    #[test]
    fn test_add_then_remove_restores_empty() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let range = random_range(&mut rng);
            let mut array = ArrayRangeList::new();
            let mut chain = ChainRangeList::new();
            array.add(range.clone());
            chain.add(range.clone());
            array.remove(range.clone());
            chain.remove(range);
            assert!(array.is_empty());
            assert!(chain.is_empty());
        }
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_try_operations_reject_inverted_ranges() {
        let mut array = ArrayRangeList::new();
        let mut chain = ChainRangeList::new();
        array.add(1..5);
        chain.add(1..5);

        let expected = Err(InvalidRangeError { start: 4, end: 2 });
        assert_eq!(array.try_add(4..2), expected);
        assert_eq!(array.try_remove(4..2), expected);
        assert_eq!(chain.try_add(4..2), expected);
        assert_eq!(chain.try_remove(4..2), expected);
        assert_eq!(array.display().to_string(), "[1,5)");
        assert_eq!(chain.display().to_string(), "[1,5)");

        assert_eq!(array.try_add(5..9), Ok(()));
        assert_eq!(chain.try_remove(2..3), Ok(()));
        assert_eq!(array.display().to_string(), "[1,9)");
        assert_eq!(chain.display().to_string(), "[1,2) [3,5)");
    }

    /// Only requires `PrimInt` from the boundary type.
    fn covered_points<T, S>(
        store: &mut S,
        ranges: &[Range<T>],
    ) -> Result<T, InvalidRangeError<T>>
    where
        T: PrimInt,
        S: RangeStore<T>,
    {
        for range in ranges {
            store.try_add(range.clone())?;
        }
        let lengths = store.iter().map(|interval| interval.len());
        Ok(lengths.fold(T::zero(), |total, len| total + len))
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_generic_callers_need_only_prim_int() {
        let ranges = [1u8..5, 3..8, 10..12];
        assert_eq!(covered_points(&mut ArrayRangeList::new(), &ranges), Ok(9));
        assert_eq!(covered_points(&mut ChainRangeList::new(), &ranges), Ok(9));

        let inverted = [0i16..4, 7..6];
        let mut array = ArrayRangeList::new();
        assert_eq!(
            covered_points(&mut array, &inverted),
            Err(InvalidRangeError { start: 7, end: 6 })
        );
        assert_eq!(array.len(), 1);
    }
}
