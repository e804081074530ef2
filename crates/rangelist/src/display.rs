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

//! Text rendering of a range list.
//!
//! `RangeListDisplay` only needs an ordered, restartable sequence of
//! intervals, so it works with the enumeration of either store. Each interval
//! is rendered as `[start,end)`, separated by a single space. A list without
//! intervals renders as `()`.

use num_traits::PrimInt;
use rangelist_core::math::interval::ClosedOpenInterval;
use std::fmt::Display;

/// Formats an ordered sequence of intervals as `[a,b) [c,d) ...`.
///
/// # Examples
///
/// ```rust
/// # use rangelist::display::RangeListDisplay;
/// # use rangelist_core::math::interval::ClosedOpenInterval;
///
/// let intervals = [ClosedOpenInterval::new(1, 8), ClosedOpenInterval::new(10, 21)];
/// assert_eq!(RangeListDisplay::new(intervals.iter()).to_string(), "[1,8) [10,21)");
///
/// let empty: [ClosedOpenInterval<i32>; 0] = [];
/// assert_eq!(RangeListDisplay::new(empty.iter()).to_string(), "()");
/// ```
#[derive(Debug, Clone)]
pub struct RangeListDisplay<I> {
    intervals: I,
}

impl<I> RangeListDisplay<I> {
    /// Wraps an iterator over the intervals to render.
    ///
    /// The iterator is cloned on every formatting pass, so the same
    /// `RangeListDisplay` can be rendered more than once.
    #[inline]
    pub fn new(intervals: I) -> Self {
        Self { intervals }
    }
}

impl<'a, I, T> Display for RangeListDisplay<I>
where
    I: Iterator<Item = &'a ClosedOpenInterval<T>> + Clone,
    T: PrimInt + Display + 'a,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut intervals = self.intervals.clone();
        let Some(first) = intervals.next() else {
            return f.write_str("()");
        };
        write!(f, "{}", first)?;
        for interval in intervals {
            write!(f, " {}", interval)?;
        }
        Ok(())
    }
}
