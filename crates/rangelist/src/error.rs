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

use log::debug;
use num_traits::PrimInt;
use rangelist_core::math::interval::ClosedOpenInterval;
use std::{fmt::Display, ops::Range};

/// A range whose start lies past its end.
///
/// Returned by the checked operations (`try_add`, `try_remove`) of a range
/// store. The store is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidRangeError<T> {
    /// The offending start bound.
    pub start: T,
    /// The offending end bound.
    pub end: T,
}

impl<T> std::fmt::Display for InvalidRangeError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid range [{},{}): start must be less than or equal to end",
            self.start, self.end
        )
    }
}

impl<T> std::error::Error for InvalidRangeError<T> where T: std::fmt::Debug + Display {}

/// Converts `range` into an interval, rejecting inverted bounds.
#[inline]
pub(crate) fn checked_interval<T>(
    range: Range<T>,
) -> Result<ClosedOpenInterval<T>, InvalidRangeError<T>>
where
    T: PrimInt,
{
    ClosedOpenInterval::try_new(range.start, range.end).ok_or_else(|| {
        debug!("rejected inverted range: start lies past the end");
        InvalidRangeError {
            start: range.start,
            end: range.end,
        }
    })
}
