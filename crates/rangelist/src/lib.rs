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

//! # Range List
//!
//! **Canonical lists of disjoint, half-open integer ranges.**
//!
//! A range list is an aggregate of ranges such as `[1,5) [10,11) [100,201)`.
//! Ranges can be added and removed at will; the list merges what touches or
//! overlaps and trims or splits what a removal cuts into, so that at any time
//! it holds the minimal sorted set of non-empty, non-touching intervals that
//! covers exactly the points added and not removed since.
//!
//! ## Architecture
//!
//! * **`store`**: The `RangeStore` trait, the contract every layout fulfils
//!   (`add`, `remove`, enumeration, checked variants, rendering).
//! * **`array`**: `ArrayRangeList`, intervals in a sorted `Vec` located by
//!   binary search. The layout to use in production.
//! * **`chain`**: `ChainRangeList`, intervals in an owned singly linked chain
//!   located by iterative traversal. Behaves identically; useful to
//!   cross-check the array layout.
//! * **`display`**: `RangeListDisplay`, renders an enumeration as
//!   `[a,b) [c,d)`, or `()` when empty.
//! * **`error`**: `InvalidRangeError`, returned for ranges whose start lies
//!   past their end.
//!
//! Interval primitives and ordered searches live in `rangelist_core`.
//!
//! ## Usage
//!
//! ```rust
//! use rangelist::{ArrayRangeList, RangeStore};
//!
//! let mut list = ArrayRangeList::new();
//! list.add(1..5);
//! list.add(10..20);
//! list.add(3..8);
//! assert_eq!(list.to_string(), "[1,8) [10,20)");
//!
//! list.remove(15..17);
//! assert_eq!(list.to_string(), "[1,8) [10,15) [17,20)");
//!
//! assert!(list.try_add(9..2).is_err());
//! ```

pub mod array;
pub mod chain;
pub mod display;
pub mod error;
pub mod store;

pub use array::ArrayRangeList;
pub use chain::ChainRangeList;
pub use error::InvalidRangeError;
pub use rangelist_core::math::interval::ClosedOpenInterval;
pub use store::RangeStore;
