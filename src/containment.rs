//
// Copyright 2020, Gobsmacked Labs, LLC.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Whether one range fully encompasses another, for any pairing of range shapes.
//!
//! Works across `Range`, `RangeInclusive`, `RangeFrom`, `RangeTo`,
//! `RangeToInclusive`, `RangeFull`, bound tuples and `ClosedInterval`.
//! ```
//! use ranger::{ClosedInterval, ContainsRange};
//!
//! assert!((1..10).contains_range(&(1..=9)));
//! assert!((..=9).contains_range(&(..10)));
//! assert!((1..).contains_range(&ClosedInterval::new(4, 12)));
//! assert!(!(0.0_f64..1.0).contains_range(&(0.0..=1.0)));
//! ```

use core::ops::{Bound, RangeBounds};

/// A bound type usable with `ContainsRange`.
///
/// Discrete types have a next and previous value, so an exclusive bound is
/// the same as an inclusive bound one step inward: `1..10` and `1..=9` hold
/// the same integers.
pub trait RangePoint: PartialOrd + Copy {
    /// Whether exclusive bounds can be rewritten as inclusive ones.
    const DISCRETE: bool;

    /// The next value up, `None` at the maximum or for continuous types.
    fn successor(self) -> Option<Self>;

    /// The next value down, `None` at the minimum or for continuous types.
    fn predecessor(self) -> Option<Self>;
}

macro_rules! discrete_range_point {
    ($($t:ty),*) => {
        $(
            impl RangePoint for $t {
                const DISCRETE: bool = true;

                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn predecessor(self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

macro_rules! continuous_range_point {
    ($($t:ty),*) => {
        $(
            impl RangePoint for $t {
                const DISCRETE: bool = false;

                fn successor(self) -> Option<Self> {
                    None
                }

                fn predecessor(self) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

discrete_range_point!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
continuous_range_point!(f32, f64);

/// Tests whether a range holds every value of another range.
pub trait ContainsRange<B: RangePoint>: RangeBounds<B> {
    /// Whether every value of `other` is in self. An empty `other` is contained by anything.
    fn contains_range<R>(&self, other: &R) -> bool
    where
        R: RangeBounds<B> + ?Sized,
    {
        let (inner_start, inner_end) = match inclusive_bounds(other) {
            Some(bounds) => bounds,
            None => return true,
        };

        match inclusive_bounds(self) {
            Some((outer_start, outer_end)) => {
                admits_start(outer_start, inner_start) && admits_end(outer_end, inner_end)
            }
            None => false,
        }
    }
}

impl<B, R> ContainsRange<B> for R
where
    B: RangePoint,
    R: RangeBounds<B> + ?Sized,
{
}

/// The bounds of `range`, exclusive bounds of discrete types made inclusive.
/// `None` if the range holds no value.
fn inclusive_bounds<B, R>(range: &R) -> Option<(Bound<B>, Bound<B>)>
where
    B: RangePoint,
    R: RangeBounds<B> + ?Sized,
{
    let start = match range.start_bound().cloned() {
        Bound::Excluded(bound) if B::DISCRETE => Bound::Included(bound.successor()?),
        bound => bound,
    };
    let end = match range.end_bound().cloned() {
        Bound::Excluded(bound) if B::DISCRETE => Bound::Included(bound.predecessor()?),
        bound => bound,
    };

    // Negated comparisons so that NaN bounds count as empty.
    let empty = match (start, end) {
        (Bound::Included(start), Bound::Included(end)) => !(start <= end),
        (Bound::Included(start), Bound::Excluded(end))
        | (Bound::Excluded(start), Bound::Included(end))
        | (Bound::Excluded(start), Bound::Excluded(end)) => !(start < end),
        _ => false,
    };

    if empty {
        None
    } else {
        Some((start, end))
    }
}

fn admits_start<B: PartialOrd>(outer: Bound<B>, inner: Bound<B>) -> bool {
    match (outer, inner) {
        (Bound::Unbounded, _) => true,
        (_, Bound::Unbounded) => false,
        (Bound::Excluded(outer), Bound::Included(inner)) => outer < inner,
        (Bound::Included(outer), Bound::Included(inner))
        | (Bound::Included(outer), Bound::Excluded(inner))
        | (Bound::Excluded(outer), Bound::Excluded(inner)) => outer <= inner,
    }
}

fn admits_end<B: PartialOrd>(outer: Bound<B>, inner: Bound<B>) -> bool {
    match (outer, inner) {
        (Bound::Unbounded, _) => true,
        (_, Bound::Unbounded) => false,
        (Bound::Excluded(outer), Bound::Included(inner)) => inner < outer,
        (Bound::Included(outer), Bound::Included(inner))
        | (Bound::Included(outer), Bound::Excluded(inner))
        | (Bound::Excluded(outer), Bound::Excluded(inner)) => inner <= outer,
    }
}
