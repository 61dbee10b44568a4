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

//! Merges closed intervals into the minimal sorted set of disjoint intervals
//! covering the same points.
//!
//! ```
//! use ranger::{Accumulate, ClosedInterval};
//!
//! let merged: Vec<_> = vec![
//!     ClosedInterval::new(12, 12),
//!     ClosedInterval::new(2, 14),
//!     ClosedInterval::new(-2, 2),
//!     ClosedInterval::new(16, 24),
//!     ClosedInterval::new(14, 18),
//! ]
//! .accumulated()
//! .collect();
//!
//! assert_eq!(merged, vec![ClosedInterval::new(-2, 24)]);
//! ```

use crate::closed_interval::ClosedInterval;
use alloc::vec::{IntoIter, Vec};
use core::{cmp::Ordering, iter::FusedIterator};
use log::trace;

/// Sort and merge `intervals`. Intervals that overlap or touch at a bound are merged.
///
/// The result is sorted ascending by lower bound and pairwise disjoint.
pub fn accumulate<B, I>(intervals: I) -> Vec<ClosedInterval<B>>
where
    B: PartialOrd + Copy,
    I: IntoIterator<Item = ClosedInterval<B>>,
{
    Accumulated::new(intervals).collect()
}

/// Iterator over the merged intervals.
///
/// The input is sorted once on construction, merging is done as the iterator is advanced.
#[derive(Debug, Clone)]
pub struct Accumulated<B> {
    sorted: IntoIter<ClosedInterval<B>>,
    current: Option<ClosedInterval<B>>,
}

impl<B: PartialOrd + Copy> Accumulated<B> {
    /// Constructor.
    pub fn new<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = ClosedInterval<B>>,
    {
        let mut sorted: Vec<ClosedInterval<B>> = intervals.into_iter().collect();

        // Bounds of a ClosedInterval always compare, the fallback is never taken.
        sorted.sort_by(|a, b| {
            a.lower()
                .partial_cmp(&b.lower())
                .unwrap_or(Ordering::Equal)
        });

        trace!("accumulating {} intervals", sorted.len());

        let mut sorted = sorted.into_iter();
        let current = sorted.next();
        Accumulated { sorted, current }
    }
}

impl<B: PartialOrd + Copy> Iterator for Accumulated<B> {
    type Item = ClosedInterval<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = self.current.take()?;

        for interval in self.sorted.by_ref() {
            if current.overlaps(&interval) {
                // Sorted order means only the upper bound can grow.
                current = current.hull(&interval);
            } else {
                self.current = Some(interval);
                return Some(current);
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            None => (0, Some(0)),
            Some(_) => (1, Some(self.sorted.len() + 1)),
        }
    }
}

impl<B: PartialOrd + Copy> FusedIterator for Accumulated<B> {}

/// Adds `accumulated` to collections of `ClosedInterval`s.
pub trait Accumulate<B>: IntoIterator<Item = ClosedInterval<B>> + Sized {
    /// The sorted, merged intervals.
    fn accumulated(self) -> Accumulated<B>;
}

impl<B, I> Accumulate<B> for I
where
    B: PartialOrd + Copy,
    I: IntoIterator<Item = ClosedInterval<B>>,
{
    fn accumulated(self) -> Accumulated<B> {
        Accumulated::new(self)
    }
}
