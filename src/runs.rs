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

//! Locate runs of equal elements inside a sequence.

use crate::closed_interval::ClosedInterval;
use alloc::vec::Vec;

/// The offset ranges of the runs of `elements`, found in order within `haystack`.
///
/// `haystack` is walked once. For each of `elements` the walk continues to
/// that element's next occurrence and the run of consecutive equal items
/// starting there becomes one range. An element not found in the rest of
/// `haystack` is skipped, and the walk is then exhausted for the elements
/// after it.
///
/// ```
/// use ranger::{run_ranges, ClosedInterval};
///
/// assert_eq!(
///     run_ranges("aaabbc".chars(), "ac".chars()),
///     vec![ClosedInterval::new(0, 2), ClosedInterval::new(5, 5)]
/// );
/// ```
pub fn run_ranges<T, H, E>(haystack: H, elements: E) -> Vec<ClosedInterval<usize>>
where
    T: PartialEq,
    H: IntoIterator<Item = T>,
    E: IntoIterator<Item = T>,
{
    let mut enumerated = haystack.into_iter().enumerate().peekable();

    elements
        .into_iter()
        .filter_map(|element| {
            let (start, _) = enumerated.find(|(_, item)| *item == element)?;

            let mut end = start;
            while let Some((offset, _)) = enumerated.next_if(|(_, item)| *item == element) {
                end = offset;
            }
            Some(ClosedInterval::new(start, end))
        })
        .collect()
}
