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

//! Clamp a value within a range.

use crate::closed_interval::ClosedInterval;
use core::{convert::TryFrom, ops::Range};
use num_traits::PrimInt;

/// Restrict values to a range.
pub trait Clamp: PartialOrd + Copy {
    /// Clamp a value within an inclusive range.
    #[must_use]
    fn clamped(self, limits: &ClosedInterval<Self>) -> Self {
        limits.clamp(self)
    }

    /// Clamp an integer within a half-open range.
    ///
    /// Returns `None` if the range is empty.
    fn clamped_to_range(self, limits: Range<Self>) -> Option<Self>
    where
        Self: PrimInt,
    {
        <ClosedInterval<Self> as TryFrom<Range<Self>>>::try_from(limits)
            .ok()
            .map(|limits| limits.clamp(self))
    }
}

impl<T: PartialOrd + Copy> Clamp for T {}
