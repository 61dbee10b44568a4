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

//! Errors raised while building a `ClosedInterval`.

use thiserror::Error;

/// Reasons a `ClosedInterval` could not be built.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum IntervalError {
    /// The lower bound is greater than the upper bound, or the two do not compare.
    #[error("lower bound is greater than upper bound")]
    Inverted,
    /// There was nothing to build the interval from.
    #[error("no values to build an interval from")]
    Empty,
}
