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

#![no_std]
#![deny(missing_docs)]
//! Convenience operations for closed intervals over any ordered, arithmetic bound type.
//!
//! Merge overlapping intervals into a sorted, disjoint set.
//! ```
//! use ranger::{accumulate, ClosedInterval};
//!
//! let merged = accumulate(vec![
//!     ClosedInterval::new(6, 7),
//!     ClosedInterval::new(0, 1),
//!     ClosedInterval::new(4, 5),
//!     ClosedInterval::new(1, 2),
//! ]);
//!
//! assert_eq!(
//!     merged,
//!     vec![
//!         ClosedInterval::new(0, 2),
//!         ClosedInterval::new(4, 5),
//!         ClosedInterval::new(6, 7)
//!     ]
//! );
//! ```
//! Walk outward from the middle of an interval, alternating sides.
//! ```
//! use ranger::ClosedInterval;
//!
//! let order: Vec<i32> = ClosedInterval::new(2, 10).ping_pong_by(1).collect();
//!
//! assert_eq!(order, vec![6, 7, 5, 8, 4, 9, 3, 10, 2]);
//! ```
//! Interpolate and normalize.
//! ```
//! use ranger::ClosedInterval;
//!
//! let range = ClosedInterval::new(-1.0, 3.0);
//!
//! assert_eq!(range.lerp(0.5), 1.0);
//! assert_eq!(range.normalize(1.0), Some(0.5));
//! assert_eq!(ClosedInterval::new(1.0, 1.0).normalize(1.0), None);
//! ```

pub mod accumulate;
pub mod clamp;
pub mod closed_interval;
pub mod containment;
pub mod error;
pub mod ping_pong;
pub mod runs;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

extern crate alloc;

pub use accumulate::{accumulate, Accumulate, Accumulated};
pub use clamp::Clamp;
pub use closed_interval::{range_from, ClosedInterval, PlusMinus};
pub use containment::{ContainsRange, RangePoint};
pub use error::IntervalError;
pub use ping_pong::PingPong;
pub use runs::run_ranges;
