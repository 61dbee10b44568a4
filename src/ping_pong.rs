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

//! Oscillating traversal of an interval, outward from a starting point.
//!
//! The traversal alternately probes forward and backward from the start by
//! increasing multiples of the step. Once one side would leave the interval it
//! marches through the other side by a fixed step until that side leaves too.
//!
//! ```
//! use ranger::ClosedInterval;
//!
//! let order: Vec<i32> = ClosedInterval::new(2, 10).ping_pong(1, 7).collect();
//! assert_eq!(order, vec![7, 8, 6, 9, 5, 10, 4, 3, 2]);
//!
//! let order: Vec<f64> = ClosedInterval::new(-1.5, 7.5).ping_pong_by(1.5).collect();
//! assert_eq!(order, vec![3.0, 4.5, 1.5, 6.0, 0.0, 7.5, -1.5]);
//! ```

use crate::closed_interval::ClosedInterval;
use core::{
    iter::FusedIterator,
    mem,
    ops::{Add, Sub},
};
use log::{debug, trace};
use num_traits::{Num, Zero};

/// The direction a value is moved in.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Advance {
    Add,
    Subtract,
}

impl Advance {
    /// Move `value` by `by`, if the result stays inside `interval`.
    ///
    /// The check is made on distances to the bounds, so no value outside the
    /// interval is ever formed and bounded integers cannot overflow.
    fn within<B>(self, interval: &ClosedInterval<B>, value: B, by: B) -> Option<B>
    where
        B: Add<Output = B> + Sub<Output = B> + Zero + PartialOrd + Copy,
    {
        let zero = B::zero();
        let moved = match self {
            Advance::Add => {
                if by >= zero {
                    if value < zero || by <= interval.upper() - value {
                        value + by
                    } else {
                        return None;
                    }
                } else if value >= zero || by >= interval.lower() - value {
                    value + by
                } else {
                    return None;
                }
            }
            Advance::Subtract => {
                if by >= zero {
                    if (interval.lower() < zero && value >= zero)
                        || by <= value - interval.lower()
                    {
                        value - by
                    } else {
                        return None;
                    }
                } else if value < zero || by >= value - interval.upper() {
                    value - by
                } else {
                    return None;
                }
            }
        };

        Some(moved).filter(|moved| interval.contains(moved))
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum State<B> {
    /// The start has not been yielded yet.
    Start(B),
    /// The last yielded value.
    Previous(B),
    Done,
}

/// Iterator produced by `ClosedInterval::ping_pong` and friends.
///
/// Every yielded value is inside the interval and no value is yielded twice.
/// The values are exactly `start + k * step` for every integer `k` that
/// stays inside the interval.
#[derive(Debug, Clone)]
pub struct PingPong<B> {
    interval: ClosedInterval<B>,
    step: B,
    /// The value yielded before the previous one. The next ping-pong probe is
    /// one step away from it, on the side opposite the previous value.
    anchor: B,
    /// Direction of the next ping-pong probe.
    ping_pong: Advance,
    /// Direction of the fixed-step march once the ping-pong probe leaves the interval.
    contiguous: Advance,
    /// Set once the ping-pong probe has left the interval for good.
    marching: bool,
    state: State<B>,
}

impl<B> PingPong<B>
where
    B: Add<Output = B> + Sub<Output = B> + Zero + PartialOrd + Copy,
{
    /// Traverse `interval` from `start` by multiples of `step`.
    ///
    /// Yields nothing if `start` is outside the interval.
    #[must_use]
    pub fn new(interval: ClosedInterval<B>, step: B, start: B) -> Self {
        let state = if interval.contains(&start) {
            State::Start(start)
        } else {
            State::Done
        };

        PingPong {
            interval,
            step,
            anchor: start,
            ping_pong: Advance::Add,
            contiguous: Advance::Subtract,
            marching: false,
            state,
        }
    }

    fn advance(&mut self, previous: B) -> Option<B> {
        // A zero step would yield the start forever.
        if self.step.is_zero() {
            return None;
        }

        // Once missed, the probe lands on the same value every time.
        if !self.marching {
            if let Some(pinged) = self.ping_pong.within(&self.interval, self.anchor, self.step) {
                mem::swap(&mut self.ping_pong, &mut self.contiguous);
                self.anchor = previous;
                return Some(pinged);
            }

            trace!("ping-pong probe left the interval, marching by step");
            self.marching = true;
        }

        self.contiguous.within(&self.interval, previous, self.step)
    }
}

impl<B> Iterator for PingPong<B>
where
    B: Add<Output = B> + Sub<Output = B> + Zero + PartialOrd + Copy,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        let previous = match self.state {
            State::Start(start) => {
                self.state = State::Previous(start);
                return Some(start);
            }
            State::Previous(previous) => previous,
            State::Done => return None,
        };

        match self.advance(previous) {
            Some(value) => {
                self.state = State::Previous(value);
                Some(value)
            }
            None => {
                debug!("ping-pong traversal exhausted both directions");
                self.state = State::Done;
                None
            }
        }
    }
}

impl<B> FusedIterator for PingPong<B> where
    B: Add<Output = B> + Sub<Output = B> + Zero + PartialOrd + Copy
{
}

impl<B> ClosedInterval<B>
where
    B: Add<Output = B> + Sub<Output = B> + Zero + PartialOrd + Copy,
{
    /// Ping-pong through the interval from `start`, by multiples of `step`.
    #[must_use]
    pub fn ping_pong(&self, step: B, start: B) -> PingPong<B> {
        PingPong::new(*self, step, start)
    }
}

impl<B: Num + PartialOrd + Copy> ClosedInterval<B> {
    /// Ping-pong through the interval from `start`, by multiples of one.
    #[must_use]
    pub fn ping_pong_from(&self, start: B) -> PingPong<B> {
        self.ping_pong(B::one(), start)
    }

    /// Ping-pong through the interval from its midpoint, by multiples of `step`.
    #[must_use]
    pub fn ping_pong_by(&self, step: B) -> PingPong<B> {
        self.ping_pong(step, self.midpoint())
    }
}
