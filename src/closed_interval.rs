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

//! `ClosedInterval` is a range `[lower, upper]` including both of its bounds.
//!
//! Build one from its bounds, from the extremes of a sequence, or around a center.
//! ```
//! use ranger::{ClosedInterval, PlusMinus};
//!
//! assert_eq!(
//!     ClosedInterval::encompassing(vec![3, -2, 8, 1]),
//!     Some(ClosedInterval::new(-2, 8))
//! );
//! assert_eq!(5_i32.plus_minus(2), Ok(ClosedInterval::new(3, 7)));
//! assert_eq!(ClosedInterval::new(0, 10).clamp(12), 10);
//! ```

use crate::error::IntervalError;
use core::{
    convert::TryFrom,
    ops::{Add, Bound, Div, Range, RangeBounds, RangeInclusive, RangeTo, RangeToInclusive, Sub},
};
use num_traits::{Float, Num, PrimInt, Zero};

/// A range including both its lower and upper bound.
///
/// # Invariants
/// `lower` is always less than or equal to `upper`, so bounds that do not
/// compare with each other (NaN) can never form an interval.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct ClosedInterval<B> {
    lower: B,
    upper: B,
}

impl<B: PartialOrd> ClosedInterval<B> {
    /// Constructor panics if `lower > upper` or the bounds do not compare.
    #[must_use]
    pub fn new(lower: B, upper: B) -> Self {
        assert!(
            lower <= upper,
            "ClosedInterval lower bound must be less than or equal to its upper bound"
        );
        ClosedInterval { lower, upper }
    }

    /// Constructor returning `IntervalError::Inverted` instead of panicking.
    pub fn try_new(lower: B, upper: B) -> Result<Self, IntervalError> {
        if lower <= upper {
            Ok(ClosedInterval { lower, upper })
        } else {
            Err(IntervalError::Inverted)
        }
    }

    /// Tests whether the interval contains the value, bounds included.
    #[must_use]
    pub fn contains(&self, value: &B) -> bool {
        *value >= self.lower && *value <= self.upper
    }

    /// Tests whether every point of `other` is inside this interval.
    #[must_use]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.contains(&other.lower) && self.contains(&other.upper)
    }

    /// Tests whether self and other share at least one point.
    /// Intervals touching at a single bound overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// The lower and upper bound, consuming the interval.
    pub fn into_inner(self) -> (B, B) {
        (self.lower, self.upper)
    }
}

impl<B: PartialOrd + Copy> ClosedInterval<B> {
    /// An interval holding a single value.
    #[must_use]
    pub fn singleton(value: B) -> Self {
        ClosedInterval {
            lower: value,
            upper: value,
        }
    }

    /// The lower bound.
    #[must_use]
    pub fn lower(&self) -> B {
        self.lower
    }

    /// The upper bound.
    #[must_use]
    pub fn upper(&self) -> B {
        self.upper
    }

    /// The smallest interval covering both self and other.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        let lower = if other.lower < self.lower {
            other.lower
        } else {
            self.lower
        };
        let upper = if other.upper > self.upper {
            other.upper
        } else {
            self.upper
        };
        ClosedInterval { lower, upper }
    }

    /// The smallest interval containing every value of `bounds`.
    ///
    /// Returns `None` if there are no values. Values that do not compare with
    /// themselves, like NaN, are skipped.
    pub fn encompassing<I>(bounds: I) -> Option<Self>
    where
        I: IntoIterator<Item = B>,
    {
        let mut bounds = bounds
            .into_iter()
            .filter(|bound| bound.partial_cmp(bound).is_some());

        let first = bounds.next()?;

        Some(bounds.fold(Self::singleton(first), |range, bound| {
            if bound < range.lower {
                ClosedInterval {
                    lower: bound,
                    ..range
                }
            } else if bound > range.upper {
                ClosedInterval {
                    upper: bound,
                    ..range
                }
            } else {
                range
            }
        }))
    }

    /// The interval from the first to the last element of a contiguous slice.
    pub fn spanning(slice: &[B]) -> Result<Self, IntervalError> {
        match (slice.first(), slice.last()) {
            (Some(&first), Some(&last)) => Self::try_new(first, last),
            _ => Err(IntervalError::Empty),
        }
    }

    /// The interval from `minimum` to a transformation of `minimum`.
    pub fn from_transformed<F>(minimum: B, maximum: F) -> Result<Self, IntervalError>
    where
        F: FnOnce(B) -> B,
    {
        Self::try_new(minimum, maximum(minimum))
    }

    /// The value nearest to `value` inside the interval.
    #[must_use]
    pub fn clamp(&self, value: B) -> B {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }
}

impl<B> ClosedInterval<B>
where
    B: Add<Output = B> + Sub<Output = B> + PartialOrd + Copy,
{
    /// `center - radius ..= center + radius`.
    ///
    /// Returns `IntervalError::Inverted` for a negative radius.
    pub fn around(center: B, radius: B) -> Result<Self, IntervalError> {
        Self::try_new(center - radius, center + radius)
    }
}

impl<B: Sub<Output = B> + Copy> ClosedInterval<B> {
    /// `upper - lower`
    #[must_use]
    pub fn magnitude(&self) -> B {
        self.upper - self.lower
    }
}

impl<B: Num + PartialOrd + Copy> ClosedInterval<B> {
    /// `(lower + upper) / 2`, with the rounding of the bound type's division.
    ///
    /// The sum is only formed when the bounds have opposite signs, so bounded
    /// integers do not overflow.
    #[must_use]
    pub fn midpoint(&self) -> B {
        let two = B::one() + B::one();
        let zero = B::zero();
        if self.lower >= zero {
            self.lower + (self.upper - self.lower) / two
        } else if self.upper < zero {
            self.upper - (self.upper - self.lower) / two
        } else {
            (self.lower + self.upper) / two
        }
    }
}

impl<B: Num + Copy> ClosedInterval<B> {
    /// Linear interpolation between `lower` and `upper`.
    ///
    /// `normalized` is not clamped, so values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(&self, normalized: B) -> B {
        normalized * self.magnitude() + self.lower
    }
}

impl<B: Float> ClosedInterval<B> {
    /// A value whose unit is the `magnitude` of this interval and whose origin is `lower`.
    /// Reverse of lerp.
    ///
    /// Not clamped between 0 and 1. Returns `None` when the interval has zero magnitude.
    #[must_use]
    pub fn normalize(&self, value: B) -> Option<B> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            None
        } else {
            Some((value - self.lower) / magnitude)
        }
    }
}

/// The half-open range from `minimum` up to, but excluding, a transformation of `minimum`.
pub fn range_from<B, F>(minimum: B, maximum: F) -> Range<B>
where
    B: Copy,
    F: FnOnce(B) -> B,
{
    minimum..maximum(minimum)
}

/// Builds the interval `self ± radius`.
pub trait PlusMinus: Sized {
    /// `self - radius ..= self + radius`.
    fn plus_minus(self, radius: Self) -> Result<ClosedInterval<Self>, IntervalError>;
}

impl<B> PlusMinus for B
where
    B: Add<Output = B> + Sub<Output = B> + PartialOrd + Copy,
{
    fn plus_minus(self, radius: B) -> Result<ClosedInterval<B>, IntervalError> {
        ClosedInterval::around(self, radius)
    }
}

impl<B> RangeBounds<B> for ClosedInterval<B> {
    fn start_bound(&self) -> Bound<&B> {
        Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> Bound<&B> {
        Bound::Included(&self.upper)
    }
}

/// Divides both bounds.
///
/// # Panics
/// If a bound divides to NaN, e.g. `0.0 / 0.0`.
impl<B: Float> Div<B> for ClosedInterval<B> {
    type Output = Self;

    fn div(self, divisor: B) -> Self {
        let lower = self.lower / divisor;
        let upper = self.upper / divisor;
        // A negative divisor swaps the bounds.
        if lower > upper {
            Self::new(upper, lower)
        } else {
            Self::new(lower, upper)
        }
    }
}

impl<B: PartialOrd> TryFrom<RangeInclusive<B>> for ClosedInterval<B> {
    type Error = IntervalError;

    fn try_from(range: RangeInclusive<B>) -> Result<Self, Self::Error> {
        let (lower, upper) = range.into_inner();
        Self::try_new(lower, upper)
    }
}

impl<B: PrimInt> TryFrom<Range<B>> for ClosedInterval<B> {
    type Error = IntervalError;

    fn try_from(range: Range<B>) -> Result<Self, Self::Error> {
        if range.start < range.end {
            Ok(ClosedInterval {
                lower: range.start,
                upper: range.end - B::one(),
            })
        } else {
            Err(IntervalError::Empty)
        }
    }
}

/// From zero to the upper bound, inclusive.
impl<B: Zero + PartialOrd> TryFrom<RangeToInclusive<B>> for ClosedInterval<B> {
    type Error = IntervalError;

    fn try_from(range: RangeToInclusive<B>) -> Result<Self, Self::Error> {
        Self::try_new(B::zero(), range.end)
    }
}

/// From zero to the upper bound, exclusive.
impl<B: PrimInt> TryFrom<RangeTo<B>> for ClosedInterval<B> {
    type Error = IntervalError;

    fn try_from(range: RangeTo<B>) -> Result<Self, Self::Error> {
        <Self as TryFrom<Range<B>>>::try_from(B::zero()..range.end)
    }
}

impl<B> From<ClosedInterval<B>> for RangeInclusive<B> {
    fn from(interval: ClosedInterval<B>) -> Self {
        interval.lower..=interval.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use quickcheck::TestResult;

    #[test]
    fn test_new_and_try_new() {
        let interval = ClosedInterval::new(-3, 4);
        assert_eq!(interval.lower(), -3);
        assert_eq!(interval.upper(), 4);
        assert_eq!(interval.into_inner(), (-3, 4));

        assert_eq!(ClosedInterval::try_new(4, -3), Err(IntervalError::Inverted));
        assert_eq!(
            ClosedInterval::try_new(f64::NAN, 1.0),
            Err(IntervalError::Inverted)
        );
        assert_eq!(ClosedInterval::try_new(2, 2), Ok(ClosedInterval::singleton(2)));
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_inverted_bounds() {
        let _ = ClosedInterval::new(1, 0);
    }

    #[test]
    fn test_contains_and_overlaps() {
        let interval = ClosedInterval::new(0, 10);

        assert!(interval.contains(&0));
        assert!(interval.contains(&10));
        assert!(!interval.contains(&11));
        assert!(interval.contains_interval(&ClosedInterval::new(2, 10)));
        assert!(!interval.contains_interval(&ClosedInterval::new(-1, 5)));

        // Touching at a shared bound
        assert!(interval.overlaps(&ClosedInterval::new(10, 12)));
        assert!(ClosedInterval::new(-5, 0).overlaps(&interval));
        assert!(!interval.overlaps(&ClosedInterval::new(11, 12)));
    }

    #[test]
    fn test_hull() {
        assert_eq!(
            ClosedInterval::new(4, 6).hull(&ClosedInterval::new(-1, 2)),
            ClosedInterval::new(-1, 6)
        );
        assert_eq!(
            ClosedInterval::new(0, 9).hull(&ClosedInterval::new(2, 3)),
            ClosedInterval::new(0, 9)
        );
    }

    #[test]
    fn test_encompassing() {
        assert_eq!(ClosedInterval::<i32>::encompassing(Vec::new()), None);
        assert_eq!(
            ClosedInterval::encompassing(vec![7]),
            Some(ClosedInterval::singleton(7))
        );
        assert_eq!(
            ClosedInterval::encompassing(vec![1.0, f64::NAN, -10.0, 10.0]),
            Some(ClosedInterval::new(-10.0, 10.0))
        );
        assert_eq!(ClosedInterval::encompassing(vec![f64::NAN]), None);
    }

    #[quickcheck]
    fn test_encompassing_contains_every_value(values: Vec<i32>) -> TestResult {
        match ClosedInterval::encompassing(values.iter().copied()) {
            None => TestResult::from_bool(values.is_empty()),
            Some(interval) => TestResult::from_bool(
                values.iter().all(|v| interval.contains(v))
                    && values.contains(&interval.lower())
                    && values.contains(&interval.upper()),
            ),
        }
    }

    #[test]
    fn test_spanning() {
        let values: Vec<i32> = (0..=10).collect();
        assert_eq!(
            ClosedInterval::spanning(&values[2..=5]),
            Ok(ClosedInterval::new(2, 5))
        );
        assert_eq!(
            ClosedInterval::<i32>::spanning(&[]),
            Err(IntervalError::Empty)
        );
        assert_eq!(
            ClosedInterval::spanning(&[5, 1]),
            Err(IntervalError::Inverted)
        );
    }

    #[test]
    fn test_construct_from_center_and_transform() {
        assert_eq!(ClosedInterval::around(5, 2), Ok(ClosedInterval::new(3, 7)));
        assert_eq!(1.5_f64.plus_minus(0.5), Ok(ClosedInterval::new(1.0, 2.0)));
        assert_eq!(5_i32.plus_minus(-1), Err(IntervalError::Inverted));

        assert_eq!(
            ClosedInterval::from_transformed(3, |min| min * 4),
            Ok(ClosedInterval::new(3, 12))
        );
        assert_eq!(
            ClosedInterval::from_transformed(3, |min| min - 1),
            Err(IntervalError::Inverted)
        );
        assert_eq!(range_from(3, |min| min + 2), 3..5);
    }

    #[test]
    fn test_clamp() {
        let interval = ClosedInterval::new(-2.5, 2.5);
        assert_eq!(interval.clamp(-3.0), -2.5);
        assert_eq!(interval.clamp(0.0), 0.0);
        assert_eq!(interval.clamp(9.0), 2.5);
    }

    #[test]
    fn test_magnitude_and_midpoint() {
        assert_eq!(ClosedInterval::new(2, 10).magnitude(), 8);
        assert_eq!(ClosedInterval::new(2, 10).midpoint(), 6);
        assert_eq!(ClosedInterval::new(2, 9).midpoint(), 5);
        assert_eq!(ClosedInterval::new(-1.5, 7.5).midpoint(), 3.0);
        assert_eq!(ClosedInterval::new(-9, -2).midpoint(), -5);
    }

    #[test]
    fn test_midpoint_near_type_limits() {
        assert_eq!(ClosedInterval::new(200u8, 250).midpoint(), 225);
        assert_eq!(ClosedInterval::new(u8::MIN, u8::MAX).midpoint(), 127);
        assert_eq!(ClosedInterval::new(-128i8, -100).midpoint(), -114);
        assert_eq!(ClosedInterval::new(i8::MIN, i8::MAX).midpoint(), 0);
        assert_eq!(ClosedInterval::singleton(i64::MAX).midpoint(), i64::MAX);
    }

    #[quickcheck]
    fn test_midpoint_matches_wide_sum(a: i8, b: i8) -> bool {
        let interval = ClosedInterval::new(a.min(b), a.max(b));
        i16::from(interval.midpoint()) == (i16::from(a) + i16::from(b)) / 2
    }

    #[test]
    fn test_lerp() {
        let interval = ClosedInterval::new(-1, 3);
        assert_eq!(interval.lerp(0), -1);
        assert_eq!(interval.lerp(1), 3);
        assert_eq!(ClosedInterval::new(-1.0, 3.0).lerp(0.5), 1.0);
        assert_eq!(ClosedInterval::new(-1.0, 3.0).lerp(2.0), 7.0);
    }

    #[test]
    fn test_normalize() {
        let interval = ClosedInterval::encompassing(vec![1.0, -10.0, 10.0]).unwrap();
        assert_eq!(interval.normalize(0.0), Some(0.5));
        assert_eq!(interval.normalize(20.0), Some(1.5));

        assert_eq!(ClosedInterval::new(1.0, 1.0).normalize(1.0), None);
        assert_eq!(ClosedInterval::new(1.0, 1.0).normalize(3.0), None);
    }

    #[quickcheck]
    fn test_normalize_zero_magnitude(bound: i16, value: i16) -> bool {
        ClosedInterval::singleton(f64::from(bound))
            .normalize(f64::from(value))
            .is_none()
    }

    #[quickcheck]
    fn test_normalize_lerp_round_trip(a: i16, b: i16, value: i16) -> TestResult {
        if a == b {
            return TestResult::discard();
        }
        let interval = ClosedInterval::new(f64::from(a.min(b)), f64::from(a.max(b)));
        let value = interval.clamp(f64::from(value));

        match interval.normalize(value) {
            None => TestResult::failed(),
            Some(normalized) => {
                let round_trip = interval.lerp(normalized);
                TestResult::from_bool((round_trip - value).abs() <= 1e-9)
            }
        }
    }

    #[test]
    fn test_division() {
        assert_eq!(
            ClosedInterval::new(10.0, 100.0) / 10.0,
            ClosedInterval::new(1.0, 10.0)
        );
        assert_eq!(
            ClosedInterval::new(10.0, 100.0) / -10.0,
            ClosedInterval::new(-10.0, -1.0)
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            ClosedInterval::<i32>::try_from(1..=9),
            Ok(ClosedInterval::new(1, 9))
        );
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 9..=1;
        assert_eq!(
            ClosedInterval::<i32>::try_from(inverted),
            Err(IntervalError::Inverted)
        );
        assert_eq!(ClosedInterval::<i32>::try_from(1..10), Ok(ClosedInterval::new(1, 9)));
        assert_eq!(ClosedInterval::<i32>::try_from(4..4), Err(IntervalError::Empty));
        assert_eq!(ClosedInterval::<i32>::try_from(..=9), Ok(ClosedInterval::new(0, 9)));
        assert_eq!(
            ClosedInterval::<i32>::try_from(..=-1),
            Err(IntervalError::Inverted)
        );
        assert_eq!(ClosedInterval::<u8>::try_from(..10u8), Ok(ClosedInterval::new(0, 9)));
        assert_eq!(ClosedInterval::<u8>::try_from(..0u8), Err(IntervalError::Empty));

        let range: RangeInclusive<i32> = ClosedInterval::new(2, 5).into();
        assert_eq!(range, 2..=5);
    }

    #[test]
    fn test_range_bounds() {
        let interval = ClosedInterval::new(2, 5);
        assert_eq!(interval.start_bound(), Bound::Included(&2));
        assert_eq!(interval.end_bound(), Bound::Included(&5));

        let values: Vec<i32> = (0..10).filter(|v| interval.contains(v)).collect();
        assert_eq!(values, vec![2, 3, 4, 5]);
    }
}
