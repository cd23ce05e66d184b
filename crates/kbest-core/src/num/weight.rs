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

//! # Weight Numeric Trait
//!
//! `WeightNumeric` collects the bounds the enumeration engine places on the
//! objective coefficients `w[i]`. It is a trait alias with a blanket
//! implementation, so every signed primitive (`i8`..`i128`, `isize`, `f32`,
//! `f64`) qualifies automatically.
//!
//! Floating point weights are accepted but must be finite: the engine orders
//! values with `PartialOrd` and treats incomparable pairs as equal, so NaN
//! silently breaks the ordering guarantees.

use crate::num::constants::Zero;
use num_traits::Signed;

/// A trait alias for numeric types usable as objective weights.
pub trait WeightNumeric:
    Signed
    + Copy
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + Send
    + Sync
{
}

impl<T> WeightNumeric for T where
    T: Signed
        + Copy
        + PartialOrd
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + Send
        + Sync
{
}

/// Returns the value variable `i` takes in the optimal assignment:
/// `true` iff its weight is strictly positive. Zero weights map to `false`.
#[inline(always)]
pub fn optimal_bit<W>(weight: W) -> bool
where
    W: WeightNumeric,
{
    weight > W::ZERO
}

/// Returns the contribution of a weight to the optimal objective value,
/// i.e. `max(weight, 0)`.
#[inline(always)]
pub fn positive_part<W>(weight: W) -> W
where
    W: WeightNumeric,
{
    if optimal_bit(weight) { weight } else { W::ZERO }
}

/// Returns the loss in objective value caused by flipping a variable away
/// from its optimal value, i.e. `|weight|`.
#[inline(always)]
pub fn flip_penalty<W>(weight: W) -> W
where
    W: WeightNumeric,
{
    weight.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_positive<W: WeightNumeric>(weights: &[W]) -> W {
        weights.iter().fold(W::ZERO, |acc, &w| acc + positive_part(w))
    }

    #[test]
    fn test_weight_numeric_covers_signed_primitives() {
        assert_eq!(sum_positive(&[3i8, -2, 1]), 4);
        assert_eq!(sum_positive(&[-1i128, 9]), 9);
        assert_eq!(sum_positive(&[0.5f32, -0.25]), 0.5);
    }

    #[test]
    fn test_optimal_bit_sign_convention() {
        assert!(optimal_bit(3i64));
        assert!(!optimal_bit(-3i64));
        assert!(!optimal_bit(0i64));
        assert!(!optimal_bit(-0.0f64));
        assert!(optimal_bit(0.5f64));
    }

    #[test]
    fn test_positive_part() {
        assert_eq!(positive_part(7i32), 7);
        assert_eq!(positive_part(-7i32), 0);
        assert_eq!(positive_part(0i32), 0);
        assert_eq!(positive_part(-2.5f64), 0.0);
    }

    #[test]
    fn test_flip_penalty_is_absolute_value() {
        assert_eq!(flip_penalty(-4i64), 4);
        assert_eq!(flip_penalty(4i64), 4);
        assert_eq!(flip_penalty(-1.25f64), 1.25);
    }
}
