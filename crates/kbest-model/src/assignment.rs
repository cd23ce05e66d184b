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

use crate::index::VariableIndex;
use fixedbitset::FixedBitSet;
use kbest_core::num::weight::{WeightNumeric, optimal_bit};

/// A complete 0/1 assignment of the `n` problem variables.
///
/// Bit `i` holds `x[i]`. The assignment carries no objective value of its
/// own; use `objective_value` to price it against a weight slice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    bits: FixedBitSet,
}

impl Assignment {
    /// Creates the all-zero assignment over `num_variables` variables.
    #[inline]
    pub fn zeros(num_variables: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(num_variables),
        }
    }

    /// Returns the number of variables covered by this assignment.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.bits.len()
    }

    /// Returns the value of variable `variable` as a boolean.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is out of bounds.
    #[inline]
    pub fn get(&self, variable: VariableIndex) -> bool {
        let index = variable.get();
        assert!(
            index < self.num_variables(),
            "called `Assignment::get` with variable index out of bounds: the len is {} but the index is {}",
            self.num_variables(),
            index
        );

        self.bits.contains(index)
    }

    /// Flips variable `variable`.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is out of bounds.
    #[inline]
    pub fn flip(&mut self, variable: VariableIndex) {
        let value = self.get(variable);
        self.bits.set(variable.get(), !value);
    }

    /// Overwrites every variable with its optimal value for `weights`:
    /// `x[i] = 1` iff `w[i] > 0`. Variables with zero weight are set to 0.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len()` differs from the number of variables.
    pub fn set_optimal<W>(&mut self, weights: &[W])
    where
        W: WeightNumeric,
    {
        assert_eq!(
            weights.len(),
            self.num_variables(),
            "called `Assignment::set_optimal` with inconsistent lengths: weights.len() = {}, num_variables = {}",
            weights.len(),
            self.num_variables()
        );

        for (i, &w) in weights.iter().enumerate() {
            self.bits.set(i, optimal_bit(w));
        }
    }

    /// Returns an iterator over the variable values in index order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.num_variables()).map(|i| self.bits.contains(i))
    }

    /// Packs the assignment into an integer with `x[i]` at bit `i`.
    /// Returns `None` when the assignment has more than 64 variables.
    pub fn encode(&self) -> Option<u64> {
        if self.num_variables() > 64 {
            return None;
        }
        Some(self.bits.ones().fold(0u64, |acc, i| acc | (1u64 << i)))
    }

    /// Computes `Σ w[i]·x[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len()` differs from the number of variables.
    pub fn objective_value<W>(&self, weights: &[W]) -> W
    where
        W: WeightNumeric,
    {
        assert_eq!(
            weights.len(),
            self.num_variables(),
            "called `Assignment::objective_value` with inconsistent lengths: weights.len() = {}, num_variables = {}",
            weights.len(),
            self.num_variables()
        );

        self.bits.ones().fold(W::ZERO, |acc, i| acc + weights[i])
    }
}

impl FromIterator<bool> for Assignment {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let values: Vec<bool> = iter.into_iter().collect();
        let mut bits = FixedBitSet::with_capacity(values.len());
        for (i, value) in values.into_iter().enumerate() {
            bits.set(i, value);
        }
        Self { bits }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(value))?;
        }
        write!(f, "]")
    }
}
