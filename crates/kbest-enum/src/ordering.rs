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

//! Variable ordering by nondecreasing absolute weight.
//!
//! The enumeration tree is only prunable when flipping the variable of rank
//! `r` never costs more than flipping the variable of rank `r + 1`. This
//! module computes that permutation once per weight set.
//!
//! Ties in `|w[i]|` are broken by the original variable index (the sort is
//! stable), so the ordering is fully deterministic.

use kbest_core::num::weight::{WeightNumeric, flip_penalty};
use kbest_model::index::{RankIndex, VariableIndex};

/// A permutation of `0..n` sorted by nondecreasing `|w[i]|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableOrdering {
    /// `order[r]` is the variable of rank `r`.
    order: Vec<VariableIndex>,
}

impl VariableOrdering {
    /// Builds the ordering for `weights`.
    ///
    /// Weights must be finite; incomparable pairs are treated as equal.
    pub fn build<W>(weights: &[W]) -> Self
    where
        W: WeightNumeric,
    {
        let mut order: Vec<VariableIndex> = (0..weights.len()).map(VariableIndex::new).collect();
        order.sort_by(|a, b| {
            let wa = flip_penalty(weights[a.get()]);
            let wb = flip_penalty(weights[b.get()]);
            wa.partial_cmp(&wb).unwrap_or(std::cmp::Ordering::Equal)
        });

        Self { order }
    }

    /// Returns the number of variables in the ordering.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the ordering covers no variables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the variable of rank `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of bounds.
    #[inline]
    pub fn variable_at(&self, rank: RankIndex) -> VariableIndex {
        debug_assert!(
            rank.get() < self.len(),
            "called `VariableOrdering::variable_at` with rank out of bounds: the len is {} but the rank is {}",
            self.len(),
            rank.get()
        );

        self.order[rank.get()]
    }

    /// Returns `|w|` of the variable of rank `rank`, the objective loss of
    /// flipping it away from its optimal value.
    #[inline]
    pub fn flip_penalty_at<W>(&self, weights: &[W], rank: RankIndex) -> W
    where
        W: WeightNumeric,
    {
        flip_penalty(weights[self.variable_at(rank).get()])
    }

    /// Returns an iterator over the variables, lowest rank first.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, VariableIndex> {
        self.order.iter()
    }
}

impl std::fmt::Display for VariableOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VariableOrdering(")?;
        for (rank, variable) in self.iter().enumerate() {
            if rank > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", variable.get())?;
        }
        write!(f, ")")
    }
}
