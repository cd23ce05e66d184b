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

//! Lazy best-first enumeration of 0/1 assignments.
//!
//! `Enumerator` solves `max Σ w[i]·x[i]` over `x ∈ {0,1}^n` and then lists
//! every assignment in nonincreasing objective order, one per `next_value`
//! call. Nothing beyond a linear-in-k fragment of the solution space is ever
//! built after k requests.
//!
//! The enumeration tree is rooted at the optimal assignment. With the
//! variables ranked by nondecreasing `|w[i]|`, a node whose first
//! `first_free` ranks are fixed has as sons the nodes that additionally flip
//! one rank `r >= first_free`. Flipping a lower rank never costs more than
//! flipping a higher one, so after popping a node only its first son and its
//! right brother can be the next best candidates; every other unvisited node
//! is dominated by one of those two. Each emission therefore allocates at
//! most two nodes and performs at most one pop and two pushes.
//!
//! Assignments are never stored. `current_solution` rebuilds the latest one
//! by climbing from the current node to the root: each edge flips exactly one
//! rank, and every rank not flipped on the path keeps its optimal value.
//!
//! Lifecycle
//! - `set_weights` attaches a borrowed weight slice and discards every piece
//!   of enumeration state, the cached ordering included.
//! - `solve` restarts the enumeration from the optimum, keeping the ordering.
//! - The first `next_value` returns the optimum without building any tree;
//!   the second builds the ordering, the root, and its first son.

use crate::{
    arena::{NodeArena, NodeIndex},
    error::EnumerationError,
    frontier::Frontier,
    iter::RankedSolutions,
    monitor::{enumeration_monitor::EnumerationMonitor, no_op::NoOperationMonitor},
    ordering::VariableOrdering,
    stats::EnumerationStatistics,
};
use kbest_core::num::weight::{WeightNumeric, positive_part};
use kbest_model::{assignment::Assignment, index::RankIndex};

/// The observable phase of an `Enumerator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationPhase {
    /// No weights attached, or weights attached but `solve` not called yet.
    Uninitialized,
    /// Solved; no value emitted since the last restart.
    Solved,
    /// Exactly one value (the optimum) emitted.
    Seeding,
    /// Two or more values emitted.
    Enumerating,
}

impl std::fmt::Display for EnumerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Solved => write!(f, "Solved"),
            Self::Seeding => write!(f, "Seeding"),
            Self::Enumerating => write!(f, "Enumerating"),
        }
    }
}

/// Ranked enumerator over all `2^n` assignments of `n` binary variables.
///
/// The weights are borrowed for `'w` and never copied; replacing them with
/// `set_weights` resets the enumeration.
///
/// The engine is single-threaded and not reentrant. Share it across threads
/// only behind external synchronization.
pub struct Enumerator<'w, W, M = NoOperationMonitor<W>>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
    num_variables: usize,
    weights: Option<&'w [W]>,
    ordering: Option<VariableOrdering>,
    arena: NodeArena<W>,
    frontier: Frontier<W>,
    current: Option<NodeIndex>,
    optimal_value: Option<W>,
    last_value: Option<W>,
    solutions_emitted: u64,
    solved: bool,
    exhausted_reported: bool,
    statistics: EnumerationStatistics,
    monitor: M,
}

impl<'w, W> Enumerator<'w, W, NoOperationMonitor<W>>
where
    W: WeightNumeric,
{
    /// Creates an enumerator for `num_variables` variables.
    ///
    /// # Panics
    ///
    /// Panics if `num_variables` is zero.
    #[inline]
    pub fn new(num_variables: usize) -> Self {
        Self::with_monitor(num_variables, NoOperationMonitor::new())
    }

    /// Creates an enumerator with arena and frontier storage reserved for
    /// `expected_solutions` emissions.
    ///
    /// # Panics
    ///
    /// Panics if `num_variables` is zero.
    #[inline]
    pub fn preallocated(num_variables: usize, expected_solutions: usize) -> Self {
        Self::preallocated_with_monitor(num_variables, expected_solutions, NoOperationMonitor::new())
    }
}

impl<'w, W, M> Enumerator<'w, W, M>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
    /// Creates an enumerator that reports its progress to `monitor`.
    ///
    /// # Panics
    ///
    /// Panics if `num_variables` is zero.
    #[inline]
    pub fn with_monitor(num_variables: usize, monitor: M) -> Self {
        Self::from_parts(num_variables, NodeArena::new(), Frontier::new(), monitor)
    }

    /// Creates a preallocated enumerator that reports to `monitor`.
    ///
    /// # Panics
    ///
    /// Panics if `num_variables` is zero.
    #[inline]
    pub fn preallocated_with_monitor(
        num_variables: usize,
        expected_solutions: usize,
        monitor: M,
    ) -> Self {
        Self::from_parts(
            num_variables,
            NodeArena::preallocated(expected_solutions),
            Frontier::preallocated(expected_solutions),
            monitor,
        )
    }

    fn from_parts(
        num_variables: usize,
        arena: NodeArena<W>,
        frontier: Frontier<W>,
        monitor: M,
    ) -> Self {
        assert!(
            num_variables > 0,
            "called `Enumerator::new` with zero variables"
        );

        Self {
            num_variables,
            weights: None,
            ordering: None,
            arena,
            frontier,
            current: None,
            optimal_value: None,
            last_value: None,
            solutions_emitted: 0,
            solved: false,
            exhausted_reported: false,
            statistics: EnumerationStatistics::default(),
            monitor,
        }
    }

    /// Attaches `weights`, discarding all enumeration state of any previous
    /// weight set. `solve` must be called before values are requested.
    ///
    /// Weights must be finite; they are not validated.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len()` differs from the number of variables.
    pub fn set_weights(&mut self, weights: &'w [W]) {
        assert_eq!(
            weights.len(),
            self.num_variables,
            "called `Enumerator::set_weights` with {} weights for {} variables",
            weights.len(),
            self.num_variables
        );

        self.ordering = None;
        self.reset_enumeration();
        self.solved = false;
        self.weights = Some(weights);
    }

    /// Prepares the enumeration so that the next value is the optimum.
    /// Calling it again restarts the enumeration from the optimum.
    pub fn solve(&mut self) -> Result<(), EnumerationError> {
        if self.weights.is_none() {
            return Err(EnumerationError::NoWeights);
        }

        self.reset_enumeration();
        self.solved = true;
        self.monitor.on_solve(self.num_variables);
        Ok(())
    }

    /// Returns the objective value of the next best assignment.
    ///
    /// The first call after `solve` returns the optimum `Σ max(w[i], 0)`;
    /// subsequent calls return every other assignment's value in
    /// nonincreasing order, each value repeated once per assignment
    /// attaining it. Calling this on attached but unsolved weights behaves as
    /// if `solve` had just been called.
    ///
    /// # Errors
    ///
    /// - `NoWeights` if no weights are attached.
    /// - `ExhaustedEnumeration` once all `2^n` assignments have been emitted.
    pub fn next_value(&mut self) -> Result<W, EnumerationError> {
        let weights = self.weights.ok_or(EnumerationError::NoWeights)?;
        if !self.solved {
            self.solve()?;
        }

        let value = match self.solutions_emitted {
            0 => self.emit_optimum(weights),
            1 => self.seed_tree(weights),
            _ => self.pop_frontier(weights)?,
        };

        self.solutions_emitted = self.solutions_emitted.saturating_add(1);
        self.last_value = Some(value);
        self.statistics.on_value_emitted();
        self.monitor.on_value_emitted(value, &self.statistics);
        Ok(value)
    }

    /// Computes the optimum directly from the weights; no tree is needed.
    #[inline]
    fn emit_optimum(&mut self, weights: &[W]) -> W {
        let value = weights
            .iter()
            .fold(W::ZERO, |acc, &w| acc + positive_part(w));
        self.optimal_value = Some(value);
        value
    }

    /// Creates the root as a parent anchor and makes its first son, the
    /// optimum with the cheapest variable flipped, the current node. The
    /// first son is expanded right away instead of being queued.
    fn seed_tree(&mut self, weights: &[W]) -> W {
        let optimal_value = match self.optimal_value {
            Some(value) => value,
            None => self.emit_optimum(weights),
        };

        let ordering = match self.ordering.take() {
            Some(ordering) => ordering,
            None => {
                self.statistics.on_ordering_built();
                VariableOrdering::build(weights)
            }
        };
        let cheapest = ordering.flip_penalty_at(weights, RankIndex::new(0));

        let root = self.create_node(optimal_value, RankIndex::new(0), None);
        let first_son = self.create_node(optimal_value - cheapest, RankIndex::new(1), Some(root));

        self.current = Some(first_son);
        self.expand(weights, &ordering, first_son);
        self.ordering = Some(ordering);
        self.arena.get(first_son).value()
    }

    /// Pops the best frontier node, makes it current, and expands it.
    fn pop_frontier(&mut self, weights: &[W]) -> Result<W, EnumerationError> {
        let node = match self.frontier.pop_max() {
            Ok(node) => node,
            Err(e) => {
                if !self.exhausted_reported {
                    self.exhausted_reported = true;
                    self.monitor.on_exhausted(&self.statistics);
                }
                return Err(e.into());
            }
        };
        self.statistics.on_frontier_pop();

        let ordering = match self.ordering.take() {
            Some(ordering) => ordering,
            None => unreachable!("frontier nodes exist only after the ordering is built"),
        };
        self.current = Some(node);
        self.expand(weights, &ordering, node);
        self.ordering = Some(ordering);
        Ok(self.arena.get(node).value())
    }

    /// Pushes the first son and the right brother of `node`, if `node` still
    /// has unfixed ranks.
    fn expand(&mut self, weights: &[W], ordering: &VariableOrdering, node: NodeIndex) {
        let current = *self.arena.get(node);
        let rank = current.first_free();
        if rank.get() >= self.num_variables {
            return;
        }

        let parent = match current.parent() {
            Some(parent) => parent,
            None => unreachable!("the root is never expanded"),
        };
        let penalty = ordering.flip_penalty_at(weights, rank);
        let next_rank = rank.next();

        let first_son = self.create_node(current.value() - penalty, next_rank, Some(node));
        self.push_frontier(first_son);

        let parent_value = self.arena.get(parent).value();
        let right_brother = self.create_node(parent_value - penalty, next_rank, Some(parent));
        self.push_frontier(right_brother);

        self.monitor.on_nodes_created(2, &self.statistics);
    }

    #[inline]
    fn create_node(&mut self, value: W, first_free: RankIndex, parent: Option<NodeIndex>) -> NodeIndex {
        let index = self.arena.create(value, first_free, parent);
        self.statistics.on_node_created();
        index
    }

    #[inline]
    fn push_frontier(&mut self, node: NodeIndex) {
        let value = self.arena.get(node).value();
        self.frontier.push(node, value);
        self.statistics.on_frontier_push(self.frontier.len());
    }

    /// Writes the assignment whose value was returned by the latest
    /// `next_value` call into `out`. Two calls with no `next_value` in
    /// between write the same assignment.
    ///
    /// # Errors
    ///
    /// `NoCurrentSolution` if no value has been emitted since the last
    /// restart.
    ///
    /// # Panics
    ///
    /// Panics if `out` does not cover exactly `n` variables.
    pub fn current_solution(&self, out: &mut Assignment) -> Result<(), EnumerationError> {
        assert_eq!(
            out.num_variables(),
            self.num_variables,
            "called `Enumerator::current_solution` with an assignment over {} variables, expected {}",
            out.num_variables(),
            self.num_variables
        );

        let weights = match self.weights {
            Some(weights) if self.solutions_emitted > 0 => weights,
            _ => return Err(EnumerationError::NoCurrentSolution),
        };

        out.set_optimal(weights);
        let (current, ordering) = match (self.current, self.ordering.as_ref()) {
            (Some(current), Some(ordering)) if self.solutions_emitted > 1 => (current, ordering),
            _ => return Ok(()),
        };

        // Every non-root node on the path flipped the rank just below its
        // `first_free`; ranks strictly decrease towards the root.
        for (_, node) in self.arena.path_to_root(current) {
            if let Some(flipped) = node.first_free().checked_prev() {
                out.flip(ordering.variable_at(flipped));
            }
        }

        Ok(())
    }

    /// Returns a freshly allocated copy of the current assignment.
    pub fn current_assignment(&self) -> Result<Assignment, EnumerationError> {
        let mut out = Assignment::zeros(self.num_variables);
        self.current_solution(&mut out)?;
        Ok(out)
    }

    /// Returns an iterator over `(value, assignment)` pairs continuing from
    /// the current position, solving first if needed.
    pub fn ranked(&mut self) -> Result<RankedSolutions<'_, 'w, W, M>, EnumerationError> {
        if self.weights.is_none() {
            return Err(EnumerationError::NoWeights);
        }
        if !self.solved {
            self.solve()?;
        }
        Ok(RankedSolutions::new(self))
    }

    /// Drops the tree, the frontier, and the counters; keeps the ordering.
    fn reset_enumeration(&mut self) {
        self.arena.clear();
        self.frontier.clear();
        self.current = None;
        self.optimal_value = None;
        self.last_value = None;
        self.solutions_emitted = 0;
        self.exhausted_reported = false;
        self.statistics.reset();
    }

    /// Returns the number of values emitted since the last restart.
    #[inline]
    pub fn solutions_emitted(&self) -> u64 {
        self.solutions_emitted
    }

    /// Returns the number of variables.
    #[inline]
    pub fn variable_count(&self) -> usize {
        self.num_variables
    }

    /// Returns the attached weights, if any.
    #[inline]
    pub fn weights(&self) -> Option<&'w [W]> {
        self.weights
    }

    /// Returns `true` if weights are attached.
    #[inline]
    pub fn has_weights(&self) -> bool {
        self.weights.is_some()
    }

    /// Returns `true` if `solve` was called for the attached weights.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the current phase of the enumeration.
    #[inline]
    pub fn phase(&self) -> EnumerationPhase {
        match (self.solved, self.solutions_emitted) {
            (false, _) => EnumerationPhase::Uninitialized,
            (true, 0) => EnumerationPhase::Solved,
            (true, 1) => EnumerationPhase::Seeding,
            (true, _) => EnumerationPhase::Enumerating,
        }
    }

    /// Returns the optimal value once it has been emitted.
    #[inline]
    pub fn optimal_value(&self) -> Option<W> {
        self.optimal_value
    }

    /// Returns the value of the latest emitted assignment.
    #[inline]
    pub fn current_value(&self) -> Option<W> {
        self.last_value
    }

    /// Returns the cached variable ordering, if it has been built.
    #[inline]
    pub fn ordering(&self) -> Option<&VariableOrdering> {
        self.ordering.as_ref()
    }

    /// Returns the number of tree nodes currently owned by the arena.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of nodes waiting in the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns the counters collected since the last restart.
    #[inline]
    pub fn statistics(&self) -> &EnumerationStatistics {
        &self.statistics
    }

    /// Returns the monitor.
    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }
}

impl<'w, W, M> std::fmt::Debug for Enumerator<'w, W, M>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enumerator")
            .field("num_variables", &self.num_variables)
            .field("phase", &self.phase())
            .field("solutions_emitted", &self.solutions_emitted)
            .field("num_nodes", &self.arena.len())
            .field("frontier_len", &self.frontier.len())
            .field("monitor", &self.monitor.name())
            .finish()
    }
}

impl<'w, W, M> std::fmt::Display for Enumerator<'w, W, M>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Enumerator(variables: {}, phase: {}, emitted: {})",
            self.num_variables,
            self.phase(),
            self.solutions_emitted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixedbitset::FixedBitSet;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    /// All `2^n` objective values, sorted in nonincreasing order.
    fn brute_force_values(weights: &[i64]) -> Vec<i64> {
        let n = weights.len();
        let mut values: Vec<i64> = (0..(1u64 << n))
            .map(|mask| {
                (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| weights[i])
                    .sum()
            })
            .collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }

    fn random_weights(rng: &mut ChaCha8Rng, n: usize) -> Vec<i64> {
        (0..n).map(|_| rng.gen_range(-100..100)).collect()
    }

    /// Drains the enumerator, checking every assignment against its value.
    fn drain(enumerator: &mut Enumerator<'_, i64>) -> Vec<(i64, Assignment)> {
        let weights = enumerator.weights().unwrap();
        let mut out = Vec::new();
        let mut buffer = Assignment::zeros(enumerator.variable_count());
        while let Ok(value) = enumerator.next_value() {
            enumerator.current_solution(&mut buffer).unwrap();
            assert_eq!(buffer.objective_value(weights), value);
            out.push((value, buffer.clone()));
        }
        out
    }

    #[test]
    fn test_small_example_sequence() {
        let weights = [5i64, -2, 1];
        let mut enumerator = Enumerator::<i64>::new(3);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();

        assert_eq!(enumerator.next_value(), Ok(6));
        assert_eq!(enumerator.current_assignment().unwrap().to_string(), "[1, 0, 1]");

        assert_eq!(enumerator.next_value(), Ok(5));
        assert_eq!(enumerator.current_assignment().unwrap().to_string(), "[1, 0, 0]");

        let mut values = vec![6, 5];
        while let Ok(value) = enumerator.next_value() {
            values.push(value);
        }
        assert_eq!(values, vec![6, 5, 4, 3, 1, 0, -1, -2]);
        assert_eq!(enumerator.solutions_emitted(), 8);
    }

    #[test]
    fn test_single_zero_weight_emits_exactly_twice() {
        let weights = [0i64];
        let mut enumerator = Enumerator::<i64>::new(1);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();

        assert_eq!(enumerator.next_value(), Ok(0));
        assert_eq!(enumerator.current_assignment().unwrap().to_string(), "[0]");
        assert_eq!(enumerator.next_value(), Ok(0));
        assert_eq!(enumerator.current_assignment().unwrap().to_string(), "[1]");
        assert_eq!(
            enumerator.next_value(),
            Err(EnumerationError::ExhaustedEnumeration)
        );
    }

    #[test]
    fn test_matches_brute_force_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in 1..=9 {
            for _ in 0..5 {
                let weights = random_weights(&mut rng, n);
                let mut enumerator = Enumerator::<i64>::new(n);
                enumerator.set_weights(&weights);
                enumerator.solve().unwrap();

                let emitted = drain(&mut enumerator);
                let values: Vec<i64> = emitted.iter().map(|(v, _)| *v).collect();
                assert_eq!(values, brute_force_values(&weights), "weights = {:?}", weights);

                let mut seen = FixedBitSet::with_capacity(1 << n);
                for (_, assignment) in &emitted {
                    let code = assignment.encode().unwrap() as usize;
                    assert!(!seen.contains(code), "duplicate assignment {}", assignment);
                    seen.insert(code);
                }
                assert_eq!(seen.count_ones(..), 1 << n);
            }
        }
    }

    #[test]
    fn test_first_value_is_sum_of_positive_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in [1, 5, 40, 200] {
            let weights = random_weights(&mut rng, n);
            let mut enumerator = Enumerator::<i64>::new(n);
            enumerator.set_weights(&weights);
            enumerator.solve().unwrap();
            let expected: i64 = weights.iter().filter(|&&w| w > 0).sum();
            assert_eq!(enumerator.next_value(), Ok(expected));
            assert_eq!(enumerator.optimal_value(), Some(expected));
        }
    }

    #[test]
    fn test_large_instance_prefix_is_nonincreasing_and_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(2003);
        let n = 64;
        let weights = random_weights(&mut rng, n);
        let mut enumerator = Enumerator::<i64>::preallocated(n, 2000);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();

        let mut previous = i64::MAX;
        let mut seen = std::collections::HashSet::new();
        for k in 1..=2000usize {
            let value = enumerator.next_value().unwrap();
            assert!(value <= previous);
            previous = value;

            let assignment = enumerator.current_assignment().unwrap();
            assert_eq!(assignment.objective_value(&weights), value);
            assert!(seen.insert(assignment));

            assert!(enumerator.num_nodes() <= 2 * k + 1);
            assert!(enumerator.frontier_len() <= k);
        }
    }

    #[test]
    fn test_float_weights_are_nonincreasing() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let weights: Vec<f64> = (0..12).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut enumerator = Enumerator::<f64>::new(weights.len());
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();

        let mut previous = f64::INFINITY;
        let mut count = 0;
        while let Ok(value) = enumerator.next_value() {
            assert!(value <= previous);
            previous = value;
            let assignment = enumerator.current_assignment().unwrap();
            assert!((assignment.objective_value(&weights) - value).abs() < 1e-9);
            count += 1;
        }
        assert_eq!(count, 1 << weights.len());
    }

    #[test]
    fn test_all_zero_weights_enumerate_every_assignment() {
        let weights = [0i64; 4];
        let mut enumerator = Enumerator::<i64>::new(4);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();

        let emitted = drain(&mut enumerator);
        assert_eq!(emitted.len(), 16);
        assert!(emitted.iter().all(|(v, _)| *v == 0));
        let distinct: std::collections::HashSet<_> =
            emitted.into_iter().map(|(_, a)| a).collect();
        assert_eq!(distinct.len(), 16);
    }

    #[test]
    fn test_solve_without_weights_fails() {
        let mut enumerator = Enumerator::<i64>::new(3);
        assert_eq!(enumerator.solve(), Err(EnumerationError::NoWeights));
        assert_eq!(enumerator.next_value(), Err(EnumerationError::NoWeights));
        assert_eq!(enumerator.phase(), EnumerationPhase::Uninitialized);
    }

    #[test]
    fn test_current_solution_before_any_value_fails() {
        let weights = [1i64, 2];
        let mut enumerator = Enumerator::<i64>::new(2);
        let mut out = Assignment::zeros(2);
        assert_eq!(
            enumerator.current_solution(&mut out),
            Err(EnumerationError::NoCurrentSolution)
        );

        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();
        assert_eq!(
            enumerator.current_solution(&mut out),
            Err(EnumerationError::NoCurrentSolution)
        );

        enumerator.next_value().unwrap();
        enumerator.next_value().unwrap();
        enumerator.solve().unwrap();
        assert_eq!(
            enumerator.current_solution(&mut out),
            Err(EnumerationError::NoCurrentSolution)
        );
    }

    #[test]
    fn test_solve_restarts_from_optimum() {
        let weights = [3i64, -4, 1, 2];
        let mut enumerator = Enumerator::<i64>::new(4);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();
        let first_run = drain(&mut enumerator);

        enumerator.solve().unwrap();
        assert_eq!(enumerator.solutions_emitted(), 0);
        assert_eq!(enumerator.num_nodes(), 0);
        assert_eq!(enumerator.frontier_len(), 0);
        assert!(enumerator.ordering().is_some());

        let second_run = drain(&mut enumerator);
        assert_eq!(first_run, second_run);
    }

    #[test]
    fn test_set_weights_discards_progress() {
        let first = [3i64, -4, 1];
        let second = [-1i64, -2, 10];
        let mut enumerator = Enumerator::<i64>::new(3);
        enumerator.set_weights(&first);
        enumerator.solve().unwrap();
        enumerator.next_value().unwrap();
        enumerator.next_value().unwrap();
        enumerator.next_value().unwrap();

        enumerator.set_weights(&second);
        assert!(enumerator.ordering().is_none());
        assert_eq!(enumerator.solutions_emitted(), 0);
        assert!(!enumerator.is_solved());
        assert_eq!(enumerator.phase(), EnumerationPhase::Uninitialized);

        enumerator.solve().unwrap();
        assert_eq!(enumerator.next_value(), Ok(10));
        assert_eq!(enumerator.current_assignment().unwrap().to_string(), "[0, 0, 1]");
        assert_eq!(enumerator.next_value(), Ok(9));
    }

    #[test]
    fn test_restart_reuses_cached_ordering() {
        let weights = [4i64, -1, 2, -3];
        let mut enumerator = Enumerator::<i64>::new(4);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();
        enumerator.next_value().unwrap();
        enumerator.next_value().unwrap();
        assert_eq!(enumerator.statistics().ordering_builds, 1);
        assert_eq!(enumerator.current_assignment().unwrap().to_string(), "[1, 1, 1, 0]");

        enumerator.solve().unwrap();
        enumerator.next_value().unwrap();
        assert_eq!(enumerator.next_value(), Ok(5));
        assert_eq!(enumerator.statistics().ordering_builds, 0);
        assert_eq!(enumerator.current_assignment().unwrap().to_string(), "[1, 1, 1, 0]");
        assert!(enumerator.ordering().is_some());
    }

    #[test]
    fn test_current_solution_overwrites_stale_buffer() {
        let weights = [2i64, -5, 3];
        let mut enumerator = Enumerator::<i64>::new(3);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();

        let mut buffer: Assignment = [false, true, false].into_iter().collect();
        enumerator.next_value().unwrap();
        enumerator.current_solution(&mut buffer).unwrap();
        assert_eq!(buffer.to_string(), "[1, 0, 1]");

        for _ in 0..5 {
            let value = enumerator.next_value().unwrap();
            buffer = [true, true, true].into_iter().collect();
            enumerator.current_solution(&mut buffer).unwrap();
            assert_eq!(buffer.objective_value(&weights), value);
        }
    }

    #[test]
    fn test_next_value_on_unsolved_weights_solves_implicitly() {
        let weights = [2i64, -3];
        let mut enumerator = Enumerator::<i64>::new(2);
        enumerator.set_weights(&weights);
        assert_eq!(enumerator.next_value(), Ok(2));
        assert!(enumerator.is_solved());
    }

    #[test]
    fn test_current_solution_is_idempotent() {
        let weights = [6i64, -1, 3, -2, 5];
        let mut enumerator = Enumerator::<i64>::new(5);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();
        for _ in 0..10 {
            enumerator.next_value().unwrap();
            let a = enumerator.current_assignment().unwrap();
            let b = enumerator.current_assignment().unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_exhaustion_leaves_state_untouched() {
        let weights = [1i64, -1];
        let mut enumerator = Enumerator::<i64>::new(2);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();
        for _ in 0..4 {
            enumerator.next_value().unwrap();
        }
        let last = enumerator.current_assignment().unwrap();
        let emitted = enumerator.solutions_emitted();

        assert_eq!(
            enumerator.next_value(),
            Err(EnumerationError::ExhaustedEnumeration)
        );
        assert_eq!(
            enumerator.next_value(),
            Err(EnumerationError::ExhaustedEnumeration)
        );
        assert_eq!(enumerator.solutions_emitted(), emitted);
        assert_eq!(enumerator.current_assignment().unwrap(), last);
        assert_eq!(enumerator.current_value(), Some(-1));
    }

    #[test]
    fn test_phase_transitions() {
        let weights = [1i64, 2];
        let mut enumerator = Enumerator::<i64>::new(2);
        assert_eq!(enumerator.phase(), EnumerationPhase::Uninitialized);
        enumerator.set_weights(&weights);
        assert_eq!(enumerator.phase(), EnumerationPhase::Uninitialized);
        enumerator.solve().unwrap();
        assert_eq!(enumerator.phase(), EnumerationPhase::Solved);
        enumerator.next_value().unwrap();
        assert_eq!(enumerator.phase(), EnumerationPhase::Seeding);
        assert_eq!(enumerator.num_nodes(), 0);
        assert!(enumerator.ordering().is_none());
        enumerator.next_value().unwrap();
        assert_eq!(enumerator.phase(), EnumerationPhase::Enumerating);
        assert!(enumerator.ordering().is_some());
        assert_eq!(
            format!("{}", enumerator),
            "Enumerator(variables: 2, phase: Enumerating, emitted: 2)"
        );
    }

    #[test]
    fn test_statistics_after_full_enumeration() {
        let weights = [5i64, -2, 1];
        let mut enumerator = Enumerator::<i64>::new(3);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();
        while enumerator.next_value().is_ok() {}

        let stats = enumerator.statistics();
        assert_eq!(stats.values_emitted, 8);
        assert_eq!(stats.ordering_builds, 1);
        assert_eq!(stats.frontier_pops, 6);
        assert_eq!(stats.frontier_pushes, stats.nodes_created - 2);
        assert_eq!(stats.nodes_created as usize, enumerator.num_nodes());
        assert!(stats.peak_frontier_len >= 2);
    }

    #[test]
    fn test_identical_weights_give_identical_sequences() {
        let weights = [2i64, -2, 2, 0, -2];
        let mut a = Enumerator::<i64>::new(5);
        let mut b = Enumerator::<i64>::new(5);
        a.set_weights(&weights);
        b.set_weights(&weights);
        a.solve().unwrap();
        b.solve().unwrap();
        assert_eq!(drain(&mut a), drain(&mut b));
    }

    struct RecordingMonitor {
        solves: Arc<AtomicUsize>,
        values: Arc<AtomicUsize>,
        nodes: Arc<AtomicUsize>,
        exhausted: Arc<AtomicUsize>,
    }

    impl EnumerationMonitor<i64> for RecordingMonitor {
        fn on_solve(&mut self, _num_variables: usize) {
            self.solves.fetch_add(1, Ordering::Relaxed);
        }

        fn on_value_emitted(&mut self, _value: i64, _statistics: &EnumerationStatistics) {
            self.values.fetch_add(1, Ordering::Relaxed);
        }

        fn on_nodes_created(&mut self, count: usize, _statistics: &EnumerationStatistics) {
            self.nodes.fetch_add(count, Ordering::Relaxed);
        }

        fn on_exhausted(&mut self, _statistics: &EnumerationStatistics) {
            self.exhausted.fetch_add(1, Ordering::Relaxed);
        }

        fn name(&self) -> &str {
            "RecordingMonitor"
        }
    }

    #[test]
    fn test_monitor_receives_events() {
        let solves = Arc::new(AtomicUsize::new(0));
        let values = Arc::new(AtomicUsize::new(0));
        let nodes = Arc::new(AtomicUsize::new(0));
        let exhausted = Arc::new(AtomicUsize::new(0));
        let monitor = RecordingMonitor {
            solves: solves.clone(),
            values: values.clone(),
            nodes: nodes.clone(),
            exhausted: exhausted.clone(),
        };

        let weights = [1i64, 2, -3];
        let mut enumerator = Enumerator::with_monitor(3, monitor);
        enumerator.set_weights(&weights);
        enumerator.solve().unwrap();
        while enumerator.next_value().is_ok() {}
        assert!(enumerator.next_value().is_err());

        assert_eq!(solves.load(Ordering::Relaxed), 1);
        assert_eq!(values.load(Ordering::Relaxed), 8);
        assert_eq!(exhausted.load(Ordering::Relaxed), 1);
        assert_eq!(
            nodes.load(Ordering::Relaxed) + 2,
            enumerator.num_nodes()
        );
        assert_eq!(enumerator.monitor().name(), "RecordingMonitor");
    }

    #[test]
    #[should_panic(expected = "called `Enumerator::new` with zero variables")]
    fn test_zero_variables_panics() {
        let _ = Enumerator::<i64>::new(0);
    }

    #[test]
    #[should_panic(expected = "called `Enumerator::set_weights` with 2 weights for 3 variables")]
    fn test_weight_length_mismatch_panics() {
        let weights = [1i64, 2];
        let mut enumerator = Enumerator::<i64>::new(3);
        enumerator.set_weights(&weights);
    }

    #[test]
    #[should_panic(expected = "called `Enumerator::current_solution` with an assignment over 1 variables")]
    fn test_output_length_mismatch_panics() {
        let weights = [1i64, 2];
        let mut enumerator = Enumerator::<i64>::new(2);
        enumerator.set_weights(&weights);
        enumerator.next_value().unwrap();
        let mut out = Assignment::zeros(1);
        let _ = enumerator.current_solution(&mut out);
    }
}
