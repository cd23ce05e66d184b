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

//! Max-priority frontier of unvisited enumeration-tree nodes.
//!
//! The frontier stores `NodeIndex` handles keyed by the node's objective
//! value, largest first. It never owns nodes; the handles point into the
//! engine's `NodeArena`.
//!
//! Equal values are popped in creation order (smaller handle first), which
//! makes the emitted sequence deterministic for a given weight vector.

use crate::{arena::NodeIndex, error::FrontierError};
use std::collections::BinaryHeap;

/// A heap entry: the priority key copied from the node plus its handle.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<W> {
    value: W,
    node: NodeIndex,
}

impl<W> PartialEq for FrontierEntry<W>
where
    W: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<W> Eq for FrontierEntry<W> where W: PartialOrd {}

impl<W> PartialOrd for FrontierEntry<W>
where
    W: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for FrontierEntry<W>
where
    W: PartialOrd,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value
            .partial_cmp(&other.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            // Older nodes win ties.
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// A priority queue of node handles ordered by descending value.
#[derive(Debug, Clone)]
pub struct Frontier<W> {
    heap: BinaryHeap<FrontierEntry<W>>,
}

impl<W> Default for Frontier<W>
where
    W: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W>
where
    W: PartialOrd,
{
    /// Creates a new, empty frontier.
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a frontier with room for the entries resident after
    /// `expected_solutions` emissions (at most one net entry per emission).
    #[inline]
    pub fn preallocated(expected_solutions: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(expected_solutions.saturating_add(1)),
        }
    }

    /// Returns the number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the frontier holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Inserts `node` with priority `value` in `O(log m)`.
    /// `value` must be the node's objective value.
    #[inline]
    pub fn push(&mut self, node: NodeIndex, value: W) {
        self.heap.push(FrontierEntry { value, node });
    }

    /// Removes and returns the entry with the largest value in `O(log m)`.
    #[inline]
    pub fn pop_max(&mut self) -> Result<NodeIndex, FrontierError> {
        self.heap
            .pop()
            .map(|entry| entry.node)
            .ok_or(FrontierError::EmptyFrontier)
    }
}

impl<W> std::fmt::Display for Frontier<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frontier(entries: {})", self.heap.len())
    }
}
