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

//! Bulk-owned storage for enumeration-tree nodes.
//!
//! Every node ever created lives in one `Vec` and is addressed by a
//! `NodeIndex`. Nodes are never removed one by one: parent links and frontier
//! entries are plain handles into this vector, and the whole arena is cleared
//! at once when the enumeration restarts.

use kbest_core::utils::index::{TypedIndex, TypedIndexTag};
use kbest_model::index::RankIndex;

/// A tag type for node handles.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeIndexTag;

impl TypedIndexTag for NodeIndexTag {
    const NAME: &'static str = "NodeIndex";
}

/// A stable handle to a node in a `NodeArena`.
pub type NodeIndex = TypedIndex<NodeIndexTag>;

/// A node of the enumeration tree.
///
/// The node implicitly represents one assignment: the variables of rank
/// `< first_free` are fixed along the path from the root, every variable of
/// rank `>= first_free` keeps its optimal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumerationNode<W> {
    value: W,
    first_free: RankIndex,
    parent: Option<NodeIndex>,
}

impl<W> EnumerationNode<W>
where
    W: Copy,
{
    /// Returns the objective value of the assignment this node represents.
    #[inline(always)]
    pub fn value(&self) -> W {
        self.value
    }

    /// Returns the rank of the first variable still at its optimal value.
    #[inline(always)]
    pub fn first_free(&self) -> RankIndex {
        self.first_free
    }

    /// Returns the parent handle, or `None` for the root.
    #[inline(always)]
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }
}

/// Owner of every `EnumerationNode` created during one enumeration.
#[derive(Debug, Clone)]
pub struct NodeArena<W> {
    nodes: Vec<EnumerationNode<W>>,
}

impl<W> Default for NodeArena<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> NodeArena<W> {
    /// Creates a new, empty arena.
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an arena with room for the nodes needed to emit
    /// `expected_solutions` solutions (two per emission plus the root).
    #[inline]
    pub fn preallocated(expected_solutions: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(expected_solutions.saturating_mul(2).saturating_add(1)),
        }
    }

    /// Returns the number of nodes created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node at once, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<W> NodeArena<W>
where
    W: Copy,
{
    /// Allocates a new node and returns its handle.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `parent` does not refer to an existing node
    /// or if `first_free` does not exceed the parent's.
    #[inline]
    pub fn create(
        &mut self,
        value: W,
        first_free: RankIndex,
        parent: Option<NodeIndex>,
    ) -> NodeIndex {
        debug_assert!(
            parent.is_none_or(|p| p.get() < self.nodes.len()),
            "called `NodeArena::create` with a dangling parent handle: the len is {} but the parent is {:?}",
            self.nodes.len(),
            parent.map(|p| p.get())
        );
        debug_assert!(
            parent.is_none_or(|p| self.nodes[p.get()].first_free < first_free),
            "called `NodeArena::create` with first_free {} not exceeding the parent's",
            first_free.get()
        );

        let index = NodeIndex::new(self.nodes.len());
        self.nodes.push(EnumerationNode {
            value,
            first_free,
            parent,
        });
        index
    }

    /// Returns the node behind `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not created by this arena (or the arena has been
    /// cleared since).
    #[inline]
    pub fn get(&self, index: NodeIndex) -> &EnumerationNode<W> {
        assert!(
            index.get() < self.nodes.len(),
            "called `NodeArena::get` with node index out of bounds: the len is {} but the index is {}",
            self.nodes.len(),
            index.get()
        );

        &self.nodes[index.get()]
    }

    /// Returns an iterator walking from `start` up to the root, `start` first.
    #[inline]
    pub fn path_to_root(&self, start: NodeIndex) -> PathToRoot<'_, W> {
        PathToRoot {
            arena: self,
            next: Some(start),
        }
    }
}

/// Iterator over the ancestors of a node, created by `NodeArena::path_to_root`.
#[derive(Debug, Clone)]
pub struct PathToRoot<'a, W> {
    arena: &'a NodeArena<W>,
    next: Option<NodeIndex>,
}

impl<'a, W> Iterator for PathToRoot<'a, W>
where
    W: Copy,
{
    type Item = (NodeIndex, &'a EnumerationNode<W>);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = self.arena.get(index);
        self.next = node.parent;
        Some((index, node))
    }
}

impl<W> std::iter::FusedIterator for PathToRoot<'_, W> where W: Copy {}

impl<W> std::fmt::Display for NodeArena<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeArena(nodes: {})", self.nodes.len())
    }
}
