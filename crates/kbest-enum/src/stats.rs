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

/// Counters collected while enumerating solutions.
///
/// The counters are reset whenever the enumeration restarts (new weights or
/// a new `solve`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationStatistics {
    /// Total values handed to the caller, the optimum included.
    pub values_emitted: u64,
    /// Total enumeration-tree nodes allocated in the arena.
    pub nodes_created: u64,
    /// Total entries inserted into the frontier.
    pub frontier_pushes: u64,
    /// Total entries extracted from the frontier.
    pub frontier_pops: u64,
    /// The largest number of entries resident in the frontier at once.
    pub peak_frontier_len: u64,
    /// How many times the variable ordering was computed.
    pub ordering_builds: u64,
}

impl EnumerationStatistics {
    #[inline]
    pub fn on_value_emitted(&mut self) {
        self.values_emitted = self.values_emitted.saturating_add(1);
    }

    #[inline]
    pub fn on_node_created(&mut self) {
        self.nodes_created = self.nodes_created.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_push(&mut self, resident: usize) {
        self.frontier_pushes = self.frontier_pushes.saturating_add(1);
        self.peak_frontier_len = self.peak_frontier_len.max(resident as u64);
    }

    #[inline]
    pub fn on_frontier_pop(&mut self) {
        self.frontier_pops = self.frontier_pops.saturating_add(1);
    }

    #[inline]
    pub fn on_ordering_built(&mut self) {
        self.ordering_builds = self.ordering_builds.saturating_add(1);
    }

    /// Resets every counter to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for EnumerationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Enumeration Statistics:")?;
        writeln!(f, "  Values emitted:       {}", self.values_emitted)?;
        writeln!(f, "  Nodes created:        {}", self.nodes_created)?;
        writeln!(f, "  Frontier pushes:      {}", self.frontier_pushes)?;
        writeln!(f, "  Frontier pops:        {}", self.frontier_pops)?;
        writeln!(f, "  Peak frontier length: {}", self.peak_frontier_len)?;
        writeln!(f, "  Ordering builds:      {}", self.ordering_builds)?;
        Ok(())
    }
}
