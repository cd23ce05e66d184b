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

use crate::stats::EnumerationStatistics;
use kbest_core::num::weight::WeightNumeric;

/// Trait for observing the progress of an `Enumerator`.
pub trait EnumerationMonitor<W>: Send + Sync
where
    W: WeightNumeric,
{
    /// Called when the enumeration (re)starts from the optimum.
    fn on_solve(&mut self, num_variables: usize);

    /// Called after every emitted value, the optimum included.
    fn on_value_emitted(&mut self, value: W, statistics: &EnumerationStatistics);

    /// Called after the engine grew the enumeration tree by `count` nodes.
    fn on_nodes_created(&mut self, _count: usize, _statistics: &EnumerationStatistics) {}

    /// Called the first time a value is requested from an empty frontier.
    fn on_exhausted(&mut self, statistics: &EnumerationStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<W> std::fmt::Debug for dyn EnumerationMonitor<W>
where
    W: WeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EnumerationMonitor({})", self.name())
    }
}

impl<W> std::fmt::Display for dyn EnumerationMonitor<W>
where
    W: WeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EnumerationMonitor({})", self.name())
    }
}
