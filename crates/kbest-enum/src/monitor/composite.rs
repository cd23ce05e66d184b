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

//! Fan-out monitor
//!
//! `CompositeMonitor` forwards every event to its children in insertion
//! order, so logging and custom observers can be combined without the engine
//! knowing about either.

use crate::{monitor::enumeration_monitor::EnumerationMonitor, stats::EnumerationStatistics};
use kbest_core::num::weight::WeightNumeric;

/// A monitor that aggregates several monitors and forwards events to all of them.
pub struct CompositeMonitor<'a, W>
where
    W: WeightNumeric,
{
    monitors: Vec<Box<dyn EnumerationMonitor<W> + 'a>>,
}

impl<'a, W> Default for CompositeMonitor<'a, W>
where
    W: WeightNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, W> CompositeMonitor<'a, W>
where
    W: WeightNumeric,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a monitor to the composite.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: EnumerationMonitor<W> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn EnumerationMonitor<W> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of child monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite has no children.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, W> FromIterator<Box<dyn EnumerationMonitor<W> + 'a>> for CompositeMonitor<'a, W>
where
    W: WeightNumeric,
{
    fn from_iter<I: IntoIterator<Item = Box<dyn EnumerationMonitor<W> + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, W> EnumerationMonitor<W> for CompositeMonitor<'a, W>
where
    W: WeightNumeric,
{
    fn on_solve(&mut self, num_variables: usize) {
        for monitor in &mut self.monitors {
            monitor.on_solve(num_variables);
        }
    }

    fn on_value_emitted(&mut self, value: W, statistics: &EnumerationStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_value_emitted(value, statistics);
        }
    }

    fn on_nodes_created(&mut self, count: usize, statistics: &EnumerationStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_nodes_created(count, statistics);
        }
    }

    fn on_exhausted(&mut self, statistics: &EnumerationStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exhausted(statistics);
        }
    }

    fn name(&self) -> &str {
        "CompositeMonitor"
    }
}
