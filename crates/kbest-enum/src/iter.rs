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

//! Iterator adapter over an `Enumerator`.

use crate::{enumerator::Enumerator, monitor::enumeration_monitor::EnumerationMonitor};
use kbest_core::num::weight::WeightNumeric;
use kbest_model::assignment::Assignment;

/// Yields `(value, assignment)` pairs in nonincreasing value order until the
/// enumeration is exhausted. Created by `Enumerator::ranked`.
///
/// Each item allocates a new `Assignment`; use `next_value` plus
/// `current_solution` with a reused buffer in hot loops.
pub struct RankedSolutions<'e, 'w, W, M>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
    enumerator: &'e mut Enumerator<'w, W, M>,
    finished: bool,
}

impl<'e, 'w, W, M> RankedSolutions<'e, 'w, W, M>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
    #[inline]
    pub(crate) fn new(enumerator: &'e mut Enumerator<'w, W, M>) -> Self {
        Self {
            enumerator,
            finished: false,
        }
    }
}

impl<'e, 'w, W, M> Iterator for RankedSolutions<'e, 'w, W, M>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
    type Item = (W, Assignment);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.enumerator.next_value().and_then(|value| {
            self.enumerator
                .current_assignment()
                .map(|assignment| (value, assignment))
        });

        match item {
            Ok(item) => Some(item),
            Err(_) => {
                self.finished = true;
                None
            }
        }
    }
}

impl<W, M> std::iter::FusedIterator for RankedSolutions<'_, '_, W, M>
where
    W: WeightNumeric,
    M: EnumerationMonitor<W>,
{
}
