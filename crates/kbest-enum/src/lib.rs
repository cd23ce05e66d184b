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

//! kbest-enum: ranked enumeration of unconstrained 0/1 maximization
//!
//! Solves `max Σ w[i]·x[i]` over `x ∈ {0,1}^n` and then produces all `2^n`
//! assignments one at a time in nonincreasing objective order. Producing the
//! k-th assignment costs `O(log k)` for the frontier plus `O(n)` to write the
//! assignment down, and memory stays `O(k)` after k requests.
//!
//! Core flow
//! - Create an `enumerator::Enumerator` for `n` variables.
//! - Attach a borrowed weight slice with `set_weights`, then `solve`.
//! - Call `next_value` for the next best objective value and
//!   `current_solution` for the matching assignment, or iterate `ranked`.
//!
//! Module map
//! - `ordering`: variables ranked by nondecreasing `|w[i]|`.
//! - `arena`: bulk-owned enumeration-tree nodes addressed by `NodeIndex`.
//! - `frontier`: max-priority queue of node handles.
//! - `enumerator`: the engine and its state machine.
//! - `iter`: `(value, assignment)` iterator adapter.
//! - `monitor`: progress observers (log, composite, no-op).
//! - `stats`: counters.
//! - `error`: error types.

pub mod arena;
pub mod enumerator;
pub mod error;
pub mod frontier;
pub mod iter;
pub mod monitor;
pub mod ordering;
pub mod stats;
