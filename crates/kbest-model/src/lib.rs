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

//! # kbest Model
//!
//! The domain model of the unconstrained 0/1 maximization problem
//!
//! ```text
//! max { Σ w[i]·x[i] : x[i] ∈ {0, 1}, i = 0 … n-1 }
//! ```
//!
//! The weights themselves are a plain borrowed slice owned by the caller;
//! this crate only names the things the engine hands back.
//!
//! * **`index`**: Strongly typed `VariableIndex` (a variable's name) and
//!   `RankIndex` (its position in the nondecreasing-|w| ordering).
//! * **`assignment`**: The bit-packed 0/1 vector `Assignment`, together with
//!   objective evaluation against a weight slice and the optimal assignment.

pub mod assignment;
pub mod index;
