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

//! Error types of the enumeration engine.
//!
//! All variants describe caller precondition violations. They are reported
//! before any engine state is touched, so a failed call can simply be
//! discarded.

/// The error type returned by `Enumerator` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationError {
    /// `solve` (or a value request) happened before any weights were attached.
    NoWeights,
    /// A value was requested after all `2^n` solutions had been emitted.
    ExhaustedEnumeration,
    /// A solution was requested before any value was emitted since the last
    /// `solve`.
    NoCurrentSolution,
}

impl std::fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWeights => write!(f, "No weights attached to the enumerator"),
            Self::ExhaustedEnumeration => {
                write!(f, "All solutions have already been enumerated")
            }
            Self::NoCurrentSolution => {
                write!(f, "No solution emitted yet; request a value first")
            }
        }
    }
}

impl std::error::Error for EnumerationError {}

/// The error type returned by `Frontier` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontierError {
    /// `pop_max` was called on an empty frontier.
    EmptyFrontier,
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "Cannot pop from an empty frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}

impl From<FrontierError> for EnumerationError {
    fn from(e: FrontierError) -> Self {
        match e {
            FrontierError::EmptyFrontier => Self::ExhaustedEnumeration,
        }
    }
}
