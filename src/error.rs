// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the errors of the library. All of them are detected
//! before the search begins: once a solver is running, nothing can fail.

use std::num::ParseIntError;

use crate::SolverConfigBuilderError;

/// This enumeration groups the kind of errors that might occur when loading an
/// instance, building a model or setting up a solver. There can be io errors
/// (file unavailable ?), format errors (the file is not an instance), parse int
/// errors (the parser expected an integer but got ... something else), invalid
/// instances (a negative capacity, a non square matrix, ...) and configuration
/// errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The instance text does not follow the expected layout
    #[error("format error: {0}")]
    Format(String),
    /// The instance data was rejected by the model
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
    /// The configured capacity cannot hold the worst case fringe of the problem
    #[error("the fringe may need up to {required} live nodes but its capacity is {capacity}")]
    CapacityExceeded { required: u128, capacity: usize },
    /// The solution given as a primal is not a feasible complete solution
    #[error("the primal solution is not feasible")]
    InfeasiblePrimal,
    /// The solver configuration could not be built
    #[error("invalid configuration: {0}")]
    Config(#[from] SolverConfigBuilderError),
}
