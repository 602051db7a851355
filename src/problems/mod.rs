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

//! This module hosts complete models of classic combinatorial optimization
//! problems, ready to be solved with a `BestFirstSolver`:
//!
//! * `knapsack`   - the 0/1 knapsack problem (maximization)
//! * `assignment` - the job assignment problem (minimization)
//! * `tsp`        - the traveling salesman problem (minimization)
//! * `facility`   - the uncapacitated facility location problem (minimization)
//! * `queens`     - a weighted N-Queens placement problem (maximization)
//!
//! Each of these comes with a parser for a simple whitespace separated
//! instance format (see `io_utils`).

pub mod io_utils;

pub mod knapsack;
pub mod assignment;
pub mod tsp;
pub mod facility;
pub mod queens;
