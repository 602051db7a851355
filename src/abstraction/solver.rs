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

//! This module defines the `Solver` trait.

use crate::{Completion, Error, Solution, Statistics};

/// This is the solver abstraction. It is implemented by a structure that
/// implements the branch-and-bound paradigm to find the best possible
/// solution to a given problem.
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. The search always runs to exhaustion, hence the
    /// returned `Completion` is always exact:
    ///
    /// * When a `best_value` is present, it is the optimal value of the
    ///   objective function and `best_solution` is an optimal solution.
    /// * When no `best_value` is present, the problem admits no feasible
    ///   solution.
    fn solve(&mut self) -> Completion;
    /// This method returns the value of the objective function for the best
    /// solution that has been found. It returns `None` when no solution is
    /// known.
    fn best_value(&self) -> Option<isize>;
    /// This method returns the best solution that has been found.
    /// It returns `None` when no solution is known.
    fn best_solution(&self) -> Option<Solution>;
    /// Returns the counters gathered during the last search
    fn statistics(&self) -> Statistics;

    /// Sets a primal (a complete and feasible solution known upfront, e.g.
    /// computed by a greedy heuristic) of the problem. The solution is checked
    /// against the model before it is accepted; its value is returned.
    /// It only replaces the incumbent if it improves on it.
    ///
    /// # Errors
    /// `Error::InfeasiblePrimal` when the given decisions do not describe a
    /// feasible complete solution of the problem.
    fn set_primal(&mut self, solution: Solution) -> Result<isize, Error>;
}
