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

//! # BNB
//! BNB is a generic best-first branch-and-bound engine. Its goal is to let you
//! describe your optimization problem as a tree of partial solutions (see
//! `Problem`): you tell the engine how to extend a partial solution with one
//! more decision (the branching rule) and how to estimate the best value that
//! any completion of a partial solution could reach (the bound). The engine
//! takes care of the rest: it keeps the live nodes in a priority queue ordered
//! by bound, always expands the most promising one, maintains the incumbent
//! and discards every node whose bound proves it cannot improve on it.
//!
//! The sole condition to ensure the correctness of the optimization is that
//! the bound be *admissible*: it must never undersell what remains achievable
//! when maximizing, nor oversell the remaining cost when minimizing. How tight
//! it is only matters for performance.
//!
//! ## Quick Example
//! The following presents a minimalistic use of bnb. It implements a solver
//! for the binary knapsack problem. The `problems` module of this crate hosts
//! complete models (knapsack, job assignment, traveling salesman, facility
//! location and N-Queens) which you are encouraged to read too.
//!
//! ```
//! use bnb::*;
//!
//! struct Knapsack {
//!     capacity: usize,
//!     profit  : Vec<usize>,
//!     weight  : Vec<usize>,
//! }
//! impl Problem for Knapsack {
//!     // the remaining capacity of the sack
//!     type State = usize;
//!
//!     fn sense(&self) -> Sense {
//!         Sense::Maximize
//!     }
//!     fn nb_variables(&self) -> usize {
//!         self.profit.len()
//!     }
//!     fn max_branching(&self) -> usize {
//!         2
//!     }
//!     fn initial_state(&self) -> usize {
//!         self.capacity
//!     }
//!     fn bound(&self, node: &Node<usize>) -> Option<isize> {
//!         // very rough: take all the remaining items
//!         let rest: usize = self.profit[node.depth..].iter().sum();
//!         Some(node.value + rest as isize)
//!     }
//!     fn branch(&self, node: &Node<usize>, children: &mut dyn ChildCallback<usize>) {
//!         let variable = Variable(node.depth);
//!         let (weight, profit) = (self.weight[node.depth], self.profit[node.depth]);
//!         if node.state >= weight {
//!             let take = Decision { variable, value: 1 };
//!             children.apply(node.child(take, node.state - weight, profit as isize));
//!         }
//!         let skip = Decision { variable, value: 0 };
//!         children.apply(node.child(skip, node.state, 0));
//!     }
//! }
//!
//! let problem = Knapsack {
//!     capacity: 50,
//!     profit  : vec![60, 100, 120],
//!     weight  : vec![10,  20,  30],
//! };
//! let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
//! let outcome    = solver.solve();
//!
//! assert_eq!(Some(220), outcome.best_value);
//! for decision in outcome.best_solution.unwrap().iter() {
//!     if decision.value == 1 {
//!         println!("take item {}", decision.variable.id());
//!     }
//! }
//! ```
//!
//! ## Going further
//! The easiest way to get your way around with bnb is to start with the
//! `Problem` trait (the contract a model must fulfill) and `BestFirstSolver`
//! (the search driver), then to explore the `SolverConfig` options and the
//! `Monitor` hooks which let you observe a search as it unfolds.

mod common;
mod error;
mod abstraction;
mod implementation;

pub mod problems;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;
