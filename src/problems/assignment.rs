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

//! This module contains the model of the job assignment problem: `n` workers
//! must each be assigned one distinct job out of `n` so that the total cost
//! of the assignment is minimal. Worker `i` doing job `j` costs `cost[i][j]`.
//!
//! # Instance format
//! ```text
//! n
//! cost_0_0 ... cost_0_{n-1}
//! ...
//! cost_{n-1}_0 ... cost_{n-1}_{n-1}
//! ```

use std::path::Path;

use bit_set::BitSet;

use crate::{Problem, ChildCallback, Node, Sense, Decision, Variable, Solution, Error, saturating_factorial};
use super::io_utils::{read_file, Tokens, check_square};

/// This is the structure encapsulating the job assignment problem. The
/// workers are assigned in order: variable `i` is the job of worker `i`.
#[derive(Debug, Clone)]
pub struct Assignment {
    cost: Vec<Vec<isize>>,
}
impl Assignment {
    /// Creates a new instance from the given (square) cost matrix. The rows
    /// of the matrix are the workers and its columns are the jobs.
    pub fn new(cost: Vec<Vec<isize>>) -> Result<Self, Error> {
        check_square(&cost, "cost")?;
        Ok(Self { cost })
    }
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut tokens = Tokens::new(text);
        let n = tokens.next_usize("number of workers")?;
        let cost = tokens.next_matrix(n, n, "cost")?;
        tokens.expect_end()?;
        Self::new(cost)
    }
    pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Self, Error> {
        Self::parse(&read_file(fname)?)
    }

    /// The number of workers (and jobs)
    pub fn size(&self) -> usize {
        self.cost.len()
    }
    /// Returns the job assigned to each worker by the given solution
    pub fn jobs(&self, solution: &Solution) -> Vec<usize> {
        let mut jobs = vec![0; self.size()];
        for d in solution.iter() {
            jobs[d.variable.id()] = d.value as usize;
        }
        jobs
    }
    /// Returns the total cost of an assignment
    pub fn cost_of(&self, jobs: &[usize]) -> isize {
        jobs.iter().enumerate().map(|(w, j)| self.cost[w][*j]).sum()
    }

    /// A greedy assignment: each worker in turn takes the cheapest job that
    /// is still free. It is always a complete and feasible assignment which
    /// makes it a good primal for the solver.
    pub fn greedy(&self) -> Solution {
        let mut taken = BitSet::with_capacity(self.size());
        let mut solution = Vec::with_capacity(self.size());
        for (worker, row) in self.cost.iter().enumerate() {
            let cheapest = row.iter().copied().enumerate()
                .filter(|(job, _)| !taken.contains(*job))
                .min_by_key(|(_, cost)| *cost)
                .map(|(job, _)| job);
            if let Some(job) = cheapest {
                taken.insert(job);
                solution.push(Decision { variable: Variable(worker), value: job as isize });
            }
        }
        solution
    }

    /// The cheapest job worker `w` can still take
    fn cheapest_free(&self, w: usize, taken: &BitSet) -> Option<isize> {
        self.cost[w].iter().copied().enumerate()
            .filter(|(job, _)| !taken.contains(*job))
            .map(|(_, cost)| cost)
            .min()
    }
}

impl Problem for Assignment {
    /// The set of jobs that have been taken already
    type State = BitSet;

    fn sense(&self) -> Sense {
        Sense::Minimize
    }
    fn nb_variables(&self) -> usize {
        self.size()
    }
    fn max_branching(&self) -> usize {
        self.size()
    }
    fn initial_state(&self) -> BitSet {
        BitSet::with_capacity(self.size())
    }
    fn worst_case_live_nodes(&self) -> u128 {
        saturating_factorial(self.size())
    }

    /// Each remaining worker takes its cheapest free job, as if no two of
    /// them could ever want the same one.
    fn bound(&self, node: &Node<BitSet>) -> Option<isize> {
        let mut bound = node.value;
        for w in node.depth..self.size() {
            bound += self.cheapest_free(w, &node.state)?;
        }
        Some(bound)
    }

    fn branch(&self, node: &Node<BitSet>, children: &mut dyn ChildCallback<BitSet>) {
        let worker = node.depth;
        for job in 0..self.size() {
            if node.state.contains(job) {
                continue;
            }
            let mut taken = node.state.clone();
            taken.insert(job);
            let decision = Decision { variable: Variable(worker), value: job as isize };
            children.apply(node.child(decision, taken, self.cost[worker][job]));
        }
    }
}
