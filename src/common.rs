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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use std::cmp::Ordering;

// ----------------------------------------------------------------------------
// --- VARIABLE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a variable from the optimization problem at hand.
/// In this case, each variable is assumed to be identified with an integer
/// ranging from 0 until `problem.nb_variables()`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(pub usize);
impl Variable {
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    ///
    /// # Examples:
    /// ```
    /// # use bnb::Variable;
    /// assert_eq!(0, Variable(0).id());
    /// assert_eq!(1, Variable(1).id());
    /// assert_eq!(2, Variable(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes a decision that was made during the search. It affects a given
/// `value` to the specified `variable`. Any given `Decision` should be
/// understood as ```[[ variable = value ]]````
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Decision {
    pub variable : Variable,
    pub value    : isize
}

/// A solution is nothing but a sequence of decisions covering all problem
/// variables.
pub type Solution = Vec<Decision>;

// ----------------------------------------------------------------------------
// --- SENSE ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The direction of the optimization. It is fixed once per problem instance
/// and determines both the order in which the fringe yields its nodes and
/// the test used to prune them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Sense {
    /// The larger the objective, the better (e.g. knapsack profit)
    Maximize,
    /// The smaller the objective, the better (e.g. a tour length)
    Minimize,
}
impl Sense {
    /// Compares `a` and `b` from the point of view of this sense: `Greater`
    /// means that `a` is better than `b`.
    ///
    /// # Examples:
    /// ```
    /// # use bnb::Sense;
    /// # use std::cmp::Ordering;
    /// assert_eq!(Ordering::Greater, Sense::Maximize.compare(10, 5));
    /// assert_eq!(Ordering::Less,    Sense::Minimize.compare(10, 5));
    /// ```
    #[inline]
    pub fn compare(self, a: isize, b: isize) -> Ordering {
        match self {
            Sense::Maximize => a.cmp(&b),
            Sense::Minimize => b.cmp(&a),
        }
    }
    /// Returns true iff `a` is strictly better than `b`
    #[inline]
    pub fn is_better(self, a: isize, b: isize) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

// ----------------------------------------------------------------------------
// --- NODE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A node is a partial solution of the problem being solved: the first `depth`
/// variables have been fixed by the decisions in `path` and the remaining ones
/// are still open.
///
/// # Note:
/// Nodes are created by the solver (the root) and by the branching rule of
/// your problem (everything else, through `Node::child`). The `bound` of a
/// node is *always* computed by the solver, it is never inherited from the
/// parent node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// The problem specific state of this partial solution
    pub state: T,
    /// The number of variables that have already been fixed (0 for the root)
    pub depth: usize,
    /// The decisions fixing the first `depth` variables
    pub path: Vec<Decision>,
    /// The exact objective value of the fixed prefix only
    pub value: isize,
    /// An admissible estimate of the best objective reachable from this node
    pub bound: isize,
}
impl <T> Node<T> {
    /// Creates the root node of a search: nothing is decided yet
    pub fn root(state: T, value: isize) -> Self {
        Node { state, depth: 0, path: vec![], value, bound: value }
    }
    /// Creates the child node reached from this node when taking `decision`.
    /// The child accrues the exact incremental `cost` of that decision. Its
    /// bound is left for the solver to compute.
    pub fn child(&self, decision: Decision, state: T, cost: isize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(decision);

        let value = self.value + cost;
        Node { state, depth: self.depth + 1, path, value, bound: value }
    }
    /// Returns the last decision that was made to reach this node (if any)
    pub fn last_decision(&self) -> Option<Decision> {
        self.path.last().copied()
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The best complete and feasible solution known at some point of the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent {
    /// The true objective value of the solution
    pub value: isize,
    /// The decisions of the solution
    pub solution: Solution,
}

/// Diagnostic counters characterizing the pruning efficiency of a search.
/// None of these has any effect on the correctness of the outcome.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Number of nodes that have been popped off the fringe
    pub explored: usize,
    /// Number of nodes that have been discarded because of their bound
    pub pruned: usize,
    /// Number of children produced by the branching rule
    pub generated: usize,
    /// Number of times the incumbent has been improved
    pub improvements: usize,
    /// Largest number of nodes simultaneously held in the fringe
    pub max_fringe: usize,
}

/// The outcome of a search that has been carried out to exhaustion
#[derive(Debug, Clone)]
pub struct Completion {
    /// if present the value of the optimal solution. A missing value means
    /// that the problem is infeasible.
    pub best_value: Option<isize>,
    /// if present, an optimal solution
    pub best_solution: Option<Solution>,
    /// the counters gathered while searching
    pub statistics: Statistics,
}
impl Completion {
    /// Returns true iff the search proved that no feasible solution exists
    pub fn is_infeasible(&self) -> bool {
        self.best_value.is_none()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
