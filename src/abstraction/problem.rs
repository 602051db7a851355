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

//! This module defines the basic abstraction one will manipulate when
//! implementing a branch-and-bound solver for some problem: the `Problem`
//! trait which bundles the bound function, the branching rule and the
//! terminal test of a model.

use crate::{Node, Sense};

/// This trait defines the "contract" of what defines an optimization problem
/// solvable with the best-first branch-and-bound paradigm. An implementation
/// of this trait effectively describes the search tree of the problem: its
/// root, how a partial solution is extended (branching) and how promising a
/// partial solution is (bounding).
pub trait Problem {
    /// The partial solutions of the problem carry a state which is user-defined.
    /// Any type implementing Problem must thus specify the type of its state.
    type State;

    /// Tells whether the objective of this problem is to be maximized or
    /// minimized. This is decided once per instance.
    fn sense(&self) -> Sense;
    /// Any problem bears on a number of variable $x_0, x_1, x_2, ... , x_{n-1}$
    /// This method returns the value of the number $n$
    fn nb_variables(&self) -> usize;
    /// The maximum number of children the branching rule may ever produce
    /// when expanding one single node.
    fn max_branching(&self) -> usize;
    /// This method returns the state of the root node
    fn initial_state(&self) -> Self::State;
    /// This method returns the value of the root node
    fn initial_value(&self) -> isize {
        0
    }

    /// This is the bound function. It must return an *admissible* estimate of
    /// the best objective value reachable by any completion of `node`: when
    /// maximizing, the bound may never be lower than what is achievable; when
    /// minimizing, it may never exceed the true cost of the best completion.
    ///
    /// It returns `None` when the problem is able to tell that no feasible
    /// completion of `node` exists.
    fn bound(&self, node: &Node<Self::State>) -> Option<isize>;
    /// This is the branching rule. It calls `children.apply(child)` for each
    /// child of `node`: the nodes obtained by fixing the next undecided
    /// variable to each of its legal values. The enumeration must be
    /// exhaustive, and a child violating a hard constraint must never be
    /// produced. Children are built with `node.child(..)`.
    fn branch(&self, node: &Node<Self::State>, children: &mut dyn ChildCallback<Self::State>);
    /// Returns true iff `node` is a complete solution of the problem
    fn is_terminal(&self, node: &Node<Self::State>) -> bool {
        node.depth == self.nb_variables()
    }
    /// Returns the true objective value of a terminal `node`. It is only
    /// ever called on terminal nodes.
    fn value(&self, node: &Node<Self::State>) -> isize {
        node.value
    }

    /// An upper bound on the number of nodes that can simultaneously be alive
    /// in the fringe. Live nodes never are ancestors of one another, hence the
    /// number of leaves of the complete search tree is a valid answer. By
    /// default, it is `max_branching ^ nb_variables` (saturated).
    fn worst_case_live_nodes(&self) -> u128 {
        saturating_pow(self.max_branching(), self.nb_variables())
    }
}

/// This trait basically defines a callback which is passed on to the problem
/// so as to let it efficiently enumerate the children of some given node.
pub trait ChildCallback<T> {
    /// executes the callback using the given child
    fn apply(&mut self, child: Node<T>);
}
/// The simplest and most natural callback implementation is to simply use
/// a closure.
impl <T, X: FnMut(Node<T>)> ChildCallback<T> for X {
    fn apply(&mut self, child: Node<T>) {
        self(child)
    }
}

/// Computes `base ^ exp` saturating at `u128::MAX`
pub fn saturating_pow(base: usize, exp: usize) -> u128 {
    let base = base as u128;
    (0..exp).fold(1_u128, |acc, _| acc.saturating_mul(base))
}
/// Computes `n!` saturating at `u128::MAX`
pub fn saturating_factorial(n: usize) -> u128 {
    (2..=n as u128).fold(1_u128, |acc, k| acc.saturating_mul(k))
}
