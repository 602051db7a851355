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

//! The fringe of the best-first solver: a binary heap of live nodes.

use binary_heap_plus::BinaryHeap;

use crate::*;

/// A fringe backed by a binary heap whose order is given by a `NodeRanking`.
/// The node that ranks highest pops first. With `BestBound`, that is the node
/// having the highest bound of a maximization problem or the lowest bound of
/// a minimization problem.
///
/// This is the fringe `BestFirstSolver::new` builds.
pub struct SimpleFringe<O: NodeRanking> {
    heap: BinaryHeap<Node<O::State>, CompareNode<O>>
}
impl <O> SimpleFringe<O> where O: NodeRanking {
    /// Creates an empty fringe ordered by `ranking`
    pub fn new(ranking: O) -> Self {
        Self::with_capacity(ranking, 0)
    }
    /// Creates an empty fringe ordered by `ranking` with room for `capacity`
    /// nodes.
    pub fn with_capacity(ranking: O, capacity: usize) -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(Vec::with_capacity(capacity), CompareNode::new(ranking)) }
    }
}
impl <O> Fringe for SimpleFringe<O> where O: NodeRanking {
    type State = O::State;

    fn push(&mut self, node: Node<Self::State>) {
        self.heap.push(node)
    }
    fn pop(&mut self) -> Option<Node<Self::State>> {
        self.heap.pop()
    }
    fn clear(&mut self) {
        self.heap.clear()
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
    fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional)
    }
}

/// The type of fringe a `BestFirstSolver` uses unless told otherwise
pub type DefaultFringe<T> = SimpleFringe<BestBound<T>>;
