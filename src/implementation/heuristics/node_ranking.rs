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

//! This module provides the implementation of node rankings that are used to
//! set the ordering of the solver fringe.

use std::{cmp::Ordering, marker::PhantomData};

use crate::{NodeRanking, Node, Sense};

/// The BestBound strategy is one that always selects the node having the most
/// promising bound in the fringe: the highest bound when maximizing and the
/// lowest bound when minimizing. In case of equalities, the ties are broken
/// using the accrued value (the best first), and eventually the depth of the
/// nodes (the deepest first, as it is closer to a complete solution).
///
/// This is the ranking that turns the solver into a *best-first* search.
///
/// # Example
/// ```
/// # use bnb::*;
/// let a = Node { state: 'a', depth: 1, path: vec![], value: 42, bound: 300 };
/// let b = Node { state: 'b', depth: 1, path: vec![], value:  2, bound: 100 };
/// let c = Node { state: 'c', depth: 1, path: vec![], value: 24, bound: 150 };
/// let d = Node { state: 'd', depth: 1, path: vec![], value: 13, bound:  60 };
/// let e = Node { state: 'e', depth: 1, path: vec![], value: 65, bound: 700 };
/// let f = Node { state: 'f', depth: 1, path: vec![], value: 19, bound: 100 };
///
/// let ranking = BestBound::new(Sense::Maximize);
/// let mut priority_q = SimpleFringe::new(ranking);
/// priority_q.push(a);
/// priority_q.push(b);
/// priority_q.push(c);
/// priority_q.push(d);
/// priority_q.push(e);
/// priority_q.push(f);
///
/// assert_eq!('e', priority_q.pop().unwrap().state); // because 700 is the highest bound
/// assert_eq!('a', priority_q.pop().unwrap().state); // because 300 is the next highest
/// assert_eq!('c', priority_q.pop().unwrap().state); // idem, because of bound = 150
/// assert_eq!('f', priority_q.pop().unwrap().state); // because bound = 100 but value = 19
/// assert_eq!('b', priority_q.pop().unwrap().state); // because bound = 100 but value = 2
/// assert_eq!('d', priority_q.pop().unwrap().state); // because bound = 60 which is the worst
/// ```
#[derive(Debug)]
pub struct BestBound<T> {
    sense: Sense,
    _phantom: PhantomData<T>,
}
impl <T> BestBound<T> {
    /// Creates a new instance ordering the nodes for the given sense
    pub fn new(sense: Sense) -> Self {
        Self { sense, _phantom: PhantomData }
    }
}
impl <T> NodeRanking for BestBound<T> {
    type State = T;

    fn compare(&self, l: &Node<T>, r: &Node<T>) -> Ordering {
        self.sense.compare(l.bound, r.bound)
            .then_with(|| self.sense.compare(l.value, r.value))
            .then_with(|| l.depth.cmp(&r.depth))
    }
}

/// The DeepestFirst strategy always selects the deepest node of the fringe,
/// breaking ties with the bound. It makes the solver dive towards complete
/// solutions (much like a depth-first search would do) which usually finds
/// a first incumbent sooner, at the price of expanding more nodes overall.
#[derive(Debug)]
pub struct DeepestFirst<T> {
    sense: Sense,
    _phantom: PhantomData<T>,
}
impl <T> DeepestFirst<T> {
    /// Creates a new instance ordering the nodes for the given sense
    pub fn new(sense: Sense) -> Self {
        Self { sense, _phantom: PhantomData }
    }
}
impl <T> NodeRanking for DeepestFirst<T> {
    type State = T;

    fn compare(&self, l: &Node<T>, r: &Node<T>) -> Ordering {
        l.depth.cmp(&r.depth)
            .then_with(|| self.sense.compare(l.bound, r.bound))
            .then_with(|| self.sense.compare(l.value, r.value))
    }
}



#[cfg(test)]
mod test_deepest_first {
    use std::cmp::Ordering;

    use crate::*;

    fn node(state: char, depth: usize, value: isize, bound: isize) -> Node<char> {
        Node { state, depth, path: vec![], value, bound }
    }

    #[test]
    fn the_deepest_node_wins_regardless_of_its_bound() {
        let a = node('a', 4, 0,   1);
        let b = node('b', 1, 0, 900);
        let cmp = DeepestFirst::new(Sense::Maximize);
        assert_eq!(Ordering::Greater, cmp.compare(&a, &b));
    }
    #[test]
    fn equal_depths_are_ranked_by_bound() {
        let a = node('a', 2, 0,  10);
        let b = node('b', 2, 0, 900);
        assert_eq!(Ordering::Less,    DeepestFirst::new(Sense::Maximize).compare(&a, &b));
        assert_eq!(Ordering::Greater, DeepestFirst::new(Sense::Minimize).compare(&a, &b));
    }
}
