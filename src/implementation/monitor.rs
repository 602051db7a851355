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

//! This module provides the implementations of the `Monitor` trait.

use crate::{Monitor, Node, Incumbent};

/// The monitor a solver uses by default: it ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMonitor;
impl <T> Monitor<T> for NoMonitor {}

/// A monitor that keeps a trace of the search. This is mostly useful to
/// inspect (or test) the behavior of a solver after the fact.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    /// The successive values of the incumbent
    pub improvements: Vec<isize>,
    /// The `(depth, bound)` of each node popped off the fringe, in order
    pub explored: Vec<(usize, isize)>,
    /// The number of nodes that were discarded because of their bound
    pub pruned: usize,
}
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}
impl <T> Monitor<T> for Recorder {
    fn on_explore(&mut self, node: &Node<T>) {
        self.explored.push((node.depth, node.bound));
    }
    fn on_prune(&mut self, _node: &Node<T>) {
        self.pruned += 1;
    }
    fn on_improvement(&mut self, incumbent: &Incumbent) {
        self.improvements.push(incumbent.value);
    }
}

#[cfg(test)]
mod test_recorder {
    use crate::*;

    #[test]
    fn a_recorder_is_initially_empty() {
        let rec = Recorder::new();
        assert!(rec.improvements.is_empty());
        assert!(rec.explored.is_empty());
        assert_eq!(0, rec.pruned);
    }
    #[test]
    fn a_recorder_keeps_track_of_everything_it_is_told() {
        let mut rec = Recorder::new();
        let mut node = Node::root('x', 0);
        node.bound = 12;
        rec.on_explore(&node);
        rec.on_prune(&node);
        rec.on_prune(&node);
        Monitor::<char>::on_improvement(&mut rec, &Incumbent { value: 4, solution: vec![] });
        Monitor::<char>::on_improvement(&mut rec, &Incumbent { value: 9, solution: vec![] });

        assert_eq!(vec![(0, 12)], rec.explored);
        assert_eq!(2, rec.pruned);
        assert_eq!(vec![4, 9], rec.improvements);
    }
}
