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

//! This module contains the model of the 0/1 knapsack problem: given a set of
//! items, each having a weight and a profit, select the subset of items that
//! maximizes the total profit without exceeding the capacity of the sack.
//!
//! The items are branched on by decreasing profit/weight ratio, which makes
//! the fractional relaxation a simple greedy fill.
//!
//! # Instance format
//! ```text
//! capacity n
//! weight_0 profit_0
//! ...
//! weight_{n-1} profit_{n-1}
//! ```

use std::{cmp::Ordering, path::Path};

use crate::{Problem, ChildCallback, Node, Sense, Decision, Variable, Solution, Error};
use super::io_utils::{read_file, Tokens};

/// This is the structure encapsulating the knapsack problem.
#[derive(Debug, Clone)]
pub struct Knapsack {
    /// The capacity of the sack
    capacity: usize,
    /// The weight of the items, sorted by decreasing profit/weight ratio
    weight: Vec<usize>,
    /// The profit of the items, sorted by decreasing profit/weight ratio
    profit: Vec<usize>,
    /// The original id of the items in the sorted order
    order: Vec<usize>,
}
impl Knapsack {
    /// Creates a new instance of the problem. Item `i` weighs `weight[i]`
    /// and yields `profit[i]`.
    ///
    /// # Errors
    /// `Error::InvalidInstance` when the capacity, a weight or a profit is
    /// negative or when there are not as many weights as profits.
    pub fn new(capacity: isize, weight: Vec<isize>, profit: Vec<isize>) -> Result<Self, Error> {
        if weight.len() != profit.len() {
            return Err(Error::InvalidInstance(
                format!("{} weights were given for {} profits", weight.len(), profit.len())));
        }
        let capacity = non_negative(capacity, "capacity")?;
        let weight = weight.into_iter()
            .map(|w| non_negative(w, "weight"))
            .collect::<Result<Vec<_>, _>>()?;
        let profit = profit.into_iter()
            .map(|p| non_negative(p, "profit"))
            .collect::<Result<Vec<_>, _>>()?;

        let mut order = (0..weight.len()).collect::<Vec<_>>();
        order.sort_by(|a, b| by_decreasing_ratio(weight[*a], profit[*a], weight[*b], profit[*b]));

        let sorted_weight = order.iter().map(|i| weight[*i]).collect();
        let sorted_profit = order.iter().map(|i| profit[*i]).collect();
        Ok(Self { capacity, weight: sorted_weight, profit: sorted_profit, order })
    }
    /// Parses an instance from its textual representation
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut tokens = Tokens::new(text);
        let capacity = tokens.next_isize("capacity")?;
        let n = tokens.next_usize("number of items")?;
        tokens.expect_remaining(n, 2, "items")?;
        let mut weight = Vec::with_capacity(n);
        let mut profit = Vec::with_capacity(n);
        for _ in 0..n {
            weight.push(tokens.next_isize("weight")?);
            profit.push(tokens.next_isize("profit")?);
        }
        tokens.expect_end()?;
        Self::new(capacity, weight, profit)
    }
    /// Loads an instance from file
    pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Self, Error> {
        Self::parse(&read_file(fname)?)
    }

    /// The capacity of the sack
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Returns the (sorted) ids of the items that are put in the sack by
    /// the given solution.
    pub fn selected(&self, solution: &Solution) -> Vec<usize> {
        let mut items = solution.iter()
            .filter(|d| d.value == 1)
            .map(|d| d.variable.id())
            .collect::<Vec<_>>();
        items.sort_unstable();
        items
    }
}

fn non_negative(x: isize, what: &str) -> Result<usize, Error> {
    usize::try_from(x).map_err(|_| Error::InvalidInstance(format!("negative {what}: {x}")))
}

/// Items without weight have an infinite ratio, hence they come first
fn by_decreasing_ratio(wa: usize, pa: usize, wb: usize, pb: usize) -> Ordering {
    let lhs = pb as u128 * wa as u128;
    let rhs = pa as u128 * wb as u128;
    lhs.cmp(&rhs).then_with(|| wa.cmp(&wb))
}

impl Problem for Knapsack {
    /// The remaining capacity of the sack
    type State = usize;

    fn sense(&self) -> Sense {
        Sense::Maximize
    }
    fn nb_variables(&self) -> usize {
        self.weight.len()
    }
    fn max_branching(&self) -> usize {
        2
    }
    fn initial_state(&self) -> usize {
        self.capacity
    }

    /// The fractional relaxation: the remaining items are taken greedily by
    /// decreasing ratio, the first one that does not fit is taken partially.
    fn bound(&self, node: &Node<usize>) -> Option<isize> {
        let mut room  = node.state;
        let mut bound = node.value as i128;
        for i in node.depth..self.nb_variables() {
            let (w, p) = (self.weight[i], self.profit[i]);
            if w <= room {
                room  -= w;
                bound += p as i128;
            } else {
                let part = (room as u128 * p as u128 + w as u128 - 1) / w as u128;
                bound += part as i128;
                break;
            }
        }
        Some(bound.min(isize::MAX as i128) as isize)
    }

    fn branch(&self, node: &Node<usize>, children: &mut dyn ChildCallback<usize>) {
        let i = node.depth;
        let variable = Variable(self.order[i]);
        let (w, p) = (self.weight[i], self.profit[i]);

        if node.state >= w {
            let take = Decision { variable, value: 1 };
            children.apply(node.child(take, node.state - w, p as isize));
        }
        let skip = Decision { variable, value: 0 };
        children.apply(node.child(skip, node.state, 0));
    }
}
