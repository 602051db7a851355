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

//! This module contains the model of the uncapacitated facility location
//! problem: a set of candidate facilities each have an opening cost, and
//! serving customer `c` from facility `f` costs `service[f][c]`. The goal is
//! to open a (non empty) set of facilities minimizing the total opening cost
//! plus the cost of serving every customer from its cheapest open facility.
//!
//! # Instance format
//! ```text
//! nb_facilities nb_customers
//! opening_0 service_0_0 ... service_0_{nc-1}
//! ...
//! ```

use std::path::Path;

use bit_set::BitSet;

use crate::{Problem, ChildCallback, Node, Sense, Decision, Variable, Solution, Error};
use super::io_utils::{read_file, Tokens};

/// This is the structure encapsulating the facility location problem.
/// Variable `i` tells whether facility `i` is open (1) or closed (0).
#[derive(Debug, Clone)]
pub struct FacilityLocation {
    opening: Vec<isize>,
    service: Vec<Vec<isize>>,
    nb_customers: usize,
}
impl FacilityLocation {
    /// Creates a new instance. `service` has one row per facility and one
    /// column per customer.
    ///
    /// # Errors
    /// `Error::InvalidInstance` when there is no facility, when a cost is
    /// negative or when the service matrix does not have one row of the
    /// same length per facility.
    pub fn new(opening: Vec<isize>, service: Vec<Vec<isize>>) -> Result<Self, Error> {
        if opening.is_empty() {
            return Err(Error::InvalidInstance("there must be at least one facility".to_string()));
        }
        if service.len() != opening.len() {
            return Err(Error::InvalidInstance(
                format!("{} service rows were given for {} facilities", service.len(), opening.len())));
        }
        let nb_customers = service[0].len();
        if service.iter().any(|row| row.len() != nb_customers) {
            return Err(Error::InvalidInstance("the service matrix is ragged".to_string()));
        }
        let negative = opening.iter().chain(service.iter().flatten()).any(|c| *c < 0);
        if negative {
            return Err(Error::InvalidInstance("costs must not be negative".to_string()));
        }
        Ok(Self { opening, service, nb_customers })
    }
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut tokens = Tokens::new(text);
        let nf = tokens.next_usize("number of facilities")?;
        let nc = tokens.next_usize("number of customers")?;
        tokens.expect_remaining(nf, nc.saturating_add(1), "facilities")?;
        let mut opening = Vec::with_capacity(nf);
        let mut service = Vec::with_capacity(nf);
        for _ in 0..nf {
            opening.push(tokens.next_isize("opening cost")?);
            let mut row = Vec::with_capacity(nc);
            for _ in 0..nc {
                row.push(tokens.next_isize("service cost")?);
            }
            service.push(row);
        }
        tokens.expect_end()?;
        Self::new(opening, service)
    }
    pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Self, Error> {
        Self::parse(&read_file(fname)?)
    }

    pub fn nb_facilities(&self) -> usize {
        self.opening.len()
    }
    pub fn nb_customers(&self) -> usize {
        self.nb_customers
    }
    /// Returns the facilities opened by the given solution
    pub fn open_facilities(&self, solution: &Solution) -> Vec<usize> {
        let mut open = solution.iter()
            .filter(|d| d.value == 1)
            .map(|d| d.variable.id())
            .collect::<Vec<_>>();
        open.sort_unstable();
        open
    }
    /// Returns the facility serving each customer when the given facilities
    /// are open (the cheapest one)
    pub fn serving(&self, open: &[usize]) -> Vec<Option<usize>> {
        (0..self.nb_customers)
            .map(|c| open.iter().copied().min_by_key(|f| self.service[*f][c]))
            .collect()
    }
    /// Returns the total cost of opening the given facilities. No customer
    /// can be served when nothing is open.
    pub fn cost_of(&self, open: &[usize]) -> Option<isize> {
        if open.is_empty() {
            return None;
        }
        let fixed: isize = open.iter().map(|f| self.opening[*f]).sum();
        Some(fixed + self.service_cost(open))
    }

    /// A greedy solution: first open the single facility that serves
    /// everyone the cheapest, then keep opening the facility that lowers the
    /// total cost the most for as long as one does.
    pub fn greedy(&self) -> Solution {
        let nf = self.nb_facilities();
        let mut open = vec![];
        let mut best = None;
        for f in 0..nf {
            let cost = self.cost_of(&[f]);
            if best.map_or(true, |b| cost < Some(b)) {
                best = cost;
                open = vec![f];
            }
        }

        while let Some(current) = best {
            let mut improvement = None;
            for f in (0..nf).filter(|f| !open.contains(f)) {
                let mut candidate = open.clone();
                candidate.push(f);
                if let Some(cost) = self.cost_of(&candidate) {
                    if cost < improvement.map_or(current, |(c, _)| c) {
                        improvement = Some((cost, f));
                    }
                }
            }
            match improvement {
                Some((cost, f)) => {
                    open.push(f);
                    best = Some(cost);
                },
                None => break,
            }
        }

        (0..nf)
            .map(|f| Decision { variable: Variable(f), value: open.contains(&f) as isize })
            .collect()
    }

    /// The cost of serving all customers from their cheapest facility among
    /// the given ones
    fn service_cost(&self, facilities: &[usize]) -> isize {
        (0..self.nb_customers)
            .map(|c| facilities.iter().map(|f| self.service[*f][c]).min().unwrap_or(0))
            .sum()
    }
}

impl Problem for FacilityLocation {
    /// The facilities that have been opened so far
    type State = BitSet;

    fn sense(&self) -> Sense {
        Sense::Minimize
    }
    fn nb_variables(&self) -> usize {
        self.nb_facilities()
    }
    fn max_branching(&self) -> usize {
        2
    }
    fn initial_state(&self) -> BitSet {
        BitSet::with_capacity(self.nb_facilities())
    }

    /// The value of a node only accounts for the opening costs until the
    /// node is terminal. The bound adds the cheapest service of each
    /// customer by any facility that is (or might still be) open, and the
    /// cheapest undecided opening cost when nothing has been opened yet.
    fn bound(&self, node: &Node<BitSet>) -> Option<isize> {
        if self.is_terminal(node) {
            return Some(node.value);
        }
        let depth = node.depth;
        let nf = self.nb_facilities();
        let candidates = node.state.iter().chain(depth..nf).collect::<Vec<_>>();

        let mut bound = node.value + self.service_cost(&candidates);
        if node.state.is_empty() {
            bound += self.opening[depth..nf].iter().copied().min()?;
        }
        Some(bound)
    }

    fn branch(&self, node: &Node<BitSet>, children: &mut dyn ChildCallback<BitSet>) {
        let facility = node.depth;
        let variable = Variable(facility);
        let last = facility + 1 == self.nb_facilities();

        let mut open = node.state.clone();
        open.insert(facility);
        let mut cost = self.opening[facility];
        if last {
            cost += self.service_cost(&open.iter().collect::<Vec<_>>());
        }
        children.apply(node.child(Decision { variable, value: 1 }, open, cost));

        if last && node.state.is_empty() {
            return;
        }
        let closed = node.state.clone();
        let cost = if last { self.service_cost(&closed.iter().collect::<Vec<_>>()) } else { 0 };
        children.apply(node.child(Decision { variable, value: 0 }, closed, cost));
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use super::FacilityLocation;

    fn instance() -> FacilityLocation {
        FacilityLocation::new(
            vec![10, 12, 60],
            vec![
                vec![ 2,  9, 15, 20],
                vec![18, 10,  3,  4],
                vec![ 1,  1,  1,  1],
            ]).unwrap()
    }

    #[test]
    fn the_optimum_balances_opening_and_service_costs() {
        let problem    = instance();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        let outcome    = solver.solve();

        // open {0, 1}: 10 + 12 + 2 + 9 + 3 + 4 = 40
        assert_eq!(Some(40), outcome.best_value);
        let open = problem.open_facilities(&outcome.best_solution.unwrap());
        assert_eq!(vec![0, 1], open);
        assert_eq!(Some(40), problem.cost_of(&open));
        assert_eq!(vec![Some(0), Some(0), Some(1), Some(1)], problem.serving(&open));
    }
    #[test]
    fn the_greedy_solution_is_a_feasible_primal() {
        let problem    = instance();
        let greedy     = problem.greedy();
        let open       = problem.open_facilities(&greedy);
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();

        let value = solver.set_primal(greedy).unwrap();
        assert_eq!(problem.cost_of(&open), Some(value));
        assert!(value >= 40);
        assert_eq!(Some(40), solver.solve().best_value);
    }
    #[test]
    fn at_least_one_facility_is_always_opened() {
        // opening anything is costly and there is no customer
        let problem    = FacilityLocation::new(vec![7, 5, 9], vec![vec![], vec![], vec![]]).unwrap();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        let outcome    = solver.solve();
        assert_eq!(Some(5), outcome.best_value);
        assert_eq!(vec![1], problem.open_facilities(&outcome.best_solution.unwrap()));
        assert_eq!(vec![1], problem.open_facilities(&problem.greedy()));
    }
    #[test]
    fn a_single_facility_must_be_opened() {
        let problem    = FacilityLocation::new(vec![3], vec![vec![1, 2]]).unwrap();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        assert_eq!(6, solver.set_primal(problem.greedy()).unwrap());
        assert_eq!(Some(6), solver.solve().best_value);
    }
    #[test]
    fn closing_every_facility_is_not_a_solution() {
        let problem    = FacilityLocation::new(vec![3, 4], vec![vec![1], vec![1]]).unwrap();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        let nothing = vec![
            Decision { variable: Variable(0), value: 0 },
            Decision { variable: Variable(1), value: 0 },
        ];
        assert!(matches!(solver.set_primal(nothing), Err(Error::InfeasiblePrimal)));
    }
    #[test]
    fn invalid_instances_are_rejected() {
        assert!(matches!(FacilityLocation::new(vec![], vec![]), Err(Error::InvalidInstance(_))));
        assert!(matches!(FacilityLocation::new(vec![-1], vec![vec![1]]), Err(Error::InvalidInstance(_))));
        assert!(matches!(FacilityLocation::new(vec![1], vec![vec![-1]]), Err(Error::InvalidInstance(_))));
        assert!(matches!(FacilityLocation::new(vec![1, 1], vec![vec![1, 2], vec![1]]), Err(Error::InvalidInstance(_))));
        assert!(matches!(FacilityLocation::new(vec![1, 1], vec![vec![1, 2]]), Err(Error::InvalidInstance(_))));
    }
    #[test]
    fn an_instance_can_be_parsed() {
        let problem = FacilityLocation::parse("2 3\n# f0\n5 1 2 3\n# f1\n6 3 2 1\n").unwrap();
        assert_eq!(2, problem.nb_facilities());
        assert_eq!(3, problem.nb_customers());
    }
    #[test]
    fn absurd_counts_are_format_errors() {
        assert!(matches!(FacilityLocation::parse("1000000000000 1\n5 1\n"), Err(Error::Format(_))));
        assert!(matches!(FacilityLocation::parse("1 1000000000000\n5 1\n"), Err(Error::Format(_))));
    }
}
