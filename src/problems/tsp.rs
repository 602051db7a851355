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

//! This module contains the model of the traveling salesman problem (TSP):
//! find the cheapest tour that starts from city 0, visits every other city
//! exactly once and comes back to city 0. The graph needs not be complete
//! nor symmetric: a missing edge simply cannot be traveled.
//!
//! # Instance format
//! ```text
//! n
//! d_0_0 ... d_0_{n-1}
//! ...
//! d_{n-1}_0 ... d_{n-1}_{n-1}
//! ```
//! where a `-` in the distance matrix denotes a missing edge. The diagonal
//! is ignored.

use std::{collections::VecDeque, path::Path};

use bit_set::BitSet;

use crate::{Problem, ChildCallback, Node, Sense, Decision, Variable, Solution, Error, saturating_factorial};
use super::io_utils::{read_file, Tokens, check_square};

/// The state of a partial tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TspState {
    /// The city where the salesman currently is
    pub current: usize,
    /// The cities that have been visited already (including the start)
    pub visited: BitSet,
}

/// This is the structure encapsulating the TSP. Variable `i` is the city
/// visited at step `i + 1` of the tour.
#[derive(Debug, Clone)]
pub struct Tsp {
    distance: Vec<Vec<Option<isize>>>,
}
impl Tsp {
    /// Creates an instance over a complete graph
    pub fn new(distance: Vec<Vec<isize>>) -> Result<Self, Error> {
        let distance = distance.into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();
        Self::with_missing_edges(distance)
    }
    /// Creates an instance where `distance[i][j] == None` means that there
    /// is no edge from `i` to `j`.
    ///
    /// # Errors
    /// `Error::InvalidInstance` if there is no city at all, if the matrix is
    /// not square, if a distance is negative or if some city cannot be
    /// reached from (or cannot reach) all the others.
    pub fn with_missing_edges(mut distance: Vec<Vec<Option<isize>>>) -> Result<Self, Error> {
        let n = check_square(&distance, "distance")?;
        if n == 0 {
            return Err(Error::InvalidInstance("a tour needs at least one city".to_string()));
        }
        for (i, row) in distance.iter_mut().enumerate() {
            row[i] = None;
            if let Some(d) = row.iter().flatten().find(|d| **d < 0) {
                return Err(Error::InvalidInstance(format!("negative distance {d} from city {i}")));
            }
        }
        let tsp = Self { distance };
        if !tsp.is_strongly_connected() {
            return Err(Error::InvalidInstance("the graph is not strongly connected".to_string()));
        }
        Ok(tsp)
    }
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut tokens = Tokens::new(text);
        let n = tokens.next_usize("number of cities")?;
        tokens.expect_remaining(n, n, "distances")?;
        let mut distance = Vec::with_capacity(n);
        for _ in 0..n {
            let mut row = Vec::with_capacity(n);
            for _ in 0..n {
                row.push(tokens.next_entry("distance")?);
            }
            distance.push(row);
        }
        tokens.expect_end()?;
        Self::with_missing_edges(distance)
    }
    pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Self, Error> {
        Self::parse(&read_file(fname)?)
    }

    /// The number of cities
    pub fn nb_cities(&self) -> usize {
        self.distance.len()
    }
    /// The distance from `i` to `j` (if there is an edge)
    pub fn distance(&self, i: usize, j: usize) -> Option<isize> {
        self.distance[i][j]
    }
    /// Returns the complete tour described by a solution: it starts and
    /// ends at city 0.
    pub fn tour(&self, solution: &Solution) -> Vec<usize> {
        let mut tour = vec![0; solution.len() + 2];
        for d in solution.iter() {
            tour[d.variable.id() + 1] = d.value as usize;
        }
        if self.nb_cities() == 1 {
            tour.truncate(1);
        }
        tour
    }

    fn is_strongly_connected(&self) -> bool {
        self.reaches_all(|i, j| self.distance[i][j]) && self.reaches_all(|i, j| self.distance[j][i])
    }
    /// Breadth first traversal from city 0 along the edges of `edge`
    fn reaches_all(&self, edge: impl Fn(usize, usize) -> Option<isize>) -> bool {
        let n = self.nb_cities();
        let mut seen = BitSet::with_capacity(n);
        let mut todo = VecDeque::new();
        seen.insert(0);
        todo.push_back(0);
        while let Some(i) = todo.pop_front() {
            for j in 0..n {
                if edge(i, j).is_some() && seen.insert(j) {
                    todo.push_back(j);
                }
            }
        }
        seen.len() == n
    }
    /// The cheapest edge from `from` towards any of the `targets`
    fn cheapest_out(&self, from: usize, targets: impl Iterator<Item = usize>) -> Option<isize> {
        targets.filter_map(|to| self.distance[from][to]).min()
    }
    /// The cheapest edge into `to` from any of the `sources`
    fn cheapest_in(&self, to: usize, sources: impl Iterator<Item = usize>) -> Option<isize> {
        sources.filter_map(|from| self.distance[from][to]).min()
    }
}

impl Problem for Tsp {
    type State = TspState;

    fn sense(&self) -> Sense {
        Sense::Minimize
    }
    fn nb_variables(&self) -> usize {
        self.nb_cities() - 1
    }
    fn max_branching(&self) -> usize {
        self.nb_variables()
    }
    fn initial_state(&self) -> TspState {
        let mut visited = BitSet::with_capacity(self.nb_cities());
        visited.insert(0);
        TspState { current: 0, visited }
    }
    fn worst_case_live_nodes(&self) -> u128 {
        saturating_factorial(self.nb_variables())
    }

    /// Every city still to leave (the current one and the unvisited ones)
    /// is left exactly once, and every city still to enter (the unvisited
    /// ones and the start) is entered exactly once. Both the sum of the
    /// cheapest ways out and the sum of the cheapest ways in are admissible,
    /// the bound keeps the best of them.
    fn bound(&self, node: &Node<TspState>) -> Option<isize> {
        let n = self.nb_cities();
        let state = &node.state;
        let unvisited = (0..n).filter(|c| !state.visited.contains(*c)).collect::<Vec<_>>();
        if unvisited.is_empty() {
            return Some(node.value);
        }

        let mut out = self.cheapest_out(state.current, unvisited.iter().copied())?;
        for &c in unvisited.iter() {
            let targets = unvisited.iter().copied().filter(|t| *t != c).chain(std::iter::once(0));
            out += self.cheapest_out(c, targets)?;
        }

        let mut inn = self.cheapest_in(0, unvisited.iter().copied())?;
        for &c in unvisited.iter() {
            let sources = unvisited.iter().copied().filter(|s| *s != c).chain(std::iter::once(state.current));
            inn += self.cheapest_in(c, sources)?;
        }

        Some(node.value + out.max(inn))
    }

    fn branch(&self, node: &Node<TspState>, children: &mut dyn ChildCallback<TspState>) {
        let n = self.nb_cities();
        let last = node.depth + 1 == self.nb_variables();
        let state = &node.state;

        for city in 1..n {
            if state.visited.contains(city) {
                continue;
            }
            let Some(mut cost) = self.distance[state.current][city] else { continue };
            if last {
                match self.distance[city][0] {
                    Some(back) => cost += back,
                    None => continue,
                }
            }
            let mut visited = state.visited.clone();
            visited.insert(city);
            let decision = Decision { variable: Variable(node.depth), value: city as isize };
            children.apply(node.child(decision, TspState { current: city, visited }, cost));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use super::Tsp;

    fn scenario_b() -> Tsp {
        Tsp::new(vec![
            vec![ 0, 10, 15, 20],
            vec![10,  0, 35, 25],
            vec![15, 35,  0, 30],
            vec![20, 25, 30,  0],
        ]).unwrap()
    }

    #[test]
    fn scenario_b_has_a_tour_of_length_80() {
        let problem    = scenario_b();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        let outcome    = solver.solve();

        assert_eq!(Some(80), outcome.best_value);
        let tour = problem.tour(&outcome.best_solution.unwrap());
        assert_eq!(5, tour.len());
        assert_eq!(0, tour[0]);
        assert_eq!(0, tour[4]);
        let length: isize = tour.windows(2).map(|w| problem.distance(w[0], w[1]).unwrap()).sum();
        assert_eq!(80, length);
    }
    #[test]
    fn the_root_bound_never_exceeds_the_optimum() {
        let problem = scenario_b();
        let root = Node::root(problem.initial_state(), 0);
        assert!(problem.bound(&root).unwrap() <= 80);
    }
    #[test]
    fn the_return_edge_is_part_of_the_tour() {
        // 0 -> 1 -> 2 -> 0 is forced, 2 -> 0 is expensive
        let problem = Tsp::with_missing_edges(vec![
            vec![None,    Some(1), None   ],
            vec![None,    None,    Some(1)],
            vec![Some(50), None,   None   ],
        ]).unwrap();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        let outcome    = solver.solve();
        assert_eq!(Some(52), outcome.best_value);
        assert_eq!(vec![0, 1, 2, 0], problem.tour(&outcome.best_solution.unwrap()));
    }
    #[test]
    fn a_dead_end_is_never_completed() {
        // 0 -> 2 is allowed, but then 1 cannot be left towards 0
        let problem = Tsp::with_missing_edges(vec![
            vec![None,    Some(1), Some(1)],
            vec![None,    None,    Some(1)],
            vec![Some(1), Some(1), None   ],
        ]).unwrap();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        let outcome    = solver.solve();
        assert_eq!(Some(3), outcome.best_value);
        assert_eq!(vec![0, 1, 2, 0], problem.tour(&outcome.best_solution.unwrap()));
    }
    #[test]
    fn a_single_city_is_a_tour_of_length_zero() {
        let problem    = Tsp::new(vec![vec![0]]).unwrap();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        let outcome    = solver.solve();
        assert_eq!(Some(0), outcome.best_value);
        assert_eq!(vec![0], problem.tour(&outcome.best_solution.unwrap()));
    }
    #[test]
    fn two_cities_go_back_and_forth() {
        let problem    = Tsp::new(vec![vec![0, 3], vec![4, 0]]).unwrap();
        let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
        assert_eq!(Some(7), solver.solve().best_value);
    }
    #[test]
    fn the_worst_case_is_a_factorial_of_the_free_cities() {
        assert_eq!(6, scenario_b().worst_case_live_nodes());
    }
    #[test]
    fn invalid_graphs_are_rejected() {
        assert!(matches!(Tsp::new(vec![]), Err(Error::InvalidInstance(_))));
        assert!(matches!(Tsp::new(vec![vec![0, 1], vec![1]]), Err(Error::InvalidInstance(_))));
        assert!(matches!(Tsp::new(vec![vec![0, -1], vec![1, 0]]), Err(Error::InvalidInstance(_))));
        // city 2 cannot be reached
        let res = Tsp::with_missing_edges(vec![
            vec![None,    Some(1), None],
            vec![Some(1), None,    None],
            vec![Some(1), Some(1), None],
        ]);
        assert!(matches!(res, Err(Error::InvalidInstance(_))));
    }
    #[test]
    fn an_instance_with_missing_edges_can_be_parsed() {
        let problem = Tsp::parse("3\n- 1 -\n- - 1\n1 - -\n").unwrap();
        assert_eq!(3, problem.nb_cities());
        assert_eq!(None, problem.distance(0, 2));
        assert_eq!(Some(1), problem.distance(2, 0));
    }
    #[test]
    fn an_absurd_number_of_cities_is_a_format_error() {
        assert!(matches!(Tsp::parse("4000000000\n- 1\n1 -\n"), Err(Error::Format(_))));
    }
}
