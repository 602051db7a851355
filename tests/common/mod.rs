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

//! This module gathers the utilities shared by the integration tests: access
//! to the instance files, exhaustive oracles and an admissibility checker.
#![allow(dead_code)]

use std::path::PathBuf;

use bnb::*;

pub fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("demos/resources/")
        .join(id)
}

/// Solves the problem with the default configuration
pub fn solve<T>(problem: &dyn Problem<State = T>) -> Completion {
    solve_with(problem, SolverConfig::default())
}
/// Solves the problem with the given configuration
pub fn solve_with<T>(problem: &dyn Problem<State = T>, config: SolverConfig) -> Completion {
    let mut solver = BestFirstSolver::new(problem, config).unwrap();
    solver.solve()
}
/// Solves the problem without ever pruning a node
pub fn solve_exhaustively<T>(problem: &dyn Problem<State = T>) -> Completion {
    let config = SolverConfigBuilder::default().pruning(false).build().unwrap();
    solve_with(problem, config)
}

/// Walks the complete search tree of the problem (without any pruning) and
/// checks that the bound of every node is on the right side of the best
/// completion of that node. It returns the best value of the whole tree.
pub fn assert_admissible<T>(problem: &dyn Problem<State = T>) -> Option<isize> {
    let root = Node::root(problem.initial_state(), problem.initial_value());
    best_completion(problem, root)
}
fn best_completion<T>(problem: &dyn Problem<State = T>, node: Node<T>) -> Option<isize> {
    let sense = problem.sense();
    let bound = problem.bound(&node);

    let best = if problem.is_terminal(&node) {
        Some(problem.value(&node))
    } else {
        let mut children = vec![];
        problem.branch(&node, &mut |child: Node<T>| children.push(child));
        children.into_iter()
            .filter_map(|child| best_completion(problem, child))
            .max_by(|a, b| sense.compare(*a, *b))
    };

    match (best, bound) {
        (Some(best), Some(bound)) => assert!(!sense.is_better(best, bound),
            "bound {bound} at depth {} is beaten by the completion {best}", node.depth),
        (Some(best), None) =>
            panic!("a node at depth {} having a completion {best} was declared infeasible", node.depth),
        (None, _) => {}
    }
    best
}

/// All the permutations of `0..n`
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, n: usize, out: &mut Vec<Vec<usize>>) {
        if prefix.len() == n {
            out.push(prefix.clone());
            return;
        }
        for x in 0..n {
            if !prefix.contains(&x) {
                prefix.push(x);
                extend(prefix, n, out);
                prefix.pop();
            }
        }
    }
    let mut out = vec![];
    extend(&mut vec![], n, &mut out);
    out
}

// ----------------------------------------------------------------------------
// --- ORACLES ----------------------------------------------------------------
// ----------------------------------------------------------------------------

pub fn knapsack_oracle(capacity: isize, weight: &[isize], profit: &[isize]) -> isize {
    let n = weight.len();
    (0_usize..1 << n)
        .filter(|m| (0..n).filter(|i| m >> i & 1 == 1).map(|i| weight[i]).sum::<isize>() <= capacity)
        .map(|m| (0..n).filter(|i| m >> i & 1 == 1).map(|i| profit[i]).sum::<isize>())
        .max()
        .unwrap_or(0)
}

pub fn assignment_oracle(cost: &[Vec<isize>]) -> isize {
    permutations(cost.len()).iter()
        .map(|p| p.iter().enumerate().map(|(w, j)| cost[w][*j]).sum::<isize>())
        .min()
        .unwrap_or(0)
}

pub fn tsp_oracle(distance: &[Vec<Option<isize>>]) -> Option<isize> {
    let n = distance.len();
    if n == 1 {
        return Some(0);
    }
    permutations(n - 1).iter()
        .filter_map(|p| {
            let mut tour = vec![0];
            tour.extend(p.iter().map(|c| c + 1));
            tour.push(0);
            tour.windows(2).map(|e| distance[e[0]][e[1]]).sum::<Option<isize>>()
        })
        .min()
}

pub fn facility_oracle(opening: &[isize], service: &[Vec<isize>]) -> isize {
    let nf = opening.len();
    let nc = service[0].len();
    (1_usize..1 << nf)
        .map(|m| {
            let open = (0..nf).filter(|f| m >> f & 1 == 1).collect::<Vec<_>>();
            let fixed = open.iter().map(|f| opening[*f]).sum::<isize>();
            let serve = (0..nc)
                .map(|c| open.iter().map(|f| service[*f][c]).min().unwrap_or(0))
                .sum::<isize>();
            fixed + serve
        })
        .min()
        .unwrap_or(0)
}

/// The best weight of a valid placement and the number of valid placements
pub fn queens_oracle(weight: &[Vec<isize>]) -> (Option<isize>, usize) {
    let n = weight.len();
    let valid = permutations(n).into_iter()
        .filter(|p| (0..n).all(|i| (i + 1..n).all(|j| p[i].abs_diff(p[j]) != j - i)))
        .collect::<Vec<_>>();
    let best = valid.iter()
        .map(|p| p.iter().enumerate().map(|(r, c)| weight[r][*c]).sum::<isize>())
        .max();
    (best, valid.len())
}
