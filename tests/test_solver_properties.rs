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

//! This module checks the properties every search must exhibit, regardless
//! of the problem being solved.

use bnb::*;
use bnb::problems::{knapsack::Knapsack, assignment::Assignment, tsp::Tsp, facility::FacilityLocation, queens::Queens};
use proptest::prelude::*;

mod common;
use common::*;

fn knapsack() -> Knapsack {
    Knapsack::read_instance(locate("knapsack.txt")).unwrap()
}
fn assignment() -> Assignment {
    Assignment::read_instance(locate("assignment.txt")).unwrap()
}
fn tsp() -> Tsp {
    Tsp::read_instance(locate("tsp.txt")).unwrap()
}
fn facility() -> FacilityLocation {
    FacilityLocation::read_instance(locate("facility.txt")).unwrap()
}
fn queens() -> Queens {
    Queens::centered(6).unwrap()
}

/// Disabling pruning must not change the optimum, only the effort
fn pruning_is_sound<T>(problem: &dyn Problem<State = T>) {
    let pruned = solve(problem);
    let full   = solve_exhaustively(problem);
    assert_eq!(pruned.best_value, full.best_value);
    assert!(full.statistics.explored >= pruned.statistics.explored);
    assert!(full.statistics.generated >= pruned.statistics.generated);
}
/// Two identical runs must behave identically
fn search_is_deterministic<T>(problem: &dyn Problem<State = T>) {
    let a = solve(problem);
    let b = solve(problem);
    assert_eq!(a.best_value, b.best_value);
    assert_eq!(a.best_solution, b.best_solution);
    assert_eq!(a.statistics, b.statistics);
}
/// The incumbent only ever gets strictly better
fn incumbent_is_monotonic<T>(problem: &dyn Problem<State = T>) {
    let sense      = problem.sense();
    let fringe     = SimpleFringe::new(BestBound::new(sense));
    let mut solver = BestFirstSolver::custom(problem, fringe, Recorder::new(), SolverConfig::default()).unwrap();
    let outcome    = solver.solve();
    let recorder   = solver.monitor();

    assert!(recorder.improvements.windows(2).all(|w| sense.is_better(w[1], w[0])));
    assert_eq!(outcome.best_value, recorder.improvements.last().copied());
    assert_eq!(outcome.statistics.explored, recorder.explored.len());
    assert_eq!(outcome.statistics.pruned, recorder.pruned);
}
/// The order of the fringe only affects the efficiency of the search
fn fringe_order_does_not_matter<T>(problem: &dyn Problem<State = T>) {
    let fringe     = SimpleFringe::new(DeepestFirst::new(problem.sense()));
    let mut solver = BestFirstSolver::custom(problem, fringe, NoMonitor, SolverConfig::default()).unwrap();
    assert_eq!(solve(problem).best_value, solver.solve().best_value);
}
/// Feeding the optimum back as a primal leaves nothing to improve
fn optimum_is_a_valid_primal<T>(problem: &dyn Problem<State = T>) {
    let outcome    = solve(problem);
    let mut solver = BestFirstSolver::new(problem, SolverConfig::default()).unwrap();
    if let Some(solution) = outcome.best_solution {
        assert_eq!(outcome.best_value, solver.set_primal(solution).ok());
        let again = solver.solve();
        assert_eq!(outcome.best_value, again.best_value);
        assert_eq!(0, again.statistics.improvements);
    }
}

fn check_all<T>(problem: &dyn Problem<State = T>) {
    pruning_is_sound(problem);
    search_is_deterministic(problem);
    incumbent_is_monotonic(problem);
    fringe_order_does_not_matter(problem);
    optimum_is_a_valid_primal(problem);
}

#[test]
fn knapsack_searches_are_well_behaved() {
    check_all(&knapsack());
}
#[test]
fn assignment_searches_are_well_behaved() {
    check_all(&assignment());
}
#[test]
fn tsp_searches_are_well_behaved() {
    check_all(&tsp());
}
#[test]
fn facility_searches_are_well_behaved() {
    check_all(&facility());
}
#[test]
fn queens_searches_are_well_behaved() {
    check_all(&queens());
}
#[test]
fn infeasible_queens_searches_are_well_behaved() {
    check_all(&Queens::centered(3).unwrap());
}

#[test]
fn pruning_saves_work_on_the_resource_instances() {
    let problem = tsp();
    let pruned  = solve(&problem);
    let full    = solve_exhaustively(&problem);
    assert!(pruned.statistics.pruned > 0);
    assert!(full.statistics.explored > pruned.statistics.explored);
}

#[test]
fn a_too_small_capacity_is_rejected_before_the_search() {
    // 5 cities: at most 4! partial tours can be alive at once
    let problem = tsp();
    let config  = SolverConfigBuilder::default().max_live_nodes(23).build().unwrap();
    let result  = BestFirstSolver::new(&problem, config);
    assert!(matches!(result, Err(Error::CapacityExceeded { required: 24, capacity: 23 })));

    let config  = SolverConfigBuilder::default().max_live_nodes(24).build().unwrap();
    assert_eq!(Some(84), solve_with(&problem, config).best_value);
}

#[test]
fn the_fringe_never_outgrows_the_worst_case() {
    let problem = assignment();
    let outcome = solve_exhaustively(&problem);
    assert!(outcome.statistics.max_fringe as u128 <= problem.worst_case_live_nodes());
}

#[test]
fn an_infeasible_primal_is_rejected() {
    let problem    = tsp();
    let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
    // city 1 is visited twice
    let twice = vec![
        Decision { variable: Variable(0), value: 1 },
        Decision { variable: Variable(1), value: 1 },
        Decision { variable: Variable(2), value: 2 },
        Decision { variable: Variable(3), value: 3 },
    ];
    assert!(matches!(solver.set_primal(twice), Err(Error::InfeasiblePrimal)));
    // the start city is not a step of the tour
    let start = vec![
        Decision { variable: Variable(0), value: 0 },
        Decision { variable: Variable(1), value: 1 },
        Decision { variable: Variable(2), value: 2 },
        Decision { variable: Variable(3), value: 3 },
    ];
    assert!(matches!(solver.set_primal(start), Err(Error::InfeasiblePrimal)));
    assert_eq!(None, solver.best_value());
}

proptest! {
    #[test]
    fn random_knapsacks_are_well_behaved(
        capacity in 0_isize..40,
        items in prop::collection::vec((0_isize..15, 0_isize..30), 0..8)
    ) {
        let (weight, profit): (Vec<_>, Vec<_>) = items.into_iter().unzip();
        let problem = Knapsack::new(capacity, weight, profit).unwrap();
        check_all(&problem);
    }

    #[test]
    fn random_assignments_are_well_behaved(
        cost in (1_usize..5).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(-10_isize..20, n), n))
    ) {
        let problem = Assignment::new(cost).unwrap();
        check_all(&problem);
    }
}
