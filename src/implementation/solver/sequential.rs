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

//! This module provides the implementation of a best-first branch-and-bound
//! solver. It processes the search tree of a problem on one single thread of
//! execution: it keeps all live nodes in a fringe ordered by bound, always
//! expands the most promising one and discards every node whose bound proves
//! that it cannot improve on the best solution found so far.

use tracing::{debug, info, info_span, trace};

use crate::{Problem, Fringe, Monitor, Node, Incumbent, Statistics, Completion,
            Solution, Solver, SolverConfig, Error, DefaultFringe, SimpleFringe,
            BestBound, NoMonitor};

/// The fringe never preallocates room for more nodes than this, whatever the
/// ceiling of the configuration. Beyond it, the fringe grows on demand.
const MAX_PREALLOCATED: u128 = 1 << 16;

/// The workload the solver can get from its fringe
enum WorkLoad<T> {
    /// There is no work left to be done: the search is over
    Complete,
    /// The popped node cannot beat the incumbent
    Pruned { node: Node<T> },
    /// The popped node is a complete solution
    Solution { node: Node<T> },
    /// The popped node must be branched on
    WorkItem { node: Node<T> },
}

/// This is the best-first branch-and-bound solver. It owns its fringe, its
/// monitor and the incumbent of the search; the problem it solves is only
/// borrowed.
///
/// # Example
/// ```
/// # use bnb::*;
/// # use bnb::problems::knapsack::Knapsack;
/// let problem = Knapsack::new(7, vec![1, 3, 4, 5], vec![15, 20, 30, 40]).unwrap();
/// let mut solver = BestFirstSolver::new(&problem, SolverConfig::default()).unwrap();
///
/// let outcome = solver.solve();
/// assert_eq!(Some(55), outcome.best_value);
/// assert!(outcome.statistics.explored > 0);
/// ```
pub struct BestFirstSolver<'a, State, F = DefaultFringe<State>, M = NoMonitor>
where F: Fringe<State = State>,
      M: Monitor<State>,
{
    /// A reference to the problem being solved with branch-and-bound
    problem: &'a (dyn Problem<State = State>),
    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    ///
    /// # Note:
    /// By default, this fringe orders the nodes by bound (so the most
    /// promising bound is going to pop first).
    fringe: F,
    /// The observer of the search
    monitor: M,
    /// The parameters of the search
    config: SolverConfig,
    /// If set, this keeps the info about the best solution so far.
    incumbent: Option<Incumbent>,
    /// The counters of the last (or current) search
    stats: Statistics,
}

impl <'a, State> BestFirstSolver<'a, State> {
    /// Creates a solver for the given problem. Its fringe orders the nodes
    /// by best bound given the sense of the problem and no monitor observes
    /// the search.
    ///
    /// # Errors
    /// `Error::CapacityExceeded` when the configuration sets a ceiling on the
    /// number of live nodes that the problem might exceed.
    pub fn new(problem: &'a (dyn Problem<State = State>), config: SolverConfig) -> Result<Self, Error> {
        let fringe = SimpleFringe::new(BestBound::new(problem.sense()));
        Self::custom(problem, fringe, NoMonitor, config)
    }
}

impl <'a, State, F, M> BestFirstSolver<'a, State, F, M>
where F: Fringe<State = State>,
      M: Monitor<State>,
{
    /// Creates a solver using the given fringe and monitor.
    ///
    /// # Errors
    /// `Error::CapacityExceeded` when the configuration sets a ceiling on the
    /// number of live nodes that the problem might exceed.
    pub fn custom(
        problem: &'a (dyn Problem<State = State>),
        mut fringe: F,
        monitor: M,
        config: SolverConfig,
    ) -> Result<Self, Error> {
        if let Some(capacity) = config.max_live_nodes {
            let required = problem.worst_case_live_nodes();
            if required > capacity as u128 {
                return Err(Error::CapacityExceeded { required, capacity });
            }
            fringe.reserve(required.min(MAX_PREALLOCATED) as usize);
        }

        Ok(BestFirstSolver {
            problem,
            fringe,
            monitor,
            config,
            incumbent: None,
            stats: Statistics::default(),
        })
    }

    /// Returns the monitor that has been observing the search
    pub fn monitor(&self) -> &M {
        &self.monitor
    }
    /// Returns the best solution known so far (if any)
    pub fn incumbent(&self) -> Option<&Incumbent> {
        self.incumbent.as_ref()
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method posts the root node onto the fringe so that the search can be
    /// bootstrapped. A root without any feasible completion is never posted.
    fn initialize(&mut self) {
        self.stats = Statistics::default();
        self.fringe.clear();

        let mut root = Node::root(self.problem.initial_state(), self.problem.initial_value());
        match self.problem.bound(&root) {
            Some(bound) => {
                root.bound = bound;
                self.fringe.push(root);
                self.stats.max_fringe = 1;
            },
            None => {
                trace!("the root has no feasible completion");
            }
        }
    }

    /// Returns true iff a node having the given bound cannot strictly beat
    /// the incumbent (and pruning is enabled)
    fn cannot_improve(&self, bound: isize) -> bool {
        must_prune(&self.config, self.problem, self.incumbent.as_ref(), bound)
    }

    /// Pops the most promising node off the fringe and tells what to do
    /// with it.
    fn get_workload(&mut self) -> WorkLoad<State> {
        let node = match self.fringe.pop() {
            None => return WorkLoad::Complete,
            Some(node) => node,
        };

        self.stats.explored += 1;
        self.monitor.on_explore(&node);

        if self.cannot_improve(node.bound) {
            WorkLoad::Pruned { node }
        } else if self.problem.is_terminal(&node) {
            WorkLoad::Solution { node }
        } else {
            WorkLoad::WorkItem { node }
        }
    }

    /// This private method updates the incumbent in case the terminal `node`
    /// strictly improves on it.
    fn maybe_update_best(&mut self, node: Node<State>) {
        let value = self.problem.value(&node);
        if self.improves(value) {
            debug!(value, depth = node.depth, "new incumbent");
            let incumbent = Incumbent { value, solution: node.path };
            self.monitor.on_improvement(&incumbent);
            self.incumbent = Some(incumbent);
            self.stats.improvements += 1;
        }
    }

    /// Returns true iff `value` is strictly better than the incumbent
    fn improves(&self, value: isize) -> bool {
        match self.incumbent.as_ref() {
            None => true,
            Some(incumbent) => self.problem.sense().is_better(value, incumbent.value),
        }
    }

    /// Branches on the given `node`: the bound of each of its children is
    /// computed and those which may still improve on the incumbent are
    /// pushed onto the fringe.
    fn expand(&mut self, node: Node<State>) {
        let problem   = self.problem;
        let config    = &self.config;
        let incumbent = self.incumbent.as_ref();
        let fringe    = &mut self.fringe;
        let monitor   = &mut self.monitor;
        let stats     = &mut self.stats;

        problem.branch(&node, &mut |mut child: Node<State>| {
            stats.generated += 1;
            match problem.bound(&child) {
                Some(bound) if !must_prune(config, problem, incumbent, bound) => {
                    child.bound = bound;
                    fringe.push(child);
                    stats.max_fringe = stats.max_fringe.max(fringe.len());
                },
                _ => {
                    trace!(depth = child.depth, "child pruned");
                    stats.pruned += 1;
                    monitor.on_prune(&child);
                }
            }
        });
    }
}

/// The prune test: a node may only be kept when its bound is strictly better
/// than the value of the incumbent.
fn must_prune<T>(config: &SolverConfig, problem: &dyn Problem<State = T>, incumbent: Option<&Incumbent>, bound: isize) -> bool {
    match incumbent {
        Some(incumbent) if config.pruning => !problem.sense().is_better(bound, incumbent.value),
        _ => false,
    }
}

impl <'a, State, F, M> Solver for BestFirstSolver<'a, State, F, M>
where F: Fringe<State = State>,
      M: Monitor<State>,
{
    /// Explores the search tree of the problem best bound first until the
    /// fringe is exhausted. When that happens, the incumbent (if any) is
    /// a proven optimum.
    fn solve(&mut self) -> Completion {
        let span = info_span!("solve", variables = self.problem.nb_variables(), sense = ?self.problem.sense());
        let _guard = span.enter();

        self.initialize();

        loop {
            match self.get_workload() {
                WorkLoad::Complete => break,
                WorkLoad::Pruned { node } => {
                    trace!(depth = node.depth, bound = node.bound, "node pruned");
                    self.stats.pruned += 1;
                    self.monitor.on_prune(&node);
                },
                WorkLoad::Solution { node } => self.maybe_update_best(node),
                WorkLoad::WorkItem { node } => self.expand(node),
            }
        }

        info!(
            best_value = ?self.best_value(),
            explored   = self.stats.explored,
            pruned     = self.stats.pruned,
            max_fringe = self.stats.max_fringe,
            "search exhausted");

        Completion {
            best_value: self.best_value(),
            best_solution: self.best_solution(),
            statistics: self.stats,
        }
    }

    /// Returns the best solution that has been identified for this problem.
    fn best_solution(&self) -> Option<Solution> {
        self.incumbent.as_ref().map(|inc| inc.solution.clone())
    }
    /// Returns the value of the best solution that has been identified for
    /// this problem.
    fn best_value(&self) -> Option<isize> {
        self.incumbent.as_ref().map(|inc| inc.value)
    }
    fn statistics(&self) -> Statistics {
        self.stats
    }
    /// Sets a primal (best known solution) of the problem. The decisions may
    /// come in any order but each variable must be fixed exactly once. They
    /// are replayed from the root through the branching rule of the problem:
    /// at each step, the child agreeing with the value given to its variable
    /// is followed until a terminal node is reached.
    fn set_primal(&mut self, solution: Solution) -> Result<isize, Error> {
        let problem = self.problem;

        let mut fixed = vec![None; problem.nb_variables()];
        for decision in solution.iter() {
            let slot = fixed.get_mut(decision.variable.id()).ok_or(Error::InfeasiblePrimal)?;
            if slot.replace(decision.value).is_some() {
                return Err(Error::InfeasiblePrimal);
            }
        }

        let mut node = Node::root(problem.initial_state(), problem.initial_value());
        while !problem.is_terminal(&node) {
            if node.path.len() == solution.len() {
                return Err(Error::InfeasiblePrimal);
            }
            let mut next = None;
            problem.branch(&node, &mut |child: Node<State>| {
                let agrees = child.last_decision()
                    .map_or(false, |d| fixed.get(d.variable.id()) == Some(&Some(d.value)));
                if next.is_none() && agrees {
                    next = Some(child);
                }
            });
            node = next.ok_or(Error::InfeasiblePrimal)?;
        }
        if node.path.len() != solution.len() {
            return Err(Error::InfeasiblePrimal);
        }

        let value = problem.value(&node);
        if self.improves(value) {
            debug!(value, "primal accepted as incumbent");
            self.incumbent = Some(Incumbent { value, solution: node.path });
        }
        Ok(value)
    }
}
