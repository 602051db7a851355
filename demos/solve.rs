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

//! This example uses bnb to solve any of the problems which come with the
//! library. The instance is read from a file (see `demos/resources` for
//! some examples) and the outcome of the search is printed on stdout.

use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tracing::Level;

use bnb::*;
use bnb::problems::{knapsack::Knapsack, assignment::Assignment, tsp::Tsp, facility::FacilityLocation, queens::Queens};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The kind of problem to solve
    #[command(subcommand)]
    problem: Kind,
    /// Explore every node, even those which cannot beat the incumbent
    #[arg(long, global = true)]
    no_pruning: bool,
    /// The maximum number of live nodes the fringe is allowed to hold
    #[arg(short, long, global = true)]
    capacity: Option<usize>,
    /// Increase the verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Kind {
    /// 0/1 knapsack: `capacity n` then `n` lines `weight profit`
    Knapsack { fname: String },
    /// Job assignment: `n` then an n x n cost matrix
    Assignment { fname: String },
    /// Traveling salesman: `n` then an n x n distance matrix ('-' = no edge)
    Tsp { fname: String },
    /// Facility location: `nf nc` then `nf` lines `opening s_0 ... s_nc-1`
    Facility { fname: String },
    /// Weighted N-Queens: `n` then an optional n x n weight board
    Queens { fname: String },
}

/// The outcome of one run
struct Outcome {
    completion: Completion,
    duration: Duration,
}

/// Solves the given problem, starting from the given primal (if any)
fn run<T>(problem: &dyn Problem<State = T>, primal: Option<Solution>, config: SolverConfig) -> Result<Outcome, Error> {
    let mut solver = BestFirstSolver::new(problem, config)?;
    if let Some(primal) = primal {
        let value = solver.set_primal(primal)?;
        tracing::info!(value, "greedy primal");
    }

    let start = Instant::now();
    let completion = solver.solve();
    let duration = start.elapsed();
    Ok(Outcome { completion, duration })
}

/// Prints the status and counters of a run, then the problem specific
/// rendering of its solution
fn print_solution(outcome: &Outcome, describe: impl FnOnce(&Solution) -> String) {
    let Outcome { completion, duration } = outcome;
    let stats = completion.statistics;

    println!("Duration:     {:.3} seconds", duration.as_secs_f32());
    match completion.best_value {
        Some(value) => {
            println!("Status:       optimal");
            println!("Objective:    {value}");
        },
        None => println!("Status:       infeasible"),
    }
    println!("Explored:     {}", stats.explored);
    println!("Pruned:       {}", stats.pruned);
    println!("Generated:    {}", stats.generated);
    println!("Improvements: {}", stats.improvements);
    println!("Max fringe:   {}", stats.max_fringe);
    if let Some(solution) = completion.best_solution.as_ref() {
        println!("Solution:     {}", describe(solution));
    }
}

fn verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to solve the problem described in the given instance file.
fn main() -> Result<(), Error> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(verbosity(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let mut builder = SolverConfigBuilder::default();
    builder.pruning(!args.no_pruning);
    if let Some(capacity) = args.capacity {
        builder.max_live_nodes(capacity);
    }
    let config = builder.build()?;

    match &args.problem {
        Kind::Knapsack { fname } => {
            let problem = Knapsack::read_instance(fname)?;
            let outcome = run(&problem, None, config)?;
            print_solution(&outcome, |s| format!("items {:?}", problem.selected(s)));
        },
        Kind::Assignment { fname } => {
            let problem = Assignment::read_instance(fname)?;
            let outcome = run(&problem, Some(problem.greedy()), config)?;
            print_solution(&outcome, |s| format!("jobs {:?}", problem.jobs(s)));
        },
        Kind::Tsp { fname } => {
            let problem = Tsp::read_instance(fname)?;
            let outcome = run(&problem, None, config)?;
            print_solution(&outcome, |s| format!("tour {:?}", problem.tour(s)));
        },
        Kind::Facility { fname } => {
            let problem = FacilityLocation::read_instance(fname)?;
            let outcome = run(&problem, Some(problem.greedy()), config)?;
            print_solution(&outcome, |s| {
                let open = problem.open_facilities(s);
                format!("open {:?} serving {:?}", open, problem.serving(&open))
            });
        },
        Kind::Queens { fname } => {
            let problem = Queens::read_instance(fname)?;
            let outcome = run(&problem, None, config)?;
            print_solution(&outcome, |s| format!("columns {:?}", problem.columns(s)));
        },
    }
    Ok(())
}
