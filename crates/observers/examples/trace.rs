//! Prints the iteration trace of a Nelder-Mead search.
//!
//! Minimizes `f(x, y) = (5x + 1)² + (4y − 16)²` from `[-354, 1153]` with
//! memoization off, then prints one line per iteration followed by the result.
//! The minimum is at `(-0.2, 4)`.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trace
//! cargo run --example trace -- 50
//! RUST_LOG=nmsimplex_solvers=debug cargo run --example trace
//! ```

use std::error::Error;

use nmsimplex_core::FnObjective;
use nmsimplex_observers::History;
use nmsimplex_solvers::optimization::nelder_mead::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let max_iters = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<usize>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid iteration count, expected a whole number, e.g. 200");
            std::process::exit(1);
        })
        .unwrap_or(1000);

    let objective =
        FnObjective(|x: &[f64]| (5.0 * x[0] + 1.0).powi(2) + (4.0 * x[1] - 16.0).powi(2));
    let config = Config::new(max_iters).with_memoize(false);
    let mut history = History::new();

    let solution = nelder_mead::minimize(&objective, &[-354.0, 1153.0], &config, &mut history)?;

    for record in history.records() {
        println!(
            "{:>4}  x = {:?}  f = {:e}  centroid = {:?}  {:<8}  evals = {}",
            record.iter, record.x, record.objective, record.centroid, record.operation, record.evals
        );
    }

    println!();
    println!("status:    {}", solution.status);
    println!("x:         {:?}", solution.x);
    println!("objective: {:e}", solution.objective);
    println!("centroid:  {:?}", solution.centroid);
    println!("iters:     {}", solution.iters);
    println!("evals:     {}", solution.evals);

    Ok(())
}
