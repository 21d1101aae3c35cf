//! Nelder-Mead simplex search for multi-variable optimization.
//!
//! # Algorithm
//!
//! Nelder-Mead minimizes an objective over `D`-dimensional points without
//! derivatives. It keeps a simplex of `D + 1` vertices and, every iteration:
//!
//! 1. sorts the vertices by objective (best first, worst last),
//! 2. computes the centroid of every vertex except the worst,
//! 3. reflects the worst vertex through the centroid, then
//! 4. keeps the reflection, tries an expansion, tries a contraction, or
//!    reduces the whole simplex toward the best vertex.
//!
//! The initial simplex is built deterministically from the starting point by
//! offsetting one coordinate at a time (see [`Config::initial_step`]).
//!
//! # When to Use
//!
//! - Derivative information is unavailable or unreliable
//! - The problem has few variables (Nelder-Mead slows down as `D` grows)
//! - Function evaluations are relatively cheap
//!
//! # Limitations
//!
//! - **Local only**: may stagnate or settle on a non-optimal point
//! - **Unconstrained**: there is no bound or constraint handling
//! - **Pure objectives**: memoization assumes the same point always gives the
//!   same value
//!
//! # Memoization
//!
//! With [`Config::memoize`] enabled (the default) every evaluation is cached
//! for the duration of one solve, keyed by the exact bits of the coordinates.
//! Cache hits are not counted in [`Solution::evals`]. Memoization never changes
//! the sequence of iterations, only how often the objective is called.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed iteration, carrying the best
//! vertex and its objective from the start of the iteration, the centroid,
//! the [`Operation`] applied, and the running evaluation count.
//!
//! Observers can return [`Action::StopEarly`] to halt after the current
//! iteration.

mod action;
mod config;
mod error;
mod evaluator;
mod event;
mod geometry;
mod operation;
mod search;
mod simplex;
mod solution;


pub use action::Action;
pub use config::{Coefficients, Config, ConfigError};
pub use error::{Error, InputError};
pub use event::Event;
pub use operation::Operation;
pub use simplex::{Position, Ranking, Simplex};
pub use solution::{Solution, Status};

use nmsimplex_core::{Objective, Observer};

use super::NegateObjective;

use search::search;

/// Finds a minimum of the objective starting from `x0`.
///
/// The initial simplex has `x0` as its first vertex and one extra vertex per
/// axis, offset by [`Config::initial_step`]. The observer receives an
/// [`Event`] after every iteration; pass `()` to ignore them.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `x0` is empty or not finite, and
/// [`Error::Objective`] if the objective fails at any point.
pub fn minimize<O, Obs>(
    objective: &O,
    x0: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let simplex = Simplex::from_point(x0, config.initial_step())?;
    search(objective, simplex, config, observer)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` is invalid or the objective fails.
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    x0: &[f64],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, x0, config, ())
}

/// Finds a minimum of the objective starting from caller-supplied vertices.
///
/// The vertices must be `D + 1` finite points of the same dimension `D >= 1`;
/// they are validated before the objective is ever called.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the vertices do not form a simplex, and
/// [`Error::Objective`] if the objective fails at any point.
pub fn minimize_from_simplex<O, Obs>(
    objective: &O,
    vertices: Vec<Vec<f64>>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let simplex = Simplex::from_vertices(vertices)?;
    search(objective, simplex, config, observer)
}

/// Finds a maximum of the objective starting from `x0`.
///
/// Runs [`minimize`] on the negated objective. The returned
/// [`Solution::objective`] and every [`Event::best_objective`] are reported in
/// the caller's sign.
///
/// # Errors
///
/// Returns an error if `x0` is invalid or the objective fails.
pub fn maximize<O, Obs>(
    objective: &O,
    x0: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let negated = NegateObjective(objective);
    let flipped = |event: &Event<'_>| observer.observe(&event.negated());

    let mut solution = minimize(&negated, x0, config, flipped)?;
    solution.objective = -solution.objective;
    Ok(solution)
}

/// Finds a maximum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if `x0` is invalid or the objective fails.
pub fn maximize_unobserved<O: Objective>(
    objective: &O,
    x0: &[f64],
    config: &Config,
) -> Result<Solution, Error> {
    maximize(objective, x0, config, ())
}
