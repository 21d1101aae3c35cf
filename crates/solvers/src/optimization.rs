//! Solvers for optimization problems, minimizing or maximizing an objective.
//!
//! An [`Objective`] maps a point `x: &[f64]` to a scalar. Solvers in this
//! module search for the `x` that minimizes (or maximizes) that scalar.
//!
//! # Solvers
//!
//! - [`nelder_mead`]: derivative-free simplex search in any dimension
//!
//! [`Objective`]: nmsimplex_core::Objective

mod negate;

pub use negate::NegateObjective;

pub mod nelder_mead;
