//! Solvers for the nmsimplex workspace.
//!
//! - [`optimization::nelder_mead`]: derivative-free minimization of a scalar
//!   objective over `D`-dimensional points by deforming a simplex of `D + 1`
//!   vertices

pub mod optimization;
