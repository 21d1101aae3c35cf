//! Core traits for the nmsimplex workspace.
//!
//! This crate defines the shared abstractions that the solver and the
//! reusable observers build on:
//!
//! - [`Objective`]: the caller-supplied scalar function being minimized
//! - [`FnObjective`], [`TryFnObjective`]: adapters for plain closures
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{FnObjective, Objective, TryFnObjective};
pub use observer::Observer;
