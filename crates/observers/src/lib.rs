//! Reusable observers for the nmsimplex solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the Nelder-Mead solver and any solver whose events and actions
//! implement the same traits.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`]: records one [`Record`] per iteration
//! - [`StopBelow`]: stops the solver once the best objective drops below a target
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Record`] so a
//!   recorded trace can be written out and read back.
//!
//! [`Observer`]: nmsimplex_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod stop_below;

pub use history::{History, Record};
pub use stop_below::StopBelow;
