//! Shared objectives for the nmsimplex integration tests.

use std::{cell::Cell, convert::Infallible};

use nmsimplex_core::Objective;
use thiserror::Error;

/// `(5x + 1)² + (4y − 16)²`, minimum of zero at `(-0.2, 4)`.
pub struct Paraboloid;

impl Objective for Paraboloid {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((5.0 * x[0] + 1.0).powi(2) + (4.0 * x[1] - 16.0).powi(2))
    }
}

/// Sum of squares in any dimension, offset so the minimum sits at `center`.
pub struct Sphere {
    pub center: Vec<f64>,
}

impl Objective for Sphere {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(x.iter()
            .zip(&self.center)
            .map(|(xi, ci)| (xi - ci).powi(2))
            .sum())
    }
}

/// The Rosenbrock valley `(a − x)² + b(y − x²)²`, minimum at `(a, a²)`.
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

impl Objective for Rosenbrock {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.a - x[0]).powi(2) + self.b * (x[1] - x[0].powi(2)).powi(2))
    }
}

/// Wraps an objective and counts how often it is actually called.
pub struct Counting<O> {
    inner: O,
    calls: Cell<usize>,
}

impl<O> Counting<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<O: Objective> Objective for Counting<O> {
    type Error = O::Error;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.evaluate(x)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("point {x:?} is outside the box of half-width {limit}")]
pub struct OutOfBounds {
    pub x: Vec<f64>,
    pub limit: f64,
}

/// A sphere that can only be evaluated inside `[-limit, limit]^D`.
pub struct Boxed {
    pub limit: f64,
}

impl Objective for Boxed {
    type Error = OutOfBounds;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        if x.iter().any(|v| v.abs() > self.limit) {
            return Err(OutOfBounds {
                x: x.to_vec(),
                limit: self.limit,
            });
        }
        Ok(x.iter().map(|v| v * v).sum())
    }
}

/// Installs a `tracing` subscriber once per test binary, filtered by `RUST_LOG`.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
