use std::{convert::Infallible, marker::PhantomData};

/// A scalar objective defined over points of a fixed dimension.
///
/// Solvers search for the `x` that minimizes the returned value. The objective
/// is assumed to be pure: evaluating the same `x` twice must give the same
/// result, which is what allows solvers to memoize evaluations.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed at `x`.
    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error>;
}

impl<O: Objective + ?Sized> Objective for &O {
    type Error = O::Error;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        (**self).evaluate(x)
    }
}

/// Adapts an infallible closure `Fn(&[f64]) -> f64` into an [`Objective`].
///
/// ```
/// use nmsimplex_core::{FnObjective, Objective};
///
/// let sphere = FnObjective(|x: &[f64]| x.iter().map(|v| v * v).sum::<f64>());
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]), Ok(25.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F>(pub F);

impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}

/// Adapts a fallible closure `Fn(&[f64]) -> Result<f64, E>` into an [`Objective`].
#[derive(Debug, Clone, Copy)]
pub struct TryFnObjective<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> TryFnObjective<F, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    /// Wraps a fallible closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

impl<F, E> Objective for TryFnObjective<F, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        (self.f)(x)
    }
}
