use std::fmt;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// The simplex collapsed onto its best vertex within the tolerance.
    Converged,

    /// Ran the full iteration budget without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns the human-readable termination reason.
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::Converged => "tolerance reached",
            Self::MaxIters => "max iterations reached",
            Self::StoppedByObserver => "stopped by observer",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.reason())
    }
}

/// The result of a Nelder-Mead search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best vertex of the final simplex.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Centroid of the final simplex, excluding its worst vertex.
    pub centroid: Vec<f64>,

    /// Number of completed iterations.
    pub iters: usize,

    /// Real (non-cached) objective evaluations performed.
    pub evals: usize,
}
