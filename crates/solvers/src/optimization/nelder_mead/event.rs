use super::Operation;

/// Progress report emitted once per completed iteration.
///
/// `best` and `best_objective` describe the best vertex as it stood at the
/// start of the iteration, before the iteration's operation was applied. The
/// objective is the value computed while sorting, not a fresh evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// Zero-based iteration index.
    pub iter: usize,

    /// Best vertex at the start of the iteration.
    pub best: &'a [f64],

    /// Objective value at `best`.
    pub best_objective: f64,

    /// Centroid of every vertex except the worst.
    pub centroid: &'a [f64],

    /// The transformation applied during this iteration.
    pub operation: Operation,

    /// Real (non-cached) objective evaluations so far.
    pub evals: usize,
}

impl<'a> Event<'a> {
    /// Returns the same event with the objective sign flipped.
    pub(super) fn negated(&self) -> Event<'a> {
        Event {
            best_objective: -self.best_objective,
            ..*self
        }
    }
}
