use nmsimplex_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Observer that stops the solver once the objective drops below a target.
///
/// Useful when any point that is good enough will do and the remaining
/// iterations would only polish it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    target: f64,
}

impl StopBelow {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() < self.target).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nmsimplex_core::FnObjective;
    use nmsimplex_solvers::optimization::nelder_mead::{self, Config, Status};

    #[test]
    fn stops_once_target_is_reached() {
        let objective = FnObjective(|x: &[f64]| x[0].powi(2) + x[1].powi(2));

        let solution = nelder_mead::minimize(
            &objective,
            &[30.0, -20.0],
            &Config::default(),
            StopBelow::new(1.0),
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective < 1.0);
    }

    #[test]
    fn unreachable_target_lets_solver_finish() {
        let objective = FnObjective(|x: &[f64]| x[0].powi(2) + 5.0);

        let solution =
            nelder_mead::minimize(&objective, &[3.0], &Config::new(20), StopBelow::new(0.0))
                .unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 20);
    }
}
