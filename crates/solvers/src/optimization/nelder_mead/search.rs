use nmsimplex_core::{Objective, Observer};

use super::{
    Action, Coefficients, Config, Error, Event, Operation, Simplex, Solution, Status,
    evaluator::Evaluator, geometry,
};

/// Everything one iteration learned before its operation was applied.
struct Iteration {
    best: Vec<f64>,
    best_objective: f64,
    centroid: Vec<f64>,
    operation: Operation,
    spread: f64,
}

/// Core Nelder-Mead loop.
///
/// Each iteration is atomic: the observer sees it only after its operation
/// has been applied, and both early stop and convergence are checked at the
/// iteration boundary.
pub(super) fn search<O, Obs>(
    objective: &O,
    mut simplex: Simplex,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut evaluator = Evaluator::new(objective, config.memoize());
    let coefficients = config.coefficients();

    let mut status = Status::MaxIters;
    let mut iters = 0;

    for iter in 0..config.max_iters() {
        let step = iterate(&mut simplex, &mut evaluator, &coefficients)?;
        iters = iter + 1;

        tracing::debug!(
            iter,
            operation = %step.operation,
            best_objective = step.best_objective,
            evals = evaluator.evals(),
            "nelder-mead iteration"
        );

        let event = Event {
            iter,
            best: &step.best,
            best_objective: step.best_objective,
            centroid: &step.centroid,
            operation: step.operation,
            evals: evaluator.evals(),
        };
        let action = observer.observe(&event);

        if step.spread < config.tolerance() {
            status = Status::Converged;
            break;
        }
        if let Some(Action::StopEarly) = action {
            status = Status::StoppedByObserver;
            break;
        }
    }

    let ranking = simplex
        .sort(|x| evaluator.evaluate(x))
        .map_err(Error::objective)?;

    tracing::debug!(
        %status,
        iters,
        evals = evaluator.evals(),
        cached = evaluator.cache_len(),
        objective = ranking.best,
        "nelder-mead finished"
    );

    Ok(Solution {
        status,
        x: simplex.best().to_vec(),
        objective: ranking.best,
        centroid: simplex.centroid(),
        iters,
        evals: evaluator.evals(),
    })
}

/// Runs one sort → reflect → decide → apply cycle.
fn iterate<O: Objective>(
    simplex: &mut Simplex,
    evaluator: &mut Evaluator<'_, O>,
    coefficients: &Coefficients,
) -> Result<Iteration, Error> {
    let ranking = simplex
        .sort(|x| evaluator.evaluate(x))
        .map_err(Error::objective)?;

    let best = simplex.best().to_vec();
    let worst = simplex.worst().to_vec();
    let centroid = simplex.centroid();

    let reflected = geometry::reflect(&centroid, &worst, coefficients.reflection());
    let reflected_cost = evaluator.evaluate(&reflected).map_err(Error::objective)?;
    tracing::trace!(reflected_cost, "evaluated reflection");

    let operation = if ranking.best <= reflected_cost && reflected_cost < ranking.second_worst {
        simplex.replace_worst(reflected)?;
        Operation::Reflect
    } else if reflected_cost < ranking.best {
        let expanded = geometry::expand(&centroid, &worst, coefficients.expansion());
        let expanded_cost = evaluator.evaluate(&expanded).map_err(Error::objective)?;
        tracing::trace!(expanded_cost, "evaluated expansion");

        if expanded_cost < reflected_cost {
            simplex.replace_worst(expanded)?;
            Operation::Expand
        } else {
            simplex.replace_worst(reflected)?;
            Operation::Reflect
        }
    } else {
        let contracted = geometry::contract(&centroid, &worst, coefficients.contraction());
        let contracted_cost = evaluator.evaluate(&contracted).map_err(Error::objective)?;
        tracing::trace!(contracted_cost, "evaluated contraction");

        if contracted_cost < ranking.worst {
            simplex.replace_worst(contracted)?;
            Operation::Contract
        } else {
            simplex.reduce(coefficients.shrink());
            Operation::Reduce
        }
    };

    // A 1-D centroid is the best vertex itself, so measure to the worst instead.
    let reference = if simplex.dim() == 1 { &worst } else { &centroid };
    let spread = manhattan(&best, reference);

    Ok(Iteration {
        best,
        best_objective: ranking.best,
        centroid,
        operation,
        spread,
    })
}

/// Sum of absolute coordinate differences.
fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
