use std::collections::HashMap;

use nmsimplex_core::Objective;

/// Counts objective calls and optionally memoizes their results.
///
/// The cache key is the exact bit pattern of every coordinate. Points that
/// differ only by rounding are distinct keys (no epsilon bucketing), and so
/// are `0.0` and `-0.0`.
///
/// One evaluator lives for exactly one solve; it is never shared.
pub(super) struct Evaluator<'o, O> {
    objective: &'o O,
    cache: Option<HashMap<Vec<u64>, f64>>,
    evals: usize,
}

impl<'o, O: Objective> Evaluator<'o, O> {
    pub(super) fn new(objective: &'o O, memoize: bool) -> Self {
        Self {
            objective,
            cache: memoize.then(HashMap::new),
            evals: 0,
        }
    }

    /// Returns the cost at `x`, calling the objective only on a cache miss.
    pub(super) fn evaluate(&mut self, x: &[f64]) -> Result<f64, O::Error> {
        let Some(cache) = self.cache.as_mut() else {
            self.evals += 1;
            return self.objective.evaluate(x);
        };

        let key: Vec<u64> = x.iter().map(|v| v.to_bits()).collect();
        if let Some(&cost) = cache.get(&key) {
            return Ok(cost);
        }

        self.evals += 1;
        let cost = self.objective.evaluate(x)?;
        cache.insert(key, cost);
        Ok(cost)
    }

    /// Number of real (non-cached) objective calls so far.
    pub(super) fn evals(&self) -> usize {
        self.evals
    }

    /// Number of distinct points held in the cache.
    pub(super) fn cache_len(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use nmsimplex_core::FnObjective;

    #[test]
    fn memoized_hits_do_not_count() {
        let calls = Cell::new(0);
        let objective = FnObjective(|x: &[f64]| {
            calls.set(calls.get() + 1);
            x[0] * 2.0
        });
        let mut evaluator = Evaluator::new(&objective, true);

        assert_eq!(evaluator.evaluate(&[1.5]).unwrap(), 3.0);
        assert_eq!(evaluator.evaluate(&[1.5]).unwrap(), 3.0);
        assert_eq!(evaluator.evaluate(&[2.0]).unwrap(), 4.0);

        assert_eq!(evaluator.evals(), 2);
        assert_eq!(calls.get(), 2);
        assert_eq!(evaluator.cache_len(), 2);
    }

    #[test]
    fn unmemoized_counts_every_call() {
        let objective = FnObjective(|x: &[f64]| x[0]);
        let mut evaluator = Evaluator::new(&objective, false);

        for _ in 0..3 {
            evaluator.evaluate(&[1.0]).unwrap();
        }

        assert_eq!(evaluator.evals(), 3);
        assert_eq!(evaluator.cache_len(), 0);
    }

    #[test]
    fn cache_key_is_exact() {
        let objective = FnObjective(|x: &[f64]| x[0]);
        let mut evaluator = Evaluator::new(&objective, true);

        evaluator.evaluate(&[0.1 + 0.2]).unwrap();
        evaluator.evaluate(&[0.3]).unwrap();
        evaluator.evaluate(&[0.0]).unwrap();
        evaluator.evaluate(&[-0.0]).unwrap();

        assert_eq!(evaluator.evals(), 4);
    }
}
