use nmsimplex_core::Observer;
use nmsimplex_solvers::optimization::nelder_mead::{Event, Operation};

/// An owned copy of one Nelder-Mead iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub iter: usize,
    pub x: Vec<f64>,
    pub objective: f64,
    pub centroid: Vec<f64>,
    pub operation: Operation,
    pub evals: usize,
}

impl From<&Event<'_>> for Record {
    fn from(event: &Event<'_>) -> Self {
        Self {
            iter: event.iter,
            x: event.best.to_vec(),
            objective: event.best_objective,
            centroid: event.centroid.to_vec(),
            operation: event.operation,
            evals: event.evals,
        }
    }
}

/// Observer that records every iteration of a Nelder-Mead search.
///
/// Events borrow the solver's buffers, so `History` copies what it needs into
/// a [`Record`]. It never requests an action.
///
/// Pass `&mut history` to keep ownership across the solve:
///
/// ```
/// use nmsimplex_core::FnObjective;
/// use nmsimplex_observers::History;
/// use nmsimplex_solvers::optimization::nelder_mead::{self, Config};
///
/// let sphere = FnObjective(|x: &[f64]| x.iter().map(|v| v * v).sum::<f64>());
/// let mut history = History::new();
///
/// let solution = nelder_mead::minimize(&sphere, &[3.0, -2.0], &Config::new(50), &mut history)?;
///
/// assert_eq!(history.len(), solution.iters);
/// # Ok::<(), nelder_mead::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records collected so far, in iteration order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Consumes the history, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<A> Observer<Event<'_>, A> for History {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.records.push(Record::from(event));
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<A> Observer<Event<'_>, A> for &mut History {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        (**self).observe(event)
    }
}
