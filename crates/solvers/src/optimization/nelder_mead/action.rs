/// Actions an observer can take during a Nelder-Mead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current iteration and return the best
    /// solution found so far.
    StopEarly,
}
