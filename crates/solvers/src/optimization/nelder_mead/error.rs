use std::error::Error as StdError;

/// Errors that can occur during a Nelder-Mead search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}

/// Reasons an initial point or simplex is rejected before any evaluation.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("initial point must have at least one coordinate")]
    EmptyPoint,

    #[error("vertex {vertex} has a non-finite coordinate at index {coordinate}")]
    NonFinite { vertex: usize, coordinate: usize },

    #[error("simplex needs {expected} vertices, found {found}")]
    VertexCount { expected: usize, found: usize },

    #[error("vertex {vertex} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        vertex: usize,
        expected: usize,
        found: usize,
    },
}
