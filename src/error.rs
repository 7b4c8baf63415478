use thiserror::Error;

/// Failures that end a search instead of being retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("trial {trial}: no feasible layout with visible foci after {attempts} attempts")]
    ExhaustedBudget { trial: usize, attempts: u64 },

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    #[error("layout has no viewer resting on the first row")]
    EmptyFirstRow,
}
