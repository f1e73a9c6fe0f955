use bq_core::BqError;
use bq_workload::WorkloadError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid {field}: {value:?} is not a non-negative whole number")]
    InvalidInput {
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Core(#[from] BqError),

    #[error(transparent)]
    Workload(#[from] WorkloadError),
}

pub type SimResult<T> = Result<T, SimError>;
