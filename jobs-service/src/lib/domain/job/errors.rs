use thiserror::Error;

/// Error for JobTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobTitleError {
    #[error("Job title must not be empty")]
    Empty,

    #[error("Job title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for SalaryRange validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SalaryRangeError {
    #[error("Salary range too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for job operations
#[derive(Debug, Clone, Error)]
pub enum JobError {
    #[error("Invalid job title: {0}")]
    InvalidTitle(#[from] JobTitleError),

    #[error("Invalid salary range: {0}")]
    InvalidSalaryRange(#[from] SalaryRangeError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
