use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::job::errors::JobTitleError;
use crate::domain::job::errors::SalaryRangeError;

/// Job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub title: JobTitle,
    pub description: String,
    pub salary_range: SalaryRange,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Job title value type
///
/// Non-blank, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTitle(String);

impl JobTitle {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title longer than 255 characters
    pub fn new(title: String) -> Result<Self, JobTitleError> {
        if title.trim().is_empty() {
            return Err(JobTitleError::Empty);
        }

        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(JobTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-form salary range (e.g. "100k-120k"), possibly empty, at most 100
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryRange(String);

impl SalaryRange {
    const MAX_LENGTH: usize = 100;

    pub fn new(salary_range: String) -> Result<Self, SalaryRangeError> {
        let length = salary_range.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(SalaryRangeError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(salary_range))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a job posting
#[derive(Debug)]
pub struct CreateJobCommand {
    pub title: JobTitle,
    pub description: String,
    pub salary_range: SalaryRange,
}

impl CreateJobCommand {
    pub fn new(title: JobTitle, description: String, salary_range: SalaryRange) -> Self {
        Self {
            title,
            description,
            salary_range,
        }
    }
}
