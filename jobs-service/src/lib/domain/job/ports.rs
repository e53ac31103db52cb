use async_trait::async_trait;

use crate::domain::job::errors::JobError;
use crate::domain::job::models::CreateJobCommand;
use crate::domain::job::models::Job;

/// Port for job domain service operations.
#[async_trait]
pub trait JobServicePort: Send + Sync + 'static {
    /// List every job posting, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_jobs(&self) -> Result<Vec<Job>, JobError>;

    /// Create a job posting.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_job(&self, command: CreateJobCommand) -> Result<Job, JobError>;
}

/// Persistence operations for jobs.
#[async_trait]
pub trait JobRepository: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<Job>, JobError>;

    async fn create(&self, job: Job) -> Result<Job, JobError>;
}
