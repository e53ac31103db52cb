use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::job::errors::JobError;
use crate::domain::job::models::CreateJobCommand;
use crate::domain::job::models::Job;
use crate::domain::job::models::JobId;
use crate::domain::job::ports::JobRepository;
use crate::domain::job::ports::JobServicePort;

/// Domain service implementation for job operations.
pub struct JobService<JR>
where
    JR: JobRepository,
{
    repository: Arc<JR>,
}

impl<JR> JobService<JR>
where
    JR: JobRepository,
{
    pub fn new(repository: Arc<JR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<JR> JobServicePort for JobService<JR>
where
    JR: JobRepository,
{
    async fn list_jobs(&self) -> Result<Vec<Job>, JobError> {
        self.repository.find_all().await
    }

    async fn create_job(&self, command: CreateJobCommand) -> Result<Job, JobError> {
        let now = Utc::now();
        let job = Job {
            id: JobId::new(),
            title: command.title,
            description: command.description,
            salary_range: command.salary_range,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(job).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::job::models::JobTitle;
    use crate::domain::job::models::SalaryRange;

    mock! {
        pub TestJobRepository {}

        #[async_trait]
        impl JobRepository for TestJobRepository {
            async fn find_all(&self) -> Result<Vec<Job>, JobError>;
            async fn create(&self, job: Job) -> Result<Job, JobError>;
        }
    }

    #[tokio::test]
    async fn test_create_job() {
        let mut repository = MockTestJobRepository::new();

        repository
            .expect_create()
            .withf(|job| {
                job.title.as_str() == "Backend Engineer"
                    && job.salary_range.as_str() == "100k-120k"
                    && job.created_at == job.updated_at
            })
            .times(1)
            .returning(|job| Ok(job));

        let service = JobService::new(Arc::new(repository));

        let command = CreateJobCommand::new(
            JobTitle::new("Backend Engineer".to_string()).unwrap(),
            "Build services".to_string(),
            SalaryRange::new("100k-120k".to_string()).unwrap(),
        );

        let job = service.create_job(command).await.expect("Create failed");
        assert_eq!(job.title.as_str(), "Backend Engineer");
        assert_eq!(job.description, "Build services");
    }

    #[tokio::test]
    async fn test_list_jobs_propagates_database_error() {
        let mut repository = MockTestJobRepository::new();

        repository
            .expect_find_all()
            .times(1)
            .returning(|| Err(JobError::DatabaseError("connection refused".to_string())));

        let service = JobService::new(Arc::new(repository));

        let result = service.list_jobs().await;
        assert!(matches!(result, Err(JobError::DatabaseError(_))));
    }
}
