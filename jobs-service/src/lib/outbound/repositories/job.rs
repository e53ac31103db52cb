use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::job::errors::JobError;
use crate::domain::job::models::Job;
use crate::domain::job::models::JobId;
use crate::domain::job::models::JobTitle;
use crate::domain::job::models::SalaryRange;
use crate::domain::job::ports::JobRepository;

pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_job(row: &PgRow) -> Result<Job, JobError> {
        let database_error = |e: sqlx::Error| JobError::DatabaseError(e.to_string());

        let id: Uuid = row.try_get("id").map_err(database_error)?;
        let title: String = row.try_get("title").map_err(database_error)?;
        let description: String = row.try_get("description").map_err(database_error)?;
        let salary_range: String = row.try_get("salary_range").map_err(database_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(database_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(database_error)?;

        Ok(Job {
            id: JobId(id),
            title: JobTitle::new(title)?,
            description,
            salary_range: SalaryRange::new(salary_range)?,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn find_all(&self) -> Result<Vec<Job>, JobError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, salary_range, created_at, updated_at
            FROM jobs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| JobError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_job).collect()
    }

    async fn create(&self, job: Job) -> Result<Job, JobError> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, title, description, salary_range, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(job.id.0)
        .bind(job.title.as_str())
        .bind(&job.description)
        .bind(job.salary_range.as_str())
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| JobError::DatabaseError(e.to_string()))?;

        Ok(job)
    }
}
