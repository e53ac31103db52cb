use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::job::models::Job;
use crate::inbound::http::router::AppState;

pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<JobData>>, ApiError> {
    state
        .job_service
        .list_jobs()
        .await
        .map_err(ApiError::from)
        .map(|jobs| ApiSuccess::new(StatusCode::OK, jobs.iter().map(JobData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Job> for JobData {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.to_string(),
            title: job.title.as_str().to_string(),
            description: job.description.clone(),
            salary_range: job.salary_range.as_str().to_string(),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
