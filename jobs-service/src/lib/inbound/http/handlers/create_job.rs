use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::list_jobs::JobData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::job::errors::JobError;
use crate::domain::job::models::CreateJobCommand;
use crate::domain::job::models::JobTitle;
use crate::domain::job::models::SalaryRange;
use crate::inbound::http::router::AppState;

pub async fn create_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<CreateJobRequest>,
) -> Result<ApiSuccess<JobData>, ApiError> {
    let job = state
        .job_service
        .create_job(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(job_id = %job.id, created_by = %claims.user_id, "Job created");

    Ok(ApiSuccess::new(StatusCode::CREATED, (&job).into()))
}

/// HTTP request body for creating a job (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateJobRequest {
    title: String,
    description: String,
    salary_range: String,
}

impl CreateJobRequest {
    fn try_into_command(self) -> Result<CreateJobCommand, JobError> {
        let title = JobTitle::new(self.title)?;
        let salary_range = SalaryRange::new(self.salary_range)?;
        Ok(CreateJobCommand::new(
            title,
            self.description,
            salary_range,
        ))
    }
}
