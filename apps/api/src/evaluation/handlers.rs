//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::evaluation::pipeline::{evaluate_submission, ResumeUpload, Submission};
use crate::routes::MAX_UPLOAD_BYTES;
use crate::state::AppState;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUME_FIELD: &str = "resume";

/// `response` is null when the form was submitted without a resume.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub response: Option<String>,
}

/// POST /api/v1/evaluations
///
/// Multipart form with a `job_description` text field and a `resume` PDF file.
/// Returns the model's evaluation text unmodified.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationResponse>, AppError> {
    let submission = read_submission(multipart).await?;
    let response = evaluate_submission(submission, state.evaluator.as_ref()).await?;
    Ok(Json(EvaluationResponse { response }))
}

async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            JOB_DESCRIPTION_FIELD => {
                submission.job_description = field.text().await.map_err(multipart_error)?;
            }
            RESUME_FIELD => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;

                // Browsers send an empty part when no file was chosen.
                if bytes.is_empty() {
                    continue;
                }

                submission.resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(submission)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(format!(
            "Submission exceeds the {} MiB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }
    AppError::Validation(format!("Failed to read multipart field: {e}"))
}
