use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::evaluator::Evaluator;
use crate::evaluation::prompts::build_evaluation_prompt;
use crate::extraction::{extract_resume_text, is_pdf_upload};

/// An uploaded resume file, held only for the duration of one submission.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// One press of the submit button.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub job_description: String,
    pub resume: Option<ResumeUpload>,
}

/// Runs extract, prompt and evaluate for a single submission.
///
/// Returns `Ok(None)` without extracting or calling the model when no resume
/// was uploaded. Otherwise returns the model's text exactly as received.
pub async fn evaluate_submission(
    submission: Submission,
    evaluator: &dyn Evaluator,
) -> Result<Option<String>, AppError> {
    let Submission {
        job_description,
        resume,
    } = submission;

    let Some(resume) = resume else {
        info!("Submission without a resume, nothing to evaluate");
        return Ok(None);
    };

    let submission_id = Uuid::new_v4();
    run_evaluation(resume, &job_description, evaluator)
        .instrument(info_span!("evaluation", %submission_id))
        .await
        .map(Some)
}

async fn run_evaluation(
    resume: ResumeUpload,
    job_description: &str,
    evaluator: &dyn Evaluator,
) -> Result<String, AppError> {
    if !is_pdf_upload(resume.file_name.as_deref(), resume.content_type.as_deref()) {
        return Err(AppError::Validation(
            "Only PDF resumes are supported".to_string(),
        ));
    }

    // CPU-bound PDF parsing, kept off the async executor.
    let ResumeUpload { bytes, .. } = resume;
    let resume_text = tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })??;
    info!("Resume text extracted ({} chars)", resume_text.len());

    let prompt = build_evaluation_prompt(&resume_text, job_description);
    info!("Evaluation prompt built ({} chars)", prompt.len());

    let response = evaluator.evaluate(&prompt).await?;
    info!("Evaluation response received ({} chars)", response.len());

    Ok(response)
}
