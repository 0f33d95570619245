//! Axum route handler for the resume analysis endpoint.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use tokio::time::timeout;

use crate::analysis::{parser, prompts};
use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::models::analysis::{AnalysisFailure, AnalysisOutcome, AnalysisReport};
use crate::state::AppState;

/// POST /api/analyze_resume
///
/// Multipart form with a `file` part (PDF) and a `job_desc` text field.
///
/// Request lifecycle: validate the filename extension, spool the upload to a
/// uniquely named temporary file, extract its text off the async dispatcher,
/// run the AI pipeline under the configured timeout, and map the outcome to
/// an HTTP response. The temporary file is removed on every exit path — the
/// `NamedTempFile` guard deletes it when this function returns, however it
/// returns.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut upload: Option<Vec<u8>> = None;
    let mut job_desc: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                // Reject before buffering the body: nothing downstream runs
                // for a non-PDF upload.
                if !filename.to_lowercase().ends_with(".pdf") {
                    return Err(AppError::Validation(
                        "Only PDF files are allowed".to_string(),
                    ));
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file part: {e}")))?;
                upload = Some(data.to_vec());
            }
            "job_desc" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job_desc field: {e}"))
                })?;
                job_desc = Some(text);
            }
            _ => {
                // Drain unknown parts so the stream keeps advancing.
                let _ = field.bytes().await;
            }
        }
    }

    let data = upload.ok_or_else(|| AppError::Validation("file part is required".to_string()))?;
    let job_desc =
        job_desc.ok_or_else(|| AppError::Validation("job_desc form field is required".to_string()))?;

    // Per-request unique name: concurrent uploads sharing a client-side
    // filename cannot collide.
    let temp = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile()
        .context("Failed to create temporary file")?;
    tokio::fs::write(temp.path(), &data)
        .await
        .context("Failed to store uploaded file")?;

    let resume_text = state
        .extractor
        .extract(temp.path())
        .await
        .context("Failed to extract text from the uploaded PDF")?;

    let outcome = timeout(
        state.config.analysis_timeout,
        run_pipeline(state.llm.as_ref(), &resume_text, &job_desc),
    )
    .await
    .map_err(|_| AppError::Timeout)?;

    match outcome {
        AnalysisOutcome::Report(report) => Ok(Json(report)),
        AnalysisOutcome::Failure(failure) => Err(AppError::Analysis(failure)),
    }
}

/// Prompt → model → parse.
///
/// Every failure inside the pipeline is converted into an
/// `AnalysisOutcome::Failure` rather than raised, so the handler can tell
/// "pipeline ran but produced an unusable result" apart from a crashed
/// request.
async fn run_pipeline(
    llm: &dyn CompletionClient,
    resume_text: &str,
    job_desc: &str,
) -> AnalysisOutcome {
    let prompt = prompts::build_prompt(resume_text, job_desc);

    match llm.complete(&prompt).await {
        Ok(reply) => parser::parse_reply(&reply),
        Err(e) => AnalysisOutcome::Failure(AnalysisFailure {
            error: format!("An error occurred with the AI model: {e}"),
            raw_response: None,
        }),
    }
}
