use std::path::PathBuf;

use thiserror::Error;

use crate::{probe::UploadCandidate, task::AnalysisTask};

/// A processing request ready to be sent to the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRequest {
    pub task: AnalysisTask,
    pub video: PathBuf,
    pub prompt: Option<String>,
}

/// Local validation failures. These must never reach the network; the
/// display strings are shown verbatim in the text output.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please upload a video first.")]
    NoVideo,

    #[error("Please provide a prompt for Visual Question Answering.")]
    PromptRequired,
}

/// Check a submission before any backend call. An empty prompt is omitted
/// from the request entirely rather than sent as an empty field.
pub fn build_submission(
    task: AnalysisTask,
    candidate: Option<&UploadCandidate>,
    prompt: &str,
) -> Result<SubmissionRequest, SubmitError> {
    let Some(candidate) = candidate else {
        return Err(SubmitError::NoVideo);
    };

    if prompt.is_empty() && task.requires_prompt() {
        return Err(SubmitError::PromptRequired);
    }

    Ok(SubmissionRequest {
        task,
        video: candidate.path.clone(),
        prompt: (!prompt.is_empty()).then(|| prompt.to_string()),
    })
}
