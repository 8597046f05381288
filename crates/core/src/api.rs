use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{
    config::Config,
    error::Result,
    feedback::FeedbackEntry,
    submit::SubmissionRequest,
};

/// Shown in place of results while a submission is in flight.
pub const PROCESSING_MESSAGE: &str = "Processing the video...";

/// Shown when the request itself fails: network error, non-2xx status, or
/// an unparseable body. The underlying cause is logged, never displayed.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing the video.";

const NO_OUTPUT_MESSAGE: &str = "Processing completed, but no output generated.";

/// Path marker separating the backend's static root from the artifact path.
const STATIC_MARKER: &str = "/static/";

/// Wire shape of the processing endpoint's JSON body.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ProcessResponse {
    pub error: Option<String>,
    pub output_video_path: Option<String>,
    pub extracted_texts: Option<String>,
}

/// A processed video the user can play back or download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedVideo {
    pub url: String,
    pub download_url: String,
}

/// What the output panel renders after a submission finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub output_video: Option<ProcessedVideo>,
    pub text_output: String,
}

/// HTTP client for the LongVision backend. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a video to the processing endpoint and map the JSON response
    /// into a [`SubmissionOutcome`].
    pub async fn process_video(&self, request: &SubmissionRequest) -> Result<SubmissionOutcome> {
        let bytes = tokio::fs::read(&request.video).await?;
        let file_name = request
            .video
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());

        let mut form = Form::new().text("task", request.task.id()).part(
            "video",
            Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(video_mime(&request.video))?,
        );
        if let Some(prompt) = &request.prompt {
            form = form.text("prompt", prompt.clone());
        }

        tracing::debug!(
            task = request.task.id(),
            video = %request.video.display(),
            prompt = request.prompt.as_deref(),
            "sending process_video request"
        );

        let response = self
            .http
            .post(format!("{}/process_video", self.base_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<ProcessResponse>()
            .await?;

        tracing::debug!(?response, "received process_video response");

        Ok(outcome_from_response(&self.base_url, response))
    }

    /// Post a feedback entry. Only the status code is consumed.
    pub async fn submit_feedback(&self, entry: &FeedbackEntry) -> Result<()> {
        self.http
            .post(format!("{}/submit_feedback", self.base_url))
            .json(entry)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Map a backend response into what the output panel should show. A missing
/// output video path alongside extracted text is a partial success, not an
/// error.
pub fn outcome_from_response(base_url: &str, response: ProcessResponse) -> SubmissionOutcome {
    if let Some(error) = response.error {
        return SubmissionOutcome {
            output_video: None,
            text_output: format!("Error: {error}"),
        };
    }

    let output_video = response.output_video_path.map(|path| {
        let url = format!("{base_url}{path}");
        let download_url = download_url(base_url, &url);
        ProcessedVideo { url, download_url }
    });
    if output_video.is_none() {
        tracing::warn!("no output video path received");
    }

    SubmissionOutcome {
        output_video,
        text_output: response
            .extracted_texts
            .unwrap_or_else(|| NO_OUTPUT_MESSAGE.to_string()),
    }
}

/// Derive the download endpoint URL from a playback URL by rewriting the
/// portion after the `/static/` marker. The playback URL itself is used
/// when the marker is missing, so the action still points somewhere real.
pub fn download_url(base_url: &str, video_url: &str) -> String {
    match video_url.split_once(STATIC_MARKER) {
        Some((_, tail)) => format!("{base_url}/download/{tail}"),
        None => video_url.to_string(),
    }
}

fn video_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}
