//! LongVision Core Library
//!
//! Task registry, upload validation, and the HTTP client for the LongVision
//! video-analysis backend. All UI-independent logic lives here.

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod probe;
pub mod submit;
pub mod task;

// Re-export commonly used items at crate root
pub use api::{
    ApiClient, ProcessResponse, ProcessedVideo, SubmissionOutcome, download_url,
    outcome_from_response,
};
pub use config::Config;
pub use error::{LongvisionError, Result};
pub use feedback::FeedbackEntry;
pub use probe::{UploadCandidate, Validation, probe_duration, validate_candidate};
pub use submit::{SubmissionRequest, SubmitError, build_submission};
pub use task::AnalysisTask;
