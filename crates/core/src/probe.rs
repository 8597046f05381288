use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::error::{LongvisionError, Result};

/// Maximum accepted playtime for an uploaded video.
pub const MAX_DURATION_SECS: f64 = 300.0;

/// Shown when a candidate is rejected for running too long.
pub const DURATION_LIMIT_MESSAGE: &str =
    "The video exceeds the maximum allowed duration of 5 minutes.";

/// A video file that passed duration validation and may be submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub duration_secs: f64,
}

impl UploadCandidate {
    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Outcome of validating a candidate file. The pending state is the future
/// returned by [`validate_candidate`]; once resolved, a candidate is either
/// accepted or rejected, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum Validation {
    Accepted(UploadCandidate),
    Rejected { duration_secs: f64 },
}

/// Probe a media file's playtime duration using ffprobe
pub async fn probe_duration(path: &Path) -> Result<f64> {
    let output = Command::new("ffprobe")
        .arg("-v")
        .arg("error")
        .arg("-show_entries")
        .arg("format=duration")
        .arg("-of")
        .arg("default=noprint_wrappers=1:nokey=1")
        .arg(path)
        .output()
        .await?;

    if !output.status.success() {
        return Err(LongvisionError::ProbeFailed {
            path: path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    parse_duration(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
        LongvisionError::ProbeFailed {
            path: path.to_path_buf(),
            reason: "ffprobe reported no duration".to_string(),
        }
    })
}

fn parse_duration(stdout: &str) -> Option<f64> {
    stdout.trim().parse().ok()
}

/// Classify a probed duration against the upload limit.
pub fn classify(path: &Path, duration_secs: f64) -> Validation {
    if duration_secs > MAX_DURATION_SECS {
        Validation::Rejected { duration_secs }
    } else {
        Validation::Accepted(UploadCandidate {
            path: path.to_path_buf(),
            duration_secs,
        })
    }
}

/// Probe a candidate file and decide whether it may become the active
/// upload. A probe failure is an error, not a rejection.
pub async fn validate_candidate(path: &Path) -> Result<Validation> {
    let duration_secs = probe_duration(path).await?;
    Ok(classify(path, duration_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_five_minutes_is_accepted() {
        let path = Path::new("clip.mp4");
        match classify(path, 300.0) {
            Validation::Accepted(candidate) => {
                assert_eq!(candidate.path, path);
                assert_eq!(candidate.duration_secs, 300.0);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn over_five_minutes_is_rejected() {
        let outcome = classify(Path::new("clip.mp4"), 300.04);
        assert_eq!(
            outcome,
            Validation::Rejected {
                duration_secs: 300.04
            }
        );
    }

    #[test]
    fn ffprobe_output_parses_with_trailing_newline() {
        assert_eq!(parse_duration("12.480000\n"), Some(12.48));
        assert_eq!(parse_duration("N/A\n"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn file_name_falls_back_to_path() {
        let candidate = UploadCandidate {
            path: PathBuf::from("/videos/demo.mov"),
            duration_secs: 10.0,
        };
        assert_eq!(candidate.file_name(), "demo.mov");
    }
}
