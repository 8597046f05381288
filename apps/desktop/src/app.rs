use std::path::PathBuf;

use iced::{Element, Subscription, Task, window};

use longvision_core::{
    api::{self, ApiClient, ProcessedVideo, SubmissionOutcome},
    config::Config,
    feedback::FeedbackEntry,
    probe::{self, UploadCandidate, Validation},
    submit::build_submission,
    task::AnalysisTask,
};

use crate::view;

/// Shown in the feedback modal when the POST fails. The entered text is
/// kept so the user can retry manually.
pub const FEEDBACK_FAILURE_MESSAGE: &str = "Failed to submit feedback. Please try again.";

/// Top-level state. Child views are pure functions over this struct; all
/// mutation happens in [`App::update`].
pub struct App {
    pub client: ApiClient,
    pub selected_task: AnalysisTask,
    pub upload: Option<UploadCandidate>,
    pub upload_error: Option<String>,
    pub drag_active: bool,
    pub path_input: String,
    pub prompt: String,
    pub output_video: Option<ProcessedVideo>,
    pub text_output: String,
    pub loading: bool,
    pub info_modal: Option<AnalysisTask>,
    pub feedback: FeedbackForm,
    /// Monotonic tag for in-flight submissions. Responses carrying a stale
    /// tag are dropped so a slow request cannot overwrite a newer one.
    submission_seq: u64,
}

#[derive(Default)]
pub struct FeedbackForm {
    pub open: bool,
    pub feedback: String,
    pub email: String,
    pub name: String,
    pub error: Option<String>,
    pub sending: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    TaskSelected(AnalysisTask),
    InfoOpened(AnalysisTask),
    InfoClosed,
    PathInputChanged(String),
    PathInputSubmitted,
    FileHovered,
    FileHoverLeft,
    FileDropped(PathBuf),
    CandidateValidated(Result<Validation, String>),
    PromptChanged(String),
    SubmitPressed,
    ProcessFinished {
        seq: u64,
        result: Result<SubmissionOutcome, String>,
    },
    OpenUrl(String),
    FeedbackOpened,
    FeedbackClosed,
    FeedbackBodyChanged(String),
    FeedbackEmailChanged(String),
    FeedbackNameChanged(String),
    FeedbackSubmitted,
    FeedbackFinished(Result<(), String>),
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (Self::with_config(Config::from_env()), Task::none())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            client: ApiClient::new(&config),
            selected_task: AnalysisTask::default(),
            upload: None,
            upload_error: None,
            drag_active: false,
            path_input: String::new(),
            prompt: String::new(),
            output_video: None,
            text_output: String::new(),
            loading: false,
            info_modal: None,
            feedback: FeedbackForm::default(),
            submission_seq: 0,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            iced::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TaskSelected(task) => {
                self.selected_task = task;
                Task::none()
            }
            Message::InfoOpened(task) => {
                self.info_modal = Some(task);
                Task::none()
            }
            Message::InfoClosed => {
                self.info_modal = None;
                Task::none()
            }
            Message::PathInputChanged(value) => {
                self.path_input = value;
                Task::none()
            }
            Message::PathInputSubmitted => {
                let path = PathBuf::from(self.path_input.trim());
                if path.as_os_str().is_empty() {
                    return Task::none();
                }
                validate(path)
            }
            Message::FileHovered => {
                self.drag_active = true;
                Task::none()
            }
            Message::FileHoverLeft => {
                self.drag_active = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drag_active = false;
                validate(path)
            }
            Message::CandidateValidated(result) => {
                match result {
                    Ok(Validation::Accepted(candidate)) => {
                        self.upload = Some(candidate);
                        self.upload_error = None;
                    }
                    Ok(Validation::Rejected { .. }) => {
                        self.upload = None;
                        self.upload_error = Some(probe::DURATION_LIMIT_MESSAGE.to_string());
                    }
                    Err(reason) => {
                        tracing::error!(%reason, "duration probe failed");
                        self.upload = None;
                        self.upload_error = Some(reason);
                    }
                }
                Task::none()
            }
            Message::PromptChanged(prompt) => {
                self.prompt = prompt;
                Task::none()
            }
            Message::SubmitPressed => {
                // Reset outputs before starting new processing
                self.output_video = None;
                match build_submission(self.selected_task, self.upload.as_ref(), &self.prompt) {
                    Err(error) => {
                        self.text_output = error.to_string();
                        Task::none()
                    }
                    Ok(request) => {
                        self.text_output = api::PROCESSING_MESSAGE.to_string();
                        self.loading = true;
                        self.submission_seq += 1;
                        let seq = self.submission_seq;
                        let client = self.client.clone();
                        Task::perform(
                            async move {
                                client
                                    .process_video(&request)
                                    .await
                                    .map_err(|error| error.to_string())
                            },
                            move |result| Message::ProcessFinished { seq, result },
                        )
                    }
                }
            }
            Message::ProcessFinished { seq, result } => {
                if seq != self.submission_seq {
                    // A newer submission superseded this one.
                    return Task::none();
                }
                self.loading = false;
                match result {
                    Ok(outcome) => {
                        self.output_video = outcome.output_video;
                        self.text_output = outcome.text_output;
                    }
                    Err(reason) => {
                        tracing::error!(%reason, "video processing failed");
                        self.output_video = None;
                        self.text_output = api::GENERIC_FAILURE_MESSAGE.to_string();
                    }
                }
                Task::none()
            }
            Message::OpenUrl(url) => {
                if let Err(error) = open::that_detached(&url) {
                    tracing::error!(%error, %url, "failed to open URL");
                }
                Task::none()
            }
            Message::FeedbackOpened => {
                self.feedback.open = true;
                Task::none()
            }
            Message::FeedbackClosed => {
                self.feedback.open = false;
                self.feedback.error = None;
                Task::none()
            }
            Message::FeedbackBodyChanged(value) => {
                self.feedback.feedback = value;
                Task::none()
            }
            Message::FeedbackEmailChanged(value) => {
                self.feedback.email = value;
                Task::none()
            }
            Message::FeedbackNameChanged(value) => {
                self.feedback.name = value;
                Task::none()
            }
            Message::FeedbackSubmitted => {
                let entry = FeedbackEntry::new(
                    self.feedback.feedback.clone(),
                    self.feedback.email.clone(),
                    self.feedback.name.clone(),
                );
                self.feedback.sending = true;
                let client = self.client.clone();
                Task::perform(
                    async move {
                        client
                            .submit_feedback(&entry)
                            .await
                            .map_err(|error| error.to_string())
                    },
                    Message::FeedbackFinished,
                )
            }
            Message::FeedbackFinished(result) => {
                self.feedback.sending = false;
                match result {
                    Ok(()) => {
                        self.feedback = FeedbackForm::default();
                    }
                    Err(reason) => {
                        tracing::error!(%reason, "feedback submission failed");
                        self.feedback.error = Some(FEEDBACK_FAILURE_MESSAGE.to_string());
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

fn validate(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            probe::validate_candidate(&path)
                .await
                .map_err(|error| error.to_string())
        },
        Message::CandidateValidated,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_config(Config::default())
    }

    fn accepted_upload() -> UploadCandidate {
        UploadCandidate {
            path: PathBuf::from("clip.mp4"),
            duration_secs: 30.0,
        }
    }

    fn outcome(text: &str) -> SubmissionOutcome {
        SubmissionOutcome {
            output_video: None,
            text_output: text.to_string(),
        }
    }

    #[test]
    fn submit_without_video_shows_the_upload_message() {
        let mut app = app();
        let _ = app.update(Message::SubmitPressed);
        assert_eq!(app.text_output, "Please upload a video first.");
        assert!(!app.loading);
        assert_eq!(app.output_video, None);
    }

    #[test]
    fn question_answering_without_prompt_shows_the_prompt_message() {
        let mut app = app();
        app.selected_task = AnalysisTask::QuestionAnswering;
        app.upload = Some(accepted_upload());
        let _ = app.update(Message::SubmitPressed);
        assert_eq!(
            app.text_output,
            "Please provide a prompt for Visual Question Answering."
        );
        assert!(!app.loading);
    }

    #[test]
    fn valid_submission_enters_the_loading_state() {
        let mut app = app();
        app.upload = Some(accepted_upload());
        let _ = app.update(Message::SubmitPressed);
        assert!(app.loading);
        assert_eq!(app.text_output, "Processing the video...");
        assert_eq!(app.output_video, None);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut app = app();
        app.upload = Some(accepted_upload());
        let _ = app.update(Message::SubmitPressed);
        let _ = app.update(Message::SubmitPressed);

        let _ = app.update(Message::ProcessFinished {
            seq: 1,
            result: Ok(outcome("stale")),
        });
        assert!(app.loading, "stale response must not clear the newer run");
        assert_eq!(app.text_output, "Processing the video...");

        let _ = app.update(Message::ProcessFinished {
            seq: 2,
            result: Ok(outcome("fresh")),
        });
        assert!(!app.loading);
        assert_eq!(app.text_output, "fresh");
    }

    #[test]
    fn network_failure_shows_the_generic_message() {
        let mut app = app();
        app.upload = Some(accepted_upload());
        let _ = app.update(Message::SubmitPressed);
        let _ = app.update(Message::ProcessFinished {
            seq: 1,
            result: Err("connection refused".to_string()),
        });
        assert_eq!(
            app.text_output,
            "An error occurred while processing the video."
        );
        assert!(!app.loading);
        assert_eq!(app.output_video, None);
    }

    #[test]
    fn rejected_candidate_clears_the_upload() {
        let mut app = app();
        app.upload = Some(accepted_upload());
        let _ = app.update(Message::CandidateValidated(Ok(Validation::Rejected {
            duration_secs: 400.0,
        })));
        assert_eq!(app.upload, None);
        assert_eq!(
            app.upload_error.as_deref(),
            Some("The video exceeds the maximum allowed duration of 5 minutes.")
        );
    }

    #[test]
    fn accepted_candidate_replaces_the_upload_and_error() {
        let mut app = app();
        app.upload_error = Some("old error".to_string());
        let candidate = accepted_upload();
        let _ = app.update(Message::CandidateValidated(Ok(Validation::Accepted(
            candidate.clone(),
        ))));
        assert_eq!(app.upload, Some(candidate));
        assert_eq!(app.upload_error, None);
    }

    #[test]
    fn info_modal_is_independent_of_task_selection() {
        let mut app = app();
        let _ = app.update(Message::InfoOpened(AnalysisTask::QuestionAnswering));
        let _ = app.update(Message::TaskSelected(AnalysisTask::ObjectDetection));
        assert_eq!(app.info_modal, Some(AnalysisTask::QuestionAnswering));
        assert_eq!(app.selected_task, AnalysisTask::ObjectDetection);

        let _ = app.update(Message::InfoClosed);
        assert_eq!(app.info_modal, None);
        assert_eq!(app.selected_task, AnalysisTask::ObjectDetection);
    }

    #[test]
    fn feedback_failure_keeps_the_modal_and_the_entered_text() {
        let mut app = app();
        let _ = app.update(Message::FeedbackOpened);
        let _ = app.update(Message::FeedbackBodyChanged("Loved it".to_string()));
        let _ = app.update(Message::FeedbackFinished(Err("500".to_string())));
        assert!(app.feedback.open);
        assert_eq!(app.feedback.feedback, "Loved it");
        assert_eq!(
            app.feedback.error.as_deref(),
            Some("Failed to submit feedback. Please try again.")
        );
    }

    #[test]
    fn feedback_success_clears_the_form_and_closes_the_modal() {
        let mut app = app();
        let _ = app.update(Message::FeedbackOpened);
        let _ = app.update(Message::FeedbackBodyChanged("Loved it".to_string()));
        let _ = app.update(Message::FeedbackEmailChanged("a@b.c".to_string()));
        let _ = app.update(Message::FeedbackFinished(Ok(())));
        assert!(!app.feedback.open);
        assert!(app.feedback.feedback.is_empty());
        assert!(app.feedback.email.is_empty());
        assert_eq!(app.feedback.error, None);
    }
}
