/// One of the four analysis modes the backend supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisTask {
    #[default]
    Ocr,
    ObjectDetection,
    TemporalLocalization,
    QuestionAnswering,
}

impl AnalysisTask {
    /// Every registered task, in display order.
    pub fn all() -> [AnalysisTask; 4] {
        [
            AnalysisTask::Ocr,
            AnalysisTask::ObjectDetection,
            AnalysisTask::TemporalLocalization,
            AnalysisTask::QuestionAnswering,
        ]
    }

    /// Wire identifier sent in the `task` form field.
    pub fn id(&self) -> &'static str {
        match self {
            AnalysisTask::Ocr => "OCR",
            AnalysisTask::ObjectDetection => "Text-To-Object Detection",
            AnalysisTask::TemporalLocalization => "Temporal-Localization",
            AnalysisTask::QuestionAnswering => "Visual Question Answering",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalysisTask::Ocr => "Extract Text",
            AnalysisTask::ObjectDetection => "Detect Objects",
            AnalysisTask::TemporalLocalization => "Locate Actions",
            AnalysisTask::QuestionAnswering => "Ask About Video",
        }
    }

    /// Long-form description shown in the info modal.
    pub fn info(&self) -> &'static str {
        match self {
            AnalysisTask::Ocr => {
                "Upload a video, and all visible text in the video will be automatically captured. \
                 Our AI not only extracts the text but also highlights it in the video, giving you \
                 a clear visual reference. The output includes the video with highlighted text and \
                 a neatly formatted text summary."
            }
            AnalysisTask::ObjectDetection => {
                "Upload a video and enter a single word, like 'bag' or 'person', to identify an \
                 object. The AI will highlight the object in the video whenever it appears and \
                 provide additional details, such as how many frames and seconds the object was \
                 visible and the exact time intervals."
            }
            AnalysisTask::TemporalLocalization => {
                "Upload a video and enter an object, like 'bag' or 'person'. Our AI will find \
                 where the object appears in the video, create a new video with only those parts, \
                 and provide a summary with the exact times the object was visible."
            }
            AnalysisTask::QuestionAnswering => {
                "Upload a video and ask any question about its content, like 'What is the person \
                 doing?' or 'What objects are in the room?' Our AI will analyze the video and \
                 provide an answer."
            }
        }
    }

    /// Hint text for the prompt field, per task.
    pub fn prompt_placeholder(&self) -> &'static str {
        match self {
            AnalysisTask::Ocr => "Extract all text from the video, no further input required.",
            AnalysisTask::ObjectDetection => "Specify the object to detect. Example: bag",
            AnalysisTask::TemporalLocalization => {
                "Specify the object or action to localize. Example: cars"
            }
            AnalysisTask::QuestionAnswering => {
                "Provide a question about the video. Example: What is the person holding?"
            }
        }
    }

    /// Whether submitting without a prompt is a local validation error.
    pub fn requires_prompt(&self) -> bool {
        matches!(self, AnalysisTask::QuestionAnswering)
    }

    /// Whether the prompt field is usable at all. OCR takes no input.
    pub fn accepts_prompt(&self) -> bool {
        !matches!(self, AnalysisTask::Ocr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_question_answering_requires_a_prompt() {
        for task in AnalysisTask::all() {
            assert_eq!(
                task.requires_prompt(),
                task == AnalysisTask::QuestionAnswering
            );
        }
    }

    #[test]
    fn ocr_does_not_accept_a_prompt() {
        assert!(!AnalysisTask::Ocr.accepts_prompt());
        assert!(AnalysisTask::ObjectDetection.accepts_prompt());
        assert!(AnalysisTask::TemporalLocalization.accepts_prompt());
        assert!(AnalysisTask::QuestionAnswering.accepts_prompt());
    }

    #[test]
    fn wire_ids_match_the_backend_contract() {
        let ids: Vec<&str> = AnalysisTask::all().iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            [
                "OCR",
                "Text-To-Object Detection",
                "Temporal-Localization",
                "Visual Question Answering",
            ]
        );
    }

    #[test]
    fn default_task_is_ocr() {
        assert_eq!(AnalysisTask::default(), AnalysisTask::Ocr);
    }
}
