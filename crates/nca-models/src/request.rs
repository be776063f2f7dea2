//! Video processing request.

use serde::{Deserialize, Serialize};

/// Prompt text used when the caller omits `prompt_text`.
pub const DEFAULT_PROMPT_TEXT: &str = "AI Bedtime Story";

/// Output format used when the caller omits `output_format`.
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp4";

/// Parameters for a video processing call.
///
/// No validation is applied to the URL or the output format; both are
/// carried through as given. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRequest {
    /// Source video location (e.g. an object storage URL)
    #[serde(default)]
    pub video_url: Option<String>,
    /// Text to overlay on the video
    #[serde(default = "default_prompt_text")]
    pub prompt_text: String,
    /// Requested output container
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

fn default_prompt_text() -> String {
    DEFAULT_PROMPT_TEXT.to_string()
}

fn default_output_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_string()
}

impl Default for ProcessingRequest {
    fn default() -> Self {
        Self {
            video_url: None,
            prompt_text: default_prompt_text(),
            output_format: default_output_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let req: ProcessingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, ProcessingRequest::default());
        assert_eq!(req.prompt_text, "AI Bedtime Story");
        assert_eq!(req.output_format, "mp4");
        assert!(req.video_url.is_none());
    }

    #[test]
    fn test_null_video_url() {
        let req: ProcessingRequest =
            serde_json::from_str(r#"{"video_url": null, "prompt_text": "hi"}"#).unwrap();
        assert!(req.video_url.is_none());
        assert_eq!(req.prompt_text, "hi");
    }

    #[test]
    fn test_url_and_format_are_not_validated() {
        let req: ProcessingRequest = serde_json::from_str(
            r#"{"video_url": "not a url", "output_format": "gif", "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(req.video_url.as_deref(), Some("not a url"));
        assert_eq!(req.output_format, "gif");
    }

    #[test]
    fn test_null_prompt_text_is_rejected() {
        let result = serde_json::from_str::<ProcessingRequest>(r#"{"prompt_text": null}"#);
        assert!(result.is_err());
    }
}
