//! Error types.
//!
//! [YoutubeError] covers everything that can go wrong while talking to the YouTube Data API.
//! [ConfigError] covers reading the config file and installing logging.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [YoutubeClient](crate::YoutubeClient).
/// None of these are retried, they always reach the caller.
#[derive(Error, Debug)]
pub enum YoutubeError {
    /// No API key was configured. Raised before any request is sent.
    #[error("YOUTUBE_API_KEY env variable or `youtube.api_key` config value is required.")]
    MissingCredential,

    /// The API answered without any matching item.
    #[error("Unable to find video {video_id}.")]
    VideoNotFound { video_id: String },

    /// The first item has no `statistics.viewCount`.
    #[error("Video {video_id} has no view count.")]
    MissingViewCount { video_id: String },

    /// `viewCount` could not be read as an unsigned integer.
    #[error("Video {video_id} has a malformed view count: '{raw}'.")]
    InvalidViewCount { video_id: String, raw: String },

    /// The API answered with a non-success status.
    #[error("YouTube API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The response body is not shaped like a `videos.list` response.
    #[error("Unexpected YouTube API response. {0}")]
    Parse(#[from] serde_path_to_error::Error<serde_json::Error>),

    /// Transport level failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl YoutubeError {
    /// Stable, machine readable identifier of this error.
    pub fn code(&self) -> &'static str {
        match self {
            YoutubeError::MissingCredential => "YOUTUBE_MISSING_KEY",
            YoutubeError::VideoNotFound { .. } => "YOUTUBE_MISSING_VIDEO",
            YoutubeError::MissingViewCount { .. } => "YOUTUBE_MISSING_VIEW_COUNT",
            YoutubeError::InvalidViewCount { .. } => "YOUTUBE_INVALID_VIEW_COUNT",
            YoutubeError::Api { .. } => "YOUTUBE_API_ERROR",
            YoutubeError::Parse(_) => "YOUTUBE_BAD_RESPONSE",
            YoutubeError::Http(_) => "YOUTUBE_HTTP_ERROR",
        }
    }
}

/// Errors from reading the config file or setting up logging.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing config file. {action_msg}")]
    MissingConfig { action_msg: String },
    #[error("Invalid config file. {reason}")]
    InvalidConfig { reason: String },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Failed to install tracing subscriber. {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}
