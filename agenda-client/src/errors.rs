use thiserror::Error;

/// Errors emitted by [`crate::SettingsClient`] requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status_code}: {message}")]
    Remote {
        status_code: u16,
        message: String,
        url: String,
    },
    /// Transport failure, no response was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// A success response carried a body that is not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured server URL or a derived resource URL is invalid.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A header name or value supplied by the host is not valid HTTP.
    #[error("invalid header: {message}")]
    InvalidHeader { message: String },
}

impl ClientError {
    /// Return the HTTP status for remote failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Errors emitted while parsing a hashtag format template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashtagError {
    #[error("hashtag format has no `{{{{` date span")]
    MissingOpen,
    #[error("hashtag format date span is not closed with `}}}}`")]
    Unclosed,
    #[error("hashtag format date span is empty")]
    EmptyToken,
    #[error("hashtag format has text after the date span: {trailing:?}")]
    TrailingText { trailing: String },
    #[error("hashtag format contains more than one date span")]
    MultipleSpans,
}

/// Errors emitted while parsing weekday values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekdayError {
    #[error("Invalid weekday. Must be between 0-6")]
    InvalidNumber,
    #[error("Invalid weekday. Must be between 0-6 or Sun-Sat")]
    Invalid,
}

/// Errors emitted by meeting date calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("missing weekdays to calculate date")]
    EmptySchedule,
}
