// Typed errors for the check pipeline.
//
// Consumers (CLI, web handlers) branch on the variant instead of parsing
// message text. The Display strings are the user-facing messages.

use std::fmt;

use thiserror::Error;

/// Which kind of YouTube resource a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Channel,
    Video,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Channel => write!(f, "Channel"),
            Resource::Video => write!(f, "Video"),
        }
    }
}

/// Everything that can abort a monetization check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The input matched neither a channel nor a video URL pattern.
    #[error("Invalid YouTube URL. Please enter a valid channel or video URL.")]
    InvalidInput,

    /// The fallback chain ran out without finding the resource.
    #[error("{0} not found")]
    NotFound(Resource),

    /// YouTube answered with a non-2xx status.
    #[error("API error: {status}")]
    UpstreamFailure { status: u16 },

    /// The request never produced a status (network failure) or the body
    /// could not be decoded.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CheckError::UpstreamFailure {
                status: status.as_u16(),
            },
            None => CheckError::Transport(err.to_string()),
        }
    }
}
