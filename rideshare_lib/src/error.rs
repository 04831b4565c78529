use thiserror::Error;

/// Problems caught in the browser before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please select a rating.")]
    MissingRating,
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("{0} is not a valid number.")]
    InvalidNumber(&'static str),
    #[error("{0} must be greater than zero.")]
    NotPositive(&'static str),
    #[error("Please enter a valid date and time.")]
    InvalidDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backend answered 401. The session has been cleared and the user
    /// sent to the login page.
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    /// A guard failed and already navigated away.
    #[error("Redirected")]
    Redirected,
    /// Non-2xx answer, carrying the response body when there was one.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Whether the error already moved the user to another page, in which
    /// case there is nothing left to show.
    pub fn is_redirect(&self) -> bool {
        matches!(self, ClientError::SessionExpired | ClientError::Redirected)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
