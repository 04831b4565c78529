use crate::error::ClientError;

/// How long an inline alert stays up before it dismisses itself.
pub const ALERT_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    pub fn css_class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Danger => "alert-danger",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Danger, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, message)
    }

    /// The alert to show for a failed action, or `None` when the failure
    /// already redirected. Validation problems and backend messages are
    /// shown as-is; transport and decoding failures get `fallback`.
    pub fn from_error(err: &ClientError, fallback: &str) -> Option<Self> {
        match err {
            ClientError::SessionExpired | ClientError::Redirected => None,
            ClientError::Validation(_) | ClientError::Rejected { .. } => Some(Alert::danger(err.to_string())),
            ClientError::Transport(_) | ClientError::Encode(_) | ClientError::Decode(_) => {
                Some(Alert::danger(fallback))
            }
        }
    }
}
