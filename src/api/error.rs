//! The single failure every API operation reports.
//!
//! ERROR HANDLING
//! ==============
//! Callers show the message to the user, so `Display` is the message and
//! nothing else. A server-supplied message wins. Anything unreadable (network
//! failure, non-JSON error body, undecodable success body) collapses to the
//! operation's fixed default rather than surfacing a secondary error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    RequestFailed { message: String },
}

impl ApiError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed { message } => message,
        }
    }
}

/// Fixed identity of one operation for logging and default messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operation {
    pub(crate) name: &'static str,
    default_message: &'static str,
    append_status: bool,
}

impl Operation {
    pub(crate) const fn new(name: &'static str, default_message: &'static str) -> Self {
        Self { name, default_message, append_status: false }
    }

    /// Default message rendered as `"{prefix}: {status}"` when a status is known.
    pub(crate) const fn with_status(name: &'static str, prefix: &'static str) -> Self {
        Self { name, default_message: prefix, append_status: true }
    }

    pub(crate) fn failure(&self, status: Option<u16>) -> ApiError {
        let message = match status {
            Some(status) if self.append_status => format!("{}: {status}", self.default_message),
            _ => self.default_message.to_owned(),
        };
        ApiError::RequestFailed { message }
    }

    /// Failure for a non-2xx response.
    pub(crate) fn rejected(&self, status: u16, body: &str) -> ApiError {
        match server_message(body) {
            Some(message) => ApiError::RequestFailed { message },
            None => self.failure(Some(status)),
        }
    }
}

/// Non-empty `error` (or else `message`) string field of a JSON error body.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .into_iter()
        .find_map(|field| value.get(field)?.as_str().filter(|s| !s.is_empty()))
        .map(str::to_owned)
}
