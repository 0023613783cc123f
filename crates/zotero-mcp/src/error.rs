//! Error types for the Zotero MCP helpers.
//!
//! Uses `thiserror` for structured error handling; arbitrary errors from
//! wrapped calls flow through the transparent [`Error::Other`] variant.

use std::time::Duration;

/// Errors from helper execution.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The deadline elapsed before the wrapped function finished.
    #[error("function '{function}' timed out after {deadline:?}")]
    Timeout {
        /// Name of the wrapped function.
        function: String,
        /// Configured wall-clock deadline.
        deadline: Duration,
    },

    /// The background worker was lost before producing a result.
    ///
    /// Only reachable when the runtime shuts down underneath a pending
    /// call; worker panics are resumed on the caller thread instead.
    #[error("worker for '{function}' terminated without a result")]
    WorkerLost {
        /// Name of the wrapped function.
        function: String,
    },

    /// Any other error raised by a wrapped function, passed through unchanged.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a timeout error for the named function.
    #[must_use]
    pub fn timeout(function: impl Into<String>, deadline: Duration) -> Self {
        Self::Timeout { function: function.into(), deadline }
    }

    /// Create a lost-worker error for the named function.
    #[must_use]
    pub fn worker_lost(function: impl Into<String>) -> Self {
        Self::WorkerLost { function: function.into() }
    }

    /// Returns true if this error is an elapsed deadline.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Get the configured deadline if this is a timeout error.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        match self {
            Self::Timeout { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }
}

/// Result type alias for helper operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_names_function_and_deadline() {
        let err = Error::timeout("fetch_items", Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("fetch_items"));
        assert!(msg.contains("30s"));
    }

    #[test]
    fn test_is_timeout() {
        assert!(Error::timeout("f", Duration::from_secs(1)).is_timeout());
        assert!(!Error::worker_lost("f").is_timeout());
        assert!(!Error::Other(anyhow::anyhow!("boom")).is_timeout());
    }

    #[test]
    fn test_deadline_accessor() {
        let err = Error::timeout("f", Duration::from_secs(5));
        assert_eq!(err.deadline(), Some(Duration::from_secs(5)));
        assert_eq!(Error::worker_lost("f").deadline(), None);
    }

    #[test]
    fn test_other_passes_message_through() {
        let err = Error::from(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
    }
}
