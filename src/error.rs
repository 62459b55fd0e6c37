//! Error taxonomy for the generation pipeline.
//!
//! Only [`ConfigError`] aborts a run, and it does so before any artifact is
//! built. Content provider failures are recovered locally via fallback
//! content; structural problems in generated artifacts are data (defects),
//! not errors, and travel through the report instead.

use std::time::Duration;

use thiserror::Error;

/// Fatal error: the top-level generation request is malformed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The request did not parse as JSON at all.
    #[error("failed to parse feature selection: {0}")]
    Parse(#[from] serde_json::Error),

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name cannot be turned into a filesystem-safe slug.
    #[error("project name {0:?} has no filesystem-safe characters")]
    UnusableProjectName(String),

    /// The requested framework is not supported.
    #[error("unknown framework {0:?} (expected one of: react, vue, html)")]
    UnknownFramework(String),
}

/// Non-fatal content provider failure, recovered via builtin fallback copy.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The provider returned an error.
    #[error("content provider failed: {0}")]
    Provider(String),

    /// The provider did not answer within the timeout budget.
    #[error("content provider timed out after {0:?}")]
    Timeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_name_the_problem() {
        let err = ConfigError::UnknownFramework("svelte".to_string());
        assert!(err.to_string().contains("svelte"));
        assert!(err.to_string().contains("react"));
    }

    #[test]
    fn content_error_reports_timeout_budget() {
        let err = ContentError::Timeout(Duration::from_secs(10));
        assert!(err.to_string().contains("10s"));
    }
}
