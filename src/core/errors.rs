//! WBG-prefixed error types with structured error codes.

#![allow(missing_docs)]

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, WbgError>;

/// Coarse classification of a [`WbgError`], inspectable without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Argument,
    Config,
    Execution,
    Parse,
    Io,
    Runtime,
}

/// Top-level error type for watchbygraph.
#[derive(Debug, Error)]
pub enum WbgError {
    #[error("[WBG-1001] invalid arguments: {details}")]
    Argument { details: String },

    #[error("[WBG-1002] invalid configuration in {var}: {details}")]
    Config { var: &'static str, details: String },

    #[error("[WBG-2001] failed to run: {command}: {details}")]
    Execution { command: String, details: String },

    #[error("[WBG-2002] failed to parse: {input:?}: {details}")]
    Parse { input: String, details: String },

    #[error("[WBG-3001] IO failure in {component}: {source}")]
    Io {
        component: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("[WBG-3003] channel closed in component {component}")]
    ChannelClosed { component: &'static str },
}

impl WbgError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Argument { .. } => "WBG-1001",
            Self::Config { .. } => "WBG-1002",
            Self::Execution { .. } => "WBG-2001",
            Self::Parse { .. } => "WBG-2002",
            Self::Io { .. } => "WBG-3001",
            Self::ChannelClosed { .. } => "WBG-3003",
        }
    }

    /// Kind tag for callers that branch on the failure class.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument { .. } => ErrorKind::Argument,
            Self::Config { .. } => ErrorKind::Config,
            Self::Execution { .. } => ErrorKind::Execution,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Io { .. } => ErrorKind::Io,
            Self::ChannelClosed { .. } => ErrorKind::Runtime,
        }
    }

    /// The command text or offending input this error was raised for, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Execution { command, .. } => Some(command),
            Self::Parse { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Convenience constructor for IO errors attributed to a component.
    #[must_use]
    pub fn io(component: &'static str, source: std::io::Error) -> Self {
        Self::Io { component, source }
    }
}

impl From<serde_json::Error> for WbgError {
    fn from(value: serde_json::Error) -> Self {
        Self::Io {
            component: "serde_json",
            source: value.into(),
        }
    }
}
