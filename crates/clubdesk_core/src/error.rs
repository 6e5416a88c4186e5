//! Typed error taxonomy shared by every core API.
//!
//! # Responsibility
//! - Classify failures into `Configuration`, `Validation` and `Storage`.
//! - Keep the low-level cause attached for diagnostics.
//!
//! # Invariants
//! - "Not found" and "zero rows affected" are never errors.
//! - Reads never produce `ErrorKind::Validation`.
//! - Core never retries; callers branch on `CoreError::kind()`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Boxed low-level failure retained for diagnostics.
pub type ErrorCause = Box<dyn Error + Send + Sync + 'static>;

pub type CoreResult<T> = Result<T, CoreError>;

/// Closed set of failure classes callers are expected to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration source missing, unreadable or malformed.
    Configuration,
    /// Entity failed self-validation right before a write.
    Validation,
    /// Store rejected a statement or the connection failed.
    Storage,
}

impl ErrorKind {
    /// Stable lowercase label used in log events and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Storage => "storage",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged core error: `(kind, message, cause)`.
#[derive(Debug)]
pub struct CoreError {
    kind: ErrorKind,
    message: String,
    cause: Option<ErrorCause>,
}

impl CoreError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        kind: ErrorKind,
        message: impl Into<String>,
        cause: impl Into<ErrorCause>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped low-level failure, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == ErrorKind::Configuration
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_storage(&self) -> bool {
        self.kind == ErrorKind::Storage
    }
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} error: {}: {cause}", self.kind, self.message),
            None => write!(f, "{} error: {}", self.kind, self.message),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Translates low-level results into the core taxonomy.
///
/// Used at every storage boundary so that raw driver errors never reach
/// callers unclassified.
pub trait ResultExt<T> {
    fn storage_context(self, message: impl FnOnce() -> String) -> CoreResult<T>;
    fn configuration_context(self, message: impl FnOnce() -> String) -> CoreResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ErrorCause>,
{
    fn storage_context(self, message: impl FnOnce() -> String) -> CoreResult<T> {
        self.map_err(|err| CoreError::with_cause(ErrorKind::Storage, message(), err))
    }

    fn configuration_context(self, message: impl FnOnce() -> String) -> CoreResult<T> {
        self.map_err(|err| CoreError::with_cause(ErrorKind::Configuration, message(), err))
    }
}
