use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::core::services::types::ServiceError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),
}

/// Closed taxonomy of API failure kinds.
///
/// Every failure surfaced by this crate carries exactly one of these tags, so
/// consumers never re-derive HTTP-status logic at call sites (redirect to
/// login on `Authentication`, inline field errors on `Validation`, a generic
/// toast otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Network,
    Timeout,
    Validation,
    Authentication,
    Forbidden,
    NotFound,
    ServerError,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Validation => "validation",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ServerError => "server_error",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical application error produced by the classifier.
///
/// A pure value object: constructed once per failure, never mutated, never
/// shared across requests. `message` is user-presentable and localized;
/// `context` is a diagnostic bag for logs only.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub http_status: Option<u16>,
    pub context: BTreeMap<String, String>,
    /// Field name → ordered messages, present only for `ErrorKind::Validation`.
    pub validation_errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    /// Whether a caller may sensibly offer a "retry" action for this failure.
    ///
    /// Transient transport and server-side failures retry; anything the
    /// caller must fix first (bad input, missing auth, missing resource)
    /// does not. An `Unknown` without a status is treated as transient.
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ErrorKind::Network | ErrorKind::Timeout | ErrorKind::ServerError => true,
            ErrorKind::Unknown => self.http_status.is_none_or(|status| status >= 500),
            ErrorKind::Validation
            | ErrorKind::Authentication
            | ErrorKind::Forbidden
            | ErrorKind::NotFound => false,
        }
    }

    /// The user-facing `{message, severity}` pair for the notification surface.
    pub fn notice(&self) -> Notice {
        let severity = match self.kind {
            ErrorKind::Validation => Severity::Warning,
            _ => Severity::Error,
        };
        Notice {
            message: self.message.clone(),
            severity,
        }
    }
}

/// Severity contract of the consumer's transient-notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One user-visible notification, derived exactly once per failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String, hint: String },
    #[error("Configuration parse error at {path}: {message}")]
    Parse { path: String, message: String },
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Configuration directory not found")]
    DirNotFound,
}
