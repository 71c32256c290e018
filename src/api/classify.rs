//! Failure classification: raw transport/HTTP failures → `ApiError`.
//!
//! `classify` is a total function: it never fails, and a malformed input
//! degrades to `ErrorKind::Unknown` rather than propagating. Every call logs
//! the raw failure plus the caller-supplied context bag before returning.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::api::messages::MessageTable;
use crate::error::{ApiError, ErrorKind};

/// Transport-level error codes that indicate the request never completed.
const NETWORK_CODES: [&str; 4] = ["ERR_NETWORK", "ECONNREFUSED", "ECONNRESET", "ENOTFOUND"];
const TIMEOUT_CODES: [&str; 2] = ["ETIMEDOUT", "ECONNABORTED"];

/// The raw failure shape handed to the classifier.
///
/// Mirrors what the HTTP client can actually observe: an optional response
/// status and body, an optional transport error code and message, and whether
/// a request went out at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFailure {
    pub status: Option<u16>,
    /// Parsed response body, when a response arrived. May carry a server
    /// `message` string and a field-keyed `errors` map.
    pub body: Option<Value>,
    pub code: Option<String>,
    pub message: Option<String>,
    /// A request was sent, whether or not a response came back.
    pub request_sent: bool,
}

impl RawFailure {
    /// A failure that carried an HTTP response.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            body,
            code: None,
            message: None,
            request_sent: true,
        }
    }

    /// A failure below the HTTP layer (connect, timeout, DNS, TLS).
    pub fn from_transport(error: &reqwest::Error) -> Self {
        let code = if error.is_timeout() {
            Some("ETIMEDOUT".to_string())
        } else if error.is_connect() {
            Some("ERR_NETWORK".to_string())
        } else {
            None
        };
        Self {
            status: error.status().map(|s| s.as_u16()),
            body: None,
            code,
            message: Some(error.to_string()),
            request_sent: true,
        }
    }
}

/// Classify a raw failure into the closed taxonomy.
///
/// Detection order resolves overlap by specificity: explicit transport codes
/// and message text first (so a timeout never degrades to a bare network
/// failure), then the response status, then the request-sent-no-response
/// network fallback.
pub fn classify(
    raw: &RawFailure,
    context: BTreeMap<String, String>,
    messages: &MessageTable,
) -> ApiError {
    let kind = detect_kind(raw);

    let message = server_message(raw)
        .unwrap_or_else(|| messages.message(kind).to_string());

    let validation_errors = if kind == ErrorKind::Validation {
        extract_validation_errors(raw)
    } else {
        None
    };

    let error = ApiError {
        kind,
        message,
        http_status: raw.status,
        context,
        validation_errors,
    };
    log_failure(raw, &error);
    error
}

/// Retryability predicate over a classified error, per the taxonomy table.
pub fn is_retryable(error: &ApiError) -> bool {
    error.is_retryable()
}

fn detect_kind(raw: &RawFailure) -> ErrorKind {
    if let Some(code) = raw.code.as_deref() {
        if NETWORK_CODES.contains(&code) {
            return ErrorKind::Network;
        }
        if TIMEOUT_CODES.contains(&code) {
            return ErrorKind::Timeout;
        }
    }

    if let Some(message) = raw.message.as_deref() {
        if message.contains("Network Error") {
            return ErrorKind::Network;
        }
        if message.to_ascii_lowercase().contains("timeout") {
            return ErrorKind::Timeout;
        }
    }

    match raw.status {
        Some(400) | Some(422) => ErrorKind::Validation,
        Some(401) => ErrorKind::Authentication,
        Some(403) => ErrorKind::Forbidden,
        Some(404) => ErrorKind::NotFound,
        Some(500) | Some(502) | Some(503) | Some(504) => ErrorKind::ServerError,
        Some(_) => ErrorKind::Unknown,
        None if raw.request_sent => ErrorKind::Network,
        None => ErrorKind::Unknown,
    }
}

/// Server-provided message, when the response body carries one.
fn server_message(raw: &RawFailure) -> Option<String> {
    raw.body
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Field-keyed validation errors, preserved verbatim. A single string value
/// is kept as a one-element list.
fn extract_validation_errors(raw: &RawFailure) -> Option<BTreeMap<String, Vec<String>>> {
    let errors = raw.body.as_ref()?.get("errors")?.as_object()?;

    let mut map = BTreeMap::new();
    for (field, value) in errors {
        let messages: Vec<String> = match value {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Value::String(message) => vec![message.clone()],
            _ => continue,
        };
        map.insert(field.clone(), messages);
    }

    if map.is_empty() { None } else { Some(map) }
}

fn log_failure(raw: &RawFailure, error: &ApiError) {
    match error.kind {
        ErrorKind::Validation
        | ErrorKind::Authentication
        | ErrorKind::Forbidden
        | ErrorKind::NotFound => {
            log::warn!(
                "api failure kind={} status={:?} code={:?} raw_message={:?} context={:?}",
                error.kind,
                raw.status,
                raw.code,
                raw.message,
                error.context
            );
        }
        ErrorKind::Network | ErrorKind::Timeout | ErrorKind::ServerError | ErrorKind::Unknown => {
            log::error!(
                "api failure kind={} status={:?} code={:?} raw_message={:?} context={:?}",
                error.kind,
                raw.status,
                raw.code,
                raw.message,
                error.context
            );
        }
    }
}
