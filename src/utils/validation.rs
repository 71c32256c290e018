//! Input validation and sanitization utilities
//!
//! Services validate their inputs before any I/O; these helpers keep the
//! messages uniform across resources.

use crate::core::services::types::ServiceError;

fn invalid(field: &str, message: impl Into<String>) -> ServiceError {
    ServiceError::Validation {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate that a base URL is properly formatted
pub fn validate_base_url(url: &str) -> Result<(), ServiceError> {
    if url.is_empty() {
        return Err(invalid("base_url", "URL cannot be empty"));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(invalid(
            "base_url",
            format!("Invalid URL '{}': URL must start with http:// or https://", url),
        ));
    }
    Ok(())
}

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(invalid(field, format!("{} cannot be empty", field)));
    }
    Ok(())
}

pub fn require_positive_id(field: &str, id: u64) -> Result<(), ServiceError> {
    if id == 0 {
        return Err(invalid(field, "ID must be greater than 0"));
    }
    Ok(())
}

pub fn require_positive_amount(field: &str, amount: f64) -> Result<(), ServiceError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(invalid(field, "Amount must be greater than 0"));
    }
    Ok(())
}

/// Shallow shape check; the backend performs the authoritative validation.
pub fn validate_email(field: &str, email: &str) -> Result<(), ServiceError> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });
    if !valid {
        return Err(invalid(field, format!("'{}' is not a valid email address", email)));
    }
    Ok(())
}
