//! Utils module - Shared utilities and helpers

/// Input validation and sanitization utilities
pub mod validation;

/// Retry execution for retryable API failures
pub mod retry;
