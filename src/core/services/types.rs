use crate::api::models::DonationStatus;
use crate::api::normalize::PageRequest;
use crate::error::{ApiError, ErrorKind, Notice, Severity};
use chrono::NaiveDate;

/// Service layer error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {resource_type} with ID {id}")]
    NotFound { resource_type: String, id: u64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// The single user-facing `{message, severity}` pair for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            ServiceError::Api(api_error) => api_error.notice(),
            ServiceError::Validation { field, message } => Notice {
                message: format!("{}: {}", field, message),
                severity: Severity::Warning,
            },
            ServiceError::NotFound { resource_type, id } => Notice {
                message: format!("{} {} not found", resource_type, id),
                severity: Severity::Warning,
            },
            ServiceError::Config(message) => Notice {
                message: message.clone(),
                severity: Severity::Error,
            },
        }
    }
}

/// Map a classified `NotFound` onto a typed service error for id-addressed
/// lookups; everything else passes through.
pub fn not_found_as(resource_type: &str, id: u64) -> impl FnOnce(ApiError) -> ServiceError + '_ {
    move |error| match error.kind {
        ErrorKind::NotFound => ServiceError::NotFound {
            resource_type: resource_type.to_string(),
            id,
        },
        _ => ServiceError::Api(error),
    }
}

/// Common parameters for listing resources
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Search term to filter results
    pub search: Option<String>,
    /// Resource-specific filters, passed through as query parameters
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// Query parameters minus the page/size pair, which the client appends
    /// from the `PageRequest`.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        query.extend(self.filters.iter().cloned());
        query
    }

    /// Page size must be positive when given; zero would make the backend
    /// return everything.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(per_page) = self.per_page
            && per_page == 0
        {
            return Err(ServiceError::Validation {
                field: "per_page".to_string(),
                message: "Page size must be greater than 0".to_string(),
            });
        }
        if let Some(page) = self.page
            && page == 0
        {
            return Err(ServiceError::Validation {
                field: "page".to_string(),
                message: "Page number is 1-based".to_string(),
            });
        }
        Ok(())
    }
}

/// Filters for the donations/financial report.
#[derive(Debug, Clone, Default)]
pub struct ReportFilters {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub campaign_id: Option<u64>,
    pub status: Option<DonationStatus>,
}

impl ReportFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(from) = self.from {
            query.push(("from".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            query.push(("to".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        if let Some(campaign_id) = self.campaign_id {
            query.push(("campaign_id".to_string(), campaign_id.to_string()));
        }
        if let Some(status) = self.status {
            let status = serde_json::to_value(status)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            query.push(("status".to_string(), status));
        }
        query
    }
}
