use crate::api::{
    client::ApiClient,
    models::{ApplicationStatus, StudentApplication},
    normalize::Paginated,
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::require_positive_id;
use std::sync::Arc;

/// Student-registration applications: list, inspect, approve or reject.
pub struct ApplicationService {
    client: Arc<ApiClient>,
}

impl ApplicationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: ListParams,
    ) -> Result<Paginated<StudentApplication>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page("/applications", &params.to_query(), &params.page_request())
            .await?;
        Ok(page)
    }

    pub async fn list_pending(
        &self,
        params: ListParams,
    ) -> Result<Paginated<StudentApplication>, ServiceError> {
        self.list(params.with_filter("status", "pending".to_string()))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<StudentApplication, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .get_item(&format!("/applications/{}", id))
            .await
            .map_err(not_found_as("Application", id))
    }

    pub async fn approve(
        &self,
        id: u64,
        notes: Option<String>,
    ) -> Result<StudentApplication, ServiceError> {
        self.transition(id, ApplicationStatus::Approved, notes).await
    }

    pub async fn reject(
        &self,
        id: u64,
        notes: Option<String>,
    ) -> Result<StudentApplication, ServiceError> {
        self.transition(id, ApplicationStatus::Rejected, notes).await
    }

    /// Status changes are checked against the transition rule before the
    /// request goes out: only pending applications move.
    async fn transition(
        &self,
        id: u64,
        next: ApplicationStatus,
        notes: Option<String>,
    ) -> Result<StudentApplication, ServiceError> {
        let current = self.get(id).await?;
        if !current.status.can_transition_to(next) {
            return Err(ServiceError::Validation {
                field: "status".to_string(),
                message: format!(
                    "Application {} cannot move from {:?} to {:?}",
                    id, current.status, next
                ),
            });
        }

        self.client
            .put(
                &format!("/applications/{}/status", id),
                &serde_json::json!({ "status": next, "notes": notes }),
            )
            .await
            .map_err(not_found_as("Application", id))
    }
}
