use crate::api::{
    client::ApiClient,
    models::{Notification, NotificationInput},
    normalize::Paginated,
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_id};
use std::sync::Arc;

pub struct NotificationService {
    client: Arc<ApiClient>,
}

impl NotificationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: ListParams) -> Result<Paginated<Notification>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page("/notifications", &params.to_query(), &params.page_request())
            .await?;
        Ok(page)
    }

    pub async fn mark_read(&self, id: u64) -> Result<Notification, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .put(
                &format!("/notifications/{}/read", id),
                &serde_json::json!({}),
            )
            .await
            .map_err(not_found_as("Notification", id))
    }

    /// Send a notification to app users; delivery is the backend's concern.
    pub async fn broadcast(&self, input: NotificationInput) -> Result<Notification, ServiceError> {
        require_non_empty("title", &input.title)?;
        require_non_empty("body", &input.body)?;
        let notification = self.client.post("/notifications", &input).await?;
        Ok(notification)
    }
}
