use crate::api::{
    client::ApiClient,
    models::{SettingsInput, SettingsPage},
};
use crate::core::services::types::ServiceError;
use crate::utils::validation::require_non_empty;
use std::sync::Arc;

/// Textual settings pages (about, terms, privacy and the like), addressed by
/// slug.
pub struct SettingsService {
    client: Arc<ApiClient>,
}

impl SettingsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, slug: &str) -> Result<SettingsPage, ServiceError> {
        require_non_empty("slug", slug)?;
        let page = self
            .client
            .get_item(&format!("/settings/{}", slug))
            .await?;
        Ok(page)
    }

    pub async fn update(
        &self,
        slug: &str,
        input: SettingsInput,
    ) -> Result<SettingsPage, ServiceError> {
        require_non_empty("slug", slug)?;
        require_non_empty("title", &input.title)?;
        require_non_empty("content", &input.content)?;
        let page = self
            .client
            .put(&format!("/settings/{}", slug), &input)
            .await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    fn create_test_service() -> SettingsService {
        let client = ApiClient::new(Session::new("http://test.example")).unwrap();
        SettingsService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_get_rejects_empty_slug() {
        let service = create_test_service();
        assert!(matches!(
            service.get("").await,
            Err(ServiceError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_empty_content() {
        let service = create_test_service();
        let input = SettingsInput {
            title: "About us".to_string(),
            content: String::new(),
        };
        match service.update("about", input).await.unwrap_err() {
            ServiceError::Validation { field, .. } => assert_eq!(field, "content"),
            _ => panic!("Expected validation error"),
        }
    }
}
