use crate::api::{
    client::ApiClient,
    models::{Role, RoleInput},
    normalize::PageRequest,
};
use crate::core::services::types::{ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_id};
use std::sync::Arc;

/// Roles and their permission names. The roles endpoint returns a bare
/// array, which the normalizer paginates client-side; the full set is small
/// enough to return whole.
pub struct RoleService {
    client: Arc<ApiClient>,
}

impl RoleService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Role>, ServiceError> {
        let page = self
            .client
            .get_page::<Role>("/roles", &[], &PageRequest::default())
            .await?;
        Ok(page.data)
    }

    pub async fn get(&self, id: u64) -> Result<Role, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .get_item(&format!("/roles/{}", id))
            .await
            .map_err(not_found_as("Role", id))
    }

    pub async fn create(&self, input: RoleInput) -> Result<Role, ServiceError> {
        require_non_empty("name", &input.name)?;
        let role = self.client.post("/roles", &input).await?;
        Ok(role)
    }

    /// Replace a role's permission set.
    pub async fn update_permissions(
        &self,
        id: u64,
        permissions: Vec<String>,
    ) -> Result<Role, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .put(
                &format!("/roles/{}/permissions", id),
                &serde_json::json!({ "permissions": permissions }),
            )
            .await
            .map_err(not_found_as("Role", id))
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .delete(&format!("/roles/{}", id))
            .await
            .map_err(not_found_as("Role", id))
    }
}
