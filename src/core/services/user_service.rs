use crate::api::{
    client::ApiClient,
    models::{User, UserInput},
    normalize::Paginated,
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_id, validate_email};
use std::sync::Arc;

pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn validate_input(input: &UserInput) -> Result<(), ServiceError> {
        require_non_empty("name", &input.name)?;
        validate_email("email", &input.email)
    }

    pub async fn list(&self, params: ListParams) -> Result<Paginated<User>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page("/users", &params.to_query(), &params.page_request())
            .await?;
        Ok(page)
    }

    pub async fn get(&self, id: u64) -> Result<User, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .get_item(&format!("/users/{}", id))
            .await
            .map_err(not_found_as("User", id))
    }

    pub async fn create(&self, input: UserInput) -> Result<User, ServiceError> {
        Self::validate_input(&input)?;
        // New accounts need an initial password; updates may omit it.
        let Some(password) = input.password.as_deref() else {
            return Err(ServiceError::Validation {
                field: "password".to_string(),
                message: "A password is required for new users".to_string(),
            });
        };
        require_non_empty("password", password)?;

        let user = self.client.post("/users", &input).await?;
        Ok(user)
    }

    pub async fn update(&self, id: u64, input: UserInput) -> Result<User, ServiceError> {
        require_positive_id("id", id)?;
        Self::validate_input(&input)?;
        self.client
            .put(&format!("/users/{}", id), &input)
            .await
            .map_err(not_found_as("User", id))
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .delete(&format!("/users/{}", id))
            .await
            .map_err(not_found_as("User", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    fn create_test_service() -> UserService {
        let client = ApiClient::new(Session::new("http://test.example")).unwrap();
        UserService::new(Arc::new(client))
    }

    fn sample_input() -> UserInput {
        UserInput {
            name: "Admin".to_string(),
            email: "admin@swf.example".to_string(),
            password: Some("secret123".to_string()),
            roles: vec!["editor".to_string()],
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_bad_email() {
        let service = create_test_service();
        let mut input = sample_input();
        input.email = "not-an-email".to_string();
        match service.create(input).await.unwrap_err() {
            ServiceError::Validation { field, .. } => assert_eq!(field, "email"),
            _ => panic!("Expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_create_requires_password() {
        let service = create_test_service();
        let mut input = sample_input();
        input.password = None;
        match service.create(input).await.unwrap_err() {
            ServiceError::Validation { field, .. } => assert_eq!(field, "password"),
            _ => panic!("Expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_update_allows_missing_password() {
        let service = create_test_service();
        let mut input = sample_input();
        input.password = None;
        // Update with ID 0 fails on the ID check, proving the password check
        // is create-only.
        match service.update(0, input).await.unwrap_err() {
            ServiceError::Validation { field, .. } => assert_eq!(field, "id"),
            _ => panic!("Expected validation error"),
        }
    }
}
