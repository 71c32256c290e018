use crate::api::{
    client::ApiClient,
    models::{Category, CategoryInput},
    normalize::Paginated,
};
use crate::core::services::traits::{
    CreateService, CrudService, DeleteService, GetService, ListService, UpdateService,
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_id};
use async_trait::async_trait;
use std::sync::Arc;

pub struct CategoryService {
    client: Arc<ApiClient>,
}

impl CategoryService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn validate_input(input: &CategoryInput) -> Result<(), ServiceError> {
        require_non_empty("name", &input.name)
    }
}

#[async_trait]
impl ListService<Category> for CategoryService {
    async fn list(&self, params: ListParams) -> Result<Paginated<Category>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page("/categories", &params.to_query(), &params.page_request())
            .await?;
        Ok(page)
    }
}

#[async_trait]
impl GetService<Category> for CategoryService {
    async fn get(&self, id: u64) -> Result<Category, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .get_item(&format!("/categories/{}", id))
            .await
            .map_err(not_found_as("Category", id))
    }
}

#[async_trait]
impl CreateService<Category, CategoryInput> for CategoryService {
    async fn create(&self, input: CategoryInput) -> Result<Category, ServiceError> {
        Self::validate_input(&input)?;
        let category = self.client.post("/categories", &input).await?;
        Ok(category)
    }
}

#[async_trait]
impl UpdateService<Category, CategoryInput> for CategoryService {
    async fn update(&self, id: u64, input: CategoryInput) -> Result<Category, ServiceError> {
        require_positive_id("id", id)?;
        Self::validate_input(&input)?;
        self.client
            .put(&format!("/categories/{}", id), &input)
            .await
            .map_err(not_found_as("Category", id))
    }
}

#[async_trait]
impl DeleteService for CategoryService {
    async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .delete(&format!("/categories/{}", id))
            .await
            .map_err(not_found_as("Category", id))
    }
}

impl CrudService<Category, CategoryInput, CategoryInput> for CategoryService {}
