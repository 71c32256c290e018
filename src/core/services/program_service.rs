use crate::api::{
    client::ApiClient,
    models::{Program, ProgramInput},
    normalize::Paginated,
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_amount, require_positive_id};
use std::sync::Arc;

pub struct ProgramService {
    client: Arc<ApiClient>,
}

impl ProgramService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn validate_input(input: &ProgramInput) -> Result<(), ServiceError> {
        require_positive_id("category_id", input.category_id)?;
        require_non_empty("name", &input.name)?;
        if let Some(goal) = input.goal_amount {
            require_positive_amount("goal_amount", goal)?;
        }
        Ok(())
    }

    pub async fn list(&self, params: ListParams) -> Result<Paginated<Program>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page("/programs", &params.to_query(), &params.page_request())
            .await?;
        Ok(page)
    }

    /// Programs under one category.
    pub async fn list_for_category(
        &self,
        category_id: u64,
        params: ListParams,
    ) -> Result<Paginated<Program>, ServiceError> {
        require_positive_id("category_id", category_id)?;
        self.list(params.with_filter("category_id", category_id.to_string()))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Program, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .get_item(&format!("/programs/{}", id))
            .await
            .map_err(not_found_as("Program", id))
    }

    pub async fn create(&self, input: ProgramInput) -> Result<Program, ServiceError> {
        Self::validate_input(&input)?;
        let program = self.client.post("/programs", &input).await?;
        Ok(program)
    }

    pub async fn update(&self, id: u64, input: ProgramInput) -> Result<Program, ServiceError> {
        require_positive_id("id", id)?;
        Self::validate_input(&input)?;
        self.client
            .put(&format!("/programs/{}", id), &input)
            .await
            .map_err(not_found_as("Program", id))
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .delete(&format!("/programs/{}", id))
            .await
            .map_err(not_found_as("Program", id))
    }
}
