use crate::api::{
    client::ApiClient,
    models::{Campaign, CampaignInput, CampaignStatus},
    normalize::Paginated,
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_amount, require_positive_id};
use std::sync::Arc;

pub struct CampaignService {
    client: Arc<ApiClient>,
}

impl CampaignService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn validate_input(input: &CampaignInput) -> Result<(), ServiceError> {
        require_non_empty("name", &input.name)?;
        if let Some(goal) = input.goal_amount {
            require_positive_amount("goal_amount", goal)?;
        }
        if let (Some(starts), Some(ends)) = (input.starts_at, input.ends_at)
            && ends <= starts
        {
            return Err(ServiceError::Validation {
                field: "ends_at".to_string(),
                message: "End date must be after the start date".to_string(),
            });
        }
        Ok(())
    }

    pub async fn list(&self, params: ListParams) -> Result<Paginated<Campaign>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page("/campaigns", &params.to_query(), &params.page_request())
            .await?;
        Ok(page)
    }

    pub async fn get(&self, id: u64) -> Result<Campaign, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .get_item(&format!("/campaigns/{}", id))
            .await
            .map_err(not_found_as("Campaign", id))
    }

    pub async fn create(&self, input: CampaignInput) -> Result<Campaign, ServiceError> {
        Self::validate_input(&input)?;
        let campaign = self.client.post("/campaigns", &input).await?;
        Ok(campaign)
    }

    pub async fn update(&self, id: u64, input: CampaignInput) -> Result<Campaign, ServiceError> {
        require_positive_id("id", id)?;
        Self::validate_input(&input)?;
        self.client
            .put(&format!("/campaigns/{}", id), &input)
            .await
            .map_err(not_found_as("Campaign", id))
    }

    /// Activate a draft campaign. A campaign cannot go live without a goal
    /// amount, and only drafts can be activated.
    pub async fn activate(&self, id: u64) -> Result<Campaign, ServiceError> {
        let campaign = self.get(id).await?;

        if campaign.status != CampaignStatus::Draft {
            return Err(ServiceError::Validation {
                field: "status".to_string(),
                message: "Only draft campaigns can be activated".to_string(),
            });
        }
        if campaign.goal_amount.is_none() {
            return Err(ServiceError::Validation {
                field: "goal_amount".to_string(),
                message: "A goal amount is required before activation".to_string(),
            });
        }

        self.set_status(id, CampaignStatus::Active).await
    }

    pub async fn archive(&self, id: u64) -> Result<Campaign, ServiceError> {
        require_positive_id("id", id)?;
        self.set_status(id, CampaignStatus::Archived).await
    }

    async fn set_status(&self, id: u64, status: CampaignStatus) -> Result<Campaign, ServiceError> {
        self.client
            .put(
                &format!("/campaigns/{}/status", id),
                &serde_json::json!({ "status": status }),
            )
            .await
            .map_err(not_found_as("Campaign", id))
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .delete(&format!("/campaigns/{}", id))
            .await
            .map_err(not_found_as("Campaign", id))
    }
}
