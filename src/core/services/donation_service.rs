use crate::api::{
    client::ApiClient,
    models::{Donation, DonationInput, DonationStatus},
    normalize::Paginated,
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_amount, require_positive_id};
use std::sync::Arc;

pub struct DonationService {
    client: Arc<ApiClient>,
}

impl DonationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: ListParams) -> Result<Paginated<Donation>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page("/donations", &params.to_query(), &params.page_request())
            .await?;
        Ok(page)
    }

    pub async fn list_by_status(
        &self,
        status: DonationStatus,
        params: ListParams,
    ) -> Result<Paginated<Donation>, ServiceError> {
        let status = serde_json::to_value(status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        self.list(params.with_filter("status", status)).await
    }

    pub async fn get(&self, id: u64) -> Result<Donation, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .get_item(&format!("/donations/{}", id))
            .await
            .map_err(not_found_as("Donation", id))
    }

    /// Record a manual (offline) donation.
    pub async fn create(&self, input: DonationInput) -> Result<Donation, ServiceError> {
        require_non_empty("donor_name", &input.donor_name)?;
        require_positive_amount("amount", input.amount)?;
        if input.campaign_id.is_none() && input.program_id.is_none() {
            return Err(ServiceError::Validation {
                field: "campaign_id".to_string(),
                message: "A donation must target a campaign or a program".to_string(),
            });
        }
        let donation = self.client.post("/donations", &input).await?;
        Ok(donation)
    }

    /// Mark a pending donation refunded; the backend owns the money movement.
    pub async fn refund(&self, id: u64) -> Result<Donation, ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .put(
                &format!("/donations/{}/status", id),
                &serde_json::json!({ "status": DonationStatus::Refunded }),
            )
            .await
            .map_err(not_found_as("Donation", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    fn create_test_service() -> DonationService {
        let client = ApiClient::new(Session::new("http://test.example")).unwrap();
        DonationService::new(Arc::new(client))
    }

    fn sample_input() -> DonationInput {
        DonationInput {
            donor_name: "Huda".to_string(),
            donor_phone: None,
            amount: 250.0,
            campaign_id: Some(3),
            program_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_amount() {
        let service = create_test_service();
        let mut input = sample_input();
        input.amount = -10.0;
        match service.create(input).await.unwrap_err() {
            ServiceError::Validation { field, .. } => assert_eq!(field, "amount"),
            _ => panic!("Expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_create_requires_a_target() {
        let service = create_test_service();
        let mut input = sample_input();
        input.campaign_id = None;
        input.program_id = None;
        match service.create(input).await.unwrap_err() {
            ServiceError::Validation { field, .. } => assert_eq!(field, "campaign_id"),
            _ => panic!("Expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_refund_rejects_zero_id() {
        let service = create_test_service();
        assert!(matches!(
            service.refund(0).await,
            Err(ServiceError::Validation { .. })
        ));
    }
}
