use crate::api::{
    client::ApiClient,
    models::{Banner, BannerInput, resolve_banner_image},
    normalize::{Paginated, normalize_item},
};
use crate::core::services::types::{ListParams, ServiceError, not_found_as};
use crate::utils::validation::{require_non_empty, require_positive_id};
use std::sync::Arc;

/// Home-screen banners. Stored image paths are relative; every record is
/// passed through the banner item mapper so consumers always see absolute
/// URLs.
pub struct BannerService {
    client: Arc<ApiClient>,
}

impl BannerService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn validate_input(input: &BannerInput) -> Result<(), ServiceError> {
        require_non_empty("title", &input.title)?;
        require_non_empty("image_url", &input.image_url)
    }

    fn decode_banner(&self, raw: serde_json::Value) -> Result<Banner, ServiceError> {
        let mapped = resolve_banner_image(self.client.base_url(), raw);
        serde_json::from_value(mapped).map_err(|e| self.client.decode_error("/banners", e).into())
    }

    pub async fn list(&self, params: ListParams) -> Result<Paginated<Banner>, ServiceError> {
        params.validate()?;
        let page = self
            .client
            .get_page_raw("/banners", &params.to_query(), &params.page_request())
            .await?
            .map(|raw| resolve_banner_image(self.client.base_url(), raw))
            .decode::<Banner>()
            .map_err(|e| ServiceError::from(self.client.decode_error("/banners", e)))?;
        Ok(page)
    }

    pub async fn get(&self, id: u64) -> Result<Banner, ServiceError> {
        require_positive_id("id", id)?;
        let payload = self
            .client
            .get_raw(&format!("/banners/{}", id), &[])
            .await
            .map_err(not_found_as("Banner", id))?;
        self.decode_banner(normalize_item(&payload))
    }

    pub async fn create(&self, input: BannerInput) -> Result<Banner, ServiceError> {
        Self::validate_input(&input)?;
        let payload = self.client.post_raw("/banners", &input).await?;
        self.decode_banner(normalize_item(&payload))
    }

    pub async fn update(&self, id: u64, input: BannerInput) -> Result<Banner, ServiceError> {
        require_positive_id("id", id)?;
        Self::validate_input(&input)?;
        let payload = self
            .client
            .put_raw(&format!("/banners/{}", id), &input)
            .await
            .map_err(not_found_as("Banner", id))?;
        self.decode_banner(normalize_item(&payload))
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        require_positive_id("id", id)?;
        self.client
            .delete(&format!("/banners/{}", id))
            .await
            .map_err(not_found_as("Banner", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    fn create_test_service() -> BannerService {
        let client = ApiClient::new(Session::new("http://test.example")).unwrap();
        BannerService::new(Arc::new(client))
    }

    fn sample_input() -> BannerInput {
        BannerInput {
            title: "Ramadan campaign".to_string(),
            image_url: "storage/banners/ramadan.png".to_string(),
            link_url: None,
            position: Some(1),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_missing_image() {
        let service = create_test_service();
        let mut input = sample_input();
        input.image_url = String::new();
        match service.create(input).await.unwrap_err() {
            ServiceError::Validation { field, .. } => assert_eq!(field, "image_url"),
            _ => panic!("Expected validation error"),
        }
    }

    #[test]
    fn test_decode_banner_resolves_relative_image() {
        let service = create_test_service();
        let banner = service
            .decode_banner(serde_json::json!({
                "id": 1,
                "title": "Eid",
                "image_url": "storage/banners/eid.png"
            }))
            .expect("decode failed");
        assert_eq!(banner.image_url, "http://test.example/storage/banners/eid.png");
    }
}
