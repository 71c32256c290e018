use crate::api::normalize::Paginated;
use crate::core::services::types::{ListParams, ServiceError};
use async_trait::async_trait;

/// Trait for services that can list resources as pages
#[async_trait]
pub trait ListService<T> {
    /// List resources matching the given parameters
    async fn list(&self, params: ListParams) -> Result<Paginated<T>, ServiceError>;
}

/// Trait for services that can retrieve individual resources
#[async_trait]
pub trait GetService<T> {
    /// Get a single resource by ID
    async fn get(&self, id: u64) -> Result<T, ServiceError>;
}

/// Trait for services that can create resources
#[async_trait]
pub trait CreateService<T, CreateInput> {
    /// Create a new resource
    async fn create(&self, input: CreateInput) -> Result<T, ServiceError>;
}

/// Trait for services that can update resources
#[async_trait]
pub trait UpdateService<T, UpdateInput> {
    /// Update an existing resource
    async fn update(&self, id: u64, input: UpdateInput) -> Result<T, ServiceError>;
}

/// Trait for services that can delete resources
#[async_trait]
pub trait DeleteService {
    /// Delete a resource by ID
    async fn delete(&self, id: u64) -> Result<(), ServiceError>;
}

/// Combined CRUD trait for full resource management
#[async_trait]
pub trait CrudService<T, CreateInput, UpdateInput>:
    ListService<T>
    + GetService<T>
    + CreateService<T, CreateInput>
    + UpdateService<T, UpdateInput>
    + DeleteService
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::normalize::{PageRequest, normalize_page_with};
    use serde_json::json;

    // Mock service for testing traits
    struct MockService;

    #[async_trait]
    impl ListService<String> for MockService {
        async fn list(&self, params: ListParams) -> Result<Paginated<String>, ServiceError> {
            params.validate()?;
            let payload = json!(["item1", "item2"]);
            Ok(normalize_page_with(
                &payload,
                &params.page_request(),
                |v| v.as_str().unwrap_or_default().to_string(),
            ))
        }
    }

    #[async_trait]
    impl GetService<String> for MockService {
        async fn get(&self, _id: u64) -> Result<String, ServiceError> {
            Ok("test_item".to_string())
        }
    }

    #[tokio::test]
    async fn test_list_service() {
        let service = MockService;
        let result = service
            .list(ListParams::default().with_page(1, 10))
            .await
            .expect("list failed");
        assert_eq!(result.data, vec!["item1".to_string(), "item2".to_string()]);
        assert_eq!(result.total, 2);
    }

    #[tokio::test]
    async fn test_list_service_validates_params() {
        let service = MockService;
        let result = service.list(ListParams::default().with_page(1, 0)).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_service() {
        let service = MockService;
        let result = service.get(1).await;
        assert_eq!(result.unwrap(), "test_item");
    }

    #[test]
    fn test_page_request_passthrough() {
        let params = ListParams::default().with_page(3, 20);
        assert_eq!(params.page_request(), PageRequest::new(3, 20));
    }
}
