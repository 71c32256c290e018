use crate::api::{
    client::ApiClient,
    models::{LoginRequest, LoginResponse, User},
};
use crate::core::services::types::ServiceError;
use crate::core::session::Session;
use crate::utils::validation::{require_non_empty, validate_base_url, validate_email};
use std::sync::Arc;

/// Owns the API client and the session it was built from. Login swaps in a
/// client carrying the bearer token; services created afterwards inherit it
/// through `client()`.
pub struct AuthService {
    session: Session,
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(session: Session) -> Result<Self, ServiceError> {
        validate_base_url(&session.base_url)?;
        let client = ApiClient::new(session.clone())?;
        Ok(Self {
            session,
            client: Arc::new(client),
        })
    }

    pub fn client(&self) -> Arc<ApiClient> {
        Arc::clone(&self.client)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Authenticate against the backend. There is no offline fallback; a
    /// failed login surfaces the classified API error as-is.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, ServiceError> {
        validate_email("email", email)?;
        require_non_empty("password", password)?;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("/auth/login", &request).await?;

        self.session.set_token(Some(response.token));
        self.client = Arc::new(ApiClient::new(self.session.clone())?);
        Ok(response.user)
    }

    /// Invalidate the token server-side, then drop it locally. The local
    /// state is cleared even when the revocation call fails.
    pub async fn logout(&mut self) -> Result<(), ServiceError> {
        let revoke = if self.session.is_authenticated() {
            self.client
                .post_raw("/auth/logout", &serde_json::json!({}))
                .await
                .map(|_| ())
        } else {
            Ok(())
        };

        self.session.clear_token();
        self.client = Arc::new(ApiClient::new(self.session.clone())?);
        revoke.map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> AuthService {
        AuthService::new(Session::new("http://test.example")).unwrap()
    }

    #[tokio::test]
    async fn test_login_rejects_invalid_email() {
        let mut service = create_test_service();
        let result = service.login("nope", "secret").await;
        assert!(matches!(result, Err(ServiceError::Validation { .. })));
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejects_empty_password() {
        let mut service = create_test_service();
        let result = service.login("admin@swf.example", "").await;
        assert!(matches!(result, Err(ServiceError::Validation { .. })));
    }

    #[test]
    fn test_new_rejects_malformed_base_url() {
        let result = AuthService::new(Session::new("api.swf.example"));
        assert!(matches!(result, Err(ServiceError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_logout_without_token_is_noop() {
        let mut service = create_test_service();
        assert!(service.logout().await.is_ok());
        assert!(!service.is_authenticated());
    }
}
