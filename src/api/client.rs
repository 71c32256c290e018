use crate::api::classify::{RawFailure, classify};
use crate::api::messages::MessageTable;
use crate::api::normalize::{PageRequest, Paginated, decode_item, normalize_page};
use crate::core::session::Session;
use crate::error::{ApiError, ErrorKind};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("swf-admin-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the admin backend.
///
/// Every transport failure and non-2xx response passes through the
/// classifier exactly once, with an endpoint-tagged context bag, so services
/// only ever see the closed `ApiError` taxonomy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    session: Session,
    messages: MessageTable,
}

impl ApiClient {
    pub fn new(session: Session) -> Result<Self, ApiError> {
        let timeout = Duration::from_secs(session.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError {
                kind: ErrorKind::Unknown,
                message: format!("Failed to create HTTP client: {}", e),
                http_status: None,
                context: BTreeMap::from([(
                    "endpoint".to_string(),
                    "client_init".to_string(),
                )]),
                validation_errors: None,
            })?;

        let messages = MessageTable::for_locale(session.locale);
        Ok(ApiClient {
            client,
            session,
            messages,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub fn base_url(&self) -> &str {
        &self.session.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.session.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header("Accept", "application/json")
            .header("Accept-Language", self.session.locale.as_str());

        if let Some(token) = &self.session.token {
            request = request.bearer_auth(token);
        }

        request
    }

    fn context_for(&self, method: &Method, endpoint: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("endpoint".to_string(), endpoint.to_string()),
            ("method".to_string(), method.to_string()),
        ])
    }

    /// Send a request and return the parsed response body.
    async fn send(&self, method: Method, request: RequestBuilder, endpoint: &str) -> Result<Value, ApiError> {
        let context = self.context_for(&method, endpoint);

        let response = request.send().await.map_err(|e| {
            classify(&RawFailure::from_transport(&e), context.clone(), &self.messages)
        })?;

        let status = response.status();
        let body = response.json::<Value>().await.ok();

        if status.is_success() {
            Ok(body.unwrap_or(Value::Null))
        } else {
            Err(classify(
                &RawFailure::from_response(status.as_u16(), body),
                context,
                &self.messages,
            ))
        }
    }

    pub(crate) fn decode_error(&self, endpoint: &str, error: serde_json::Error) -> ApiError {
        let error = ApiError {
            kind: ErrorKind::Unknown,
            message: self.messages.message(ErrorKind::Unknown).to_string(),
            http_status: None,
            context: BTreeMap::from([
                ("endpoint".to_string(), endpoint.to_string()),
                ("stage".to_string(), "decode".to_string()),
                ("detail".to_string(), error.to_string()),
            ]),
            validation_errors: None,
        };
        log::error!(
            "response decode failure endpoint={} context={:?}",
            endpoint,
            error.context
        );
        error
    }

    pub async fn get_raw(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, ApiError> {
        let request = self.build_request(Method::GET, path).query(query);
        self.send(Method::GET, request, path).await
    }

    /// Fetch a list endpoint and normalize whatever shape comes back.
    pub async fn get_page_raw(
        &self,
        path: &str,
        query: &[(String, String)],
        req: &PageRequest,
    ) -> Result<Paginated<Value>, ApiError> {
        let mut query = query.to_vec();
        if let Some(page) = req.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = req.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }

        let payload = self.get_raw(path, &query).await?;
        Ok(normalize_page(&payload, req))
    }

    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        req: &PageRequest,
    ) -> Result<Paginated<T>, ApiError> {
        self.get_page_raw(path, query, req)
            .await?
            .decode()
            .map_err(|e| self.decode_error(path, e))
    }

    pub async fn get_item<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_item_with_query(path, &[]).await
    }

    pub async fn get_item_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let payload = self.get_raw(path, query).await?;
        decode_item(&payload).map_err(|e| self.decode_error(path, e))
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::POST, path).json(body);
        let payload = self.send(Method::POST, request, path).await?;
        decode_item(&payload).map_err(|e| self.decode_error(path, e))
    }

    pub async fn post_raw<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.build_request(Method::POST, path).json(body);
        self.send(Method::POST, request, path).await
    }

    pub async fn put_raw<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.build_request(Method::PUT, path).json(body);
        self.send(Method::PUT, request, path).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::PUT, path).json(body);
        let payload = self.send(Method::PUT, request, path).await?;
        decode_item(&payload).map_err(|e| self.decode_error(path, e))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.build_request(Method::DELETE, path);
        self.send(Method::DELETE, request, path).await?;
        Ok(())
    }
}
