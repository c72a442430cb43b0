//! # API Client
//!
//! Main HTTP client for journal API communication.

use crate::app::session::Session;
use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use reqwest::{Client, RequestBuilder, Response};
use shared::{ErrorResponse, JournalEntry};

/// HTTP client for communicating with the journal API.
///
/// Holds the injected [`Session`] and attaches its token to every entry
/// request at send time, so a login or logout is picked up immediately.
///
/// No request timeout is configured: calls wait for the transport's own
/// failure behaviour.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a new API client for `base_url` (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let client = Client::builder()
            .user_agent(concat!("moodecho/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig, session: Session) -> Self {
        Self::new(config.api_url.clone(), session)
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session token as a bearer credential.
    ///
    /// Without a token the request goes out bare and the API rejects it.
    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.get() {
            Some(token) => request.bearer_auth(token),
            None => {
                tracing::warn!("No session token available for protected request");
                request
            }
        }
    }
}

/// Best-effort error text from a failed response.
///
/// Uses the `{"error": "..."}` body when present, then any raw body, then the
/// status reason phrase.
pub(crate) async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&body) {
        return parsed.error;
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

/// Turn a non-success status into [`AppError::Server`].
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = error_message(response).await;
    Err(AppError::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: String, password: String) -> Result<String> {
        crate::services::api::auth::login(self, username, password).await
    }

    async fn register(&self, username: String, password: String) -> Result<()> {
        crate::services::api::auth::register(self, username, password).await
    }

    async fn list_entries(&self) -> Result<Vec<JournalEntry>> {
        crate::services::api::entries::list_entries(self).await
    }

    async fn create_entry(&self, content: String, habit_names: Vec<String>) -> Result<JournalEntry> {
        crate::services::api::entries::create_entry(self, content, habit_names).await
    }

    async fn update_entry(&self, id: i64, content: String, habit_names: Vec<String>) -> Result<JournalEntry> {
        crate::services::api::entries::update_entry(self, id, content, habit_names).await
    }

    async fn delete_entry(&self, id: i64) -> Result<()> {
        crate::services::api::entries::delete_entry(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8080/api/", Session::in_memory());
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/entries"), "http://localhost:8080/api/entries");
    }
}
