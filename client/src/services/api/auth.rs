//! # Authentication Endpoints
//!
//! Handles user authentication (login and registration).

use super::client::{error_message, ApiClient};
use crate::core::error::{AppError, Result};
use shared::{LoginRequest, RegisterRequest, TokenResponse};

/// Login with username and password, returning the session token.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(client: &ApiClient, username: String, password: String) -> Result<String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { username, password };

    let response = client
        .client
        .post(client.url("/auth/login"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            AppError::Network(e.to_string())
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let parsed = response.json::<TokenResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Login response parse error");
            AppError::Network(format!("Failed to parse response: {}", e))
        })?;
        tracing::info!(duration_ms = duration.as_millis(), "Login successful");
        Ok(parsed.token)
    } else {
        let message = error_message(response).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %message,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        Err(AppError::Auth(message))
    }
}

/// Register a new user.
///
/// Any 4xx is reported as [`AppError::Conflict`]; the API uses 400 for a taken
/// username and gives no finer signal.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn register(client: &ApiClient, username: String, password: String) -> Result<()> {
    let request = RegisterRequest { username, password };

    let response = client
        .client
        .post(client.url("/auth/register"))
        .json(&request)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("Registration successful");
        return Ok(());
    }

    let message = error_message(response).await;
    tracing::warn!(status = status.as_u16(), error = %message, "Registration failed");
    if status.is_client_error() {
        Err(AppError::Conflict(message))
    } else {
        Err(AppError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
