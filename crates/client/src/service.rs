//! HTTP client for the duties REST API.
//!
//! [`DutyService`] wraps the four `/duties` endpoints using [`reqwest`].
//! The controller talks to it through the [`DutyApi`] trait so tests can
//! swap in an in-memory implementation.

use async_trait::async_trait;
use duties_core::types::DbId;
use serde::Deserialize;

use crate::types::{CreateDutyRequest, Duty, UpdateDutyRequest};

/// Message used when an error response carries no `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors from the duties REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message} ({status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` message, or [`FALLBACK_ERROR_MESSAGE`].
        message: String,
    },
}

impl ServiceError {
    /// HTTP status of an API error, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Network(_) => None,
            ServiceError::Api { status, .. } => Some(*status),
        }
    }
}

/// Operations the UI performs against the duties backend.
#[async_trait]
pub trait DutyApi: Send + Sync {
    async fn fetch_duties(&self) -> Result<Vec<Duty>, ServiceError>;

    async fn create_duty(&self, request: &CreateDutyRequest) -> Result<Duty, ServiceError>;

    async fn update_duty(
        &self,
        id: DbId,
        request: &UpdateDutyRequest,
    ) -> Result<Duty, ServiceError>;

    async fn delete_duty(&self, id: DbId) -> Result<(), ServiceError>;
}

/// Error body shape returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for a duties API server.
#[derive(Debug, Clone)]
pub struct DutyService {
    client: reqwest::Client,
    base_url: String,
}

impl DutyService {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn duties_url(&self) -> String {
        format!("{}/duties", self.base_url)
    }

    fn duty_url(&self, id: DbId) -> String {
        format!("{}/duties/{id}", self.base_url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise turn the
    /// body's `error` field into a [`ServiceError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        Err(ServiceError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DutyApi for DutyService {
    /// `GET /duties`
    async fn fetch_duties(&self) -> Result<Vec<Duty>, ServiceError> {
        let response = self.client.get(self.duties_url()).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /duties`
    async fn create_duty(&self, request: &CreateDutyRequest) -> Result<Duty, ServiceError> {
        let response = self
            .client
            .post(self.duties_url())
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /duties/{id}`
    async fn update_duty(
        &self,
        id: DbId,
        request: &UpdateDutyRequest,
    ) -> Result<Duty, ServiceError> {
        let response = self
            .client
            .put(self.duty_url(id))
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /duties/{id}`. Success carries no body.
    async fn delete_duty(&self, id: DbId) -> Result<(), ServiceError> {
        let response = self.client.delete(self.duty_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
