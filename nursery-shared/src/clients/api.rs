use reqwest::Client;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::errors::AppResult;
use crate::types::{EnrollmentRequest, LoginRequest};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const ENROLLMENTS_PATH: &str = "/api/enrollments";

/// Raw outcome of one request: status code plus the complete body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON, `None` when it is not JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Client for the nursery web application's JSON API.
#[derive(Clone)]
pub struct NurseryApiClient {
    client: Client,
    config: ApiConfig,
}

impl NurseryApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<ApiReply> {
        self.post_json(LOGIN_PATH, request).await
    }

    pub async fn create_enrollment(&self, request: &EnrollmentRequest) -> AppResult<ApiReply> {
        self.post_json(ENROLLMENTS_PATH, request).await
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> AppResult<ApiReply> {
        let url = self.config.endpoint(path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(url = %url, status, bytes = body.len(), "response received");
        Ok(ApiReply { status, body })
    }
}
