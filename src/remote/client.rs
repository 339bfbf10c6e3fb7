//! HTTP client for the remote compiler service
//!
//! Maps `/compile` and `/execute` round trips onto [`CompileResult`] and
//! [`ExecuteResult`]. A non-2xx status with an `{error}` body becomes the
//! corresponding `Error(..)` variant; a transport failure becomes
//! [`crate::Error::NetworkFailure`]. The request timeout configured here
//! is the transport-layer timeout; the protocol itself imposes none.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, Result};

use super::{
    CompileRequest, CompileResponseBody, CompileResult, ExecuteRequest, ExecuteResponseBody,
    ExecuteResult, ExecutionService,
};

/// Error body returned by the service with a non-2xx status.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// reqwest-backed implementation of [`ExecutionService`].
#[derive(Debug, Clone)]
pub struct HttpExecutionService {
    client: Client,
    base_url: String,
}

impl HttpExecutionService {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::from)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the `{error}` payload of a failed response, falling back to
    /// the HTTP status line when the body is not the expected shape.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(msg) }) => msg,
            _ => format!("service returned {}", status),
        }
    }
}

#[async_trait::async_trait]
impl ExecutionService for HttpExecutionService {
    async fn compile(&self, request: CompileRequest) -> Result<CompileResult> {
        let url = self.endpoint("/compile");
        debug!("POST {} action={}", url, request.action.as_str());

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            return Ok(CompileResult::Error(message));
        }

        let body: CompileResponseBody = response.json().await?;
        body.into_result(request.action)
    }

    async fn execute(&self, request: ExecuteRequest) -> Result<ExecuteResult> {
        let url = self.endpoint("/execute");
        debug!("POST {} resume={}", url, request.user_input.is_some());

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let message = Self::error_message(response).await;
            return Ok(ExecuteResult::Error(message));
        }

        let body: ExecuteResponseBody = response.json().await?;
        body.into_result()
    }
}
