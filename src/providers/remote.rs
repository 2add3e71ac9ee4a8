use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::ModelConfig;
use crate::errors::ProviderError;
use crate::providers::Seq2SeqModel;
use crate::translation::neural::TranslationParameters;

/// Client for a model inference server
///
/// The server owns the loaded sequence-to-sequence model and exposes
/// `POST /generate` (token ids in, token ids out) and `GET /health`.
#[derive(Debug)]
pub struct RemoteModel {
    /// Base URL of the inference server
    base_url: String,
    /// Model identifier sent with every request
    model_name: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Generate request for the inference server
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Encoded input text
    pub input_ids: &'a [u32],
    /// Decoding parameters
    pub parameters: &'a TranslationParameters,
}

/// Generate response from the inference server
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Encoded output text
    pub output_ids: Vec<u32>,
}

impl RemoteModel {
    /// Create a new client with default retry settings
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self::new_with_config(base_url, model_name, Duration::from_secs(60), 2, 500)
    }

    /// Create a new client with explicit timeout and retry settings
    pub fn new_with_config(
        base_url: impl Into<String>,
        model_name: impl Into<String>,
        timeout: Duration,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            model_name: model_name.into(),
            client: Client::builder()
                .timeout(timeout)
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Create a client from the model configuration
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new_with_config(
            config.endpoint.clone(),
            config.model_name.clone(),
            Duration::from_secs(config.timeout_secs),
            config.retry_count,
            config.retry_backoff_ms,
        )
    }

    /// Base URL of the inference server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Delay before retry number `attempt` (1-based), doubling each time
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
        Duration::from_millis(self.backoff_base_ms.saturating_mul(factor))
    }

    /// Send one generate request, classifying failures as retryable or not
    async fn send_generate(
        &self,
        url: &str,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, (ProviderError, bool)> {
        let response = self.client.post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| (ProviderError::ConnectionError(e.to_string()), true))?;

        let status = response.status();
        if status.is_success() {
            let response_text = response.text().await
                .map_err(|e| (ProviderError::RequestFailed(e.to_string()), true))?;

            return serde_json::from_str::<GenerateResponse>(&response_text).map_err(|e| {
                error!("Failed to parse inference response: {}. Raw response (first 200 chars): {}",
                       e, response_text.chars().take(200).collect::<String>());
                (ProviderError::ParseError(e.to_string()), false)
            });
        }

        let message = response.text().await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        let error = ProviderError::ApiError {
            status_code: status.as_u16(),
            message,
        };

        // Server errors can retry, client errors cannot
        Err((error, status.is_server_error()))
    }
}

#[async_trait]
impl Seq2SeqModel for RemoteModel {
    async fn generate(
        &self,
        input_ids: &[u32],
        parameters: &TranslationParameters,
    ) -> Result<Vec<u32>, ProviderError> {
        let url = format!("{}/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model_name,
            input_ids,
            parameters,
        };

        let mut attempt = 0;

        loop {
            match self.send_generate(&url, &request).await {
                Ok(response) => {
                    debug!("Inference returned {} token(s)", response.output_ids.len());
                    return Ok(response.output_ids);
                }
                Err((e, retryable)) => {
                    if !retryable || attempt >= self.max_retries {
                        error!("Inference request failed: {}", e);
                        return Err(e);
                    }

                    attempt += 1;
                    error!("Inference request failed: {} - attempt {}/{}", e, attempt, self.max_retries + 1);

                    tokio::time::sleep(self.backoff_delay(attempt)).await;
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            })
        }
    }
}
