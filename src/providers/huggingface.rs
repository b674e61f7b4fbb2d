use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Default hosted inference endpoint
const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Client for a Hugging Face style inference API.
///
/// Works against the hosted api-inference service or any self-hosted server
/// that speaks the same `POST /models/{id}` protocol.
#[derive(Debug, Clone)]
pub struct HuggingFace {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication, empty for unauthenticated endpoints
    api_key: String,
    /// API endpoint URL (optional, defaults to the hosted service)
    endpoint: String,
}

/// A single inference request against a named model
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    /// The model to run, used to build the request URL
    #[serde(skip)]
    pub model: String,

    /// The input text for the model
    pub inputs: String,

    /// Generation parameters
    #[serde(skip_serializing_if = "InferenceParameters::is_empty")]
    pub parameters: InferenceParameters,

    /// Endpoint options
    pub options: InferenceOptions,
}

/// Generation parameters understood by summarization and translation models
#[derive(Debug, Clone, Default, Serialize)]
pub struct InferenceParameters {
    /// Minimum length of the generated text, in tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum length of the generated text, in tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Number of beams for beam search decoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<usize>,
}

impl InferenceParameters {
    fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none() && self.num_beams.is_none()
    }
}

/// Endpoint-level options
#[derive(Debug, Clone, Serialize)]
pub struct InferenceOptions {
    /// Block until a cold model is loaded instead of failing with 503
    pub wait_for_model: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
        }
    }
}

impl InferenceRequest {
    /// Create a new inference request for a model
    pub fn new(model: impl Into<String>, inputs: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            inputs: inputs.into(),
            parameters: InferenceParameters::default(),
            options: InferenceOptions::default(),
        }
    }

    /// Set the minimum generation length
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.parameters.min_length = Some(min_length);
        self
    }

    /// Set the maximum generation length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.parameters.max_length = Some(max_length);
        self
    }

    /// Set the number of beams for beam search
    pub fn num_beams(mut self, num_beams: usize) -> Self {
        self.parameters.num_beams = Some(num_beams);
        self
    }
}

/// One generated output in an inference response.
///
/// The field name depends on the task the model serves, so the variants are
/// matched untagged.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InferenceOutput {
    /// Output of a summarization model
    Summary {
        /// The generated summary
        summary_text: String,
    },
    /// Output of a translation model
    Translation {
        /// The translated text
        translation_text: String,
    },
    /// Output of a generic text generation model
    Generated {
        /// The generated text
        generated_text: String,
    },
}

impl InferenceOutput {
    /// The generated text regardless of task
    pub fn text(&self) -> &str {
        match self {
            InferenceOutput::Summary { summary_text } => summary_text,
            InferenceOutput::Translation { translation_text } => translation_text,
            InferenceOutput::Generated { generated_text } => generated_text,
        }
    }
}

impl HuggingFace {
    /// Create a new inference client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the request URL for a model
    fn model_url(&self, model: &str) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/models/{}", base, model)
    }
}

#[async_trait]
impl Provider for HuggingFace {
    type Request = InferenceRequest;
    type Response = Vec<InferenceOutput>;

    async fn complete(&self, request: InferenceRequest) -> Result<Vec<InferenceOutput>, ProviderError> {
        let api_url = self.model_url(&request.model);

        let mut builder = self
            .client
            .post(&api_url)
            .header(header::CONTENT_TYPE, "application/json");

        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.json(&request).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ProviderError::ConnectionError(e.to_string())
            } else {
                ProviderError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::AuthenticationError(format!(
                "Endpoint rejected credentials for model '{}'",
                request.model
            )));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Inference API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<Vec<InferenceOutput>>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // Any HTTP answer proves the endpoint is reachable; model-level
        // failures surface on the first real request.
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            self.endpoint.clone()
        };

        self.client
            .get(&base)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;
        Ok(())
    }

    fn extract_text(response: &Vec<InferenceOutput>) -> String {
        response
            .first()
            .map(|output| output.text().to_string())
            .unwrap_or_default()
    }
}
