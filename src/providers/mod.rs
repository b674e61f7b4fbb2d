/*!
 * Provider implementations for model inference endpoints.
 *
 * This module contains client implementations for the services that run the
 * actual models:
 * - Hugging Face style inference API (hosted or self-hosted)
 * - Mock: in-memory provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all inference providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the capability services.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Extract text from the provider response
    ///
    /// # Arguments
    /// * `response` - The response from the provider
    ///
    /// # Returns
    /// * `String` - The extracted text
    fn extract_text(response: &Self::Response) -> String;
}

// Shared providers behave like owned ones; capability services take either
#[async_trait]
impl<P: Provider> Provider for std::sync::Arc<P> {
    type Request = P::Request;
    type Response = P::Response;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        (**self).complete(request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        (**self).test_connection().await
    }

    fn extract_text(response: &Self::Response) -> String {
        P::extract_text(response)
    }
}

pub mod huggingface;
pub mod mock;
