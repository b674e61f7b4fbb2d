/*!
 * Abstractive summarization capability.
 *
 * The pipeline talks to the [`Summarizer`] trait; the default implementation
 * runs a BART-family model over an inference provider.
 */

use std::fmt::Debug;

use async_trait::async_trait;
use log::debug;

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::huggingface::{HuggingFace, InferenceOutput, InferenceRequest};

/// Length and decoding bounds for one summarization call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Minimum length of the generated summary, in tokens
    pub min_length: usize,
    /// Maximum length of the generated summary, in tokens
    pub max_length: usize,
    /// Number of beams for beam search decoding
    pub num_beams: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            min_length: 20,
            max_length: 200,
            num_beams: 2,
        }
    }
}

/// Capability for producing a shorter text in the same language as its input
#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    /// Summarize `text` within the given length bounds.
    ///
    /// Fails loudly on empty input; callers must hand in non-empty text.
    async fn summarize(&self, text: &str, options: &SummaryOptions)
    -> Result<String, ProviderError>;
}

/// BART-family summarizer served over an inference endpoint
#[derive(Debug)]
pub struct BartSummarizer<P = HuggingFace> {
    /// Provider running the model
    provider: P,
    /// Model identifier, e.g. `facebook/bart-large-cnn`
    model: String,
}

impl<P> BartSummarizer<P> {
    /// Create a new summarizer around a provider and model id
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl<P> Summarizer for BartSummarizer<P>
where
    P: Provider<Request = InferenceRequest, Response = Vec<InferenceOutput>>,
{
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, ProviderError> {
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyInput);
        }

        let request = InferenceRequest::new(&self.model, text)
            .min_length(options.min_length)
            .max_length(options.max_length)
            .num_beams(options.num_beams);

        let response = self.provider.complete(request).await?;
        let summary = P::extract_text(&response);
        debug!(
            "Model '{}' produced a {} character summary",
            self.model,
            summary.len()
        );

        Ok(summary.trim().to_string())
    }
}
