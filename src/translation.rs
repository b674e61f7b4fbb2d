/*!
 * Romance/English translation capability.
 *
 * The translation models only exist in two fixed directions, with English as
 * one endpoint of each. The [`Translator`] trait exposes exactly those two
 * directions plus the target-language tagging operation the reverse
 * direction needs, so all model-specific syntax stays inside the
 * implementation.
 */

use std::fmt::Debug;

use async_trait::async_trait;
use log::debug;

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::huggingface::{HuggingFace, InferenceOutput, InferenceRequest};

/// Which of the two fixed translation mappings to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationDirection {
    /// From a Romance language toward the English pivot
    ToEnglish,
    /// From the English pivot back to a Romance language
    FromEnglish,
}

impl std::fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationDirection::ToEnglish => write!(f, "to-english"),
            TranslationDirection::FromEnglish => write!(f, "from-english"),
        }
    }
}

/// Capability for translating text between the Romance family and English
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` in the given direction.
    ///
    /// Fails loudly on empty input; callers must hand in non-empty text.
    async fn translate(
        &self,
        text: &str,
        direction: TranslationDirection,
    ) -> Result<String, ProviderError>;

    /// Tag `text` so that a [`TranslationDirection::FromEnglish`] call
    /// renders into the language named by `code`.
    ///
    /// The from-English direction covers several Romance languages at once
    /// and is otherwise ambiguous about which one to produce. The tagging
    /// syntax belongs to the concrete model, so it lives here rather than in
    /// the caller.
    fn tag_target_language(&self, code: &str, text: &str) -> String;
}

/// MarianMT translator served over an inference endpoint.
///
/// Uses one multilingual model per direction, e.g.
/// `Helsinki-NLP/opus-mt-ROMANCE-en` and `Helsinki-NLP/opus-mt-en-ROMANCE`.
#[derive(Debug)]
pub struct MarianTranslator<P = HuggingFace> {
    /// Provider running the models
    provider: P,
    /// Model for the Romance -> English direction
    to_english_model: String,
    /// Model for the English -> Romance direction
    from_english_model: String,
}

impl<P> MarianTranslator<P> {
    /// Create a new translator around a provider and the two model ids
    pub fn new(
        provider: P,
        to_english_model: impl Into<String>,
        from_english_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            to_english_model: to_english_model.into(),
            from_english_model: from_english_model.into(),
        }
    }
}

#[async_trait]
impl<P> Translator for MarianTranslator<P>
where
    P: Provider<Request = InferenceRequest, Response = Vec<InferenceOutput>>,
{
    async fn translate(
        &self,
        text: &str,
        direction: TranslationDirection,
    ) -> Result<String, ProviderError> {
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyInput);
        }

        let model = match direction {
            TranslationDirection::ToEnglish => &self.to_english_model,
            TranslationDirection::FromEnglish => &self.from_english_model,
        };

        let request = InferenceRequest::new(model, text);
        let response = self.provider.complete(request).await?;
        let translated = P::extract_text(&response);
        debug!(
            "Model '{}' translated {} characters {}",
            model,
            text.len(),
            direction
        );

        Ok(translated.trim().to_string())
    }

    fn tag_target_language(&self, code: &str, text: &str) -> String {
        // Marian multi-target models read the output language from a
        // >>code<< prefix on the source text
        format!(">>{}<< {}", code, text)
    }
}
