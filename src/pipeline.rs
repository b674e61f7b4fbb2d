/*!
 * The summarization pipeline orchestrator.
 *
 * One entry point, [`Pipeline::run`]: validate the request, identify the
 * input language, then either summarize English text directly or route a
 * supported Romance language through the English pivot (translate in,
 * summarize, translate back). Every stage boundary is failure-checked and
 * every failure is terminal for the request.
 */

use std::sync::Arc;

use log::{debug, info};

use crate::detection::LanguageDetector;
use crate::errors::PipelineError;
use crate::language_utils;
use crate::summarization::{Summarizer, SummaryOptions};
use crate::translation::{TranslationDirection, Translator};
use crate::validation;

/// One summarization request.
///
/// Owned and consumed by the pipeline for the duration of a single call;
/// nothing outlives the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    /// The source text to summarize
    pub text: String,
    /// Maximum number of input characters to process
    pub input_max_length: usize,
    /// Maximum length of the generated summary, in tokens
    pub sum_max_length: usize,
    /// Minimum length of the generated summary, in tokens
    pub sum_min_length: usize,
    /// Number of beams for beam search decoding
    pub num_beams: usize,
}

impl SummaryRequest {
    /// Create a request with the default processing parameters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            input_max_length: 1024,
            sum_max_length: 200,
            sum_min_length: 20,
            num_beams: 2,
        }
    }
}

/// Successful pipeline outcome: a summary in the language of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    /// Detected language of the input text, ISO 639-1
    pub language: String,
    /// The generated summary, non-empty and trimmed
    pub summary: String,
}

/// Statistics about one completed summarization
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingStats {
    /// Characters in the input text
    pub input_length: usize,
    /// Words in the input text
    pub input_words: usize,
    /// Characters in the summary
    pub summary_length: usize,
    /// Words in the summary
    pub summary_words: usize,
    /// Summary length relative to input length
    pub compression_ratio: f64,
    /// Detected language of the input
    pub language: String,
}

impl ProcessingStats {
    /// Compute statistics for a completed run
    pub fn new(input: &str, result: &SummaryResult) -> Self {
        let input_length = input.chars().count();
        let summary_length = result.summary.chars().count();
        Self {
            input_length,
            input_words: input.split_whitespace().count(),
            summary_length,
            summary_words: result.summary.split_whitespace().count(),
            compression_ratio: if input_length > 0 {
                summary_length as f64 / input_length as f64
            } else {
                0.0
            },
            language: result.language.clone(),
        }
    }

    /// One-line loggable summary of the statistics
    pub fn summary(&self) -> String {
        format!(
            "Summarized {} characters ({} words) into {} characters ({} words), ratio {:.2}, language '{}'",
            self.input_length,
            self.input_words,
            self.summary_length,
            self.summary_words,
            self.compression_ratio,
            self.language
        )
    }
}

/// The pipeline orchestrator.
///
/// Holds the three capability collaborators and no other state: every
/// invocation of [`run`](Pipeline::run) is independent, so one pipeline
/// instance serves any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Pipeline {
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
    summarizer: Arc<dyn Summarizer>,
}

impl Pipeline {
    /// Create a pipeline from capability handles built once at startup
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            detector,
            translator,
            summarizer,
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// Produces exactly one outcome: a [`SummaryResult`] whose summary is in
    /// the language of the input, or a [`PipelineError`] attributing the
    /// failure to one stage. There are no retries and no partial results; in
    /// particular an English intermediate summary is never returned when the
    /// back-translation for a Romance-language input fails.
    pub async fn run(&self, request: &SummaryRequest) -> Result<SummaryResult, PipelineError> {
        validation::validate_request(request)?;

        let text = truncate_chars(&request.text, request.input_max_length);
        if text.len() < request.text.len() {
            info!(
                "Input text too long, using the first {} characters only",
                request.input_max_length
            );
        }

        let language = self
            .detector
            .detect(text)
            .ok_or(PipelineError::DetectionFailure)?;
        debug!("Detected language: {}", language);

        if !language_utils::is_supported(&language) {
            return Err(PipelineError::UnsupportedLanguage { code: language });
        }

        let options = SummaryOptions {
            min_length: request.sum_min_length,
            max_length: request.sum_max_length,
            num_beams: request.num_beams,
        };

        let summary = if language == "en" {
            self.summarize_direct(text, &options).await?
        } else {
            self.summarize_via_pivot(text, &language, &options).await?
        };

        Ok(SummaryResult { language, summary })
    }

    /// English input: summarize without any translation
    async fn summarize_direct(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, PipelineError> {
        info!("Processing English text directly");

        let summary = self
            .summarizer
            .summarize(text, options)
            .await
            .map_err(|e| PipelineError::Summarization {
                reason: e.to_string(),
            })?;

        require_non_blank(summary, || PipelineError::Summarization {
            reason: "summarizer returned empty output".to_string(),
        })
    }

    /// Non-English input: translate to English, summarize, translate back
    async fn summarize_via_pivot(
        &self,
        text: &str,
        language: &str,
        options: &SummaryOptions,
    ) -> Result<String, PipelineError> {
        info!("Processing '{}' text through the English pivot", language);

        let english_text = self
            .translator
            .translate(text, TranslationDirection::ToEnglish)
            .await
            .map_err(|e| PipelineError::TranslateIn {
                reason: e.to_string(),
            })?;
        let english_text = require_non_blank(english_text, || PipelineError::TranslateIn {
            reason: "translator returned empty output".to_string(),
        })?;
        debug!(
            "Translated input into {} characters of English",
            english_text.len()
        );

        let english_summary = self
            .summarizer
            .summarize(&english_text, options)
            .await
            .map_err(|e| PipelineError::Summarization {
                reason: e.to_string(),
            })?;
        let english_summary = require_non_blank(english_summary, || PipelineError::Summarization {
            reason: "summarizer returned empty output".to_string(),
        })?;

        // The from-English direction serves several Romance languages, so the
        // summary must carry an explicit target marker before going back
        let tagged = self
            .translator
            .tag_target_language(language, &english_summary);
        let summary = self
            .translator
            .translate(&tagged, TranslationDirection::FromEnglish)
            .await
            .map_err(|e| PipelineError::TranslateOut {
                language: language.to_string(),
                reason: e.to_string(),
            })?;

        require_non_blank(summary, || PipelineError::TranslateOut {
            language: language.to_string(),
            reason: "translator returned empty output".to_string(),
        })
    }
}

/// Cut text to its first `max_chars` characters, respecting char boundaries
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Reject blank stage output, otherwise pass the trimmed text along
fn require_non_blank(
    text: String,
    error: impl FnOnce() -> PipelineError,
) -> Result<String, PipelineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(error())
    } else {
        Ok(trimmed.to_string())
    }
}
