/*!
 * Error types for the polysum application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

use crate::language_utils;

/// Errors that can occur when talking to an inference provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// A capability was handed empty input; callers must never do that
    #[error("Input text is empty")]
    EmptyInput,
}

/// Pipeline stage used to attribute a failure to one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Request parameter validation, before any capability call
    Validation,
    /// Language identification of the input text
    Detection,
    /// Detected language outside the supported set
    UnsupportedLanguage,
    /// Translation of the input toward the English pivot
    TranslateIn,
    /// Abstractive summarization of the English text
    Summarization,
    /// Translation of the summary back from the English pivot
    TranslateOut,
}

impl Stage {
    /// Short machine-readable stage tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validation => "validation",
            Stage::Detection => "detection",
            Stage::UnsupportedLanguage => "unsupported-language",
            Stage::TranslateIn => "translate-in",
            Stage::Summarization => "summarization",
            Stage::TranslateOut => "translate-out",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal failures of the summarization pipeline.
///
/// Every failure is attributable to exactly one [`Stage`] and carries a
/// human-readable message; none of them is retryable.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Malformed request, rejected before any capability call
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The detector could not identify the input language
    #[error("Unable to detect the language of the input text")]
    DetectionFailure,

    /// The detected language is outside the supported set
    #[error("Language '{code}' is not supported. Supported languages: {}", language_utils::supported_languages_list())]
    UnsupportedLanguage {
        /// The offending language code
        code: String,
    },

    /// Translation toward the English pivot produced no usable output
    #[error("Translation to English failed: {reason}")]
    TranslateIn {
        /// What the translation capability reported
        reason: String,
    },

    /// The summarizer produced no usable output
    #[error("Summary generation failed: {reason}")]
    Summarization {
        /// What the summarization capability reported
        reason: String,
    },

    /// Translation back from the English pivot produced no usable output
    #[error("Translation back to '{language}' failed: {reason}")]
    TranslateOut {
        /// The requested target language
        language: String,
        /// What the translation capability reported
        reason: String,
    },
}

impl PipelineError {
    /// The pipeline stage this failure is attributed to
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Validation(_) => Stage::Validation,
            PipelineError::DetectionFailure => Stage::Detection,
            PipelineError::UnsupportedLanguage { .. } => Stage::UnsupportedLanguage,
            PipelineError::TranslateIn { .. } => Stage::TranslateIn,
            PipelineError::Summarization { .. } => Stage::Summarization,
            PipelineError::TranslateOut { .. } => Stage::TranslateOut,
        }
    }
}
