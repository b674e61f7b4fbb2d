/*!
 * # polysum - Multilingual Text and PDF Summarization
 *
 * A Rust library for summarizing documents in their original language.
 *
 * ## Features
 *
 * - Extract text from PDF and plain-text documents
 * - Detect the input language automatically
 * - Summarize English text directly with an abstractive model
 * - Pivot supported Romance languages through English:
 *   translate, summarize, translate back
 * - Configurable summary length and beam search parameters
 * - Batch processing of whole directories
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `pipeline`: The summarization pipeline orchestrator
 * - `validation`: Request parameter validation
 * - `detection`: Language identification
 * - `translation`: Romance/English translation capability
 * - `summarization`: Abstractive summarization capability
 * - `providers`: Client implementations for inference endpoints:
 *   - `providers::huggingface`: Hugging Face style inference API client
 *   - `providers::mock`: Mock provider for tests
 * - `pdf_extractor`: PDF text extraction
 * - `preprocessing`: Text normalization and cleanup
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod detection;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pdf_extractor;
pub mod pipeline;
pub mod preprocessing;
pub mod providers;
pub mod summarization;
pub mod translation;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use detection::LanguageDetector;
pub use errors::{PipelineError, ProviderError, Stage};
pub use pipeline::{Pipeline, SummaryRequest, SummaryResult};
pub use summarization::{Summarizer, SummaryOptions};
pub use translation::{TranslationDirection, Translator};
