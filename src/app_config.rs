use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Inference endpoint settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Model identifiers for the three capabilities
    #[serde(default)]
    pub models: ModelsConfig,

    /// Default processing parameters for summary requests
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Inference endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Base URL of the inference endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key, empty for unauthenticated local endpoints
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds; model inference is slow on cold starts
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Model identifiers served by the inference endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelsConfig {
    /// Abstractive summarization model
    #[serde(default = "default_summarization_model")]
    pub summarization: String,

    /// Romance -> English translation model
    #[serde(default = "default_to_english_model")]
    pub translation_to_english: String,

    /// English -> Romance translation model
    #[serde(default = "default_from_english_model")]
    pub translation_from_english: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            summarization: default_summarization_model(),
            translation_to_english: default_to_english_model(),
            translation_from_english: default_from_english_model(),
        }
    }
}

/// Default processing parameters applied to every request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Maximum number of input characters to process
    #[serde(default = "default_input_max_length")]
    pub input_max_length: usize,

    /// Maximum length of the generated summary, in tokens
    #[serde(default = "default_sum_max_length")]
    pub sum_max_length: usize,

    /// Minimum length of the generated summary, in tokens
    #[serde(default = "default_sum_min_length")]
    pub sum_min_length: usize,

    /// Number of beams for beam search decoding
    #[serde(default = "default_num_beams")]
    pub num_beams: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_max_length: default_input_max_length(),
            sum_max_length: default_sum_max_length(),
            sum_min_length: default_sum_min_length(),
            num_beams: default_num_beams(),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_summarization_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_to_english_model() -> String {
    "Helsinki-NLP/opus-mt-ROMANCE-en".to_string()
}

fn default_from_english_model() -> String {
    "Helsinki-NLP/opus-mt-en-ROMANCE".to_string()
}

fn default_input_max_length() -> usize {
    1024
}

fn default_sum_max_length() -> usize {
    200
}

fn default_sum_min_length() -> usize {
    20
}

fn default_num_beams() -> usize {
    2
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read config file {:?}: {}", path.as_ref(), e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path.as_ref(), e))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config to JSON: {}", e))?;
        std::fs::write(&path, content)
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.provider.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.provider.endpoint, e))?;

        if self.models.summarization.trim().is_empty() {
            return Err(anyhow!("Summarization model must not be empty"));
        }
        if self.models.translation_to_english.trim().is_empty()
            || self.models.translation_from_english.trim().is_empty()
        {
            return Err(anyhow!("Translation models must not be empty"));
        }

        // The per-request validator enforces the same rules; catching bad
        // defaults here keeps every later request from failing identically
        if self.pipeline.input_max_length == 0 {
            return Err(anyhow!("input_max_length must be positive"));
        }
        if self.pipeline.sum_min_length == 0 {
            return Err(anyhow!("sum_min_length must be positive"));
        }
        if self.pipeline.sum_min_length >= self.pipeline.sum_max_length {
            return Err(anyhow!(
                "sum_max_length must be greater than sum_min_length"
            ));
        }
        if self.pipeline.num_beams == 0 {
            return Err(anyhow!("num_beams must be positive"));
        }

        Ok(())
    }
}
