/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use polysum::app_config::{Config, LogLevel};

use crate::common::create_temp_dir;

/// Defaults mirror the models and bounds the pipeline was built around
#[test]
fn test_default_config_shouldUseKnownModelsAndBounds() {
    let config = Config::default();

    assert_eq!(config.provider.endpoint, "https://api-inference.huggingface.co");
    assert!(config.provider.api_key.is_empty());
    assert_eq!(config.models.summarization, "facebook/bart-large-cnn");
    assert_eq!(
        config.models.translation_to_english,
        "Helsinki-NLP/opus-mt-ROMANCE-en"
    );
    assert_eq!(
        config.models.translation_from_english,
        "Helsinki-NLP/opus-mt-en-ROMANCE"
    );
    assert_eq!(config.pipeline.input_max_length, 1024);
    assert_eq!(config.pipeline.sum_max_length, 200);
    assert_eq!(config.pipeline.sum_min_length, 20);
    assert_eq!(config.pipeline.num_beams, 2);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_default_config_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

/// An empty JSON object fills in every default
#[test]
fn test_config_fromEmptyJson_shouldApplyDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.models.summarization, "facebook/bart-large-cnn");
    assert_eq!(config.pipeline.num_beams, 2);
}

/// Partial config files keep their values and default the rest
#[test]
fn test_config_fromPartialJson_shouldMergeWithDefaults() {
    let json = r#"{
        "provider": { "endpoint": "http://localhost:8080" },
        "pipeline": { "num_beams": 4 },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.provider.endpoint, "http://localhost:8080");
    assert_eq!(config.provider.timeout_secs, 120);
    assert_eq!(config.pipeline.num_beams, 4);
    assert_eq!(config.pipeline.sum_max_length, 200);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = Config::default();
    config.provider.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyModel_shouldFail() {
    let mut config = Config::default();
    config.models.summarization = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withBadLengthBounds_shouldFail() {
    let mut config = Config::default();
    config.pipeline.sum_min_length = 200;
    config.pipeline.sum_max_length = 200;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.pipeline.num_beams = 0;
    assert!(config.validate().is_err());
}

/// Saving and loading round-trips the configuration
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.provider.endpoint = "http://localhost:9000".to_string();
    config.pipeline.sum_max_length = 150;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.provider.endpoint, "http://localhost:9000");
    assert_eq!(loaded.pipeline.sum_max_length, 150);
    Ok(())
}

#[test]
fn test_config_fromMissingFile_shouldFail() {
    assert!(Config::from_file("/nonexistent/conf.json").is_err());
}

#[test]
fn test_log_level_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
