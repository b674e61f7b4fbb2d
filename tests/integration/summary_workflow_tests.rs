/*!
 * End-to-end document workflow tests
 *
 * The controller runs against a pipeline built from stub capabilities, so
 * the whole file workflow (discovery, extraction, cleanup, output writing,
 * overwrite rules) is exercised without any model traffic.
 */

use anyhow::Result;
use std::sync::Arc;

use polysum::app_config::Config;
use polysum::app_controller::Controller;
use polysum::file_utils::FileManager;
use polysum::pipeline::Pipeline;

use crate::common::mock_capabilities::{StubDetector, StubSummarizer, StubTranslator};
use crate::common::{ENGLISH_TEXT, create_temp_dir, create_test_file};

/// A controller whose pipeline always produces the given English summary
fn stub_controller(summary: &str) -> Controller {
    let pipeline = Pipeline::new(
        Arc::new(StubDetector::detecting("en")),
        Arc::new(StubTranslator::identity()),
        Arc::new(StubSummarizer::fixed(summary)),
    );
    Controller::with_pipeline(Config::default(), pipeline)
}

#[tokio::test]
async fn test_run_withTextFile_shouldWriteSummarySidecar() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "article.txt", ENGLISH_TEXT)?;

    let controller = stub_controller("A concise stub summary.");
    controller.run(input, false).await?;

    let output = dir.join("article.summary.txt");
    assert!(output.exists());
    assert_eq!(
        FileManager::read_to_string(&output)?,
        "A concise stub summary."
    );
    Ok(())
}

#[tokio::test]
async fn test_run_withExistingSummary_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "article.txt", ENGLISH_TEXT)?;
    let output = create_test_file(&dir, "article.summary.txt", "previous summary")?;

    let controller = stub_controller("A fresh stub summary.");

    // Without force the existing summary is kept
    controller.run(input.clone(), false).await?;
    assert_eq!(FileManager::read_to_string(&output)?, "previous summary");

    // With force it is replaced
    controller.run(input, true).await?;
    assert_eq!(FileManager::read_to_string(&output)?, "A fresh stub summary.");
    Ok(())
}

#[tokio::test]
async fn test_run_withDirectory_shouldProcessEveryDocument() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    create_test_file(&dir, "first.txt", ENGLISH_TEXT)?;
    create_test_file(&dir, "second.md", ENGLISH_TEXT)?;
    create_test_file(&dir, "ignored.png", "binary-ish")?;

    let controller = stub_controller("A concise stub summary.");
    controller.run(dir.clone(), false).await?;

    assert!(dir.join("first.summary.txt").exists());
    assert!(dir.join("second.summary.txt").exists());
    assert!(!dir.join("ignored.summary.txt").exists());
    Ok(())
}

#[tokio::test]
async fn test_run_withMissingPath_shouldFail() {
    let controller = stub_controller("unused");
    let result = controller
        .run("/nonexistent/input.txt".into(), false)
        .await;
    assert!(result.is_err());
}

/// Document loading applies the extraction cleanup
#[test]
fn test_load_document_shouldCleanExtractedText() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "wrapped.txt", "A line that\nwraps over two lines.")?;

    let controller = stub_controller("unused");
    let text = controller.load_document(&input)?;

    assert_eq!(text, "A line that wraps over two lines.");
    Ok(())
}

/// Invalid configuration is rejected when the controller is built
#[test]
fn test_with_config_withBadEndpoint_shouldFail() {
    let mut config = Config::default();
    config.provider.endpoint = "definitely not a url".to_string();
    assert!(Controller::with_config(config).is_err());
}

/// A well-formed configuration constructs the full capability stack
#[test]
fn test_with_config_withDefaults_shouldBuildController() {
    let controller = Controller::with_config(Config::default());
    assert!(controller.is_ok());
}
