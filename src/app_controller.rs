use anyhow::{Context, Result, anyhow};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

use crate::app_config::Config;
use crate::detection::WhatlangDetector;
use crate::file_utils::{DocumentType, FileManager};
use crate::language_utils;
use crate::pdf_extractor;
use crate::pipeline::{Pipeline, ProcessingStats, SummaryRequest, SummaryResult};
use crate::preprocessing;
use crate::providers::huggingface::HuggingFace;
use crate::summarization::BartSummarizer;
use crate::translation::MarianTranslator;

// @module: Application controller for document summarization

/// Maximum number of documents processed concurrently
const MAX_CONCURRENT_DOCUMENTS: usize = 4;

/// Main application controller for document summarization.
///
/// Builds the capability objects once and reuses them for every document;
/// the pipeline itself is stateless, so documents can be processed
/// concurrently.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: The summarization pipeline shared by all documents
    pipeline: Pipeline,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config
            .validate()
            .context("Configuration validation failed")?;

        // One HTTP client serves both provider-backed capabilities
        let provider = HuggingFace::new(
            &config.provider.endpoint,
            &config.provider.api_key,
            config.provider.timeout_secs,
        );

        let detector = WhatlangDetector::new();
        let translator = MarianTranslator::new(
            provider.clone(),
            &config.models.translation_to_english,
            &config.models.translation_from_english,
        );
        let summarizer = BartSummarizer::new(provider, &config.models.summarization);

        let pipeline = Pipeline::new(
            Arc::new(detector),
            Arc::new(translator),
            Arc::new(summarizer),
        );

        Ok(Self { config, pipeline })
    }

    /// Create a controller around an externally built pipeline.
    ///
    /// Lets tests substitute stub capabilities without touching the
    /// filesystem workflow.
    pub fn with_pipeline(config: Config, pipeline: Pipeline) -> Self {
        Self { config, pipeline }
    }

    /// The pipeline this controller runs documents through
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Summarize one file, or every supported document under a directory
    pub async fn run(&self, input_path: PathBuf, force_overwrite: bool) -> Result<()> {
        if FileManager::dir_exists(&input_path) {
            self.run_folder(input_path, force_overwrite).await
        } else if FileManager::file_exists(&input_path) {
            let start_time = Instant::now();
            if let Some(result) = self.process_file(&input_path, force_overwrite).await? {
                info!(
                    "Processed {:?} in {:.1}s",
                    input_path,
                    start_time.elapsed().as_secs_f64()
                );
                let language = language_utils::get_language_name(&result.language)
                    .unwrap_or_else(|_| result.language.clone());
                println!("[{}] {}", language, result.summary);
            }
            Ok(())
        } else {
            Err(anyhow!("Input path does not exist: {:?}", input_path))
        }
    }

    /// Process every supported document under a directory
    async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let files = FileManager::find_documents(&input_dir)?;
        if files.is_empty() {
            warn!("No supported documents found in {:?}", input_dir);
            return Ok(());
        }

        info!("Found {} documents to process", files.len());

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_DOCUMENTS));

        let tasks = files.iter().map(|file| {
            let semaphore = Arc::clone(&semaphore);
            let progress = progress.clone();
            async move {
                // Acquire a permit from the semaphore to limit concurrent requests
                let _permit = semaphore
                    .acquire()
                    .await
                    .expect("Semaphore should not be closed");

                let result = self.process_file(file, force_overwrite).await;
                progress.inc(1);
                (file.clone(), result)
            }
        });

        let outcomes = join_all(tasks).await;
        progress.finish_and_clear();

        let mut processed = 0usize;
        let mut skipped = 0usize;
        let mut failures = 0usize;
        for (file, outcome) in outcomes {
            match outcome {
                Ok(Some(_)) => processed += 1,
                Ok(None) => skipped += 1,
                Err(e) => {
                    failures += 1;
                    warn!("Failed to process {:?}: {}", file, e);
                }
            }
        }

        info!(
            "Finished: {} summarized, {} skipped, {} failed",
            processed, skipped, failures
        );

        if failures > 0 && processed == 0 && skipped == 0 {
            return Err(anyhow!("All {} documents failed to process", failures));
        }

        Ok(())
    }

    /// Summarize one document and write the result next to it.
    ///
    /// Returns `Ok(None)` when an existing summary was kept.
    async fn process_file(
        &self,
        input_file: &Path,
        force_overwrite: bool,
    ) -> Result<Option<SummaryResult>> {
        let output_path = FileManager::generate_output_path(input_file);
        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, summary already exists (use -f to force overwrite)",
                input_file
            );
            return Ok(None);
        }

        let text = self.load_document(input_file)?;
        if text.trim().is_empty() {
            return Err(anyhow!("No text could be extracted from {:?}", input_file));
        }

        let preview: String = preprocessing::normalize_whitespace(&text)
            .chars()
            .take(80)
            .collect();
        debug!("Loaded {:?}: {}...", input_file, preview);

        let request = self.build_request(text);
        let result = self
            .pipeline
            .run(&request)
            .await
            .map_err(|e| anyhow!("{} (stage: {})", e, e.stage()))?;

        let stats = ProcessingStats::new(&request.text, &result);
        info!("{:?}: {}", input_file, stats.summary());

        FileManager::write_to_file(&output_path, &result.summary)?;
        info!("Summary written to {:?}", output_path);

        Ok(Some(result))
    }

    /// Extract and clean the text content of a document
    pub fn load_document(&self, path: &Path) -> Result<String> {
        let raw = match FileManager::detect_file_type(path)? {
            DocumentType::Pdf => pdf_extractor::extract_text_from_pdf(path)?,
            DocumentType::Text => FileManager::read_to_string(path)?,
            DocumentType::Unknown => {
                return Err(anyhow!("Unsupported document type: {:?}", path));
            }
        };

        Ok(preprocessing::clean_extracted_text(&raw))
    }

    /// Build a summary request from the configured defaults
    fn build_request(&self, text: String) -> SummaryRequest {
        let defaults = &self.config.pipeline;
        SummaryRequest {
            text,
            input_max_length: defaults.input_max_length,
            sum_max_length: defaults.sum_max_length,
            sum_min_length: defaults.sum_min_length,
            num_beams: defaults.num_beams,
        }
    }
}
