/*!
 * Stub capability implementations for pipeline tests
 *
 * Each stub records how it was called (call counts, last inputs) so tests
 * can verify not just outcomes but which capabilities the pipeline touched.
 */

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use polysum::detection::LanguageDetector;
use polysum::errors::ProviderError;
use polysum::summarization::{Summarizer, SummaryOptions};
use polysum::translation::{TranslationDirection, Translator};

/// Detector stub returning a fixed answer
#[derive(Debug)]
pub struct StubDetector {
    answer: Option<String>,
    call_count: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl StubDetector {
    /// A detector that always reports the given language code
    pub fn detecting(code: &str) -> Self {
        Self {
            answer: Some(code.to_string()),
            call_count: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    /// A detector that never identifies a language
    pub fn undetected() -> Self {
        Self {
            answer: None,
            call_count: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The text handed to the most recent detect call
    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

impl LanguageDetector for StubDetector {
    fn detect(&self, text: &str) -> Option<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        self.answer.clone()
    }
}

/// What a stub translator returns for one direction
#[derive(Debug, Clone)]
enum StubOutput {
    /// Return the input text unchanged
    Echo,
    /// Return a fixed text
    Fixed(String),
    /// Fail with a provider error
    Error,
}

impl StubOutput {
    fn produce(&self, text: &str) -> Result<String, ProviderError> {
        match self {
            StubOutput::Echo => Ok(text.to_string()),
            StubOutput::Fixed(fixed) => Ok(fixed.clone()),
            StubOutput::Error => Err(ProviderError::RequestFailed(
                "stub set to fail".to_string(),
            )),
        }
    }
}

/// Translator stub with scripted outputs per direction.
///
/// Tagging is the identity and records the requested language, so tests can
/// assert the pipeline asked for a target language without the stub output
/// being polluted by marker syntax.
#[derive(Debug)]
pub struct StubTranslator {
    to_english: StubOutput,
    from_english: StubOutput,
    to_english_calls: AtomicUsize,
    from_english_calls: AtomicUsize,
    last_from_english_input: Mutex<Option<String>>,
    tagged_languages: Mutex<Vec<String>>,
}

impl StubTranslator {
    fn with_outputs(to_english: StubOutput, from_english: StubOutput) -> Self {
        Self {
            to_english,
            from_english,
            to_english_calls: AtomicUsize::new(0),
            from_english_calls: AtomicUsize::new(0),
            last_from_english_input: Mutex::new(None),
            tagged_languages: Mutex::new(Vec::new()),
        }
    }

    /// Both directions return their input unchanged
    pub fn identity() -> Self {
        Self::with_outputs(StubOutput::Echo, StubOutput::Echo)
    }

    /// Each direction returns a fixed text
    pub fn scripted(to_english: &str, from_english: &str) -> Self {
        Self::with_outputs(
            StubOutput::Fixed(to_english.to_string()),
            StubOutput::Fixed(from_english.to_string()),
        )
    }

    /// The to-English direction returns blank output
    pub fn blank_to_english() -> Self {
        Self::with_outputs(StubOutput::Fixed(String::new()), StubOutput::Echo)
    }

    /// The from-English direction returns blank output
    pub fn blank_from_english(to_english: &str) -> Self {
        Self::with_outputs(
            StubOutput::Fixed(to_english.to_string()),
            StubOutput::Fixed(String::new()),
        )
    }

    /// Both directions fail with a provider error
    pub fn failing() -> Self {
        Self::with_outputs(StubOutput::Error, StubOutput::Error)
    }

    pub fn to_english_calls(&self) -> usize {
        self.to_english_calls.load(Ordering::SeqCst)
    }

    pub fn from_english_calls(&self) -> usize {
        self.from_english_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.to_english_calls() + self.from_english_calls()
    }

    /// The text handed to the most recent from-English call
    pub fn last_from_english_input(&self) -> Option<String> {
        self.last_from_english_input.lock().unwrap().clone()
    }

    /// Every language code the pipeline asked to tag
    pub fn tagged_languages(&self) -> Vec<String> {
        self.tagged_languages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        direction: TranslationDirection,
    ) -> Result<String, ProviderError> {
        match direction {
            TranslationDirection::ToEnglish => {
                self.to_english_calls.fetch_add(1, Ordering::SeqCst);
                self.to_english.produce(text)
            }
            TranslationDirection::FromEnglish => {
                self.from_english_calls.fetch_add(1, Ordering::SeqCst);
                *self.last_from_english_input.lock().unwrap() = Some(text.to_string());
                self.from_english.produce(text)
            }
        }
    }

    fn tag_target_language(&self, code: &str, text: &str) -> String {
        self.tagged_languages.lock().unwrap().push(code.to_string());
        text.to_string()
    }
}

/// Summarizer stub with a scripted output
#[derive(Debug)]
pub struct StubSummarizer {
    output: StubOutput,
    call_count: AtomicUsize,
    last_text: Mutex<Option<String>>,
    last_options: Mutex<Option<SummaryOptions>>,
}

impl StubSummarizer {
    fn with_output(output: StubOutput) -> Self {
        Self {
            output,
            call_count: AtomicUsize::new(0),
            last_text: Mutex::new(None),
            last_options: Mutex::new(None),
        }
    }

    /// Return the input text unchanged
    pub fn echoing() -> Self {
        Self::with_output(StubOutput::Echo)
    }

    /// Return a fixed summary
    pub fn fixed(summary: &str) -> Self {
        Self::with_output(StubOutput::Fixed(summary.to_string()))
    }

    /// Return blank output
    pub fn blank() -> Self {
        Self::with_output(StubOutput::Fixed(String::new()))
    }

    /// Fail with a provider error
    pub fn failing() -> Self {
        Self::with_output(StubOutput::Error)
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The text handed to the most recent summarize call
    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }

    /// The options handed to the most recent summarize call
    pub fn last_options(&self) -> Option<SummaryOptions> {
        self.last_options.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        *self.last_options.lock().unwrap() = Some(options.clone());
        self.output.produce(text)
    }
}
