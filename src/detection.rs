/*!
 * Language identification for input text.
 *
 * The pipeline only needs a best-guess language code, so the capability is a
 * narrow trait that deterministic classifiers and test stubs can both
 * implement.
 */

use std::fmt::Debug;

use log::{debug, warn};

use crate::language_utils;

/// Capability for identifying the language of a text.
///
/// Implementations must be pure functions of their input: the same text
/// always yields the same answer.
pub trait LanguageDetector: Send + Sync + Debug {
    /// Detect the language of the given text.
    ///
    /// Returns a best-guess ISO 639-1 code (ISO 639-2/T when no two-letter
    /// code exists), or `None` when no language can be identified. The result
    /// is a guess about the text, not a statement about what the pipeline
    /// supports; callers apply their own acceptance rules.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Trigram-based detector backed by the whatlang classifier.
///
/// whatlang is deterministic and needs no model files, which keeps detection
/// reproducible across runs and machines.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            warn!("Empty text provided for language detection");
            return None;
        }

        let info = whatlang::detect(text)?;
        let part3 = info.lang().code();

        // whatlang reports ISO 639-3; the rest of the system speaks 639-1
        let code = language_utils::normalize_to_part1_or_part2t(part3)
            .unwrap_or_else(|_| part3.to_string());

        debug!(
            "Detected language '{}' (confidence {:.2})",
            code,
            info.confidence()
        );
        Some(code)
    }
}
