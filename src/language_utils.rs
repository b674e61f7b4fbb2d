use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module owns the set of languages the summarization pipeline can
/// serve and provides helpers for validating and normalizing ISO 639
/// language codes.
/// Languages the pipeline supports, as ISO 639-1 codes.
///
/// English is the pivot; the other six are the Romance languages covered by
/// the translation models.
pub const SUPPORTED_LANGUAGES: [&str; 7] = ["en", "ca", "es", "fr", "it", "pt", "ro"];

/// Check whether a language code is in the supported set
pub fn is_supported(code: &str) -> bool {
    let normalized = code.trim().to_lowercase();
    SUPPORTED_LANGUAGES.contains(&normalized.as_str())
}

/// The supported set as a comma-separated list, for error messages
pub fn supported_languages_list() -> String {
    SUPPORTED_LANGUAGES.join(", ")
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
/// Falls back to ISO 639-2/T if no ISO 639-1 code exists
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's already a 2-letter code, validate it
    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
    }
    // If it's a 3-letter code, try to find the corresponding 2-letter code
    else if normalized_code.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized_code) {
            return Ok(match lang.to_639_1() {
                Some(part1) => part1.to_string(),
                None => normalized_code,
            });
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English name of a language from its ISO 639 code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    let language = if normalized_code.len() == 2 {
        Language::from_639_1(&normalized_code)
    } else if normalized_code.len() == 3 {
        Language::from_639_3(&normalized_code)
    } else {
        None
    };

    language
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}
