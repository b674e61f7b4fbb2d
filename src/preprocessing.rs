/*!
 * Text normalization for extracted documents.
 *
 * PDF extraction leaves hard line wraps, hyphenated word breaks and stray
 * control characters in the text. The cleanup here undoes those artifacts
 * without touching the wording itself, so the downstream models see the text
 * the author wrote.
 */

use once_cell::sync::Lazy;
use regex::Regex;

static HYPHEN_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\p{L})-[ \t]*\n[ \t]*(\p{L})").unwrap());

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n[\s]*").unwrap());

static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\u{A0}]+").unwrap());

/// Clean text extracted from a document for downstream processing.
///
/// Steps, in order:
/// 1. normalize line endings and drop control characters
/// 2. re-join words hyphenated across line breaks
/// 3. unwrap hard line wraps inside paragraphs, keeping paragraph breaks
/// 4. collapse runs of horizontal whitespace
pub fn clean_extracted_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let text: String = text
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    let text = HYPHEN_BREAK.replace_all(&text, "$1$2");

    // Mark real paragraph breaks before unwrapping the remaining newlines
    let text = PARAGRAPH_BREAK.replace_all(&text, "\u{1}");
    let text = text.replace('\n', " ").replace('\u{1}', "\n\n");

    let text = HORIZONTAL_SPACE.replace_all(&text, " ");

    text.trim().to_string()
}

/// Collapse all whitespace runs into single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_space = true;
        } else {
            if in_space && !out.is_empty() {
                out.push(' ');
            }
            in_space = false;
            out.push(c);
        }
    }
    out
}
