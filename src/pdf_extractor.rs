/*!
 * PDF text extraction.
 *
 * Thin wrapper around the pure-Rust pdf-extract crate. Extraction quality
 * varies by document (text layer vs scanned images); callers should treat an
 * empty result as "no text layer", not as an error.
 */

use std::path::Path;

use anyhow::{Result, anyhow};
use log::debug;

/// Extract the text content of a PDF file
pub fn extract_text_from_pdf<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = pdf_extract::extract_text(path)
        .map_err(|e| anyhow!("Failed to extract text from PDF {:?}: {}", path, e))?;

    debug!("Extracted {} characters from {:?}", text.len(), path);
    Ok(text)
}

/// Extract the text content of an in-memory PDF body
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| anyhow!("Failed to extract text from PDF buffer: {}", e))
}
