use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

/// Document extensions the controller picks up when scanning a directory
const DOCUMENT_EXTENSIONS: [&str; 3] = ["pdf", "txt", "md"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a generated summary
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str(".summary.txt");

        match input_file.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        }
    }

    /// Find all summarizable documents under a directory
    pub fn find_documents<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    let ext = ext.to_string_lossy().to_lowercase();
                    if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
                        // Skip our own output files
                        if !path.to_string_lossy().ends_with(".summary.txt") {
                            result.push(path.to_path_buf());
                        }
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Detect whether a file is a PDF or a plain-text document
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<DocumentType> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("File does not exist: {:?}", path));
        }

        // Check file extension first
        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();

            if ext_str == "pdf" {
                return Ok(DocumentType::Pdf);
            }

            if ext_str == "txt" || ext_str == "md" {
                return Ok(DocumentType::Text);
            }
        }

        // Fall back to sniffing the file header
        let mut header = [0u8; 5];
        let read = fs::File::open(path)
            .and_then(|mut f| f.read(&mut header))
            .with_context(|| format!("Failed to read file header: {:?}", path))?;

        if read >= 5 && &header[..5] == b"%PDF-" {
            return Ok(DocumentType::Pdf);
        }

        // Anything that decodes as UTF-8 is treated as plain text
        if fs::read_to_string(path).is_ok() {
            return Ok(DocumentType::Text);
        }

        Ok(DocumentType::Unknown)
    }
}

/// Enum representing different document types
#[derive(Debug, PartialEq, Eq)]
pub enum DocumentType {
    /// PDF document
    Pdf,
    /// Plain-text document
    Text,
    /// Unknown file type
    Unknown,
}
