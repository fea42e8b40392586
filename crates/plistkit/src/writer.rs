//! Document persistence
//!
//! Writes and reads a [`Document`] as TOML, or as JSON when the path has a
//! `.json` extension. Writes go to a temporary file first and are renamed
//! into place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::PlistError;
use crate::value::Document;

/// On-disk encoding of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick a format from the file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }
}

/// Write a document to `output_path`
pub fn write_to_path(document: &Document, output_path: &Path) -> Result<(), PlistError> {
    debug!("Writing document to: {:?}", output_path);

    let content = match DocumentFormat::from_path(output_path) {
        DocumentFormat::Toml => toml::to_string_pretty(document)?,
        DocumentFormat::Json => serde_json::to_string_pretty(document)?,
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(output_path);
    {
        let file = fs::File::create(&temp_path)?;
        let mut writer = std::io::BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
    }
    fs::rename(&temp_path, output_path)?;

    info!(
        "Document written to {:?} ({} keys)",
        output_path,
        document.len()
    );
    Ok(())
}

/// Sibling of `path` with `.tmp` appended to the whole file name
fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_os_string();
    temp.push(".tmp");
    PathBuf::from(temp)
}

/// Read a document from `path`
pub fn read_from_path(path: &Path) -> Result<Document, PlistError> {
    debug!("Reading document from: {:?}", path);

    let content = fs::read_to_string(path)?;
    let document: Document = match DocumentFormat::from_path(path) {
        DocumentFormat::Toml => toml::from_str(&content)?,
        DocumentFormat::Json => serde_json::from_str(&content)?,
    };

    debug!("Loaded {} keys", document.len());
    Ok(document)
}
