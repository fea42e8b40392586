use std::io;
use thiserror::Error;

/// Errors that can occur while declaring schemas or persisting documents
#[derive(Error, Debug)]
pub enum PlistError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema '{schema}': field '{name}' has an empty key")]
    EmptyKey { schema: String, name: String },

    #[error("Schema '{schema}': key '{key}' is declared by both '{first}' and '{second}'")]
    DuplicateKey {
        schema: String,
        key: String,
        first: String,
        second: String,
    },

    #[error("Schema '{schema}': field name '{name}' is declared more than once")]
    DuplicateName { schema: String, name: String },
}
