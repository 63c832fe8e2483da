use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the forecast pipeline.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Response body is empty")]
    EmptyBody,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected JSON structure, expected an array (found {found})")]
    Schema { found: &'static str },

    #[error("Entry {index}: field '{field}' should be {expected}, found {found}")]
    FieldType {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`ForecastError`], one per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Parse,
    Schema,
    FieldType,
    Io,
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::Transport(_)
            | ForecastError::HttpStatus { .. }
            | ForecastError::EmptyBody => ErrorKind::Transport,
            ForecastError::Parse(_) => ErrorKind::Parse,
            ForecastError::Schema { .. } => ErrorKind::Schema,
            ForecastError::FieldType { .. } => ErrorKind::FieldType,
            ForecastError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Process exit code reported by the CLI for this failure.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Transport => 2,
            ErrorKind::Parse => 3,
            ErrorKind::Schema => 4,
            ErrorKind::FieldType => 5,
            ErrorKind::Io => 6,
        }
    }
}

/// Short JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
