use std::path::PathBuf;
use thiserror::Error;

/// A label string outside the two-valued sentiment scheme.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unexpected label {0}")]
pub struct LabelError(pub String);

/// Malformed data line. `line_idx` counts from 0, the header being line 0.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unexpected format at line {line_idx}: all label lines should have 5 fields, found {found}\n{line}")]
    FieldCount {
        line_idx: usize,
        found: usize,
        line: String,
    },

    #[error("Unexpected label {label} at line {line_idx}\n{line}", label = .source.0)]
    Label {
        line_idx: usize,
        line: String,
        #[source]
        source: LabelError,
    },
}

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("Tokenizer returned {found} documents for {expected} inputs")]
    Alignment { expected: usize, found: usize },

    #[error("Tokenizer found no sentence in document {index} (line {})", .index + 1)]
    EmptyDocument { index: usize },

    #[error("Unsupported processor {0}: only tokenize is available")]
    UnsupportedProcessor(String),

    #[error("Tokenization pipeline failed: {0}")]
    Pipeline(String),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("{}: {source}", .path.display())]
    Tokenize {
        path: PathBuf,
        #[source]
        source: TokenizeError,
    },

    #[error("JSON error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
