//! Error types for interchange operations.

use thiserror::Error;

/// Errors that can occur while reading flow bundles or adapter tables.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Archive(String),

    /// CSV reading or writing error.
    #[error("CSV error: {0}")]
    Csv(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required file or column.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Invalid column layout or row content.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }

    /// Create a missing file error.
    pub fn missing_file(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "file",
            name: name.into(),
        }
    }

    /// Create a missing column error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "column",
            name: name.into(),
        }
    }

    /// Create an invalid column error.
    pub fn invalid_column(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "column",
            message: message.into(),
        }
    }

    /// Create an invalid row error.
    pub fn invalid_row(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "row",
            message: message.into(),
        }
    }

    /// True for errors in the layout of a link-phase table.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Missing { kind: "column", .. } | Self::Invalid { .. })
    }
}

impl From<csv::Error> for InterchangeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<zip::result::ZipError> for InterchangeError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}
