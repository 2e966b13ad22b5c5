use thiserror::Error;

/// Errors that can occur while saving or loading a drawing
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to parse document XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Document XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid value {value:?} for attribute `{attribute}`")]
    InvalidAttribute { attribute: String, value: String },
}

/// Result type for document persistence operations
pub type DocumentResult<T> = Result<T, DocumentError>;
