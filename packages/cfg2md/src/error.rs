//! Error types for the converter.
//!
//! Uses the dual-error pattern: `ConvertError` for library consumers
//! with detailed error context, and `DecodeError` for the reasons a single
//! metadata file could not be decoded.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Dialect;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source root does not exist or cannot be inspected.
    #[error("Cannot access source directory {}: {source}", .path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source root exists but is not a directory.
    #[error("Source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Neither dialect's marker files are present.
    #[error("Could not determine metadata format in {} (expected Configuration.xml, or .project and src/)", .0.display())]
    UndeterminedFormat(PathBuf),

    /// An explicitly requested dialect does not match the source tree.
    #[error("Directory {} is not a {dialect} source tree: missing {missing}", .path.display())]
    DialectMismatch {
        dialect: Dialect,
        path: PathBuf,
        missing: &'static str,
    },

    /// Unknown dialect spelling.
    #[error("Unsupported format: '{0}'. Expected 'cfg' or 'edt'")]
    UnsupportedDialect(String),

    /// A kind directory exists but cannot be enumerated.
    #[error("Failed to read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A single metadata file could not be decoded.
    #[error("Failed to decode {}: {source}", .path.display())]
    FileDecode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Unknown object type name in a type list.
    #[error("Unsupported object type: '{0}'")]
    UnknownObjectType(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Reasons a single metadata file fails to decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read.
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document root is not the expected element.
    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot { expected: String, found: String },

    /// Missing required XML element.
    #[error("missing required element {element} in {context}")]
    MissingElement { element: String, context: String },
}

impl DecodeError {
    pub(crate) fn missing(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
