//! Error types for airfoil-projects

use thiserror::Error;

/// Result type alias using airfoil-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target directory already exists
    #[error("Directory already exists: {path}")]
    DirectoryExists { path: String },

    /// A file the scaffold would create already exists
    #[error("File already exists: {path}")]
    FileExists { path: String },

    /// A single file or directory could not be written
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// One or more writes failed; everything created was removed again
    #[error("Project scaffolding failed ({count} error(s)), no files were kept: {details}")]
    PartialScaffold { count: usize, details: String },

    /// Starter template not found
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// Required metadata field is empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The user aborted an interactive prompt
    #[error("Cancelled by user")]
    Cancelled,

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a directory exists error
    pub fn directory_exists(path: impl Into<String>) -> Self {
        Self::DirectoryExists { path: path.into() }
    }

    /// Create a file exists error
    pub fn file_exists(path: impl Into<String>) -> Self {
        Self::FileExists { path: path.into() }
    }

    /// Create a write failed error
    pub fn write_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a partial scaffold error from the individual write failures
    pub fn partial_scaffold(failures: &[Error]) -> Self {
        Self::PartialScaffold {
            count: failures.len(),
            details: failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
