use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use walkdir::Error as WalkError;

/// Custom error type for supalink
#[derive(Debug)]
pub enum Error {
    /// The source pattern is not a valid regular expression
    InvalidPattern { source: RegexError, pattern: String },
    /// Walking the filesystem below the inferred root failed
    FilesystemTraversal { source: WalkError, root: PathBuf },
    /// A `$N` placeholder refers to a capture group the match does not have
    TemplateParameterOutOfRange {
        placeholder: String,
        available: usize,
    },
    /// Step substitution was requested without any step buckets
    NoStepsConfigured,
    /// Every configured step bucket is full
    StepExhausted { capacity: usize },
    /// A single symlink could not be created
    SymlinkCreation {
        source: io::Error,
        source_path: PathBuf,
        destination: PathBuf,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// A step capacity is not a positive integer
    InvalidStep { value: String },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPattern { pattern, .. } => {
                write!(f, "Invalid source pattern: {pattern}")
            }
            Error::FilesystemTraversal { root, .. } => {
                write!(f, "Failed to walk directory: {}", root.display())
            }
            Error::TemplateParameterOutOfRange {
                placeholder,
                available,
            } => {
                write!(
                    f,
                    "Template parameter {placeholder} is out of range: the pattern captured {available} group(s)"
                )
            }
            Error::NoStepsConfigured => write!(f, "No steps defined"),
            Error::StepExhausted { capacity } => {
                write!(
                    f,
                    "Exceeded the number of defined steps (total capacity {capacity})"
                )
            }
            Error::SymlinkCreation {
                source_path,
                destination,
                ..
            } => {
                write!(
                    f,
                    "Failed to create symlink: {} -> {}",
                    source_path.display(),
                    destination.display()
                )
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidStep { value } => {
                write!(f, "Invalid step value: {value} (expected a positive integer)")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidPattern { source, .. } => Some(source),
            Error::FilesystemTraversal { source, .. } => Some(source),
            Error::SymlinkCreation { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<RegexError> for Error {
    fn from(err: RegexError) -> Self {
        Error::InvalidPattern {
            source: err,
            pattern: String::new(),
        }
    }
}

impl From<WalkError> for Error {
    fn from(err: WalkError) -> Self {
        let root = err.path().map(PathBuf::from).unwrap_or_default();
        Error::FilesystemTraversal { source: err, root }
    }
}

/// Custom Result type for supalink
///
/// # Examples
/// ```
/// use supalink::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an invalid pattern error
pub fn invalid_pattern_error(err: RegexError, pattern: &str) -> Error {
    Error::InvalidPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a traversal error
///
/// The reported path is the entry that failed when walkdir knows it, and the
/// walk root otherwise.
pub fn traversal_error(err: WalkError, root: PathBuf) -> Error {
    let root = err.path().map(PathBuf::from).unwrap_or(root);
    Error::FilesystemTraversal { source: err, root }
}

/// Helper function to create a template parameter error
pub fn template_parameter_error(placeholder: &str, available: usize) -> Error {
    Error::TemplateParameterOutOfRange {
        placeholder: placeholder.to_string(),
        available,
    }
}

/// Helper function to create a missing steps error
pub fn no_steps_error() -> Error {
    Error::NoStepsConfigured
}

/// Helper function to create a step exhaustion error
pub fn step_exhausted_error(capacity: usize) -> Error {
    Error::StepExhausted { capacity }
}

/// Helper function to create a symlink creation error
pub fn symlink_creation_error(err: io::Error, source_path: PathBuf, destination: PathBuf) -> Error {
    Error::SymlinkCreation {
        source: err,
        source_path,
        destination,
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid step error
pub fn invalid_step_error(value: &str) -> Error {
    Error::InvalidStep {
        value: value.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
