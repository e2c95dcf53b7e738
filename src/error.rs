use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The filesystem step that failed while loading a blueprint or materializing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    CreateDirectory,
    Write,
    SetPermissions,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileOperation::Read => "read",
            FileOperation::CreateDirectory => "create directory",
            FileOperation::Write => "write",
            FileOperation::SetPermissions => "set permissions on",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// An entry was declared while no project or directory scope was open.
    #[error("Cannot declare '{name}': no project or directory scope is open.")]
    NoActiveContext { name: String },

    #[error("Duplicate entry '{name}' in '{container}'.")]
    DuplicateName { name: String, container: String },

    #[error("Invalid entry name '{name}': {reason}.")]
    InvalidName { name: String, reason: String },

    #[error("Cannot open a project root: another root is already open.")]
    AlreadyRooted,

    #[error("Scope closed without a matching open.")]
    UnbalancedScope,

    /// A file payload that cannot be expressed in the file's format.
    #[error("Failed to render '{name}' as {format}: {reason}")]
    RenderError { name: String, format: String, reason: String },

    #[error("Dependency '{dependency}' of module '{module}' is managed but missing from dependency management.")]
    MissingManagedDependency { dependency: String, module: String },

    #[error("Cannot {operation} '{}'. Original error: {source}", .path.display())]
    Filesystem {
        operation: FileOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("No blueprint found in '{dir}'. Tried: {candidates}.")]
    BlueprintNotFound { dir: String, candidates: String },

    #[error("Failed to parse blueprint. Original error: {0}")]
    BlueprintParseError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::BlueprintParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::BlueprintParseError(err.to_string())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
