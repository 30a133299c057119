use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize generated config. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Cannot proceed: target directory '{target_dir}' already exists.")]
    TargetDirectoryExistsError { target_dir: String },

    /// When an external command ran but finished with a non-zero status.
    #[error("Command '{command}' failed with status: {status}")]
    CommandFailedError { command: String, status: ExitStatus },

    #[error("Cannot determine a project name from '{path}'.")]
    ProjectNameError { path: String },
}

/// Convenience type alias for Results with the scaffolder error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
