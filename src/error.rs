//! Error handling for lin.
//! Defines the error type and result alias used by every stage of the pipeline.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while creating a project.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The interactive prompt was interrupted or failed before all answers were given
    #[error("Prompt aborted: {0}.")]
    PromptError(String),

    /// The collected answers do not map onto a valid parameter set
    #[error("Inconsistent answers: {0}.")]
    InconsistentAnswers(String),

    /// Represents errors raised by the template engine
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while cloning the template repository
    #[error("Failed to fetch template: {0}.")]
    Git2Error(#[from] git2::Error),

    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Template directory does not exist: {template_dir}.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Project directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    /// A templated file could not be read or rewritten
    #[error("Failed to materialize '{}': {source}.", .path.display())]
    MaterializeError {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("Rename failed: {0}.")]
    RenameError(String),
}

/// Convenience type alias for Results with lin's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
