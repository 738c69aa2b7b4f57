//! Error handling for workergen.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while generating a worker from a template.
///
/// Every variant is fatal: the first error aborts the run and nothing that was
/// already written is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// A path could not be made absolute, or a rendered name is not usable as
    /// a directory name.
    #[error("Unable to resolve path '{path}': {reason}.")]
    PathResolutionError { path: String, reason: String },

    /// The template tree could not be enumerated.
    #[error("Unable to list template files under '{root}': {source}.")]
    TraversalError { root: String, source: walkdir::Error },

    /// The template text is not valid template syntax.
    #[error("Unable to parse template '{template}': {reason}.")]
    TemplateParseError { template: String, reason: String },

    /// The template parsed but could not be rendered, e.g. it refers to an
    /// undefined variable.
    #[error("Unable to render template '{template}': {source}.")]
    TemplateSyntaxError { template: String, source: minijinja::Error },

    /// A filesystem read, write or mkdir failed.
    #[error("IO error on '{path}': {source}.")]
    IoError { path: String, source: io::Error },
}

impl Error {
    /// Wraps an `io::Error` together with the path it occurred on.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::IoError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
