//! workergen scaffolds a new worker from a template directory.
//! It copies the template tree into `workers/`, renaming the root after the
//! worker and substituting variables into every file.

/// Command-line interface module
pub mod cli;

/// Resolution of arguments into the run configuration and template context
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Template tree enumeration
pub mod lister;

/// Logger initialization
pub mod logger;

/// Destination computation and file generation
pub mod processor;

/// Template rendering
pub mod renderer;

/// Go-style template actions
pub mod syntax;
