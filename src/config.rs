//! Run configuration for workergen.
//! Resolves the command-line arguments into an immutable [`Config`] with
//! absolute paths, and derives the substitution [`Context`] from it.

use log::debug;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

use crate::cli::Args;
use crate::error::{Error, Result};

/// Resolved parameters of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Value bound to `WorkerName`.
    pub worker_name: String,
    /// Value bound to `UseCustomDomain`.
    pub use_custom_domain: bool,
    /// Absolute path of the template root.
    pub template_dir: PathBuf,
    /// Absolute path of the directory receiving the generated worker.
    pub workers_dir: PathBuf,
}

/// Variables available to templates.
#[derive(Debug, Clone, Serialize)]
pub struct Context<'a> {
    #[serde(rename = "WorkerName")]
    pub worker_name: &'a str,
    #[serde(rename = "UseCustomDomain")]
    pub use_custom_domain: bool,
}

impl Config {
    /// Resolves `args` against the current working directory.
    ///
    /// # Errors
    /// * `Error::PathResolutionError` if the working directory is unavailable
    pub fn from_args(args: &Args) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::PathResolutionError {
            path: ".".to_string(),
            reason: e.to_string(),
        })?;
        Self::resolve(args, cwd)
    }

    /// Resolves `args` against `base`, which must be absolute.
    pub fn resolve<P: AsRef<Path>>(args: &Args, base: P) -> Result<Self> {
        let base = base.as_ref();
        let template_dir = absolutize(base, &args.template_dir())?;
        let workers_dir = absolutize(base, &args.workers_dir)?;
        debug!("Resolved template root: {}", template_dir.display());

        Ok(Self {
            worker_name: args.name.clone(),
            use_custom_domain: args.customdomain,
            template_dir,
            workers_dir,
        })
    }

    /// Builds the substitution context.
    pub fn context(&self) -> Context<'_> {
        Context {
            worker_name: &self.worker_name,
            use_custom_domain: self.use_custom_domain,
        }
    }

    /// Serializes the substitution context into the value handed to the renderer.
    pub fn context_value(&self) -> serde_json::Value {
        // A struct of a string and a bool always serializes.
        serde_json::to_value(self.context()).unwrap_or_default()
    }
}

/// Makes `path` absolute against `base` and normalizes it lexically.
///
/// Symlinks are not resolved and the path does not need to exist.
fn absolutize(base: &Path, path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };
    if !joined.is_absolute() {
        return Err(Error::PathResolutionError {
            path: path.display().to_string(),
            reason: format!("base directory '{}' is not absolute", base.display()),
        });
    }

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
