//! Core generation logic.
//! Computes the destination root from the template root's name, then recreates
//! every directory and renders every file of the template tree under it.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::{
    config::Config,
    error::{Error, Result},
    lister::list_files,
    renderer::TemplateRenderer,
};

/// What was done for a single template entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// A directory was created (or already existed).
    CreateDir,
    /// A file was rendered and written.
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOperation::CreateDir => write!(f, "Created dir"),
            FileOperation::Write => write!(f, "Created file"),
        }
    }
}

/// Outcome of processing one template entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub source: PathBuf,
    pub target: PathBuf,
    pub operation: FileOperation,
}

/// Checks that a rendered root name is a single, plain path component.
pub fn is_rendered_name_valid(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(first)), None) if first == name
    )
}

/// Computes `<workers_dir>/<rendered name of the template root>`.
///
/// # Errors
/// * `Error::PathResolutionError` if the template root has no usable name or
///   the rendered name is not a single path component
/// * template errors from rendering the name
pub fn destination_root(
    engine: &dyn TemplateRenderer,
    config: &Config,
    context: &serde_json::Value,
) -> Result<PathBuf> {
    let template_dir = &config.template_dir;
    let unresolved = |reason: &str| Error::PathResolutionError {
        path: template_dir.display().to_string(),
        reason: reason.to_string(),
    };

    let name = template_dir
        .file_name()
        .ok_or_else(|| unresolved("template root has no directory name"))?
        .to_str()
        .ok_or_else(|| unresolved("template root name is not valid UTF-8"))?;

    let rendered = engine.render(name, name, context)?;
    if !is_rendered_name_valid(&rendered) {
        return Err(Error::PathResolutionError {
            path: template_dir.display().to_string(),
            reason: format!("rendered name '{rendered}' is not a valid directory name"),
        });
    }

    Ok(config.workers_dir.join(rendered))
}

/// Renders the entries of one template tree into one destination root.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    context: &'a serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        context: &'a serde_json::Value,
    ) -> Self {
        Self { engine, template_root, output_root, context }
    }

    /// Maps a template entry to its destination.
    ///
    /// Only the root is renamed; the rest of the relative path is kept as is.
    pub fn target_path(&self, entry: &Path) -> Result<PathBuf> {
        let relative = entry.strip_prefix(self.template_root).map_err(|e| {
            Error::PathResolutionError {
                path: entry.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        if relative.as_os_str().is_empty() {
            Ok(self.output_root.to_path_buf())
        } else {
            Ok(self.output_root.join(relative))
        }
    }

    /// Creates the directory or renders the file for `entry`.
    ///
    /// The entry is classified with a fresh `stat`, not from the listing. A
    /// file is rendered completely before anything is written, so a template
    /// error leaves no destination file behind.
    pub fn process(&self, entry: &Path) -> Result<ProcessResult> {
        let target = self.target_path(entry)?;
        let metadata = fs::metadata(entry).map_err(|e| Error::io(entry, e))?;

        let operation = if metadata.is_dir() {
            create_dir_all(&target)?;
            FileOperation::CreateDir
        } else {
            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }
            let content = fs::read_to_string(entry).map_err(|e| Error::io(entry, e))?;
            let rendered =
                self.engine.render(&entry.display().to_string(), &content, self.context)?;
            fs::write(&target, rendered).map_err(|e| Error::io(&target, e))?;
            FileOperation::Write
        };

        info!("{}: '{}'", operation, target.display());
        Ok(ProcessResult { source: entry.to_path_buf(), target, operation })
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Generates a worker from `config`.
///
/// # Returns
/// * `Result<PathBuf>` - The destination root
///
/// # Flow
/// 1. Renders the destination root name
/// 2. Lists the template tree
/// 3. Processes every entry in order, stopping at the first error
pub fn generate(config: &Config, engine: &dyn TemplateRenderer) -> Result<PathBuf> {
    let context = config.context_value();
    info!("Template source: '{}'", config.template_dir.display());

    let output_root = destination_root(engine, config, &context)?;
    let entries = list_files(&config.template_dir)?;
    debug!(
        "Source files:\n   - {}",
        entries.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join("\n   - ")
    );
    info!("Destination: '{}'", output_root.display());

    let processor = Processor::new(engine, &config.template_dir, &output_root, &context);
    for entry in &entries {
        processor.process(entry)?;
    }

    Ok(output_root)
}
