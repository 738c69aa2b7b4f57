//! Command-line interface implementation for workergen.
//! Provides argument parsing using clap.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_TEMPLATE_NAME, DEFAULT_WORKER_NAME, TEMPLATES_DIR, WORKERS_DIR,
};

/// Command-line arguments structure for workergen.
#[derive(Parser, Debug)]
#[command(author, version, about = "workergen: scaffold a new worker from a template", long_about = None)]
pub struct Args {
    /// Name of the worker
    #[arg(long, value_name = "NAME", default_value = DEFAULT_WORKER_NAME)]
    pub name: String,

    /// Create a subdomain to host the worker under
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        require_equals = true
    )]
    pub customdomain: bool,

    /// Path to the template to use.
    /// Defaults to ./.templates/{{ .WorkerName }}
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Directory the generated worker is placed in
    #[arg(long, value_name = "PATH", default_value = WORKERS_DIR)]
    pub workers_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Returns the template root, falling back to the bundled default template.
    pub fn template_dir(&self) -> PathBuf {
        self.template.clone().unwrap_or_else(default_template_dir)
    }
}

/// Default template root: `./.templates/{{ .WorkerName }}`.
pub fn default_template_dir() -> PathBuf {
    PathBuf::from(".").join(TEMPLATES_DIR).join(DEFAULT_TEMPLATE_NAME)
}

/// Long options that may also be written with a single dash, e.g. `-name=foo`.
const SINGLE_DASH_OPTIONS: [&str; 5] =
    ["name", "customdomain", "template", "workers-dir", "verbose"];

/// Rewrites `-name`, `-customdomain`, ... into their `--` form.
///
/// Other arguments, including `-v` and values, are returned unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(flag) = arg.to_str().and_then(|s| s.strip_prefix('-')) else {
                return arg;
            };
            let option = flag.split_once('=').map_or(flag, |(option, _)| option);
            if SINGLE_DASH_OPTIONS.contains(&option) {
                OsString::from(format!("-{flag}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse_from(normalize_args(std::env::args_os()))
}
