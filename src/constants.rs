//! Common constants used throughout workergen.

/// Worker name used when `--name` is not given.
pub const DEFAULT_WORKER_NAME: &str = "hello-world";

/// Directory, relative to the working directory, holding the bundled templates.
pub const TEMPLATES_DIR: &str = ".templates";

/// Directory, relative to the working directory, receiving generated workers.
pub const WORKERS_DIR: &str = "workers";

/// Name of the default template directory. Kept literally in the source path;
/// only the destination name is rendered from it.
pub const DEFAULT_TEMPLATE_NAME: &str = "{{ .WorkerName }}";
