//! workergen's main application entry point.
//! Parses the command line, resolves the configuration and runs the generator.

use workergen::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::generate,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the arguments into an absolute configuration
/// 2. Renders the destination name and lists the template tree
/// 3. Creates every directory and renders every file
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let config = Config::from_args(&args)?;

    let output_root = generate(&config, &engine)?;

    println!("Worker generation completed successfully in {}.", output_root.display());
    Ok(())
}
