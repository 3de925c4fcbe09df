//! CLI logic for the Feyn diagram generator.
//!
//! This module contains the core CLI logic: it reads a decay script and
//! writes every diagram it lists into the output directory.

pub mod error_adapter;
pub mod script;

mod args;
mod config;

pub use args::Args;
pub use config::load_config;
pub use script::load_script;

use std::path::Path;

use log::info;

use feyn::{DiagramBuilder, FeynError, config::OutputConfig, gallery};

/// Run the Feyn CLI application
///
/// This function loads the configuration and the decay script, generates
/// every listed diagram into the output directory and, if requested, writes
/// the gallery index.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FeynError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Decay-script errors
/// - A missing shared symbol file
/// - Typesetting or raster toolchain failures
pub fn run(args: &Args) -> Result<(), FeynError> {
    info!(
        input_path = args.input,
        output_dir = args.output_dir;
        "Processing decay script"
    );

    // Load configuration and apply command-line overrides
    let mut app_config = load_config(args.config.as_ref())?;
    let output = app_config.output();
    let compile = output.compile() && !args.no_compile;
    let raster = output.raster() || args.raster;
    app_config = app_config.with_output(OutputConfig::new(compile, raster));

    let script = load_script(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let output_dir = Path::new(&args.output_dir);
    for diagram in script.diagrams() {
        let artifacts = builder.generate(diagram, output_dir)?;
        info!(
            diagram = diagram.name(),
            tex:? = artifacts.tex(),
            pdf:? = artifacts.pdf(),
            png:? = artifacts.png();
            "Diagram generated"
        );
    }

    if args.gallery {
        let index = gallery::write_index(output_dir)?;
        info!(path:? = index; "Gallery index written");
    }

    info!(diagrams = script.diagrams().len(); "Decay script processed");

    Ok(())
}
