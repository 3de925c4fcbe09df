//! Command-line argument definitions for the Feyn CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the decay script, the output directory
//! and configuration file, override which artifacts are produced, and set
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the Feyn diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the decay script (TOML)
    #[arg(help = "Path to the decay script")]
    pub input: String,

    /// Directory receiving the generated files
    #[arg(short, long, default_value = "feyns")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write LaTeX sources only, without compiling them
    #[arg(long)]
    pub no_compile: bool,

    /// Convert every compiled PDF into a PNG
    #[arg(long)]
    pub raster: bool,

    /// Write a README.md index of the PNGs in the output directory
    #[arg(long)]
    pub gallery: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
