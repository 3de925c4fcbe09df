//! Artifact production from a written `.tex` document.
//!
//! - [`preflight`] - Checks that compilation can succeed before anything is written
//! - [`compile`] - Runs the LaTeX toolchain in a scratch directory
//! - [`rasterize`] - Converts the first page of a PDF into a PNG
//!
//! All external programs are started directly, without a shell, and every
//! pass has its exit status checked.

mod latex;
mod raster;

pub use latex::compile;
pub use raster::rasterize;

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, trace};

use crate::{config::AppConfig, error::FeynError};

/// Files produced for one diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    tex: PathBuf,
    pdf: Option<PathBuf>,
    png: Option<PathBuf>,
}

impl Artifacts {
    pub(crate) fn new(tex: PathBuf) -> Self {
        Self {
            tex,
            pdf: None,
            png: None,
        }
    }

    pub(crate) fn set_pdf(&mut self, pdf: PathBuf) {
        self.pdf = Some(pdf);
    }

    pub(crate) fn set_png(&mut self, png: PathBuf) {
        self.png = Some(png);
    }

    /// Returns the written `axodraw2` source.
    pub fn tex(&self) -> &Path {
        &self.tex
    }

    /// Returns the compiled document, if compilation was enabled.
    pub fn pdf(&self) -> Option<&Path> {
        self.pdf.as_deref()
    }

    /// Returns the rendered image, if raster conversion was enabled.
    pub fn png(&self) -> Option<&Path> {
        self.png.as_deref()
    }
}

/// Fails when compilation is enabled but the shared symbol file it
/// includes does not exist.
///
/// # Errors
///
/// Returns [`FeynError::MissingSymbols`] naming the expected file.
pub fn preflight(config: &AppConfig) -> Result<(), FeynError> {
    if !config.output().compile() {
        return Ok(());
    }

    match config.document().required_symbols() {
        Some(symbols) if !symbols.is_file() => {
            debug!(path:? = symbols; "Shared symbol file is missing");
            Err(FeynError::MissingSymbols(symbols.to_path_buf()))
        }
        _ => Ok(()),
    }
}

/// Runs `program` with `args` inside `dir` and checks its exit status.
///
/// Output is captured; it is only logged when the program fails.
fn run_tool<S: AsRef<OsStr>>(program: &str, args: &[S], dir: &Path) -> Result<(), FeynError> {
    trace!(tool = program, dir:? = dir; "Running external tool");

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|err| FeynError::Launch {
            tool: program.to_string(),
            source: err,
        })?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            tool = program,
            stdout = stdout.as_str(),
            stderr = stderr.as_str();
            "External tool failed"
        );
        return Err(FeynError::Toolchain {
            tool: program.to_string(),
            status: output.status,
        });
    }
    Ok(())
}

/// Returns the directory containing `path`, treating a bare file name as
/// living in the current directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Returns the file stem of `path` as a string.
fn stem(path: &Path) -> Result<String, FeynError> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| FeynError::Config(format!("`{}` has no file name", path.display())))
}
