//! Compilation of `axodraw2` documents into PDF.
//!
//! `axodraw2` draws through an auxiliary file, so a document needs three
//! passes: the typesetter writes `<name>.ax1`, `axohelp` turns it into
//! `<name>.ax2`, and a second typesetter pass picks that up.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use tempfile::TempDir;

use super::{parent_dir, run_tool, stem};
use crate::{config::ToolchainConfig, error::FeynError};

/// Compiles `tex` and places `<stem>.pdf` next to it.
///
/// The passes run on copies inside a scratch directory, together with a
/// copy of `symbols` when the document includes one, so auxiliary files
/// never reach the output directory.
///
/// # Errors
///
/// Returns [`FeynError::Launch`] or [`FeynError::Toolchain`] when a pass
/// cannot start or exits unsuccessfully, and [`FeynError::Io`] when staging
/// or copying back fails. No PDF is placed next to `tex` in any of these
/// cases.
pub fn compile(
    tex: &Path,
    toolchain: &ToolchainConfig,
    symbols: Option<&Path>,
) -> Result<PathBuf, FeynError> {
    let name = stem(tex)?;
    info!(document = name.as_str(); "Compiling document");

    let scratch = TempDir::new()?;
    debug!(scratch:? = scratch.path(); "Staging document");
    fs::copy(tex, scratch.path().join(format!("{name}.tex")))?;
    if let Some(symbols) = symbols {
        let file_name = symbols.file_name().ok_or_else(|| {
            FeynError::Config(format!("`{}` has no file name", symbols.display()))
        })?;
        fs::copy(symbols, scratch.path().join(file_name))?;
    }

    let mut latex_args: Vec<&str> = toolchain.latex_args().iter().map(String::as_str).collect();
    latex_args.push(&name);

    run_tool(toolchain.latex(), &latex_args, scratch.path())?;
    run_tool(toolchain.axohelp(), &[name.as_str()], scratch.path())?;
    run_tool(toolchain.latex(), &latex_args, scratch.path())?;

    let pdf = parent_dir(tex).join(format!("{name}.pdf"));
    fs::copy(scratch.path().join(format!("{name}.pdf")), &pdf)?;

    info!(path:? = pdf; "Document compiled");
    Ok(pdf)
}
