//! PDF to PNG conversion.

use std::path::{Path, PathBuf};

use log::info;

use super::{parent_dir, run_tool, stem};
use crate::{config::ToolchainConfig, error::FeynError};

/// Renders the first page of `pdf` into `<stem>.png` next to it.
///
/// # Errors
///
/// Returns [`FeynError::Launch`] or [`FeynError::Toolchain`] when the
/// converter cannot start or fails.
pub fn rasterize(pdf: &Path, toolchain: &ToolchainConfig) -> Result<PathBuf, FeynError> {
    let name = stem(pdf)?;
    let dir = parent_dir(pdf);
    let pdf_name = format!("{name}.pdf");
    info!(document = name.as_str(); "Rasterizing document");

    run_tool(
        toolchain.rasterizer(),
        &[
            "-png",
            "-f",
            "1",
            "-l",
            "1",
            "-singlefile",
            pdf_name.as_str(),
            name.as_str(),
        ],
        dir,
    )?;

    let png = dir.join(format!("{name}.png"));
    info!(path:? = png; "Document rasterized");
    Ok(png)
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_converter_failure() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("feyn.pdf");
        fs::write(&pdf, "%PDF-1.5").unwrap();

        let toolchain = ToolchainConfig::default().with_rasterizer("false");
        let err = rasterize(&pdf, &toolchain).unwrap_err();
        match err {
            FeynError::Toolchain { tool, .. } => assert_eq!(tool, "false"),
            other => panic!("expected toolchain failure, got {other:?}"),
        }
    }

    #[test]
    fn test_png_path_next_to_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("Bs2KstKst.pdf");
        fs::write(&pdf, "%PDF-1.5").unwrap();

        let toolchain = ToolchainConfig::default().with_rasterizer("true");
        let png = rasterize(&pdf, &toolchain).unwrap();
        assert_eq!(png, dir.path().join("Bs2KstKst.png"));
    }
}
