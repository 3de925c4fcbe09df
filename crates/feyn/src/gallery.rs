//! Markdown index of rendered diagrams.
//!
//! The index lists every PNG in a directory, sorted by name, linking the PDF
//! of the same name and embedding the image.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::error::FeynError;

const INDEX_FILE: &str = "README.md";

const HEADER: &str = "# List of diagrams already available\n\n\
    The following diagrams are available in this directory in .tex, .png and .pdf format.\n\n";

/// Writes `README.md` into `dir` and returns its path.
///
/// # Errors
///
/// Returns [`FeynError::Io`] if the directory cannot be read or the index
/// cannot be written.
pub fn write_index(dir: &Path) -> Result<PathBuf, FeynError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        match (path.extension(), path.file_stem()) {
            (Some(ext), Some(stem)) if ext == "png" => {
                names.push(stem.to_string_lossy().into_owned());
            }
            _ => {}
        }
    }
    names.sort();

    let index = dir.join(INDEX_FILE);
    fs::write(&index, render_index(&names))?;

    info!(path:? = index, diagrams = names.len(); "Gallery index written");
    Ok(index)
}

fn render_index(names: &[String]) -> String {
    let mut out = String::from(HEADER);
    for name in names {
        out.push_str(&format!("- [`{name}`]({name}.pdf)\n\n  ![image]({name}.png)\n\n"));
    }
    out
}
