//! Standalone-document and shared-symbol wrappers.
//!
//! A canvas body on its own is an `axopicture` environment meant to be
//! embedded in another document. To compile it standalone it is framed by a
//! `standalone` document preamble, and optionally by an include of a shared
//! symbol-definition file (such as `lhcb-symbols-def.tex`) that provides the
//! particle macros used in labels.

use std::fmt::{self, Write};

/// Which wrapper layers frame the canvas body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wrapping {
    document: bool,
    symbols: Option<String>,
}

impl Wrapping {
    /// No wrapper at all: only the `axopicture` environment is written.
    pub fn raw() -> Self {
        Self::default()
    }

    /// A standalone document, optionally including the shared symbol file
    /// `symbols` (named without its `.tex` extension).
    pub fn standalone(symbols: Option<String>) -> Self {
        Self {
            document: true,
            symbols,
        }
    }

    /// Explicit control over both layers.
    pub fn new(document: bool, symbols: Option<String>) -> Self {
        Self { document, symbols }
    }

    /// Returns whether the document wrapper is written.
    pub fn wraps_document(&self) -> bool {
        self.document
    }

    /// Returns the name of the included symbol file, if any.
    pub fn symbols(&self) -> Option<&str> {
        self.symbols.as_deref()
    }

    /// Returns whether neither layer is written.
    pub fn is_raw(&self) -> bool {
        !self.document && self.symbols.is_none()
    }
}

/// Writes everything that precedes the `axopicture` environment.
pub fn write_preamble(out: &mut impl Write, wrapping: &Wrapping) -> fmt::Result {
    if wrapping.document {
        writeln!(out, r"\documentclass{{standalone}}")?;
        writeln!(out, r"\usepackage{{axodraw2}}")?;
    }

    if let Some(symbols) = &wrapping.symbols {
        writeln!(out, r"\usepackage{{ifthen}}")?;
        writeln!(out, r"\newboolean{{uprightparticles}}")?;
        writeln!(out, r"\setboolean{{uprightparticles}}{{false}}")?;
        writeln!(out, r"\newboolean{{pdflatex}}")?;
        writeln!(out, r"\setboolean{{pdflatex}}{{true}}")?;
        writeln!(out, r"\input{{{symbols}}}")?;
    }

    if wrapping.document {
        writeln!(out, r"\begin{{document}}")?;
    }
    Ok(())
}

/// Writes everything that follows the `axopicture` environment.
pub fn write_postamble(out: &mut impl Write, wrapping: &Wrapping) -> fmt::Result {
    if wrapping.document {
        writeln!(out, r"\end{{document}}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_writes_nothing() {
        let mut out = String::new();
        write_preamble(&mut out, &Wrapping::raw()).unwrap();
        write_postamble(&mut out, &Wrapping::raw()).unwrap();
        assert!(out.is_empty());
        assert!(Wrapping::raw().is_raw());
    }

    #[test]
    fn test_standalone_with_symbols() {
        let wrapping = Wrapping::standalone(Some("lhcb-symbols-def".to_string()));
        let mut out = String::new();
        write_preamble(&mut out, &wrapping).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.first(), Some(&r"\documentclass{standalone}"));
        assert_eq!(lines.last(), Some(&r"\begin{document}"));
        assert!(lines.contains(&r"\input{lhcb-symbols-def}"));
        assert!(lines.contains(&r"\setboolean{uprightparticles}{false}"));
    }

    #[test]
    fn test_symbols_without_document() {
        let wrapping = Wrapping::new(false, Some("defs".to_string()));
        let mut out = String::new();
        write_preamble(&mut out, &wrapping).unwrap();

        assert!(!out.contains(r"\documentclass"));
        assert!(!out.contains(r"\begin{document}"));
        assert!(out.ends_with("\\input{defs}\n"));
    }

    #[test]
    fn test_postamble_closes_document() {
        let mut out = String::new();
        write_postamble(&mut out, &Wrapping::standalone(None)).unwrap();
        assert_eq!(out, "\\end{document}\n");
    }
}
