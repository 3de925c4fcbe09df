//! Error adapter for converting FeynError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};

use feyn::FeynError;

/// Adapter rendering a [`FeynError`] as a miette diagnostic.
///
/// Decay-script errors carry their source text, so they are rendered with a
/// labelled snippet; all other variants render as a plain report with a
/// stable code and, where the fix is known, a help line.
pub struct ErrorAdapter<'a>(pub &'a FeynError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FeynError::Io(_) => "feyn::io",
            FeynError::Config(_) => "feyn::config",
            FeynError::MissingSymbols(_) => "feyn::symbols",
            FeynError::Launch { .. } => "feyn::launch",
            FeynError::Toolchain { .. } => "feyn::toolchain",
            FeynError::Script { .. } => "feyn::script",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FeynError::MissingSymbols(path) => format!(
                "place `{}` next to the decay script, or set `document.wrap_symbols = false`",
                path.display()
            ),
            FeynError::Launch { tool, .. } => format!(
                "install `{tool}` or point the `[toolchain]` configuration at it; \
                 `--no-compile` writes the LaTeX sources only"
            ),
            FeynError::Toolchain { .. } => {
                "rerun with `--log-level debug` to see the tool output".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            FeynError::Script { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match &self.0 {
            FeynError::Script {
                span: Some(span), ..
            } => {
                let span = SourceSpan::new(span.start.into(), span.len());
                Some(Box::new(std::iter::once(
                    LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
                )))
            }
            _ => None,
        }
    }
}

/// Convert a [`FeynError`] into something miette can render.
pub fn to_reportable(err: &FeynError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::*;

    #[test]
    fn test_script_error_has_label() {
        let err = FeynError::new_script_error("unknown field `label`", Some(4..9), "a = label");

        let reportable = to_reportable(&err);
        assert_eq!(reportable.to_string(), "unknown field `label`");
        assert_eq!(reportable.code().unwrap().to_string(), "feyn::script");
        assert!(reportable.source_code().is_some());

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[0].len(), 5);
    }

    #[test]
    fn test_script_error_without_span() {
        let err = FeynError::new_script_error("decay script lists no diagrams", None, "");

        let reportable = to_reportable(&err);
        assert!(reportable.source_code().is_some());
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_missing_symbols_has_help() {
        let err = FeynError::MissingSymbols(PathBuf::from("lhcb-symbols-def.tex"));

        let reportable = to_reportable(&err);
        assert_eq!(reportable.code().unwrap().to_string(), "feyn::symbols");
        let help = reportable.help().unwrap().to_string();
        assert!(help.contains("lhcb-symbols-def.tex"));
        assert!(reportable.source_code().is_none());
    }

    #[test]
    fn test_non_script_error() {
        let err = FeynError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));

        let reportable = to_reportable(&err);
        assert_eq!(reportable.to_string(), "I/O error: gone");
        assert_eq!(reportable.code().unwrap().to_string(), "feyn::io");
        assert!(reportable.help().is_none());
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = FeynError::new_script_error(
            "expected a pair of labels, found 3 entries",
            Some(15..30),
            "a = { quarks = [\"b\", \"u\", \"d\"] }",
        );

        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &to_reportable(&err))
            .unwrap();
        assert!(out.contains("expected a pair of labels"));
        assert!(out.contains("feyn::script"));
    }
}
