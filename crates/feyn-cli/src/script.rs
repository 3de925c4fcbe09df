//! Decay script loading.
//!
//! A decay script is a TOML file listing `[[diagram]]` tables. Every table
//! names its output file, picks a topology with the `topology` key and fills
//! in that topology's labels:
//!
//! ```toml
//! [[diagram]]
//! name = "Bp2DzbKp"
//! topology = "tree-external"
//! w_label = '\small{$\Wp$}'
//! a = { label = '$\Bp$', quarks = ['$\bquarkbar$', '$\uquark$'] }
//! ```

use std::{collections::HashSet, fs, ops::Range, path::Path};

use log::{debug, info};
use serde::Deserialize;

use feyn::{Diagram, FeynError};

/// The diagrams listed by one decay script, in file order.
#[derive(Debug, Deserialize)]
pub struct DecayScript {
    #[serde(rename = "diagram", default)]
    diagrams: Vec<Diagram>,
}

impl DecayScript {
    pub fn diagrams(&self) -> &[Diagram] {
        &self.diagrams
    }
}

/// Read and parse the decay script at `path`.
///
/// # Errors
///
/// Returns [`FeynError::Io`] when the file cannot be read and
/// [`FeynError::Script`] when it is not a valid decay script.
pub fn load_script(path: impl AsRef<Path>) -> Result<DecayScript, FeynError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading decay script");

    let source = fs::read_to_string(path)?;
    parse_script(&source)
}

/// Parse a decay script from its TOML source.
///
/// A script must list at least one diagram. Diagram names must be plain file
/// names and must be unique, since each name is an output file.
///
/// # Errors
///
/// Returns [`FeynError::Script`] carrying the source and, where known, the
/// span of the offending value.
pub fn parse_script(source: &str) -> Result<DecayScript, FeynError> {
    let script: DecayScript = toml::from_str(source).map_err(|err| {
        FeynError::new_script_error(err.message().trim_end(), err.span(), source)
    })?;

    if script.diagrams.is_empty() {
        return Err(FeynError::new_script_error(
            "decay script lists no `[[diagram]]` tables",
            None,
            source,
        ));
    }

    let mut seen = HashSet::new();
    for diagram in &script.diagrams {
        if let Err(message) = diagram.check_name() {
            return Err(FeynError::new_script_error(
                message,
                name_span(source, diagram.name(), 0),
                source,
            ));
        }
        if !seen.insert(diagram.name()) {
            return Err(FeynError::new_script_error(
                format!("duplicate diagram name `{}`", diagram.name()),
                name_span(source, diagram.name(), 1),
                source,
            ));
        }
    }

    debug!(diagrams = script.diagrams.len(); "Decay script parsed");
    Ok(script)
}

/// Locate the `nth` quoted string in the script source naming `name`, with
/// or without a `.tex` or `.pdf` extension.
fn name_span(source: &str, name: &str, nth: usize) -> Option<Range<usize>> {
    ['"', '\''].into_iter().find_map(|quote| {
        source
            .match_indices(quote)
            .filter_map(|(start, _)| {
                let len = source[start + 1..].find(quote)?;
                let quoted = &source[start + 1..start + 1 + len];
                let stem = quoted
                    .strip_suffix(".tex")
                    .or_else(|| quoted.strip_suffix(".pdf"))
                    .unwrap_or(quoted);
                (stem == name).then_some(start..start + len + 2)
            })
            .nth(nth)
    })
}

#[cfg(test)]
mod tests {
    use feyn::{CanvasOverrides, draw::Anchor, geometry::Point, topology::Topology};

    use super::*;

    #[test]
    fn test_parse_decay_script() {
        let source = r#"
            [[diagram]]
            name = "Bp2DzbKp"
            topology = "tree-external"
            w_label = '\small{$\Wp$}'
            a = { label = '$\Bp$', quarks = ['$\bquarkbar$', '$\uquark$'] }

            [[diagram]]
            name = "BsMixing2"
            topology = "mixing2"
            anti_at_top = false
            canvas = { grid = true }
            abar = { label = '$\Bsb$', quarks = { second = '$\bquark$' } }
        "#;

        let script = parse_script(source).unwrap();
        let diagrams = script.diagrams();
        assert_eq!(diagrams.len(), 2);

        assert_eq!(diagrams[0].name(), "Bp2DzbKp");
        match diagrams[0].topology() {
            Topology::TreeExternal(params) => {
                assert_eq!(params.a().label(), Some(r"$\Bp$"));
                assert_eq!(params.a().quarks().first(), Some(r"$\bquarkbar$"));
                assert_eq!(params.w_label(), Some(r"\small{$\Wp$}"));
                assert!(params.anti_at_top());
            }
            other => panic!("Expected a tree-external diagram, got {other:?}"),
        }

        match diagrams[1].topology() {
            Topology::Mixing2(params) => {
                assert!(!params.anti_at_top());
                assert_eq!(params.abar().quarks().first(), None);
                assert_eq!(params.abar().quarks().second(), Some(r"$\bquark$"));
            }
            other => panic!("Expected a mixing2 diagram, got {other:?}"),
        }
        assert_eq!(
            diagrams[1].canvas(),
            &CanvasOverrides::default().with_grid(true)
        );
    }

    #[test]
    fn test_empty_script() {
        let err = parse_script("# nothing here\n").unwrap_err();
        match err {
            FeynError::Script { message, span, .. } => {
                assert!(message.contains("no `[[diagram]]`"));
                assert_eq!(span, None);
            }
            other => panic!("Expected a script error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names() {
        let source = r#"
            [[diagram]]
            name = "A"
            topology = "mixing1"

            [[diagram]]
            name = "A"
            topology = "mixing2"
        "#;

        let err = parse_script(source).unwrap_err();
        match err {
            FeynError::Script { message, span, src } => {
                assert_eq!(message, "duplicate diagram name `A`");
                let span = span.expect("span should point at the second name");
                assert_eq!(&src[span.clone()], "\"A\"");
                assert!(span.start > source.find("\"A\"").unwrap());
            }
            other => panic!("Expected a script error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_quark_arity() {
        let source = r#"
            [[diagram]]
            name = "A"
            topology = "tree-external"
            a = { quarks = ["b", "u", "d"] }
        "#;

        let err = parse_script(source).unwrap_err();
        match err {
            FeynError::Script { src, .. } => assert_eq!(src, source),
            other => panic!("Expected a script error, got {other:?}"),
        }
    }

    #[test]
    fn test_misspelled_label_key() {
        let source = r#"
            [[diagram]]
            name = "Bp2DzbKp"
            topology = "tree-external"
            w_lable = 'W'
        "#;

        let err = parse_script(source).unwrap_err();
        match err {
            FeynError::Script { message, .. } => {
                assert!(message.contains("unknown field"), "{message}");
                assert!(message.contains("w_lable"), "{message}");
            }
            other => panic!("Expected a script error, got {other:?}"),
        }
    }

    #[test]
    fn test_quark_loop_has_no_state_switch() {
        for key in ["draw_states = false", "a = { label = 'B' }"] {
            let source = format!(
                "[[diagram]]\nname = \"Q\"\ntopology = \"loop-external-quark\"\n{key}\n"
            );

            match parse_script(&source) {
                Err(FeynError::Script { message, .. }) => {
                    assert!(message.contains("unknown field"), "{message}");
                }
                other => panic!("Expected a script error for `{key}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_path_names_are_located() {
        for name in ["../escaped", "feyns/Bd2KstKst", ""] {
            let source = format!("[[diagram]]\nname = \"{name}\"\ntopology = 'mixing1'\n");

            let err = parse_script(&source).unwrap_err();
            match err {
                FeynError::Script { message, span, src } => {
                    assert!(message.starts_with("diagram name"), "{message}");
                    let span = span.expect("span should point at the name");
                    assert_eq!(&src[span], format!("\"{name}\""));
                }
                other => panic!("Expected a script error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_annotations() {
        let source = r#"
            [[diagram]]
            name = "BsMixing1"
            topology = "mixing1"
            annotations = [
                { at = [95, 10], text = '$\Delta m_s$', anchor = "b" },
                { at = [5.5, 130], text = "(a)" },
            ]
        "#;

        let script = parse_script(source).unwrap();
        let annotations = script.diagrams()[0].annotations();
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].at(), Point::new(95.0, 10.0));
        assert_eq!(annotations[0].text(), r"$\Delta m_s$");
        assert_eq!(annotations[0].anchor(), Some(&Anchor::Bottom));
        assert_eq!(annotations[1].at(), Point::new(5.5, 130.0));
        assert_eq!(annotations[1].anchor(), None);
    }

    #[test]
    fn test_bad_annotations() {
        for annotation in [
            "{ at = [1, 2, 3], text = 'x' }",
            "{ at = [1, 2], text = 'x', anchor = 'north' }",
            "{ at = [1, 2] }",
        ] {
            let source = format!(
                "[[diagram]]\nname = \"A\"\ntopology = \"mixing2\"\nannotations = [{annotation}]\n"
            );

            let err = parse_script(&source).unwrap_err();
            assert!(
                matches!(err, FeynError::Script { .. }),
                "accepted {annotation}: {err:?}"
            );
        }
    }

    #[test]
    fn test_unknown_topology() {
        let source = "[[diagram]]\nname = \"A\"\ntopology = \"penguin\"\n";

        match parse_script(source) {
            Err(FeynError::Script { message, .. }) => assert!(message.contains("penguin")),
            other => panic!("Expected a script error, got {other:?}"),
        }
    }
}
