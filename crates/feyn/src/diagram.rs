//! A named diagram: a topology with its labels and optional frame overrides.

use serde::Deserialize;

use feyn_core::{draw::Anchor, geometry::Point};

use crate::{config::CanvasSettings, topology::Topology};

/// One diagram to generate.
///
/// In a decay script every `[[diagram]]` table deserializes into a
/// `Diagram`; the `topology` tag and the topology's labels sit directly in
/// the table.
///
/// ```
/// # use feyn::{Diagram, topology::{DecayParams, Meson, Topology}};
/// let diagram = Diagram::new(
///     "Bp2DzbKp",
///     Topology::TreeExternal(DecayParams::default().with_a(Meson::new(r"$\Bp$"))),
/// );
/// assert_eq!(diagram.name(), "Bp2DzbKp");
/// assert_eq!(diagram.topology().name(), "tree-external");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Diagram {
    name: String,

    #[serde(default)]
    canvas: CanvasOverrides,

    #[serde(default)]
    annotations: Vec<Annotation>,

    #[serde(flatten)]
    topology: Topology,
}

impl Diagram {
    /// Creates a diagram written to `<name>.tex`.
    ///
    /// A trailing `.tex` or `.pdf` extension on `name` is dropped.
    pub fn new(name: impl Into<String>, topology: Topology) -> Self {
        Self {
            name: name.into(),
            canvas: CanvasOverrides::default(),
            annotations: Vec::new(),
            topology,
        }
    }

    pub fn with_canvas(mut self, canvas: CanvasOverrides) -> Self {
        self.canvas = canvas;
        self
    }

    /// Adds a free label drawn after the topology.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Returns the output base name, without extension.
    pub fn name(&self) -> &str {
        let name = self.name.as_str();
        name.strip_suffix(".tex")
            .or_else(|| name.strip_suffix(".pdf"))
            .unwrap_or(name)
    }

    /// Checks that the name is a plain file name, so the diagram's outputs
    /// land directly inside the output directory.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when the name is empty, contains
    /// a path separator or contains `..`.
    pub fn check_name(&self) -> Result<(), String> {
        let name = self.name();
        if name.is_empty() {
            return Err("diagram name is empty".to_string());
        }
        if name.contains(['/', '\\']) {
            return Err(format!("diagram name `{name}` contains a path separator"));
        }
        if name.contains("..") {
            return Err(format!("diagram name `{name}` contains `..`"));
        }
        Ok(())
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn canvas(&self) -> &CanvasOverrides {
        &self.canvas
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// A text label placed at a fixed point on top of the topology.
///
/// In a decay script: `annotations = [{ at = [95, 10], text = '...', anchor = 'b' }]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Annotation {
    at: Point,
    text: String,
    #[serde(default)]
    anchor: Option<Anchor>,
}

impl Annotation {
    pub fn new(at: Point, text: impl Into<String>) -> Self {
        Self {
            at,
            text: text.into(),
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn at(&self) -> Point {
        self.at
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }
}

/// Per-diagram replacements for the configured frame settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasOverrides {
    width: Option<f32>,
    height: Option<f32>,
    dx: Option<f32>,
    dy: Option<f32>,
    grid: Option<bool>,
}

impl CanvasOverrides {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_offset(mut self, dx: f32, dy: f32) -> Self {
        self.dx = Some(dx);
        self.dy = Some(dy);
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Returns `base` with every set override applied.
    pub fn apply(&self, base: &CanvasSettings) -> CanvasSettings {
        let offset = base.offset();
        let width = self.width.unwrap_or(base.width());
        let height = self.height.unwrap_or(base.height());
        let dx = self.dx.unwrap_or(offset.x());
        let dy = self.dy.unwrap_or(offset.y());

        CanvasSettings::new(width, height)
            .with_offset(dx, dy)
            .with_grid(self.grid.unwrap_or(base.grid()))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::topology::QuarkLoopParams;

    #[test]
    fn test_name_drops_extension() {
        let topology = Topology::LoopExternalQuark(QuarkLoopParams::default());
        assert_eq!(Diagram::new("feyn.tex", topology.clone()).name(), "feyn");
        assert_eq!(Diagram::new("feyn.pdf", topology.clone()).name(), "feyn");
        assert_eq!(Diagram::new("Bs2KstKst", topology).name(), "Bs2KstKst");
    }

    #[test]
    fn test_check_name_accepts_plain_names() {
        let topology = Topology::LoopExternalQuark(QuarkLoopParams::default());
        for name in ["Bd2KstKst", "Bs2DsK.tex", "BsMixing_1"] {
            let diagram = Diagram::new(name, topology.clone());
            assert_eq!(diagram.check_name(), Ok(()));
        }
    }

    #[test]
    fn test_check_name_rejects_paths() {
        let topology = Topology::LoopExternalQuark(QuarkLoopParams::default());
        for name in ["", ".tex", "../escaped", "feyns/Bd2KstKst", r"sub\x", ".."] {
            let diagram = Diagram::new(name, topology.clone());
            assert!(diagram.check_name().is_err(), "accepted `{name}`");
        }
    }

    #[test]
    fn test_empty_overrides_keep_base() {
        let base = CanvasSettings::new(190.0, 140.0)
            .with_offset(3.0, 4.0)
            .with_grid(true);
        assert_eq!(CanvasOverrides::default().apply(&base), base);
    }

    #[test]
    fn test_overrides_replace_fields() {
        let base = CanvasSettings::default();
        let settings = CanvasOverrides::default()
            .with_size(200.0, 150.0)
            .with_grid(true)
            .apply(&base);

        assert_approx_eq!(f32, settings.width(), 200.0);
        assert_approx_eq!(f32, settings.height(), 150.0);
        assert!(settings.offset().is_zero());
        assert!(settings.grid());

        let shifted = CanvasOverrides::default()
            .with_offset(10.0, -5.0)
            .apply(&base);
        assert_approx_eq!(f32, shifted.offset().x(), 10.0);
        assert_approx_eq!(f32, shifted.offset().y(), -5.0);
        assert_approx_eq!(f32, shifted.width(), 190.0);
    }
}
