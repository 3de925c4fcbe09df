//! Feyn - Feynman diagrams for heavy-flavour decays as `axodraw2` LaTeX.
//!
//! A [`Diagram`] names one of a closed set of [`topology::Topology`]
//! layouts and fills in its labels. [`DiagramBuilder`] lays it out on a
//! canvas, serializes it to LaTeX and optionally compiles and rasterizes it.

pub mod config;
pub mod export;
pub mod gallery;
pub mod topology;

mod diagram;
mod error;

pub use feyn_core::{canvas, document, draw, geometry};

pub use diagram::{Annotation, CanvasOverrides, Diagram};
pub use error::FeynError;
pub use export::Artifacts;

use std::{fs, path::Path};

use log::{debug, info, trace, warn};

use feyn_core::canvas::Canvas;

use config::AppConfig;

/// Builder for laying out and exporting Feyn diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use feyn::{DiagramBuilder, Diagram, config::AppConfig};
/// use feyn::topology::{DecayParams, LabelPair, Meson, Topology};
///
/// let quarks = LabelPair::new(r"$\bquarkbar$", r"$\squark$");
/// let params = DecayParams::default()
///     .with_a(Meson::new(r"$\Bs$").with_quarks(quarks))
///     .with_w_label(r"\small{$\Wp$}");
/// let diagram = Diagram::new("Bs2JpsiPhi_tree", Topology::TreeInternal(params));
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // LaTeX source only
/// let tex = builder.render(&diagram);
///
/// // Source, PDF and optionally PNG on disk
/// let artifacts = builder
///     .generate(&diagram, Path::new("feyns"))
///     .expect("Failed to generate");
/// println!("{}", artifacts.tex().display());
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Frame, wrapper, output and toolchain settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder applies.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay a diagram out on a fresh canvas.
    ///
    /// The canvas frame is the configured one with the diagram's own
    /// overrides applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use feyn::{DiagramBuilder, Diagram};
    /// use feyn::draw::InstructionKind;
    /// use feyn::topology::{MixingParams, Topology};
    ///
    /// let diagram = Diagram::new("BsMixing1", Topology::Mixing1(MixingParams::default()));
    /// let canvas = DiagramBuilder::default().draw(&diagram);
    ///
    /// let vertices = canvas
    ///     .instructions()
    ///     .filter(|instruction| instruction.kind() == InstructionKind::Vertex)
    ///     .count();
    /// assert_eq!(vertices, 4);
    /// ```
    pub fn draw(&self, diagram: &Diagram) -> Canvas {
        info!(
            diagram = diagram.name(),
            topology = diagram.topology().name();
            "Laying out diagram"
        );

        let settings = diagram.canvas().apply(self.config.canvas());
        let wrapping = self.config.document().wrapping();
        debug!(
            width = settings.width(),
            height = settings.height(),
            grid = settings.grid(),
            raw = wrapping.is_raw();
            "Canvas frame"
        );

        let header = format!(
            "% {} generated by feyn {}",
            diagram.name(),
            env!("CARGO_PKG_VERSION")
        );
        let config = settings.to_canvas_config(wrapping);
        let mut canvas = Canvas::new(config, *self.config.style()).with_header(header);
        diagram.topology().draw(&mut canvas);

        if !diagram.annotations().is_empty() {
            let emitter = canvas.emitter();
            canvas.section("Annotations");
            for annotation in diagram.annotations() {
                let text = emitter.text(
                    annotation.at(),
                    Some(annotation.text()),
                    annotation.anchor().cloned(),
                );
                canvas.append(text, "Annotation");
            }
            canvas.gap();
        }

        debug!(entries = canvas.entries().len(); "Diagram laid out");
        canvas
    }

    /// Render a diagram to its LaTeX document.
    ///
    /// # Examples
    ///
    /// ```
    /// use feyn::{DiagramBuilder, Diagram};
    /// use feyn::topology::{DecayParams, Meson, Topology};
    ///
    /// let diagram = Diagram::new(
    ///     "feyn",
    ///     Topology::TreeExternal(DecayParams::default().with_a(Meson::new("X"))),
    /// );
    /// let tex = DiagramBuilder::default().render(&diagram);
    ///
    /// assert!(tex.contains(r"\Text(18,70)[r]{X}"));
    /// assert!(tex.contains(r"\begin{document}"));
    /// ```
    pub fn render(&self, diagram: &Diagram) -> String {
        let document = self.draw(diagram).serialize();
        trace!(document = document.as_str(); "Rendered document");
        document
    }

    /// Write a diagram's LaTeX source into `output_dir` and produce the
    /// configured artifacts next to it.
    ///
    /// The shared symbol file is checked before anything is laid out or
    /// written, so a missing file leaves `output_dir` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FeynError::Config`] when the diagram name is not a plain file
    /// name, [`FeynError::MissingSymbols`] when compilation needs a symbol
    /// file that does not exist, [`FeynError::Io`] when writing fails, and
    /// the toolchain errors of [`export::compile`] and [`export::rasterize`].
    pub fn generate(&self, diagram: &Diagram, output_dir: &Path) -> Result<Artifacts, FeynError> {
        diagram.check_name().map_err(FeynError::Config)?;
        export::preflight(&self.config)?;

        let document = self.render(diagram);

        fs::create_dir_all(output_dir)?;
        let tex = output_dir.join(format!("{}.tex", diagram.name()));
        fs::write(&tex, document)?;
        info!(path:? = tex; "Diagram source written");

        let mut artifacts = Artifacts::new(tex);
        let output = self.config.output();

        if !output.compile() {
            if output.raster() {
                warn!(
                    diagram = diagram.name();
                    "Raster conversion needs a compiled document, skipping"
                );
            }
            return Ok(artifacts);
        }

        let pdf = export::compile(
            artifacts.tex(),
            self.config.toolchain(),
            self.config.document().required_symbols(),
        )?;

        if output.raster() {
            let png = export::rasterize(&pdf, self.config.toolchain())?;
            artifacts.set_png(png);
        }
        artifacts.set_pdf(pdf);

        Ok(artifacts)
    }
}
