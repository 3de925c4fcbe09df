//! Configuration types for Feyn diagram generation.
//!
//! This module provides configuration structures that control the picture
//! frame, the document wrappers, which artifacts are produced and which
//! external tools produce them. All types implement [`serde::Deserialize`]
//! so they can be loaded from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`CanvasSettings`] - Picture size, offset and alignment grid.
//! - [`DocumentConfig`] - Standalone-document and shared-symbol wrappers.
//! - [`OutputConfig`] - Whether a PDF and a PNG are produced.
//! - [`ToolchainConfig`] - Names and arguments of the external tools.
//!
//! # Example
//!
//! ```
//! # use feyn::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 190.0);
//! assert!(config.output().compile());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use feyn_core::{canvas::CanvasConfig, document::Wrapping, draw::StyleDefinition, geometry::Point};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Picture frame section.
    #[serde(default)]
    canvas: CanvasSettings,

    /// Document wrapper section.
    #[serde(default)]
    document: DocumentConfig,

    /// Produced artifacts section.
    #[serde(default)]
    output: OutputConfig,

    /// External tools section.
    #[serde(default)]
    toolchain: ToolchainConfig,

    /// Oval and vertex sizes.
    #[serde(default)]
    style: StyleDefinition,
}

impl AppConfig {
    /// Returns the picture frame settings.
    pub fn canvas(&self) -> &CanvasSettings {
        &self.canvas
    }

    /// Returns the document wrapper settings.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns the artifact settings.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the external tool settings.
    pub fn toolchain(&self) -> &ToolchainConfig {
        &self.toolchain
    }

    /// Returns the style applied to ovals and vertices.
    pub fn style(&self) -> &StyleDefinition {
        &self.style
    }

    pub fn with_canvas(mut self, canvas: CanvasSettings) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_document(mut self, document: DocumentConfig) -> Self {
        self.document = document;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_toolchain(mut self, toolchain: ToolchainConfig) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn with_style(mut self, style: StyleDefinition) -> Self {
        self.style = style;
        self
    }
}

/// Size, offset and grid of the picture frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    width: f32,
    height: f32,
    dx: f32,
    dy: f32,
    grid: bool,
}

impl CanvasSettings {
    /// Creates settings for a `width` x `height` frame without offset or grid.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            dx: 0.0,
            dy: 0.0,
            grid: false,
        }
    }

    /// Sets the shift applied to every coordinate.
    pub fn with_offset(mut self, dx: f32, dy: f32) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Sets whether the alignment grid is drawn.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn offset(&self) -> Point {
        Point::new(self.dx, self.dy)
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    /// Builds the core canvas configuration for these settings.
    pub fn to_canvas_config(&self, wrapping: Wrapping) -> CanvasConfig {
        CanvasConfig::new(self.width, self.height)
            .with_offset(self.offset())
            .with_grid(self.grid)
            .with_wrapping(wrapping)
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self::new(190.0, 140.0)
    }
}

/// Wrapper layers written around the picture.
///
/// `raw` overrides both wrapper flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    raw: bool,
    wrap_document: bool,
    wrap_symbols: bool,
    symbols: PathBuf,
}

impl DocumentConfig {
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn with_wrap_document(mut self, wrap: bool) -> Self {
        self.wrap_document = wrap;
        self
    }

    pub fn with_wrap_symbols(mut self, wrap: bool) -> Self {
        self.wrap_symbols = wrap;
        self
    }

    /// Sets the path of the shared symbol-definition file.
    pub fn with_symbols(mut self, path: impl Into<PathBuf>) -> Self {
        self.symbols = path.into();
        self
    }

    pub fn raw(&self) -> bool {
        self.raw
    }

    /// Returns the configured symbol-definition file path.
    pub fn symbols(&self) -> &Path {
        &self.symbols
    }

    /// Returns the symbol file the document includes, or `None` when the
    /// shared-symbol layer is off.
    pub fn required_symbols(&self) -> Option<&Path> {
        (!self.raw && self.wrap_symbols).then_some(self.symbols.as_path())
    }

    /// Resolves the effective wrapper layers.
    ///
    /// The symbol file is included by its stem, since `\input` appends the
    /// `.tex` extension itself.
    pub fn wrapping(&self) -> Wrapping {
        if self.raw {
            return Wrapping::raw();
        }

        let symbols = self.required_symbols().map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned())
        });
        Wrapping::new(self.wrap_document, symbols)
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            raw: false,
            wrap_document: true,
            wrap_symbols: true,
            symbols: PathBuf::from("lhcb-symbols-def.tex"),
        }
    }
}

/// Which artifacts are produced next to the `.tex` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    compile: bool,
    raster: bool,
}

impl OutputConfig {
    pub fn new(compile: bool, raster: bool) -> Self {
        Self { compile, raster }
    }

    /// Returns whether the document is compiled into a PDF.
    pub fn compile(&self) -> bool {
        self.compile
    }

    /// Returns whether the compiled PDF is converted into a PNG.
    pub fn raster(&self) -> bool {
        self.raster
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// External programs used to produce artifacts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    latex: String,
    latex_args: Vec<String>,
    axohelp: String,
    rasterizer: String,
}

impl ToolchainConfig {
    pub fn with_latex(mut self, latex: impl Into<String>) -> Self {
        self.latex = latex.into();
        self
    }

    pub fn with_latex_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.latex_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_axohelp(mut self, axohelp: impl Into<String>) -> Self {
        self.axohelp = axohelp.into();
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: impl Into<String>) -> Self {
        self.rasterizer = rasterizer.into();
        self
    }

    /// Returns the typesetting program.
    pub fn latex(&self) -> &str {
        &self.latex
    }

    /// Returns the arguments passed to every typesetting pass before the
    /// document name.
    pub fn latex_args(&self) -> &[String] {
        &self.latex_args
    }

    /// Returns the `axodraw2` helper program run between the two passes.
    pub fn axohelp(&self) -> &str {
        &self.axohelp
    }

    /// Returns the PDF to PNG converter.
    pub fn rasterizer(&self) -> &str {
        &self.rasterizer
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            latex: "pdflatex".to_string(),
            latex_args: vec![
                "-interaction=nonstopmode".to_string(),
                "-halt-on-error".to_string(),
            ],
            axohelp: "axohelp".to_string(),
            rasterizer: "pdftoppm".to_string(),
        }
    }
}
