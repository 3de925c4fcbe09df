//! The instruction accumulator and its serializer.
//!
//! A [`Canvas`] is filled by exactly one topology layout and then serialized
//! once into `axodraw2` code:
//!
//! ```text
//! [header]
//! [preamble]                      (document and/or shared-symbol wrapper)
//! \begin{axopicture}(w,h)
//! [\AxoGrid ...]                  (grid on)
//!   <instruction>   % <comment>   (one line per entry, comments aligned)
//! \end{axopicture}
//! [postamble]
//! ```
//!
//! # Example
//!
//! ```
//! # use feyn_core::canvas::{Canvas, CanvasConfig};
//! # use feyn_core::draw::StyleDefinition;
//! # use feyn_core::document::Wrapping;
//! # use feyn_core::geometry::Point;
//! let config = CanvasConfig::new(190.0, 140.0).with_wrapping(Wrapping::raw());
//! let mut canvas = Canvas::new(config, StyleDefinition::default());
//!
//! let emitter = canvas.emitter();
//! canvas.section("W line");
//! canvas.append(emitter.vertex(Point::new(85.0, 90.0)), "Start Vertex");
//! canvas.append(emitter.text(Point::new(105.0, 108.0), None, None), "Label");
//!
//! let body = canvas.serialize();
//! assert!(body.starts_with(r"\begin{axopicture}(190,140)"));
//! assert!(body.contains(r"\Vertex(85,90){2}"));
//! assert!(!body.contains("Label"));
//! ```

use std::fmt::Write;

use log::{debug, trace};

use crate::{
    document::{self, Wrapping},
    draw::{Emitter, Instruction, StyleDefinition},
    geometry::Point,
};

/// Extra columns between the widest entry and the comment column.
const COMMENT_BUFFER: usize = 2;

/// Grid cell size for the alignment grid.
const GRID_STEP: f32 = 10.0;

/// Frame and wrapping of a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    offset: Point,
    grid: bool,
    wrapping: Wrapping,
}

impl CanvasConfig {
    /// Creates a configuration for a `width` x `height` picture with no
    /// offset, no grid and a standalone document wrapper.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Point::default(),
            grid: false,
            wrapping: Wrapping::standalone(None),
        }
    }

    /// Sets the shift applied to every coordinate.
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Sets whether an alignment grid is drawn under the diagram.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the wrapper layers written around the picture.
    pub fn with_wrapping(mut self, wrapping: Wrapping) -> Self {
        self.wrapping = wrapping;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn wrapping(&self) -> &Wrapping {
        &self.wrapping
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(190.0, 140.0)
    }
}

/// One line of the picture body.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A drawing instruction with an optional trailing comment.
    Instruction {
        instruction: Instruction,
        comment: Option<String>,
    },
    /// A comment line introducing a group of instructions.
    Section(String),
    /// An empty separator line.
    Blank,
}

impl Entry {
    fn body(&self) -> String {
        match self {
            Self::Instruction { instruction, .. } => instruction.to_string(),
            Self::Section(title) => format!("% {title}"),
            Self::Blank => String::new(),
        }
    }

    fn comment(&self) -> Option<&str> {
        match self {
            Self::Instruction { comment, .. } => comment.as_deref(),
            _ => None,
        }
    }
}

/// An ordered list of drawing entries inside one picture frame.
#[derive(Debug, Clone)]
pub struct Canvas {
    config: CanvasConfig,
    style: StyleDefinition,
    header: Option<String>,
    entries: Vec<Entry>,
    max_width: usize,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new(config: CanvasConfig, style: StyleDefinition) -> Self {
        Self {
            config,
            style,
            header: None,
            entries: Vec::new(),
            max_width: 0,
        }
    }

    /// Sets a comment block written at the very top of the document.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Returns an emitter bound to this canvas's offset and style.
    pub fn emitter(&self) -> Emitter {
        Emitter::new(self.config.offset(), self.style)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn style(&self) -> &StyleDefinition {
        &self.style
    }

    /// Appends an instruction with a trailing comment.
    ///
    /// `None` appends nothing, which is how suppressed text labels vanish.
    pub fn append(&mut self, instruction: impl Into<Option<Instruction>>, comment: &str) {
        let Some(instruction) = instruction.into() else {
            return;
        };
        let comment = (!comment.is_empty()).then(|| comment.to_string());
        self.push(Entry::Instruction {
            instruction,
            comment,
        });
    }

    /// Appends a comment line naming the next group of instructions.
    pub fn section(&mut self, title: &str) {
        self.push(Entry::Section(title.to_string()));
    }

    /// Appends an empty separator line.
    pub fn gap(&mut self) {
        self.push(Entry::Blank);
    }

    fn push(&mut self, entry: Entry) {
        self.max_width = self.max_width.max(entry.body().chars().count());
        self.entries.push(entry);
    }

    /// Returns all entries in emission order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the instructions in emission order, skipping sections and gaps.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Instruction { instruction, .. } => Some(instruction),
            _ => None,
        })
    }

    /// Returns the width of the widest entry body, in characters.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Serializes the canvas into a complete document.
    ///
    /// The output depends only on the entries and the configuration.
    pub fn serialize(&self) -> String {
        debug!(
            entries = self.entries.len(),
            max_width = self.max_width,
            raw = self.config.wrapping().is_raw();
            "Serializing canvas"
        );

        let mut out = String::new();
        self.write_document(&mut out)
            .expect("Writing to String buffer is infallible");

        trace!(document = out.as_str(); "Serialized canvas");
        out
    }

    fn write_document(&self, out: &mut String) -> std::fmt::Result {
        if let Some(header) = &self.header {
            writeln!(out, "{header}\n")?;
        }

        document::write_preamble(out, self.config.wrapping())?;

        writeln!(
            out,
            r"\begin{{axopicture}}({},{})",
            self.config.width(),
            self.config.height()
        )?;
        writeln!(out)?;

        if self.config.grid() {
            let columns = (self.config.width() / GRID_STEP).floor() as u32;
            let rows = (self.config.height() / GRID_STEP).floor() as u32;
            writeln!(
                out,
                r"\AxoGrid(0,0)({GRID_STEP},{GRID_STEP})({columns},{rows}){{LightGray}}{{0.5}}"
            )?;
        }

        let width = self.max_width + COMMENT_BUFFER;
        for entry in &self.entries {
            let line = match entry.comment() {
                Some(comment) => format!("  {:<width$} % {comment}", entry.body()),
                None => format!("  {}", entry.body()),
            };
            writeln!(out, "{}", line.trim_end())?;
        }

        writeln!(out, r"\end{{axopicture}}")?;
        document::write_postamble(out, self.config.wrapping())
    }
}
