//! Drawing instructions and their `axodraw2` syntax.

use std::fmt;

use crate::{
    draw::{Anchor, ArrowOptions},
    geometry::Point,
};

/// The centre, radius and angular span of an arc, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    center: Point,
    radius: f32,
    start: f32,
    end: f32,
}

impl ArcGeometry {
    /// Creates an arc from `start` to `end` degrees around `center`.
    pub fn new(center: Point, radius: f32, start: f32, end: f32) -> Self {
        Self {
            center,
            radius,
            start,
            end,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Returns the same arc with its angular start and end swapped.
    pub fn swapped(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            ..self
        }
    }

    /// Returns the same arc with its centre moved by `offset`.
    pub fn translated(self, offset: Point) -> Self {
        Self {
            center: self.center.add_point(offset),
            ..self
        }
    }
}

/// Rendering mode of a boson propagator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BosonStyle {
    /// Wavy line, used for W bosons and photons.
    Photon,
    /// Curly line, used for gluons.
    Gluon,
}

impl BosonStyle {
    fn line_command(self) -> &'static str {
        match self {
            Self::Photon => r"\Photon",
            Self::Gluon => r"\Gluon",
        }
    }

    fn arc_command(self) -> &'static str {
        match self {
            Self::Photon => r"\PhotonArc",
            Self::Gluon => r"\GluonArc",
        }
    }
}

/// Discriminant of an [`Instruction`], for filtering and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Text,
    BoundState,
    FermionLine,
    FermionArc,
    BosonLine,
    BosonArc,
    Vertex,
}

/// One immutable drawing command.
///
/// All coordinates already include the canvas offset, so an instruction is
/// self-contained; only its position in the canvas determines layering.
/// [`fmt::Display`] produces the `axodraw2` command.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Text {
        position: Point,
        anchor: Option<Anchor>,
        content: String,
    },
    BoundState {
        position: Point,
        width: f32,
        height: f32,
        rotation: f32,
        grey: f32,
    },
    FermionLine {
        start: Point,
        end: Point,
        options: ArrowOptions,
    },
    FermionArc {
        arc: ArcGeometry,
        options: ArrowOptions,
    },
    BosonLine {
        style: BosonStyle,
        start: Point,
        end: Point,
        amplitude: f32,
        windings: u32,
    },
    BosonArc {
        style: BosonStyle,
        arc: ArcGeometry,
        amplitude: f32,
        windings: u32,
    },
    Vertex {
        position: Point,
        radius: f32,
    },
}

impl Instruction {
    /// Returns the kind of this instruction.
    pub fn kind(&self) -> InstructionKind {
        match self {
            Self::Text { .. } => InstructionKind::Text,
            Self::BoundState { .. } => InstructionKind::BoundState,
            Self::FermionLine { .. } => InstructionKind::FermionLine,
            Self::FermionArc { .. } => InstructionKind::FermionArc,
            Self::BosonLine { .. } => InstructionKind::BosonLine,
            Self::BosonArc { .. } => InstructionKind::BosonArc,
            Self::Vertex { .. } => InstructionKind::Vertex,
        }
    }

    /// Returns the instruction with its direction of travel flipped.
    ///
    /// A fermion line swaps its endpoints. A fermion arc swaps its angles and
    /// reverses its [`ArrowOptions`]. The drawn geometry is unchanged, only
    /// the arrowhead turns around. Other instructions have no direction and
    /// are returned unchanged.
    pub fn reversed(&self) -> Self {
        match self {
            Self::FermionLine {
                start,
                end,
                options,
            } => Self::FermionLine {
                start: *end,
                end: *start,
                options: *options,
            },
            Self::FermionArc { arc, options } => Self::FermionArc {
                arc: arc.swapped(),
                options: options.reversed(),
            },
            other => other.clone(),
        }
    }
}

fn write_arc(f: &mut fmt::Formatter<'_>, arc: &ArcGeometry) -> fmt::Result {
    write!(
        f,
        "{}({},{},{})",
        arc.center(),
        arc.radius(),
        arc.start(),
        arc.end()
    )
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text {
                position,
                anchor,
                content,
            } => {
                write!(f, r"\Text{position}")?;
                if let Some(anchor) = anchor {
                    write!(f, "{anchor}")?;
                }
                write!(f, "{{{content}}}")
            }
            Self::BoundState {
                position,
                width,
                height,
                rotation,
                grey,
            } => write!(
                f,
                r"\GOval{position}({width},{height})({rotation}){{{grey}}}"
            ),
            Self::FermionLine {
                start,
                end,
                options,
            } => write!(f, r"\Line[{options}]{start}{end}"),
            Self::FermionArc { arc, options } => {
                write!(f, r"\Arc[{options}]")?;
                write_arc(f, arc)
            }
            Self::BosonLine {
                style,
                start,
                end,
                amplitude,
                windings,
            } => write!(
                f,
                "{}{start}{end}{{{amplitude}}}{{{windings}}}",
                style.line_command()
            ),
            Self::BosonArc {
                style,
                arc,
                amplitude,
                windings,
            } => {
                f.write_str(style.arc_command())?;
                write_arc(f, arc)?;
                write!(f, "{{{amplitude}}}{{{windings}}}")
            }
            Self::Vertex { position, radius } => write!(f, r"\Vertex{position}{{{radius}}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_anchor() {
        let text = Instruction::Text {
            position: Point::new(105.0, 108.0),
            anchor: None,
            content: r"\small{$W^+$}".to_string(),
        };
        assert_eq!(text.to_string(), r"\Text(105,108){\small{$W^+$}}");
    }

    #[test]
    fn test_text_with_anchor() {
        let text = Instruction::Text {
            position: Point::new(30.0, 92.0),
            anchor: Some(Anchor::LeftBottom),
            content: "b".to_string(),
        };
        assert_eq!(text.to_string(), r"\Text(30,92)[lb]{b}");
    }

    #[test]
    fn test_bound_state() {
        let oval = Instruction::BoundState {
            position: Point::new(25.0, 70.0),
            width: 5.0,
            height: 20.0,
            rotation: 90.0,
            grey: 0.7,
        };
        assert_eq!(oval.to_string(), r"\GOval(25,70)(5,20)(90){0.7}");
    }

    #[test]
    fn test_fermion_arc() {
        let arc = Instruction::FermionArc {
            arc: ArcGeometry::new(Point::new(83.0, 103.0), 23.0, 355.0, 290.0),
            options: ArrowOptions::new()
                .with_clockwise()
                .with_arrow_position(0.4),
        };
        assert_eq!(
            arc.to_string(),
            r"\Arc[arrow,clockwise,arrowpos=0.4](83,103)(23,355,290)"
        );
    }

    #[test]
    fn test_boson_lines_and_arcs() {
        let gluon = Instruction::BosonLine {
            style: BosonStyle::Gluon,
            start: Point::new(97.0, 84.0),
            end: Point::new(125.0, 70.0),
            amplitude: -3.5,
            windings: 3,
        };
        assert_eq!(gluon.to_string(), r"\Gluon(97,84)(125,70){-3.5}{3}");

        let photon_arc = Instruction::BosonArc {
            style: BosonStyle::Photon,
            arc: ArcGeometry::new(Point::new(87.0, 87.0), 23.0, 35.0, 173.0),
            amplitude: -2.0,
            windings: 7,
        };
        assert_eq!(
            photon_arc.to_string(),
            r"\PhotonArc(87,87)(23,35,173){-2}{7}"
        );
    }

    #[test]
    fn test_vertex() {
        let vertex = Instruction::Vertex {
            position: Point::new(106.0, 100.5),
            radius: 2.0,
        };
        assert_eq!(vertex.to_string(), r"\Vertex(106,100.5){2}");
        assert_eq!(vertex.kind(), InstructionKind::Vertex);
    }

    #[test]
    fn test_reversed_line_swaps_endpoints() {
        let line = Instruction::FermionLine {
            start: Point::new(85.0, 90.0),
            end: Point::new(25.0, 90.0),
            options: ArrowOptions::new(),
        };
        assert_eq!(line.reversed().to_string(), r"\Line[arrow](25,90)(85,90)");
        assert_eq!(line.reversed().reversed(), line);
    }

    #[test]
    fn test_reversed_ignores_undirected_instructions() {
        let vertex = Instruction::Vertex {
            position: Point::new(1.0, 1.0),
            radius: 2.0,
        };
        assert_eq!(vertex.reversed(), vertex);
    }
}
