//! The primitive emitter.
//!
//! An [`Emitter`] turns geometry in a diagram's local frame into
//! [`Instruction`]s, applying the canvas offset to every coordinate and the
//! canvas [`StyleDefinition`] to ovals and vertices. It holds no other state;
//! the same call always yields the same instruction.

use crate::{
    draw::{Anchor, ArcGeometry, ArrowOptions, BosonStyle, Instruction, StyleDefinition},
    geometry::Point,
};

/// Formats single drawing primitives for one canvas frame.
///
/// Obtain one from [`Canvas::emitter`](crate::canvas::Canvas::emitter).
///
/// # Examples
///
/// ```
/// # use feyn_core::draw::{Emitter, StyleDefinition};
/// # use feyn_core::geometry::Point;
/// let emitter = Emitter::new(Point::new(10.0, 0.0), StyleDefinition::default());
/// let vertex = emitter.vertex(Point::new(85.0, 90.0));
/// assert_eq!(vertex.to_string(), r"\Vertex(95,90){2}");
///
/// // Absent labels produce nothing at all.
/// assert!(emitter.text(Point::new(0.0, 0.0), None, None).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    offset: Point,
    style: StyleDefinition,
}

impl Emitter {
    /// Creates an emitter shifting every coordinate by `offset`.
    pub fn new(offset: Point, style: StyleDefinition) -> Self {
        Self { offset, style }
    }

    /// Returns the offset added to every coordinate.
    pub fn offset(&self) -> Point {
        self.offset
    }

    fn shift(&self, point: Point) -> Point {
        point.add_point(self.offset)
    }

    /// A text label, or `None` when there is no content to show.
    pub fn text(
        &self,
        position: Point,
        content: Option<&str>,
        anchor: Option<Anchor>,
    ) -> Option<Instruction> {
        content.map(|content| Instruction::Text {
            position: self.shift(position),
            anchor,
            content: content.to_string(),
        })
    }

    /// A shaded oval marking a composite bound state.
    pub fn bound_state(&self, position: Point) -> Instruction {
        Instruction::BoundState {
            position: self.shift(position),
            width: self.style.oval_width(),
            height: self.style.oval_height(),
            rotation: self.style.oval_rotation(),
            grey: self.style.oval_grey(),
        }
    }

    /// A straight fermion propagator with an arrowhead pointing from `start`
    /// to `end`, or from `end` to `start` when `reverse` is set.
    pub fn fermion_line(
        &self,
        start: Point,
        end: Point,
        reverse: bool,
        options: ArrowOptions,
    ) -> Instruction {
        let line = Instruction::FermionLine {
            start: self.shift(start),
            end: self.shift(end),
            options,
        };
        if reverse { line.reversed() } else { line }
    }

    /// A curved fermion propagator.
    ///
    /// With `reverse` set the angles swap, `clockwise` toggles and any arrow
    /// position `p` becomes `1 - p`, so the arrowhead stays where it was and
    /// only turns around.
    pub fn fermion_arc(
        &self,
        arc: ArcGeometry,
        reverse: bool,
        options: ArrowOptions,
    ) -> Instruction {
        let arc = Instruction::FermionArc {
            arc: arc.translated(self.offset),
            options,
        };
        if reverse { arc.reversed() } else { arc }
    }

    /// A wavy W boson or photon propagator.
    pub fn photon_line(
        &self,
        start: Point,
        end: Point,
        amplitude: f32,
        windings: u32,
    ) -> Instruction {
        self.boson_line(BosonStyle::Photon, start, end, amplitude, windings)
    }

    /// A curly gluon propagator.
    pub fn gluon_line(
        &self,
        start: Point,
        end: Point,
        amplitude: f32,
        windings: u32,
    ) -> Instruction {
        self.boson_line(BosonStyle::Gluon, start, end, amplitude, windings)
    }

    /// A wavy W boson or photon arc.
    pub fn photon_arc(&self, arc: ArcGeometry, amplitude: f32, windings: u32) -> Instruction {
        self.boson_arc(BosonStyle::Photon, arc, amplitude, windings)
    }

    /// A curly gluon arc.
    pub fn gluon_arc(&self, arc: ArcGeometry, amplitude: f32, windings: u32) -> Instruction {
        self.boson_arc(BosonStyle::Gluon, arc, amplitude, windings)
    }

    /// A filled point marking an interaction vertex.
    pub fn vertex(&self, position: Point) -> Instruction {
        Instruction::Vertex {
            position: self.shift(position),
            radius: self.style.vertex_radius(),
        }
    }

    fn boson_line(
        &self,
        style: BosonStyle,
        start: Point,
        end: Point,
        amplitude: f32,
        windings: u32,
    ) -> Instruction {
        Instruction::BosonLine {
            style,
            start: self.shift(start),
            end: self.shift(end),
            amplitude,
            windings,
        }
    }

    fn boson_arc(
        &self,
        style: BosonStyle,
        arc: ArcGeometry,
        amplitude: f32,
        windings: u32,
    ) -> Instruction {
        Instruction::BosonArc {
            style,
            arc: arc.translated(self.offset),
            amplitude,
            windings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter() -> Emitter {
        Emitter::new(Point::default(), StyleDefinition::default())
    }

    #[test]
    fn test_text_absent_content_emits_nothing() {
        let text = emitter().text(Point::new(30.0, 92.0), None, Some(Anchor::LeftBottom));
        assert_eq!(text, None);
    }

    #[test]
    fn test_text_present_content() {
        let text = emitter()
            .text(Point::new(18.0, 70.0), Some(r"$\Bs$"), Some(Anchor::Right))
            .unwrap();
        assert_eq!(text.to_string(), r"\Text(18,70)[r]{$\Bs$}");
    }

    #[test]
    fn test_bound_state_uses_style() {
        let style = StyleDefinition::default().with_oval_size(6.0, 24.0);
        let oval = Emitter::new(Point::default(), style).bound_state(Point::new(165.0, 110.0));
        assert_eq!(oval.to_string(), r"\GOval(165,110)(6,24)(90){0.7}");
    }

    #[test]
    fn test_fermion_line_reverse_keeps_endpoints() {
        let forward = emitter().fermion_line(
            Point::new(85.0, 90.0),
            Point::new(25.0, 90.0),
            false,
            ArrowOptions::new(),
        );
        let backward = emitter().fermion_line(
            Point::new(85.0, 90.0),
            Point::new(25.0, 90.0),
            true,
            ArrowOptions::new(),
        );
        assert_eq!(forward.to_string(), r"\Line[arrow](85,90)(25,90)");
        assert_eq!(backward.to_string(), r"\Line[arrow](25,90)(85,90)");
    }

    #[test]
    fn test_fermion_arc_reverse_mirrors_options() {
        let options = ArrowOptions::new()
            .with_clockwise()
            .with_arrow_position(0.4);
        let arc = ArcGeometry::new(Point::new(83.0, 103.0), 23.0, 355.0, 290.0);

        let reversed = emitter().fermion_arc(arc, true, options);
        assert_eq!(
            reversed.to_string(),
            r"\Arc[arrow,arrowpos=0.60](83,103)(23,290,355)"
        );
    }

    #[test]
    fn test_gluon_and_photon_styles_differ() {
        let start = Point::new(97.0, 84.0);
        let end = Point::new(125.0, 70.0);
        let arc = ArcGeometry::new(Point::new(87.0, 87.0), 23.0, 35.0, 173.0);

        let gluon = emitter().gluon_line(start, end, -3.5, 3).to_string();
        let photon = emitter().photon_line(start, end, -2.0, 5).to_string();
        let gluon_arc = emitter().gluon_arc(arc, -2.0, 7).to_string();
        let photon_arc = emitter().photon_arc(arc, -2.0, 7).to_string();

        assert!(gluon.starts_with(r"\Gluon("));
        assert!(photon.starts_with(r"\Photon("));
        assert!(gluon_arc.starts_with(r"\GluonArc("));
        assert!(photon_arc.starts_with(r"\PhotonArc("));
    }
}
