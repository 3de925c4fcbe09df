//! Tree-level A -> B C decays through a W boson.

use log::debug;

use feyn_core::{canvas::Canvas, draw::Anchor, geometry::Point};

use super::{DecayParams, MesonLegs, draw_meson};

/// The decaying meson on the left.
///
/// Its upper line starts where the W (or the loop) attaches, at
/// `upper_start`.
pub(super) fn a_meson(upper_start: Point) -> MesonLegs {
    MesonLegs {
        section: "A meson",
        upper_text: (Point::new(30.0, 92.0), Anchor::LeftBottom),
        upper_line: (upper_start, Point::new(25.0, 90.0)),
        lower_text: (Point::new(30.0, 48.0), Anchor::LeftTop),
        lower_line: (Point::new(25.0, 50.0), Point::new(85.0, 50.0)),
        state_text: (Point::new(18.0, 70.0), Anchor::Right),
        state: Point::new(25.0, 70.0),
    }
}

/// The upper-right meson, whose lines meet at `upper_vertex` and
/// `lower_vertex`.
pub(super) fn b_meson(upper_vertex: Point, lower_vertex: Point, lower_text_y: f32) -> MesonLegs {
    MesonLegs {
        section: "B meson",
        upper_text: (Point::new(160.0, 129.0), Anchor::RightBottom),
        upper_line: (Point::new(165.0, 130.0), upper_vertex),
        lower_text: (Point::new(160.0, lower_text_y), Anchor::RightTop),
        lower_line: (lower_vertex, Point::new(165.0, 90.0)),
        state_text: (Point::new(172.0, 110.0), Anchor::Left),
        state: Point::new(165.0, 110.0),
    }
}

/// The lower-right meson. Its lower line always continues the spectator
/// quark of A.
pub(super) fn c_meson(upper_vertex: Point) -> MesonLegs {
    MesonLegs {
        section: "C meson",
        upper_text: (Point::new(160.0, 56.0), Anchor::RightBottom),
        upper_line: (Point::new(165.0, 50.0), upper_vertex),
        lower_text: (Point::new(160.0, 11.0), Anchor::RightTop),
        lower_line: (Point::new(85.0, 50.0), Point::new(165.0, 10.0)),
        state_text: (Point::new(172.0, 30.0), Anchor::Left),
        state: Point::new(165.0, 30.0),
    }
}

/// Draws the tree decay where the W materialises as the B meson.
pub fn tree_external(canvas: &mut Canvas, params: &DecayParams) {
    debug!(
        draw_states = params.draw_states(),
        anti_at_top = params.anti_at_top();
        "Laying out external tree"
    );
    let orientation = params.orientation();
    let emitter = canvas.emitter();
    let decay = Point::new(85.0, 90.0);
    let apex = Point::new(125.0, 110.0);

    draw_meson(
        canvas,
        a_meson(decay),
        params.a(),
        orientation,
        params.draw_states(),
    );

    canvas.section("External W line");
    canvas.append(
        emitter.text(Point::new(105.0, 108.0), params.w_label(), None),
        "Label",
    );
    canvas.append(emitter.photon_line(decay, apex, -2.0, 5), "Line");
    canvas.append(emitter.vertex(decay), "Start Vertex");
    canvas.append(emitter.vertex(apex), "End Vertex");
    canvas.gap();

    draw_meson(
        canvas,
        b_meson(apex, apex, 91.0),
        params.b(),
        orientation,
        params.draw_states(),
    );
    draw_meson(
        canvas,
        c_meson(decay),
        params.c(),
        orientation,
        params.draw_states(),
    );
}

/// Draws the tree decay where the W ends inside the diagram and B takes
/// the decaying quark.
pub fn tree_internal(canvas: &mut Canvas, params: &DecayParams) {
    debug!(
        draw_states = params.draw_states(),
        anti_at_top = params.anti_at_top();
        "Laying out internal tree"
    );
    let orientation = params.orientation();
    let emitter = canvas.emitter();
    let decay = Point::new(85.0, 90.0);
    let internal = Point::new(125.0, 70.0);

    draw_meson(
        canvas,
        a_meson(decay),
        params.a(),
        orientation,
        params.draw_states(),
    );

    canvas.section("Internal W line");
    canvas.append(
        emitter.text(Point::new(113.0, 86.0), params.w_label(), None),
        "Label",
    );
    canvas.append(emitter.photon_line(decay, internal, -2.0, 5), "Line");
    canvas.append(emitter.vertex(decay), "Start Vertex");
    canvas.append(emitter.vertex(internal), "End Vertex");
    canvas.gap();

    draw_meson(
        canvas,
        b_meson(decay, internal, 84.0),
        params.b(),
        orientation,
        params.draw_states(),
    );
    draw_meson(
        canvas,
        c_meson(internal),
        params.c(),
        orientation,
        params.draw_states(),
    );
}

#[cfg(test)]
mod tests {
    use feyn_core::{
        canvas::{Canvas, CanvasConfig},
        document::Wrapping,
        draw::{Instruction, InstructionKind, StyleDefinition},
    };

    use super::*;
    use crate::topology::{LabelPair, Meson};

    fn raw_canvas() -> Canvas {
        Canvas::new(
            CanvasConfig::default().with_wrapping(Wrapping::raw()),
            StyleDefinition::default(),
        )
    }

    fn lines(canvas: &Canvas) -> Vec<String> {
        canvas.instructions().map(Instruction::to_string).collect()
    }

    #[test]
    fn test_tree_external_skeleton() {
        let mut canvas = raw_canvas();
        tree_external(&mut canvas, &DecayParams::default());
        let lines = lines(&canvas);

        assert_eq!(
            lines,
            [
                r"\Line[arrow](85,90)(25,90)",
                r"\Line[arrow](25,50)(85,50)",
                r"\GOval(25,70)(5,20)(90){0.7}",
                r"\Photon(85,90)(125,110){-2}{5}",
                r"\Vertex(85,90){2}",
                r"\Vertex(125,110){2}",
                r"\Line[arrow](165,130)(125,110)",
                r"\Line[arrow](125,110)(165,90)",
                r"\GOval(165,110)(5,20)(90){0.7}",
                r"\Line[arrow](165,50)(85,90)",
                r"\Line[arrow](85,50)(165,10)",
                r"\GOval(165,30)(5,20)(90){0.7}",
            ]
        );
    }

    #[test]
    fn test_tree_external_labels() {
        let quarks = LabelPair::new(r"$\bquarkbar$", r"$\uquark$");
        let params = DecayParams::default()
            .with_a(Meson::new(r"$\Bp$").with_quarks(quarks))
            .with_b(Meson::new(r"$\Dzb$"))
            .with_w_label(r"\small{$\Wp$}");
        let mut canvas = raw_canvas();
        tree_external(&mut canvas, &params);
        let lines = lines(&canvas);

        assert!(lines.contains(&r"\Text(30,92)[lb]{$\bquarkbar$}".to_string()));
        assert!(lines.contains(&r"\Text(30,48)[lt]{$\uquark$}".to_string()));
        assert!(lines.contains(&r"\Text(18,70)[r]{$\Bp$}".to_string()));
        assert!(lines.contains(&r"\Text(172,110)[l]{$\Dzb$}".to_string()));
        assert!(lines.contains(&r"\Text(105,108){\small{$\Wp$}}".to_string()));
    }

    #[test]
    fn test_tree_internal_reversed() {
        let mut canvas = raw_canvas();
        tree_internal(&mut canvas, &DecayParams::default().with_anti_at_top(false));
        let lines = lines(&canvas);

        // Every fermion line points the other way, bosons are untouched.
        assert_eq!(lines[0], r"\Line[arrow](25,90)(85,90)");
        assert!(lines.contains(&r"\Photon(85,90)(125,70){-2}{5}".to_string()));
        assert!(lines.contains(&r"\Line[arrow](85,90)(165,130)".to_string()));
        assert!(lines.contains(&r"\Line[arrow](165,90)(125,70)".to_string()));
        assert!(lines.contains(&r"\Line[arrow](125,70)(165,50)".to_string()));
    }

    #[test]
    fn test_tree_internal_role_comments() {
        let mut canvas = raw_canvas();
        tree_internal(&mut canvas, &DecayParams::default().with_anti_at_top(false));
        let body = canvas.serialize();

        let first_line = body
            .lines()
            .find(|line| line.contains(r"\Line"))
            .unwrap_or_default();
        assert!(first_line.ends_with("% quark Line"));
        assert!(body.contains("% Internal W line"));
    }

    #[test]
    fn test_draw_states_off_keeps_lines() {
        let mut with_states = raw_canvas();
        tree_external(&mut with_states, &DecayParams::default());
        let mut without_states = raw_canvas();
        tree_external(
            &mut without_states,
            &DecayParams::default()
                .with_a(Meson::new("A"))
                .with_draw_states(false),
        );

        let kinds: Vec<InstructionKind> = without_states
            .instructions()
            .map(Instruction::kind)
            .collect();
        assert!(!kinds.contains(&InstructionKind::BoundState));
        assert!(!kinds.contains(&InstructionKind::Text));

        let expected: Vec<&Instruction> = with_states
            .instructions()
            .filter(|instruction| instruction.kind() != InstructionKind::BoundState)
            .collect();
        let actual: Vec<&Instruction> = without_states.instructions().collect();
        assert_eq!(actual, expected);
    }
}
