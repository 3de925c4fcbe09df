//! Penguin (loop) A -> B C decays with gluon emission.

use log::debug;

use feyn_core::{
    canvas::Canvas,
    draw::{ArcGeometry, ArrowOptions},
    geometry::Point,
};

use super::{
    DecayParams, Orientation, draw_meson,
    tree::{a_meson, b_meson, c_meson},
};

/// Where the upper quark of A enters the external loop.
pub(super) const LOOP_ENTRY: Point = Point::new(64.0, 90.0);

/// Where the loop releases the quark that forms B.
pub(super) const LOOP_EXIT: Point = Point::new(106.0, 100.5);

/// Where the gluon splits into the C quark pair.
pub(super) const GLUON_SPLIT: Point = Point::new(125.0, 70.0);

/// Emits the loop threaded by a W arc and the gluon leaving it.
///
/// Shared by the meson and bare-quark variants of the external penguin.
pub(super) fn draw_external_loop(
    canvas: &mut Canvas,
    w_label: Option<&str>,
    loop_label: Option<&str>,
    orientation: Orientation,
) {
    let emitter = canvas.emitter();
    let center = Point::new(83.0, 103.0);
    let options = ArrowOptions::new()
        .with_clockwise()
        .with_arrow_position(0.4);
    let gluon_start = Point::new(97.0, 84.0);

    canvas.section("Loop");
    canvas.append(
        emitter.text(Point::new(80.0, 115.0), w_label, None),
        "W Label",
    );
    canvas.append(
        emitter.photon_arc(
            ArcGeometry::new(Point::new(87.0, 87.0), 23.0, 35.0, 173.0),
            -2.0,
            7,
        ),
        "W Line",
    );
    canvas.append(
        emitter.text(Point::new(83.0, 88.0), loop_label, None),
        "fermion Label",
    );
    canvas.append(
        emitter.fermion_arc(
            ArcGeometry::new(center, 23.0, 355.0, 290.0),
            orientation.reverse(),
            options,
        ),
        "fermion Line1",
    );
    canvas.append(
        emitter.fermion_arc(
            ArcGeometry::new(center, 23.0, 290.0, 215.0),
            orientation.reverse(),
            options,
        ),
        "fermion Line2",
    );
    canvas.append(emitter.vertex(LOOP_ENTRY), "Start Vertex");
    canvas.append(emitter.vertex(LOOP_EXIT), "End Vertex");

    canvas.section("Gluon");
    canvas.append(
        emitter.gluon_line(gluon_start, GLUON_SPLIT, -3.5, 3),
        "gluon Line",
    );
    canvas.append(emitter.vertex(GLUON_SPLIT), "Start Vertex");
    canvas.append(emitter.vertex(gluon_start), "End Vertex");
}

/// Draws the penguin whose gluon produces the C meson.
pub fn loop_external(canvas: &mut Canvas, params: &DecayParams) {
    debug!(
        draw_states = params.draw_states(),
        anti_at_top = params.anti_at_top();
        "Laying out external loop"
    );
    let orientation = params.orientation();

    draw_meson(
        canvas,
        a_meson(LOOP_ENTRY),
        params.a(),
        orientation,
        params.draw_states(),
    );
    draw_external_loop(canvas, params.w_label(), params.loop_label(), orientation);
    draw_meson(
        canvas,
        b_meson(LOOP_EXIT, GLUON_SPLIT, 84.0),
        params.b(),
        orientation,
        params.draw_states(),
    );
    draw_meson(
        canvas,
        c_meson(GLUON_SPLIT),
        params.c(),
        orientation,
        params.draw_states(),
    );
}

/// Draws the penguin whose gluon produces the B meson.
pub fn loop_internal(canvas: &mut Canvas, params: &DecayParams) {
    debug!(
        draw_states = params.draw_states(),
        anti_at_top = params.anti_at_top();
        "Laying out internal loop"
    );
    let orientation = params.orientation();
    let emitter = canvas.emitter();
    let entry = Point::new(85.0, 90.0);
    let exit = Point::new(125.0, 70.0);
    let center = Point::new(102.0, 74.0);
    let gluon_start = Point::new(113.0, 95.0);
    let gluon_end = Point::new(135.0, 110.0);

    draw_meson(
        canvas,
        a_meson(entry),
        params.a(),
        orientation,
        params.draw_states(),
    );

    canvas.section("Loop");
    canvas.append(
        emitter.text(Point::new(105.0, 75.0), params.w_label(), None),
        "W Label",
    );
    canvas.append(
        emitter.photon_arc(
            ArcGeometry::new(Point::new(108.0, 86.0), 23.0, 171.0, 312.0),
            -3.0,
            8,
        ),
        "W Line",
    );
    canvas.append(
        emitter.text(Point::new(100.0, 105.0), params.loop_label(), None),
        "fermion Label",
    );
    canvas.append(
        emitter.fermion_arc(
            ArcGeometry::new(center, 23.0, 350.0, 45.0),
            orientation.reverse(),
            ArrowOptions::new().with_arrow_position(0.65),
        ),
        "fermion Line1",
    );
    canvas.append(
        emitter.fermion_arc(
            ArcGeometry::new(center, 23.0, 45.0, 135.0),
            orientation.reverse(),
            ArrowOptions::new().with_arrow_position(0.55),
        ),
        "fermion Line2",
    );
    canvas.append(emitter.vertex(entry), "Start Vertex");
    canvas.append(emitter.vertex(exit), "End Vertex");

    canvas.section("Gluon");
    canvas.append(
        emitter.gluon_line(gluon_start, gluon_end, -3.5, 3),
        "gluon Line",
    );
    canvas.append(emitter.vertex(gluon_start), "Start Vertex");
    canvas.append(emitter.vertex(gluon_end), "End Vertex");

    draw_meson(
        canvas,
        b_meson(gluon_end, gluon_end, 91.0),
        params.b(),
        orientation,
        params.draw_states(),
    );
    draw_meson(
        canvas,
        c_meson(exit),
        params.c(),
        orientation,
        params.draw_states(),
    );
}
