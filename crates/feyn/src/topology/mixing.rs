//! Neutral-meson mixing through a box diagram.

use log::debug;

use feyn_core::{
    canvas::Canvas,
    draw::{Anchor, ArrowOptions},
    geometry::Point,
};

use super::{MesonLegs, MixingParams, draw_meson};

const TOP_LEFT: Point = Point::new(75.0, 90.0);
const TOP_RIGHT: Point = Point::new(115.0, 90.0);
const BOTTOM_LEFT: Point = Point::new(75.0, 50.0);
const BOTTOM_RIGHT: Point = Point::new(115.0, 50.0);

fn a_meson() -> MesonLegs {
    MesonLegs {
        section: "A meson",
        upper_text: (Point::new(40.0, 92.0), Anchor::LeftBottom),
        upper_line: (TOP_LEFT, Point::new(35.0, 90.0)),
        lower_text: (Point::new(40.0, 48.0), Anchor::LeftTop),
        lower_line: (Point::new(35.0, 50.0), BOTTOM_LEFT),
        state_text: (Point::new(28.0, 70.0), Anchor::Right),
        state: Point::new(35.0, 70.0),
    }
}

fn abar_meson() -> MesonLegs {
    MesonLegs {
        section: "Abar meson",
        upper_text: (Point::new(150.0, 92.0), Anchor::RightBottom),
        upper_line: (Point::new(155.0, 90.0), TOP_RIGHT),
        lower_text: (Point::new(150.0, 48.0), Anchor::RightTop),
        lower_line: (BOTTOM_RIGHT, Point::new(155.0, 50.0)),
        state_text: (Point::new(162.0, 70.0), Anchor::Left),
        state: Point::new(155.0, 70.0),
    }
}

fn box_vertices(canvas: &mut Canvas) {
    let emitter = canvas.emitter();
    canvas.append(emitter.vertex(TOP_LEFT), "Top Left Vertex");
    canvas.append(emitter.vertex(TOP_RIGHT), "Top Right Vertex");
    canvas.append(emitter.vertex(BOTTOM_LEFT), "Bottom Left Vertex");
    canvas.append(emitter.vertex(BOTTOM_RIGHT), "Bottom Right Vertex");
}

/// Draws the box with quark propagators on top and bottom and W bosons on
/// the sides.
pub fn mixing1(canvas: &mut Canvas, params: &MixingParams) {
    debug!(
        draw_states = params.draw_states(),
        anti_at_top = params.anti_at_top();
        "Laying out mixing box, quark rungs"
    );
    let orientation = params.orientation();
    let reverse = orientation.reverse();
    let emitter = canvas.emitter();

    draw_meson(
        canvas,
        a_meson(),
        params.a(),
        orientation,
        params.draw_states(),
    );

    canvas.section("Box");
    canvas.append(
        emitter.text(Point::new(95.0, 92.0), params.top(), Some(Anchor::Bottom)),
        "q Top Label",
    );
    canvas.append(
        emitter.fermion_line(TOP_RIGHT, TOP_LEFT, reverse, ArrowOptions::new()),
        &format!("{} Top Box Line", orientation.upper()),
    );
    canvas.append(
        emitter.text(Point::new(95.0, 48.0), params.bottom(), Some(Anchor::Top)),
        "q Bottom Label",
    );
    canvas.append(
        emitter.fermion_line(BOTTOM_LEFT, BOTTOM_RIGHT, reverse, ArrowOptions::new()),
        &format!("{} Bottom Box Line", orientation.lower()),
    );
    canvas.append(
        emitter.text(Point::new(71.0, 70.0), params.left(), Some(Anchor::Right)),
        "W Left Label",
    );
    canvas.append(
        emitter.photon_line(TOP_LEFT, BOTTOM_LEFT, 4.0, 4),
        "W Left Box Line",
    );
    canvas.append(
        emitter.text(Point::new(119.0, 70.0), params.right(), Some(Anchor::Left)),
        "W Right Label",
    );
    canvas.append(
        emitter.photon_line(TOP_RIGHT, BOTTOM_RIGHT, 4.0, 4),
        "W Right Box Line",
    );
    box_vertices(canvas);

    draw_meson(
        canvas,
        abar_meson(),
        params.abar(),
        orientation,
        params.draw_states(),
    );
}

/// Draws the box with W bosons on top and bottom and quark propagators on
/// the sides.
pub fn mixing2(canvas: &mut Canvas, params: &MixingParams) {
    debug!(
        draw_states = params.draw_states(),
        anti_at_top = params.anti_at_top();
        "Laying out mixing box, W rungs"
    );
    let orientation = params.orientation();
    let reverse = orientation.reverse();
    let emitter = canvas.emitter();

    draw_meson(
        canvas,
        a_meson(),
        params.a(),
        orientation,
        params.draw_states(),
    );

    canvas.section("Box");
    canvas.append(
        emitter.text(Point::new(95.0, 94.0), params.top(), Some(Anchor::Bottom)),
        "W Top Label",
    );
    canvas.append(
        emitter.photon_line(TOP_RIGHT, TOP_LEFT, 4.0, 4),
        "W Top Box Line",
    );
    canvas.append(
        emitter.text(Point::new(95.0, 46.0), params.bottom(), Some(Anchor::Top)),
        "W Bottom Label",
    );
    canvas.append(
        emitter.photon_line(BOTTOM_LEFT, BOTTOM_RIGHT, 4.0, 4),
        "W Bottom Box Line",
    );
    canvas.append(
        emitter.text(Point::new(71.0, 70.0), params.left(), Some(Anchor::Right)),
        "q Left Label",
    );
    canvas.append(
        emitter.fermion_line(BOTTOM_LEFT, TOP_LEFT, reverse, ArrowOptions::new()),
        "q Left Box Line",
    );
    canvas.append(
        emitter.text(Point::new(119.0, 70.0), params.right(), Some(Anchor::Left)),
        "q Right Label",
    );
    canvas.append(
        emitter.fermion_line(TOP_RIGHT, BOTTOM_RIGHT, reverse, ArrowOptions::new()),
        "q Right Box Line",
    );
    box_vertices(canvas);

    draw_meson(
        canvas,
        abar_meson(),
        params.abar(),
        orientation,
        params.draw_states(),
    );
}
