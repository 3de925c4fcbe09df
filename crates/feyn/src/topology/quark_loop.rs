//! The external penguin drawn on bare quark legs.

use log::debug;

use feyn_core::{
    canvas::Canvas,
    draw::{Anchor, ArrowOptions},
    geometry::Point,
};

use super::{
    QuarkLoopParams,
    loops::{GLUON_SPLIT, LOOP_ENTRY, LOOP_EXIT, draw_external_loop},
};

/// Draws the external penguin without bound states or meson labels.
pub fn loop_external_quark(canvas: &mut Canvas, params: &QuarkLoopParams) {
    debug!(anti_at_top = params.anti_at_top(); "Laying out external loop on quarks");
    let orientation = params.orientation();
    let reverse = orientation.reverse();
    let (upper, lower) = (orientation.upper(), orientation.lower());
    let emitter = canvas.emitter();
    let plain = ArrowOptions::new();
    let a_text = Point::new(23.0, 90.0);
    let b_text = Point::new(167.0, 130.0);
    let c_upper_text = Point::new(167.0, 90.0);
    let c_lower_text = Point::new(167.0, 50.0);
    let a_end = Point::new(25.0, 90.0);
    let b_start = Point::new(165.0, 130.0);
    let c_upper_end = Point::new(165.0, 90.0);
    let c_lower_start = Point::new(165.0, 50.0);
    let c_fermions = params.c_fermions();

    canvas.section("A quark");
    canvas.append(
        emitter.text(a_text, params.a_quark(), Some(Anchor::Right)),
        &format!("{upper} Label"),
    );
    canvas.append(
        emitter.fermion_line(LOOP_ENTRY, a_end, reverse, plain),
        &format!("{upper} Line"),
    );
    canvas.gap();

    draw_external_loop(canvas, params.w_label(), params.loop_label(), orientation);

    canvas.section("B quark");
    canvas.append(
        emitter.text(b_text, params.b_quark(), Some(Anchor::Left)),
        &format!("{upper} Label"),
    );
    canvas.append(
        emitter.fermion_line(b_start, LOOP_EXIT, reverse, plain),
        &format!("{upper} Line"),
    );
    canvas.gap();

    canvas.section("C fermions");
    canvas.append(
        emitter.text(c_upper_text, c_fermions.first(), Some(Anchor::Left)),
        &format!("{lower} Label"),
    );
    canvas.append(
        emitter.fermion_line(GLUON_SPLIT, c_upper_end, reverse, plain),
        &format!("{lower} Line"),
    );
    canvas.append(
        emitter.text(c_lower_text, c_fermions.second(), Some(Anchor::Left)),
        &format!("{upper} Label"),
    );
    canvas.append(
        emitter.fermion_line(c_lower_start, GLUON_SPLIT, reverse, plain),
        &format!("{upper} Line"),
    );
    canvas.gap();
}
