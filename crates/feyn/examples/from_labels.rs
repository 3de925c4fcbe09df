//! Example: Building a diagram from labels in code
//!
//! This example assembles the B+ -> D0bar K+ tree diagram directly from
//! topology parameters, without a decay script, and prints the LaTeX.

use feyn::{
    Diagram, DiagramBuilder,
    config::{AppConfig, DocumentConfig, OutputConfig},
    topology::{DecayParams, LabelPair, Meson, Topology},
};

fn main() {
    // Particle content of each meson; the first quark is the upper line
    let bp = Meson::new(r"$\Bp$").with_quarks(LabelPair::new(r"$\bquarkbar$", r"$\uquark$"));
    let kp = Meson::new(r"$\Kp$").with_quarks(LabelPair::new(r"$\uquark$", r"$\squarkbar$"));
    let dzb = Meson::new(r"$\Dzb$").with_quarks(LabelPair::new(r"$\cquarkbar$", r"$\uquark$"));
    let params = DecayParams::default()
        .with_a(bp)
        .with_b(kp)
        .with_c(dzb)
        .with_w_label(r"\small{$\Wp$}");

    let diagram = Diagram::new("Bp2DzbKp", Topology::TreeExternal(params));

    // Embed-ready output: no document wrapper and no compilation
    let config = AppConfig::default()
        .with_document(DocumentConfig::default().with_raw(true))
        .with_output(OutputConfig::new(false, false));

    let tex = DiagramBuilder::new(config).render(&diagram);
    println!("{tex}");
}
