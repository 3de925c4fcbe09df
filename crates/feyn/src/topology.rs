//! Decay topologies and their parameters.
//!
//! Every topology is a fixed recipe: given labels and an orientation it emits
//! the same ordered sequence of primitives onto a [`Canvas`], with
//! hand-tuned coordinates in a 190 x 140 frame.
//!
//! | Tag                   | Layout                                          |
//! |-----------------------|-------------------------------------------------|
//! | `tree-external`       | [`tree_external`]: colour-allowed tree          |
//! | `tree-internal`       | [`tree_internal`]: colour-suppressed tree       |
//! | `loop-external`       | [`loop_external`]: penguin, gluon to C          |
//! | `loop-internal`       | [`loop_internal`]: penguin, gluon to B          |
//! | `mixing1`             | [`mixing1`]: box with quark rungs top/bottom    |
//! | `mixing2`             | [`mixing2`]: box with W rungs top/bottom        |
//! | `loop-external-quark` | [`loop_external_quark`]: penguin on bare quarks |

mod loops;
mod mixing;
mod quark_loop;
mod tree;

pub use loops::{loop_external, loop_internal};
pub use mixing::{mixing1, mixing2};
pub use quark_loop::loop_external_quark;
pub use tree::{tree_external, tree_internal};

use serde::Deserialize;

use feyn_core::{
    canvas::Canvas,
    draw::{Anchor, ArrowOptions},
    geometry::Point,
};

/// A closed set of diagram layouts, tagged by `topology` in decay scripts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "topology", rename_all = "kebab-case")]
pub enum Topology {
    TreeExternal(DecayParams),
    TreeInternal(DecayParams),
    LoopExternal(DecayParams),
    LoopInternal(DecayParams),
    Mixing1(MixingParams),
    Mixing2(MixingParams),
    LoopExternalQuark(QuarkLoopParams),
}

impl Topology {
    /// Returns the tag naming this topology.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TreeExternal(_) => "tree-external",
            Self::TreeInternal(_) => "tree-internal",
            Self::LoopExternal(_) => "loop-external",
            Self::LoopInternal(_) => "loop-internal",
            Self::Mixing1(_) => "mixing1",
            Self::Mixing2(_) => "mixing2",
            Self::LoopExternalQuark(_) => "loop-external-quark",
        }
    }

    /// Emits this topology's primitives onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Self::TreeExternal(params) => tree_external(canvas, params),
            Self::TreeInternal(params) => tree_internal(canvas, params),
            Self::LoopExternal(params) => loop_external(canvas, params),
            Self::LoopInternal(params) => loop_internal(canvas, params),
            Self::Mixing1(params) => mixing1(canvas, params),
            Self::Mixing2(params) => mixing2(canvas, params),
            Self::LoopExternalQuark(params) => loop_external_quark(canvas, params),
        }
    }
}

/// Two labels where the first belongs to the visually upper line.
///
/// In TOML a pair is either a two-element array or a table with optional
/// `first` and `second` keys. A missing entry draws nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LabelPairRepr")]
pub struct LabelPair {
    first: Option<String>,
    second: Option<String>,
}

impl LabelPair {
    /// Creates a pair with both labels present.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: Some(first.into()),
            second: Some(second.into()),
        }
    }

    /// Creates a pair where either label may be absent.
    pub fn from_options(first: Option<String>, second: Option<String>) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelPairRepr {
    List(Vec<String>),
    Table(LabelPairTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelPairTable {
    #[serde(default)]
    first: Option<String>,
    #[serde(default)]
    second: Option<String>,
}

impl TryFrom<LabelPairRepr> for LabelPair {
    type Error = String;

    fn try_from(repr: LabelPairRepr) -> Result<Self, Self::Error> {
        match repr {
            LabelPairRepr::List(items) => {
                let len = items.len();
                let [first, second]: [String; 2] = items
                    .try_into()
                    .map_err(|_| format!("expected a pair of labels, found {len} entries"))?;
                Ok(Self::new(first, second))
            }
            LabelPairRepr::Table(table) => Ok(Self::from_options(table.first, table.second)),
        }
    }
}

/// A bound state: its outer label and the labels of its two quark lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Meson {
    label: Option<String>,
    quarks: LabelPair,
}

impl Meson {
    /// Creates a meson with an outer label and no quark labels.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            quarks: LabelPair::default(),
        }
    }

    pub fn with_quarks(mut self, quarks: LabelPair) -> Self {
        self.quarks = quarks;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn quarks(&self) -> &LabelPair {
        &self.quarks
    }
}

/// Parameters of the four A -> B C decay topologies.
///
/// `loop_label` is only drawn by the loop topologies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecayParams {
    a: Meson,
    b: Meson,
    c: Meson,
    w_label: Option<String>,
    loop_label: Option<String>,
    draw_states: bool,
    anti_at_top: bool,
}

impl DecayParams {
    pub fn with_a(mut self, meson: Meson) -> Self {
        self.a = meson;
        self
    }

    pub fn with_b(mut self, meson: Meson) -> Self {
        self.b = meson;
        self
    }

    pub fn with_c(mut self, meson: Meson) -> Self {
        self.c = meson;
        self
    }

    pub fn with_w_label(mut self, label: impl Into<String>) -> Self {
        self.w_label = Some(label.into());
        self
    }

    pub fn with_loop_label(mut self, label: impl Into<String>) -> Self {
        self.loop_label = Some(label.into());
        self
    }

    /// Sets whether bound-state ovals and their outer labels are drawn.
    pub fn with_draw_states(mut self, draw_states: bool) -> Self {
        self.draw_states = draw_states;
        self
    }

    /// Sets whether the anti-quark is the upper line of each meson.
    pub fn with_anti_at_top(mut self, anti_at_top: bool) -> Self {
        self.anti_at_top = anti_at_top;
        self
    }

    pub fn a(&self) -> &Meson {
        &self.a
    }

    pub fn b(&self) -> &Meson {
        &self.b
    }

    pub fn c(&self) -> &Meson {
        &self.c
    }

    pub fn w_label(&self) -> Option<&str> {
        self.w_label.as_deref()
    }

    pub fn loop_label(&self) -> Option<&str> {
        self.loop_label.as_deref()
    }

    pub fn draw_states(&self) -> bool {
        self.draw_states
    }

    pub fn anti_at_top(&self) -> bool {
        self.anti_at_top
    }

    fn orientation(&self) -> Orientation {
        Orientation::new(self.anti_at_top)
    }
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            a: Meson::default(),
            b: Meson::default(),
            c: Meson::default(),
            w_label: None,
            loop_label: None,
            draw_states: true,
            anti_at_top: true,
        }
    }
}

/// Parameters of the two box-diagram mixing topologies.
///
/// The box edges are labelled by side. In `mixing1` the top and bottom
/// edges are quarks and the sides are W bosons; in `mixing2` it is the
/// other way round.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MixingParams {
    a: Meson,
    abar: Meson,
    top: Option<String>,
    bottom: Option<String>,
    left: Option<String>,
    right: Option<String>,
    draw_states: bool,
    anti_at_top: bool,
}

impl MixingParams {
    pub fn with_a(mut self, meson: Meson) -> Self {
        self.a = meson;
        self
    }

    pub fn with_abar(mut self, meson: Meson) -> Self {
        self.abar = meson;
        self
    }

    /// Sets the labels of the top and bottom box edges.
    pub fn with_horizontal_labels(
        mut self,
        top: impl Into<String>,
        bottom: impl Into<String>,
    ) -> Self {
        self.top = Some(top.into());
        self.bottom = Some(bottom.into());
        self
    }

    /// Sets the labels of the left and right box edges.
    pub fn with_vertical_labels(
        mut self,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.left = Some(left.into());
        self.right = Some(right.into());
        self
    }

    pub fn with_draw_states(mut self, draw_states: bool) -> Self {
        self.draw_states = draw_states;
        self
    }

    pub fn with_anti_at_top(mut self, anti_at_top: bool) -> Self {
        self.anti_at_top = anti_at_top;
        self
    }

    pub fn a(&self) -> &Meson {
        &self.a
    }

    pub fn abar(&self) -> &Meson {
        &self.abar
    }

    pub fn top(&self) -> Option<&str> {
        self.top.as_deref()
    }

    pub fn bottom(&self) -> Option<&str> {
        self.bottom.as_deref()
    }

    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&str> {
        self.right.as_deref()
    }

    pub fn draw_states(&self) -> bool {
        self.draw_states
    }

    pub fn anti_at_top(&self) -> bool {
        self.anti_at_top
    }

    fn orientation(&self) -> Orientation {
        Orientation::new(self.anti_at_top)
    }
}

impl Default for MixingParams {
    fn default() -> Self {
        Self {
            a: Meson::default(),
            abar: Meson::default(),
            top: None,
            bottom: None,
            left: None,
            right: None,
            draw_states: true,
            anti_at_top: true,
        }
    }
}

/// Parameters of the penguin drawn on bare quark legs.
///
/// There are no bound states, so there is no `draw_states` switch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuarkLoopParams {
    a_quark: Option<String>,
    b_quark: Option<String>,
    c_fermions: LabelPair,
    w_label: Option<String>,
    loop_label: Option<String>,
    anti_at_top: bool,
}

impl QuarkLoopParams {
    pub fn with_a_quark(mut self, label: impl Into<String>) -> Self {
        self.a_quark = Some(label.into());
        self
    }

    pub fn with_b_quark(mut self, label: impl Into<String>) -> Self {
        self.b_quark = Some(label.into());
        self
    }

    pub fn with_c_fermions(mut self, fermions: LabelPair) -> Self {
        self.c_fermions = fermions;
        self
    }

    pub fn with_w_label(mut self, label: impl Into<String>) -> Self {
        self.w_label = Some(label.into());
        self
    }

    pub fn with_loop_label(mut self, label: impl Into<String>) -> Self {
        self.loop_label = Some(label.into());
        self
    }

    pub fn with_anti_at_top(mut self, anti_at_top: bool) -> Self {
        self.anti_at_top = anti_at_top;
        self
    }

    pub fn a_quark(&self) -> Option<&str> {
        self.a_quark.as_deref()
    }

    pub fn b_quark(&self) -> Option<&str> {
        self.b_quark.as_deref()
    }

    pub fn c_fermions(&self) -> &LabelPair {
        &self.c_fermions
    }

    pub fn w_label(&self) -> Option<&str> {
        self.w_label.as_deref()
    }

    pub fn loop_label(&self) -> Option<&str> {
        self.loop_label.as_deref()
    }

    pub fn anti_at_top(&self) -> bool {
        self.anti_at_top
    }

    fn orientation(&self) -> Orientation {
        Orientation::new(self.anti_at_top)
    }
}

impl Default for QuarkLoopParams {
    fn default() -> Self {
        Self {
            a_quark: None,
            b_quark: None,
            c_fermions: LabelPair::default(),
            w_label: None,
            loop_label: None,
            anti_at_top: true,
        }
    }
}

/// Which of the two fermion lines of a meson carries the anti-quark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Orientation {
    anti_at_top: bool,
}

impl Orientation {
    fn new(anti_at_top: bool) -> Self {
        Self { anti_at_top }
    }

    /// The `reverse` flag passed to every fermion line and arc.
    fn reverse(self) -> bool {
        !self.anti_at_top
    }

    /// Role of the upper fermion line.
    fn upper(self) -> &'static str {
        if self.anti_at_top {
            "anti-quark"
        } else {
            "quark"
        }
    }

    /// Role of the lower fermion line.
    fn lower(self) -> &'static str {
        if self.anti_at_top {
            "quark"
        } else {
            "anti-quark"
        }
    }
}

/// Fixed geometry of one meson: two quark lines, their labels, and the
/// bound-state oval with its outer label.
struct MesonLegs {
    section: &'static str,
    upper_text: (Point, Anchor),
    upper_line: (Point, Point),
    lower_text: (Point, Anchor),
    lower_line: (Point, Point),
    state_text: (Point, Anchor),
    state: Point,
}

/// Emits a meson group followed by a separator line.
fn draw_meson(
    canvas: &mut Canvas,
    legs: MesonLegs,
    meson: &Meson,
    orientation: Orientation,
    draw_states: bool,
) {
    let emitter = canvas.emitter();
    let reverse = orientation.reverse();
    let (upper, lower) = (orientation.upper(), orientation.lower());
    let (upper_at, upper_anchor) = legs.upper_text;
    let (lower_at, lower_anchor) = legs.lower_text;
    let (upper_start, upper_end) = legs.upper_line;
    let (lower_start, lower_end) = legs.lower_line;

    canvas.section(legs.section);
    canvas.append(
        emitter.text(upper_at, meson.quarks().first(), Some(upper_anchor)),
        &format!("{upper} Label"),
    );
    canvas.append(
        emitter.fermion_line(upper_start, upper_end, reverse, ArrowOptions::new()),
        &format!("{upper} Line"),
    );
    canvas.append(
        emitter.text(lower_at, meson.quarks().second(), Some(lower_anchor)),
        &format!("{lower} Label"),
    );
    canvas.append(
        emitter.fermion_line(lower_start, lower_end, reverse, ArrowOptions::new()),
        &format!("{lower} Line"),
    );
    if draw_states {
        canvas.append(
            emitter.text(legs.state_text.0, meson.label(), Some(legs.state_text.1)),
            "Label",
        );
        canvas.append(emitter.bound_state(legs.state), "Bound State");
    }
    canvas.gap();
}
