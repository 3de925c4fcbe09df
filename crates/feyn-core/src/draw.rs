//! Drawing primitives for Feynman diagrams.
//!
//! Everything a topology layout can put on a [`Canvas`](crate::canvas::Canvas)
//! is described here:
//!
//! - [`Instruction`] - One immutable `axodraw2` drawing command
//! - [`Emitter`] - Pure functions turning local geometry into instructions
//! - [`ArrowOptions`] - Typed options for directed fermion lines and arcs
//! - [`Anchor`] - Text alignment codes
//! - [`StyleDefinition`] - Default sizes for ovals and vertices

mod anchor;
mod arrow;
mod emitter;
mod instruction;
mod style;

pub use anchor::Anchor;
pub use arrow::{ArrowOption, ArrowOptions, ArrowPosition};
pub use emitter::Emitter;
pub use instruction::{ArcGeometry, BosonStyle, Instruction, InstructionKind};
pub use style::StyleDefinition;
