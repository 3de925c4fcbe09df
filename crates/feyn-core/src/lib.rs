//! Feyn Core Types and Definitions
//!
//! This crate provides the foundational types for generating Feynman
//! diagrams as `axodraw2` picture code. It includes:
//!
//! - **Geometry**: Points in the diagram's local frame ([`geometry`] module)
//! - **Draw**: Drawing instructions, arrow options, anchors, style and the
//!   primitive emitter ([`draw`] module)
//! - **Canvas**: The ordered instruction accumulator and its serializer
//!   ([`canvas`] module)
//! - **Document**: The standalone-document and shared-symbol wrappers
//!   ([`document`] module)

pub mod canvas;
pub mod document;
pub mod draw;
pub mod geometry;
