//! Geometric primitives for diagram layout.
//!
//! This module provides the coordinate type used by every topology layout
//! and by the primitive emitter.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`GeometryError`] - Contract violations when building points from loose data
//!
//! # Coordinate System
//!
//! Feyn uses the `axodraw2` picture coordinate system:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner of the `axopicture` at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//!
//! Angles for arcs are measured in degrees, counter-clockwise from +X.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised when geometric input does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("a coordinate pair needs exactly 2 components, got {0}")]
    Arity(usize),
}

/// A 2D point representing a position in diagram coordinate space.
///
/// Layout code works in the diagram's local frame; the canvas offset is
/// applied by the emitter through [`Point::add_point`].
///
/// # Examples
///
/// ```
/// # use feyn_core::geometry::Point;
/// let local = Point::new(85.0, 90.0);
/// let offset = Point::new(10.0, -5.0);
///
/// let shifted = local.add_point(offset);
/// assert_eq!(shifted.x(), 95.0);
/// assert_eq!(shifted.y(), 85.0);
/// ```
///
/// Deserializes from a two-element array such as `[30, 92]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f32>")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f32]> for Point {
    type Error = GeometryError;

    /// Builds a point from a slice, rejecting anything that is not a pair.
    ///
    /// # Examples
    ///
    /// ```
    /// # use feyn_core::geometry::{GeometryError, Point};
    /// assert_eq!(Point::try_from(&[1.0, 2.0][..]), Ok(Point::new(1.0, 2.0)));
    /// assert_eq!(
    ///     Point::try_from(&[1.0, 2.0, 3.0][..]),
    ///     Err(GeometryError::Arity(3))
    /// );
    /// ```
    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        match value {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(GeometryError::Arity(value.len())),
        }
    }
}

impl TryFrom<Vec<f32>> for Point {
    type Error = GeometryError;

    fn try_from(value: Vec<f32>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

/// Formats as the `axodraw2` coordinate group `(x,y)`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
