//! Default sizes for bound-state ovals and vertex markers.

use serde::Deserialize;

/// Style values shared by every instruction on a canvas.
///
/// The value is immutable once handed to a [`Canvas`](crate::canvas::Canvas);
/// use the `with_*` methods to derive a variant.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Oval width | `5` |
/// | Oval height | `20` |
/// | Oval rotation | `90` |
/// | Oval grey level | `0.7` |
/// | Vertex radius | `2` |
///
/// # Examples
///
/// ```
/// # use feyn_core::draw::StyleDefinition;
/// let style = StyleDefinition::default().with_vertex_radius(1.5);
/// assert_eq!(style.vertex_radius(), 1.5);
/// assert_eq!(style.oval_height(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleDefinition {
    oval_width: f32,
    oval_height: f32,
    oval_rotation: f32,
    oval_grey: f32,
    vertex_radius: f32,
}

impl StyleDefinition {
    /// Returns the bound-state oval width.
    pub fn oval_width(&self) -> f32 {
        self.oval_width
    }

    /// Returns the bound-state oval height.
    pub fn oval_height(&self) -> f32 {
        self.oval_height
    }

    /// Returns the bound-state oval rotation in degrees.
    pub fn oval_rotation(&self) -> f32 {
        self.oval_rotation
    }

    /// Returns the grey level used to fill bound-state ovals (0 black, 1 white).
    pub fn oval_grey(&self) -> f32 {
        self.oval_grey
    }

    /// Returns the radius of vertex markers.
    pub fn vertex_radius(&self) -> f32 {
        self.vertex_radius
    }

    /// Returns a copy with the given oval size.
    pub fn with_oval_size(mut self, width: f32, height: f32) -> Self {
        self.oval_width = width;
        self.oval_height = height;
        self
    }

    /// Returns a copy with the given oval grey level.
    pub fn with_oval_grey(mut self, grey: f32) -> Self {
        self.oval_grey = grey;
        self
    }

    /// Returns a copy with the given vertex radius.
    pub fn with_vertex_radius(mut self, radius: f32) -> Self {
        self.vertex_radius = radius;
        self
    }
}

impl Default for StyleDefinition {
    fn default() -> Self {
        Self {
            oval_width: 5.0,
            oval_height: 20.0,
            oval_rotation: 90.0,
            oval_grey: 0.7,
            vertex_radius: 2.0,
        }
    }
}
