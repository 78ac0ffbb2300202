//! Mapping between screen space and model space.
//!
//! Screen space has its origin on the top-left corner with the y axis pointing down, model space
//! is the unit square with its origin on the bottom-left corner and the y axis pointing up.

use crate::{Result, SketchErr};

/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The current dimensions of the drawing surface, in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    width: f32,
    height: f32,
}

impl Surface {
    /// Creates a new `Surface`.
    ///
    /// # Arguments
    /// * `width` - The width of the surface in screen units.
    /// * `height` - The height of the surface in screen units.
    ///
    /// # Returns
    /// An error if any of the dimensions is not positive or not finite.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |d: f32| d.is_finite() && d > 0.;

        if !valid(width) || !valid(height) {
            return Err(SketchErr::InvalidSurface { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Maps a screen space position into model space.
    pub fn normalize(&self, px: f32, py: f32) -> Point {
        let x = map(px, 0., self.width, 0., 1.);
        let y = map(py, 0., self.height, 1., 0.);
        Point { x, y }
    }

    /// Maps a model space point back into screen space.
    pub fn denormalize(&self, point: Point) -> (f32, f32) {
        let px = map(point.x, 0., 1., 0., self.width);
        let py = map(point.y, 1., 0., 0., self.height);
        (px, py)
    }
}

/// Re-maps `value` from the range `[start1, stop1]` into `[start2, stop2]`, without clamping.
fn map(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}
