//! Shape primitives
//!
//! Each shape holds only its defining data and derives everything else on
//! demand; nothing is cached, so repeated calls return identical results.
//!
//! Shared capabilities:
//! - [`Measure`]: perimeter, area and centroid for closed shapes, with
//!   device-scaled variants.
//! - [`AxisAligned`]: the common contract of [`Rectangle`] and [`Square`].
//! - [`Drawable`](crate::draw::Drawable): descriptors for the renderer.

mod circle;
mod line;
mod plane;
mod polygon;
mod rect;
mod text;
mod triangle;

pub use circle::Circle;
pub use line::{InfiniteLine, Line};
pub use plane::NumberPlane;
pub use polygon::Polygon;
pub use rect::{Rectangle, Square};
pub use text::Text;
pub use triangle::Triangle;

use crate::types::{Point, ScaleContext};

/// Derived quantities of a closed shape
pub trait Measure {
    /// Boundary length in math-space
    fn perimeter(&self) -> f64;

    /// Enclosed area in math-space
    fn area(&self) -> f64;

    fn centroid(&self) -> Point;

    /// Perimeter in device units (`perimeter · unit`)
    fn device_perimeter(&self, scale: &ScaleContext) -> f64 {
        scale.len(self.perimeter())
    }

    /// Area in device units (`area · unit²`)
    fn device_area(&self, scale: &ScaleContext) -> f64 {
        scale.area(self.area())
    }
}

/// Axis-aligned quadrilaterals defined by two opposite corners
pub trait AxisAligned {
    /// Corner the shape is anchored at
    fn min_corner(&self) -> Point;

    /// Corner opposite `min_corner`
    fn max_corner(&self) -> Point;

    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Diagonal from `min_corner` to `max_corner`
    fn diagonal(&self) -> Line {
        Line::new(self.min_corner(), self.max_corner())
    }

    fn center(&self) -> Point {
        self.min_corner().midpoint(self.max_corner())
    }

    /// Corners in drawing order, starting at `min_corner`
    fn outline(&self) -> [Point; 4] {
        let a = self.min_corner();
        let b = self.max_corner();
        [a, Point::new(b.x, a.y), b, Point::new(a.x, b.y)]
    }
}
