//! Rectangles and squares.
//!
//! Both implement [`AxisAligned`] and [`Measure`] independently; a square's
//! quantities come from its side length, never from a re-derived corner.

use crate::draw::{DrawDescriptor, Drawable, Paint, PathBuilder};
use crate::errors::{GeometryError, Result};
use crate::log::debug;
use crate::types::{BBox, Point, ScaleContext};

use super::{AxisAligned, Line, Measure};

/// Rectangle between two opposite corners `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    a: Point,
    b: Point,
}

impl Rectangle {
    /// Normalizes the corners so that `a` is bottom-left and `b` top-right;
    /// perimeter and area are never negative.
    pub fn new(a: Point, b: Point) -> Self {
        let min = Point::new(a.x.min(b.x), a.y.min(b.y));
        let max = Point::new(a.x.max(b.x), a.y.max(b.y));
        if min != a {
            debug!(?a, ?b, "normalized inverted rectangle corners");
        }
        Rectangle { a: min, b: max }
    }

    /// Keeps the corners as given. With `b` left of or below `a`, width and
    /// height come out negative and so do perimeter and area.
    pub const fn from_corners_raw(a: Point, b: Point) -> Self {
        Rectangle { a, b }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }
}

impl AxisAligned for Rectangle {
    fn min_corner(&self) -> Point {
        self.a
    }

    fn max_corner(&self) -> Point {
        self.b
    }

    fn width(&self) -> f64 {
        self.b.x - self.a.x
    }

    fn height(&self) -> f64 {
        self.b.y - self.a.y
    }
}

impl Measure for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn centroid(&self) -> Point {
        self.center()
    }
}

impl Drawable for Rectangle {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        draw_outline(self, scale)
    }

    fn bounds(&self) -> BBox {
        BBox::from_points([self.a, self.b])
    }
}

/// Square anchored at corner `a`, extending `side` along +x and +y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    a: Point,
    side: f64,
}

impl Square {
    /// Fails with `DegenerateInput` unless `side` is positive and finite.
    pub fn new(a: Point, side: f64) -> Result<Self> {
        if !(side.is_finite() && side > 0.0) {
            return Err(GeometryError::degenerate(
                "square",
                format!("side {} must be positive and finite", side),
            ));
        }
        Ok(Square { a, side })
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl AxisAligned for Square {
    fn min_corner(&self) -> Point {
        self.a
    }

    fn max_corner(&self) -> Point {
        Point::new(self.a.x + self.side, self.a.y + self.side)
    }

    fn width(&self) -> f64 {
        self.side
    }

    fn height(&self) -> f64 {
        self.side
    }

    fn diagonal(&self) -> Line {
        Line::new(self.a, self.max_corner())
    }

    fn center(&self) -> Point {
        let half = self.side / 2.0;
        Point::new(self.a.x + half, self.a.y + half)
    }
}

impl Measure for Square {
    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn centroid(&self) -> Point {
        self.center()
    }
}

impl Drawable for Square {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        draw_outline(self, scale)
    }

    fn bounds(&self) -> BBox {
        BBox::from_points([self.a, self.max_corner()])
    }
}

impl From<Square> for Rectangle {
    fn from(sq: Square) -> Self {
        Rectangle::from_corners_raw(sq.a, sq.max_corner())
    }
}

fn draw_outline(shape: &impl AxisAligned, scale: &ScaleContext) -> Vec<DrawDescriptor> {
    let mut path = PathBuilder::new(scale);
    path.polygon(shape.outline());
    vec![path.build(Paint::OUTLINE)]
}
