//! Triangles from three vertices

use crate::draw::{DrawDescriptor, Drawable, Paint, PathBuilder};
use crate::types::{BBox, Point, ScaleContext};
use crate::vector::cross;

use super::Measure;

/// Three vertices. Collinear vertices are valid and have zero area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Triangle { a, b, c }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Positive when `a → b → c` runs counterclockwise
    pub fn signed_area(&self) -> f64 {
        0.5 * cross(self.b - self.a, self.c - self.a)
    }
}

impl Measure for Triangle {
    fn perimeter(&self) -> f64 {
        self.a.distance(self.b) + self.b.distance(self.c) + self.c.distance(self.a)
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }
}

impl Drawable for Triangle {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        let mut path = PathBuilder::new(scale);
        path.polygon(self.vertices());
        vec![path.build(Paint::OUTLINE)]
    }

    fn bounds(&self) -> BBox {
        BBox::from_points(self.vertices())
    }
}
