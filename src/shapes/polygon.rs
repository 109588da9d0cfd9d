//! Closed polygons measured with the shoelace formula

use crate::draw::{DrawDescriptor, Drawable, Paint, PathBuilder};
use crate::errors::{GeometryError, Result};
use crate::types::{BBox, Point, ScaleContext};

use super::Measure;

/// A closed polygon; the last point implicitly connects back to the first.
///
/// Area uses the shoelace formula and is correct for simple polygons of either
/// winding. Self-intersecting outlines give the net signed area of their
/// lobes, which is generally not what a caller wants.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Fails with `DegenerateInput` for fewer than 3 points.
    pub fn new(points: impl Into<Vec<Point>>) -> Result<Self> {
        let points = points.into();
        if points.len() < 3 {
            return Err(GeometryError::degenerate(
                "polygon",
                format!("needs at least 3 points, got {}", points.len()),
            ));
        }
        Ok(Polygon { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive edges, closing edge last
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace sum; positive for counterclockwise winding
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(p, q)| (p.x * q.y - q.x * p.y) / 2.0)
            .sum()
    }

    /// Same vertices, opposite winding
    pub fn reversed(&self) -> Polygon {
        let mut points = self.points.clone();
        points.reverse();
        Polygon { points }
    }
}

impl Measure for Polygon {
    fn perimeter(&self) -> f64 {
        self.edges().map(|(p, q)| p.distance(q)).sum()
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid; the vertex mean when the area is zero.
    fn centroid(&self) -> Point {
        let a = self.signed_area();
        if a == 0.0 {
            let n = self.points.len() as f64;
            let (sx, sy) = self
                .points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            return Point::new(sx / n, sy / n);
        }
        let (cx, cy) = self.edges().fold((0.0, 0.0), |(cx, cy), (p, q)| {
            let w = p.x * q.y - q.x * p.y;
            (cx + (p.x + q.x) * w, cy + (p.y + q.y) * w)
        });
        Point::new(cx / (6.0 * a), cy / (6.0 * a))
    }
}

impl Drawable for Polygon {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        let mut path = PathBuilder::new(scale);
        path.polygon(self.points.iter().copied());
        vec![path.build(Paint::OUTLINE)]
    }

    fn bounds(&self) -> BBox {
        BBox::from_points(self.points.iter().copied())
    }
}
