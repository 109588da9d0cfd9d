//! Circles, with their fixed-orientation tangent and normal chords

use std::f64::consts::PI;

use crate::draw::{DrawDescriptor, Drawable, Paint, PathBuilder};
use crate::errors::{GeometryError, Result};
use crate::types::{BBox, Point, ScaleContext, fmt_num};

use super::{Line, Measure};

/// A circle with a non-negative radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Fails with `DegenerateInput` for a negative or non-finite radius.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() {
            return Err(GeometryError::degenerate("circle", "radius must be finite"));
        }
        if radius < 0.0 {
            return Err(GeometryError::degenerate(
                "circle",
                format!("radius {} is negative", radius),
            ));
        }
        Ok(Circle { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn device_circumference(&self, scale: &ScaleContext) -> f64 {
        self.device_perimeter(scale)
    }

    pub fn device_diameter(&self, scale: &ScaleContext) -> f64 {
        scale.len(self.diameter())
    }

    /// `(x - {cx})^2 + (y - {cy})^2 = {r^2}` in device units
    pub fn equation(&self, scale: &ScaleContext) -> String {
        let c = scale.point(self.center);
        let r = scale.len(self.radius);
        format!(
            "(x - {})^2 + (y - {})^2 = {}",
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(r * r)
        )
    }

    /// Horizontal chord through the center, from the leftmost to the
    /// rightmost point. Always horizontal regardless of any point of interest.
    pub fn tangent(&self) -> Line {
        let Point { x, y } = self.center;
        let r = self.radius;
        Line::new(Point::new(x - r, y), Point::new(x + r, y))
    }

    /// Vertical chord through the center, from the bottom to the top point.
    pub fn normal(&self) -> Line {
        let Point { x, y } = self.center;
        let r = self.radius;
        Line::new(Point::new(x, y - r), Point::new(x, y + r))
    }
}

impl Measure for Circle {
    fn perimeter(&self) -> f64 {
        self.circumference()
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn centroid(&self) -> Point {
        self.center
    }
}

impl Drawable for Circle {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        let mut path = PathBuilder::new(scale);
        path.circle(self.center, self.radius);
        vec![path.build(Paint::OUTLINE)]
    }

    fn bounds(&self) -> BBox {
        let Point { x, y } = self.center;
        let r = self.radius;
        BBox::from_points([Point::new(x - r, y - r), Point::new(x + r, y + r)])
    }
}
