//! Directed segments and unbounded lines

use crate::draw::{DrawDescriptor, Drawable, Paint, PathBuilder};
use crate::errors::{GeometryError, Result};
use crate::log::warn;
use crate::types::{BBox, Point, ScaleContext, fmt_num};
use crate::vector::Vector;

/// A directed segment from `start` to `end`.
///
/// `start == end` is allowed: length 0, NaN slope, and no bisector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Line { start, end }
    }

    /// `end - start`
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// Euclidean length in math-space
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn device_length(&self, scale: &ScaleContext) -> f64 {
        scale.len(self.length())
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Rise over run. A vertical line gives `±Infinity`; a zero-length line NaN.
    pub fn slope(&self) -> f64 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// Math-space y-intercept of the line through both endpoints
    pub fn intercept(&self) -> f64 {
        self.start.y - self.slope() * self.start.x
    }

    /// `y = {slope}x + {intercept}`, intercept in device units.
    pub fn equation(&self, scale: &ScaleContext) -> String {
        format!(
            "y = {}x + {}",
            fmt_num(self.slope()),
            fmt_num(scale.len(self.intercept()))
        )
    }

    /// The perpendicular bisector as an unbounded line through the midpoint.
    pub fn bisector(&self) -> Result<InfiniteLine> {
        let dir = self.direction();
        if dir.magnitude() == 0.0 {
            return Err(GeometryError::degenerate(
                "line",
                "zero-length segment has no perpendicular bisector",
            ));
        }
        Ok(InfiniteLine::new(self.midpoint(), dir.normal()))
    }

    /// The perpendicular bisector clipped to the viewport.
    ///
    /// Spans the full viewport width, or the full height when the bisector is
    /// vertical (i.e. this line is horizontal).
    pub fn perpendicular_bisector(&self, scale: &ScaleContext) -> Result<Line> {
        Ok(self.bisector()?.clip_to(scale))
    }
}

impl Drawable for Line {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        let mut path = PathBuilder::new(scale);
        path.move_to(self.start).line_to(self.end);
        vec![path.build(Paint::STROKE)]
    }

    fn bounds(&self) -> BBox {
        BBox::from_points([self.start, self.end])
    }
}

/// A line with no endpoints: an anchor and a non-zero direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteLine {
    pub anchor: Point,
    pub direction: Vector,
}

impl InfiniteLine {
    pub fn new(anchor: Point, direction: Vector) -> Self {
        InfiniteLine { anchor, direction }
    }

    /// Slope of the direction; `±Infinity` when vertical.
    pub fn slope(&self) -> f64 {
        self.direction.y() / self.direction.x()
    }

    pub fn is_vertical(&self) -> bool {
        self.direction.x() == 0.0
    }

    /// Segment of this line spanning the viewport.
    ///
    /// Non-vertical lines run from `x = -w/2u` to `x = w/2u`, vertical lines
    /// from `y = -h/2u` to `y = h/2u`.
    pub fn clip_to(&self, scale: &ScaleContext) -> Line {
        let (hw, hh) = scale.half_extent();
        if self.is_vertical() {
            warn!(x = self.anchor.x, "vertical line clipped to viewport height");
            let x = self.anchor.x;
            return Line::new(Point::new(x, -hh), Point::new(x, hh));
        }
        let m = self.slope();
        let b = self.anchor.y - m * self.anchor.x;
        Line::new(Point::new(-hw, m * -hw + b), Point::new(hw, m * hw + b))
    }
}
