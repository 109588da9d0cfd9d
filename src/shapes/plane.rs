//! The number plane: unit grid and axes

use crate::draw::{DrawDescriptor, Drawable, Paint, PathBuilder};
use crate::types::{BBox, Point, ScaleContext};

/// Unit grid plus both axes, filling a viewport.
///
/// Grid lines sit at every whole math unit out to the viewport's half extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberPlane {
    half_width: f64,
    half_height: f64,
}

impl NumberPlane {
    /// A plane covering the viewport of `scale`
    pub fn new(scale: &ScaleContext) -> Self {
        let (half_width, half_height) = scale.half_extent();
        NumberPlane {
            half_width,
            half_height,
        }
    }

    /// Grid line offsets from the axis: 1, 2, ... up to `limit`
    fn ticks(limit: f64) -> impl Iterator<Item = f64> {
        (1..).map(|k| k as f64).take_while(move |&t| t <= limit)
    }
}

impl Drawable for NumberPlane {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        let (hw, hh) = (self.half_width, self.half_height);
        let mut path = PathBuilder::new(scale);

        for x in Self::ticks(hw) {
            path.move_to(Point::new(x, -hh)).line_to(Point::new(x, hh));
            path.move_to(Point::new(-x, -hh)).line_to(Point::new(-x, hh));
        }
        for y in Self::ticks(hh) {
            path.move_to(Point::new(-hw, y)).line_to(Point::new(hw, y));
            path.move_to(Point::new(-hw, -y)).line_to(Point::new(hw, -y));
        }

        // axes
        path.move_to(Point::new(0.0, -hh)).line_to(Point::new(0.0, hh));
        path.move_to(Point::new(-hw, 0.0)).line_to(Point::new(hw, 0.0));

        vec![path.build(Paint::STROKE)]
    }

    fn bounds(&self) -> BBox {
        BBox::from_points([
            Point::new(-self.half_width, -self.half_height),
            Point::new(self.half_width, self.half_height),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lines_every_unit() {
        // half extent 2 x 1 units
        let scale = ScaleContext::try_new(10.0, 40.0, 20.0).unwrap();
        let plane = NumberPlane::new(&scale);
        let parts = plane.draw(&scale);
        assert_eq!(parts.len(), 1);
        // 2 ticks * 2 sides + 1 tick * 2 sides + 2 axes, two commands each
        assert_eq!(parts[0].commands.len(), (4 + 2 + 2) * 2);
        insta::assert_snapshot!(
            parts[0].to_string(),
            @"M10 -10 L10 10 M-10 -10 L-10 10 M20 -10 L20 10 M-20 -10 L-20 10 M-20 10 L20 10 M-20 -10 L20 -10 M0 -10 L0 10 M-20 0 L20 0"
        );
    }

    #[test]
    fn bounds_match_viewport() {
        let scale = ScaleContext::try_new(100.0, 800.0, 400.0).unwrap();
        let bb = NumberPlane::new(&scale).bounds();
        assert_eq!(bb.width(), 8.0);
        assert_eq!(bb.height(), 4.0);
    }

    #[test]
    fn tiny_viewport_has_only_axes() {
        let scale = ScaleContext::try_new(100.0, 100.0, 100.0).unwrap();
        let parts = NumberPlane::new(&scale).draw(&scale);
        assert_eq!(parts[0].commands.len(), 4);
    }
}
