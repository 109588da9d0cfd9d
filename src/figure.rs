//! A closed set of everything drawable, so a scene can be a `Vec<Figure>`.

use enum_dispatch::enum_dispatch;

use crate::draw::{DrawDescriptor, Drawable};
use crate::graph::Graph;
use crate::shapes::{Circle, Line, NumberPlane, Polygon, Rectangle, Square, Text, Triangle};
use crate::types::{BBox, ScaleContext};
use crate::vector::Vector;

/// Any drawable value. `From` conversions are generated for every variant.
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone)]
pub enum Figure {
    Line(Line),
    Circle(Circle),
    Triangle(Triangle),
    Rectangle(Rectangle),
    Square(Square),
    Polygon(Polygon),
    Text(Text),
    Vector(Vector),
    Plane(NumberPlane),
    Graph(Graph),
}

/// Draw a scene in order, flattening every figure's descriptors.
pub fn draw_all<'a>(
    figures: impl IntoIterator<Item = &'a Figure>,
    scale: &ScaleContext,
) -> Vec<DrawDescriptor> {
    figures.into_iter().flat_map(|f| f.draw(scale)).collect()
}

/// Union of the figures' bounds; empty when there are none.
pub fn scene_bounds<'a>(figures: impl IntoIterator<Item = &'a Figure>) -> BBox {
    let mut bb = BBox::new();
    for f in figures {
        let b = f.bounds();
        if !b.is_empty() {
            bb.expand_point(b.min);
            bb.expand_point(b.max);
        }
    }
    bb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn scene() -> Vec<Figure> {
        vec![
            Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).into(),
            Circle::new(Point::new(2.0, 2.0), 1.0).unwrap().into(),
            Vector::new(3.0, 4.0).into(),
            Text::new("P", Point::new(-1.0, 0.0)).into(),
        ]
    }

    #[test]
    fn dispatches_to_each_variant() {
        let scale = ScaleContext::try_new(1.0, 10.0, 10.0).unwrap();
        let out = draw_all(&scene(), &scale);
        // line + circle + vector shaft + arrowhead + label
        assert_eq!(out.len(), 5);
        assert!(out[4].label.is_some());
    }

    #[test]
    fn bounds_cover_scene() {
        let bb = scene_bounds(&scene());
        assert_eq!(bb.min, Point::new(-1.0, 0.0));
        assert_eq!(bb.max, Point::new(3.0, 4.0));
    }

    #[test]
    fn empty_scene_has_empty_bounds() {
        assert!(scene_bounds(&[]).is_empty());
    }
}
