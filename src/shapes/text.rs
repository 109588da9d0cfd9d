//! Text labels

use crate::draw::{DrawDescriptor, Drawable};
use crate::types::{BBox, Point, ScaleContext};

/// A text label anchored at a math-space position
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub position: Point,
}

impl Text {
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Text {
            text: text.into(),
            position,
        }
    }
}

impl Drawable for Text {
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        vec![DrawDescriptor::label(self.text.clone(), self.position, scale)]
    }

    /// Just the anchor; glyph extents are the renderer's business.
    fn bounds(&self) -> BBox {
        BBox::from_points([self.position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_at_device_position() {
        let t = Text::new("y = x²", Point::new(0.5, -1.0));
        let scale = ScaleContext::try_new(400.0, 1.0, 1.0).unwrap();
        let parts = t.draw(&scale);
        let label = parts[0].label.as_ref().unwrap();
        assert_eq!(label.text, "y = x²");
        assert_eq!(label.at, Point::new(200.0, -400.0));
        assert!(parts[0].commands.is_empty());
    }
}
