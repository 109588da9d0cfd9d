//! Drawable descriptors: what a renderer needs, without a rendering surface.
//!
//! A shape turns itself into one or more [`DrawDescriptor`]s: an ordered list
//! of path commands in device units plus fill/stroke intent. Colors, line
//! widths and the device-to-pixel projection belong to the renderer.
//!
//! [`PathBuilder`] takes math-space points and applies the scale as it goes,
//! so shapes never multiply by `unit` themselves.

use std::f64::consts::TAU;
use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::{BBox, Point, ScaleContext, fmt_num};

/// Common behavior for everything that can be handed to a renderer
#[enum_dispatch]
pub trait Drawable {
    /// Descriptors in paint order, coordinates in device units.
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor>;

    /// Math-space extent of what `draw` emits.
    fn bounds(&self) -> BBox;
}

/// A single path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc around `center`, angles in radians, counterclockwise in
    /// math-space.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M{} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCommand::LineTo(p) => write!(f, "L{} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => write!(
                f,
                "A{} {} r{} {}..{}",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                fmt_num(*start_angle),
                fmt_num(*end_angle)
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// What the renderer is asked to do with a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub stroke: bool,
    pub fill: bool,
}

impl Paint {
    pub const STROKE: Paint = Paint {
        stroke: true,
        fill: false,
    };
    pub const FILL: Paint = Paint {
        stroke: false,
        fill: true,
    };
    /// Closed outlines: stroked, and filled if the renderer has a fill color.
    pub const OUTLINE: Paint = Paint {
        stroke: true,
        fill: true,
    };
}

/// Text anchored at a device-space point
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
}

/// One paintable unit: a path and/or a label
#[derive(Debug, Clone, PartialEq)]
pub struct DrawDescriptor {
    pub commands: Vec<PathCommand>,
    pub paint: Paint,
    pub label: Option<Label>,
}

impl DrawDescriptor {
    /// A label-only descriptor; `at` is in math-space.
    pub fn label(text: impl Into<String>, at: Point, scale: &ScaleContext) -> Self {
        DrawDescriptor {
            commands: Vec::new(),
            paint: Paint::FILL,
            label: Some(Label {
                text: text.into(),
                at: scale.point(at),
            }),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

impl fmt::Display for DrawDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cmd in &self.commands {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", cmd)?;
            first = false;
        }
        if let Some(label) = &self.label {
            if !first {
                write!(f, " ")?;
            }
            write!(
                f,
                "T{} {} {:?}",
                fmt_num(label.at.x),
                fmt_num(label.at.y),
                label.text
            )?;
        }
        Ok(())
    }
}

/// Accumulates path commands, converting math-space input to device units.
///
/// # Example
///
/// ```
/// use plotmath::draw::{Paint, PathBuilder};
/// use plotmath::{Point, ScaleContext};
///
/// let scale = ScaleContext::try_new(10.0, 100.0, 100.0).unwrap();
/// let mut path = PathBuilder::new(&scale);
/// path.move_to(Point::new(0.0, 0.0)).line_to(Point::new(1.0, 2.0));
/// assert_eq!(path.build(Paint::STROKE).to_string(), "M0 0 L10 20");
/// ```
#[derive(Debug)]
pub struct PathBuilder<'a> {
    scale: &'a ScaleContext,
    commands: Vec<PathCommand>,
}

impl<'a> PathBuilder<'a> {
    pub fn new(scale: &'a ScaleContext) -> Self {
        Self {
            scale,
            commands: Vec::new(),
        }
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(self.scale.point(p)));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(self.scale.point(p)));
        self
    }

    pub fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center: self.scale.point(center),
            radius: self.scale.len(radius),
            start_angle,
            end_angle,
        });
        self
    }

    /// Full circle
    pub fn circle(&mut self, center: Point, radius: f64) -> &mut Self {
        self.arc(center, radius, 0.0, TAU)
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Open polyline through `points`: a move to the first, lines to the rest.
    pub fn polyline(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        for (i, p) in points.into_iter().enumerate() {
            if i == 0 {
                self.move_to(p);
            } else {
                self.line_to(p);
            }
        }
        self
    }

    /// Closed polygon through `points`; nothing is emitted for an empty input.
    pub fn polygon(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        let before = self.commands.len();
        self.polyline(points);
        if self.commands.len() > before {
            self.close();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build(self, paint: Paint) -> DrawDescriptor {
        DrawDescriptor {
            commands: self.commands,
            paint,
            label: None,
        }
    }
}
