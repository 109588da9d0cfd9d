//! Geometry, vector algebra and discretized calculus behind a math
//! visualization tool.
//!
//! Shapes, vectors and graphs are immutable values with pure accessors.
//! Quantities come in math-space by default; device-scaled variants and
//! equation text take an explicit [`ScaleContext`]. Anything drawable turns
//! itself into [`DrawDescriptor`](draw::DrawDescriptor)s for a renderer that
//! lives elsewhere.
//!
//! ```
//! use plotmath::prelude::*;
//!
//! let square = Square::new(Point::new(0.0, 0.0), 3.0)?;
//! assert_eq!(square.area(), 9.0);
//!
//! let parabola = Graph::new(|x| x * x, (0.0, 1.0))?;
//! assert!((parabola.area() - 1.0 / 3.0).abs() < 0.05);
//!
//! assert!(Vector::ZERO.unit().is_err());
//! # Ok::<(), plotmath::GeometryError>(())
//! ```

pub mod defaults;
pub mod draw;
pub mod errors;
pub mod figure;
pub mod graph;
pub mod log;
pub mod shapes;
pub mod types;
pub mod vector;

pub use errors::{GeometryError, Result};
pub use figure::Figure;
pub use types::{BBox, NumericError, Point, ScaleContext, Step};

/// Everything needed to build and measure a scene
pub mod prelude {
    pub use crate::draw::{DrawDescriptor, Drawable, Paint, PathCommand};
    pub use crate::errors::GeometryError;
    pub use crate::figure::{Figure, draw_all, scene_bounds};
    pub use crate::graph::{CumulativeIntegral, Domain, Graph, Strip};
    pub use crate::shapes::{
        AxisAligned, Circle, InfiniteLine, Line, Measure, NumberPlane, Polygon, Rectangle,
        Square, Text, Triangle,
    };
    pub use crate::types::{BBox, Point, ScaleContext, Step};
    pub use crate::vector::{Vector, angle_between, cross, dot, project};
}
