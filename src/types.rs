//! Value types shared by every module: points, bounds, and the two pieces of
//! numeric configuration (`ScaleContext` and `Step`).
//!
//! Everything here is `Copy` and immutable. Math-space values are plain `f64`;
//! the only way to get device-scaled numbers is through a `ScaleContext`.

use std::fmt;
use std::ops::{Add, Sub};

use glam::{DVec2, dvec2};

use crate::defaults;
use crate::vector::Vector;

/// Error type for rejected configuration scalars
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 { Err(NumericError::Negative) } else { Ok(val) }
}

// ============================================================================
// Point
// ============================================================================

/// A math-space coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Midpoint between two points
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance in math-space
    pub fn distance(self, other: Point) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Subtract two points to get the free vector between them
impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Translate a point by a vector
impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point {
            x: self.x + rhs.x(),
            y: self.y + rhs.y(),
        }
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned bounding box in math-space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: Point::new(f64::MAX, f64::MAX),
            max: Point::new(f64::MIN, f64::MIN),
        }
    }

    /// Bounding box of a set of points; empty when the iterator is.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bb = BBox::new();
        for p in points {
            bb.expand_point(p);
        }
        bb
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point. Non-finite points are ignored.
    pub fn expand_point(&mut self, p: Point) {
        if !p.x.is_finite() || !p.y.is_finite() {
            return;
        }
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }
}

// ============================================================================
// Scale context
// ============================================================================

/// Converts math-space to device-space and carries the viewport extent.
///
/// Owned by whoever renders; geometry code only borrows it for the few
/// operations that need device units or absolute extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleContext {
    unit: f64,
    viewport_width: f64,
    viewport_height: f64,
}

impl Default for ScaleContext {
    fn default() -> Self {
        ScaleContext {
            unit: defaults::UNIT,
            viewport_width: defaults::VIEWPORT_WIDTH,
            viewport_height: defaults::VIEWPORT_HEIGHT,
        }
    }
}

impl ScaleContext {
    /// Create a ScaleContext with validation.
    ///
    /// `unit` must be positive; the viewport extents (device units) must be
    /// non-negative. All three must be finite.
    pub fn try_new(
        unit: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<Self, NumericError> {
        Ok(ScaleContext {
            unit: check_positive(unit)?,
            viewport_width: check_non_negative(viewport_width)?,
            viewport_height: check_non_negative(viewport_height)?,
        })
    }

    /// Same viewport, different unit.
    pub fn with_unit(self, unit: f64) -> Result<Self, NumericError> {
        Self::try_new(unit, self.viewport_width, self.viewport_height)
    }

    pub fn unit(&self) -> f64 {
        self.unit
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Half the viewport, expressed in math-space units `(x, y)`.
    pub fn half_extent(&self) -> (f64, f64) {
        (
            self.viewport_width / (2.0 * self.unit),
            self.viewport_height / (2.0 * self.unit),
        )
    }

    /// Math-space length to device length
    #[inline]
    pub fn len(&self, l: f64) -> f64 {
        l * self.unit
    }

    /// Math-space area to device area
    #[inline]
    pub fn area(&self, a: f64) -> f64 {
        a * self.unit * self.unit
    }

    /// Math-space point to device point
    #[inline]
    pub fn point(&self, p: Point) -> Point {
        Point::new(p.x * self.unit, p.y * self.unit)
    }
}

// ============================================================================
// Discretization step
// ============================================================================

/// Fixed discretization step for the numerical methods, in math-space units.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Step(f64);

impl Default for Step {
    fn default() -> Self {
        defaults::STEP
    }
}

impl Step {
    pub(crate) const fn new(h: f64) -> Self {
        Step(h)
    }

    /// Create a Step with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(h: f64) -> Result<Self, NumericError> {
        check_positive(h).map(Step)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Number text
// ============================================================================

/// Format a number the way equation text expects: shortest round-trip digits,
/// `Infinity`/`-Infinity`/`NaN` for special values, no negative zero, and an
/// explicit exponent sign outside `[1e-6, 1e21)`.
pub fn fmt_num(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    if (1e-6..1e21).contains(&abs_val) {
        return format!("{}", value);
    }

    let sci = format!("{:e}", value);
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => sci,
    }
}
