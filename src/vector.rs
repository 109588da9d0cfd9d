//! 2D free vectors.
//!
//! `Vector` is an immutable value: every operation returns a new vector.
//! The binary products live as free functions (`dot`, `cross`,
//! `angle_between`, `project`) since neither operand is special.
//!
//! Operations that need a direction (`unit`, `angle_between`, `project`)
//! return [`GeometryError::DivideByZero`] for zero vectors instead of
//! letting NaN leak into later arithmetic.

use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

use crate::defaults;
use crate::draw::{Drawable, DrawDescriptor, Paint, PathBuilder};
use crate::errors::{GeometryError, Result};
use crate::types::{BBox, NumericError, Point, ScaleContext};

/// A position treated as a free vector from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub point: Point,
}

impl Default for Vector {
    /// The unit vector along +x.
    fn default() -> Self {
        Vector::new(1.0, 0.0)
    }
}

impl Vector {
    pub const ZERO: Vector = Vector {
        point: Point::ORIGIN,
    };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector {
            point: Point::new(x, y),
        }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.point.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.point.y
    }

    #[inline]
    fn v(self) -> DVec2 {
        self.point.as_dvec2()
    }

    pub fn add(self, other: Vector) -> Vector {
        (self.v() + other.v()).into()
    }

    pub fn subtract(self, other: Vector) -> Vector {
        (self.v() - other.v()).into()
    }

    pub fn scale(self, s: f64) -> Vector {
        (self.v() * s).into()
    }

    /// Euclidean norm, without intermediate overflow or underflow
    pub fn magnitude(self) -> f64 {
        self.x().hypot(self.y())
    }

    /// `atan2(y, x)`, in `(-π, π]`
    pub fn angle(self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Same direction, magnitude one.
    ///
    /// Fails with `DivideByZero` for the zero vector and `InvalidNumber` when
    /// a component is NaN or infinite.
    pub fn unit(self) -> Result<Vector> {
        self.unit_for("unit")
    }

    fn unit_for(self, operation: &'static str) -> Result<Vector> {
        let m = self.magnitude();
        if m.is_nan() {
            return Err(GeometryError::InvalidNumber {
                what: "vector magnitude",
                source: NumericError::NaN,
            });
        }
        if m.is_infinite() {
            return Err(GeometryError::InvalidNumber {
                what: "vector magnitude",
                source: NumericError::Infinite,
            });
        }
        if m == 0.0 {
            return Err(GeometryError::DivideByZero { operation });
        }
        Ok((self.v() / m).into())
    }

    /// Rotated 90° counterclockwise: `(-y, x)`
    pub fn normal(self) -> Vector {
        self.v().perp().into()
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Vector { point }
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

// ============================================================================
// Binary products
// ============================================================================

/// `u.x*v.x + u.y*v.y`
pub fn dot(u: Vector, v: Vector) -> f64 {
    u.v().dot(v.v())
}

/// `u.x*v.y - u.y*v.x`; positive when `v` is counterclockwise of `u`.
pub fn cross(u: Vector, v: Vector) -> f64 {
    u.v().perp_dot(v.v())
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// Works on the unit vectors, so the magnitudes never multiply. The cosine is
/// clamped to `[-1, 1]` so nearly parallel vectors don't push `acos` out of
/// its domain through rounding.
pub fn angle_between(u: Vector, v: Vector) -> Result<f64> {
    let u = u.unit_for("angle_between")?;
    let v = v.unit_for("angle_between")?;
    Ok(dot(u, v).clamp(-1.0, 1.0).acos())
}

/// Vector projection of `u` onto `v`.
pub fn project(u: Vector, v: Vector) -> Result<Vector> {
    let dir = v.unit_for("project")?;
    Ok(dir.scale(dot(dir, u)))
}

// ============================================================================
// Drawing
// ============================================================================

impl Drawable for Vector {
    /// Shaft from the origin to the tip, then a filled arrowhead at the tip
    /// pointing along the vector.
    fn draw(&self, scale: &ScaleContext) -> Vec<DrawDescriptor> {
        let mut shaft = PathBuilder::new(scale);
        shaft.move_to(Point::ORIGIN).line_to(self.point);

        let (sin, cos) = self.angle().sin_cos();
        let rotate = |along: f64, across: f64| {
            self.point + Vector::from(dvec2(along * cos - across * sin, along * sin + across * cos))
        };
        let back = -defaults::ARROWHEAD_LENGTH;
        let half = defaults::ARROWHEAD_HALF_WIDTH;

        let mut head = PathBuilder::new(scale);
        head.move_to(self.point)
            .line_to(rotate(back, half))
            .line_to(rotate(back, -half))
            .close();

        vec![shaft.build(Paint::STROKE), head.build(Paint::FILL)]
    }

    fn bounds(&self) -> BBox {
        BBox::from_points([Point::ORIGIN, self.point])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PathCommand;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn linear_ops() {
        let u = Vector::new(1.0, 2.0);
        let v = Vector::new(3.0, -1.0);
        assert_eq!(u.add(v), Vector::new(4.0, 1.0));
        assert_eq!(u.subtract(v), Vector::new(-2.0, 3.0));
        assert_eq!(u.scale(2.0), Vector::new(2.0, 4.0));
        assert_eq!(u + v, u.add(v));
        assert_eq!(-u, Vector::new(-1.0, -2.0));
    }

    #[test]
    fn default_points_along_x() {
        assert_eq!(Vector::default(), Vector::new(1.0, 0.0));
    }

    #[test]
    fn magnitude_and_angle() {
        let v = Vector::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert!(close(Vector::new(0.0, 1.0).angle(), FRAC_PI_2));
        assert!(close(Vector::new(-1.0, 0.0).angle(), PI));
    }

    #[test]
    fn unit_of_non_zero() {
        let u = Vector::new(3.0, 4.0).unit().unwrap();
        assert!(close(u.x(), 0.6));
        assert!(close(u.y(), 0.8));
    }

    #[test]
    fn unit_of_zero_fails() {
        assert_eq!(
            Vector::ZERO.unit(),
            Err(GeometryError::DivideByZero { operation: "unit" })
        );
    }

    #[test]
    fn unit_of_huge_components() {
        let v = Vector::new(1e308, 1e308);
        assert!(v.magnitude().is_finite());
        let u = v.unit().unwrap();
        assert!(close(u.magnitude(), 1.0));
        assert!(close(u.x(), FRAC_1_SQRT_2));

        let big = Vector::new(3e300, 4e300);
        assert!((big.magnitude() / 5e300 - 1.0).abs() < 1e-12);
        let u = big.unit().unwrap();
        assert!(close(u.x(), 0.6) && close(u.y(), 0.8));
    }

    #[test]
    fn unit_of_tiny_components() {
        let v = Vector::new(3e-200, 4e-200);
        assert!(v.magnitude() > 0.0);
        let u = v.unit().unwrap();
        assert!(close(u.x(), 0.6) && close(u.y(), 0.8));
    }

    #[test]
    fn unit_of_non_finite_fails() {
        assert!(matches!(
            Vector::new(f64::INFINITY, 1.0).unit(),
            Err(GeometryError::InvalidNumber {
                source: NumericError::Infinite,
                ..
            })
        ));
        assert!(matches!(
            Vector::new(f64::NAN, 1.0).unit(),
            Err(GeometryError::InvalidNumber {
                source: NumericError::NaN,
                ..
            })
        ));
    }

    #[test]
    fn angle_between_extreme_magnitudes() {
        let a = angle_between(Vector::new(1e300, 0.0), Vector::new(0.0, 1e300)).unwrap();
        assert!(close(a, FRAC_PI_2));

        let b = angle_between(Vector::new(1e-200, 0.0), Vector::new(1e-200, 1e-200)).unwrap();
        assert!(close(b, FRAC_PI_4));

        let c = angle_between(Vector::new(1e300, 0.0), Vector::new(-1e-200, 0.0)).unwrap();
        assert!(close(c, PI));
    }

    #[test]
    fn normal_rotates_counterclockwise() {
        assert_eq!(Vector::new(1.0, 0.0).normal(), Vector::new(0.0, 1.0));
        assert_eq!(Vector::new(2.0, 3.0).normal(), Vector::new(-3.0, 2.0));
    }

    #[test]
    fn products() {
        let u = Vector::new(1.0, 2.0);
        let v = Vector::new(3.0, 4.0);
        assert_eq!(dot(u, v), 11.0);
        assert_eq!(cross(u, v), -2.0);
        assert_eq!(cross(v, u), 2.0);
    }

    #[test]
    fn angle_between_perpendicular() {
        let a = angle_between(Vector::new(1.0, 0.0), Vector::new(0.0, 5.0)).unwrap();
        assert!(close(a, FRAC_PI_2));
    }

    #[test]
    fn angle_between_parallel_is_clamped() {
        let u = Vector::new(0.1, 0.7);
        let a = angle_between(u, u.scale(3.0)).unwrap();
        assert!(!a.is_nan());
        assert!(a.abs() < 1e-6);

        let b = angle_between(u, u.scale(-3.0)).unwrap();
        assert!(!b.is_nan());
        assert!((b - PI).abs() < 1e-6);
    }

    #[test]
    fn angle_between_zero_fails() {
        assert!(matches!(
            angle_between(Vector::ZERO, Vector::new(1.0, 1.0)),
            Err(GeometryError::DivideByZero { .. })
        ));
        assert!(matches!(
            angle_between(Vector::new(1.0, 1.0), Vector::ZERO),
            Err(GeometryError::DivideByZero { .. })
        ));
    }

    #[test]
    fn project_onto_axis() {
        let p = project(Vector::new(3.0, 4.0), Vector::new(2.0, 0.0)).unwrap();
        assert!(close(p.x(), 3.0));
        assert!(close(p.y(), 0.0));
    }

    #[test]
    fn project_onto_zero_fails() {
        assert_eq!(
            project(Vector::new(3.0, 4.0), Vector::ZERO),
            Err(GeometryError::DivideByZero {
                operation: "project"
            })
        );
    }

    #[test]
    fn draws_shaft_and_head() {
        let scale = ScaleContext::try_new(10.0, 100.0, 100.0).unwrap();
        let parts = Vector::new(1.0, 0.0).draw(&scale);
        assert_eq!(parts.len(), 2);
        insta::assert_snapshot!(parts[0].to_string(), @"M0 0 L10 0");
        assert!(parts[1].paint.fill && !parts[1].paint.stroke);
        assert!(parts[1].is_closed());

        let corners: Vec<Point> = parts[1]
            .commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        let expected = [(10.0, 0.0), (8.0, 1.0), (8.0, -1.0)];
        assert_eq!(corners.len(), expected.len());
        for (p, (x, y)) in corners.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{:?}", p);
        }
    }

    #[test]
    fn arrowhead_follows_angle() {
        let scale = ScaleContext::try_new(1.0, 10.0, 10.0).unwrap();
        let parts = Vector::new(0.0, 2.0).draw(&scale);
        // Pointing up: the head's back corners sit below the tip.
        for c in &parts[1].commands[1..3] {
            if let PathCommand::LineTo(p) = c {
                assert!((p.y - 1.8).abs() < 1e-9);
                assert!((p.x.abs() - 0.1).abs() < 1e-9);
            }
        }
    }
}
