//! Algebraic and geometric identities checked over random inputs.

use plotmath::prelude::*;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn vector() -> impl Strategy<Value = Vector> {
    (coord(), coord()).prop_map(|(x, y)| Vector::new(x, y))
}

/// Heron's formula in the numerically stable ordering (a >= b >= c).
fn heron(t: &Triangle) -> f64 {
    let mut s = [t.a.distance(t.b), t.b.distance(t.c), t.c.distance(t.a)];
    s.sort_by(|x, y| y.total_cmp(x));
    let [a, b, c] = s;
    let p = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
    0.25 * p.max(0.0).sqrt()
}

proptest! {
    #[test]
    fn shoelace_matches_heron(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        prop_assume!(t.area() > 100.0);
        let h = heron(&t);
        prop_assert!((t.area() - h).abs() <= 1e-6 * h, "shoelace {} heron {}", t.area(), h);
    }

    #[test]
    fn dot_is_symmetric(u in vector(), v in vector()) {
        prop_assert_eq!(dot(u, v), dot(v, u));
    }

    #[test]
    fn cross_is_antisymmetric(u in vector(), v in vector()) {
        prop_assert_eq!(cross(u, v), -cross(v, u));
    }

    #[test]
    fn unit_has_magnitude_one(v in vector()) {
        prop_assume!(v.magnitude() > 1e-9);
        let u = v.unit().unwrap();
        prop_assert!((u.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unit_survives_extreme_scales(v in vector(), e in -290i32..290) {
        prop_assume!(v.magnitude() > 1e-3);
        let w = v.scale(10f64.powi(e));
        let u = w.unit().unwrap();
        prop_assert!((u.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normal_is_perpendicular(v in vector()) {
        prop_assert!(dot(v, v.normal()).abs() <= 1e-9 * v.magnitude().powi(2).max(1.0));
        prop_assert!((v.normal().magnitude() - v.magnitude()).abs() <= 1e-12 * v.magnitude());
    }

    #[test]
    fn angle_between_stays_in_range(u in vector(), v in vector()) {
        prop_assume!(u.magnitude() > 1e-9 && v.magnitude() > 1e-9);
        let a = angle_between(u, v).unwrap();
        prop_assert!((0.0..=std::f64::consts::PI).contains(&a));
        // the same vector, scaled, is always at angle ~0 and never NaN
        let same = angle_between(u, u.scale(7.0)).unwrap();
        prop_assert!(same < 1e-6);
    }

    #[test]
    fn projection_is_parallel_to_target(u in vector(), v in vector()) {
        prop_assume!(v.magnitude() > 1e-3);
        let p = project(u, v).unwrap();
        let scale = u.magnitude().max(1.0) * v.magnitude();
        prop_assert!(cross(p, v).abs() <= 1e-9 * scale);
        // the rejection is orthogonal to v
        prop_assert!(dot(u - p, v).abs() <= 1e-9 * scale);
    }

    #[test]
    fn reversing_polygon_keeps_area(points in prop::collection::vec(point(), 3..12)) {
        let poly = Polygon::new(points).unwrap();
        let rev = poly.reversed();
        let tol = 1e-9 * poly.area().max(1.0) * poly.points().len() as f64 * 1e4;
        prop_assert!((poly.area() - rev.area()).abs() <= tol);
        prop_assert!((poly.perimeter() - rev.perimeter()).abs() <= 1e-9 * poly.perimeter().max(1.0));
    }

    #[test]
    fn rectangle_is_never_negative(a in point(), b in point()) {
        let r = Rectangle::new(a, b);
        prop_assert!(r.area() >= 0.0);
        prop_assert!(r.perimeter() >= 0.0);
    }

    #[test]
    fn accessors_are_idempotent(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        prop_assert_eq!(t.area().to_bits(), t.area().to_bits());
        prop_assert_eq!(t.perimeter().to_bits(), t.perimeter().to_bits());

        let line = Line::new(a, b);
        prop_assert_eq!(line.length().to_bits(), line.length().to_bits());
        prop_assert_eq!(line.slope().to_bits(), line.slope().to_bits());

        let v = Vector::from(c);
        prop_assert_eq!(v.angle().to_bits(), v.angle().to_bits());
        prop_assert_eq!(v.magnitude().to_bits(), v.magnitude().to_bits());
    }

    #[test]
    fn integral_table_agrees_with_integral(start in -5.0..5.0f64, width in 0.0..5.0f64, x in -6.0..12.0f64) {
        let g = Graph::new(|t: f64| t.cos() * 3.0 - t, (start, start + width)).unwrap();
        prop_assert_eq!(g.integral_table().eval(x).to_bits(), g.integral().eval(x).to_bits());
    }
}
