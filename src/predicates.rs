//! Orientation tests on plain `f64` coordinates.
//!
//! Everything here is the straightforward cross-product test with no
//! adaptive-precision fallback.

use crate::Point;

/// Which side of the directed line `p1 -> p2` the point `p` lies on.
///
/// - `side > 0`: right of the line, i.e. outside an edge of a counterclockwise hull
/// - `side < 0`: left of the line
/// - `side == 0`: collinear
#[inline]
pub(crate) fn side(p1: &Point, p2: &Point, p: &Point) -> f64 {
    (p.x - p1.x) * (p2.y - p1.y) - (p.y - p1.y) * (p2.x - p1.x)
}

/// Twice the area of the triangle `p1, p2, p`.
///
/// Proportional to the distance of `p` from the line through `p1` and `p2`,
/// which is all the farthest-point search needs.
#[inline]
pub(crate) fn distance(p1: &Point, p2: &Point, p: &Point) -> f64 {
    ((p1.x - p.x) * (p2.y - p1.y) - (p1.x - p2.x) * (p.y - p1.y)).abs()
}

/// Returns `true` if `p` lies inside or on the boundary of the triangle `a, b, c`.
///
/// Works for either winding of the triangle.
pub(crate) fn in_triangle(a: &Point, b: &Point, c: &Point, p: &Point) -> bool {
    let sides = [side(a, b, p), side(b, c, p), side(c, a, p)];
    let has_neg = sides.iter().any(|&s| s < 0.0);
    let has_pos = sides.iter().any(|&s| s > 0.0);
    !(has_neg && has_pos)
}

/// Returns `true` if `p` lies on the closed segment `a, b`.
pub(crate) fn on_segment(a: &Point, b: &Point, p: &Point) -> bool {
    side(a, b, p) == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_sign_convention() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        assert!(side(&a, &b, &Point::new(2.0, -1.0)) > 0.0);
        assert!(side(&a, &b, &Point::new(2.0, 1.0)) < 0.0);
        assert_eq!(side(&a, &b, &Point::new(7.0, 0.0)), 0.0);
    }

    #[test]
    fn distance_is_unsigned_side() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(5.0, 3.0);
        for p in &[Point::new(0.0, 4.0), Point::new(3.0, -2.0), Point::new(3.0, 2.0)] {
            assert_eq!(distance(&a, &b, p), side(&a, &b, p).abs());
        }
        // Doubles the triangle area: base 4, height 2.
        assert_eq!(
            distance(&Point::new(0.0, 0.0), &Point::new(4.0, 0.0), &Point::new(1.0, 2.0)),
            8.0
        );
    }

    #[test]
    fn triangle_containment_includes_boundary() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 4.0);
        assert!(in_triangle(&a, &b, &c, &Point::new(1.0, 1.0)));
        assert!(in_triangle(&a, &c, &b, &Point::new(1.0, 1.0)));
        assert!(in_triangle(&a, &b, &c, &Point::new(2.0, 2.0)));
        assert!(in_triangle(&a, &b, &c, &a));
        assert!(!in_triangle(&a, &b, &c, &Point::new(3.0, 3.0)));
        assert!(!in_triangle(&a, &b, &c, &Point::new(-0.1, 1.0)));
    }

    #[test]
    fn segment_membership() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 2.0);
        assert!(on_segment(&a, &b, &Point::new(1.0, 1.0)));
        assert!(on_segment(&a, &b, &b));
        assert!(!on_segment(&a, &b, &Point::new(3.0, 3.0)));
        assert!(!on_segment(&a, &b, &Point::new(1.0, 0.0)));
    }
}
