//! Quickhull for 2D point sets.
//!
//! Finds the smallest convex polygon enclosing a finite set of points. The
//! two points extreme along the x-axis split the set into a lower and an
//! upper half; each half is expanded by repeatedly pulling in the point
//! farthest from the current edge.
//!
//! ```
//! use quickhull2d::{ConvexHull, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//!     Point::new(2.0, 2.0),
//! ];
//! let hull = ConvexHull::quickhull(&points).unwrap();
//!
//! // Counterclockwise, starting at the lexicographically smallest point.
//! assert_eq!(hull.vertices(), &points[..4]);
//! ```

use log::{debug, trace};
use nalgebra as na;
use ordered_float::NotNan;

mod error;
mod predicates;

pub use error::HullError;
use predicates::{distance, in_triangle, on_segment, side};

pub type Point = na::Point2<f64>;

type LexKey = (NotNan<f64>, NotNan<f64>);

/// Largest accepted coordinate magnitude. Differences of two coordinates
/// multiplied together stay below `f64::MAX / 4`, so `side` cannot overflow.
pub const MAX_COORDINATE: f64 = 3.351951982485649e153;

/// The vertices of a convex polygon in counterclockwise order.
///
/// The last vertex connects back to the first. A hull built from collinear
/// input has exactly two vertices and zero area.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvexHull {
    vertices: Vec<Point>,
}

impl ConvexHull {
    /// Computes the hull of `points`. The input is copied, see [`compute_hull`].
    pub fn quickhull(points: &[Point]) -> Result<Self, HullError> {
        let vertices = compute_hull(points.to_vec())?;
        Ok(Self { vertices })
    }

    /// The hull vertices, counterclockwise from the minimum point.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Consumes the hull, returning its vertices in the same order as [`vertices`](Self::vertices).
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Number of vertices, always at least 2.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` when the input was collinear and the hull is a single segment.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Consecutive vertex pairs, ending with the edge from the last vertex
    /// back to the first.
    ///
    /// A degenerate hull yields its segment in both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let next = self.vertices.iter().cycle().skip(1);
        self.vertices.iter().copied().zip(next.copied())
    }

    /// Returns `true` if `point` lies inside the hull or on its boundary.
    pub fn contains(&self, point: &Point) -> bool {
        match self.vertices.as_slice() {
            [a, b] => on_segment(a, b, point),
            [first, rest @ ..] => rest
                .windows(2)
                .any(|pair| in_triangle(first, &pair[0], &pair[1], point)),
            [] => false,
        }
    }

    /// Enclosed area (shoelace formula).
    pub fn area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        twice / 2.0
    }
}

/// Computes the hull of `points`, consuming the set.
///
/// Returns the hull vertices counterclockwise, starting at the point that
/// [`find_extreme_points`] reports as the minimum. Points lying on a hull edge
/// without being a corner are not part of the result.
pub fn compute_hull(points: Vec<Point>) -> Result<Vec<Point>, HullError> {
    let (min_index, max_index) = find_extreme_points(&points)?;
    let (min, max) = (points[min_index], points[max_index]);
    debug!(
        "computing hull of {} points between {:?} and {:?}",
        points.len(),
        min,
        max
    );

    let rest: Vec<Point> = points
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != min_index && *i != max_index)
        .map(|(_, p)| p)
        .collect();
    let (lower, upper) = partition_by_side(&min, &max, rest);

    let mut hull = vec![min];
    hull.extend(expand_hull(lower, &min, &max));
    hull.push(max);
    hull.extend(expand_hull(upper, &max, &min));

    debug!("hull has {} vertices", hull.len());
    Ok(hull)
}

/// Finds the positions of the smallest and largest points along the x-axis.
///
/// Ties on `x` are broken by `y`, so the pair is always a pair of hull corners;
/// among exact duplicates the first occurrence is reported. Fails if a
/// coordinate is not finite or exceeds [`MAX_COORDINATE`] in magnitude, or if
/// the input has fewer than two distinct points.
pub fn find_extreme_points(points: &[Point]) -> Result<(usize, usize), HullError> {
    let mut extremes: Option<((usize, LexKey), (usize, LexKey))> = None;
    for (index, point) in points.iter().enumerate() {
        let key = lex_key(point).ok_or(HullError::NonFiniteCoordinate { index })?;
        if point.x.abs() > MAX_COORDINATE || point.y.abs() > MAX_COORDINATE {
            return Err(HullError::CoordinateOutOfRange { index });
        }
        extremes = Some(match extremes {
            None => ((index, key), (index, key)),
            Some((min, max)) => (
                if key < min.1 { (index, key) } else { min },
                if key > max.1 { (index, key) } else { max },
            ),
        });
    }

    match extremes {
        None => Err(HullError::InsufficientPoints { distinct: 0 }),
        Some(((_, min_key), (_, max_key))) if min_key == max_key => {
            Err(HullError::InsufficientPoints { distinct: 1 })
        }
        Some(((min, _), (max, _))) => Ok((min, max)),
    }
}

/// Splits `points` by the directed line `p1 -> p2`.
///
/// The first set holds the points right of the line or on it, the second
/// holds the rest.
pub fn partition_by_side(p1: &Point, p2: &Point, points: Vec<Point>) -> (Vec<Point>, Vec<Point>) {
    points.into_iter().partition(|p| side(p1, p2, p) >= 0.0)
}

/// The points of `points` lying outside of, or on, the edge `p1 -> p2`.
pub fn outside_set(p1: &Point, p2: &Point, points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .filter(|p| side(p1, p2, p) >= 0.0)
        .copied()
        .collect()
}

/// Position of the point in `points` farthest from the line through `p1` and `p2`.
///
/// The first of several equally distant points wins. Points on the line are
/// never chosen, so `None` means `points` is empty or entirely collinear
/// with the edge.
pub fn farthest_point(p1: &Point, p2: &Point, points: &[Point]) -> Option<usize> {
    let mut max_dist = 0.0;
    let mut max_point = None;
    for (i, p) in points.iter().enumerate() {
        let d = distance(p1, p2, p);
        if d > max_dist {
            max_dist = d;
            max_point = Some(i);
        }
    }
    max_point
}

/// Returns the hull vertices strictly between the adjacent vertices `p1` and
/// `p2`, in order, given the candidates outside the edge `p1 -> p2`.
///
/// Candidates that end up inside the triangle spanned by the edge and its
/// farthest point are dropped.
pub fn expand_hull(mut candidates: Vec<Point>, p1: &Point, p2: &Point) -> Vec<Point> {
    let farthest = match farthest_point(p1, p2, &candidates) {
        Some(index) => candidates.swap_remove(index),
        None => return Vec::new(),
    };

    let before = outside_set(p1, &farthest, &candidates);
    let after = outside_set(&farthest, p2, &candidates);
    trace!(
        "inserted {:?}: {} candidates before, {} after, {} interior",
        farthest,
        before.len(),
        after.len(),
        candidates.len().saturating_sub(before.len() + after.len())
    );

    let mut segment = expand_hull(before, p1, &farthest);
    segment.push(farthest);
    segment.extend(expand_hull(after, &farthest, p2));
    segment
}

fn lex_key(point: &Point) -> Option<LexKey> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    Some((NotNan::new(point.x).ok()?, NotNan::new(point.y).ok()?))
}
