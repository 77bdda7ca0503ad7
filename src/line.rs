// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments and the point/segment algebra shared by the other shapes.

use core::ops::{Add, Sub};

use crate::common::is_epsilon_zero;
use crate::{Path, PathEl, Point, Rect, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A line segment, from `p0` to `p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The midpoint of the line.
    #[inline]
    pub fn midpoint(self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Squared distance from the segment to a point.
    #[inline]
    pub fn distance_squared_to_point(self, pt: Point) -> f64 {
        dist_sq_segment_point(
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, pt.x, pt.y,
        )
    }

    /// Does this segment intersect `other`?
    ///
    /// Shared endpoints count as an intersection.
    #[inline]
    pub fn intersects(self, other: Line) -> bool {
        segments_intersect(
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, other.p0.x, other.p0.y,
            other.p1.x, other.p1.y,
        )
    }

    /// Squared distance between this segment and `other`.
    ///
    /// Zero iff the segments intersect.
    #[inline]
    pub fn distance_squared_to_segment(self, other: Line) -> f64 {
        closest_between_segments(
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, other.p0.x, other.p0.y,
            other.p1.x, other.p1.y,
        )
        .0
    }

    /// The point of this segment closest to the segment `other`.
    #[inline]
    pub fn closest_point_to_segment(self, other: Line) -> Point {
        closest_between_segments(
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, other.p0.x, other.p0.y,
            other.p1.x, other.p1.y,
        )
        .1
    }

    /// The point of this segment farthest from the segment `other`.
    ///
    /// The witness is always one of the two endpoints.
    pub fn farthest_point_to_segment(self, other: Line) -> Point {
        // The farthest endpoint is the one on the far side of the closest
        // approach parameter.
        let (_, _, sc) = closest_between_segments_param(
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, other.p0.x, other.p0.y,
            other.p1.x, other.p1.y,
        );
        if sc <= 0.5 {
            self.p1
        } else {
            self.p0
        }
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

impl Add<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn add(self, v: Vec2) -> Line {
        Line::new(self.p0 + v, self.p1 + v)
    }
}

impl Sub<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn sub(self, v: Vec2) -> Line {
        Line::new(self.p0 - v, self.p1 - v)
    }
}

/// An iterator yielding the path elements of a line segment.
///
/// A degenerate segment with coincident endpoints yields the bare move.
pub struct LinePathIter {
    line: Line,
    ix: usize,
}

impl Iterator for LinePathIter {
    type Item = PathEl;

    #[inline]
    fn next(&mut self) -> Option<PathEl> {
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(self.line.p0)),
            2 if self.line.p1 != self.line.p0 => Some(PathEl::LineTo(self.line.p1)),
            _ => None,
        }
    }
}

impl Shape for Line {
    type PathElementsIter<'iter> = LinePathIter;

    #[inline]
    fn path_elements(&self) -> LinePathIter {
        LinePathIter { line: *self, ix: 0 }
    }

    fn to_path(&self) -> Path {
        let mut path = Path::new();
        path.move_to(self.p0);
        if self.p1 != self.p0 {
            path.line_to(self.p1);
        }
        path
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }

    /// Returning zero here is consistent with the contains method (a line
    /// has no interior).
    #[inline]
    fn winding(&self, _pt: Point) -> i32 {
        0
    }

    /// A point is contained by a segment when it lies on the segment,
    /// within the process-wide tolerance.
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        is_epsilon_zero(self.distance_squared_to_point(pt))
    }

    fn closest_point(&self, pt: Point) -> Point {
        let mut ratio = project_on_line(
            pt.x, pt.y, self.p0.x, self.p0.y, self.p1.x, self.p1.y,
        );
        if !ratio.is_finite() {
            // Degenerate segment.
            return self.p0;
        }
        ratio = ratio.clamp(0.0, 1.0);
        self.p0.lerp(self.p1, ratio)
    }

    /// The farthest point is always one of the two endpoints; ties go to
    /// the start point.
    fn farthest_point(&self, pt: Point) -> Point {
        if self.p0.distance_squared(pt) >= self.p1.distance_squared(pt) {
            self.p0
        } else {
            self.p1
        }
    }
}

/// Projection abscissa of `(px, py)` on the line through `(s1x, s1y)` and
/// `(s2x, s2y)`.
///
/// Zero maps to the first point and one to the second; values outside
/// `[0, 1]` are beyond the corresponding endpoint.
#[inline]
pub(crate) fn project_on_line(
    px: f64,
    py: f64,
    s1x: f64,
    s1y: f64,
    s2x: f64,
    s2y: f64,
) -> f64 {
    let vx = s2x - s1x;
    let vy = s2y - s1y;
    ((px - s1x) * vx + (py - s1y) * vy) / (vx * vx + vy * vy)
}

/// Side of the oriented line `(x1, y1) → (x2, y2)` the point is on.
///
/// Positive for the clockwise side (to the right of the directed line in
/// a y-up frame), negative for the counter-clockwise side, zero when the
/// point is on the line within tolerance. Unlike [`ccw`], collinear
/// points are never reclassified.
pub(crate) fn side_of_line(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> i32 {
    let x21 = x2 - x1;
    let y21 = y2 - y1;
    let xp1 = px - x1;
    let yp1 = py - y1;
    let mut side = xp1 * y21 - yp1 * x21;
    if side != 0.0 && is_epsilon_zero(side) {
        side = 0.0;
    }
    if side < 0.0 {
        -1
    } else if side > 0.0 {
        1
    } else {
        0
    }
}

/// Turn indicator of the point against the segment `(x1, y1) → (x2, y2)`.
///
/// Positive on the clockwise side of the directed segment (to its right
/// in a y-up frame), negative on the counter-clockwise side. When the
/// three points are collinear within tolerance, the point is classified
/// against the segment span instead: -1 before the first point, 1 after
/// the second point, 0 on the segment.
pub(crate) fn ccw(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> i32 {
    let x21 = x2 - x1;
    let y21 = y2 - y1;
    let mut xp1 = px - x1;
    let mut yp1 = py - y1;
    let mut ccw = xp1 * y21 - yp1 * x21;
    if is_epsilon_zero(ccw) {
        ccw = xp1 * x21 + yp1 * y21;
        if ccw > 0.0 {
            xp1 -= x21;
            yp1 -= y21;
            ccw = xp1 * x21 + yp1 * y21;
            if ccw < 0.0 {
                ccw = 0.0;
            }
        }
    }
    if ccw < 0.0 {
        -1
    } else if ccw > 0.0 {
        1
    } else {
        0
    }
}

/// Squared distance from a point to the infinite line through two points.
pub(crate) fn dist_sq_line_point(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    px: f64,
    py: f64,
) -> f64 {
    let x21 = x2 - x1;
    let y21 = y2 - y1;
    let denom = x21 * x21 + y21 * y21;
    if denom == 0.0 {
        let dx = px - x1;
        let dy = py - y1;
        return dx * dx + dy * dy;
    }
    let factor = ((y1 - py) * x21 - (x1 - px) * y21) / denom;
    factor * factor * denom
}

/// Squared distance from a point to a segment.
pub(crate) fn dist_sq_segment_point(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    px: f64,
    py: f64,
) -> f64 {
    let ratio = project_on_line(px, py, x1, y1, x2, y2);
    let (cx, cy) = if ratio.is_nan() || ratio <= 0.0 {
        // NaN covers the degenerate zero-length segment.
        (x1, y1)
    } else if ratio >= 1.0 {
        (x2, y2)
    } else {
        (x1 + ratio * (x2 - x1), y1 + ratio * (y2 - y1))
    };
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy
}

/// One-directional conservative test: can the answer "the segments do not
/// intersect" be trusted?
///
/// Returns `false` only when the second segment is provably entirely on
/// one side of the first. Endpoint contact counts as an intersection.
#[allow(clippy::too_many_arguments)]
fn may_intersect_with_ends(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    let vx1 = x2 - x1;
    let vy1 = y2 - y1;

    let vx2a = x3 - x1;
    let vy2a = y3 - y1;
    let mut f1 = vx2a * vy1 - vy2a * vx1;

    let vx2b = x4 - x1;
    let vy2b = y4 - y1;
    let mut f2 = vx2b * vy1 - vy2b * vx1;

    let sign = f1 * f2;
    if sign < 0.0 {
        return true;
    }
    if sign > 0.0 {
        return false;
    }

    let squared_length = vx1 * vx1 + vy1 * vy1;

    if f1 == 0.0 && f2 == 0.0 {
        // Collinear; compare the projection spans.
        f1 = (vx2a * vx1 + vy2a * vy1) / squared_length;
        f2 = (vx2b * vx1 + vy2b * vy1) / squared_length;
        return (f1 >= 0.0 || f2 >= 0.0) && (f1 <= 1.0 || f2 <= 1.0);
    }

    if f1 == 0.0 {
        f1 = (vx2a * vx1 + vy2a * vy1) / squared_length;
        return (0.0..=1.0).contains(&f1);
    }

    if f2 == 0.0 {
        f2 = (vx2b * vx1 + vy2b * vy1) / squared_length;
        return (0.0..=1.0).contains(&f2);
    }

    false
}

/// As [`may_intersect_with_ends`], with endpoint contact excluded.
#[allow(clippy::too_many_arguments)]
fn may_intersect_without_ends(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    let vx1 = x2 - x1;
    let vy1 = y2 - y1;

    let vx2a = x3 - x1;
    let vy2a = y3 - y1;
    let mut f1 = vx2a * vy1 - vy2a * vx1;

    let vx2b = x4 - x1;
    let vy2b = y4 - y1;
    let mut f2 = vx2b * vy1 - vy2b * vx1;

    let sign = f1 * f2;
    if sign < 0.0 {
        return true;
    }
    if sign > 0.0 {
        return false;
    }

    if f1 == 0.0 && f2 == 0.0 {
        let squared_length = vx1 * vx1 + vy1 * vy1;
        f1 = (vx2a * vx1 + vy2a * vy1) / squared_length;
        f2 = (vx2b * vx1 + vy2b * vy1) / squared_length;
        return (f1 > 0.0 || f2 > 0.0) && (f1 < 1.0 || f2 < 1.0);
    }

    false
}

/// Do two segments intersect, counting endpoint contact?
#[allow(clippy::too_many_arguments)]
pub(crate) fn segments_intersect(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    may_intersect_with_ends(x1, y1, x2, y2, x3, y3, x4, y4)
        && may_intersect_with_ends(x3, y3, x4, y4, x1, y1, x2, y2)
}

/// Do two segments intersect, endpoint contact excluded?
#[allow(clippy::too_many_arguments)]
pub(crate) fn segments_intersect_excl(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    may_intersect_without_ends(x1, y1, x2, y2, x3, y3, x4, y4)
        && may_intersect_without_ends(x3, y3, x4, y4, x1, y1, x2, y2)
}

/// Closest approach between two segments.
///
/// Returns the squared distance, the witness point on the first segment,
/// and the parameter of that witness along the first segment.
#[allow(clippy::too_many_arguments)]
fn closest_between_segments_param(
    sx1: f64,
    sy1: f64,
    sx2: f64,
    sy2: f64,
    sx3: f64,
    sy3: f64,
    sx4: f64,
    sy4: f64,
) -> (f64, Point, f64) {
    let ux = sx2 - sx1;
    let uy = sy2 - sy1;
    let vx = sx4 - sx3;
    let vy = sy4 - sy3;
    let wx = sx1 - sx3;
    let wy = sy1 - sy3;
    let a = ux * ux + uy * uy;
    let b = ux * vx + uy * vy;
    let c = vx * vx + vy * vy;
    let d = ux * wx + uy * wy;
    let e = vx * wx + vy * wy;
    let big_d = a * c - b * b;
    let mut sv_n;
    let mut sv_d = big_d;
    let mut tv_n;
    let mut tv_d = big_d;

    if is_epsilon_zero(big_d) {
        // Nearly parallel; force the first segment's start point.
        sv_n = 0.0;
        sv_d = 1.0;
        tv_n = e;
        tv_d = c;
    } else {
        sv_n = b * e - c * d;
        tv_n = a * e - b * d;
        if sv_n < 0.0 {
            sv_n = 0.0;
            tv_n = e;
            tv_d = c;
        } else if sv_n > sv_d {
            sv_n = sv_d;
            tv_n = e + b;
            tv_d = c;
        }
    }

    if tv_n < 0.0 {
        tv_n = 0.0;
        if -d < 0.0 {
            sv_n = 0.0;
        } else if -d > a {
            sv_n = sv_d;
        } else {
            sv_n = -d;
            sv_d = a;
        }
    } else if tv_n > tv_d {
        tv_n = tv_d;
        if (-d + b) < 0.0 {
            sv_n = 0.0;
        } else if (-d + b) > a {
            sv_n = sv_d;
        } else {
            sv_n = -d + b;
            sv_d = a;
        }
    }

    let sc = if is_epsilon_zero(sv_n) { 0.0 } else { sv_n / sv_d };
    let tc = if is_epsilon_zero(tv_n) { 0.0 } else { tv_n / tv_d };

    let dpx = wx + sc * ux - tc * vx;
    let dpy = wy + sc * uy - tc * vy;
    let witness = Point::new(sx1 + sc * ux, sy1 + sc * uy);
    (dpx * dpx + dpy * dpy, witness, sc)
}

/// Closest approach between two segments: squared distance and the
/// witness point on the first segment.
#[allow(clippy::too_many_arguments)]
pub(crate) fn closest_between_segments(
    sx1: f64,
    sy1: f64,
    sx2: f64,
    sy2: f64,
    sx3: f64,
    sy3: f64,
    sx4: f64,
    sy4: f64,
) -> (f64, Point) {
    let (d2, witness, _) =
        closest_between_segments_param(sx1, sy1, sx2, sy2, sx3, sy3, sx4, sy4);
    (d2, witness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let l = Line::new((1.0, 1.0), (3.0, 1.0));
        assert_eq!(l.closest_point(Point::new(0.0, 5.0)), Point::new(1.0, 1.0));
        assert_eq!(l.closest_point(Point::new(9.0, 5.0)), Point::new(3.0, 1.0));
        assert_eq!(l.closest_point(Point::new(2.0, 5.0)), Point::new(2.0, 1.0));
    }

    #[test]
    fn farthest_point_is_an_endpoint() {
        let l = Line::new((1.0, 1.0), (3.0, 1.0));
        assert_eq!(l.farthest_point(Point::new(0.0, 0.0)), Point::new(3.0, 1.0));
        assert_eq!(l.farthest_point(Point::new(4.0, 0.0)), Point::new(1.0, 1.0));
        // Ties resolve to the start point.
        assert_eq!(l.farthest_point(Point::new(2.0, 0.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn segment_contains_on_segment_points_only() {
        let l = Line::new((0.0, 0.0), (2.0, 2.0));
        assert!(l.contains(Point::new(1.0, 1.0)));
        assert!(l.contains(Point::new(0.0, 0.0)));
        assert!(!l.contains(Point::new(1.0, 1.5)));
        assert!(!l.contains(Point::new(3.0, 3.0)));
    }

    #[test]
    fn crossing_segments_intersect() {
        let a = Line::new((0.0, 0.0), (2.0, 2.0));
        let b = Line::new((0.0, 2.0), (2.0, 0.0));
        assert!(a.intersects(b));
        assert_eq!(a.distance_squared_to_segment(b), 0.0);
    }

    #[test]
    fn endpoint_contact() {
        let a = Line::new((0.0, 0.0), (1.0, 0.0));
        let b = Line::new((1.0, 0.0), (2.0, 1.0));
        assert!(a.intersects(b));
        assert!(!segments_intersect_excl(
            0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 1.0
        ));
    }

    #[test]
    fn parallel_segment_distance() {
        let a = Line::new((0.0, 0.0), (2.0, 0.0));
        let b = Line::new((0.0, 3.0), (2.0, 3.0));
        assert!(!a.intersects(b));
        assert!((a.distance_squared_to_segment(b) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn ccw_collinear_classification() {
        assert_eq!(ccw(0.0, 0.0, 2.0, 0.0, 1.0, 0.0), 0);
        assert_eq!(ccw(0.0, 0.0, 2.0, 0.0, -1.0, 0.0), -1);
        assert_eq!(ccw(0.0, 0.0, 2.0, 0.0, 3.0, 0.0), 1);
        // Off-line points classify by side: negative counter-clockwise,
        // positive clockwise.
        assert_eq!(ccw(0.0, 0.0, 2.0, 0.0, 1.0, 1.0), -1);
        assert_eq!(ccw(0.0, 0.0, 2.0, 0.0, 1.0, -1.0), 1);
        assert_eq!(side_of_line(0.0, 0.0, 2.0, 0.0, 1.0, 1.0), -1);
        assert_eq!(side_of_line(0.0, 0.0, 2.0, 0.0, 1.0, -1.0), 1);
    }

    #[test]
    fn degenerate_segment_is_a_bare_move() {
        let l = Line::new((1.0, 1.0), (1.0, 1.0));
        let els: alloc::vec::Vec<PathEl> = l.path_elements().collect();
        assert_eq!(els, [PathEl::MoveTo(Point::new(1.0, 1.0))]);
        assert_eq!(l.to_path().elements().len(), 1);
        // A proper segment keeps its line element.
        let l = Line::new((1.0, 1.0), (2.0, 1.0));
        assert_eq!(l.path_elements().count(), 2);
    }

    #[test]
    fn winding_of_open_segment_is_zero() {
        let l = Line::new((0.0, 0.0), (2.0, 2.0));
        assert_eq!(l.winding(Point::new(1.0, 0.5)), 0);
    }
}
