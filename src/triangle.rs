// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A triangle.

use core::ops::{Add, Sub};

use crate::{Circle, Ellipse, Line, PathEl, Point, Rect, Shape, Vec2};

/// A triangle, described by its three vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// The first vertex.
    pub a: Point,
    /// The second vertex.
    pub b: Point,
    /// The third vertex.
    pub c: Point,
}

impl Triangle {
    /// A new triangle from three vertices.
    #[inline]
    pub fn new(a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) -> Triangle {
        Triangle {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// The three edges, each as a segment.
    #[inline]
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    /// Twice the signed area; positive for counterclockwise vertices.
    #[inline]
    pub fn double_signed_area(&self) -> f64 {
        (self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y)
    }

    /// Does this triangle intersect the segment?
    #[inline]
    pub fn intersects_segment(&self, seg: Line) -> bool {
        intersects_triangle_segment(
            self.a.x, self.a.y, self.b.x, self.b.y, self.c.x, self.c.y, seg.p0.x, seg.p0.y,
            seg.p1.x, seg.p1.y,
        )
    }

    /// Does this triangle intersect the rectangle?
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        let r = rect.abs();
        self.edges().iter().any(|e| r.intersects_segment(*e))
            || self.contains(Point::new(r.x0, r.y0))
    }

    /// Does this triangle intersect the circle?
    pub fn intersects_circle(&self, circle: Circle) -> bool {
        let closest = self.closest_point(circle.center);
        closest.distance_squared(circle.center) < circle.radius * circle.radius
    }

    /// Does this triangle intersect the ellipse?
    ///
    /// The triangle is rescaled into the space where the ellipse is the
    /// unit circle.
    pub fn intersects_ellipse(&self, ellipse: Ellipse) -> bool {
        if ellipse.radii.x <= 0.0 || ellipse.radii.y <= 0.0 {
            return false;
        }
        let map = |p: Point| {
            Point::new(
                (p.x - ellipse.center.x) / ellipse.radii.x,
                (p.y - ellipse.center.y) / ellipse.radii.y,
            )
        };
        let scaled = Triangle::new(map(self.a), map(self.b), map(self.c));
        scaled.intersects_circle(Circle::new(Point::ORIGIN, 1.0))
    }

    /// Is the rectangle entirely inside this triangle?
    pub fn contains_rect(&self, rect: Rect) -> bool {
        let r = rect.abs();
        self.contains(Point::new(r.x0, r.y0))
            && self.contains(Point::new(r.x1, r.y0))
            && self.contains(Point::new(r.x1, r.y1))
            && self.contains(Point::new(r.x0, r.y1))
    }

    /// Is this triangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Is this triangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.a.is_nan() || self.b.is_nan() || self.c.is_nan()
    }
}

impl Add<Vec2> for Triangle {
    type Output = Triangle;

    #[inline]
    fn add(self, v: Vec2) -> Triangle {
        Triangle {
            a: self.a + v,
            b: self.b + v,
            c: self.c + v,
        }
    }
}

impl Sub<Vec2> for Triangle {
    type Output = Triangle;

    #[inline]
    fn sub(self, v: Vec2) -> Triangle {
        Triangle {
            a: self.a - v,
            b: self.b - v,
            c: self.c - v,
        }
    }
}

/// An iterator yielding the path elements of a triangle: a move, two
/// lines and a close.
pub struct TrianglePathIter {
    tri: Triangle,
    ix: usize,
}

impl Iterator for TrianglePathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(self.tri.a)),
            2 => Some(PathEl::LineTo(self.tri.b)),
            3 => Some(PathEl::LineTo(self.tri.c)),
            4 => Some(PathEl::ClosePath),
            _ => None,
        }
    }
}

impl Shape for Triangle {
    type PathElementsIter<'iter> = TrianglePathIter;

    #[inline]
    fn path_elements(&self) -> TrianglePathIter {
        TrianglePathIter { tri: *self, ix: 0 }
    }

    fn bounding_box(&self) -> Rect {
        Rect::new(
            self.a.x.min(self.b.x).min(self.c.x),
            self.a.y.min(self.b.y).min(self.c.y),
            self.a.x.max(self.b.x).max(self.c.x),
            self.a.y.max(self.b.y).max(self.c.y),
        )
    }

    #[inline]
    fn winding(&self, pt: Point) -> i32 {
        if self.contains(pt) {
            1
        } else {
            0
        }
    }

    /// Barycentric containment test; a degenerate triangle contains
    /// nothing.
    fn contains(&self, pt: Point) -> bool {
        let denom = (self.b.y - self.c.y) * (self.a.x - self.c.x)
            + (self.c.x - self.b.x) * (self.a.y - self.c.y);
        if denom == 0.0 {
            return false;
        }
        let u = ((self.b.y - self.c.y) * (pt.x - self.c.x)
            + (self.c.x - self.b.x) * (pt.y - self.c.y))
            / denom;
        let v = ((self.c.y - self.a.y) * (pt.x - self.c.x)
            + (self.a.x - self.c.x) * (pt.y - self.c.y))
            / denom;
        let w = 1.0 - u - v;
        (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) && (0.0..=1.0).contains(&w)
    }

    fn closest_point(&self, pt: Point) -> Point {
        if self.contains(pt) {
            return pt;
        }
        let mut best = self.a;
        let mut best_dist = f64::INFINITY;
        for edge in self.edges() {
            let candidate = edge.closest_point(pt);
            let d = candidate.distance_squared(pt);
            if d < best_dist {
                best_dist = d;
                best = candidate;
            }
        }
        best
    }

    /// The farthest point of a solid triangle is always a vertex.
    fn farthest_point(&self, pt: Point) -> Point {
        let mut best = self.a;
        let mut best_dist = self.a.distance_squared(pt);
        for vertex in [self.b, self.c] {
            let d = vertex.distance_squared(pt);
            if d > best_dist {
                best_dist = d;
                best = vertex;
            }
        }
        best
    }
}

/// Separating-axis test of a triangle against a segment.
///
/// The four candidate axes are the three edge normals of the triangle
/// and the normal of the segment. Touching counts as intersecting.
#[allow(clippy::too_many_arguments)]
pub(crate) fn intersects_triangle_segment(
    tx1: f64,
    ty1: f64,
    tx2: f64,
    ty2: f64,
    tx3: f64,
    ty3: f64,
    sx1: f64,
    sy1: f64,
    sx2: f64,
    sy2: f64,
) -> bool {
    let axes = [
        (-(ty2 - ty1), tx2 - tx1),
        (-(ty3 - ty2), tx3 - tx2),
        (-(ty1 - ty3), tx1 - tx3),
        (-(sy2 - sy1), sx2 - sx1),
    ];
    for (ax, ay) in axes {
        let p1 = ax * tx1 + ay * ty1;
        let p2 = ax * tx2 + ay * ty2;
        let p3 = ax * tx3 + ay * ty3;
        let tmin = p1.min(p2).min(p3);
        let tmax = p1.max(p2).max(p3);
        let q1 = ax * sx1 + ay * sy1;
        let q2 = ax * sx2 + ay * sy2;
        let smin = q1.min(q2);
        let smax = q1.max(q2);
        if tmax < smin || smax < tmin {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Triangle {
        Triangle::new((0.0, 0.0), (4.0, 0.0), (0.0, 4.0))
    }

    #[test]
    fn contains_interior_boundary_and_degenerate() {
        let t = tri();
        assert!(t.contains(Point::new(1.0, 1.0)));
        assert!(t.contains(Point::new(2.0, 2.0)));
        assert!(t.contains(Point::new(0.0, 0.0)));
        assert!(!t.contains(Point::new(3.0, 3.0)));
        assert!(!t.contains(Point::new(-0.1, 1.0)));
        let flat = Triangle::new((0.0, 0.0), (1.0, 1.0), (2.0, 2.0));
        assert!(!flat.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn path_pattern() {
        let els: alloc::vec::Vec<PathEl> = tri().path_elements().collect();
        assert_eq!(
            els,
            [
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(4.0, 0.0)),
                PathEl::LineTo(Point::new(0.0, 4.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn closest_and_farthest() {
        let t = tri();
        // Interior witness is the query point.
        let q = Point::new(1.0, 1.0);
        assert_eq!(t.closest_point(q), q);
        // Below the bottom edge.
        assert_eq!(t.closest_point(Point::new(2.0, -3.0)), Point::new(2.0, 0.0));
        // Beyond the hypotenuse.
        let c = t.closest_point(Point::new(4.0, 4.0));
        assert!(c.distance(Point::new(2.0, 2.0)) < 1e-9, "{c:?}");
        assert_eq!(t.farthest_point(Point::new(5.0, 0.0)), Point::new(0.0, 4.0));
        assert_eq!(t.farthest_point(Point::new(0.0, 5.0)), Point::new(4.0, 0.0));
    }

    #[test]
    fn segment_intersection() {
        let t = tri();
        assert!(t.intersects_segment(Line::new((-1.0, 1.0), (5.0, 1.0))));
        assert!(t.intersects_segment(Line::new((1.0, 1.0), (1.5, 1.5))));
        assert!(!t.intersects_segment(Line::new((3.0, 3.0), (6.0, 6.0))));
        assert!(!t.intersects_segment(Line::new((-1.0, -1.0), (5.0, -1.0))));
    }

    #[test]
    fn rect_intersection() {
        let t = tri();
        assert!(t.intersects_rect(Rect::new(1.0, 1.0, 5.0, 5.0)));
        assert!(!t.intersects_rect(Rect::new(3.0, 3.0, 5.0, 5.0)));
        // Rect entirely inside.
        assert!(t.intersects_rect(Rect::new(0.5, 0.5, 1.0, 1.0)));
        // Triangle entirely inside.
        assert!(t.intersects_rect(Rect::new(-1.0, -1.0, 5.0, 5.0)));
        assert!(t.contains_rect(Rect::new(0.5, 0.5, 1.0, 1.0)));
        assert!(!t.contains_rect(Rect::new(1.0, 1.0, 5.0, 5.0)));
    }

    #[test]
    fn circle_and_ellipse_intersection() {
        let t = tri();
        assert!(t.intersects_circle(Circle::new((2.0, 2.0), 1.0)));
        assert!(!t.intersects_circle(Circle::new((5.0, 5.0), 1.0)));
        assert!(t.intersects_ellipse(Ellipse::new((4.0, 4.0), (4.0, 2.0))));
        assert!(!t.intersects_ellipse(Ellipse::new((8.0, 8.0), (2.0, 1.0))));
    }
}
