// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An oriented rectangle, and fitting one to a point cloud.

use core::ops::{Add, Sub};

use crate::{Affine, Circle, Ellipse, Line, PathEl, Point, Rect, RoundRect, Shape, Triangle, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A rectangle with an arbitrary orientation.
///
/// Described by its center, the unit direction of its first axis and
/// the half extents along the first and second axis. The second axis is
/// always the first rotated by a quarter turn counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientedRect {
    /// The center.
    pub center: Point,
    /// The unit direction of the first axis.
    pub axis: Vec2,
    /// The half extents along the first and second axis.
    pub extents: Vec2,
}

impl OrientedRect {
    /// A new oriented rectangle.
    ///
    /// The axis is normalized; the extents are taken by absolute value.
    pub fn new(center: impl Into<Point>, axis: Vec2, extents: Vec2) -> OrientedRect {
        OrientedRect {
            center: center.into(),
            axis: axis.normalize(),
            extents: Vec2::new(extents.x.abs(), extents.y.abs()),
        }
    }

    /// The unit direction of the second axis.
    #[inline]
    pub fn minor_axis(&self) -> Vec2 {
        Vec2::new(-self.axis.y, self.axis.x)
    }

    /// Fit the best oriented bounding rectangle to a point cloud.
    ///
    /// The axes are the eigenvectors of the covariance matrix of the
    /// cloud; the box is then shrunk to the extreme projections onto
    /// them. Returns `None` for an empty cloud.
    pub fn from_points(points: &[Point]) -> Option<OrientedRect> {
        let (axis_r, axis_s) = covariance_axes(points)?;
        let mut min_r = f64::INFINITY;
        let mut max_r = f64::NEG_INFINITY;
        let mut min_s = f64::INFINITY;
        let mut max_s = f64::NEG_INFINITY;
        for p in points {
            let v = p.to_vec2();
            let r = v.dot(axis_r);
            let s = v.dot(axis_s);
            min_r = min_r.min(r);
            max_r = max_r.max(r);
            min_s = min_s.min(s);
            max_s = max_s.max(s);
        }
        let mid_r = 0.5 * (min_r + max_r);
        let mid_s = 0.5 * (min_s + max_s);
        let center = (mid_r * axis_r + mid_s * axis_s).to_point();
        // Re-measure the extents about the center with the same dot
        // products the containment test uses, so no sample on the fitted
        // boundary can round its way out of the box.
        let mut ext_r: f64 = 0.0;
        let mut ext_s: f64 = 0.0;
        for p in points {
            let v = *p - center;
            ext_r = ext_r.max(v.dot(axis_r).abs());
            ext_s = ext_s.max(v.dot(axis_s).abs());
        }
        Some(OrientedRect {
            center,
            axis: axis_r,
            extents: Vec2::new(ext_r, ext_s),
        })
    }

    /// The coordinates of the point in the frame of this rectangle.
    #[inline]
    fn to_local(&self, pt: Point) -> (f64, f64) {
        let v = pt - self.center;
        (v.dot(self.axis), v.dot(self.minor_axis()))
    }

    /// The point with the given frame coordinates.
    #[inline]
    fn from_local(&self, r: f64, s: f64) -> Point {
        self.center + r * self.axis + s * self.minor_axis()
    }

    /// The transform into the frame of this rectangle.
    ///
    /// In that frame the rectangle is axis aligned, centered on the
    /// origin and spans plus and minus the extents; see
    /// [`local_rect`](OrientedRect::local_rect).
    pub fn local_transform(&self) -> Affine {
        let r = self.axis;
        let s = self.minor_axis();
        let c = self.center.to_vec2();
        Affine::new([r.x, s.x, r.y, s.y, -r.dot(c), -s.dot(c)])
    }

    /// The axis-aligned footprint of this rectangle in its own frame.
    pub fn local_rect(&self) -> Rect {
        Rect::new(
            -self.extents.x,
            -self.extents.y,
            self.extents.x,
            self.extents.y,
        )
    }

    /// The four corners, in path order.
    pub fn corners(&self) -> [Point; 4] {
        let (e1, e2) = (self.extents.x, self.extents.y);
        [
            self.from_local(-e1, -e2),
            self.from_local(e1, -e2),
            self.from_local(e1, e2),
            self.from_local(-e1, e2),
        ]
    }

    /// Does this rectangle intersect the segment?
    ///
    /// The segment is mapped into the frame of the rectangle, reducing
    /// to an axis-aligned clipping test.
    pub fn intersects_segment(&self, seg: Line) -> bool {
        let (r0, s0) = self.to_local(seg.p0);
        let (r1, s1) = self.to_local(seg.p1);
        crate::rect::intersects_rect_segment(
            -self.extents.x,
            -self.extents.y,
            self.extents.x,
            self.extents.y,
            r0,
            s0,
            r1,
            s1,
        )
    }

    /// Does this rectangle intersect `other`? Separating-axis test over
    /// the four axes of the two rectangles; touching counts.
    pub fn intersects_oriented_rect(&self, other: OrientedRect) -> bool {
        let d = other.center - self.center;
        let axes = [
            self.axis,
            self.minor_axis(),
            other.axis,
            other.minor_axis(),
        ];
        for axis in axes {
            let ra = self.extents.x * self.axis.dot(axis).abs()
                + self.extents.y * self.minor_axis().dot(axis).abs();
            let rb = other.extents.x * other.axis.dot(axis).abs()
                + other.extents.y * other.minor_axis().dot(axis).abs();
            if d.dot(axis).abs() > ra + rb {
                return false;
            }
        }
        true
    }

    /// Does this rectangle intersect the axis-aligned rectangle?
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        let rect = rect.abs();
        let aligned = OrientedRect {
            center: rect.center(),
            axis: Vec2::new(1.0, 0.0),
            extents: Vec2::new(0.5 * rect.width(), 0.5 * rect.height()),
        };
        self.intersects_oriented_rect(aligned)
    }

    /// Does this rectangle intersect the circle?
    pub fn intersects_circle(&self, circle: Circle) -> bool {
        let closest = self.closest_point(circle.center);
        closest.distance_squared(circle.center) < circle.radius * circle.radius
    }

    /// Does this rectangle intersect the triangle? Separating-axis test
    /// over the two axes of the rectangle and the three edge normals of
    /// the triangle.
    pub fn intersects_triangle(&self, tri: &Triangle) -> bool {
        let corners = self.corners();
        let verts = [tri.a, tri.b, tri.c];
        let axes = [
            self.axis,
            self.minor_axis(),
            (tri.b - tri.a).turn_90(),
            (tri.c - tri.b).turn_90(),
            (tri.a - tri.c).turn_90(),
        ];
        for axis in axes {
            let (amin, amax) = project_span(&corners, axis);
            let (bmin, bmax) = project_span(&verts, axis);
            if amax < bmin || bmax < amin {
                return false;
            }
        }
        true
    }

    /// Does this rectangle intersect the ellipse?
    ///
    /// Either a border segment crosses the ellipse, or one shape holds
    /// the center of the other.
    pub fn intersects_ellipse(&self, ellipse: Ellipse) -> bool {
        if self.contains(ellipse.center) || ellipse.contains(self.center) {
            return true;
        }
        let c = self.corners();
        (0..4).any(|i| ellipse.intersects_segment(Line::new(c[i], c[(i + 1) % 4])))
    }

    /// Does this rectangle intersect the rounded rectangle?
    pub fn intersects_round_rect(&self, rr: &RoundRect) -> bool {
        if self.contains(rr.center()) || rr.contains(self.center) {
            return true;
        }
        let c = self.corners();
        (0..4).any(|i| rr.intersects_segment(Line::new(c[i], c[(i + 1) % 4])))
    }

    /// Is the rectangle entirely inside this one?
    pub fn contains_rect(&self, rect: Rect) -> bool {
        let rect = rect.abs();
        self.contains(Point::new(rect.x0, rect.y0))
            && self.contains(Point::new(rect.x1, rect.y0))
            && self.contains(Point::new(rect.x1, rect.y1))
            && self.contains(Point::new(rect.x0, rect.y1))
    }

    /// Is this rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.axis.is_finite() && self.extents.is_finite()
    }

    /// Is this rectangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.axis.is_nan() || self.extents.is_nan()
    }
}

impl Add<Vec2> for OrientedRect {
    type Output = OrientedRect;

    #[inline]
    fn add(self, v: Vec2) -> OrientedRect {
        OrientedRect {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for OrientedRect {
    type Output = OrientedRect;

    #[inline]
    fn sub(self, v: Vec2) -> OrientedRect {
        OrientedRect {
            center: self.center - v,
            ..self
        }
    }
}

/// The span of the projections of the points onto the axis.
fn project_span(points: &[Point], axis: Vec2) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        let d = p.to_vec2().dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// The orthonormal principal axes of a point cloud, or `None` when the
/// cloud is empty.
///
/// These are the axes [`OrientedRect::from_points`] fits against.
pub fn obb_axes(points: &[Point]) -> Option<(Vec2, Vec2)> {
    covariance_axes(points)
}

/// The orthonormal eigenvectors of the covariance matrix of the cloud.
///
/// A single Jacobi rotation diagonalizes a symmetric 2x2 matrix
/// exactly.
fn covariance_axes(points: &[Point]) -> Option<(Vec2, Vec2)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let mut sum = Vec2::ZERO;
    for p in points {
        sum += p.to_vec2();
    }
    let mean = sum / n;
    let mut cov_xx = 0.0;
    let mut cov_xy = 0.0;
    let mut cov_yy = 0.0;
    for p in points {
        let d = p.to_vec2() - mean;
        cov_xx += d.x * d.x;
        cov_xy += d.x * d.y;
        cov_yy += d.y * d.y;
    }
    cov_xx /= n;
    cov_xy /= n;
    cov_yy /= n;

    if cov_xy == 0.0 {
        // Already diagonal.
        return Some((Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)));
    }
    // cot(2theta) for the annihilating rotation.
    let u = (cov_yy - cov_xx) * 0.5 / cov_xy;
    let t = if u == 0.0 {
        1.0
    } else {
        u.signum() / (u.abs() + (u * u + 1.0).sqrt())
    };
    let c = 1.0 / (t * t + 1.0).sqrt();
    let s = c * t;
    Some((Vec2::new(c, s), Vec2::new(-s, c)))
}

/// An iterator yielding the path elements of an oriented rectangle: a
/// move, three lines and a close.
pub struct OrientedRectPathIter {
    corners: [Point; 4],
    ix: usize,
}

impl Iterator for OrientedRectPathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(self.corners[0])),
            2..=4 => Some(PathEl::LineTo(self.corners[self.ix - 1])),
            5 => Some(PathEl::ClosePath),
            _ => None,
        }
    }
}

impl Shape for OrientedRect {
    type PathElementsIter<'iter> = OrientedRectPathIter;

    #[inline]
    fn path_elements(&self) -> OrientedRectPathIter {
        OrientedRectPathIter {
            corners: self.corners(),
            ix: 0,
        }
    }

    fn bounding_box(&self) -> Rect {
        let u = self.axis;
        let v = self.minor_axis();
        let half_w = self.extents.x * u.x.abs() + self.extents.y * v.x.abs();
        let half_h = self.extents.x * u.y.abs() + self.extents.y * v.y.abs();
        Rect::new(
            self.center.x - half_w,
            self.center.y - half_h,
            self.center.x + half_w,
            self.center.y + half_h,
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

    fn contains(&self, pt: Point) -> bool {
        let (r, s) = self.to_local(pt);
        r.abs() <= self.extents.x && s.abs() <= self.extents.y
    }

    fn closest_point(&self, pt: Point) -> Point {
        if self.contains(pt) {
            // Going through the frame and back would perturb the point.
            return pt;
        }
        let (r, s) = self.to_local(pt);
        self.from_local(
            r.clamp(-self.extents.x, self.extents.x),
            s.clamp(-self.extents.y, self.extents.y),
        )
    }

    fn farthest_point(&self, pt: Point) -> Point {
        let (r, s) = self.to_local(pt);
        let far_r = if r <= 0.0 {
            self.extents.x
        } else {
            -self.extents.x
        };
        let far_s = if s <= 0.0 {
            self.extents.y
        } else {
            -self.extents.y
        };
        self.from_local(far_r, far_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Axis at 45 degrees, half extents 2 by 1.
    fn diamond() -> OrientedRect {
        let inv_sqrt2 = core::f64::consts::FRAC_1_SQRT_2;
        OrientedRect::new(
            (0.0, 0.0),
            Vec2::new(inv_sqrt2, inv_sqrt2),
            Vec2::new(2.0, 1.0),
        )
    }

    #[test]
    fn contains_in_the_rotated_frame() {
        let r = diamond();
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(1.0, 1.0)));
        // Along the minor axis the half extent is only 1.
        assert!(!r.contains(Point::new(-1.0, 1.0)));
        assert!(r.contains(Point::new(-0.5, 0.5)));
    }

    #[test]
    fn closest_and_farthest_are_frame_clamps() {
        let r = diamond();
        let inside = Point::new(1.0, 1.0);
        assert_eq!(r.closest_point(inside), inside);
        // Far out along the major axis.
        let c = r.closest_point(Point::new(10.0, 10.0));
        let expect = Point::new(2.0 * core::f64::consts::FRAC_1_SQRT_2, 2.0 * core::f64::consts::FRAC_1_SQRT_2);
        assert!(c.distance(expect) < 1e-9, "{c:?}");
        let f = r.farthest_point(Point::new(10.0, 10.0));
        assert!(f.x < 0.0 && f.y < 0.0, "{f:?}");
    }

    #[test]
    fn path_is_a_closed_quad() {
        let els: alloc::vec::Vec<PathEl> = diamond().path_elements().collect();
        assert_eq!(els.len(), 5);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn local_frame_straightens_the_box() {
        let r = diamond();
        let t = r.local_transform();
        for corner in r.corners() {
            let q = t * corner;
            assert!(
                (q.x.abs() - 2.0).abs() < 1e-12 && (q.y.abs() - 1.0).abs() < 1e-12,
                "{q:?}"
            );
        }
        assert_eq!(r.local_rect(), Rect::new(-2.0, -1.0, 2.0, 1.0));
    }

    #[test]
    fn fitting_an_axis_aligned_cloud() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(4.0, 2.0),
        ];
        let obb = OrientedRect::from_points(&pts).unwrap();
        assert!(obb.center.distance(Point::new(2.0, 1.0)) < 1e-12);
        for p in pts {
            assert!(obb.contains(p));
        }
        assert!((obb.extents.x * obb.extents.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn fitting_a_diagonal_cloud() {
        let pts: alloc::vec::Vec<Point> = (0..10)
            .map(|i| {
                let t = f64::from(i);
                Point::new(t, t + if i % 2 == 0 { 0.1 } else { -0.1 })
            })
            .collect();
        let obb = OrientedRect::from_points(&pts).unwrap();
        // The major axis must hug the diagonal.
        assert!((obb.axis.x.abs() - obb.axis.y.abs()).abs() < 0.05, "{:?}", obb.axis);
        // Orthonormal frame.
        assert!((obb.axis.hypot2() - 1.0).abs() < 1e-12);
        assert!(obb.axis.dot(obb.minor_axis()).abs() < 1e-12);
        for p in pts {
            assert!(obb.contains(p));
        }
    }

    #[test]
    fn empty_cloud_has_no_fit() {
        assert!(OrientedRect::from_points(&[]).is_none());
    }

    #[test]
    fn fitted_box_contains_every_sample() {
        use rand::Rng;
        let mut rng = rand::rng();
        let mut pts = alloc::vec::Vec::new();
        for _ in 0..200 {
            let t: f64 = rng.random_range(0.0..10.0);
            let noise: f64 = rng.random_range(-0.5..0.5);
            pts.push(Point::new(t + noise, 0.5 * t - noise));
        }
        let obb = OrientedRect::from_points(&pts).unwrap();
        // The samples spanning the box sit exactly on its boundary, and
        // boundary points count as contained.
        for p in &pts {
            assert!(obb.contains(*p), "{p:?} escaped the fitted box");
        }
    }

    #[test]
    fn segment_and_rect_intersection() {
        let r = diamond();
        assert!(r.intersects_segment(Line::new((-3.0, 0.0), (3.0, 0.0))));
        assert!(!r.intersects_segment(Line::new((-3.0, 3.0), (0.0, 3.0))));
        assert!(r.intersects_rect(Rect::new(0.0, 0.0, 3.0, 3.0)));
        assert!(!r.intersects_rect(Rect::new(-3.0, 2.0, -2.0, 3.0)));
    }

    #[test]
    fn oriented_rect_pair_intersection() {
        let r = diamond();
        let other = OrientedRect::new((2.0, 2.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(r.intersects_oriented_rect(other));
        let far = OrientedRect::new((5.0, -5.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(!r.intersects_oriented_rect(far));
    }

    #[test]
    fn circle_intersection() {
        let r = diamond();
        assert!(r.intersects_circle(Circle::new((2.0, 2.0), 1.0)));
        assert!(!r.intersects_circle(Circle::new((-2.0, 2.0), 0.5)));
    }
}
