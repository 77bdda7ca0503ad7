// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An axis-aligned ellipse.

use core::ops::{Add, Sub};

use crate::common::{solve_quadratic, KAPPA};
use crate::{Circle, Line, PathEl, Point, Rect, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An axis-aligned ellipse, described by its center and its two
/// semi-axis lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    /// The center.
    pub center: Point,
    /// The semi-axis lengths: `x` along the x axis, `y` along the y
    /// axis.
    pub radii: Vec2,
}

impl Ellipse {
    /// A new ellipse from center and radii.
    #[inline]
    pub fn new(center: impl Into<Point>, radii: impl Into<Vec2>) -> Ellipse {
        Ellipse {
            center: center.into(),
            radii: radii.into(),
        }
    }

    /// The ellipse inscribed in the rectangle.
    #[inline]
    pub fn from_rect(rect: Rect) -> Ellipse {
        let rect = rect.abs();
        Ellipse {
            center: rect.center(),
            radii: Vec2::new(0.5 * rect.width(), 0.5 * rect.height()),
        }
    }

    /// Does this ellipse intersect the segment?
    ///
    /// Grazing contact in a single point does not count.
    #[inline]
    pub fn intersects_segment(&self, seg: Line) -> bool {
        intersects_ellipse_segment(
            self.center.x,
            self.center.y,
            self.radii.x,
            self.radii.y,
            seg.p0.x,
            seg.p0.y,
            seg.p1.x,
            seg.p1.y,
            false,
        )
    }

    /// Does this ellipse intersect the rectangle?
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        intersects_ellipse_rect(
            self.center.x,
            self.center.y,
            self.radii.x,
            self.radii.y,
            rect,
        )
    }

    /// Does this ellipse intersect the circle?
    pub fn intersects_circle(&self, circle: Circle) -> bool {
        let closest = self.closest_point(circle.center);
        closest.distance_squared(circle.center) < circle.radius * circle.radius
    }

    /// Does this ellipse intersect `other`?
    ///
    /// `other` is rescaled into the space where this ellipse is the unit
    /// circle, reducing to an ellipse/circle test.
    pub fn intersects_ellipse(&self, other: Ellipse) -> bool {
        if self.radii.x <= 0.0 || self.radii.y <= 0.0 || other.radii.x <= 0.0 || other.radii.y <= 0.0
        {
            return false;
        }
        let transformed = Ellipse::new(
            Point::new(
                (other.center.x - self.center.x) / self.radii.x,
                (other.center.y - self.center.y) / self.radii.y,
            ),
            Vec2::new(other.radii.x / self.radii.x, other.radii.y / self.radii.y),
        );
        transformed.intersects_circle(Circle::new(Point::ORIGIN, 1.0))
    }

    /// Is the rectangle entirely inside the ellipse?
    ///
    /// It is enough that the farthest corner is inside.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        let rect = rect.abs();
        let far = rect.farthest_point(self.center);
        self.contains(far)
    }

    /// Is this ellipse finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radii.is_finite()
    }

    /// Is this ellipse NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radii.is_nan()
    }
}

impl From<Circle> for Ellipse {
    #[inline]
    fn from(circle: Circle) -> Ellipse {
        circle.to_ellipse()
    }
}

impl Add<Vec2> for Ellipse {
    type Output = Ellipse;

    #[inline]
    fn add(self, v: Vec2) -> Ellipse {
        Ellipse {
            center: self.center + v,
            radii: self.radii,
        }
    }
}

impl Sub<Vec2> for Ellipse {
    type Output = Ellipse;

    #[inline]
    fn sub(self, v: Vec2) -> Ellipse {
        Ellipse {
            center: self.center - v,
            radii: self.radii,
        }
    }
}

/// An iterator yielding the path elements of an ellipse: one move, four
/// cubic quadrant arcs and a close.
pub struct EllipsePathIter {
    ellipse: Ellipse,
    ix: usize,
}

impl Iterator for EllipsePathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        let Point { x: cx, y: cy } = self.ellipse.center;
        let Vec2 { x: rx, y: ry } = self.ellipse.radii;
        let kx = KAPPA * rx;
        let ky = KAPPA * ry;
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(Point::new(cx + rx, cy))),
            2 => Some(PathEl::CurveTo(
                Point::new(cx + rx, cy + ky),
                Point::new(cx + kx, cy + ry),
                Point::new(cx, cy + ry),
            )),
            3 => Some(PathEl::CurveTo(
                Point::new(cx - kx, cy + ry),
                Point::new(cx - rx, cy + ky),
                Point::new(cx - rx, cy),
            )),
            4 => Some(PathEl::CurveTo(
                Point::new(cx - rx, cy - ky),
                Point::new(cx - kx, cy - ry),
                Point::new(cx, cy - ry),
            )),
            5 => Some(PathEl::CurveTo(
                Point::new(cx + kx, cy - ry),
                Point::new(cx + rx, cy - ky),
                Point::new(cx + rx, cy),
            )),
            6 => Some(PathEl::ClosePath),
            _ => None,
        }
    }
}

impl Shape for Ellipse {
    type PathElementsIter<'iter> = EllipsePathIter;

    #[inline]
    fn path_elements(&self) -> EllipsePathIter {
        EllipsePathIter {
            ellipse: *self,
            ix: 0,
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::new(
            self.center.x - self.radii.x.abs(),
            self.center.y - self.radii.y.abs(),
            self.center.x + self.radii.x.abs(),
            self.center.y + self.radii.y.abs(),
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

    /// Boundary points count as contained; a degenerate ellipse contains
    /// nothing.
    fn contains(&self, pt: Point) -> bool {
        if self.radii.x <= 0.0 || self.radii.y <= 0.0 {
            return false;
        }
        let nx = (pt.x - self.center.x) / self.radii.x;
        let ny = (pt.y - self.center.y) / self.radii.y;
        nx * nx + ny * ny <= 1.0
    }

    fn closest_point(&self, pt: Point) -> Point {
        // The root finder assumes the first semi-axis is the larger one
        // and the query lies in the positive quadrant; fold the point
        // into that frame and unfold the witness.
        let swap = self.radii.x < self.radii.y;
        let (e0, e1) = if swap {
            (self.radii.y, self.radii.x)
        } else {
            (self.radii.x, self.radii.y)
        };
        let local = pt - self.center;
        let (lx, ly) = if swap {
            (local.y, local.x)
        } else {
            (local.x, local.y)
        };
        let (qx, qy) = closest_on_solid_positive_quadrant(lx.abs(), ly.abs(), e0, e1);
        let cx = if lx < 0.0 { -qx } else { qx };
        let cy = if ly < 0.0 { -qy } else { qy };
        if swap {
            self.center + Vec2::new(cy, cx)
        } else {
            self.center + Vec2::new(cx, cy)
        }
    }

    fn farthest_point(&self, pt: Point) -> Point {
        // Same folding as for the closest point, but the root finder
        // takes the query in the negative quadrant and replies in the
        // positive one.
        let swap = self.radii.x < self.radii.y;
        let (e0, e1) = if swap {
            (self.radii.y, self.radii.x)
        } else {
            (self.radii.x, self.radii.y)
        };
        let local = pt - self.center;
        let (lx, ly) = if swap {
            (local.y, local.x)
        } else {
            (local.x, local.y)
        };
        let (qx, qy) = farthest_on_shallow_positive_quadrant(-lx.abs(), -ly.abs(), e0, e1);
        let fx = if lx < 0.0 { qx } else { -qx };
        let fy = if ly < 0.0 { qy } else { -qy };
        if swap {
            self.center + Vec2::new(fy, fx)
        } else {
            self.center + Vec2::new(fx, fy)
        }
    }
}

// Enough bisection steps to exhaust the f64 exponent range.
const MAX_ITERATIONS: usize = 1074;

/// Root of the closest-point normal equation, by bisection.
fn closest_root(r0: f64, zx: f64, zy: f64, g: f64) -> f64 {
    let n0 = r0 * zx;
    let mut s0 = zy - 1.0;
    let mut s1 = if g < 0.0 { 0.0 } else { n0.hypot(zy) - 1.0 };
    let mut s = f64::NAN;
    for _ in 0..MAX_ITERATIONS {
        s = 0.5 * (s0 + s1);
        if s == s0 || s == s1 {
            return s;
        }
        let ratio0 = n0 / (s + r0);
        let ratio1 = zy / (s + 1.0);
        let g = ratio0 * ratio0 + ratio1 * ratio1 - 1.0;
        if g > 0.0 {
            s0 = s;
        } else if g < 0.0 {
            s1 = s;
        } else {
            return s;
        }
    }
    s
}

/// Root of the farthest-point normal equation, by bisection.
///
/// The root lies below -1; both denormalized coordinates flip sign, so
/// the witness of a negative-quadrant query lands in the positive
/// quadrant.
fn farthest_root(r0: f64, zx: f64, zy: f64) -> f64 {
    let mut s0 = -zx.hypot(r0 * zy) - 1.0;
    let mut s1 = zx - 1.0;
    let mut s = f64::NAN;
    for _ in 0..MAX_ITERATIONS {
        s = 0.5 * (s0 + s1);
        if s == s0 || s == s1 {
            return s;
        }
        let ratio0 = zx / (s + 1.0);
        let ratio1 = r0 * zy / (s + r0);
        let g = ratio0 * ratio0 + ratio1 * ratio1 - 1.0;
        if g > 0.0 {
            s1 = s;
        } else if g < 0.0 {
            s0 = s;
        } else {
            return s;
        }
    }
    s
}

/// Closest point on the solid ellipse `(x/e0)² + (y/e1)² ≤ 1` to a point
/// of the positive quadrant, with `e0 ≥ e1`.
fn closest_on_solid_positive_quadrant(px: f64, py: f64, e0: f64, e1: f64) -> (f64, f64) {
    if py > 0.0 {
        if px > 0.0 {
            let zx = px / e0;
            let zy = py / e1;
            let g = zx * zx + zy * zy - 1.0;
            if g <= 0.0 {
                // Inside: the point is its own witness.
                (px, py)
            } else {
                let r0 = (e0 / e1) * (e0 / e1);
                let sbar = closest_root(r0, zx, zy, g);
                (r0 * px / (sbar + r0), py / (sbar + 1.0))
            }
        } else {
            // On the positive y axis.
            (0.0, py.min(e1))
        }
    } else {
        // On the positive x axis.
        if px <= e0 {
            (px, py)
        } else {
            let numer0 = e0 * px;
            let denom0 = e0 * e0 - e1 * e1;
            if numer0 < denom0 {
                let xde0 = numer0 / denom0;
                (e0 * xde0, e1 * (1.0 - xde0 * xde0).sqrt())
            } else {
                (e0, 0.0)
            }
        }
    }
}

/// Farthest boundary point of the ellipse `(x/e0)² + (y/e1)² = 1` from a
/// point of the negative quadrant, with `e0 ≥ e1`.
///
/// The reply lies in the positive quadrant.
fn farthest_on_shallow_positive_quadrant(px: f64, py: f64, e0: f64, e1: f64) -> (f64, f64) {
    if py < 0.0 {
        if px < 0.0 {
            let r0 = (e1 / e0) * (e1 / e0);
            let sbar = farthest_root(r0, px / e0, py / e1);
            (px / (sbar + 1.0), r0 * py / (sbar + r0))
        } else {
            // On the negative y axis the farthest point slides off the
            // axis until the query reaches the evolute.
            let numer = e1 * py.abs();
            let denom = e0 * e0 - e1 * e1;
            if numer < denom {
                let u = numer / denom;
                (e0 * (1.0 - u * u).sqrt(), e1 * u)
            } else {
                (0.0, e1)
            }
        }
    } else {
        // On the negative x axis: the far x vertex always wins when
        // e0 ≥ e1.
        (e0, 0.0)
    }
}

/// Does the ellipse intersect the segment?
///
/// With `intersects_when_touching`, a single grazing contact point
/// counts as an intersection.
#[allow(clippy::too_many_arguments)]
pub(crate) fn intersects_ellipse_segment(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    intersects_when_touching: bool,
) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }

    // Translate so the ellipse is centered at the origin.
    let px1 = x1 - cx;
    let py1 = y1 - cy;
    let px2 = x2 - cx;
    let py2 = y2 - cy;

    let sq_a = rx * rx;
    let sq_b = ry * ry;
    let vx = px2 - px1;
    let vy = py2 - py1;

    // Quadratic in the segment parameter.
    let a_param = vx * vx / sq_a + vy * vy / sq_b;
    let b_param = 2.0 * px1 * vx / sq_a + 2.0 * py1 * vy / sq_b;
    let c_param = px1 * px1 / sq_a + py1 * py1 / sq_b - 1.0;

    let roots = solve_quadratic(c_param, b_param, a_param);
    match roots.as_slice() {
        // A double root is a grazing contact.
        &[t] => intersects_when_touching && (0.0..=1.0).contains(&t),
        // The roots come back sorted.
        &[t1, t2] => t2 >= 0.0 && t1 <= 1.0,
        _ => false,
    }
}

/// Nearest-point test of an ellipse against a rectangle, in the frame
/// where the ellipse is the circle of radius one half.
pub(crate) fn intersects_ellipse_rect(cx: f64, cy: f64, rx: f64, ry: f64, rect: Rect) -> bool {
    let rect = rect.abs();
    if rect.width() <= 0.0 || rect.height() <= 0.0 || rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let ew = 2.0 * rx;
    let eh = 2.0 * ry;
    let normx0 = (rect.x0 - (cx - rx)) / ew - 0.5;
    let normx1 = normx0 + rect.width() / ew;
    let normy0 = (rect.y0 - (cy - ry)) / eh - 0.5;
    let normy1 = normy0 + rect.height() / eh;
    let nearx = if normx0 > 0.0 {
        normx0
    } else if normx1 < 0.0 {
        normx1
    } else {
        0.0
    };
    let neary = if normy0 > 0.0 {
        normy0
    } else if normy1 < 0.0 {
        normy1
    } else {
        0.0
    };
    nearx * nearx + neary * neary < 0.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_and_degenerate() {
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        assert!(e.contains(Point::new(3.0, 0.0)));
        assert!(e.contains(Point::new(4.0, 0.0)));
        assert!(!e.contains(Point::new(3.0, 2.0)));
        assert!(!Ellipse::new((0.0, 0.0), (0.0, 2.0)).contains(Point::ORIGIN));
    }

    #[test]
    fn path_pattern() {
        let e = Ellipse::new((1.0, 1.0), (2.0, 1.0));
        let els: alloc::vec::Vec<PathEl> = e.path_elements().collect();
        assert_eq!(els.len(), 6);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(3.0, 1.0)));
        assert_eq!(els[5], PathEl::ClosePath);
    }

    #[test]
    fn closest_point_on_axes() {
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        let c = e.closest_point(Point::new(10.0, 0.0));
        assert!(c.distance(Point::new(4.0, 0.0)) < 1e-9, "{c:?}");
        let c = e.closest_point(Point::new(0.0, -10.0));
        assert!(c.distance(Point::new(0.0, -2.0)) < 1e-9, "{c:?}");
        // Interior points are their own witness.
        let inside = Point::new(1.0, 0.5);
        assert_eq!(e.closest_point(inside), inside);
    }

    #[test]
    fn closest_point_off_axis_lies_on_the_ellipse() {
        let e = Ellipse::new((1.0, -2.0), (4.0, 2.0));
        let c = e.closest_point(Point::new(7.0, 3.0));
        let nx = (c.x - 1.0) / 4.0;
        let ny = (c.y + 2.0) / 2.0;
        assert!((nx * nx + ny * ny - 1.0).abs() < 1e-9, "witness {c:?} off the ellipse");
        // The witness must beat any axis vertex.
        let d = c.distance(Point::new(7.0, 3.0));
        assert!(d <= Point::new(5.0, -2.0).distance(Point::new(7.0, 3.0)));
        assert!(d <= Point::new(1.0, 0.0).distance(Point::new(7.0, 3.0)));
    }

    #[test]
    fn farthest_point_is_roughly_antipodal() {
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        let f = e.farthest_point(Point::new(10.0, 0.0));
        assert!(f.distance(Point::new(-4.0, 0.0)) < 1e-9, "{f:?}");
        let f = e.farthest_point(Point::new(3.0, 3.0));
        assert!(f.x < 0.0 && f.y < 0.0, "{f:?}");
        let nx = f.x / 4.0;
        let ny = f.y / 2.0;
        assert!((nx * nx + ny * ny - 1.0).abs() < 1e-9, "{f:?} off the ellipse");
    }

    #[test]
    fn farthest_point_from_the_minor_axis_leaves_the_axis() {
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        // Close to the center the farthest point is off-axis and must
        // beat both vertices.
        let query = Point::new(0.0, -1.0);
        let f = e.farthest_point(query);
        let nx = f.x / 4.0;
        let ny = f.y / 2.0;
        assert!((nx * nx + ny * ny - 1.0).abs() < 1e-9, "{f:?} off the ellipse");
        let d = f.distance_squared(query);
        assert!(d >= Point::new(4.0, 0.0).distance_squared(query));
        assert!(d >= Point::new(0.0, 2.0).distance_squared(query));
        // Past the evolute the far pole wins.
        let far = e.farthest_point(Point::new(0.0, -20.0));
        assert!(far.distance(Point::new(0.0, 2.0)) < 1e-9, "{far:?}");
    }

    #[test]
    fn tangent_segment_counts_only_when_touching() {
        // y = 2 grazes the ellipse at its top vertex.
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        assert!(!e.intersects_segment(Line::new((-5.0, 2.0), (5.0, 2.0))));
        assert!(intersects_ellipse_segment(
            0.0, 0.0, 4.0, 2.0, -5.0, 2.0, 5.0, 2.0, true
        ));
    }

    #[test]
    fn swapped_radii_agree_with_the_mirrored_query() {
        let wide = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        let tall = Ellipse::new((0.0, 0.0), (2.0, 4.0));
        let c1 = wide.closest_point(Point::new(5.0, 3.0));
        let c2 = tall.closest_point(Point::new(3.0, 5.0));
        assert!((c1.x - c2.y).abs() < 1e-12 && (c1.y - c2.x).abs() < 1e-12);
    }

    #[test]
    fn segment_intersection() {
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        assert!(e.intersects_segment(Line::new((-5.0, 0.0), (5.0, 0.0))));
        assert!(!e.intersects_segment(Line::new((-5.0, 3.0), (5.0, 3.0))));
        // Entirely inside still counts: the chord crosses the interior.
        assert!(e.intersects_segment(Line::new((-1.0, 0.0), (1.0, 0.0))));
    }

    #[test]
    fn rect_intersection() {
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        assert!(e.intersects_rect(Rect::new(3.0, -1.0, 6.0, 1.0)));
        assert!(!e.intersects_rect(Rect::new(4.5, 1.5, 6.0, 3.0)));
        assert!(e.contains_rect(Rect::new(-1.0, -1.0, 1.0, 1.0)));
        assert!(!e.contains_rect(Rect::new(-4.0, -2.0, 4.0, 2.0)));
    }

    #[test]
    fn ellipse_ellipse_intersection() {
        let a = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        assert!(a.intersects_ellipse(Ellipse::new((3.0, 0.0), (2.0, 1.0))));
        assert!(!a.intersects_ellipse(Ellipse::new((9.0, 0.0), (2.0, 1.0))));
    }

    #[test]
    fn circle_is_a_special_case() {
        let e = Ellipse::new((0.0, 0.0), (2.0, 2.0));
        let c = e.closest_point(Point::new(6.0, 0.0));
        assert!(c.distance(Point::new(2.0, 0.0)) < 1e-9, "{c:?}");
        assert!(e.intersects_circle(Circle::new((3.0, 0.0), 1.5)));
        assert!(!e.intersects_circle(Circle::new((9.0, 0.0), 1.5)));
    }
}
