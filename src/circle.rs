// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circle.

use core::ops::{Add, Sub};

use crate::common::{is_epsilon_zero, KAPPA};
use crate::line::dist_sq_segment_point;
use crate::{Ellipse, Line, PathEl, Point, Rect, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Does this circle intersect `other`?
    ///
    /// Boundary contact alone does not count.
    #[inline]
    pub fn intersects_circle(&self, other: Circle) -> bool {
        let r = self.radius + other.radius;
        self.center.distance_squared(other.center) < r * r
    }

    /// Does this circle intersect the rectangle?
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        let r = rect.abs();
        let dx = self.center.x - self.center.x.clamp(r.x0, r.x1);
        let dy = self.center.y - self.center.y.clamp(r.y0, r.y1);
        dx * dx + dy * dy < self.radius * self.radius
    }

    /// Does this circle intersect the segment?
    #[inline]
    pub fn intersects_segment(&self, seg: Line) -> bool {
        intersects_circle_segment(
            self.center.x,
            self.center.y,
            self.radius,
            seg.p0.x,
            seg.p0.y,
            seg.p1.x,
            seg.p1.y,
        )
    }

    /// Is the rectangle entirely inside the circle?
    ///
    /// It is enough that the farthest corner is inside.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        let far = rect.farthest_point(self.center);
        self.center.distance_squared(far) <= self.radius * self.radius
    }

    /// View this circle as an ellipse with equal radii.
    #[inline]
    pub fn to_ellipse(self) -> Ellipse {
        Ellipse::new(self.center, Vec2::new(self.radius, self.radius))
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

/// An iterator yielding the path elements of a circle: one move, four
/// cubic quadrant arcs and a close.
pub struct CirclePathIter {
    circle: Circle,
    ix: usize,
}

impl Iterator for CirclePathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        let Point { x: cx, y: cy } = self.circle.center;
        let r = self.circle.radius;
        let k = KAPPA * r;
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(Point::new(cx + r, cy))),
            2 => Some(PathEl::CurveTo(
                Point::new(cx + r, cy + k),
                Point::new(cx + k, cy + r),
                Point::new(cx, cy + r),
            )),
            3 => Some(PathEl::CurveTo(
                Point::new(cx - k, cy + r),
                Point::new(cx - r, cy + k),
                Point::new(cx - r, cy),
            )),
            4 => Some(PathEl::CurveTo(
                Point::new(cx - r, cy - k),
                Point::new(cx - k, cy - r),
                Point::new(cx, cy - r),
            )),
            5 => Some(PathEl::CurveTo(
                Point::new(cx + k, cy - r),
                Point::new(cx + r, cy - k),
                Point::new(cx + r, cy),
            )),
            6 => Some(PathEl::ClosePath),
            _ => None,
        }
    }
}

impl Shape for Circle {
    type PathElementsIter<'iter> = CirclePathIter;

    #[inline]
    fn path_elements(&self) -> CirclePathIter {
        CirclePathIter {
            circle: *self,
            ix: 0,
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
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

    /// Boundary points count as contained.
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        self.center.distance_squared(pt) <= self.radius * self.radius
    }

    fn closest_point(&self, pt: Point) -> Point {
        let v = pt - self.center;
        if v.hypot2() <= self.radius * self.radius {
            // Interior points of a solid shape are their own witness.
            return pt;
        }
        self.center + self.radius * v.normalize()
    }

    fn farthest_point(&self, pt: Point) -> Point {
        let v = pt - self.center;
        if is_epsilon_zero(v.hypot2()) {
            // Every boundary point is equally far from the center.
            return Point::new(self.center.x + self.radius, self.center.y);
        }
        self.center - self.radius * v.normalize()
    }
}

/// Does the circle with center `(cx, cy)` intersect the segment?
pub(crate) fn intersects_circle_segment(
    cx: f64,
    cy: f64,
    radius: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    dist_sq_segment_point(x1, y1, x2, y2, cx, cy) < radius * radius
}
