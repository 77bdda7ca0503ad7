// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;
use core::ops::{Add, Sub};

use crate::{Point, RoundRect, Shape, Size, Vec2};
use crate::path::PathEl;

/// A rectangle.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (bottom edge in y-up spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (top edge in y-up spaces).
    pub y1: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x, p0.y, p1.x, p1.y).abs()
    }

    /// A new rectangle from origin and size.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Rect {
        let origin = origin.into();
        let size = size.into();
        Rect::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
        .abs()
    }

    /// A new rectangle from center and size.
    #[inline]
    pub fn from_center_size(center: impl Into<Point>, size: impl Into<Size>) -> Rect {
        let center = center.into();
        let size = 0.5 * size.into();
        Rect::new(
            center.x - size.width,
            center.y - size.height,
            center.x + size.width,
            center.y + size.height,
        )
        .abs()
    }

    /// The width of the rectangle.
    ///
    /// Note: nothing forbids negative width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    ///
    /// Note: nothing forbids negative height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Returns the minimum value for the x-coordinate of the rectangle.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x0.min(self.x1)
    }

    /// Returns the maximum value for the x-coordinate of the rectangle.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x0.max(self.x1)
    }

    /// Returns the minimum value for the y-coordinate of the rectangle.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y0.min(self.y1)
    }

    /// Returns the maximum value for the y-coordinate of the rectangle.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y0.max(self.y1)
    }

    /// The origin of the rectangle.
    ///
    /// This is the `(x0, y0)` corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// The size of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// Take the absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    pub fn abs(&self) -> Rect {
        Rect::new(self.min_x(), self.min_y(), self.max_x(), self.max_y())
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    /// Thus, a succession of `union_pt` operations on a series of
    /// points yields their enclosing rectangle.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// The intersection of two rectangles.
    ///
    /// The result is zero-area if they don't intersect. Results are valid
    /// only if width and height are non-negative.
    #[inline]
    pub fn intersect(&self, other: Rect) -> Rect {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1);
        let y1 = self.y1.min(other.y1);
        Rect::new(x0, y0, x1.max(x0), y1.max(y0))
    }

    /// Does this rectangle overlap `other`?
    ///
    /// Edge contact does not count as overlap: both interiors must meet.
    #[inline]
    pub fn overlaps(&self, other: Rect) -> bool {
        self.x1 > other.x0 && other.x1 > self.x0 && self.y1 > other.y0 && other.y1 > self.y0
    }

    /// Is `other` entirely inside this rectangle?
    ///
    /// Empty rectangles are never contained.
    #[inline]
    pub fn contains_rect(&self, other: Rect) -> bool {
        other.width() > 0.0
            && other.height() > 0.0
            && self.x0 <= other.x0
            && self.y0 <= other.y0
            && other.x1 <= self.x1
            && other.y1 <= self.y1
    }

    /// Does this rectangle intersect the given segment?
    ///
    /// Touching the border counts as an intersection.
    #[inline]
    pub fn intersects_segment(&self, seg: crate::Line) -> bool {
        intersects_rect_segment(
            self.min_x(),
            self.min_y(),
            self.max_x(),
            self.max_y(),
            seg.p0.x,
            seg.p0.y,
            seg.p1.x,
            seg.p1.y,
        )
    }

    /// Attach the given corner radii to this rectangle.
    #[inline]
    pub fn to_round_rect(self, arc_width: f64, arc_height: f64) -> RoundRect {
        RoundRect::from_rect(self, arc_width, arc_height)
    }

    /// Is this rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    /// Is this rectangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x0.is_nan() || self.y0.is_nan() || self.x1.is_nan() || self.y1.is_nan()
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, v: Vec2) -> Rect {
        Rect::new(self.x0 + v.x, self.y0 + v.y, self.x1 + v.x, self.y1 + v.y)
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, v: Vec2) -> Rect {
        Rect::new(self.x0 - v.x, self.y0 - v.y, self.x1 - v.x, self.y1 - v.y)
    }
}

/// An iterator yielding the path elements of a rectangle.
pub struct RectPathIter {
    rect: Rect,
    ix: usize,
}

impl Iterator for RectPathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(Point::new(self.rect.x0, self.rect.y0))),
            2 => Some(PathEl::LineTo(Point::new(self.rect.x1, self.rect.y0))),
            3 => Some(PathEl::LineTo(Point::new(self.rect.x1, self.rect.y1))),
            4 => Some(PathEl::LineTo(Point::new(self.rect.x0, self.rect.y1))),
            5 => Some(PathEl::ClosePath),
            _ => None,
        }
    }
}

impl Shape for Rect {
    type PathElementsIter<'iter> = RectPathIter;

    #[inline]
    fn path_elements(&self) -> RectPathIter {
        RectPathIter { rect: *self, ix: 0 }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        self.abs()
    }

    /// Note: this function is carefully designed so that if the plane is
    /// tiled with rectangles, the winding number will be nonzero for
    /// exactly one of them.
    #[inline]
    fn winding(&self, pt: Point) -> i32 {
        let xmin = self.x0.min(self.x1);
        let xmax = self.x0.max(self.x1);
        let ymin = self.y0.min(self.y1);
        let ymax = self.y0.max(self.y1);
        if pt.x >= xmin && pt.x < xmax && pt.y >= ymin && pt.y < ymax {
            if (self.x1 > self.x0) ^ (self.y1 > self.y0) {
                -1
            } else {
                1
            }
        } else {
            0
        }
    }

    /// Boundary points count as contained.
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min_x() && pt.x <= self.max_x() && pt.y >= self.min_y() && pt.y <= self.max_y()
    }

    fn closest_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x.clamp(self.min_x(), self.max_x()),
            pt.y.clamp(self.min_y(), self.max_y()),
        )
    }

    fn farthest_point(&self, pt: Point) -> Point {
        let center = self.center();
        Point::new(
            if pt.x <= center.x {
                self.max_x()
            } else {
                self.min_x()
            },
            if pt.y <= center.y {
                self.max_y()
            } else {
                self.min_y()
            },
        )
    }
}

// Outcodes for Cohen-Sutherland clipping.
const OUT_LEFT: u8 = 1;
const OUT_RIGHT: u8 = 2;
const OUT_BOTTOM: u8 = 4;
const OUT_TOP: u8 = 8;

fn outcode(x: f64, y: f64, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> u8 {
    let mut code = 0;
    if x < xmin {
        code |= OUT_LEFT;
    } else if x > xmax {
        code |= OUT_RIGHT;
    }
    if y < ymin {
        code |= OUT_BOTTOM;
    } else if y > ymax {
        code |= OUT_TOP;
    }
    code
}

/// Cohen-Sutherland clipping loop for the rect/segment intersection test.
#[allow(clippy::too_many_arguments)]
pub(crate) fn intersects_rect_segment(
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    let mut px1 = x1;
    let mut py1 = y1;
    let mut px2 = x2;
    let mut py2 = y2;
    let mut code1 = outcode(px1, py1, xmin, ymin, xmax, ymax);
    let mut code2 = outcode(px2, py2, xmin, ymin, xmax, ymax);

    loop {
        if (code1 | code2) == 0 {
            // Both endpoints inside.
            return true;
        }
        if (code1 & code2) != 0 {
            // Both endpoints on the same outer side.
            return false;
        }

        let code3 = if code1 != 0 { code1 } else { code2 };
        let x;
        let y;
        if (code3 & OUT_TOP) != 0 {
            x = px1 + (px2 - px1) * (ymax - py1) / (py2 - py1);
            y = ymax;
        } else if (code3 & OUT_BOTTOM) != 0 {
            x = px1 + (px2 - px1) * (ymin - py1) / (py2 - py1);
            y = ymin;
        } else if (code3 & OUT_RIGHT) != 0 {
            y = py1 + (py2 - py1) * (xmax - px1) / (px2 - px1);
            x = xmax;
        } else {
            y = py1 + (py2 - py1) * (xmin - px1) / (px2 - px1);
            x = xmin;
        }

        if code3 == code1 {
            px1 = x;
            py1 = y;
            code1 = outcode(px1, py1, xmin, ymin, xmax, ymax);
        } else {
            px2 = x;
            py2 = y;
            code2 = outcode(px2, py2, xmin, ymin, xmax, ymax);
        }
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect {{ origin: {:?}, size: {:?} }}",
            self.origin(),
            self.size()
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Rect {{ ")?;
        fmt::Display::fmt(&self.origin(), formatter)?;
        write!(formatter, " ")?;
        fmt::Display::fmt(&self.size(), formatter)?;
        write!(formatter, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Line;

    #[test]
    fn contains_includes_boundary() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(4.0, 2.0)));
        assert!(r.contains(Point::new(2.0, 1.0)));
        assert!(!r.contains(Point::new(4.1, 1.0)));
    }

    #[test]
    fn winding_tiles_the_plane() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(r.winding(Point::new(2.0, 1.0)), 1);
        assert_eq!(r.winding(Point::new(0.0, 0.0)), 1);
        assert_eq!(r.winding(Point::new(4.0, 2.0)), 0);
    }

    #[test]
    fn closest_point_clamps() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(r.closest_point(Point::new(-1.0, 5.0)), Point::new(0.0, 2.0));
        assert_eq!(r.closest_point(Point::new(2.0, 1.0)), Point::new(2.0, 1.0));
    }

    #[test]
    fn farthest_point_is_a_corner() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(r.farthest_point(Point::new(0.5, 0.5)), Point::new(4.0, 2.0));
        assert_eq!(r.farthest_point(Point::new(3.5, 1.5)), Point::new(0.0, 0.0));
    }

    #[test]
    fn segment_clipping() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert!(r.intersects_segment(Line::new((-1.0, 1.0), (5.0, 1.0))));
        assert!(r.intersects_segment(Line::new((2.0, 1.0), (2.0, 1.5))));
        assert!(!r.intersects_segment(Line::new((-1.0, 3.0), (5.0, 3.0))));
        // Diagonal grazing the corner region but staying outside.
        assert!(!r.intersects_segment(Line::new((5.0, 1.0), (3.0, 4.0))));
    }

    #[test]
    fn union_and_overlap() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 3.0, 3.0);
        assert_eq!(a.union(b), Rect::new(0.0, 0.0, 3.0, 3.0));
        assert!(a.overlaps(b));
        // Edge contact only.
        let c = Rect::new(2.0, 0.0, 4.0, 2.0);
        assert!(!a.overlaps(c));
        assert!(Rect::new(0.0, 0.0, 4.0, 4.0).contains_rect(a));
        assert!(!a.contains_rect(Rect::new(0.0, 0.0, 4.0, 4.0)));
    }
}
