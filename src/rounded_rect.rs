// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle with rounded corners.

use core::ops::{Add, Sub};

use crate::common::KAPPA;
use crate::ellipse::{intersects_ellipse_rect, intersects_ellipse_segment};
use crate::{Circle, Ellipse, Line, PathEl, Point, Rect, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A rectangle with elliptic corner arcs.
///
/// All four corners share the same arc radii: `arc_width` along the x
/// axis and `arc_height` along the y axis. The radii are clamped to the
/// half extents of the rectangle on construction, so the arcs can never
/// overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRect {
    rect: Rect,
    arc_width: f64,
    arc_height: f64,
}

impl RoundRect {
    /// A new rounded rectangle from coordinates and corner radii.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64, arc_width: f64, arc_height: f64) -> RoundRect {
        RoundRect::from_rect(Rect::new(x0, y0, x1, y1), arc_width, arc_height)
    }

    /// A new rounded rectangle from a rectangle and corner radii.
    pub fn from_rect(rect: Rect, arc_width: f64, arc_height: f64) -> RoundRect {
        let rect = rect.abs();
        RoundRect {
            rect,
            arc_width: arc_width.abs().min(0.5 * rect.width()),
            arc_height: arc_height.abs().min(0.5 * rect.height()),
        }
    }

    /// The enclosing rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The corner radius along the x axis.
    #[inline]
    pub fn arc_width(&self) -> f64 {
        self.arc_width
    }

    /// The corner radius along the y axis.
    #[inline]
    pub fn arc_height(&self) -> f64 {
        self.arc_height
    }

    /// The width of the enclosing rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// The height of the enclosing rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// The center point.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// The center of the corner arc the point falls into, if it falls
    /// into one.
    fn corner_arc_center(&self, pt: Point) -> Option<Point> {
        if self.arc_width <= 0.0 || self.arc_height <= 0.0 {
            return None;
        }
        let r = self.rect;
        let cx = if pt.x < r.x0 + self.arc_width {
            r.x0 + self.arc_width
        } else if pt.x > r.x1 - self.arc_width {
            r.x1 - self.arc_width
        } else {
            return None;
        };
        let cy = if pt.y < r.y0 + self.arc_height {
            r.y0 + self.arc_height
        } else if pt.y > r.y1 - self.arc_height {
            r.y1 - self.arc_height
        } else {
            return None;
        };
        Some(Point::new(cx, cy))
    }

    fn corner_ellipse(&self, center: Point) -> Ellipse {
        Ellipse::new(center, Vec2::new(self.arc_width, self.arc_height))
    }

    /// Does this rounded rectangle intersect the segment?
    #[inline]
    pub fn intersects_segment(&self, seg: Line) -> bool {
        intersects_round_rect_segment(
            self.rect.x0,
            self.rect.y0,
            self.rect.x1,
            self.rect.y1,
            self.arc_width,
            self.arc_height,
            seg.p0.x,
            seg.p0.y,
            seg.p1.x,
            seg.p1.y,
        )
    }

    /// Does this rounded rectangle intersect the rectangle?
    ///
    /// Like the other intersection predicates, the interiors must meet;
    /// shared borders alone do not count.
    pub fn intersects_rect(&self, other: Rect) -> bool {
        let other = other.abs();
        let r = self.rect;
        let aw = self.arc_width;
        let ah = self.arc_height;
        if Rect::new(r.x0, r.y0 + ah, r.x1, r.y1 - ah).overlaps(other)
            || Rect::new(r.x0 + aw, r.y0, r.x1 - aw, r.y1).overlaps(other)
        {
            return true;
        }
        self.corner_centers()
            .iter()
            .any(|&c| intersects_ellipse_rect(c.x, c.y, aw, ah, other))
    }

    /// Does this rounded rectangle intersect the circle?
    pub fn intersects_circle(&self, circle: Circle) -> bool {
        let closest = self.closest_point(circle.center);
        closest.distance_squared(circle.center) < circle.radius * circle.radius
    }

    /// Does this rounded rectangle intersect the ellipse?
    ///
    /// Decomposed like the segment test: two overlapping rectangles and
    /// the four corner arcs.
    pub fn intersects_ellipse(&self, ellipse: Ellipse) -> bool {
        let r = self.rect;
        let aw = self.arc_width;
        let ah = self.arc_height;
        if ellipse.intersects_rect(Rect::new(r.x0, r.y0 + ah, r.x1, r.y1 - ah))
            || ellipse.intersects_rect(Rect::new(r.x0 + aw, r.y0, r.x1 - aw, r.y1))
        {
            return true;
        }
        self.corner_centers()
            .iter()
            .any(|&c| ellipse.intersects_ellipse(self.corner_ellipse(c)))
    }

    /// Is the rectangle entirely inside this rounded rectangle?
    ///
    /// The shape is convex, so it is enough that all four corners are.
    pub fn contains_rect(&self, other: Rect) -> bool {
        let other = other.abs();
        self.contains(Point::new(other.x0, other.y0))
            && self.contains(Point::new(other.x1, other.y0))
            && self.contains(Point::new(other.x1, other.y1))
            && self.contains(Point::new(other.x0, other.y1))
    }

    fn corner_centers(&self) -> [Point; 4] {
        let r = self.rect;
        let aw = self.arc_width;
        let ah = self.arc_height;
        [
            Point::new(r.x0 + aw, r.y0 + ah),
            Point::new(r.x1 - aw, r.y0 + ah),
            Point::new(r.x1 - aw, r.y1 - ah),
            Point::new(r.x0 + aw, r.y1 - ah),
        ]
    }

    /// Is this rounded rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rect.is_finite() && self.arc_width.is_finite() && self.arc_height.is_finite()
    }

    /// Is this rounded rectangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.rect.is_nan() || self.arc_width.is_nan() || self.arc_height.is_nan()
    }
}

impl Add<Vec2> for RoundRect {
    type Output = RoundRect;

    #[inline]
    fn add(self, v: Vec2) -> RoundRect {
        RoundRect {
            rect: self.rect + v,
            ..self
        }
    }
}

impl Sub<Vec2> for RoundRect {
    type Output = RoundRect;

    #[inline]
    fn sub(self, v: Vec2) -> RoundRect {
        RoundRect {
            rect: self.rect - v,
            ..self
        }
    }
}

/// An iterator yielding the path elements of a rounded rectangle: a
/// move, four edges, four corner arcs and a close, always ten elements.
pub struct RoundRectPathIter {
    rr: RoundRect,
    ix: usize,
}

impl Iterator for RoundRectPathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        let Rect { x0, y0, x1, y1 } = self.rr.rect;
        let aw = self.rr.arc_width;
        let ah = self.rr.arc_height;
        // Control-point offsets for a quarter arc.
        let kw = aw * (1.0 - KAPPA);
        let kh = ah * (1.0 - KAPPA);
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(Point::new(x0 + aw, y0))),
            2 => Some(PathEl::LineTo(Point::new(x1 - aw, y0))),
            3 => Some(PathEl::CurveTo(
                Point::new(x1 - kw, y0),
                Point::new(x1, y0 + kh),
                Point::new(x1, y0 + ah),
            )),
            4 => Some(PathEl::LineTo(Point::new(x1, y1 - ah))),
            5 => Some(PathEl::CurveTo(
                Point::new(x1, y1 - kh),
                Point::new(x1 - kw, y1),
                Point::new(x1 - aw, y1),
            )),
            6 => Some(PathEl::LineTo(Point::new(x0 + aw, y1))),
            7 => Some(PathEl::CurveTo(
                Point::new(x0 + kw, y1),
                Point::new(x0, y1 - kh),
                Point::new(x0, y1 - ah),
            )),
            8 => Some(PathEl::LineTo(Point::new(x0, y0 + ah))),
            9 => Some(PathEl::CurveTo(
                Point::new(x0, y0 + kh),
                Point::new(x0 + kw, y0),
                Point::new(x0 + aw, y0),
            )),
            10 => Some(PathEl::ClosePath),
            _ => None,
        }
    }
}

impl Shape for RoundRect {
    type PathElementsIter<'iter> = RoundRectPathIter;

    #[inline]
    fn path_elements(&self) -> RoundRectPathIter {
        RoundRectPathIter { rr: *self, ix: 0 }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    #[inline]
    fn winding(&self, pt: Point) -> i32 {
        if self.contains(pt) {
            1
        } else {
            0
        }
    }

    /// A point is inside when it is inside the enclosing rectangle and,
    /// if it falls into a corner region, inside that corner's arc.
    fn contains(&self, pt: Point) -> bool {
        let r = self.rect;
        if pt.x < r.x0 || pt.x > r.x1 || pt.y < r.y0 || pt.y > r.y1 {
            return false;
        }
        match self.corner_arc_center(pt) {
            Some(c) => self.corner_ellipse(c).contains(pt),
            None => true,
        }
    }

    fn closest_point(&self, pt: Point) -> Point {
        match self.corner_arc_center(pt) {
            Some(c) => self.corner_ellipse(c).closest_point(pt),
            None => Point::new(
                pt.x.clamp(self.rect.x0, self.rect.x1),
                pt.y.clamp(self.rect.y0, self.rect.y1),
            ),
        }
    }

    fn farthest_point(&self, pt: Point) -> Point {
        if self.arc_width <= 0.0 || self.arc_height <= 0.0 {
            return self.rect.farthest_point(pt);
        }
        // The farthest boundary point lies on the corner arc opposite
        // the query.
        let c = self.rect.center();
        let ex = if pt.x <= c.x {
            self.rect.x1 - self.arc_width
        } else {
            self.rect.x0 + self.arc_width
        };
        let ey = if pt.y <= c.y {
            self.rect.y1 - self.arc_height
        } else {
            self.rect.y0 + self.arc_height
        };
        self.corner_ellipse(Point::new(ex, ey)).farthest_point(pt)
    }
}

/// Does the rounded rectangle intersect the segment?
///
/// The shape is decomposed into two overlapping rectangles and the four
/// corner arcs; grazing contact with an arc counts.
#[allow(clippy::too_many_arguments)]
pub(crate) fn intersects_round_rect_segment(
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    arc_width: f64,
    arc_height: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> bool {
    if crate::rect::intersects_rect_segment(
        rxmin,
        rymin + arc_height,
        rxmax,
        rymax - arc_height,
        x0,
        y0,
        x1,
        y1,
    ) || crate::rect::intersects_rect_segment(
        rxmin + arc_width,
        rymin,
        rxmax - arc_width,
        rymax,
        x0,
        y0,
        x1,
        y1,
    ) {
        return true;
    }
    let centers = [
        (rxmin + arc_width, rymin + arc_height),
        (rxmax - arc_width, rymin + arc_height),
        (rxmax - arc_width, rymax - arc_height),
        (rxmin + arc_width, rymax - arc_height),
    ];
    centers.iter().any(|&(cx, cy)| {
        intersects_ellipse_segment(cx, cy, arc_width, arc_height, x0, y0, x1, y1, true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_pattern_is_always_ten_elements() {
        // Origin (5, 8), width 5, height 10, arc radii 0.1 and 0.2.
        let rr = RoundRect::new(5.0, 8.0, 10.0, 18.0, 0.1, 0.2);
        let els: alloc::vec::Vec<PathEl> = rr.path_elements().collect();
        assert_eq!(els.len(), 10);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(5.1, 8.0)));
        assert!(matches!(els[1], PathEl::LineTo(_)));
        assert!(matches!(els[2], PathEl::CurveTo(..)));
        assert_eq!(els[9], PathEl::ClosePath);
    }

    #[test]
    fn radii_are_clamped_to_the_half_extents() {
        let rr = RoundRect::new(0.0, 0.0, 4.0, 2.0, 10.0, 10.0);
        assert_eq!(rr.arc_width(), 2.0);
        assert_eq!(rr.arc_height(), 1.0);
    }

    #[test]
    fn contains_cuts_the_corners() {
        let rr = RoundRect::new(0.0, 0.0, 10.0, 10.0, 2.0, 2.0);
        assert!(rr.contains(Point::new(5.0, 5.0)));
        assert!(rr.contains(Point::new(0.0, 5.0)));
        // The sharp corner of the enclosing rect is outside the arc.
        assert!(!rr.contains(Point::new(0.1, 0.1)));
        assert!(rr.contains(Point::new(2.0, 2.0)));
        assert!(!rr.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn closest_point_on_edges_and_corners() {
        let rr = RoundRect::new(0.0, 0.0, 10.0, 10.0, 2.0, 2.0);
        // Straight edge: plain clamping.
        assert_eq!(rr.closest_point(Point::new(5.0, -3.0)), Point::new(5.0, 0.0));
        // Interior: the point itself.
        let q = Point::new(4.0, 6.0);
        assert_eq!(rr.closest_point(q), q);
        // Corner: the witness lies on the arc.
        let c = rr.closest_point(Point::new(-2.0, -2.0));
        let nx = (c.x - 2.0) / 2.0;
        let ny = (c.y - 2.0) / 2.0;
        assert!((nx * nx + ny * ny - 1.0).abs() < 1e-9, "{c:?} off the arc");
        assert!(c.x < 2.0 && c.y < 2.0);
    }

    #[test]
    fn farthest_point_is_on_the_opposite_arc() {
        let rr = RoundRect::new(0.0, 0.0, 10.0, 10.0, 2.0, 2.0);
        let f = rr.farthest_point(Point::new(-5.0, -5.0));
        let nx = (f.x - 8.0) / 2.0;
        let ny = (f.y - 8.0) / 2.0;
        assert!((nx * nx + ny * ny - 1.0).abs() < 1e-9, "{f:?} off the arc");
        assert!(f.x > 8.0 && f.y > 8.0);
    }

    #[test]
    fn segment_intersection() {
        let rr = RoundRect::new(0.0, 0.0, 10.0, 10.0, 2.0, 2.0);
        assert!(rr.intersects_segment(Line::new((-5.0, 5.0), (15.0, 5.0))));
        assert!(rr.intersects_segment(Line::new((3.0, 3.0), (4.0, 4.0))));
        // Clips the enclosing rect but misses the corner arc.
        assert!(!rr.intersects_segment(Line::new((-1.0, 1.0), (1.0, -1.0))));
        assert!(!rr.intersects_segment(Line::new((-5.0, 12.0), (15.0, 12.0))));
    }

    #[test]
    fn rect_and_circle_intersection() {
        let rr = RoundRect::new(0.0, 0.0, 10.0, 10.0, 2.0, 2.0);
        assert!(rr.intersects_rect(Rect::new(8.0, 4.0, 12.0, 6.0)));
        // Overlaps the bounding box only at a cut corner.
        assert!(!rr.intersects_rect(Rect::new(-0.2, -0.2, 0.2, 0.2)));
        assert!(rr.intersects_circle(Circle::new((12.0, 5.0), 3.0)));
        assert!(!rr.intersects_circle(Circle::new((12.0, 5.0), 1.5)));
        assert!(rr.contains_rect(Rect::new(2.0, 2.0, 8.0, 8.0)));
        assert!(!rr.contains_rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }
}
