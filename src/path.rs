// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! General paths built from move, line, quadratic and cubic elements.

use alloc::vec::Vec;
use core::iter;
use core::ops::Mul;
use core::slice;

use crate::common::SPLINE_APPROXIMATION_RATIO;
use crate::crossings::{crossings_for_point, CrossingMode, SHAPE_INTERSECTS};
use crate::flatten::Flattened;
use crate::line::{dist_sq_segment_point, project_on_line};
use crate::{Affine, Point, Rect, Shape};

/// The element of a path.
///
/// A valid path starts with a `MoveTo`; every other element extends the
/// current subpath from the current point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a
    /// new subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a quadratic bezier using the current location and the two
    /// points.
    QuadTo(Point, Point),
    /// Draw a cubic bezier using the current location and the three
    /// points.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

impl PathEl {
    /// The endpoint of the element, if it has one.
    ///
    /// `ClosePath` returns `None`; its endpoint is the subpath's start.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathEl::MoveTo(p) => Some(p),
            PathEl::LineTo(p) => Some(p),
            PathEl::QuadTo(_, p) => Some(p),
            PathEl::CurveTo(_, _, p) => Some(p),
            PathEl::ClosePath => None,
        }
    }

    /// Is this element finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            PathEl::MoveTo(p) => p.is_finite(),
            PathEl::LineTo(p) => p.is_finite(),
            PathEl::QuadTo(p, p2) => p.is_finite() && p2.is_finite(),
            PathEl::CurveTo(p, p2, p3) => p.is_finite() && p2.is_finite() && p3.is_finite(),
            PathEl::ClosePath => true,
        }
    }
}

impl Mul<PathEl> for Affine {
    type Output = PathEl;

    fn mul(self, other: PathEl) -> PathEl {
        match other {
            PathEl::MoveTo(p) => PathEl::MoveTo(self * p),
            PathEl::LineTo(p) => PathEl::LineTo(self * p),
            PathEl::QuadTo(p1, p2) => PathEl::QuadTo(self * p1, self * p2),
            PathEl::CurveTo(p1, p2, p3) => PathEl::CurveTo(self * p1, self * p2, self * p3),
            PathEl::ClosePath => PathEl::ClosePath,
        }
    }
}

/// The fill rule deciding which regions a closed path encloses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindingRule {
    /// A point is inside when the signed crossing count is nonzero.
    #[default]
    NonZero,
    /// A point is inside when the crossing count is odd.
    EvenOdd,
}

/// A path, possibly containing multiple subpaths.
///
/// Elements are stored in drawing order; curved elements are kept exact
/// and flattened lazily only where a query needs a polyline.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    els: Vec<PathEl>,
    winding_rule: WindingRule,
}

impl Path {
    /// Create a new path with the [`NonZero`](WindingRule::NonZero)
    /// winding rule.
    #[inline]
    pub fn new() -> Path {
        Path::default()
    }

    /// Create a new path with the given winding rule.
    #[inline]
    pub fn with_winding_rule(winding_rule: WindingRule) -> Path {
        Path {
            els: Vec::new(),
            winding_rule,
        }
    }

    /// Create a path from a vector of path elements.
    #[inline]
    pub fn from_vec(els: Vec<PathEl>) -> Path {
        Path {
            els,
            winding_rule: WindingRule::default(),
        }
    }

    /// The winding rule of this path.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// Set the winding rule of this path.
    #[inline]
    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        self.winding_rule = winding_rule;
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.els.push(el);
        debug_assert!(
            matches!(self.els.first(), Some(PathEl::MoveTo(..))),
            "path must begin with MoveTo"
        );
    }

    /// Push a "move to" element onto the path.
    #[inline]
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    ///
    /// Will panic with a debug assert when the path is empty and there is
    /// no current point.
    #[inline]
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "quad to" element onto the path.
    ///
    /// Will panic with a debug assert when the path is empty and there is
    /// no current point.
    #[inline]
    pub fn quad_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) {
        self.push(PathEl::QuadTo(p1.into(), p2.into()));
    }

    /// Push a "curve to" element onto the path.
    ///
    /// Will panic with a debug assert when the path is empty and there is
    /// no current point.
    #[inline]
    pub fn curve_to(
        &mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Push a "close path" element onto the path.
    ///
    /// Will panic with a debug assert when the path is empty and there is
    /// no current point.
    #[inline]
    pub fn close(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// The elements of the path, in order.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    /// Returns `true` if the path contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// Does the path contain any curved element?
    pub fn is_curved(&self) -> bool {
        self.els
            .iter()
            .any(|el| matches!(el, PathEl::QuadTo(..) | PathEl::CurveTo(..)))
    }

    /// A copy of this path with every curved element replaced by a
    /// polyline flat within `flatness`.
    pub fn flattened(&self, flatness: f64) -> Path {
        let mut path: Path = Flattened::new(self.els.iter().copied(), flatness).collect();
        path.winding_rule = self.winding_rule;
        path
    }

    /// Apply an affine transform to the path in place.
    pub fn apply_affine(&mut self, affine: Affine) {
        for el in &mut self.els {
            *el = affine * *el;
        }
    }
}

impl FromIterator<PathEl> for Path {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Path {
        Path {
            els: iter.into_iter().collect(),
            winding_rule: WindingRule::default(),
        }
    }
}

impl Extend<PathEl> for Path {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.els.extend(iter);
    }
}

impl Mul<Path> for Affine {
    type Output = Path;

    fn mul(self, other: Path) -> Path {
        Path {
            els: other.els.iter().map(|el| self * *el).collect(),
            winding_rule: other.winding_rule,
        }
    }
}

impl Shape for Path {
    type PathElementsIter<'iter> = iter::Copied<slice::Iter<'iter, PathEl>>;

    #[inline]
    fn path_elements(&self) -> Self::PathElementsIter<'_> {
        self.els.iter().copied()
    }

    fn to_path(&self) -> Path {
        self.clone()
    }

    /// The bounding box of the control polygon, which encloses the path
    /// but is not tight around curved elements.
    fn bounding_box(&self) -> Rect {
        let mut bbox: Option<Rect> = None;
        for el in &self.els {
            let pts = match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => [Some(p), None, None],
                PathEl::QuadTo(p1, p2) => [Some(p1), Some(p2), None],
                PathEl::CurveTo(p1, p2, p3) => [Some(p1), Some(p2), Some(p3)],
                PathEl::ClosePath => [None, None, None],
            };
            for p in pts.into_iter().flatten() {
                bbox = Some(match bbox {
                    None => Rect::from_points(p, p),
                    Some(b) => b.union_pt(p),
                });
            }
        }
        bbox.unwrap_or(Rect::ZERO)
    }

    /// The signed crossing count of the ray extending right from `pt`.
    ///
    /// A point on the boundary yields the crossing sentinel
    /// [`SHAPE_INTERSECTS`]; an open path yields zero.
    fn winding(&self, pt: Point) -> i32 {
        crossings_for_point(
            self.path_elements(),
            CrossingMode::SimpleIntersectionWhenNotPolygon,
            pt,
        )
        .unwrap_or(0)
    }

    fn contains(&self, pt: Point) -> bool {
        let mask = if self.winding_rule == WindingRule::NonZero {
            -1
        } else {
            1
        };
        (self.winding(pt) & mask) != 0
    }

    /// The closest point is searched on the flattened path; for a point
    /// inside a closed subpath it is the query point itself.
    fn closest_point(&self, pt: Point) -> Point {
        let mask = if self.winding_rule == WindingRule::NonZero {
            -1
        } else {
            1
        };
        let mut best_dist = f64::INFINITY;
        let mut best = pt;
        let mut crossings = 0_i32;

        let mut iter = Flattened::new(self.path_elements(), SPLINE_APPROXIMATION_RATIO);
        let (mut movx, mut movy) = match iter.next() {
            Some(PathEl::MoveTo(p)) => (p.x, p.y),
            _ => return best,
        };
        let mut curx = movx;
        let mut cury = movy;

        let mut consider = |best_dist: &mut f64, best: &mut Point, cand: Point| {
            let d = pt.distance_squared(cand);
            if d < *best_dist {
                *best_dist = d;
                *best = cand;
            }
        };

        consider(&mut best_dist, &mut best, Point::new(movx, movy));

        for el in iter {
            match el {
                PathEl::MoveTo(p) => {
                    movx = p.x;
                    movy = p.y;
                    curx = movx;
                    cury = movy;
                    consider(&mut best_dist, &mut best, p);
                }
                PathEl::LineTo(p) => {
                    consider(
                        &mut best_dist,
                        &mut best,
                        clamped_projection(pt, curx, cury, p.x, p.y),
                    );
                    crossings += crate::crossings::point_edge(
                        pt.x, pt.y, curx, cury, p.x, p.y,
                    );
                    curx = p.x;
                    cury = p.y;
                }
                PathEl::ClosePath => {
                    crossings += crate::crossings::point_edge(
                        pt.x, pt.y, curx, cury, movx, movy,
                    );
                    if (crossings & mask) != 0 {
                        // Inside this closed subpath.
                        return pt;
                    }
                    if curx != movx || cury != movy {
                        consider(
                            &mut best_dist,
                            &mut best,
                            clamped_projection(pt, curx, cury, movx, movy),
                        );
                    }
                    crossings = 0;
                    curx = movx;
                    cury = movy;
                }
                // Flattened away.
                PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
            }
        }
        best
    }

    /// The farthest point is searched among the vertices of the
    /// flattened path.
    fn farthest_point(&self, pt: Point) -> Point {
        let mut best_dist = f64::NEG_INFINITY;
        let mut best = pt;
        for el in Flattened::new(self.path_elements(), SPLINE_APPROXIMATION_RATIO) {
            if let Some(p) = el.end_point() {
                let d = pt.distance_squared(p);
                if d > best_dist {
                    best_dist = d;
                    best = p;
                }
            }
        }
        best
    }

}

fn clamped_projection(pt: Point, x0: f64, y0: f64, x1: f64, y1: f64) -> Point {
    let mut factor = project_on_line(pt.x, pt.y, x0, y0, x1, y1);
    if factor.is_nan() {
        return Point::new(x0, y0);
    }
    factor = factor.clamp(0.0, 1.0);
    Point::new(x0 + (x1 - x0) * factor, y0 + (y1 - y0) * factor)
}

/// Is the rectangle entirely inside the closed area bounded by the path?
///
/// The path is auto-closed for this test.
pub fn path_contains_rect(path: &Path, rect: Rect) -> bool {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return false;
    }
    let mask = if path.winding_rule() == WindingRule::NonZero {
        -1
    } else {
        2
    };
    let crossings = crate::crossings::crossings_for_rect(
        path.path_elements(),
        CrossingMode::AutoClose,
        rect,
    )
    .unwrap_or(SHAPE_INTERSECTS);
    crossings != SHAPE_INTERSECTS && (crossings & mask) != 0
}

/// Does the path's bounded area intersect the rectangle?
pub fn path_intersects_rect(path: &Path, rect: Rect) -> bool {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return false;
    }
    let mask = if path.winding_rule() == WindingRule::NonZero {
        -1
    } else {
        2
    };
    let crossings = crate::crossings::crossings_for_rect(
        path.path_elements(),
        CrossingMode::SimpleIntersectionWhenNotPolygon,
        rect,
    )
    .unwrap_or(0);
    crossings == SHAPE_INTERSECTS || (crossings & mask) != 0
}

/// Squared distance from a point to the polyline approximation of the
/// path boundary, ignoring winding.
pub fn boundary_distance_squared(path: &Path, pt: Point) -> f64 {
    let mut best = f64::INFINITY;
    let mut iter = Flattened::new(path.path_elements(), SPLINE_APPROXIMATION_RATIO);
    let (mut movx, mut movy) = match iter.next() {
        Some(PathEl::MoveTo(p)) => (p.x, p.y),
        _ => return best,
    };
    let mut curx = movx;
    let mut cury = movy;
    for el in iter {
        match el {
            PathEl::MoveTo(p) => {
                movx = p.x;
                movy = p.y;
                curx = movx;
                cury = movy;
            }
            PathEl::LineTo(p) => {
                best = best.min(dist_sq_segment_point(curx, cury, p.x, p.y, pt.x, pt.y));
                curx = p.x;
                cury = p.y;
            }
            PathEl::ClosePath => {
                best = best.min(dist_sq_segment_point(curx, cury, movx, movy, pt.x, pt.y));
                curx = movx;
                cury = movy;
            }
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_square() -> Path {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((4.0, 0.0));
        p.line_to((4.0, 4.0));
        p.line_to((0.0, 4.0));
        p.close();
        p
    }

    #[test]
    fn contains_inside_a_closed_square() {
        let p = closed_square();
        assert!(p.contains(Point::new(2.0, 2.0)));
        assert!(!p.contains(Point::new(5.0, 2.0)));
        assert!(!p.contains(Point::new(-1.0, 2.0)));
    }

    #[test]
    fn open_path_contains_nothing_interior() {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((4.0, 0.0));
        p.line_to((4.0, 4.0));
        p.line_to((0.0, 4.0));
        assert!(!p.contains(Point::new(2.0, 2.0)));
    }

    #[test]
    fn even_odd_vs_non_zero() {
        // Two nested, same-direction squares.
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((6.0, 0.0));
        p.line_to((6.0, 6.0));
        p.line_to((0.0, 6.0));
        p.close();
        p.move_to((1.0, 1.0));
        p.line_to((5.0, 1.0));
        p.line_to((5.0, 5.0));
        p.line_to((1.0, 5.0));
        p.close();
        let inner = Point::new(3.0, 3.0);
        assert!(p.contains(inner));
        p.set_winding_rule(WindingRule::EvenOdd);
        assert!(!p.contains(inner));
    }

    #[test]
    fn closest_point_on_the_boundary() {
        let p = closed_square();
        let c = p.closest_point(Point::new(5.0, 2.0));
        assert!(c.distance(Point::new(4.0, 2.0)) < 1e-9, "{c:?}");
        // Interior point is its own witness.
        let inside = Point::new(1.0, 1.0);
        assert_eq!(p.closest_point(inside), inside);
    }

    #[test]
    fn farthest_point_is_a_vertex() {
        let p = closed_square();
        let f = p.farthest_point(Point::new(0.5, 0.5));
        assert!(f.distance(Point::new(4.0, 4.0)) < 1e-9, "{f:?}");
    }

    #[test]
    fn flattened_path_has_no_curves() {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.quad_to((1.0, 2.0), (2.0, 0.0));
        p.curve_to((3.0, 2.0), (4.0, -2.0), (5.0, 0.0));
        assert!(p.is_curved());
        let flat = p.flattened(0.1);
        assert!(!flat.is_curved());
        assert_eq!(flat.winding_rule(), p.winding_rule());
    }

    #[test]
    fn transformed_path_moves_every_element() {
        let p = closed_square();
        let moved = Affine::translate((10.0, 0.0)) * p.clone();
        assert!(moved.contains(Point::new(12.0, 2.0)));
        assert!(!moved.contains(Point::new(2.0, 2.0)));
    }

    #[test]
    fn rect_queries() {
        let p = closed_square();
        assert!(path_contains_rect(&p, Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(!path_contains_rect(&p, Rect::new(3.0, 3.0, 5.0, 5.0)));
        assert!(path_intersects_rect(&p, Rect::new(3.0, 3.0, 5.0, 5.0)));
        assert!(!path_intersects_rect(&p, Rect::new(5.0, 5.0, 7.0, 7.0)));
    }

    #[test]
    fn polygon_containment_agrees_with_the_rect_it_traces() {
        use rand::Rng;
        let rect = Rect::new(-2.0, -1.0, 3.0, 4.0);
        let p: Path = rect.path_elements().collect();
        let mut rng = rand::rng();
        for _ in 0..200 {
            let pt = Point::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
            assert_eq!(p.contains(pt), rect.contains(pt), "{pt:?}");
        }
    }

    #[test]
    fn bounding_box_covers_control_points() {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.quad_to((1.0, 3.0), (2.0, 0.0));
        assert_eq!(p.bounding_box(), Rect::new(0.0, 0.0, 2.0, 3.0));
    }
}
