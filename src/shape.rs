// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for shapes.

use crate::{Affine, Path, PathEl, Point, Rect};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A generic trait for open and closed shapes.
///
/// This trait provides conversion from shapes to path elements, and a
/// small set of geometric queries shared by every shape: containment,
/// closest/farthest boundary point, and point distances derived from
/// them.
///
/// The iterators returned by [`path_elements`](Shape::path_elements) are
/// single traversals; obtaining a fresh iterator restarts from the
/// beginning, and two fresh iterators over the same shape yield identical
/// element sequences.
pub trait Shape: Sized {
    /// The iterator returned by the [`path_elements`] method.
    ///
    /// [`path_elements`]: Shape::path_elements
    type PathElementsIter<'iter>: Iterator<Item = PathEl>
    where
        Self: 'iter;

    /// Returns an iterator over this shape expressed as path elements.
    ///
    /// The first element of any subpath is always `MoveTo`; the pattern
    /// emitted for a given shape kind is fixed (for example, a circle is
    /// exactly one `MoveTo`, four `CurveTo` quadrant arcs and a
    /// `ClosePath`).
    fn path_elements(&self) -> Self::PathElementsIter<'_>;

    /// Returns an iterator over this shape's path elements with the given
    /// transform applied lazily to each emitted coordinate.
    fn transformed_path_elements(
        &self,
        affine: Affine,
    ) -> Transformed<Self::PathElementsIter<'_>> {
        Transformed {
            inner: self.path_elements(),
            affine,
        }
    }

    /// Convert into a [`Path`] with the [`NonZero`] winding rule.
    ///
    /// [`NonZero`]: crate::WindingRule::NonZero
    fn to_path(&self) -> Path {
        self.path_elements().collect()
    }

    /// The smallest rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect;

    /// Winding number of point.
    ///
    /// This method only produces meaningful results with closed shapes.
    fn winding(&self, pt: Point) -> i32;

    /// Is the point inside the (solid) shape?
    ///
    /// A point on the boundary counts as inside.
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        self.winding(pt) != 0
    }

    /// The point of the shape closest to `pt`.
    ///
    /// For solid shapes, an interior point is its own closest point.
    fn closest_point(&self, pt: Point) -> Point;

    /// The boundary point of the shape farthest from `pt`.
    fn farthest_point(&self, pt: Point) -> Point;

    /// Squared Euclidean distance from `pt` to the shape.
    ///
    /// Zero iff [`contains`](Shape::contains) holds.
    #[inline]
    fn distance_squared(&self, pt: Point) -> f64 {
        self.closest_point(pt).distance_squared(pt)
    }

    /// Euclidean distance from `pt` to the shape.
    #[inline]
    fn distance(&self, pt: Point) -> f64 {
        self.distance_squared(pt).sqrt()
    }

    /// Manhattan (L1) distance from `pt` to the shape.
    ///
    /// This reuses the Euclidean closest-point witness, which is not
    /// guaranteed minimal in the L1 metric for shapes whose boundary is
    /// not axis aligned.
    #[inline]
    fn distance_l1(&self, pt: Point) -> f64 {
        let c = self.closest_point(pt);
        (pt.x - c.x).abs() + (pt.y - c.y).abs()
    }

    /// Chebyshev (L∞) distance from `pt` to the shape.
    ///
    /// Shares the witness caveat of [`distance_l1`](Shape::distance_l1).
    #[inline]
    fn distance_linf(&self, pt: Point) -> f64 {
        let c = self.closest_point(pt);
        (pt.x - c.x).abs().max((pt.y - c.y).abs())
    }
}

/// A path-element iterator applying an affine transform to each emitted
/// coordinate.
///
/// Holds only the wrapped iterator and the transform; coordinates are
/// recomputed per element rather than buffered.
#[derive(Clone, Debug)]
pub struct Transformed<I> {
    inner: I,
    affine: Affine,
}

impl<I: Iterator<Item = PathEl>> Iterator for Transformed<I> {
    type Item = PathEl;

    #[inline]
    fn next(&mut self) -> Option<PathEl> {
        let affine = self.affine;
        self.inner.next().map(|el| affine * el)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Affine, Circle, PathEl, Point, Rect, Shape};

    #[test]
    fn identity_transform_is_a_no_op() {
        let rect = Rect::new(1.0, 2.0, 4.0, 6.0);
        let plain: Vec<PathEl> = rect.path_elements().collect();
        let transformed: Vec<PathEl> =
            rect.transformed_path_elements(Affine::IDENTITY).collect();
        assert_eq!(plain, transformed);
    }

    #[test]
    fn fresh_iterators_agree() {
        let c = Circle::new((2.0, -1.0), 3.5);
        let a: Vec<PathEl> = c.path_elements().collect();
        let b: Vec<PathEl> = c.path_elements().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn every_iterator_starts_with_move_to() {
        let c = Circle::new((2.0, -1.0), 3.5);
        let mut iter = c.path_elements();
        assert!(matches!(iter.next(), Some(PathEl::MoveTo(_))));
        assert!(!iter.any(|el| matches!(el, PathEl::MoveTo(_))));
    }

    #[test]
    fn translated_circle_moves_with_the_transform() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let mut iter = c.transformed_path_elements(Affine::translate((10.0, 0.0)));
        match iter.next() {
            Some(PathEl::MoveTo(p)) => {
                assert!(p.distance(Point::new(11.0, 0.0)) < 1e-12, "{p:?}");
            }
            other => panic!("expected MoveTo, got {other:?}"),
        }
    }
}
