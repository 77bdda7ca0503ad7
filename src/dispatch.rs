// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection dispatch over a closed set of shape kinds.
//!
//! [`AnyShape`] is a tagged union of every shape in the crate. Pairwise
//! intersection goes through [`AnyShape::closed_form_intersects`], which
//! answers from a specialized predicate when one exists and fails loudly
//! with [`Unsupported`] when it does not;
//! [`AnyShape::intersects`] adds a fallback through the crossing engine
//! so every pair gets an answer.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::crossings::{
    crossings_for_circle, crossings_for_ellipse, crossings_for_path, crossings_for_rect,
    crossings_for_round_rect, crossings_for_segment, crossings_for_triangle, CrossingMode,
    PathShadow, SHAPE_INTERSECTS,
};
use crate::{
    Circle, Ellipse, Line, OrientedRect, Path, PathEl, Point, Rect, RoundRect, Shape, Triangle,
    WindingRule,
};

/// Any shape of the crate, as one tagged value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyShape {
    /// A circle.
    Circle(Circle),
    /// An axis-aligned ellipse.
    Ellipse(Ellipse),
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A rectangle with rounded corners.
    RoundRect(RoundRect),
    /// A segment.
    Segment(Line),
    /// An oriented rectangle.
    OrientedRect(OrientedRect),
    /// A triangle.
    Triangle(Triangle),
    /// A path.
    Path(Path),
    /// A collection of shapes.
    Multi(MultiShape),
}

/// The kind of a shape, used in [`Unsupported`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// A circle.
    Circle,
    /// An axis-aligned ellipse.
    Ellipse,
    /// An axis-aligned rectangle.
    Rect,
    /// A rectangle with rounded corners.
    RoundRect,
    /// A segment.
    Segment,
    /// An oriented rectangle.
    OrientedRect,
    /// A triangle.
    Triangle,
    /// A path.
    Path,
    /// A collection of shapes.
    Multi,
}

impl ShapeKind {
    fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Rect => "rectangle",
            ShapeKind::RoundRect => "round rectangle",
            ShapeKind::Segment => "segment",
            ShapeKind::OrientedRect => "oriented rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Path => "path",
            ShapeKind::Multi => "multishape",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AnyShape {
    /// The kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Circle(_) => ShapeKind::Circle,
            AnyShape::Ellipse(_) => ShapeKind::Ellipse,
            AnyShape::Rect(_) => ShapeKind::Rect,
            AnyShape::RoundRect(_) => ShapeKind::RoundRect,
            AnyShape::Segment(_) => ShapeKind::Segment,
            AnyShape::OrientedRect(_) => ShapeKind::OrientedRect,
            AnyShape::Triangle(_) => ShapeKind::Triangle,
            AnyShape::Path(_) => ShapeKind::Path,
            AnyShape::Multi(_) => ShapeKind::Multi,
        }
    }
}

impl From<Circle> for AnyShape {
    fn from(s: Circle) -> AnyShape {
        AnyShape::Circle(s)
    }
}

impl From<Ellipse> for AnyShape {
    fn from(s: Ellipse) -> AnyShape {
        AnyShape::Ellipse(s)
    }
}

impl From<Rect> for AnyShape {
    fn from(s: Rect) -> AnyShape {
        AnyShape::Rect(s)
    }
}

impl From<RoundRect> for AnyShape {
    fn from(s: RoundRect) -> AnyShape {
        AnyShape::RoundRect(s)
    }
}

impl From<Line> for AnyShape {
    fn from(s: Line) -> AnyShape {
        AnyShape::Segment(s)
    }
}

impl From<OrientedRect> for AnyShape {
    fn from(s: OrientedRect) -> AnyShape {
        AnyShape::OrientedRect(s)
    }
}

impl From<Triangle> for AnyShape {
    fn from(s: Triangle) -> AnyShape {
        AnyShape::Triangle(s)
    }
}

impl From<Path> for AnyShape {
    fn from(s: Path) -> AnyShape {
        AnyShape::Path(s)
    }
}

impl From<MultiShape> for AnyShape {
    fn from(s: MultiShape) -> AnyShape {
        AnyShape::Multi(s)
    }
}

impl Shape for AnyShape {
    type PathElementsIter<'iter> = Box<dyn Iterator<Item = PathEl> + 'iter>;

    fn path_elements(&self) -> Box<dyn Iterator<Item = PathEl> + '_> {
        match self {
            AnyShape::Circle(s) => Box::new(s.path_elements()),
            AnyShape::Ellipse(s) => Box::new(s.path_elements()),
            AnyShape::Rect(s) => Box::new(s.path_elements()),
            AnyShape::RoundRect(s) => Box::new(s.path_elements()),
            AnyShape::Segment(s) => Box::new(s.path_elements()),
            AnyShape::OrientedRect(s) => Box::new(s.path_elements()),
            AnyShape::Triangle(s) => Box::new(s.path_elements()),
            AnyShape::Path(s) => Box::new(s.path_elements()),
            AnyShape::Multi(s) => Box::new(s.path_elements()),
        }
    }

    fn bounding_box(&self) -> Rect {
        match self {
            AnyShape::Circle(s) => s.bounding_box(),
            AnyShape::Ellipse(s) => s.bounding_box(),
            AnyShape::Rect(s) => s.bounding_box(),
            AnyShape::RoundRect(s) => s.bounding_box(),
            AnyShape::Segment(s) => s.bounding_box(),
            AnyShape::OrientedRect(s) => s.bounding_box(),
            AnyShape::Triangle(s) => s.bounding_box(),
            AnyShape::Path(s) => s.bounding_box(),
            AnyShape::Multi(s) => s.bounding_box(),
        }
    }

    fn winding(&self, pt: Point) -> i32 {
        match self {
            AnyShape::Circle(s) => s.winding(pt),
            AnyShape::Ellipse(s) => s.winding(pt),
            AnyShape::Rect(s) => s.winding(pt),
            AnyShape::RoundRect(s) => s.winding(pt),
            AnyShape::Segment(s) => s.winding(pt),
            AnyShape::OrientedRect(s) => s.winding(pt),
            AnyShape::Triangle(s) => s.winding(pt),
            AnyShape::Path(s) => s.winding(pt),
            AnyShape::Multi(s) => s.winding(pt),
        }
    }

    fn contains(&self, pt: Point) -> bool {
        match self {
            AnyShape::Circle(s) => s.contains(pt),
            AnyShape::Ellipse(s) => s.contains(pt),
            AnyShape::Rect(s) => s.contains(pt),
            AnyShape::RoundRect(s) => s.contains(pt),
            AnyShape::Segment(s) => s.contains(pt),
            AnyShape::OrientedRect(s) => s.contains(pt),
            AnyShape::Triangle(s) => s.contains(pt),
            AnyShape::Path(s) => s.contains(pt),
            AnyShape::Multi(s) => s.contains(pt),
        }
    }

    fn closest_point(&self, pt: Point) -> Point {
        match self {
            AnyShape::Circle(s) => s.closest_point(pt),
            AnyShape::Ellipse(s) => s.closest_point(pt),
            AnyShape::Rect(s) => s.closest_point(pt),
            AnyShape::RoundRect(s) => s.closest_point(pt),
            AnyShape::Segment(s) => s.closest_point(pt),
            AnyShape::OrientedRect(s) => s.closest_point(pt),
            AnyShape::Triangle(s) => s.closest_point(pt),
            AnyShape::Path(s) => s.closest_point(pt),
            AnyShape::Multi(s) => s.closest_point(pt),
        }
    }

    fn farthest_point(&self, pt: Point) -> Point {
        match self {
            AnyShape::Circle(s) => s.farthest_point(pt),
            AnyShape::Ellipse(s) => s.farthest_point(pt),
            AnyShape::Rect(s) => s.farthest_point(pt),
            AnyShape::RoundRect(s) => s.farthest_point(pt),
            AnyShape::Segment(s) => s.farthest_point(pt),
            AnyShape::OrientedRect(s) => s.farthest_point(pt),
            AnyShape::Triangle(s) => s.farthest_point(pt),
            AnyShape::Path(s) => s.farthest_point(pt),
            AnyShape::Multi(s) => s.farthest_point(pt),
        }
    }
}

/// A collection of shapes queried as one.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiShape {
    shapes: Vec<AnyShape>,
}

impl MultiShape {
    /// A new, empty collection.
    pub fn new() -> MultiShape {
        MultiShape::default()
    }

    /// A collection over the given shapes.
    pub fn from_shapes(shapes: Vec<AnyShape>) -> MultiShape {
        MultiShape { shapes }
    }

    /// Append a shape.
    pub fn push(&mut self, shape: impl Into<AnyShape>) {
        self.shapes.push(shape.into());
    }

    /// The component shapes.
    pub fn shapes(&self) -> &[AnyShape] {
        &self.shapes
    }

    /// Is the collection empty?
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The number of component shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

impl Shape for MultiShape {
    type PathElementsIter<'iter> = Box<dyn Iterator<Item = PathEl> + 'iter>;

    /// The concatenation of the component element sequences, one subpath
    /// per component.
    fn path_elements(&self) -> Box<dyn Iterator<Item = PathEl> + '_> {
        Box::new(self.shapes.iter().flat_map(Shape::path_elements))
    }

    fn bounding_box(&self) -> Rect {
        let mut shapes = self.shapes.iter();
        match shapes.next() {
            Some(first) => shapes.fold(first.bounding_box(), |r, s| r.union(s.bounding_box())),
            None => Rect::ZERO,
        }
    }

    fn winding(&self, pt: Point) -> i32 {
        self.shapes.iter().map(|s| s.winding(pt)).sum()
    }

    /// A point is inside when it is inside any component.
    fn contains(&self, pt: Point) -> bool {
        self.shapes.iter().any(|s| s.contains(pt))
    }

    /// The nearest of the component witnesses; the origin if the
    /// collection is empty.
    fn closest_point(&self, pt: Point) -> Point {
        let mut best = Point::ORIGIN;
        let mut best_dist = f64::INFINITY;
        for s in &self.shapes {
            let candidate = s.closest_point(pt);
            let d = candidate.distance_squared(pt);
            if d < best_dist {
                best_dist = d;
                best = candidate;
            }
        }
        best
    }

    /// The farthest of the component witnesses; the origin if the
    /// collection is empty.
    fn farthest_point(&self, pt: Point) -> Point {
        let mut best = Point::ORIGIN;
        let mut best_dist = f64::NEG_INFINITY;
        for s in &self.shapes {
            let candidate = s.farthest_point(pt);
            let d = candidate.distance_squared(pt);
            if d > best_dist {
                best_dist = d;
                best = candidate;
            }
        }
        best
    }
}

/// No closed-form intersection predicate exists for a pair of shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unsupported {
    /// The kind of the left shape.
    pub left: ShapeKind,
    /// The kind of the right shape.
    pub right: ShapeKind,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no closed-form intersection test between {} and {}",
            self.left, self.right
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Unsupported {}

/// One orientation of the closed-form pair table.
fn closed_form(a: &AnyShape, b: &AnyShape) -> Option<bool> {
    use AnyShape::*;
    Some(match (a, b) {
        (Circle(x), Circle(y)) => x.intersects_circle(*y),
        (Circle(x), Rect(y)) => x.intersects_rect(*y),
        (Circle(x), Segment(y)) => x.intersects_segment(*y),
        (Circle(x), Ellipse(y)) => y.intersects_circle(*x),
        (Circle(x), RoundRect(y)) => y.intersects_circle(*x),
        (Circle(x), Triangle(y)) => y.intersects_circle(*x),
        (Circle(x), OrientedRect(y)) => y.intersects_circle(*x),
        (Ellipse(x), Ellipse(y)) => x.intersects_ellipse(*y),
        (Ellipse(x), Rect(y)) => x.intersects_rect(*y),
        (Ellipse(x), Segment(y)) => x.intersects_segment(*y),
        (Ellipse(x), Triangle(y)) => y.intersects_ellipse(*x),
        (Ellipse(x), RoundRect(y)) => y.intersects_ellipse(*x),
        (Ellipse(x), OrientedRect(y)) => y.intersects_ellipse(*x),
        (Rect(x), Rect(y)) => x.overlaps(*y),
        (Rect(x), Segment(y)) => x.intersects_segment(*y),
        (Rect(x), RoundRect(y)) => y.intersects_rect(*x),
        (Rect(x), Triangle(y)) => y.intersects_rect(*x),
        (Rect(x), OrientedRect(y)) => y.intersects_rect(*x),
        (Segment(x), Segment(y)) => x.intersects(*y),
        (Segment(x), RoundRect(y)) => y.intersects_segment(*x),
        (Segment(x), Triangle(y)) => y.intersects_segment(*x),
        (Segment(x), OrientedRect(y)) => y.intersects_segment(*x),
        (RoundRect(x), OrientedRect(y)) => y.intersects_round_rect(x),
        (Triangle(x), Triangle(y)) => triangles_intersect(x, y),
        (Triangle(x), OrientedRect(y)) => y.intersects_triangle(x),
        (OrientedRect(x), OrientedRect(y)) => x.intersects_oriented_rect(*y),
        _ => return None,
    })
}

fn triangles_intersect(a: &Triangle, b: &Triangle) -> bool {
    b.edges().iter().any(|e| a.intersects_segment(*e)) || a.contains(b.a) || b.contains(a.a)
}

impl AnyShape {
    /// Intersection through a specialized predicate only.
    ///
    /// # Errors
    ///
    /// Fails with [`Unsupported`] for any pair without one; in
    /// particular every pair involving a path or a multishape.
    pub fn closed_form_intersects(&self, other: &AnyShape) -> Result<bool, Unsupported> {
        closed_form(self, other)
            .or_else(|| closed_form(other, self))
            .ok_or(Unsupported {
                left: self.kind(),
                right: other.kind(),
            })
    }

    /// Does this shape intersect `other`?
    ///
    /// Answers from the closed-form table when possible, decomposes
    /// multishapes into their components, and otherwise falls back to
    /// the crossing engine.
    ///
    /// # Errors
    ///
    /// Fails with [`Unsupported`] for a pair that neither a closed form
    /// nor the engine can answer; the current shape set has none, but a
    /// silent `false` is never returned in its place.
    pub fn intersects(&self, other: &AnyShape) -> Result<bool, Unsupported> {
        if let Ok(hit) = self.closed_form_intersects(other) {
            return Ok(hit);
        }
        if let AnyShape::Multi(m) = self {
            for s in m.shapes() {
                if s.intersects(other)? {
                    return Ok(true);
                }
            }
            return Ok(false);
        }
        if let AnyShape::Multi(m) = other {
            for s in m.shapes() {
                if self.intersects(s)? {
                    return Ok(true);
                }
            }
            return Ok(false);
        }
        if let Some(hit) = engine_query(other, self) {
            return Ok(hit);
        }
        if let Some(hit) = engine_query(self, other) {
            return Ok(hit);
        }
        Err(Unsupported {
            left: self.kind(),
            right: other.kind(),
        })
    }
}

/// Intersection of the walked shape's outline against the query's
/// shadow, through the crossing engine.
///
/// An oriented rectangle is never walked against a shadow: as a query it
/// walks the other shape in its own frame, where it is axis aligned.
/// `None` when no engine route exists for the pair.
fn engine_query(query: &AnyShape, walked: &AnyShape) -> Option<bool> {
    if matches!(walked, AnyShape::OrientedRect(_)) {
        return None;
    }
    let mode = CrossingMode::SimpleIntersectionWhenNotPolygon;
    let mask = match walked {
        AnyShape::Path(p) if p.winding_rule() == WindingRule::EvenOdd => 2,
        _ => -1,
    };
    let els = walked.path_elements();
    let crossings = match query {
        AnyShape::Segment(seg) => crossings_for_segment(els, mode, *seg),
        AnyShape::Rect(rect) => crossings_for_rect(els, mode, *rect),
        AnyShape::RoundRect(rr) => crossings_for_round_rect(els, mode, rr),
        AnyShape::Circle(circle) => crossings_for_circle(els, mode, *circle),
        AnyShape::Ellipse(ellipse) => crossings_for_ellipse(els, mode, *ellipse),
        AnyShape::Triangle(tri) => crossings_for_triangle(els, mode, tri),
        AnyShape::Path(p) => crossings_for_path(els, mode, &PathShadow::new(p)),
        AnyShape::OrientedRect(obb) => {
            let proj = obb.local_transform();
            crossings_for_rect(els.map(move |el| proj * el), mode, obb.local_rect())
        }
        AnyShape::Multi(_) => return None,
    }
    .unwrap_or(0);
    Some(crossings == SHAPE_INTERSECTS || (crossings & mask) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_form_pairs_answer_directly() {
        let circle = AnyShape::from(Circle::new((0.0, 0.0), 2.0));
        let rect = AnyShape::from(Rect::new(1.0, 1.0, 5.0, 5.0));
        assert_eq!(circle.closed_form_intersects(&rect), Ok(true));
        assert_eq!(rect.closed_form_intersects(&circle), Ok(true));
        let far = AnyShape::from(Rect::new(5.0, 5.0, 8.0, 8.0));
        assert_eq!(circle.closed_form_intersects(&far), Ok(false));
    }

    #[test]
    fn path_pairs_are_unsupported_in_closed_form() {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((4.0, 0.0));
        p.line_to((4.0, 4.0));
        p.close();
        let path = AnyShape::from(p);
        let circle = AnyShape::from(Circle::new((3.0, 1.0), 0.5));
        let err = path.closed_form_intersects(&circle).unwrap_err();
        assert_eq!(err.left, ShapeKind::Path);
        assert_eq!(err.right, ShapeKind::Circle);
        assert_eq!(
            err.to_string(),
            "no closed-form intersection test between path and circle"
        );
    }

    #[test]
    fn engine_fallback_answers_path_pairs() {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((4.0, 0.0));
        p.line_to((4.0, 4.0));
        p.line_to((0.0, 4.0));
        p.close();
        let path = AnyShape::from(p);
        // Fully inside the square.
        assert_eq!(
            path.intersects(&AnyShape::from(Circle::new((2.0, 2.0), 1.0))),
            Ok(true)
        );
        // Crossing the boundary.
        assert_eq!(
            path.intersects(&AnyShape::from(Circle::new((4.0, 2.0), 1.0))),
            Ok(true)
        );
        // Far away.
        assert_eq!(
            path.intersects(&AnyShape::from(Circle::new((9.0, 9.0), 1.0))),
            Ok(false)
        );
    }

    #[test]
    fn round_rect_pair_goes_through_the_engine() {
        let a = AnyShape::from(RoundRect::new(0.0, 0.0, 4.0, 4.0, 1.0, 1.0));
        let b = AnyShape::from(RoundRect::new(3.0, 3.0, 7.0, 7.0, 1.0, 1.0));
        assert!(a.closed_form_intersects(&b).is_err());
        assert_eq!(a.intersects(&b), Ok(true));
        let far = AnyShape::from(RoundRect::new(10.0, 10.0, 14.0, 14.0, 1.0, 1.0));
        assert_eq!(a.intersects(&far), Ok(false));
    }

    #[test]
    fn multishape_decomposes_into_components() {
        let mut multi = MultiShape::new();
        multi.push(Circle::new((0.0, 0.0), 1.0));
        multi.push(Rect::new(10.0, 10.0, 12.0, 12.0));
        let multi = AnyShape::from(multi);
        assert_eq!(
            multi.intersects(&AnyShape::from(Circle::new((11.0, 11.0), 0.5))),
            Ok(true)
        );
        assert_eq!(
            multi.intersects(&AnyShape::from(Circle::new((0.5, 0.0), 0.2))),
            Ok(true)
        );
        assert_eq!(
            multi.intersects(&AnyShape::from(Circle::new((5.0, 5.0), 0.5))),
            Ok(false)
        );
        assert!(multi.closed_form_intersects(&multi).is_err());
    }

    #[test]
    fn multishape_queries() {
        let mut multi = MultiShape::new();
        multi.push(Circle::new((0.0, 0.0), 1.0));
        multi.push(Rect::new(10.0, 0.0, 12.0, 2.0));
        assert!(multi.contains(Point::new(0.5, 0.0)));
        assert!(multi.contains(Point::new(11.0, 1.0)));
        assert!(!multi.contains(Point::new(5.0, 0.0)));
        assert_eq!(multi.bounding_box(), Rect::new(-1.0, -1.0, 12.0, 2.0));
        let c = multi.closest_point(Point::new(8.0, 1.0));
        assert_eq!(c, Point::new(10.0, 1.0));
        // Two subpaths, one per component.
        let moves = multi
            .path_elements()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
    }

    #[test]
    fn triangle_pair_closed_form() {
        let a = AnyShape::from(Triangle::new((0.0, 0.0), (4.0, 0.0), (0.0, 4.0)));
        let b = AnyShape::from(Triangle::new((1.0, 1.0), (2.0, 1.0), (1.0, 2.0)));
        // One triangle entirely inside the other.
        assert_eq!(a.closed_form_intersects(&b), Ok(true));
        let far = AnyShape::from(Triangle::new((9.0, 9.0), (10.0, 9.0), (9.0, 10.0)));
        assert_eq!(a.closed_form_intersects(&far), Ok(false));
    }

    #[test]
    fn oriented_rect_closed_forms() {
        let obb = AnyShape::from(OrientedRect::new(
            (2.0, 2.0),
            crate::Vec2::new(1.0, 0.0),
            crate::Vec2::new(1.0, 1.0),
        ));
        let tri = AnyShape::from(Triangle::new((0.0, 0.0), (8.0, 0.0), (0.0, 8.0)));
        assert_eq!(obb.closed_form_intersects(&tri), Ok(true));
        let far_tri = AnyShape::from(Triangle::new((20.0, 20.0), (21.0, 20.0), (20.0, 21.0)));
        assert_eq!(obb.intersects(&far_tri), Ok(false));
        let rr = AnyShape::from(RoundRect::new(1.0, 1.0, 6.0, 6.0, 1.0, 1.0));
        assert_eq!(obb.closed_form_intersects(&rr), Ok(true));
        let ellipse = AnyShape::from(Ellipse::new((2.0, 6.0), (1.0, 4.0)));
        assert_eq!(obb.closed_form_intersects(&ellipse), Ok(true));
        let far_ellipse = AnyShape::from(Ellipse::new((20.0, 2.0), (1.0, 1.0)));
        assert_eq!(obb.closed_form_intersects(&far_ellipse), Ok(false));
    }

    #[test]
    fn oriented_rect_against_path_uses_the_engine() {
        let obb = AnyShape::from(OrientedRect::new(
            (2.0, 2.0),
            crate::Vec2::new(1.0, 0.0),
            crate::Vec2::new(1.0, 1.0),
        ));
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((8.0, 0.0));
        p.line_to((0.0, 8.0));
        p.close();
        let path = AnyShape::from(p);
        assert!(obb.closed_form_intersects(&path).is_err());
        // The box sits entirely inside the triangle.
        assert_eq!(obb.intersects(&path), Ok(true));
        assert_eq!(path.intersects(&obb), Ok(true));
        let far = AnyShape::from(OrientedRect::new(
            (20.0, 20.0),
            crate::Vec2::new(1.0, 1.0),
            crate::Vec2::new(1.0, 1.0),
        ));
        assert_eq!(far.intersects(&path), Ok(false));
        assert_eq!(path.intersects(&far), Ok(false));
    }
}
