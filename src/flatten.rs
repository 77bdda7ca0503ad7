// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy flattening of curved path elements into polylines.

use smallvec::SmallVec;

use crate::common::DEFAULT_FLATTENING_LIMIT;
use crate::line::dist_sq_segment_point;
use crate::{PathEl, Point};

/// One curved segment awaiting subdivision, with its own start point.
#[derive(Clone, Copy)]
enum Seg {
    Quad(Point, Point, Point),
    Cubic(Point, Point, Point, Point),
}

impl Seg {
    fn end(&self) -> Point {
        match *self {
            Seg::Quad(_, _, p) => p,
            Seg::Cubic(_, _, _, p) => p,
        }
    }

    /// Squared flatness: the largest squared distance from a control
    /// point to the chord.
    fn flatness_sq(&self) -> f64 {
        match *self {
            Seg::Quad(p0, p1, p2) => {
                dist_sq_segment_point(p0.x, p0.y, p2.x, p2.y, p1.x, p1.y)
            }
            Seg::Cubic(p0, p1, p2, p3) => {
                let d1 = dist_sq_segment_point(p0.x, p0.y, p3.x, p3.y, p1.x, p1.y);
                let d2 = dist_sq_segment_point(p0.x, p0.y, p3.x, p3.y, p2.x, p2.y);
                d1.max(d2)
            }
        }
    }

    /// Subdivide at the parametric midpoint.
    fn subdivide(&self) -> (Seg, Seg) {
        match *self {
            Seg::Quad(p0, p1, p2) => {
                let q0 = p0.midpoint(p1);
                let q1 = p1.midpoint(p2);
                let mid = q0.midpoint(q1);
                (Seg::Quad(p0, q0, mid), Seg::Quad(mid, q1, p2))
            }
            Seg::Cubic(p0, p1, p2, p3) => {
                let q0 = p0.midpoint(p1);
                let q1 = p1.midpoint(p2);
                let q2 = p2.midpoint(p3);
                let r0 = q0.midpoint(q1);
                let r1 = q1.midpoint(q2);
                let mid = r0.midpoint(r1);
                (
                    Seg::Cubic(p0, q0, r0, mid),
                    Seg::Cubic(mid, r1, q2, p3),
                )
            }
        }
    }
}

/// A path-element iterator that replaces every `QuadTo` and `CurveTo` of
/// the wrapped iterator with a run of `LineTo` elements.
///
/// Curves are subdivided recursively at the parametric midpoint until
/// flat within the requested tolerance, with a hard bound on the
/// recursion depth. The subdivision is driven lazily from `next`; no
/// polyline is buffered up front.
pub struct Flattened<I> {
    src: I,
    flatness_sq: f64,
    limit: usize,
    // Top of the stack is the next segment to examine; a subdivision
    // pushes the right half below the left.
    stack: SmallVec<[(Seg, usize); 16]>,
    last: Point,
    start: Point,
}

impl<I: Iterator<Item = PathEl>> Flattened<I> {
    /// Flatten with the default subdivision depth bound.
    pub fn new(src: I, flatness: f64) -> Flattened<I> {
        Flattened::with_limit(src, flatness, DEFAULT_FLATTENING_LIMIT)
    }

    /// Flatten, bounding the recursive subdivision depth by `limit`.
    ///
    /// A segment still curved at the depth bound is emitted as a single
    /// chord, so termination never depends on the tolerance.
    pub fn with_limit(src: I, flatness: f64, limit: usize) -> Flattened<I> {
        Flattened {
            src,
            flatness_sq: flatness * flatness,
            limit,
            stack: SmallVec::new(),
            last: Point::ORIGIN,
            start: Point::ORIGIN,
        }
    }
}

impl<I: Iterator<Item = PathEl>> Iterator for Flattened<I> {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        loop {
            if let Some((seg, level)) = self.stack.pop() {
                if level >= self.limit || seg.flatness_sq() <= self.flatness_sq {
                    self.last = seg.end();
                    return Some(PathEl::LineTo(self.last));
                }
                let (left, right) = seg.subdivide();
                self.stack.push((right, level + 1));
                self.stack.push((left, level + 1));
                continue;
            }
            match self.src.next()? {
                PathEl::MoveTo(p) => {
                    self.last = p;
                    self.start = p;
                    return Some(PathEl::MoveTo(p));
                }
                PathEl::LineTo(p) => {
                    self.last = p;
                    return Some(PathEl::LineTo(p));
                }
                PathEl::QuadTo(c, p) => {
                    self.stack.push((Seg::Quad(self.last, c, p), 0));
                }
                PathEl::CurveTo(c1, c2, p) => {
                    self.stack.push((Seg::Cubic(self.last, c1, c2, p), 0));
                }
                PathEl::ClosePath => {
                    self.last = self.start;
                    return Some(PathEl::ClosePath);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Flattened;
    use crate::{PathEl, Point};

    fn quad() -> [PathEl; 2] {
        [
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::QuadTo(Point::new(1.0, 2.0), Point::new(2.0, 0.0)),
        ]
    }

    #[test]
    fn output_is_a_polyline_ending_at_the_curve_endpoint() {
        let els: Vec<PathEl> = Flattened::new(quad().into_iter(), 0.1).collect();
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(els[1..]
            .iter()
            .all(|el| matches!(el, PathEl::LineTo(_))));
        assert!(els.len() > 2, "curve was not subdivided");
        let last = match els[els.len() - 1] {
            PathEl::LineTo(p) => p,
            _ => unreachable!(),
        };
        assert_eq!(last, Point::new(2.0, 0.0));
    }

    #[test]
    fn chords_stay_close_to_the_curve() {
        let els: Vec<PathEl> = Flattened::new(quad().into_iter(), 0.01).collect();
        // All emitted vertices must lie on the quadratic.
        for el in &els[1..] {
            let p = match el {
                PathEl::LineTo(p) => *p,
                _ => unreachable!(),
            };
            // Invert the x coordinate for the parameter: x(t) = 2t here.
            let t = p.x / 2.0;
            let y = 2.0 * 2.0 * t * (1.0 - t);
            assert!((p.y - y).abs() < 1e-9, "vertex {p:?} off the curve");
        }
    }

    #[test]
    fn depth_bound_caps_the_output() {
        let els: Vec<PathEl> = Flattened::with_limit(quad().into_iter(), 0.0, 3).collect();
        // Depth 3 can produce at most 2^3 chords (plus the move).
        assert!(els.len() <= 9);
    }

    #[test]
    fn lines_and_closes_pass_through() {
        let src = [
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(1.0, 0.0)),
            PathEl::ClosePath,
        ];
        let els: Vec<PathEl> = Flattened::new(src.into_iter(), 0.1).collect();
        assert_eq!(&els, &src);
    }
}
