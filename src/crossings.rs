// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ray-cast crossing counts of a path against query primitives.
//!
//! Every function here walks a path-element iterator once and counts the
//! crossings between the path and the right-extending shadow of a query
//! primitive: +1 for each crossing where the y coordinate is increasing,
//! -1 where it is decreasing. When the path touches the primitive itself
//! the walk aborts with the [`SHAPE_INTERSECTS`] sentinel instead of a
//! count. Curved elements are flattened on the fly.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::common::{is_epsilon_eq, SPLINE_APPROXIMATION_RATIO};
use crate::flatten::Flattened;
use crate::line::{segments_intersect, segments_intersect_excl, side_of_line};
use crate::{
    Circle, Ellipse, Line, Path, PathEl, Point, Rect, RoundRect, Shape, Triangle, WindingRule,
};

/// Sentinel crossing count: the path touches or crosses the query shape
/// itself, so no meaningful count exists.
pub const SHAPE_INTERSECTS: i32 = i32::MIN;

/// How the tail of an open subpath contributes to the crossing count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossingMode {
    /// Count only the edges actually present in the path.
    #[default]
    Standard,
    /// Count a virtual closing edge from the current point back to the
    /// last move-to point.
    AutoClose,
    /// Discard the count of an open path: only [`SHAPE_INTERSECTS`] is
    /// meaningful, since an open path bounds no area.
    SimpleIntersectionWhenNotPolygon,
}

/// Error returned when a path-element sequence does not begin with a
/// `MoveTo` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MalformedPath;

impl core::fmt::Display for MalformedPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "missing initial MoveTo in path definition")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedPath {}

/// The shared walk: feeds every line of the (flattened) path to the
/// per-edge crossing function, aborting on the sentinel.
fn walk_crossings<I, F>(
    mut elements: I,
    mode: CrossingMode,
    mut edge: F,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
    F: FnMut(i32, f64, f64, f64, f64) -> i32,
{
    let first = match elements.next() {
        None => return Ok(0),
        Some(el) => el,
    };
    let (mut movx, mut movy) = match first {
        PathEl::MoveTo(p) => (p.x, p.y),
        _ => return Err(MalformedPath),
    };
    let mut curx = movx;
    let mut cury = movy;
    let mut crossings = 0_i32;

    for el in elements {
        match el {
            PathEl::MoveTo(p) => {
                movx = p.x;
                movy = p.y;
                curx = movx;
                cury = movy;
            }
            PathEl::LineTo(p) => {
                crossings = edge(crossings, curx, cury, p.x, p.y);
                if crossings == SHAPE_INTERSECTS {
                    return Ok(crossings);
                }
                curx = p.x;
                cury = p.y;
            }
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {
                let sub = [PathEl::MoveTo(Point::new(curx, cury)), el];
                for flat in Flattened::new(sub.into_iter(), SPLINE_APPROXIMATION_RATIO) {
                    if let PathEl::LineTo(p) = flat {
                        crossings = edge(crossings, curx, cury, p.x, p.y);
                        if crossings == SHAPE_INTERSECTS {
                            return Ok(crossings);
                        }
                        curx = p.x;
                        cury = p.y;
                    }
                }
            }
            PathEl::ClosePath => {
                if curx != movx || cury != movy {
                    crossings = edge(crossings, curx, cury, movx, movy);
                    if crossings == SHAPE_INTERSECTS {
                        return Ok(crossings);
                    }
                }
                curx = movx;
                cury = movy;
            }
        }
    }

    let is_open = curx != movx || cury != movy;
    if is_open {
        match mode {
            CrossingMode::AutoClose => {
                crossings = edge(crossings, curx, cury, movx, movy);
            }
            CrossingMode::SimpleIntersectionWhenNotPolygon => {
                // An open path bounds no area.
                crossings = 0;
            }
            CrossingMode::Standard => {}
        }
    }

    Ok(crossings)
}

/// Crossings of the ray extending to the right from `pt`.
///
/// A path vertex coincident with `pt` yields [`SHAPE_INTERSECTS`]; a
/// crossing through the point itself is otherwise not counted.
pub fn crossings_for_point<I>(
    path: I,
    mode: CrossingMode,
    pt: Point,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        if x1 == pt.x && y1 == pt.y {
            return SHAPE_INTERSECTS;
        }
        crossings + point_edge(pt.x, pt.y, x0, y0, x1, y1)
    })
}

/// Crossings of the path against the right-extending shadow of a segment.
pub fn crossings_for_segment<I>(
    path: I,
    mode: CrossingMode,
    seg: Line,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        segment_edge(
            crossings, seg.p0.x, seg.p0.y, seg.p1.x, seg.p1.y, x0, y0, x1, y1,
        )
    })
}

/// Crossings of the path against the right-extending shadow of a
/// rectangle.
pub fn crossings_for_rect<I>(
    path: I,
    mode: CrossingMode,
    rect: Rect,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    let r = rect.abs();
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        rect_edge(crossings, r.x0, r.y0, r.x1, r.y1, x0, y0, x1, y1)
    })
}

/// Crossings of the path against the right-extending shadow of a round
/// rectangle.
pub fn crossings_for_round_rect<I>(
    path: I,
    mode: CrossingMode,
    rr: &RoundRect,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    let rect = rr.rect().abs();
    let aw = rr.arc_width();
    let ah = rr.arc_height();
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        round_rect_edge(
            crossings, rect.x0, rect.y0, rect.x1, rect.y1, aw, ah, x0, y0, x1, y1,
        )
    })
}

/// Crossings of the path against the right-extending shadow of a circle.
pub fn crossings_for_circle<I>(
    path: I,
    mode: CrossingMode,
    circle: Circle,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        circle_edge(
            crossings,
            circle.center.x,
            circle.center.y,
            circle.radius,
            x0,
            y0,
            x1,
            y1,
        )
    })
}

/// Crossings of the path against the right-extending shadow of an
/// ellipse.
pub fn crossings_for_ellipse<I>(
    path: I,
    mode: CrossingMode,
    ellipse: Ellipse,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        ellipse_edge(
            crossings,
            ellipse.center.x,
            ellipse.center.y,
            ellipse.radii.x,
            ellipse.radii.y,
            x0,
            y0,
            x1,
            y1,
        )
    })
}

/// Crossings of the path against the right-extending shadow of a
/// triangle.
pub fn crossings_for_triangle<I>(
    path: I,
    mode: CrossingMode,
    tri: &Triangle,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        triangle_edge(
            crossings, tri.a.x, tri.a.y, tri.b.x, tri.b.y, tri.c.x, tri.c.y, x0, y0, x1, y1,
        )
    })
}

/// Crossings of the path against the shadow of another path.
pub fn crossings_for_path<I>(
    path: I,
    mode: CrossingMode,
    shadow: &PathShadow,
) -> Result<i32, MalformedPath>
where
    I: Iterator<Item = PathEl>,
{
    walk_crossings(path, mode, |crossings, x0, y0, x1, y1| {
        shadow.crossings(crossings, x0, y0, x1, y1)
    })
}

/// Per-edge crossing count for a point query.
pub(crate) fn point_edge(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> i32 {
    if py < y0 && py < y1 {
        return 0;
    }
    if py >= y0 && py >= y1 {
        return 0;
    }
    // The edge straddles the ray's y coordinate.
    if px >= x0 && px >= x1 {
        return 0;
    }
    if px < x0 && px < x1 {
        return if y0 < y1 { 1 } else { -1 };
    }
    let xintercept = x0 + (py - y0) * (x1 - x0) / (y1 - y0);
    if px >= xintercept {
        return 0;
    }
    if y0 < y1 {
        1
    } else {
        -1
    }
}

/// As [`point_edge`], with every boundary comparison strict.
///
/// Used for the second endpoint of a segment shadow so a shared vertex is
/// not counted twice.
fn point_edge_excl(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> i32 {
    if py < y0 && py < y1 {
        return 0;
    }
    if py > y0 && py > y1 {
        return 0;
    }
    if px > x0 && px > x1 {
        return 0;
    }
    if px < x0 && px < x1 {
        return if y0 < y1 { 1 } else { -1 };
    }
    let xintercept = x0 + (py - y0) * (x1 - x0) / (y1 - y0);
    if px > xintercept {
        return 0;
    }
    if y0 < y1 {
        1
    } else {
        -1
    }
}

/// Count the edge like a point crossing against both shadow corners of a
/// vertical span, for an edge entirely to the right of the query.
fn shadow_span_edge(crossings: i32, ymin: f64, ymax: f64, y0: f64, y1: f64) -> i32 {
    let mut numcrosses = crossings;
    if y0 < y1 {
        if y0 <= ymin {
            numcrosses += 1;
        }
        if y1 >= ymax {
            numcrosses += 1;
        }
    } else {
        if y1 <= ymin {
            numcrosses -= 1;
        }
        if y0 >= ymax {
            numcrosses -= 1;
        }
    }
    numcrosses
}

#[allow(clippy::too_many_arguments)]
fn circle_edge(
    crossings: i32,
    cx: f64,
    cy: f64,
    radius: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    let mut numcrosses = crossings;
    let xmin = cx - radius.abs();
    let ymin = cy - radius.abs();
    let ymax = cy + radius.abs();

    if y0 <= ymin && y1 <= ymin {
        return numcrosses;
    }
    if y0 >= ymax && y1 >= ymax {
        return numcrosses;
    }
    if x0 <= xmin && x1 <= xmin {
        return numcrosses;
    }
    if x0 >= cx + radius && x1 >= cx + radius {
        // The edge is entirely on the right side of the circle.
        numcrosses = shadow_span_edge(numcrosses, ymin, ymax, y0, y1);
    } else if crate::circle::intersects_circle_segment(cx, cy, radius, x0, y0, x1, y1) {
        return SHAPE_INTERSECTS;
    } else {
        numcrosses += point_edge(cx, ymin, x0, y0, x1, y1);
        numcrosses += point_edge(cx, ymax, x0, y0, x1, y1);
    }
    numcrosses
}

#[allow(clippy::too_many_arguments)]
fn ellipse_edge(
    crossings: i32,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    let mut numcrosses = crossings;
    let xmin = cx - rx.abs();
    let xmax = cx + rx.abs();
    let ymin = cy - ry.abs();
    let ymax = cy + ry.abs();

    if y0 <= ymin && y1 <= ymin {
        return numcrosses;
    }
    if y0 >= ymax && y1 >= ymax {
        return numcrosses;
    }
    if x0 <= xmin && x1 <= xmin {
        return numcrosses;
    }
    if x0 >= xmax && x1 >= xmax {
        numcrosses = shadow_span_edge(numcrosses, ymin, ymax, y0, y1);
    } else if crate::ellipse::intersects_ellipse_segment(cx, cy, rx, ry, x0, y0, x1, y1, true) {
        return SHAPE_INTERSECTS;
    } else {
        numcrosses += point_edge(cx, ymin, x0, y0, x1, y1);
        numcrosses += point_edge(cx, ymax, x0, y0, x1, y1);
    }
    numcrosses
}

#[allow(clippy::too_many_arguments)]
fn rect_edge(
    crossings: i32,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    let numcrosses = crossings;
    if y0 >= rymax && y1 >= rymax {
        return numcrosses;
    }
    if y0 <= rymin && y1 <= rymin {
        return numcrosses;
    }
    if x0 <= rxmin && x1 <= rxmin {
        return numcrosses;
    }
    if x0 >= rxmax && x1 >= rxmax {
        // The edge is entirely to the right of the rectangle.
        return shadow_span_edge(numcrosses, rymin, rymax, y0, y1);
    }
    // An endpoint strictly inside the rectangle is a hit.
    if (x0 > rxmin && x0 < rxmax && y0 > rymin && y0 < rymax)
        || (x1 > rxmin && x1 < rxmax && y1 > rymin && y1 < rymax)
    {
        return SHAPE_INTERSECTS;
    }
    // Clip the edge to the vertical band of the rectangle and compare
    // the clipped x span to the rectangle's x span.
    let mut xi0 = x0;
    if y0 < rymin {
        xi0 += (rymin - y0) * (x1 - x0) / (y1 - y0);
    } else if y0 > rymax {
        xi0 += (rymax - y0) * (x1 - x0) / (y1 - y0);
    }
    let mut xi1 = x1;
    if y1 < rymin {
        xi1 += (rymin - y1) * (x0 - x1) / (y0 - y1);
    } else if y1 > rymax {
        xi1 += (rymax - y1) * (x0 - x1) / (y0 - y1);
    }
    if xi0 <= rxmin && xi1 <= rxmin {
        return numcrosses;
    }
    if xi0 >= rxmax && xi1 >= rxmax {
        return shadow_span_edge(numcrosses, rymin, rymax, y0, y1);
    }
    SHAPE_INTERSECTS
}

#[allow(clippy::too_many_arguments)]
fn round_rect_edge(
    crossings: i32,
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
) -> i32 {
    let mut numcrosses = crossings;
    if y0 >= rymax && y1 >= rymax {
        return numcrosses;
    }
    if y0 <= rymin && y1 <= rymin {
        return numcrosses;
    }
    if x0 <= rxmin && x1 <= rxmin {
        return numcrosses;
    }
    if x0 >= rxmax && x1 >= rxmax {
        numcrosses = shadow_span_edge(numcrosses, rymin, rymax, y0, y1);
    } else if crate::rounded_rect::intersects_round_rect_segment(
        rxmin, rymin, rxmax, rymax, arc_width, arc_height, x0, y0, x1, y1,
    ) {
        return SHAPE_INTERSECTS;
    } else {
        // The anchor points of the shadow are where the top and bottom
        // edges meet the right corner arcs.
        let x = rxmax - arc_width;
        numcrosses += point_edge(x, rymin, x0, y0, x1, y1);
        numcrosses += point_edge(x, rymax, x0, y0, x1, y1);
    }
    numcrosses
}

#[allow(clippy::too_many_arguments)]
fn segment_edge(
    crossings: i32,
    sx1: f64,
    sy1: f64,
    sx2: f64,
    sy2: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    let mut numcrosses = crossings;
    let xmin = sx1.min(sx2);
    let xmax = sx1.max(sx2);
    let ymin = sy1.min(sy2);
    let ymax = sy1.max(sy2);

    if y0 <= ymin && y1 <= ymin {
        return numcrosses;
    }
    if y0 >= ymax && y1 >= ymax {
        return numcrosses;
    }
    if x0 <= xmin && x1 <= xmin {
        return numcrosses;
    }
    if x0 >= xmax && x1 >= xmax {
        numcrosses = shadow_span_edge(numcrosses, ymin, ymax, y0, y1);
    } else if segments_intersect(x0, y0, x1, y1, sx1, sy1, sx2, sy2) {
        return SHAPE_INTERSECTS;
    } else {
        // The edge may still cross the shadow band behind the segment.
        // Orient the query segment bottom-up before taking sides.
        let (side1, side2) = if sy1 <= sy2 {
            (
                side_of_line(sx1, sy1, sx2, sy2, x0, y0),
                side_of_line(sx1, sy1, sx2, sy2, x1, y1),
            )
        } else {
            (
                side_of_line(sx2, sy2, sx1, sy1, x0, y0),
                side_of_line(sx2, sy2, sx1, sy1, x1, y1),
            )
        };
        if side1 > 0 || side2 > 0 {
            let n1 = point_edge(sx1, sy1, x0, y0, x1, y1);
            let n2 = if n1 != 0 {
                point_edge_excl(sx2, sy2, x0, y0, x1, y1)
            } else {
                point_edge(sx2, sy2, x0, y0, x1, y1)
            };
            numcrosses += n1 + n2;
        }
    }
    numcrosses
}

#[allow(clippy::too_many_arguments)]
fn triangle_edge(
    crossings: i32,
    tx1: f64,
    ty1: f64,
    tx2: f64,
    ty2: f64,
    tx3: f64,
    ty3: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    let mut numcrosses = crossings;

    // Extremes of the triangle, remembering the rightmost x at each
    // extremal y; those are the shadow's anchor points.
    let mut xmin = tx1;
    let mut xmax = tx1;
    let mut ymin = ty1;
    let mut ymax = ty1;
    let mut x4ymin = tx1;
    let mut x4ymax = tx1;
    for (tx, ty) in [(tx2, ty2), (tx3, ty3)] {
        if tx < xmin {
            xmin = tx;
        }
        if tx > xmax {
            xmax = tx;
        }
        if ty == ymin {
            x4ymin = tx.max(x4ymin);
        } else if ty < ymin {
            ymin = ty;
            x4ymin = tx;
        }
        if ty == ymax {
            x4ymax = tx.max(x4ymax);
        } else if ty > ymax {
            ymax = ty;
            x4ymax = tx;
        }
    }

    if y0 <= ymin && y1 <= ymin {
        return numcrosses;
    }
    if y0 >= ymax && y1 >= ymax {
        return numcrosses;
    }
    if x0 <= xmin && x1 <= xmin {
        return numcrosses;
    }
    if x0 >= xmax && x1 >= xmax {
        numcrosses = shadow_span_edge(numcrosses, ymin, ymax, y0, y1);
    } else if crate::triangle::intersects_triangle_segment(
        tx1, ty1, tx2, ty2, tx3, ty3, x0, y0, x1, y1,
    ) {
        return SHAPE_INTERSECTS;
    } else {
        numcrosses += point_edge(x4ymin, ymin, x0, y0, x1, y1);
        numcrosses += point_edge(x4ymax, ymax, x0, y0, x1, y1);
    }
    numcrosses
}

/// The shadow of a whole path, for path-vs-path crossing tests.
///
/// Precomputes the path's elements and bounding box; each edge of the
/// outer path is first tested against the bounding-box shadow, and only
/// on a hit is the exact shadow of the stored path evaluated.
#[derive(Clone, Debug)]
pub struct PathShadow {
    elements: Vec<PathEl>,
    winding_rule: WindingRule,
    bounds: Rect,
}

impl PathShadow {
    /// Capture the shadow of a path.
    pub fn new(path: &Path) -> PathShadow {
        PathShadow {
            elements: path.elements().to_vec(),
            winding_rule: path.winding_rule(),
            bounds: path.bounding_box(),
        }
    }

    /// Crossings of the edge `(x0, y0) → (x1, y1)` against this shadow.
    pub fn crossings(&self, crossings: i32, x0: f64, y0: f64, x1: f64, y1: f64) -> i32 {
        let mut numcrosses = rect_edge(
            crossings,
            self.bounds.x0,
            self.bounds.y0,
            self.bounds.x1,
            self.bounds.y1,
            x0,
            y0,
            x1,
            y1,
        );

        if numcrosses == SHAPE_INTERSECTS {
            // The edge is inside the bounding box; an exact computation
            // against the path itself is required.
            let mut data = PathShadowData::new(self.bounds.x0, self.bounds.y0, self.bounds.y1);
            self.discretize(x0, y0, x1, y1, &mut data);
            let exact = data.crossings;
            let mask = if self.winding_rule == WindingRule::NonZero {
                -1
            } else {
                2
            };
            if exact == SHAPE_INTERSECTS || (exact & mask) != 0 {
                return SHAPE_INTERSECTS;
            }
            let mut inc = 0;
            if data.has_x4ymin {
                inc += 1;
            }
            if data.has_x4ymax {
                inc += 1;
            }
            numcrosses = crossings + if y0 < y1 { inc } else { -inc };
        }

        numcrosses
    }

    /// Walk the stored path, flattening curves, and accumulate the
    /// crossings of each of its edges with the query segment.
    fn discretize(&self, sx0: f64, sy0: f64, sx1: f64, sy1: f64, data: &mut PathShadowData) {
        let mut iter = Flattened::new(
            self.elements.iter().copied(),
            SPLINE_APPROXIMATION_RATIO,
        );
        let (mut movx, mut movy) = match iter.next() {
            Some(PathEl::MoveTo(p)) => (p.x, p.y),
            _ => return,
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
                    cross_segment_two_shadow_lines(
                        curx, cury, p.x, p.y, sx0, sy0, sx1, sy1, data,
                    );
                    if data.crossings == SHAPE_INTERSECTS {
                        return;
                    }
                    curx = p.x;
                    cury = p.y;
                }
                PathEl::ClosePath => {
                    if curx != movx || cury != movy {
                        cross_segment_two_shadow_lines(
                            curx, cury, movx, movy, sx0, sy0, sx1, sy1, data,
                        );
                    }
                    if data.crossings != 0 {
                        return;
                    }
                    curx = movx;
                    cury = movy;
                }
                // Flattened away.
                PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
            }
        }
    }
}

/// Running state of one exact shadow evaluation.
struct PathShadowData {
    crossings: i32,
    has_x4ymin: bool,
    has_x4ymax: bool,
    x4ymin: f64,
    x4ymax: f64,
    ymin: f64,
    ymax: f64,
}

impl PathShadowData {
    fn new(xmin: f64, ymin: f64, ymax: f64) -> PathShadowData {
        PathShadowData {
            crossings: 0,
            has_x4ymin: false,
            has_x4ymax: false,
            x4ymin: xmin,
            x4ymax: xmin,
            ymin,
            ymax,
        }
    }

    fn set_crossing_for_ymax(&mut self, x: f64, y: f64) {
        if (y > self.ymax || is_epsilon_eq(y, self.ymax)) && x > self.x4ymax {
            self.x4ymax = x;
            self.has_x4ymax = true;
        }
    }

    fn set_crossing_for_ymin(&mut self, x: f64, y: f64) {
        if (y < self.ymin || is_epsilon_eq(y, self.ymin)) && x > self.x4ymin {
            self.x4ymin = x;
            self.has_x4ymin = true;
        }
    }
}

/// Crossings of the query segment against the shadow of one edge of the
/// stored path.
#[allow(clippy::too_many_arguments)]
fn cross_segment_two_shadow_lines(
    shadow_x0: f64,
    shadow_y0: f64,
    shadow_x1: f64,
    shadow_y1: f64,
    sx0: f64,
    sy0: f64,
    sx1: f64,
    sy1: f64,
    data: &mut PathShadowData,
) {
    let shadow_xmin = shadow_x0.min(shadow_x1);
    let shadow_xmax = shadow_x0.max(shadow_x1);
    let shadow_ymin = shadow_y0.min(shadow_y1);
    let shadow_ymax = shadow_y0.max(shadow_y1);

    if sy0 < shadow_ymin && sy1 < shadow_ymin {
        return;
    }
    if sy0 > shadow_ymax && sy1 > shadow_ymax {
        return;
    }
    if sx0 < shadow_xmin && sx1 < shadow_xmin {
        return;
    }
    if sx0 >= shadow_xmax && sx1 >= shadow_xmax {
        // The query segment is entirely to the right of the edge.
        let alpha = (sx1 - sx0) / (sy1 - sy0);
        if sy0 < sy1 {
            if sy0 <= shadow_ymin {
                let xintercept = sx0 + (shadow_ymin - sy0) * alpha;
                data.set_crossing_for_ymin(xintercept, shadow_ymin);
                data.crossings += 1;
            }
            if sy1 >= shadow_ymax {
                let xintercept = sx0 + (shadow_ymax - sy0) * alpha;
                data.set_crossing_for_ymax(xintercept, shadow_ymax);
                data.crossings += 1;
            }
        } else {
            if sy1 <= shadow_ymin {
                let xintercept = sx0 + (shadow_ymin - sy0) * alpha;
                data.set_crossing_for_ymin(xintercept, shadow_ymin);
                data.crossings -= 1;
            }
            if sy0 >= shadow_ymax {
                let xintercept = sx0 + (shadow_ymax - sy0) * alpha;
                data.set_crossing_for_ymax(xintercept, shadow_ymax);
                data.crossings -= 1;
            }
        }
    } else if segments_intersect_excl(
        shadow_x0, shadow_y0, shadow_x1, shadow_y1, sx0, sy0, sx1, sy1,
    ) {
        data.crossings = SHAPE_INTERSECTS;
    } else {
        let is_up = shadow_y0 <= shadow_y1;
        let (side1, side2) = if is_up {
            (
                side_of_line(shadow_x0, shadow_y0, shadow_x1, shadow_y1, sx0, sy0),
                side_of_line(shadow_x0, shadow_y0, shadow_x1, shadow_y1, sx1, sy1),
            )
        } else {
            (
                side_of_line(shadow_x1, shadow_y1, shadow_x0, shadow_y0, sx0, sy0),
                side_of_line(shadow_x1, shadow_y1, shadow_x0, shadow_y0, sx1, sy1),
            )
        };
        if side1 > 0 || side2 > 0 {
            let (x0, x1) = if is_up {
                (shadow_x0, shadow_x1)
            } else {
                (shadow_x1, shadow_x0)
            };
            cross_segment_shadow_line(x1, shadow_ymax, sx0, sy0, sx1, sy1, is_up, data);
            cross_segment_shadow_line(x0, shadow_ymin, sx0, sy0, sx1, sy1, !is_up, data);
        }
    }
}

/// Crossings of the query segment against one horizontal shadow line.
#[allow(clippy::too_many_arguments)]
fn cross_segment_shadow_line(
    shadowx: f64,
    shadowy: f64,
    sx0: f64,
    sy0: f64,
    sx1: f64,
    sy1: f64,
    is_max: bool,
    data: &mut PathShadowData,
) {
    if shadowy < sy0 && shadowy < sy1 {
        return;
    }
    if shadowy > sy0 && shadowy > sy1 {
        return;
    }
    if shadowx > sx0 && shadowx > sx1 {
        return;
    }
    let xintercept = sx0 + (shadowy - sy0) * (sx1 - sx0) / (sy1 - sy0);
    if shadowx > xintercept {
        return;
    }
    if is_max {
        data.set_crossing_for_ymax(xintercept, shadowy);
    } else {
        data.set_crossing_for_ymin(xintercept, shadowy);
    }
    data.crossings += if sy0 < sy1 { 1 } else { -1 };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Path {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((4.0, 0.0));
        p.line_to((4.0, 4.0));
        p.line_to((0.0, 4.0));
        p.close();
        p
    }

    #[test]
    fn empty_path_has_no_crossings() {
        let cross =
            crossings_for_point(core::iter::empty(), CrossingMode::Standard, Point::ORIGIN);
        assert_eq!(cross, Ok(0));
    }

    #[test]
    fn missing_move_to_is_rejected() {
        let els = [PathEl::LineTo(Point::new(1.0, 1.0))];
        let cross = crossings_for_point(
            els.into_iter(),
            CrossingMode::Standard,
            Point::new(0.5, 0.5),
        );
        assert_eq!(cross, Err(MalformedPath));
    }

    #[test]
    fn point_inside_a_square() {
        let path = unit_square();
        let cross = crossings_for_point(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Point::new(2.0, 2.0),
        );
        assert_eq!(cross, Ok(1));
    }

    #[test]
    fn point_outside_a_square() {
        let path = unit_square();
        let cross = crossings_for_point(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Point::new(5.0, 2.0),
        );
        assert_eq!(cross, Ok(0));
    }

    #[test]
    fn point_on_a_vertex_is_an_intersection() {
        let path = unit_square();
        let cross = crossings_for_point(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Point::new(4.0, 4.0),
        );
        assert_eq!(cross, Ok(SHAPE_INTERSECTS));
    }

    #[test]
    fn open_curved_path_vertex_hit() {
        // An open path mixing line, quadratic and cubic elements; the
        // query point sits exactly on the first line's endpoint.
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((1.0, 1.0));
        p.quad_to((3.0, 0.0), (4.0, 3.0));
        p.curve_to((5.0, -1.0), (6.0, 5.0), (7.0, -5.0));
        let cross = crossings_for_point(
            p.elements().iter().copied(),
            CrossingMode::Standard,
            Point::new(1.0, 1.0),
        );
        assert_eq!(cross, Ok(SHAPE_INTERSECTS));
    }

    #[test]
    fn open_path_simple_intersection_mode_discards_the_count() {
        let mut p = Path::new();
        p.move_to((0.0, 0.0));
        p.line_to((4.0, 0.0));
        p.line_to((4.0, 4.0));
        p.line_to((0.0, 4.0));
        // Not closed; the point would be "inside" if it were.
        let pt = Point::new(2.0, 2.0);
        let standard = crossings_for_point(
            p.elements().iter().copied(),
            CrossingMode::Standard,
            pt,
        );
        let simple = crossings_for_point(
            p.elements().iter().copied(),
            CrossingMode::SimpleIntersectionWhenNotPolygon,
            pt,
        );
        let auto = crossings_for_point(
            p.elements().iter().copied(),
            CrossingMode::AutoClose,
            pt,
        );
        assert_eq!(standard, Ok(1));
        assert_eq!(simple, Ok(0));
        assert_eq!(auto, Ok(1));
    }

    #[test]
    fn rect_disjoint_from_square() {
        let path = unit_square();
        let cross = crossings_for_rect(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Rect::new(6.0, 1.0, 7.0, 2.0),
        );
        assert_eq!(cross, Ok(0));
    }

    #[test]
    fn rect_inside_square_counts_both_corners() {
        let path = unit_square();
        let cross = crossings_for_rect(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Rect::new(1.0, 1.0, 2.0, 2.0),
        );
        assert_eq!(cross, Ok(2));
    }

    #[test]
    fn rect_overlapping_square_boundary_intersects() {
        let path = unit_square();
        let cross = crossings_for_rect(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Rect::new(3.0, 1.0, 5.0, 2.0),
        );
        assert_eq!(cross, Ok(SHAPE_INTERSECTS));
    }

    #[test]
    fn circle_inside_square() {
        let path = unit_square();
        let cross = crossings_for_circle(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Circle::new((2.0, 2.0), 0.5),
        );
        assert_eq!(cross, Ok(2));
    }

    #[test]
    fn circle_crossing_square_boundary() {
        let path = unit_square();
        let cross = crossings_for_circle(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Circle::new((4.0, 2.0), 1.0),
        );
        assert_eq!(cross, Ok(SHAPE_INTERSECTS));
    }

    #[test]
    fn segment_inside_square() {
        let path = unit_square();
        let cross = crossings_for_segment(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Line::new((1.0, 1.0), (2.0, 3.0)),
        );
        assert_eq!(cross, Ok(2));
    }

    #[test]
    fn segment_piercing_square() {
        let path = unit_square();
        let cross = crossings_for_segment(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            Line::new((2.0, 2.0), (6.0, 2.0)),
        );
        assert_eq!(cross, Ok(SHAPE_INTERSECTS));
    }

    #[test]
    fn triangle_inside_square() {
        let path = unit_square();
        let tri = Triangle::new((1.0, 1.0), (3.0, 1.0), (2.0, 3.0));
        let cross = crossings_for_triangle(
            path.elements().iter().copied(),
            CrossingMode::Standard,
            &tri,
        );
        assert_eq!(cross, Ok(2));
    }

    #[test]
    fn path_shadow_inside_square() {
        let outer = unit_square();
        let mut inner = Path::new();
        inner.move_to((1.0, 1.0));
        inner.line_to((2.0, 1.0));
        inner.line_to((1.5, 2.0));
        inner.close();
        let shadow = PathShadow::new(&inner);
        let cross = crossings_for_path(
            outer.elements().iter().copied(),
            CrossingMode::Standard,
            &shadow,
        );
        assert_eq!(cross, Ok(2));
    }

    #[test]
    fn path_shadow_crossing_square() {
        let outer = unit_square();
        let mut inner = Path::new();
        inner.move_to((3.0, 1.0));
        inner.line_to((5.0, 1.0));
        inner.line_to((4.0, 2.0));
        inner.close();
        let shadow = PathShadow::new(&inner);
        let cross = crossings_for_path(
            outer.elements().iter().copied(),
            CrossingMode::Standard,
            &shadow,
        );
        assert_eq!(cross, Ok(SHAPE_INTERSECTS));
    }
}
