// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D computational geometry over a small set of planar shapes.
//!
//! The planar library contains data structures and algorithms for points,
//! segments, rectangles, circles, ellipses, triangles, oriented
//! rectangles and paths. Every shape can describe itself as a lazy
//! sequence of path elements, answers containment and closest/farthest
//! point queries, and participates in pairwise intersection tests,
//! either through a closed-form predicate or through a generic
//! ray-crossing engine.
//!
//! # Examples
//!
//! Basic geometry and containment:
//! ```
//! use planar::{Circle, Point, Rect, Shape, Vec2};
//!
//! let pt = Point::new(10.0, 10.0);
//! let vector = Vec2::new(5.0, -5.0);
//! let pt2 = pt + vector;
//! assert_eq!(pt2, Point::new(15.0, 5.0));
//!
//! let rect = Rect::from_points(pt, pt2);
//! assert!(rect.contains(Point::new(12.0, 7.0)));
//!
//! let circle = Circle::new((5.0, 8.0), 5.0);
//! assert!(circle.contains(Point::new(9.0, 11.0)));
//! assert!(!circle.contains(Point::new(11.0, 10.0)));
//! ```
//!
//! Intersection over dynamically chosen shapes:
//!
//! ```
//! use planar::{AnyShape, Circle, Triangle};
//!
//! let circle = AnyShape::from(Circle::new((2.0, 2.0), 1.0));
//! let triangle = AnyShape::from(Triangle::new((0.0, 0.0), (8.0, 0.0), (0.0, 8.0)));
//! assert_eq!(circle.intersects(&triangle), Ok(true));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::bool_to_int_with_if
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("planar requires either the `std` or `libm` feature");

extern crate alloc;

mod affine;
mod circle;
pub mod common;
pub mod crossings;
mod dispatch;
mod ellipse;
mod flatten;
mod line;
mod oriented_rect;
mod path;
mod point;
mod rect;
mod rounded_rect;
mod shape;
mod size;
mod triangle;
mod vec2;

pub use crate::affine::*;
pub use crate::circle::*;
pub use crate::dispatch::*;
pub use crate::ellipse::*;
pub use crate::flatten::*;
pub use crate::line::*;
pub use crate::oriented_rect::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::rounded_rect::*;
pub use crate::shape::*;
pub use crate::size::*;
pub use crate::triangle::*;
pub use crate::vec2::*;
