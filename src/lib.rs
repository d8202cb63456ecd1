// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections of Bézier curves by Bézier clipping.
//!
//! The bezclip library finds the parameters where two planar polynomial
//! Bézier curves of degree up to [`MAX_DEGREE`] cross, or where a curve
//! crosses a line. It works directly on control points: each curve is clipped
//! against the fat line of the other, and subdivided where clipping stalls,
//! until both parameter ranges are narrower than a tolerance.
//!
//! # Examples
//!
//! Two cubic arches crossing twice:
//! ```
//! use bezclip::{curve_curve_intersections, ClipConfig, ControlPolygon};
//!
//! let a = ControlPolygon::new([(0.0, 0.0), (0.5, 1.0), (0.5, 1.0), (1.0, 0.0)])?;
//! let b = ControlPolygon::new([(0.0, 1.0), (0.5, 0.0), (0.5, 0.0), (1.0, 1.0)])?;
//! let hits = curve_curve_intersections(&a, &b, &ClipConfig::default())?;
//! assert!(hits.is_complete());
//! assert_eq!(hits.len(), 2);
//! for (p, hit) in hits.points(&a).iter().zip(&hits) {
//!     assert!(p.distance(b.eval(hit.s)) < 0.01);
//! }
//! # Ok::<(), bezclip::ClipError>(())
//! ```
//!
//! A cubic crossing a line three times:
//! ```
//! use bezclip::{curve_line_intersections, ClipConfig, ControlPolygon, Line};
//!
//! let s = ControlPolygon::new([(0.0, -5.0), (3.0, 15.0), (7.0, -15.0), (10.0, 5.0)])?;
//! let axis = Line::new((0.0, 0.0), (10.0, 0.0));
//! let roots = curve_line_intersections(&s, &axis, &ClipConfig::default())?;
//! assert_eq!(roots.len(), 3);
//! # Ok::<(), bezclip::ClipError>(())
//! ```
//!
//! A query that hits the intersection cap or runs out of its recursion budget
//! still returns what it found, with a [`ClipStatus`] saying so.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate regardless.
//!
//! Progress is reported through [`tracing`] events; no subscriber is
//! installed by the library.
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
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezclip requires either the `std` or `libm` feature");

extern crate alloc;

pub mod bernstein;
mod common;
mod config;
mod control_poly;
mod curve_intersections;
mod curve_line;
mod error;
pub mod fat_line;
mod line;
mod observer;
mod param_interval;
mod point;
mod report;
pub mod subdivide;
mod vec2;

pub use crate::config::*;
pub use crate::control_poly::{ControlPolygon, MAX_DEGREE};
pub use crate::curve_intersections::*;
pub use crate::curve_line::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::observer::*;
pub use crate::param_interval::*;
pub use crate::point::*;
pub use crate::report::*;
pub use crate::vec2::*;
