// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single line segment.
///
/// When used as the second operand of
/// [`curve_line_intersections`](crate::curve_line_intersections) the line is
/// treated as unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Evaluate the line at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    /// The unit normal of the line, `(y0 - y1, x1 - x0)` normalized.
    ///
    /// Returns `None` when the endpoints are no further apart than `min_len`.
    #[inline]
    pub fn unit_normal(&self, min_len: f64) -> Option<Vec2> {
        (self.p1 - self.p0).turn_90().try_normalize(min_len)
    }

    /// Signed distance from the unbounded line through `p0` and `p1` to `p`.
    ///
    /// Positive on the side the [`unit_normal`](Self::unit_normal) points to.
    /// A zero-length line measures the plain distance to `p0` instead.
    pub fn signed_distance(&self, p: Point) -> f64 {
        match self.unit_normal(0.0) {
            Some(n) => n.dot(p - self.p0),
            None => p.distance(self.p0),
        }
    }

    /// The point on the segment nearest to `p`.
    ///
    /// Returns the parameter of that point, clamped to `[0, 1]`, and its
    /// squared distance to `p`.
    pub fn nearest(&self, p: Point) -> (f64, f64) {
        let d = self.p1 - self.p0;
        let dotp = d.dot(p - self.p0);
        let d_squared = d.hypot2();
        if dotp <= 0.0 {
            (0.0, (p - self.p0).hypot2())
        } else if dotp >= d_squared {
            (1.0, (p - self.p1).hypot2())
        } else {
            let t = dotp / d_squared;
            (t, (p - (self.p0 + d * t)).hypot2())
        }
    }

    /// Where this segment crosses `other`, as parameters on both segments.
    ///
    /// Returns `None` for parallel segments and for crossings of the
    /// supporting lines that fall outside either segment.
    pub fn crossing(&self, other: &Line) -> Option<(f64, f64)> {
        let ab = self.p1 - self.p0;
        let cd = other.p1 - other.p0;
        let pcd = ab.cross(cd);
        if pcd == 0.0 {
            return None;
        }
        let w = self.p0 - other.p0;
        let t = cd.cross(w) / pcd;
        let s = ab.cross(w) / pcd;
        ((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s)).then_some((t, s))
    }

    /// Distance between the closest points of two segments.
    pub fn segment_distance(&self, other: &Line) -> f64 {
        if self.crossing(other).is_some() {
            return 0.0;
        }
        other
            .nearest(self.p0)
            .1
            .min(other.nearest(self.p1).1)
            .min(self.nearest(other.p0).1)
            .min(self.nearest(other.p1).1)
            .sqrt()
    }
}
