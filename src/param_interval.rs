// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter intervals on an original curve.

use core::ops::Range;

/// The sub-range `[low, high]` of an original curve's parameter that a
/// subdivided control polygon represents.
///
/// A point evaluated at local parameter `u` on the sub-curve is the point at
/// global parameter `low + u * (high - low)` on the original curve. Every
/// split or trim of the polygon must be mirrored on its interval with
/// [`sub`](Self::sub) or [`split`](Self::split).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamInterval {
    /// Global parameter of the sub-curve's start.
    pub low: f64,
    /// Global parameter of the sub-curve's end.
    pub high: f64,
}

impl ParamInterval {
    /// The whole curve, `[0, 1]`.
    pub const UNIT: ParamInterval = ParamInterval::new(0.0, 1.0);

    /// Create a new interval.
    #[inline]
    pub const fn new(low: f64, high: f64) -> ParamInterval {
        ParamInterval { low, high }
    }

    /// Width of the interval.
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Global parameter at the middle of the interval.
    #[inline]
    pub fn mid(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Map a local parameter to the global parameter.
    #[inline]
    pub fn at(&self, u: f64) -> f64 {
        self.low + u * (self.high - self.low)
    }

    /// The interval covered by local parameters `[u0, u1]`.
    #[inline]
    pub fn sub(&self, u0: f64, u1: f64) -> ParamInterval {
        ParamInterval::new(self.at(u0), self.at(u1))
    }

    /// Split at local parameter `t` into `[low, at(t)]` and `[at(t), high]`.
    #[inline]
    pub fn split(&self, t: f64) -> (ParamInterval, ParamInterval) {
        let m = self.at(t);
        (
            ParamInterval::new(self.low, m),
            ParamInterval::new(m, self.high),
        )
    }

    /// Whether the global parameter `t` lies in the interval.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.low <= t && t <= self.high
    }
}

impl Default for ParamInterval {
    fn default() -> Self {
        ParamInterval::UNIT
    }
}

impl From<Range<f64>> for ParamInterval {
    #[inline]
    fn from(r: Range<f64>) -> ParamInterval {
        ParamInterval::new(r.start, r.end)
    }
}

impl From<ParamInterval> for Range<f64> {
    #[inline]
    fn from(i: ParamInterval) -> Range<f64> {
        i.low..i.high
    }
}
