// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Results of an intersection query.

use alloc::vec::Vec;
use core::slice;

use crate::{ControlPolygon, Point};

/// An intersection of two curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveHit {
    /// Parameter on the first curve.
    pub t: f64,
    /// Parameter on the second curve.
    pub s: f64,
}

impl CurveHit {
    /// Create a new hit.
    #[inline]
    pub const fn new(t: f64, s: f64) -> CurveHit {
        CurveHit { t, s }
    }

    /// The same hit with the curves' roles exchanged.
    #[inline]
    #[must_use]
    pub const fn swapped(self) -> CurveHit {
        CurveHit {
            t: self.s,
            s: self.t,
        }
    }
}

/// How a query ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ClipStatus {
    /// The whole parameter space was searched.
    #[default]
    Complete,
    /// The search stopped at the maximum number of intersections; more may
    /// exist.
    Truncated,
    /// The depth limit or call budget ran out in some branch, which may hide
    /// intersections.
    NotConverged,
}

/// Work done by a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipStats {
    /// Clips that narrowed a sub-curve.
    pub clips: usize,
    /// Subdivisions.
    pub splits: usize,
    /// Clipping or isolation iterations.
    pub iterations: usize,
    /// Sub-problems examined.
    pub calls: usize,
}

/// The intersections found by a query, with how the query ended.
///
/// `H` is [`CurveHit`] for curve/curve queries and the curve parameter `f64`
/// for curve/line queries. Hits are in traversal order.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersections<H> {
    hits: Vec<H>,
    status: ClipStatus,
    stats: ClipStats,
}

impl<H> Intersections<H> {
    pub(crate) fn new(hits: Vec<H>, status: ClipStatus, stats: ClipStats) -> Self {
        Intersections {
            hits,
            status,
            stats,
        }
    }

    /// The hits.
    #[inline]
    pub fn hits(&self) -> &[H] {
        &self.hits
    }

    /// How the query ended.
    #[inline]
    pub fn status(&self) -> ClipStatus {
        self.status
    }

    /// Work counters.
    #[inline]
    pub fn stats(&self) -> ClipStats {
        self.stats
    }

    /// Whether the whole parameter space was searched.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == ClipStatus::Complete
    }

    /// Number of hits.
    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether no intersection was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Iterate over the hits.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, H> {
        self.hits.iter()
    }

    /// Discard the status and keep the hits.
    #[inline]
    pub fn into_hits(self) -> Vec<H> {
        self.hits
    }
}

impl Intersections<CurveHit> {
    /// The intersection points, evaluated on the first curve.
    pub fn points(&self, a: &ControlPolygon) -> Vec<Point> {
        self.hits.iter().map(|hit| a.eval(hit.t)).collect()
    }
}

impl Intersections<f64> {
    /// The intersection points, evaluated on the curve.
    pub fn points(&self, curve: &ControlPolygon) -> Vec<Point> {
        self.hits.iter().map(|&t| curve.eval(t)).collect()
    }
}

impl<H> IntoIterator for Intersections<H> {
    type Item = H;
    type IntoIter = alloc::vec::IntoIter<H>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

impl<'a, H> IntoIterator for &'a Intersections<H> {
    type Item = &'a H;
    type IntoIter = slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let hits = vec![CurveHit::new(0.25, 0.5), CurveHit::new(0.75, 0.1)];
        let result = Intersections::new(hits, ClipStatus::Truncated, ClipStats::default());
        assert_eq!(result.len(), 2);
        assert!(!result.is_complete());
        assert_eq!(result.hits()[1].swapped(), CurveHit::new(0.1, 0.75));
        let ts: Vec<f64> = result.iter().map(|h| h.t).collect();
        assert_eq!(ts, [0.25, 0.75]);

        let line = ControlPolygon::new([(0.0, 0.0), (4.0, 0.0)]).unwrap();
        assert_eq!(
            result.points(&line),
            [Point::new(1.0, 0.0), Point::new(3.0, 0.0)]
        );
        assert_eq!(result.into_hits().len(), 2);
    }

    #[test]
    fn empty_is_complete() {
        let result: Intersections<f64> =
            Intersections::new(Vec::new(), ClipStatus::default(), ClipStats::default());
        assert!(result.is_empty());
        assert!(result.is_complete());
        assert_eq!((&result).into_iter().count(), 0);
    }
}
