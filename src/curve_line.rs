// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections of a curve with a line.
//!
//! Projecting the curve's control points on the line's unit normal gives the
//! Bernstein coefficients of the signed distance from the line, whose roots
//! are exactly the intersection parameters. No fat line is needed.

use alloc::vec::Vec;

use tracing::{debug, trace, warn};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::bernstein::{crossing_span, sign_pattern, SignPattern};
use crate::common::magnitude;
use crate::subdivide::{split_at, trim_to_interval, Coeffs};
use crate::{
    ClipConfig, ClipError, ClipEvent, ClipObserver, ClipStats, ClipStatus, ControlPolygon,
    CurveSide, Intersections, Line, NoopObserver, ParamInterval,
};

/// Find the parameters where `curve` crosses the unbounded line through
/// `line.p0` and `line.p1`.
///
/// Roots closer than `config.tolerance` are reported once, and the result is
/// sorted by parameter.
///
/// # Errors
///
/// Returns [`ClipError::DegenerateLine`] when the line's endpoints coincide,
/// and [`ClipError::InvalidConfig`] for an invalid `config`.
///
/// # Examples
///
/// ```
/// use bezclip::{curve_line_intersections, ClipConfig, ControlPolygon, Line};
///
/// let arch = ControlPolygon::new([(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)])?;
/// let line = Line::new((0.0, 0.5), (2.0, 0.5));
/// let hits = curve_line_intersections(&arch, &line, &ClipConfig::default())?;
/// assert_eq!(hits.len(), 2);
/// # Ok::<(), bezclip::ClipError>(())
/// ```
pub fn curve_line_intersections(
    curve: &ControlPolygon,
    line: &Line,
    config: &ClipConfig,
) -> Result<Intersections<f64>, ClipError> {
    curve_line_intersections_observed(curve, line, config, &mut NoopObserver)
}

/// [`curve_line_intersections`], reporting intermediate state to `observer`.
///
/// # Errors
///
/// See [`curve_line_intersections`].
pub fn curve_line_intersections_observed(
    curve: &ControlPolygon,
    line: &Line,
    config: &ClipConfig,
    observer: &mut dyn ClipObserver,
) -> Result<Intersections<f64>, ClipError> {
    config.validate()?;
    let zero = config.distance_epsilon
        * magnitude(curve.points().iter().chain([&line.p0, &line.p1]));
    if line.unit_normal(zero).is_none() {
        return Err(ClipError::DegenerateLine);
    }
    debug!(
        degree = curve.degree(),
        tolerance = config.tolerance,
        "curve/line intersection"
    );
    let coeffs: Coeffs<f64> = curve
        .points()
        .iter()
        .map(|&q| line.signed_distance(q))
        .collect();

    let mut search = RootSearch {
        config,
        zero,
        roots: Vec::new(),
        stats: ClipStats::default(),
        truncated: false,
        exhausted: false,
        observer,
    };
    search.find_roots(coeffs, ParamInterval::UNIT, 0);
    search.roots.sort_by(f64::total_cmp);

    let status = if search.truncated {
        ClipStatus::Truncated
    } else if search.exhausted {
        ClipStatus::NotConverged
    } else {
        ClipStatus::Complete
    };
    debug!(
        hits = search.roots.len(),
        ?status,
        clips = search.stats.clips,
        splits = search.stats.splits,
        "curve/line intersection done"
    );
    Ok(Intersections::new(search.roots, status, search.stats))
}

enum Converge {
    Hit(f64),
    Split,
    Reject,
}

struct RootSearch<'a> {
    config: &'a ClipConfig,
    zero: f64,
    roots: Vec<f64>,
    stats: ClipStats,
    truncated: bool,
    exhausted: bool,
    observer: &'a mut dyn ClipObserver,
}

impl RootSearch<'_> {
    fn done(&self) -> bool {
        self.truncated || (self.config.single_hit && !self.roots.is_empty())
    }

    fn find_roots(&mut self, mut coeffs: Coeffs<f64>, mut interval: ParamInterval, depth: usize) {
        if self.done() {
            return;
        }
        self.stats.calls += 1;
        if depth > self.config.max_depth || self.stats.calls > self.config.max_calls {
            if !self.exhausted {
                warn!(
                    depth,
                    calls = self.stats.calls,
                    "curve/line search budget exhausted"
                );
            }
            self.exhausted = true;
            return;
        }
        match self.converge(&mut coeffs, &mut interval) {
            Converge::Reject => {}
            Converge::Hit(t) => self.record(t),
            Converge::Split => {
                self.stats.splits += 1;
                trace!(low = interval.low, high = interval.high, "bisect");
                let (left, right) = split_at(&coeffs, 0.5);
                let (left_interval, right_interval) = interval.split(0.5);
                self.find_roots(left, left_interval, depth + 1);
                self.find_roots(right, right_interval, depth + 1);
            }
        }
        self.observer.progress(self.stats);
    }

    /// Narrow `coeffs` and `interval` around a root until it is isolated
    /// within tolerance, or decide that the range must be bisected.
    fn converge(&mut self, coeffs: &mut Coeffs<f64>, interval: &mut ParamInterval) -> Converge {
        let config = self.config;
        for _ in 0..config.max_root_rounds {
            self.stats.iterations += 1;
            match sign_pattern(coeffs, self.zero) {
                SignPattern::Reject => return Converge::Reject,
                SignPattern::Split if interval.width() < config.tolerance => {
                    return Converge::Hit(interval.mid());
                }
                SignPattern::Split => return Converge::Split,
                SignPattern::Mixed => {}
            }
            let Some((lo, hi)) = crossing_span(coeffs, self.zero) else {
                return Converge::Reject;
            };
            let next = interval.sub(lo, hi);
            if next.width() < config.tolerance {
                return Converge::Hit(next.mid());
            }
            if lo < config.min_cut && hi > 1.0 - config.min_cut {
                return Converge::Split;
            }
            trim_to_interval(coeffs, lo, hi);
            *interval = next;
            self.stats.clips += 1;
            trace!(low = next.low, high = next.high, "clip");
            self.observer.clipped(&ClipEvent {
                side: CurveSide::A,
                interval: next,
                polygon: None,
            });
        }
        Converge::Split
    }

    fn record(&mut self, t: f64) {
        let t = t.clamp(0.0, 1.0);
        if self.config.merge_duplicates
            && self
                .roots
                .iter()
                .any(|r| (r - t).abs() < self.config.tolerance)
        {
            return;
        }
        if self.roots.len() >= self.config.max_intersections {
            debug!(max = self.config.max_intersections, "intersection cap reached");
            self.truncated = true;
            return;
        }
        self.roots.push(t);
    }
}
