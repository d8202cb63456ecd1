// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root isolation for scalar polynomials in Bernstein form.
//!
//! A sequence `c_0 ..= c_n` of Bernstein coefficients defines a polynomial on
//! `[0, 1]` whose graph lies in the convex hull of the control points
//! `(k / n, c_k)`. Intersecting that hull with a half-plane or with the axis
//! bounds where the polynomial can be non-negative or zero.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Distance a proposed bound may lie past the caller's bound before the
/// interval is considered empty.
const BOUND_SLACK: f64 = 1e-6;

/// Abscissa where the segment from control point `i` to control point `j`
/// crosses zero, `(i + c_i / (c_i - c_j) * (j - i)) / n`.
#[inline]
fn crossing(coeffs: &[f64], i: usize, j: usize, span: f64) -> f64 {
    let (ci, cj) = (coeffs[i], coeffs[j]);
    let (fi, fj) = (i as f64, j as f64);
    (fi + ci / (ci - cj) * (fj - fi)) * span
}

/// Smallest and largest crossing over pairs with `c_i` on the rejected side
/// and `c_j` on the kept side.
fn crossing_extent(
    coeffs: &[f64],
    rejected: impl Fn(f64) -> bool,
    kept: impl Fn(f64) -> bool,
) -> Option<(f64, f64)> {
    let span = 1.0 / (coeffs.len() - 1) as f64;
    let mut extent: Option<(f64, f64)> = None;
    for (i, &ci) in coeffs.iter().enumerate() {
        if !rejected(ci) {
            continue;
        }
        for (j, &cj) in coeffs.iter().enumerate() {
            if !kept(cj) {
                continue;
            }
            let t = crossing(coeffs, i, j, span);
            extent = Some(match extent {
                Some((lo, hi)) => (lo.min(t), hi.max(t)),
                None => (t, t),
            });
        }
    }
    extent
}

/// The sub-interval of `[0, 1]` where the polynomial can be non-negative,
/// intersected with `bounds`.
///
/// The cut on each side comes from the convex hull of the coefficients:
///
/// * `(+ .. -)`: the end is cut, `[0, tmax]`.
/// * `(- .. +)`: the start is cut, `[tmin, 1]`.
/// * `(+ .. +)`: no cut.
/// * `(- .. -)` with a non-negative interior coefficient: both ends are cut.
///
/// Returns `None` when every coefficient is negative, or when the cut lies
/// more than `1e-6` beyond the opposite end of `bounds`.
pub fn isolate_interval(coeffs: &[f64], bounds: (f64, f64)) -> Option<(f64, f64)> {
    let n = coeffs.len();
    if n < 2 || coeffs.iter().all(|&c| c < 0.0) {
        return None;
    }
    let Some((lo, hi)) = crossing_extent(coeffs, |c| c < 0.0, |c| c >= 0.0) else {
        return Some(bounds);
    };
    let (tmin, tmax) = match (coeffs[0] >= 0.0, coeffs[n - 1] >= 0.0) {
        (true, true) => (0.0, 1.0),
        (true, false) => (0.0, hi),
        (false, true) => (lo, 1.0),
        (false, false) => (lo, hi),
    };
    let (low, high) = bounds;
    if tmin > high + BOUND_SLACK || tmax < low - BOUND_SLACK {
        return None;
    }
    let low = low.max(tmin);
    let high = high.min(tmax);
    if low > high {
        // Only possible within the slack; collapse onto the touching point.
        let mid = 0.5 * (low + high);
        return Some((mid, mid));
    }
    Some((low, high))
}

/// The span on `[0, 1]` where the convex hull of the coefficients meets the
/// axis, which contains every root of the polynomial.
///
/// Coefficients within `zero` of zero count as roots at their own abscissa.
/// Returns `None` when all coefficients are strictly on one side.
pub fn crossing_span(coeffs: &[f64], zero: f64) -> Option<(f64, f64)> {
    let n = coeffs.len();
    if n < 2 {
        return None;
    }
    let span = 1.0 / (n - 1) as f64;
    let mut extent = coeffs
        .iter()
        .enumerate()
        .filter(|(_, c)| c.abs() <= zero)
        .map(|(k, _)| k as f64 * span)
        .fold(None, |acc: Option<(f64, f64)>, t| match acc {
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            None => Some((t, t)),
        });
    if let Some((lo, hi)) = crossing_extent(coeffs, |c| c < -zero, |c| c > zero) {
        extent = Some(match extent {
            Some((a, b)) => (a.min(lo), b.max(hi)),
            None => (lo, hi),
        });
    }
    extent
}

/// Classification of a coefficient sequence by the signs at its ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignPattern {
    /// Both ends and every interior coefficient are on the same side of
    /// zero: no root.
    Reject,
    /// Both ends are on the same side but some interior coefficient is on the
    /// other: there may be an even number of roots that the hull cannot
    /// separate, so the interval should be bisected.
    Split,
    /// The ends differ in sign or touch zero.
    Mixed,
}

/// Classify `coeffs`, treating values within `zero` of zero as zero.
pub fn sign_pattern(coeffs: &[f64], zero: f64) -> SignPattern {
    let (Some(&first), Some(&last)) = (coeffs.first(), coeffs.last()) else {
        return SignPattern::Reject;
    };
    let interior = if coeffs.len() > 2 {
        &coeffs[1..coeffs.len() - 1]
    } else {
        &[]
    };
    if first > zero && last > zero {
        if interior.iter().any(|&c| c < -zero) {
            SignPattern::Split
        } else {
            SignPattern::Reject
        }
    } else if first < -zero && last < -zero {
        if interior.iter().any(|&c| c > zero) {
            SignPattern::Split
        } else {
            SignPattern::Reject
        }
    } else {
        SignPattern::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_span(actual: Option<(f64, f64)>, lo: f64, hi: f64) {
        let (a, b) = actual.expect("expected an interval");
        assert!((a - lo).abs() < 1e-12, "low {a} != {lo}");
        assert!((b - hi).abs() < 1e-12, "high {b} != {hi}");
    }

    #[test]
    fn isolate_sign_cases() {
        // (+ .. +)
        assert_span(isolate_interval(&[1.0, -0.5, 1.0], (0.0, 1.0)), 0.0, 1.0);
        // (+ .. -)
        assert_span(isolate_interval(&[1.0, -1.0], (0.0, 1.0)), 0.0, 0.5);
        // (- .. +)
        assert_span(isolate_interval(&[-1.0, 3.0], (0.0, 1.0)), 0.25, 1.0);
        // (- .. -) with positive interior
        assert_span(
            isolate_interval(&[-1.0, 1.0, 1.0, -1.0], (0.0, 1.0)),
            1.0 / 6.0,
            5.0 / 6.0,
        );
    }

    #[test]
    fn isolate_rejects() {
        assert_eq!(isolate_interval(&[-1.0, -2.0, -0.1], (0.0, 1.0)), None);
        // The cut at 0.5 lies entirely below the caller's bounds.
        assert_eq!(isolate_interval(&[1.0, -1.0], (0.6, 1.0)), None);
        // Within the slack the interval collapses instead.
        let (a, b) = isolate_interval(&[1.0, -1.0], (0.5 + 1e-7, 1.0)).unwrap();
        assert!(a <= b && (a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn isolate_respects_bounds() {
        assert_span(isolate_interval(&[-1.0, 3.0], (0.4, 0.9)), 0.4, 0.9);
        assert_span(isolate_interval(&[-1.0, 3.0], (0.1, 0.9)), 0.25, 0.9);
    }

    #[test]
    fn crossing_spans() {
        assert_span(crossing_span(&[-1.0, 1.0], 0.0), 0.5, 0.5);
        assert_eq!(crossing_span(&[1.0, 2.0, 3.0], 1e-12), None);
        assert_span(crossing_span(&[0.0, 1.0, 2.0], 1e-12), 0.0, 0.0);
        assert_span(
            crossing_span(&[-1.0, 1.0, 1.0, -1.0], 0.0),
            1.0 / 6.0,
            5.0 / 6.0,
        );
    }

    /// The span always contains the true roots of the polynomial.
    #[test]
    fn crossing_span_contains_roots() {
        // (t - 0.3)(t - 0.6) = t^2 - 0.9t + 0.18 in the quadratic Bernstein
        // basis is [0.18, 0.18 - 0.45, 1 - 0.9 + 0.18].
        let coeffs = [0.18, -0.27, 0.28];
        let (lo, hi) = crossing_span(&coeffs, 0.0).unwrap();
        assert!(lo <= 0.3 && hi >= 0.6);
    }

    #[test]
    fn sign_patterns() {
        assert_eq!(sign_pattern(&[1.0, -1.0, 1.0], 1e-9), SignPattern::Split);
        assert_eq!(sign_pattern(&[-1.0, 1.0, -1.0], 1e-9), SignPattern::Split);
        assert_eq!(sign_pattern(&[1.0, 0.5, 1.0], 1e-9), SignPattern::Reject);
        assert_eq!(sign_pattern(&[-1.0, -2.0], 1e-9), SignPattern::Reject);
        assert_eq!(sign_pattern(&[1.0, -1.0], 1e-9), SignPattern::Mixed);
        assert_eq!(sign_pattern(&[0.0, 1.0, 1.0], 1e-9), SignPattern::Mixed);
    }
}
