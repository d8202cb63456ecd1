// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier control polygons.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::subdivide::{self, Coeffs};
use crate::{ClipError, Line, Point};

/// Highest curve degree accepted by the intersection routines.
pub const MAX_DEGREE: usize = 9;

/// The control points of a Bézier curve of arbitrary degree.
///
/// The order of the points is the Bernstein basis index and so defines the
/// curve. A polygon of `n + 1` points describes a curve of degree `n`.
/// Construction validates the polygon: at least two points, at most
/// [`MAX_DEGREE`]` + 1`, and finite coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct ControlPolygon {
    pts: Coeffs<Point>,
}

impl ControlPolygon {
    /// Create a control polygon from its points.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::TooFewPoints`], [`ClipError::DegreeTooHigh`] or
    /// [`ClipError::NonFinite`] when the points do not describe a supported
    /// curve.
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Result<Self, ClipError> {
        let pts: Coeffs<Point> = points.into_iter().map(Into::into).collect();
        if pts.len() < 2 {
            return Err(ClipError::TooFewPoints(pts.len()));
        }
        if pts.len() > MAX_DEGREE + 1 {
            return Err(ClipError::DegreeTooHigh {
                degree: pts.len() - 1,
                max: MAX_DEGREE,
            });
        }
        if let Some(index) = pts.iter().position(|p| !p.is_finite()) {
            return Err(ClipError::NonFinite { index });
        }
        Ok(ControlPolygon { pts })
    }

    /// Create a control polygon from points with per-point weights.
    ///
    /// Only polynomial curves are supported, so every weight must be exactly
    /// `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::WeightCountMismatch`] when the slices differ in
    /// length, [`ClipError::RationalWeight`] for the first weight other than
    /// `1.0`, and otherwise the errors of [`new`](Self::new).
    pub fn from_weighted(points: &[Point], weights: &[f64]) -> Result<Self, ClipError> {
        if points.len() != weights.len() {
            return Err(ClipError::WeightCountMismatch {
                points: points.len(),
                weights: weights.len(),
            });
        }
        if let Some((index, &weight)) = weights.iter().enumerate().find(|&(_, &w)| w != 1.0) {
            return Err(ClipError::RationalWeight { index, weight });
        }
        ControlPolygon::new(points.iter().copied())
    }

    /// Build a polygon from coefficients produced by subdivision.
    ///
    /// The caller guarantees the length came from an already validated polygon.
    #[inline]
    pub(crate) fn from_coeffs(pts: Coeffs<Point>) -> Self {
        debug_assert!(
            (2..=MAX_DEGREE + 1).contains(&pts.len()),
            "subdivision preserves the degree"
        );
        ControlPolygon { pts }
    }

    /// The degree of the curve.
    #[inline]
    pub fn degree(&self) -> usize {
        self.pts.len() - 1
    }

    /// The control points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.pts[0]
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.pts[self.pts.len() - 1]
    }

    /// Evaluate the curve at parameter `u` with de Casteljau's algorithm.
    ///
    /// Values of `u` outside `[0, 1]` extrapolate the curve.
    pub fn eval(&self, u: f64) -> Point {
        let mut w = self.pts.clone();
        let n = w.len();
        for level in 1..n {
            for j in 0..n - level {
                w[j] = w[j].lerp(w[j + 1], u);
            }
        }
        w[0]
    }

    /// `ndiv + 1` points at evenly spaced parameters from 0 to 1.
    pub fn sample(&self, ndiv: usize) -> Vec<Point> {
        let ndiv = ndiv.max(1);
        (0..=ndiv)
            .map(|i| self.eval(i as f64 / ndiv as f64))
            .collect()
    }

    /// Split at `t` into the sub-curves over `[0, t]` and `[t, 1]`.
    pub fn split_at(&self, t: f64) -> (ControlPolygon, ControlPolygon) {
        let (left, right) = subdivide::split_at(&self.pts, t);
        (
            ControlPolygon::from_coeffs(left),
            ControlPolygon::from_coeffs(right),
        )
    }

    /// Subdivide into halves.
    #[inline]
    pub fn subdivide(&self) -> (ControlPolygon, ControlPolygon) {
        self.split_at(0.5)
    }

    /// Keep only the `[t, 1]` portion.
    pub fn trim_left(&mut self, t: f64) {
        subdivide::trim_left(&mut self.pts, t);
    }

    /// Keep only the `[0, t]` portion.
    pub fn trim_right(&mut self, t: f64) {
        subdivide::trim_right(&mut self.pts, t);
    }

    /// Keep only the `[low, high]` portion.
    pub fn trim_to_interval(&mut self, low: f64, high: f64) {
        subdivide::trim_to_interval(&mut self.pts, low, high);
    }

    /// The sub-curve over `[low, high]`.
    #[must_use]
    pub fn subsegment(&self, low: f64, high: f64) -> ControlPolygon {
        let mut sub = self.clone();
        sub.trim_to_interval(low, high);
        sub
    }

    /// Minimum and maximum corners of the control points' bounding box.
    ///
    /// By the convex hull property the curve lies inside this box.
    pub fn bounds(&self) -> (Point, Point) {
        let first = self.pts[0];
        self.pts.iter().skip(1).fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        })
    }

    /// The segment from the start point to the end point.
    pub fn chord(&self) -> Line {
        Line::new(self.start(), self.end())
    }

    /// Largest distance from an inner control point to the [`chord`](Self::chord).
    ///
    /// The curve lies within this distance of its chord segment, so two
    /// curves whose chords are further apart than the sum of their
    /// flatnesses cannot meet.
    pub fn flatness(&self) -> f64 {
        let chord = self.chord();
        let n = self.pts.len();
        self.pts[1..n - 1]
            .iter()
            .map(|&p| chord.nearest(p).1)
            .fold(0.0, f64::max)
            .sqrt()
    }
}

impl TryFrom<Vec<Point>> for ControlPolygon {
    type Error = ClipError;

    fn try_from(points: Vec<Point>) -> Result<Self, ClipError> {
        ControlPolygon::new(points)
    }
}

impl From<ControlPolygon> for Vec<Point> {
    fn from(poly: ControlPolygon) -> Vec<Point> {
        poly.pts.into_vec()
    }
}

/// Inclusive overlap test of two bounding boxes grown by `eps`.
///
/// Touching boxes overlap, so curves meeting at a shared endpoint are kept.
pub(crate) fn bounds_overlap(a: (Point, Point), b: (Point, Point), eps: f64) -> bool {
    a.0.x <= b.1.x + eps && b.0.x <= a.1.x + eps && a.0.y <= b.1.y + eps && b.0.y <= a.1.y + eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn validation() {
        assert_eq!(
            ControlPolygon::new([(0.0, 0.0)]),
            Err(ClipError::TooFewPoints(1))
        );
        let many: Vec<(f64, f64)> = (0..11).map(|i| (i as f64, 0.0)).collect();
        assert_eq!(
            ControlPolygon::new(many),
            Err(ClipError::DegreeTooHigh { degree: 10, max: 9 })
        );
        assert_eq!(
            ControlPolygon::new([(0.0, 0.0), (f64::NAN, 1.0)]),
            Err(ClipError::NonFinite { index: 1 })
        );
        let ok = ControlPolygon::new([(0.0, 0.0), (1.0, 2.0), (3.0, 0.0)]).unwrap();
        assert_eq!(ok.degree(), 2);
        assert_eq!(ok.start(), Point::new(0.0, 0.0));
        assert_eq!(ok.end(), Point::new(3.0, 0.0));
    }

    #[test]
    fn weighted() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(ControlPolygon::from_weighted(&pts, &[1.0, 1.0]).is_ok());
        assert_eq!(
            ControlPolygon::from_weighted(&pts, &[1.0, 0.5]),
            Err(ClipError::RationalWeight {
                index: 1,
                weight: 0.5
            })
        );
        assert_eq!(
            ControlPolygon::from_weighted(&pts, &[1.0]),
            Err(ClipError::WeightCountMismatch {
                points: 2,
                weights: 1
            })
        );
    }

    #[test]
    fn eval_quadratic() {
        let q = ControlPolygon::new([(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]).unwrap();
        assert_eq!(q.eval(0.0), Point::new(0.0, 0.0));
        assert_eq!(q.eval(0.5), Point::new(1.0, 1.0));
        assert_eq!(q.eval(1.0), Point::new(2.0, 0.0));
        // Extrapolation is allowed.
        assert_eq!(q.eval(2.0), Point::new(4.0, -8.0));
    }

    #[test]
    fn sampling() {
        let l = ControlPolygon::new([(0.0, 0.0), (4.0, 0.0)]).unwrap();
        let s = l.sample(4);
        assert_eq!(s.len(), 5);
        assert_eq!(s[1], Point::new(1.0, 0.0));
        assert_eq!(s[4], Point::new(4.0, 0.0));
        assert_eq!(l.sample(0).len(), 2);
    }

    #[test]
    fn subsegment_matches_eval() {
        let c = ControlPolygon::new([(0.0, 0.0), (1.0, 3.0), (3.0, -2.0), (4.0, 1.0)]).unwrap();
        let sub = c.subsegment(0.2, 0.7);
        for i in 0..=4 {
            let u = i as f64 / 4.0;
            assert!(sub.eval(u).distance(c.eval(0.2 + 0.5 * u)) < 1e-12);
        }
    }

    /// Every sample of a random curve lies inside the convex hull of its
    /// control points, checked through the hull's support function.
    #[test]
    fn convex_hull_containment() {
        let mut rng = StdRng::seed_from_u64(0xb0b);
        for degree in 2..=MAX_DEGREE {
            for _ in 0..25 {
                let pts: Vec<Point> = (0..=degree)
                    .map(|_| Point::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)))
                    .collect();
                let poly = ControlPolygon::new(pts.clone()).unwrap();
                for i in 0..=40 {
                    let p = poly.eval(i as f64 / 40.0);
                    for k in 0..64 {
                        let th = k as f64 * core::f64::consts::TAU / 64.0;
                        let dir = crate::Vec2::new(th.cos(), th.sin());
                        let support = pts
                            .iter()
                            .map(|q| dir.dot(q.to_vec2()))
                            .fold(f64::NEG_INFINITY, f64::max);
                        assert!(dir.dot(p.to_vec2()) <= support + 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn bounds_and_overlap() {
        let c = ControlPolygon::new([(0.0, 1.0), (2.0, -1.0), (1.0, 3.0)]).unwrap();
        assert_eq!(c.bounds(), (Point::new(0.0, -1.0), Point::new(2.0, 3.0)));
        let touching = (Point::new(2.0, 3.0), Point::new(5.0, 5.0));
        assert!(bounds_overlap(c.bounds(), touching, 0.0));
        let apart = (Point::new(2.5, 0.0), Point::new(5.0, 5.0));
        assert!(!bounds_overlap(c.bounds(), apart, 0.0));
        assert!(bounds_overlap(c.bounds(), apart, 0.5));
    }

    #[test]
    fn chord_and_flatness() {
        let arch = ControlPolygon::new([(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]).unwrap();
        assert_eq!(arch.chord(), Line::new((0.0, 0.0), (2.0, 0.0)));
        assert_eq!(arch.flatness(), 2.0);
        let line = ControlPolygon::new([(0.0, 0.0), (3.0, 4.0)]).unwrap();
        assert_eq!(line.flatness(), 0.0);

        let mut rng = StdRng::seed_from_u64(0xf1a7);
        for degree in 1..=MAX_DEGREE {
            for _ in 0..25 {
                let poly = ControlPolygon::new(
                    (0..=degree)
                        .map(|_| (rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0))),
                )
                .unwrap();
                let (chord, flatness) = (poly.chord(), poly.flatness());
                for i in 0..=40 {
                    let p = poly.eval(i as f64 / 40.0);
                    assert!(chord.nearest(p).1.sqrt() <= flatness + 1e-9);
                }
            }
        }
    }
}
