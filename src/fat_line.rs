// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fat lines and clipping a curve's parameter range against them.

use arrayvec::ArrayVec;

use crate::bernstein::isolate_interval;
use crate::{ClipConfig, ControlPolygon, Point, Vec2, MAX_DEGREE};

/// A strip between two parallel lines that contains a control polygon.
///
/// The lines are `normal · p + cmin = 0` and `normal · p + cmax = 0` with
/// `cmin <= cmax`, so a point `q` lies inside exactly when
/// `-cmax <= normal · q <= -cmin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FatLine {
    /// Unit normal of the strip.
    pub normal: Vec2,
    /// Offset of the line on the normal's positive side.
    pub cmin: f64,
    /// Offset of the line on the normal's negative side.
    pub cmax: f64,
}

impl FatLine {
    /// The narrowest strip with the given normal containing all `points`.
    pub fn with_normal(normal: Vec2, points: &[Point]) -> FatLine {
        let (lo, hi) = points
            .iter()
            .map(|p| normal.dot(p.to_vec2()))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            });
        FatLine {
            normal,
            cmin: -hi,
            cmax: -lo,
        }
    }

    /// The fat line of a curve, oriented by its endpoint chord.
    ///
    /// When the endpoints are within `eps` of each other the strip is instead
    /// oriented along the segment from the start to the farthest control
    /// point, and a polygon collapsed to a single point gets the normal
    /// `(0, 1)`.
    pub fn from_control_poly(poly: &ControlPolygon, eps: f64) -> FatLine {
        FatLine::with_normal(chord_normal(poly, eps), poly.points())
    }

    /// A tighter fat line for quadratics and cubics.
    ///
    /// Interior control point distances from the chord are scaled by `1/2`
    /// for quadratics, and by `3/4` (both on one side) or `4/9` (opposite
    /// sides) for cubics, which still bounds the curve though no longer its
    /// control polygon. Other degrees and degenerate chords fall back to
    /// [`from_control_poly`](Self::from_control_poly).
    pub fn tight(poly: &ControlPolygon, eps: f64) -> FatLine {
        let pts = poly.points();
        let Some(normal) = (poly.end() - poly.start()).turn_90().try_normalize(eps) else {
            return FatLine::from_control_poly(poly, eps);
        };
        let base = normal.dot(poly.start().to_vec2());
        let d = |p: Point| normal.dot(p.to_vec2()) - base;
        let (lo, hi) = match pts {
            [_, p1, _] => {
                let d1 = 0.5 * d(*p1);
                (d1.min(0.0), d1.max(0.0))
            }
            [_, p1, p2, _] => {
                let (d1, d2) = (d(*p1), d(*p2));
                let factor = if d1 * d2 > 0.0 { 3.0 / 4.0 } else { 4.0 / 9.0 };
                let (d1, d2) = (d1 * factor, d2 * factor);
                (d1.min(d2).min(0.0), d1.max(d2).max(0.0))
            }
            _ => return FatLine::from_control_poly(poly, eps),
        };
        FatLine {
            normal,
            cmin: -(base + hi),
            cmax: -(base + lo),
        }
    }

    /// The strip perpendicular to this one that contains all `points`.
    pub fn perpendicular(&self, points: &[Point]) -> FatLine {
        FatLine::with_normal(self.normal.turn_90(), points)
    }

    /// Grow the strip by `eps` on both sides.
    #[must_use]
    pub fn widen(self, eps: f64) -> FatLine {
        FatLine {
            cmin: self.cmin - eps,
            cmax: self.cmax + eps,
            ..self
        }
    }

    /// Distance between the two lines.
    #[inline]
    pub fn width(&self) -> f64 {
        self.cmax - self.cmin
    }

    /// Whether `p` lies inside the strip.
    pub fn contains(&self, p: Point) -> bool {
        let d = self.normal.dot(p.to_vec2());
        -self.cmax <= d && d <= -self.cmin
    }
}

fn chord_normal(poly: &ControlPolygon, eps: f64) -> Vec2 {
    let start = poly.start();
    if let Some(n) = (poly.end() - start).turn_90().try_normalize(eps) {
        return n;
    }
    let farthest = poly
        .points()
        .iter()
        .map(|&p| p - start)
        .fold(Vec2::ZERO, |best, v| {
            if v.hypot2() > best.hypot2() {
                v
            } else {
                best
            }
        });
    farthest
        .turn_90()
        .try_normalize(eps)
        .unwrap_or(Vec2::new(0.0, 1.0))
}

/// Signed distances of a curve's control points from one side of a fat line.
///
/// Read as Bernstein coefficients this is a scalar polynomial that is
/// non-negative wherever the curve is on the inner side of that line.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceFunction {
    coeffs: ArrayVec<f64, { MAX_DEGREE + 1 }>,
}

impl DistanceFunction {
    /// Distances above the `cmax` line: `normal · q + cmax`.
    pub fn lower(fat: &FatLine, points: &[Point]) -> DistanceFunction {
        DistanceFunction {
            coeffs: points
                .iter()
                .map(|q| fat.normal.dot(q.to_vec2()) + fat.cmax)
                .collect(),
        }
    }

    /// Distances below the `cmin` line: `-(normal · q + cmin)`.
    pub fn upper(fat: &FatLine, points: &[Point]) -> DistanceFunction {
        DistanceFunction {
            coeffs: points
                .iter()
                .map(|q| -(fat.normal.dot(q.to_vec2()) + fat.cmin))
                .collect(),
        }
    }

    /// The coefficients, one per control point.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Narrow `bounds` to where the curve may be on the inner side.
    pub fn isolate(&self, bounds: (f64, f64)) -> Option<(f64, f64)> {
        isolate_interval(&self.coeffs, bounds)
    }
}

/// Outcome of clipping one curve against another's fat line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum HullClip {
    /// The clipped curve lies wholly outside the fat line.
    NoOverlap,
    /// Only local parameters in `[low, high]` can intersect.
    Clipped(f64, f64),
}

/// Clip `clipped` against the fat line of `bound`.
///
/// Both sides of the fat line are applied in turn. If the surviving range is
/// still wider than [`ClipConfig::perpendicular_threshold`], the strip
/// perpendicular to it that spans `bound` is applied as well. Every strip is
/// widened by `eps` so that touching curves are not rejected.
pub fn clip_to_fat_line(
    bound: &ControlPolygon,
    clipped: &ControlPolygon,
    config: &ClipConfig,
    eps: f64,
) -> HullClip {
    let fat = if config.tight_fat_lines {
        FatLine::tight(bound, eps)
    } else {
        FatLine::from_control_poly(bound, eps)
    };
    let pts = clipped.points();
    let Some(range) = clip_to_strip(&fat.widen(eps), pts, (0.0, 1.0)) else {
        return HullClip::NoOverlap;
    };
    if range.1 - range.0 <= config.perpendicular_threshold {
        return HullClip::Clipped(range.0, range.1);
    }
    let perp = fat.perpendicular(bound.points()).widen(eps);
    match clip_to_strip(&perp, pts, range) {
        Some((low, high)) => HullClip::Clipped(low, high),
        None => HullClip::NoOverlap,
    }
}

fn clip_to_strip(fat: &FatLine, pts: &[Point], bounds: (f64, f64)) -> Option<(f64, f64)> {
    let range = DistanceFunction::lower(fat, pts).isolate(bounds)?;
    DistanceFunction::upper(fat, pts).isolate(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn poly(pts: &[(f64, f64)]) -> ControlPolygon {
        ControlPolygon::new(pts.iter().copied()).unwrap()
    }

    #[test]
    fn quadratic_fat_line() {
        let q = poly(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
        let fat = FatLine::from_control_poly(&q, 1e-9);
        assert!((fat.normal.hypot() - 1.0).abs() < 1e-12);
        assert!((fat.width() - 2.0).abs() < 1e-12);
        assert!(q.points().iter().all(|&p| fat.contains(p)));

        let tight = FatLine::tight(&q, 1e-9);
        assert!((tight.width() - 1.0).abs() < 1e-12);
        assert!(q.sample(64).iter().all(|&p| tight.widen(1e-12).contains(p)));
    }

    #[test]
    fn tight_cubic_contains_curve() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..50 {
            let pts: Vec<Point> = (0..4)
                .map(|_| Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
                .collect();
            let c = ControlPolygon::new(pts).unwrap();
            let tight = FatLine::tight(&c, 1e-9).widen(1e-9);
            let loose = FatLine::from_control_poly(&c, 1e-9);
            assert!(tight.width() <= loose.width() + 2e-9);
            assert!(c.sample(100).iter().all(|&p| tight.contains(p)));
        }
    }

    #[test]
    fn degenerate_chord() {
        let closed = poly(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (0.0, 0.0)]);
        let fat = FatLine::from_control_poly(&closed, 1e-9);
        assert!((fat.normal.hypot() - 1.0).abs() < 1e-12);
        assert!(closed.points().iter().all(|&p| fat.contains(p)));
        assert!((fat.width() - 1.0).abs() < 1e-12);

        let point = poly(&[(3.0, 4.0), (3.0, 4.0), (3.0, 4.0)]);
        let fat = FatLine::from_control_poly(&point, 1e-9);
        assert_eq!(fat.normal, Vec2::new(0.0, 1.0));
        assert_eq!(fat.width(), 0.0);
        assert!(fat.contains(Point::new(3.0, 4.0)));
    }

    #[test]
    fn distance_functions() {
        let fat = FatLine {
            normal: Vec2::new(0.0, 1.0),
            cmin: -1.0,
            cmax: 1.0,
        };
        let pts = [Point::new(0.0, -2.0), Point::new(1.0, 0.0), Point::new(2.0, 3.0)];
        assert_eq!(DistanceFunction::lower(&fat, &pts).coeffs(), &[-1.0, 1.0, 4.0]);
        assert_eq!(DistanceFunction::upper(&fat, &pts).coeffs(), &[3.0, 1.0, -2.0]);
    }

    #[test]
    fn crossing_lines_clip_to_point() {
        let a = poly(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = poly(&[(5.0, -5.0), (5.0, 5.0)]);
        let config = ClipConfig::default();
        match clip_to_fat_line(&a, &b, &config, 1e-8) {
            HullClip::Clipped(low, high) => {
                assert!((low - 0.5).abs() < 1e-6 && (high - 0.5).abs() < 1e-6);
            }
            HullClip::NoOverlap => panic!("lines cross"),
        }
    }

    #[test]
    fn separated_curves() {
        let a = poly(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = poly(&[(0.0, 1.0), (10.0, 2.0)]);
        let config = ClipConfig::default();
        assert_eq!(clip_to_fat_line(&a, &b, &config, 1e-8), HullClip::NoOverlap);
    }

    #[test]
    fn perpendicular_strip() {
        let config = ClipConfig::default();
        let a = poly(&[(0.0, 0.0), (1.0, 0.0)]);
        // Collinear but disjoint: only the perpendicular strip rejects.
        let b = poly(&[(2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(clip_to_fat_line(&a, &b, &config, 1e-9), HullClip::NoOverlap);
        // Collinear and overlapping on local [0, 0.2].
        let b = poly(&[(0.5, 0.0), (3.0, 0.0)]);
        match clip_to_fat_line(&a, &b, &config, 1e-9) {
            HullClip::Clipped(low, high) => {
                assert_eq!(low, 0.0);
                assert!((high - 0.2).abs() < 1e-6);
            }
            HullClip::NoOverlap => panic!("segments overlap"),
        }
    }
}
