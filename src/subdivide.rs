// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! De Casteljau subdivision of Bernstein coefficient sequences.
//!
//! These work on any coefficient type that can be linearly blended: control
//! points of a planar curve as well as the scalar distance functions used by
//! the root isolator. The first coefficient is the Bernstein index 0.

use smallvec::SmallVec;

use crate::{Point, MAX_DEGREE};

/// Inline storage for a coefficient sequence of any supported degree.
pub type Coeffs<T> = SmallVec<[T; MAX_DEGREE + 1]>;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// `self + (other - self) * t`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    #[inline]
    fn lerp(self, other: f64, t: f64) -> f64 {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    #[inline]
    fn lerp(self, other: Point, t: f64) -> Point {
        Point::lerp(self, other, t)
    }
}

/// Below this distance from 1 a trim end is treated as the curve's end.
const TRIM_END_GUARD: f64 = 1e-6;

/// Split at `t` with de Casteljau.
///
/// The left result covers local `[0, t]`, the right result `[t, 1]`. Both have
/// the degree of the input and together reproduce it exactly.
pub fn split_at<T: Lerp>(coeffs: &[T], t: f64) -> (Coeffs<T>, Coeffs<T>) {
    let n = coeffs.len();
    let mut right: Coeffs<T> = coeffs.iter().copied().collect();
    let mut left = Coeffs::with_capacity(n);
    if n == 0 {
        return (left, right);
    }
    left.push(right[0]);
    for level in 1..n {
        for j in 0..n - level {
            right[j] = right[j].lerp(right[j + 1], t);
        }
        left.push(right[0]);
    }
    (left, right)
}

/// Keep the `[t, 1]` portion, in place.
pub fn trim_left<T: Lerp>(coeffs: &mut [T], t: f64) {
    let n = coeffs.len();
    for level in 1..n {
        for j in 0..n - level {
            coeffs[j] = coeffs[j].lerp(coeffs[j + 1], t);
        }
    }
}

/// Keep the `[0, t]` portion, in place.
pub fn trim_right<T: Lerp>(coeffs: &mut [T], t: f64) {
    let n = coeffs.len();
    for level in 1..n {
        for j in (level..n).rev() {
            coeffs[j] = coeffs[j - 1].lerp(coeffs[j], t);
        }
    }
}

/// Keep the `[low, high]` portion, in place.
///
/// Trims the left end first, then the right end at the rescaled parameter
/// `(high - low) / (1 - low)`. When `high` is within `1e-6` of 1 the second
/// trim is skipped, which also keeps the rescaling away from a zero divisor.
pub fn trim_to_interval<T: Lerp>(coeffs: &mut [T], low: f64, high: f64) {
    if low > 0.0 {
        trim_left(coeffs, low);
    }
    if high < 1.0 - TRIM_END_GUARD {
        trim_right(coeffs, (high - low) / (1.0 - low));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ControlPolygon;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_poly(rng: &mut StdRng, degree: usize) -> ControlPolygon {
        let pts: Vec<Point> = (0..=degree)
            .map(|_| Point::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)))
            .collect();
        ControlPolygon::new(pts).unwrap()
    }

    fn assert_near(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn split_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for degree in 1..=MAX_DEGREE {
            for _ in 0..20 {
                let poly = random_poly(&mut rng, degree);
                let t = rng.random_range(0.01..0.99);
                let (left, right) = split_at(poly.points(), t);
                assert_eq!(left.len(), degree + 1);
                assert_eq!(right.len(), degree + 1);
                assert_eq!(left[degree], right[0]);
                let left = ControlPolygon::new(left).unwrap();
                let right = ControlPolygon::new(right).unwrap();
                for i in 0..=10 {
                    let u = i as f64 / 10.0;
                    assert_near(left.eval(u), poly.eval(t * u));
                    assert_near(right.eval(u), poly.eval(t + u * (1.0 - t)));
                }
            }
        }
    }

    #[test]
    fn trims_match_split() {
        let mut rng = StdRng::seed_from_u64(7);
        for degree in 2..=MAX_DEGREE {
            let poly = random_poly(&mut rng, degree);
            let t = rng.random_range(0.1..0.9);
            let (left, right) = split_at(poly.points(), t);

            let mut trimmed: Vec<Point> = poly.points().to_vec();
            trim_right(&mut trimmed, t);
            for (a, b) in trimmed.iter().zip(&left) {
                assert_near(*a, *b);
            }

            let mut trimmed: Vec<Point> = poly.points().to_vec();
            trim_left(&mut trimmed, t);
            for (a, b) in trimmed.iter().zip(&right) {
                assert_near(*a, *b);
            }
        }
    }

    #[test]
    fn trim_to_interval_maps_parameters() {
        let mut rng = StdRng::seed_from_u64(99);
        for degree in 1..=MAX_DEGREE {
            let poly = random_poly(&mut rng, degree);
            let a = rng.random_range(0.0..0.5);
            let b = rng.random_range(0.5..1.0);
            let mut pts: Vec<Point> = poly.points().to_vec();
            trim_to_interval(&mut pts, a, b);
            let sub = ControlPolygon::new(pts).unwrap();
            for i in 0..=8 {
                let u = i as f64 / 8.0;
                assert_near(sub.eval(u), poly.eval(a + u * (b - a)));
            }
        }
    }

    #[test]
    fn trim_to_interval_near_end() {
        let mut c = [0.0, 3.0, -1.0, 2.0];
        let orig = c;
        // `high` this close to 1 must only trim the left end.
        trim_to_interval(&mut c, 0.5, 1.0 - 1e-9);
        let mut expected = orig;
        trim_left(&mut expected, 0.5);
        assert_eq!(c, expected);
        // A degenerate interval at the end collapses to the end value.
        let mut c = orig;
        trim_to_interval(&mut c, 1.0, 1.0);
        assert!(c.iter().all(|v| (v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn scalar_split() {
        // 1 - 2t in Bernstein form is [1, -1].
        let (l, r) = split_at(&[1.0, -1.0], 0.5);
        assert_eq!(l.as_slice(), &[1.0, 0.0]);
        assert_eq!(r.as_slice(), &[0.0, -1.0]);
    }
}
