// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections of two Bézier curves by Bézier clipping.
//!
//! Each curve is repeatedly clipped against the fat line of the other. When
//! clipping stops making progress, one or both curves are subdivided and the
//! search recurses on the sub-curve pairs. Once both parameter ranges are
//! narrower than the tolerance, the two pieces must still be shown to meet:
//! their chords, widened by each piece's flatness, have to touch before the
//! pair is reported.

use alloc::vec::Vec;

use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::common::magnitude;
use crate::control_poly::bounds_overlap;
use crate::fat_line::{clip_to_fat_line, HullClip};
use crate::{
    ClipConfig, ClipError, ClipEvent, ClipObserver, ClipStats, ClipStatus, ControlPolygon,
    CurveHit, CurveSide, Intersections, NoopObserver, ParamInterval, Point,
};

/// Find the intersections of curves `a` and `b`.
///
/// Each hit pairs the parameter `t` on `a` with the parameter `s` on `b`,
/// both accurate to about `config.tolerance`. Hits are in traversal order,
/// which is not sorted in general.
///
/// Curves that pass closer than about `tolerance² ×` their combined extent
/// without crossing may be reported as touching.
///
/// Exactly coincident curve segments have no isolated intersections; for them
/// the search reports hits along the overlap until it is truncated or runs
/// out of budget.
///
/// # Errors
///
/// Returns [`ClipError::InvalidConfig`] for an invalid `config`.
///
/// # Examples
///
/// ```
/// use bezclip::{curve_curve_intersections, ClipConfig, ControlPolygon};
///
/// let a = ControlPolygon::new([(0.0, 0.0), (10.0, 10.0)])?;
/// let b = ControlPolygon::new([(0.0, 10.0), (10.0, 0.0)])?;
/// let hits = curve_curve_intersections(&a, &b, &ClipConfig::default())?;
/// assert_eq!(hits.len(), 1);
/// assert!((hits.hits()[0].t - 0.5).abs() < 0.01);
/// # Ok::<(), bezclip::ClipError>(())
/// ```
pub fn curve_curve_intersections(
    a: &ControlPolygon,
    b: &ControlPolygon,
    config: &ClipConfig,
) -> Result<Intersections<CurveHit>, ClipError> {
    curve_curve_intersections_observed(a, b, config, &mut NoopObserver)
}

/// [`curve_curve_intersections`], reporting intermediate state to `observer`.
///
/// # Errors
///
/// See [`curve_curve_intersections`].
pub fn curve_curve_intersections_observed(
    a: &ControlPolygon,
    b: &ControlPolygon,
    config: &ClipConfig,
    observer: &mut dyn ClipObserver,
) -> Result<Intersections<CurveHit>, ClipError> {
    config.validate()?;
    debug!(
        degree_a = a.degree(),
        degree_b = b.degree(),
        tolerance = config.tolerance,
        single_hit = config.single_hit,
        "curve/curve intersection"
    );
    let (lo_a, hi_a) = a.bounds();
    let (lo_b, hi_b) = b.bounds();
    let extent = Point::new(hi_a.x.max(hi_b.x), hi_a.y.max(hi_b.y))
        .distance(Point::new(lo_a.x.min(lo_b.x), lo_a.y.min(lo_b.y)));
    let mut search = OverlapSearch {
        config,
        eps: config.distance_epsilon * magnitude(a.points().iter().chain(b.points())),
        resolution: config.tolerance * config.tolerance * extent,
        found: Vec::new(),
        stats: ClipStats::default(),
        truncated: false,
        exhausted: false,
        observer,
    };
    search.recurse(SubCurve::whole(a), SubCurve::whole(b), 0);

    let status = if search.truncated {
        ClipStatus::Truncated
    } else if search.exhausted {
        ClipStatus::NotConverged
    } else {
        ClipStatus::Complete
    };
    debug!(
        hits = search.found.len(),
        ?status,
        clips = search.stats.clips,
        splits = search.stats.splits,
        calls = search.stats.calls,
        "curve/curve intersection done"
    );
    let hits = search.found.into_iter().map(|f| f.hit).collect();
    Ok(Intersections::new(hits, status, search.stats))
}

/// A piece of an original curve together with the range it covers.
#[derive(Clone, Debug)]
struct SubCurve {
    poly: ControlPolygon,
    interval: ParamInterval,
}

impl SubCurve {
    fn whole(poly: &ControlPolygon) -> Self {
        SubCurve {
            poly: poly.clone(),
            interval: ParamInterval::UNIT,
        }
    }

    fn subdivide(&self) -> (SubCurve, SubCurve) {
        let (left, right) = self.poly.subdivide();
        let (left_interval, right_interval) = self.interval.split(0.5);
        (
            SubCurve {
                poly: left,
                interval: left_interval,
            },
            SubCurve {
                poly: right,
                interval: right_interval,
            },
        )
    }
}

/// Sub-curve pairs to recurse on, in search order.
type Children = ArrayVec<(SubCurve, SubCurve), 4>;

/// A confirmed hit, where it lies on curve A, and how far off that may be.
#[derive(Clone, Copy, Debug)]
struct Located {
    hit: CurveHit,
    at: Point,
    radius: f64,
}

/// Whether two converged sub-curves meet.
#[derive(Clone, Copy, Debug)]
enum Contact {
    Miss,
    Hit(Located),
    Unresolved,
}

/// What to do with a pair of sub-curves after clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overlap {
    Disjoint,
    Converged,
    SubdivideA,
    SubdivideB,
    SubdivideBoth,
}

struct OverlapSearch<'a> {
    config: &'a ClipConfig,
    eps: f64,
    /// Combined flatness below which converged pieces count as straight.
    resolution: f64,
    found: Vec<Located>,
    stats: ClipStats,
    truncated: bool,
    exhausted: bool,
    observer: &'a mut dyn ClipObserver,
}

impl OverlapSearch<'_> {
    fn done(&self) -> bool {
        self.truncated || (self.config.single_hit && !self.found.is_empty())
    }

    fn recurse(&mut self, mut a: SubCurve, mut b: SubCurve, depth: usize) {
        if self.done() {
            return;
        }
        self.stats.calls += 1;
        if depth > self.config.max_depth || self.stats.calls > self.config.max_calls {
            if !self.exhausted {
                warn!(
                    depth,
                    calls = self.stats.calls,
                    "curve/curve search budget exhausted"
                );
            }
            self.exhausted = true;
            return;
        }
        if !bounds_overlap(a.poly.bounds(), b.poly.bounds(), self.eps) {
            self.observer.progress(self.stats);
            return;
        }

        let children: Children = match self.overlap(&mut a, &mut b) {
            Overlap::Disjoint => ArrayVec::new(),
            Overlap::Converged => match self.contact(&a, &b) {
                Contact::Miss => ArrayVec::new(),
                Contact::Hit(found) => {
                    self.record(found);
                    ArrayVec::new()
                }
                Contact::Unresolved => self.subdivide_both(&a, &b),
            },
            Overlap::SubdivideBoth => self.subdivide_both(&a, &b),
            Overlap::SubdivideB => {
                self.stats.splits += 1;
                let (bl, br) = b.subdivide();
                [(a.clone(), bl), (a, br)].into_iter().collect()
            }
            Overlap::SubdivideA => {
                self.stats.splits += 1;
                let (al, ar) = a.subdivide();
                [(al, b.clone()), (ar, b)].into_iter().collect()
            }
        };
        if !children.is_empty() {
            trace!(depth, pairs = children.len(), "subdivide");
        }
        for (a, b) in children {
            self.recurse(a, b, depth + 1);
        }
        self.observer.progress(self.stats);
    }

    fn subdivide_both(&mut self, a: &SubCurve, b: &SubCurve) -> Children {
        self.stats.splits += 2;
        let (al, ar) = a.subdivide();
        let (bl, br) = b.subdivide();
        [
            (al.clone(), bl.clone()),
            (al, br.clone()),
            (ar.clone(), bl),
            (ar, br),
        ]
        .into_iter()
        .collect()
    }

    /// Decide whether two pieces narrowed below tolerance really meet.
    ///
    /// Each piece lies within its flatness of its chord. Chords further apart
    /// than the summed flatness prove a miss; crossing chords of flat enough
    /// pieces locate the hit. Pieces that are flat but whose chords only come
    /// close are accepted as touching once they are flatter still.
    fn contact(&self, a: &SubCurve, b: &SubCurve) -> Contact {
        let (chord_a, chord_b) = (a.poly.chord(), b.poly.chord());
        let (flat_a, flat_b) = (a.poly.flatness(), b.poly.flatness());
        let spread = flat_a + flat_b;
        if chord_a.segment_distance(&chord_b) > spread + self.eps {
            return Contact::Miss;
        }
        if spread > self.resolution {
            return Contact::Unresolved;
        }
        let (da, db) = (chord_a.p1 - chord_a.p0, chord_b.p1 - chord_b.p0);
        let size = (da.hypot() + 2.0 * flat_a).max(db.hypot() + 2.0 * flat_b);
        match chord_a.crossing(&chord_b) {
            Some((u, v)) => {
                // Shallow crossings pin the location down less tightly.
                let sin = (da.cross(db) / (da.hypot() * db.hypot())).abs();
                Contact::Hit(Located {
                    hit: CurveHit::new(a.interval.at(u), b.interval.at(v)),
                    at: chord_a.eval(u),
                    radius: (spread / sin).min(size),
                })
            }
            None if spread <= self.resolution * self.config.tolerance => Contact::Hit(Located {
                hit: CurveHit::new(a.interval.mid(), b.interval.mid()),
                at: a.poly.eval(0.5),
                radius: size,
            }),
            None => Contact::Unresolved,
        }
    }

    /// Alternately clip `b` against the fat line of `a` and `a` against the
    /// fat line of `b`, narrowing both in place.
    fn overlap(&mut self, a: &mut SubCurve, b: &mut SubCurve) -> Overlap {
        let config = self.config;
        let tol = config.tolerance;
        for iteration in 0..config.max_clip_iterations {
            self.stats.iterations += 1;

            let HullClip::Clipped(tl2, ur2) = clip_to_fat_line(&a.poly, &b.poly, config, self.eps)
            else {
                return Overlap::Disjoint;
            };
            let b_next = b.interval.sub(tl2, ur2);
            if b_next.width() < tol && a.interval.width() <= tol {
                b.interval = b_next;
                return Overlap::Converged;
            }
            let b_fraction = ur2 - tl2;
            if tl2 > config.min_cut || ur2 < 1.0 - config.min_cut {
                self.trim(b, CurveSide::B, tl2, ur2);
            }

            let HullClip::Clipped(tl1, ur1) = clip_to_fat_line(&b.poly, &a.poly, config, self.eps)
            else {
                return Overlap::Disjoint;
            };
            let a_fraction = ur1 - tl1;
            trace!(iteration, a_fraction, b_fraction, "clip pair");
            if b_fraction > config.stall_fraction && a_fraction > config.stall_fraction {
                return Overlap::SubdivideBoth;
            }
            if a_fraction > config.progress_fraction {
                return Overlap::SubdivideB;
            }
            self.trim(a, CurveSide::A, tl1, ur1);
            if b_fraction > config.progress_fraction && iteration > 0 {
                return Overlap::SubdivideA;
            }
            if a.interval.width() <= tol && b.interval.width() < tol {
                return Overlap::Converged;
            }
        }
        Overlap::SubdivideBoth
    }

    fn trim(&mut self, sub: &mut SubCurve, side: CurveSide, low: f64, high: f64) {
        sub.poly.trim_to_interval(low, high);
        sub.interval = sub.interval.sub(low, high);
        self.stats.clips += 1;
        self.observer.clipped(&ClipEvent {
            side,
            interval: sub.interval,
            polygon: Some(&sub.poly),
        });
    }

    /// Add a hit unless it repeats an earlier one.
    ///
    /// A repeat lies within both hits' location radii of the earlier hit and
    /// close to it on both parameters. Neighbouring sub-pairs that share a
    /// split point report the same crossing this way.
    fn record(&mut self, found: Located) {
        let hit = CurveHit::new(found.hit.t.clamp(0.0, 1.0), found.hit.s.clamp(0.0, 1.0));
        let near = 2.0 * self.config.tolerance;
        let eps = self.eps;
        if self.config.merge_duplicates
            && self.found.iter().any(|f| {
                (f.hit.t - hit.t).abs() < near
                    && (f.hit.s - hit.s).abs() < near
                    && f.at.distance(found.at) <= f.radius + found.radius + eps
            })
        {
            return;
        }
        if self.found.len() >= self.config.max_intersections {
            debug!(max = self.config.max_intersections, "intersection cap reached");
            self.truncated = true;
            return;
        }
        trace!(t = hit.t, s = hit.s, "intersection");
        self.found.push(Located { hit, ..found });
    }
}
