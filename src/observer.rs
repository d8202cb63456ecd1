// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passive observation of the clipping process.

use crate::{ClipStats, ControlPolygon, ParamInterval};

/// Which operand of a curve/curve query an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CurveSide {
    /// The first curve.
    A,
    /// The second curve.
    B,
}

/// A sub-curve that was just narrowed by a clip.
#[derive(Clone, Copy, Debug)]
pub struct ClipEvent<'a> {
    /// The curve that was clipped.
    pub side: CurveSide,
    /// Its surviving range on the original curve.
    pub interval: ParamInterval,
    /// The surviving sub-curve, when it is available as a polygon.
    ///
    /// Curve/line queries clip a scalar distance function and report `None`.
    pub polygon: Option<&'a ControlPolygon>,
}

/// Receiver of intermediate clipping state, for visualization or debugging.
///
/// Observers are informational only: a query returns the same result with or
/// without one.
pub trait ClipObserver {
    /// A sub-curve was clipped.
    fn clipped(&mut self, event: &ClipEvent<'_>) {
        let _ = event;
    }

    /// Running counters, reported after every sub-problem.
    fn progress(&mut self, stats: ClipStats) {
        let _ = stats;
    }
}

/// An observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ClipObserver for NoopObserver {}

impl<O: ClipObserver + ?Sized> ClipObserver for &mut O {
    fn clipped(&mut self, event: &ClipEvent<'_>) {
        (**self).clipped(event);
    }

    fn progress(&mut self, stats: ClipStats) {
        (**self).progress(stats);
    }
}
