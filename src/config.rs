// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning parameters for the intersection search.

use crate::ClipError;

/// Parameters controlling convergence, termination and output of the
/// intersection routines.
///
/// The defaults reproduce the classic Bézier clipping thresholds; changing the
/// fraction thresholds changes when the search bisects instead of clipping and
/// so can change the reported parameters within `tolerance`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClipConfig {
    /// Parameter interval width below which a range counts as converged.
    pub tolerance: f64,
    /// Maximum number of reported intersections.
    pub max_intersections: usize,
    /// When both curves keep more than this fraction of their range after a
    /// clip, both are subdivided.
    pub stall_fraction: f64,
    /// When a clip keeps more than this fraction of a curve, it made no
    /// progress and the other curve is subdivided.
    pub progress_fraction: f64,
    /// A clip must remove at least this fraction at one end to be applied.
    pub min_cut: f64,
    /// Surviving width above which the perpendicular fat line is also tried.
    pub perpendicular_threshold: f64,
    /// Clipping iterations on one pair before falling back to subdivision.
    pub max_clip_iterations: usize,
    /// Isolation rounds of the curve/line solver before bisecting.
    pub max_root_rounds: usize,
    /// Maximum subdivision depth.
    pub max_depth: usize,
    /// Maximum number of sub-curve pairs examined by one query.
    pub max_calls: usize,
    /// Relative distance treated as zero, scaled by the inputs' magnitude.
    pub distance_epsilon: f64,
    /// Stop after the first intersection.
    pub single_hit: bool,
    /// Use the tighter quadratic and cubic fat lines.
    pub tight_fat_lines: bool,
    /// Merge repeated hits. Curve/line roots repeat within `tolerance`;
    /// curve/curve hits repeat when they also lie at the same place.
    pub merge_duplicates: bool,
}

impl Default for ClipConfig {
    fn default() -> Self {
        ClipConfig {
            tolerance: 0.01,
            max_intersections: 20,
            stall_fraction: 0.8,
            progress_fraction: 0.98,
            min_cut: 0.02,
            perpendicular_threshold: 0.5,
            max_clip_iterations: 20,
            max_root_rounds: 10,
            max_depth: 64,
            max_calls: 4096,
            distance_epsilon: 1e-9,
            single_hit: false,
            tight_fat_lines: false,
            merge_duplicates: true,
        }
    }
}

impl ClipConfig {
    /// A config that stops at the first intersection.
    #[must_use]
    pub fn single_hit() -> Self {
        ClipConfig {
            single_hit: true,
            ..Default::default()
        }
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of reported intersections.
    #[must_use]
    pub fn with_max_intersections(mut self, max: usize) -> Self {
        self.max_intersections = max;
        self
    }

    /// Check that every field is in its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ClipError> {
        let unit = |v: f64| v > 0.0 && v < 1.0;
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ClipError::InvalidConfig("tolerance must be positive"));
        }
        if self.max_intersections == 0 {
            return Err(ClipError::InvalidConfig(
                "max_intersections must be at least 1",
            ));
        }
        if !unit(self.stall_fraction) || !unit(self.progress_fraction) {
            return Err(ClipError::InvalidConfig(
                "stall and progress fractions must lie in (0, 1)",
            ));
        }
        if !(self.min_cut >= 0.0 && self.min_cut < 0.5) {
            return Err(ClipError::InvalidConfig("min_cut must lie in [0, 0.5)"));
        }
        if !(self.perpendicular_threshold >= 0.0 && self.perpendicular_threshold <= 1.0) {
            return Err(ClipError::InvalidConfig(
                "perpendicular_threshold must lie in [0, 1]",
            ));
        }
        if self.max_clip_iterations == 0 || self.max_root_rounds == 0 {
            return Err(ClipError::InvalidConfig("iteration limits must be at least 1"));
        }
        if self.max_depth == 0 || self.max_calls == 0 {
            return Err(ClipError::InvalidConfig("recursion limits must be at least 1"));
        }
        if !(self.distance_epsilon >= 0.0 && self.distance_epsilon.is_finite()) {
            return Err(ClipError::InvalidConfig(
                "distance_epsilon must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ClipConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.tolerance, 0.01);
        assert_eq!(config.max_intersections, 20);
        assert!(ClipConfig::single_hit().single_hit);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = ClipConfig::default().with_tolerance(0.0);
        assert_eq!(
            bad.validate(),
            Err(ClipError::InvalidConfig("tolerance must be positive"))
        );
        let bad = ClipConfig::default().with_tolerance(f64::NAN);
        assert!(bad.validate().is_err());
        let bad = ClipConfig::default().with_max_intersections(0);
        assert!(bad.validate().is_err());
        let bad = ClipConfig {
            stall_fraction: 1.5,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = ClipConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
