// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by curve construction and intersection queries.

use thiserror::Error;

/// Invalid input to the curve constructors or intersection routines.
///
/// A search that merely runs out of budget is not an error; it is reported
/// through [`ClipStatus`](crate::ClipStatus) alongside the hits found so far.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum ClipError {
    /// A control polygon needs at least two points.
    #[error("a control polygon needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    /// The curve's degree exceeds the supported maximum.
    #[error("curve degree {degree} exceeds the maximum of {max}")]
    DegreeTooHigh {
        /// Degree of the rejected curve.
        degree: usize,
        /// Highest supported degree.
        max: usize,
    },
    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} is not finite")]
    NonFinite {
        /// Index of the first offending control point.
        index: usize,
    },
    /// Points and weights differ in count.
    #[error("{points} control points but {weights} weights")]
    WeightCountMismatch {
        /// Number of control points.
        points: usize,
        /// Number of weights.
        weights: usize,
    },
    /// Rational curves are not supported.
    #[error("weight {weight} at index {index} makes the curve rational")]
    RationalWeight {
        /// Index of the first weight other than 1.
        index: usize,
        /// Its value.
        weight: f64,
    },
    /// The line's endpoints coincide, so it has no direction.
    #[error("the line's endpoints coincide")]
    DegenerateLine,
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            ClipError::TooFewPoints(1).to_string(),
            "a control polygon needs at least 2 points, got 1"
        );
        assert_eq!(
            ClipError::DegreeTooHigh { degree: 12, max: 9 }.to_string(),
            "curve degree 12 exceeds the maximum of 9"
        );
        assert_eq!(
            ClipError::InvalidConfig("tolerance must be positive").to_string(),
            "invalid configuration: tolerance must be positive"
        );
    }
}
