//! Value ranges and the sampling policy for `Value` leaves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{ParamError, ParamResult};

/// How samples are spaced between the bounds of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeScale {
    /// Evenly spaced in value space.
    Linear,
    /// Evenly spaced in log space, then exponentiated back.
    Exponential,
}

impl fmt::Display for RangeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Exponential => write!(f, "exponential"),
        }
    }
}

/// A validated `[min, max]` range together with its scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub scale: RangeScale,
}

impl ValueRange {
    pub fn new(min: f64, max: f64, scale: RangeScale) -> ParamResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ParamError::invalid_range(min, max, scale, "bounds must be finite"));
        }
        if min > max {
            return Err(ParamError::invalid_range(min, max, scale, "min exceeds max"));
        }
        if scale == RangeScale::Exponential && min <= 0.0 {
            return Err(ParamError::invalid_range(
                min,
                max,
                scale,
                "exponential scale needs strictly positive bounds",
            ));
        }
        Ok(Self { min, max, scale })
    }

    /// Materialise up to `count` samples in strictly increasing order.
    ///
    /// Both bounds are always part of the output. Interior points that round
    /// onto a neighbour are dropped, so a degenerate range (`min == max`)
    /// yields a single sample and a range narrower than `count` representable
    /// values yields fewer than `count`.
    pub fn samples(&self, count: usize) -> Vec<f64> {
        if count <= 1 || self.min == self.max {
            return vec![self.min];
        }

        let (low, high) = match self.scale {
            RangeScale::Linear => (self.min, self.max),
            RangeScale::Exponential => (self.min.ln(), self.max.ln()),
        };

        let last = count - 1;
        let mut samples = Vec::with_capacity(count);
        samples.push(self.min);
        for i in 1..last {
            let t = i as f64 / last as f64;
            let point = low + t * (high - low);
            let point = match self.scale {
                RangeScale::Linear => point,
                RangeScale::Exponential => point.exp(),
            };
            let previous = samples[samples.len() - 1];
            if point > previous && point < self.max {
                samples.push(point);
            }
        }
        samples.push(self.max);
        samples
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] {}", self.min, self.max, self.scale)
    }
}
