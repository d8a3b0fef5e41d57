//! 3D trajectory rebuilt from recorded samples
//!
//! Each sample becomes one control point per axis, with `t` measured in
//! seconds from the first sample. The result is read-only; a new run builds a
//! fresh one.

use crate::error::{TraceError, TraceResult};
use super::lagrange::AxisInterpolator;
use super::recorder::TrajectorySample;
use super::states::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructedTrajectory {
    pub x: AxisInterpolator,
    pub y: AxisInterpolator,
    pub z: AxisInterpolator,
    t_first: f64,
    t_last: f64,
}

impl ReconstructedTrajectory {
    /// Convert samples into three per-axis interpolators
    ///
    /// Samples that repeat the previous timestamp are dropped, keeping the
    /// first one, so every axis gets distinct control-point times
    pub fn from_samples(samples: &[TrajectorySample]) -> TraceResult<Self> {
        let first = samples.first().ok_or(TraceError::NotEnoughSamples { needed: 1, got: 0 })?;
        let origin = first.timestamp_millis;

        let mut x = AxisInterpolator::new();
        let mut y = AxisInterpolator::new();
        let mut z = AxisInterpolator::new();

        let mut previous: Option<i64> = None;
        let mut dropped = 0usize;
        for s in samples {
            if previous == Some(s.timestamp_millis) {
                dropped += 1;
                continue;
            }
            previous = Some(s.timestamp_millis);

            let t = (s.timestamp_millis - origin) as f64 / 1000.0;
            x.add_point(t, s.position.x)?;
            y.add_point(t, s.position.y)?;
            z.add_point(t, s.position.z)?;
        }

        if dropped > 0 {
            log::warn!("dropped {dropped} samples sharing a timestamp with their predecessor");
        }

        let t_last = x.points().last().map_or(0.0, |p| p.t);

        Ok(Self {
            x,
            y,
            z,
            t_first: 0.0,
            t_last,
        })
    }

    /// Number of control points on each axis
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(t_first, t_last)` in seconds
    pub fn time_bounds(&self) -> (f64, f64) {
        (self.t_first, self.t_last)
    }

    /// Reconstructed position at `t` seconds
    pub fn position_at(&self, t: f64) -> TraceResult<NVec3> {
        Ok(NVec3::new(
            self.x.evaluate(t)?,
            self.y.evaluate(t)?,
            self.z.evaluate(t)?,
        ))
    }
}
