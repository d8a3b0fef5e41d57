//! Finite-difference velocity and acceleration of a reconstructed trajectory
//!
//! Both derivatives use the same forward difference with a fixed step `eps`:
//!
//! v(t) = (P(t + eps) - P(t)) / eps
//! a(t) = (v(t + eps) - v(t)) / eps
//!
//! so a velocity costs two polynomial evaluations and an acceleration four.
//! Nothing is cached; every query re-evaluates the fit.

use crate::error::TraceResult;
use super::lagrange::AxisInterpolator;
use super::states::NVec3;
use super::trajectory::ReconstructedTrajectory;

pub const DEFAULT_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeEstimator {
    pub epsilon: f64, // forward difference step, in seconds
}

impl Default for DerivativeEstimator {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON }
    }
}

impl DerivativeEstimator {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// First derivative of one axis at `t`
    pub fn first_derivative(&self, axis: &AxisInterpolator, t: f64) -> TraceResult<f64> {
        let eps = self.epsilon;
        Ok((axis.evaluate(t + eps)? - axis.evaluate(t)?) / eps)
    }

    /// Second derivative of one axis at `t`, the forward difference of `first_derivative`
    pub fn second_derivative(&self, axis: &AxisInterpolator, t: f64) -> TraceResult<f64> {
        let eps = self.epsilon;
        Ok((self.first_derivative(axis, t + eps)? - self.first_derivative(axis, t)?) / eps)
    }

    /// Velocity vector of the trajectory at `t`
    pub fn velocity_at(&self, traj: &ReconstructedTrajectory, t: f64) -> TraceResult<NVec3> {
        Ok(NVec3::new(
            self.first_derivative(&traj.x, t)?,
            self.first_derivative(&traj.y, t)?,
            self.first_derivative(&traj.z, t)?,
        ))
    }

    /// Acceleration vector of the trajectory at `t`
    pub fn acceleration_at(&self, traj: &ReconstructedTrajectory, t: f64) -> TraceResult<NVec3> {
        Ok(NVec3::new(
            self.second_derivative(&traj.x, t)?,
            self.second_derivative(&traj.y, t)?,
            self.second_derivative(&traj.z, t)?,
        ))
    }

    /// sqrt(vx² + vy² + vz²)
    pub fn speed_at(&self, traj: &ReconstructedTrajectory, t: f64) -> TraceResult<f64> {
        Ok(self.velocity_at(traj, t)?.norm())
    }

    /// sqrt(ax² + ay² + az²)
    pub fn accel_at(&self, traj: &ReconstructedTrajectory, t: f64) -> TraceResult<f64> {
        Ok(self.acceleration_at(traj, t)?.norm())
    }
}
