//! Lagrange interpolation of one scalar axis
//!
//! The polynomial is evaluated straight from the control points with the
//! classical basis form
//!
//! P(t) = Σ_i v_i · Π_{j≠i} (t - t_j) / (t_i - t_j)
//!
//! which is O(n²) per call. Nothing is precomputed, so the interpolator can
//! grow point by point and every evaluation sees the full set.

use crate::error::{TraceError, TraceResult};

/// One `(t, value)` pair the polynomial must pass through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub t: f64, // seconds since the first sample
    pub value: f64, // one coordinate of the sampled position
}

impl ControlPoint {
    pub fn new(t: f64, value: f64) -> Self {
        Self { t, value }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisInterpolator {
    points: Vec<ControlPoint>,
}

impl AxisInterpolator {
    /// Create an interpolator with no control points
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build an interpolator from a set of control points, in order
    pub fn from_points<I>(points: I) -> TraceResult<Self>
    where
        I: IntoIterator<Item = ControlPoint>,
    {
        let mut interpolator = Self::new();
        for p in points {
            interpolator.add_point(p.t, p.value)?;
        }
        Ok(interpolator)
    }

    /// Append a control point
    /// A time that is not finite or already present is rejected, since it
    /// would make one of the basis denominators zero
    pub fn add_point(&mut self, t: f64, value: f64) -> TraceResult<()> {
        if !t.is_finite() {
            return Err(TraceError::NonFiniteTime { t });
        }
        if self.points.iter().any(|p| p.t == t) {
            return Err(TraceError::DuplicateControlPoint { t });
        }
        self.points.push(ControlPoint::new(t, value));
        Ok(())
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value of the interpolating polynomial at `t`
    /// Outside the sampled range this extrapolates and usually diverges fast
    pub fn evaluate(&self, t: f64) -> TraceResult<f64> {
        if self.points.is_empty() {
            return Err(TraceError::EmptyInterpolator);
        }

        let mut result = 0.0;
        for (i, pi) in self.points.iter().enumerate() {
            // v_i · L_i(t)
            let mut term = pi.value;
            for (j, pj) in self.points.iter().enumerate() {
                if i != j {
                    term *= (t - pj.t) / (pi.t - pj.t);
                }
            }
            result += term;
        }
        Ok(result)
    }
}
