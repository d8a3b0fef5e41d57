//! Error type shared by the reconstruction engine
//!
//! Only bad input is an error. Numerical divergence (Lagrange oscillation,
//! extrapolated derivative probes) is accepted output and never reported here.

use thiserror::Error;

pub type TraceResult<T> = Result<T, TraceError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// Two control points on one axis share the same time
    #[error("duplicate control point at t = {t}")]
    DuplicateControlPoint { t: f64 },

    /// Control point time is NaN or infinite
    #[error("control point time {t} is not finite")]
    NonFiniteTime { t: f64 },

    /// Evaluation requested on an interpolator with no control points
    #[error("cannot evaluate an interpolator with no control points")]
    EmptyInterpolator,

    /// `record` called after the recorder was stopped
    #[error("recorder is stopped; clear it before recording again")]
    RecorderStopped,

    /// New sample is older than the last recorded one
    #[error("sample at {timestamp} ms is older than the last sample at {last} ms")]
    TimestampOutOfOrder { timestamp: i64, last: i64 },

    /// Reconstruction needs at least `needed` samples
    #[error("reconstruction needs at least {needed} samples, got {got}")]
    NotEnoughSamples { needed: usize, got: usize },

    /// Scenario file holds values the engine cannot run with
    #[error("configuration error: {0}")]
    Config(String),
}
