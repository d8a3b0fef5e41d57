//! Configuration types for loading a trajectory scenario from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – RNG seed, slider orientation, time scaling
//! - [`ParametersConfig`] – numerical parameters of the reconstruction
//! - [`ParticleConfig`]   – initial particle state
//! - [`MotionConfig`]     – acceleration policy of the first and later runs
//! - [`SessionConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   seed: 42                        # optional, omit for a fresh seed every launch
//!   slider: "left_to_right"         # or "right_to_left"
//!   time_scaled_acceleration: false
//!
//! parameters:
//!   epsilon: 1.0e-4                 # finite difference step (s)
//!   min_samples: 2                  # optional
//!
//! particle:
//!   x: [ -120.0, 0.0, 0.0 ]
//!   v: [ 10.0, 10.0, 0.0 ]
//!   a: [ 0.01, -0.9, -0.003 ]
//!
//! motion:
//!   initial:
//!     kind: fixed
//!   respawn:
//!     kind: random_walk
//!     range: 1.0
//!     divisor: 1.0
//!     refresh_probability: 0.5
//! ```
//!
//! `Scenario::build_scenario` validates this and maps it into the runtime
//! types used by `SimulationSession`.

use serde::Deserialize;

use crate::simulation::scrub::SliderOrientation;

/// Which end of the slider holds the start of the recording
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SliderConfig {
    #[default]
    #[serde(rename = "left_to_right")]
    LeftToRight,

    #[serde(rename = "right_to_left")]
    RightToLeft,
}

impl From<SliderConfig> for SliderOrientation {
    fn from(cfg: SliderConfig) -> Self {
        match cfg {
            SliderConfig::LeftToRight => SliderOrientation::LeftToRight,
            SliderConfig::RightToLeft => SliderOrientation::RightToLeft,
        }
    }
}

/// Engine-level options
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    pub seed: Option<u64>, // deterministic seed to make random-walk runs reproducible
    #[serde(default)]
    pub slider: SliderConfig, // slider direction
    #[serde(default)]
    pub time_scaled_acceleration: bool, // scale fresh random-walk draws by frame seconds
}

/// Numerical parameters of the reconstruction
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub epsilon: f64, // forward difference step for velocity and acceleration
    pub min_samples: Option<usize>, // samples needed before a trajectory is rebuilt, default 2
}

/// Initial particle state, each vector must hold three components
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // initial position
    pub v: Vec<f64>, // initial velocity, added to the position each tick
    pub a: Vec<f64>, // initial acceleration, added to the velocity each tick
}

/// Acceleration policy of a particle
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    Fixed,
    RandomWalk {
        range: f64, // components drawn from [-range, range]
        divisor: f64, // then divided by this
        refresh_probability: f64, // chance of a new draw each tick
    },
}

/// Policies for the first run and for every run started afterwards
#[derive(Deserialize, Debug, Clone)]
pub struct MotionConfig {
    pub initial: PolicyConfig,
    pub respawn: PolicyConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct SessionConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub particle: ParticleConfig,
    pub motion: MotionConfig,
}
