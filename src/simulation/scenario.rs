//! Build a ready-to-run session from configuration
//!
//! Takes a `SessionConfig` (YAML-facing), checks it, and produces the runtime
//! bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the particle every run starts from (`ParticleTemplate`)

use crate::configuration::config::{PolicyConfig, SessionConfig};
use crate::error::{TraceError, TraceResult};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::session::SimulationSession;
use crate::simulation::states::{AccelPolicy, NVec3, ParticleTemplate};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub template: ParticleTemplate,
}

impl Scenario {
    pub fn build_scenario(cfg: SessionConfig) -> TraceResult<Self> {
        // Particle: map the YAML vectors -> nalgebra vectors
        let template = ParticleTemplate {
            position: vec3("particle.x", &cfg.particle.x)?,
            velocity: vec3("particle.v", &cfg.particle.v)?,
            acceleration: vec3("particle.a", &cfg.particle.a)?,
            initial_policy: policy("motion.initial", &cfg.motion.initial)?,
            respawn_policy: policy("motion.respawn", &cfg.motion.respawn)?,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.epsilon.is_finite() && p_cfg.epsilon > 0.0) {
            return Err(TraceError::Config(format!(
                "parameters.epsilon must be a positive finite number, got {}",
                p_cfg.epsilon
            )));
        }
        let parameters = Parameters {
            epsilon: p_cfg.epsilon,
            min_samples: p_cfg.min_samples.unwrap_or(2).max(1),
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            seed: e_cfg.seed,
            slider: e_cfg.slider.into(),
            time_scaled_acceleration: e_cfg.time_scaled_acceleration,
        };

        Ok(Self {
            engine,
            parameters,
            template,
        })
    }

    pub fn into_session(self) -> SimulationSession {
        SimulationSession::new(self.engine, self.parameters, self.template)
    }
}

fn vec3(field: &str, v: &[f64]) -> TraceResult<NVec3> {
    match v {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(TraceError::Config(format!(
            "{field} needs 3 components, got {}",
            v.len()
        ))),
    }
}

fn policy(field: &str, cfg: &PolicyConfig) -> TraceResult<AccelPolicy> {
    match *cfg {
        PolicyConfig::Fixed => Ok(AccelPolicy::Fixed),
        PolicyConfig::RandomWalk { range, divisor, refresh_probability } => {
            if !(range.is_finite() && range > 0.0) {
                return Err(TraceError::Config(format!("{field}.range must be positive, got {range}")));
            }
            if divisor == 0.0 || !divisor.is_finite() {
                return Err(TraceError::Config(format!("{field}.divisor must be non-zero, got {divisor}")));
            }
            if !(0.0..=1.0).contains(&refresh_probability) {
                return Err(TraceError::Config(format!(
                    "{field}.refresh_probability must be within [0, 1], got {refresh_probability}"
                )));
            }
            Ok(AccelPolicy::RandomWalk {
                range,
                divisor,
                refresh_probability,
            })
        }
    }
}
