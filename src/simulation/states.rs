//! Core state types for the trajectory demo.
//!
//! Defines the particle and its pluggable acceleration policy:
//! - `Particle`    kinematic state (position, velocity, acceleration) as `NVec3`
//! - `AccelPolicy` how acceleration evolves between ticks
//!
//! The particle is owned by the session and only mutated by the integrator.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Acceleration update policy, chosen when the particle is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccelPolicy {
    /// Acceleration stays whatever it was set to
    Fixed,

    /// Each tick, with probability `refresh_probability`, every component is
    /// re-drawn uniformly from `[-range, range] / divisor`
    RandomWalk {
        range: f64,
        divisor: f64,
        refresh_probability: f64,
    },
}

impl AccelPolicy {
    /// Random walk with unit range, no damping and a coin-flip refresh
    pub fn random_walk() -> Self {
        AccelPolicy::RandomWalk {
            range: 1.0,
            divisor: 1.0,
            refresh_probability: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec3, // position
    pub velocity: NVec3, // velocity, added to position once per tick
    pub acceleration: NVec3, // acceleration, added to velocity once per tick
    pub policy: AccelPolicy, // how acceleration changes between ticks
}

impl Particle {
    pub fn new(position: NVec3, velocity: NVec3, acceleration: NVec3, policy: AccelPolicy) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            policy,
        }
    }

    /// Magnitude of the current acceleration vector
    pub fn acceleration_magnitude(&self) -> f64 {
        self.acceleration.norm()
    }
}

/// Initial state a particle is (re)spawned from at the start of each run
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleTemplate {
    pub position: NVec3,
    pub velocity: NVec3,
    pub acceleration: NVec3,
    pub initial_policy: AccelPolicy, // policy of the very first run
    pub respawn_policy: AccelPolicy, // policy of every run started with "new run"
}

impl ParticleTemplate {
    pub fn first_particle(&self) -> Particle {
        Particle::new(self.position, self.velocity, self.acceleration, self.initial_policy)
    }

    pub fn respawned_particle(&self) -> Particle {
        Particle::new(self.position, self.velocity, self.acceleration, self.respawn_policy)
    }
}

impl Default for ParticleTemplate {
    fn default() -> Self {
        Self {
            position: NVec3::new(-120.0, 0.0, 0.0),
            velocity: NVec3::new(10.0, 10.0, 0.0),
            acceleration: NVec3::new(0.01, -0.9, -0.003),
            initial_policy: AccelPolicy::Fixed,
            respawn_policy: AccelPolicy::random_walk(),
        }
    }
}
