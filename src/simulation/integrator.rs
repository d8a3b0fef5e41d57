//! Fixed-tick integrator for the demo particle
//!
//! One call advances the particle by exactly one frame using semi-implicit
//! Euler, after letting its `AccelPolicy` refresh the acceleration

use rand::Rng;

use super::states::{AccelPolicy, NVec3, Particle};

impl Particle {
    /// Advance the particle by one tick
    /// Velocity is updated first and the new velocity moves the position:
    /// v_n+1 = v_n + a_n, x_n+1 = x_n + v_n+1
    ///
    /// Returns `true` when the policy re-drew the acceleration this tick
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let refreshed = self.refresh_acceleration(rng);
        self.integrate();
        refreshed
    }

    /// Kick and drift with the current acceleration, no policy refresh
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
    }

    /// Apply the particle's policy to its acceleration
    /// A random walk draws the three components independently
    pub fn refresh_acceleration<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        match self.policy {
            AccelPolicy::Fixed => false,
            AccelPolicy::RandomWalk { range, divisor, refresh_probability } => {
                if !rng.gen_bool(refresh_probability) {
                    return false;
                }
                self.acceleration = NVec3::new(
                    rng.gen_range(-range..=range),
                    rng.gen_range(-range..=range),
                    rng.gen_range(-range..=range),
                ) / divisor;
                true
            }
        }
    }

    /// Multiply the acceleration componentwise by `dt`
    pub fn scale_acceleration(&mut self, dt: f64) {
        self.acceleration *= dt;
    }
}

