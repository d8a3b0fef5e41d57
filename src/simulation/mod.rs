pub mod states;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod recorder;
pub mod lagrange;
pub mod trajectory;
pub mod derivative;
pub mod scrub;
pub mod session;
pub mod scenario;
