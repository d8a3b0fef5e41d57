pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{TraceError, TraceResult};

pub use simulation::states::{Particle, AccelPolicy, ParticleTemplate, NVec3};
pub use simulation::recorder::{TrajectoryRecorder, TrajectorySample};
pub use simulation::lagrange::{AxisInterpolator, ControlPoint};
pub use simulation::trajectory::ReconstructedTrajectory;
pub use simulation::derivative::{DerivativeEstimator, DEFAULT_EPSILON};
pub use simulation::scrub::{ScrubMapper, SliderOrientation};
pub use simulation::session::{SimulationSession, SessionState, FrameInput, Readout};
pub use simulation::scenario::Scenario;

pub use configuration::config::{SessionConfig, EngineConfig, ParametersConfig, ParticleConfig, MotionConfig, PolicyConfig, SliderConfig};

pub use visualization::trace_vis3d::run_3d;

pub use benchmark::benchmark::{bench_lagrange_curve, bench_derivative_curve};
