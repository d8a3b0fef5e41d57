//! Simulation lifecycle driven once per rendered frame
//!
//! `SimulationSession` owns everything a run needs: the particle, the
//! recorder, the reconstructed trajectory and the scrub state. The frame loop
//! hands it one `FrameInput` per frame and reads the results back.
//!
//! States: `Paused -> Running -> Stopped`, and a new run from any state goes
//! back to `Paused`. The trajectory is rebuilt exactly once, on the edge into
//! `Stopped`.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::TraceResult;
use super::derivative::DerivativeEstimator;
use super::engine::Engine;
use super::params::Parameters;
use super::recorder::{TrajectoryRecorder, TrajectorySample};
use super::scrub::ScrubMapper;
use super::states::{NVec3, Particle, ParticleTemplate};
use super::trajectory::ReconstructedTrajectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Paused, // particle frozen, nothing recorded
    Running, // one integration step and one sample per frame
    Stopped, // recording frozen, scrubbing the reconstruction
}

/// Everything the Renderer/Input side reports for one frame
/// Trigger flags are edge-triggered: true only on the frame the key went down
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub now_millis: i64, // wall clock for this frame
    pub toggle_pause: bool,
    pub end_simulation: bool,
    pub new_run: bool,
    pub toggle_trace: bool,
    pub pointer: Option<f64>, // normalized slider position while the pointer drags it
}

impl FrameInput {
    /// A frame with no triggers and no pointer
    pub fn at(now_millis: i64) -> Self {
        Self {
            now_millis,
            ..Default::default()
        }
    }
}

/// Values shown on screen for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub time: f64, // seconds: run time while live, scrub time once stopped
    pub position: NVec3,
    pub speed: f64,
    pub accel: f64,
}

pub struct SimulationSession {
    engine: Engine,
    parameters: Parameters,
    template: ParticleTemplate,
    estimator: DerivativeEstimator,
    mapper: ScrubMapper,
    rng: StdRng,

    state: SessionState,
    particle: Particle,
    recorder: TrajectoryRecorder,
    trajectory: Option<ReconstructedTrajectory>,
    scrub_time: f64,
    show_trace: bool,
    run_started_millis: Option<i64>,
    last_tick_millis: Option<i64>,
    readout: Readout,
    runs: u32,
}

impl SimulationSession {
    pub fn new(engine: Engine, parameters: Parameters, template: ParticleTemplate) -> Self {
        let rng = match engine.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particle = template.first_particle();
        let readout = live_readout(&particle, 0.0);

        Self {
            estimator: DerivativeEstimator::new(parameters.epsilon),
            mapper: ScrubMapper::new(engine.slider),
            engine,
            parameters,
            template,
            rng,
            state: SessionState::Paused,
            particle,
            recorder: TrajectoryRecorder::new(),
            trajectory: None,
            scrub_time: 0.0,
            show_trace: false,
            run_started_millis: None,
            last_tick_millis: None,
            readout,
            runs: 1,
        }
    }

    /// Advance the session by one frame
    ///
    /// Fixed order: triggers, integrate, record, reconstruct (on the stop
    /// edge only), interpolate and differentiate at the scrub time, then map
    /// the pointer to the scrub time used by the next frame
    pub fn tick(&mut self, input: &FrameInput) -> TraceResult<()> {
        let now = input.now_millis;
        let run_start = *self.run_started_millis.get_or_insert(now);
        let dt = self.last_tick_millis.map_or(0.0, |last| (now - last) as f64 / 1000.0);
        self.last_tick_millis = Some(now);

        self.apply_triggers(input)?;

        match self.state {
            SessionState::Running => {
                let run_time = now - run_start;
                // a frame the recorder would refuse must not move the particle
                self.recorder.accepts(run_time)?;

                let refreshed = self.particle.refresh_acceleration(&mut self.rng);
                if refreshed && self.engine.time_scaled_acceleration {
                    self.particle.scale_acceleration(dt);
                }
                self.particle.integrate();
                self.recorder.record(run_time, self.particle.position)?;
                self.readout = live_readout(&self.particle, run_time as f64 / 1000.0);
            }
            SessionState::Paused => {
                let run_time = self.recorder.last().map_or(0, |s| s.timestamp_millis);
                self.readout = live_readout(&self.particle, run_time as f64 / 1000.0);
            }
            SessionState::Stopped => {
                if let Some(traj) = &self.trajectory {
                    let t = self.scrub_time;
                    self.readout = Readout {
                        time: t,
                        position: traj.position_at(t)?,
                        speed: self.estimator.speed_at(traj, t)?,
                        accel: self.estimator.accel_at(traj, t)?,
                    };

                    if let Some(p) = input.pointer {
                        let (t_first, t_last) = traj.time_bounds();
                        self.scrub_time = self.mapper.map(p, t_first, t_last);
                    }
                }
            }
        }

        Ok(())
    }

    fn apply_triggers(&mut self, input: &FrameInput) -> TraceResult<()> {
        if input.new_run {
            self.new_run(input.now_millis);
            return Ok(());
        }

        if input.toggle_pause {
            self.state = match self.state {
                SessionState::Paused => SessionState::Running,
                SessionState::Running => SessionState::Paused,
                SessionState::Stopped => SessionState::Stopped,
            };
            log::debug!("session now {:?}", self.state);
        }

        if input.end_simulation && self.state != SessionState::Stopped {
            self.stop()?;
        }

        if input.toggle_trace && self.state == SessionState::Stopped {
            self.show_trace = !self.show_trace;
        }

        Ok(())
    }

    /// Running/Paused -> Stopped edge: freeze the recording and rebuild once
    fn stop(&mut self) -> TraceResult<()> {
        self.state = SessionState::Stopped;
        self.recorder.stop();

        let got = self.recorder.len();
        if got < self.parameters.min_samples {
            log::warn!(
                "run {} ended with {got} samples, need {} to reconstruct; scrubbing disabled",
                self.runs,
                self.parameters.min_samples
            );
            return Ok(());
        }

        let traj = ReconstructedTrajectory::from_samples(self.recorder.samples())?;
        let (t_first, t_last) = traj.time_bounds();
        log::info!(
            "run {} stopped: rebuilt trajectory from {} control points over [{t_first:.3}, {t_last:.3}] s",
            self.runs,
            traj.len()
        );
        self.scrub_time = t_first;
        self.trajectory = Some(traj);
        Ok(())
    }

    /// Any state -> Paused with a fresh particle and empty history
    fn new_run(&mut self, now_millis: i64) {
        self.particle = self.template.respawned_particle();
        self.recorder.clear();
        self.trajectory = None;
        self.scrub_time = 0.0;
        self.show_trace = false;
        self.run_started_millis = Some(now_millis);
        self.state = SessionState::Paused;
        self.readout = live_readout(&self.particle, 0.0);
        self.runs += 1;
        log::info!("starting run {} with {:?}", self.runs, self.particle.policy);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn recorder(&self) -> &TrajectoryRecorder {
        &self.recorder
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        self.recorder.samples()
    }

    pub fn trajectory(&self) -> Option<&ReconstructedTrajectory> {
        self.trajectory.as_ref()
    }

    pub fn estimator(&self) -> &DerivativeEstimator {
        &self.estimator
    }

    /// Current scrub time in seconds since the first sample
    pub fn scrub_time(&self) -> f64 {
        self.scrub_time
    }

    /// Normalized slider marker position for the current scrub time
    pub fn scrub_position(&self) -> Option<f64> {
        let (t_first, t_last) = self.trajectory.as_ref()?.time_bounds();
        Some(self.mapper.normalized(self.scrub_time, t_first, t_last))
    }

    pub fn show_trace(&self) -> bool {
        self.show_trace
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// 1 for the first run, incremented on every new run
    pub fn runs(&self) -> u32 {
        self.runs
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new(Engine::default(), Parameters::default(), ParticleTemplate::default())
    }
}

fn live_readout(particle: &Particle, time: f64) -> Readout {
    Readout {
        time,
        position: particle.position,
        speed: particle.velocity.norm(),
        accel: particle.acceleration_magnitude(),
    }
}
