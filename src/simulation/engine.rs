//! High-level runtime engine settings
//!
//! Selects RNG seeding, slider orientation and whether random-walk
//! accelerations are scaled by frame time when a `SimulationSession` is built

use super::scrub::SliderOrientation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub seed: Option<u64>, // None = seed from OS entropy
    pub slider: SliderOrientation, // which end of the slider is the start of the run
    pub time_scaled_acceleration: bool, // scale fresh random-walk draws by frame seconds
}
