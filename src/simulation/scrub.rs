//! Mapping between a slider position and a time inside the recorded span

/// Which end of the slider track holds the start of the recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderOrientation {
    #[default]
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrubMapper {
    pub orientation: SliderOrientation,
}

impl ScrubMapper {
    pub fn new(orientation: SliderOrientation) -> Self {
        Self { orientation }
    }

    /// Query time for normalized track position `p`
    /// Always lands in `[t_first, t_last]`, whatever `p` is; a non-finite `p`
    /// maps to the start of the track
    ///
    /// A non-finite bound collapses the span onto the other bound, and with
    /// no finite bound at all the result is 0
    pub fn map(&self, p: f64, t_first: f64, t_last: f64) -> f64 {
        let (lo, hi) = match (t_first.is_finite(), t_last.is_finite()) {
            (true, true) => (t_first.min(t_last), t_first.max(t_last)),
            (true, false) => return t_first,
            (false, true) => return t_last,
            (false, false) => return 0.0,
        };
        let p = if p.is_finite() { p } else { 0.0 };

        let t = match self.orientation {
            SliderOrientation::LeftToRight => lo + p * (hi - lo),
            SliderOrientation::RightToLeft => hi - p * (hi - lo),
        };
        t.clamp(lo, hi)
    }

    /// Normalized track position of query time `t`, inverse of `map`
    pub fn normalized(&self, t: f64, t_first: f64, t_last: f64) -> f64 {
        let (lo, hi) = (t_first.min(t_last), t_first.max(t_last));
        let span = hi - lo;
        if !(span > 0.0 && span.is_finite()) || !t.is_finite() {
            return match self.orientation {
                SliderOrientation::LeftToRight => 0.0,
                SliderOrientation::RightToLeft => 1.0,
            };
        }

        let p = ((t - lo) / span).clamp(0.0, 1.0);
        match self.orientation {
            SliderOrientation::LeftToRight => p,
            SliderOrientation::RightToLeft => 1.0 - p,
        }
    }
}
