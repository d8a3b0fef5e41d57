//! Append-only recording of the particle's positions over a run
//!
//! The recorder does not know about pausing; the session only feeds it while
//! the simulation is running. Once stopped, the samples stay frozen until
//! `clear`.

use crate::error::{TraceError, TraceResult};
use super::states::NVec3;

/// One recorded position and the run time it was taken at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub timestamp_millis: i64, // milliseconds since the run started
    pub position: NVec3,
}

#[derive(Debug, Clone, Default)]
pub struct TrajectoryRecorder {
    samples: Vec<TrajectorySample>,
    stopped: bool,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample at the end of the sequence
    /// Rejected once stopped, or when `timestamp_millis` goes backwards
    pub fn record(&mut self, timestamp_millis: i64, position: NVec3) -> TraceResult<()> {
        self.accepts(timestamp_millis)?;
        self.samples.push(TrajectorySample { timestamp_millis, position });
        Ok(())
    }

    /// Would `record` take a sample at `timestamp_millis`? Nothing is stored
    pub fn accepts(&self, timestamp_millis: i64) -> TraceResult<()> {
        if self.stopped {
            return Err(TraceError::RecorderStopped);
        }
        match self.samples.last() {
            Some(last) if timestamp_millis < last.timestamp_millis => Err(TraceError::TimestampOutOfOrder {
                timestamp: timestamp_millis,
                last: last.timestamp_millis,
            }),
            _ => Ok(()),
        }
    }

    /// Freeze the sequence. Calling it again does nothing
    pub fn stop(&mut self) {
        if !self.stopped {
            log::debug!("recorder stopped with {} samples", self.samples.len());
        }
        self.stopped = true;
    }

    /// Drop every sample and accept recordings again
    pub fn clear(&mut self) {
        self.samples.clear();
        self.stopped = false;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }
}
