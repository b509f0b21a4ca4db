use std::collections::VecDeque;
use std::fmt;

/// Number of instantaneous samples kept for the rolling statistics.
pub const FRAME_WINDOW: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Status readout, values rounded to whole frames per second.
impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames per Second:")?;
        writeln!(f, "latest = {}", self.latest.round())?;
        writeln!(f, "avg of last {FRAME_WINDOW} = {}", self.mean.round())?;
        writeln!(f, "min of last {FRAME_WINDOW} = {}", self.min.round())?;
        write!(f, "max of last {FRAME_WINDOW} = {}", self.max.round())
    }
}

/// Rolling frames-per-second over the last `FRAME_WINDOW` frames.
/// Timestamps are in milliseconds.
pub struct FrameRateTracker {
    frames: VecDeque<f64>,
    last_timestamp: f64,
}

impl FrameRateTracker {
    /// `now` seeds the previous timestamp, so the first sample measures the
    /// time since construction.
    pub fn new(now: f64) -> Self {
        Self {
            frames: VecDeque::with_capacity(FRAME_WINDOW + 1),
            last_timestamp: now,
        }
    }

    pub fn record_frame(&mut self, now: f64) -> FrameStats {
        let delta = now - self.last_timestamp;
        self.last_timestamp = now;

        let fps = 1000.0 / delta;
        self.frames.push_back(fps);
        if self.frames.len() > FRAME_WINDOW {
            self.frames.pop_front();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &f in &self.frames {
            sum += f;
            min = min.min(f);
            max = max.max(f);
        }

        FrameStats {
            latest: fps,
            mean: sum / self.frames.len() as f64,
            min,
            max,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
