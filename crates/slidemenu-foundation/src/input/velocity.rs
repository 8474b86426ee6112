//! Horizontal velocity estimation for fling classification.
//!
//! Keeps a small ring buffer of recent `(time, x)` samples and produces a
//! 1-second-normalized velocity estimate over a short horizon. Only the
//! release-time estimate is needed, so a least-squares fit over the recent
//! samples is used rather than full impulse tracking.

/// Ring buffer size for velocity samples.
const HISTORY_SIZE: usize = 10;

/// Only samples within the last 100ms count toward the estimate.
const HORIZON_MS: i64 = 100;

/// If no sample arrived for this long, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    x: f32,
}

/// Tracks horizontal pointer positions across one gesture stream.
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records the horizontal position of a pointer event.
    pub fn add_sample(&mut self, time_ms: i64, x: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, x });
    }

    /// Clears all tracked samples for a new gesture stream.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    /// Estimates the horizontal velocity in units per second.
    ///
    /// Returns 0.0 when there are fewer than two usable samples, when the
    /// recent samples fall outside the horizon, or when the pointer paused
    /// longer than [`ASSUME_STOPPED_MS`] before the newest sample.
    pub fn x_velocity(&self) -> f32 {
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current = self.index;
        let mut newer_time = newest.time_ms;
        while let Some(sample) = self.samples[current] {
            let age = newest.time_ms - sample.time_ms;
            let gap = newer_time - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            times[count] = -(age as f32);
            positions[count] = sample.x;
            newer_time = sample.time_ms;

            current = if current == 0 {
                HISTORY_SIZE - 1
            } else {
                current - 1
            };
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        // Least-squares slope of position over time, in units per ms.
        let n = count as f32;
        let mean_t = times[..count].iter().sum::<f32>() / n;
        let mean_x = positions[..count].iter().sum::<f32>() / n;
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for i in 0..count {
            let dt = times[i] - mean_t;
            numerator += dt * (positions[i] - mean_x);
            denominator += dt * dt;
        }
        if denominator == 0.0 {
            return 0.0;
        }

        numerator / denominator * 1000.0
    }

    /// Like [`x_velocity`](Self::x_velocity), clamped to `max_velocity`.
    pub fn x_velocity_capped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.x_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }
}
