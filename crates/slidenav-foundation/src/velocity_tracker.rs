//! Release velocity estimation for drag gestures.
//!
//! Uses the impulse strategy: every pair of consecutive samples contributes
//! the kinetic energy needed to move from the previous estimated velocity to
//! the velocity implied by that pair.

const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one are considered.
const HORIZON_MS: i64 = 100;

/// A gap longer than this between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks pointer positions along a single axis.
#[derive(Clone)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Samples older than the newest one restart the history.
    pub fn add_position(&mut self, time_ms: i64, position: f32) {
        if let Some(newest) = self.samples[self.newest] {
            if time_ms < newest.time_ms {
                log::debug!(
                    "pointer time went backwards ({} -> {}ms), resetting velocity",
                    newest.time_ms,
                    time_ms
                );
                self.reset();
            }
        }
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in px/s; 0.0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Collected newest first; `ages` are non-positive offsets in ms.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut ages = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut previous_time = newest.time_ms;

        while count < HISTORY_SIZE {
            let Some(sample) = self.samples[index] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            ages[count] = -(age as f32);
            previous_time = sample.time_ms;
            count += 1;
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &ages[..count]) * 1000.0
    }

    /// Velocity in px/s clamped to `[-max_velocity, max_velocity]`.
    pub fn velocity_clamped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// `positions`/`ages` are ordered newest first. Returns px/ms.
fn impulse_velocity(positions: &[f32], ages: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let dt = ages[i - 1] - ages[i];
        if dt == 0.0 {
            continue;
        }
        let segment_velocity = (positions[i - 1] - positions[i]) / dt;
        let previous_velocity = energy_to_velocity(work);
        work += (segment_velocity - previous_velocity) * segment_velocity.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// E = 0.5 * v^2 with unit mass, sign preserved.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
