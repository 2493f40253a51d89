//! Animation parameter mapper.

use crate::error::{OhmError, Result};

use super::{
    BASE_CYCLE_SECONDS, MAX_PARTICLES, MAX_SPEED, PARTICLE_CAP_LIMIT, PARTICLE_GAIN, SPEED_GAIN,
    STATIONARY_SPEED,
};

/// Configuration for the current-to-animation mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Speed units per ampere.
    pub speed_gain: f64,
    /// Upper bound on speed.
    pub max_speed: f64,
    /// Particles per ampere.
    pub particle_gain: f64,
    /// Upper bound on the particle count.
    pub max_particles: f64,
    /// Loop duration at unit speed, in seconds.
    pub base_cycle_seconds: f64,
    /// Speed used when the circuit is stationary.
    pub stationary_speed: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_gain: SPEED_GAIN,
            max_speed: MAX_SPEED,
            particle_gain: PARTICLE_GAIN,
            max_particles: MAX_PARTICLES,
            base_cycle_seconds: BASE_CYCLE_SECONDS,
            stationary_speed: STATIONARY_SPEED,
        }
    }
}

impl AnimationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the speed gain and cap.
    pub fn with_speed(mut self, gain: f64, max: f64) -> Self {
        self.speed_gain = gain;
        self.max_speed = max;
        self
    }

    /// Set the particle gain and cap.
    ///
    /// The cap is floored when the count is computed, so a fractional cap
    /// behaves like the integer below it.
    pub fn with_particles(mut self, gain: f64, max: f64) -> Self {
        self.particle_gain = gain;
        self.max_particles = max;
        self
    }

    /// Set the loop duration at unit speed (in seconds).
    pub fn with_base_cycle(mut self, seconds: f64) -> Self {
        self.base_cycle_seconds = seconds;
        self
    }

    /// Check that every output invariant holds: positive finite speed,
    /// non-negative whole particle counts, positive cycle durations.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("speed_gain", self.speed_gain),
            ("max_speed", self.max_speed),
            ("particle_gain", self.particle_gain),
            ("base_cycle_seconds", self.base_cycle_seconds),
            ("stationary_speed", self.stationary_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(OhmError::invalid_config(format!(
                    "{name} must be positive and finite (got {value})"
                )));
            }
        }
        if !(self.max_particles >= 0.0) || self.max_particles > PARTICLE_CAP_LIMIT {
            return Err(OhmError::invalid_config(format!(
                "max_particles must be within [0, {PARTICLE_CAP_LIMIT}] (got {})",
                self.max_particles
            )));
        }
        Ok(())
    }

    /// Map a voltage and its derived current to animation parameters.
    pub fn map(&self, voltage: f64, current: f64) -> AnimationParameters {
        // Negative and NaN currents read as stationary too
        if voltage == 0.0 || !(current > 0.0) || !current.is_finite() {
            return AnimationParameters::stationary(self.stationary_speed.max(self.min_speed()));
        }

        let speed = (current * self.speed_gain)
            .min(self.max_speed)
            .max(self.min_speed());
        let particles = (current * self.particle_gain)
            .min(self.max_particles)
            .min(PARTICLE_CAP_LIMIT)
            .floor();

        AnimationParameters {
            speed,
            particle_count: particles as usize,
        }
    }

    /// Slowest speed whose loop duration is still finite.
    ///
    /// Subnormal currents would otherwise map to a speed so small that
    /// `base_cycle_seconds / speed` overflows.
    pub fn min_speed(&self) -> f64 {
        self.base_cycle_seconds / (f64::MAX / 2.0)
    }

    /// Loop duration for a given speed.
    pub fn cycle_duration(&self, speed: f64) -> f64 {
        self.base_cycle_seconds / speed
    }
}

/// How the flow animation is paced and how dense it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParameters {
    /// Abstract speed, higher = faster loop. Always positive.
    pub speed: f64,
    /// Number of particles on the loop.
    pub particle_count: usize,
}

impl AnimationParameters {
    /// Parameters for a circuit with no flowing current.
    pub fn stationary(speed: f64) -> Self {
        Self {
            speed,
            particle_count: 0,
        }
    }

    /// Whether any particles move.
    pub fn is_stationary(&self) -> bool {
        self.particle_count == 0
    }
}

/// Map (U, I) to animation parameters with the default constants.
pub fn map_to_animation(voltage: f64, current: f64) -> AnimationParameters {
    AnimationConfig::default().map(voltage, current)
}
