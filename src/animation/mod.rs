//! Animation parameters derived from the circuit current.
//!
//! ## Flow visualization
//!
//! Current is shown as particles looping around the closed circuit path.
//! Two knobs carry the magnitude of I:
//!
//! - **speed**: how fast one loop completes (`cycle = BASE_CYCLE_SECONDS / speed`)
//! - **particle count**: how densely the loop is populated
//!
//! Both grow linearly with I and saturate at a cap, so large currents stay
//! readable instead of turning into a blur:
//!
//! ```text
//! speed          = min(I * SPEED_GAIN, MAX_SPEED)
//! particle_count = floor(min(I * PARTICLE_GAIN, MAX_PARTICLES))
//! ```
//!
//! A stationary circuit (U = 0 or I = 0) shows no particles and keeps a unit
//! speed so every derived duration stays finite.

mod mapper;
mod schedule;

pub use mapper::{map_to_animation, AnimationConfig, AnimationParameters};
pub use schedule::{build_schedule, ParticleSchedule, ScheduleEntry};

/// Speed units per ampere.
pub const SPEED_GAIN: f64 = 4.0;

/// Speed cap.
pub const MAX_SPEED: f64 = 12.0;

/// Particles per ampere.
pub const PARTICLE_GAIN: f64 = 25.0;

/// Particle cap.
pub const MAX_PARTICLES: f64 = 25.0;

/// Largest particle cap a configuration may ask for.
pub const PARTICLE_CAP_LIMIT: f64 = 1000.0;

/// Duration of one loop at unit speed, in seconds.
pub const BASE_CYCLE_SECONDS: f64 = 10.0;

/// Speed reported for a stationary circuit.
pub const STATIONARY_SPEED: f64 = 1.0;
