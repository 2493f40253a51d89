//! Particle schedule generator.
//!
//! Every particle follows the same closed path with the same loop duration;
//! only its phase differs. Phases are spread evenly over exactly one loop so
//! the particles stay equidistant forever.

use super::BASE_CYCLE_SECONDS;

/// Timing for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleEntry {
    /// Head start within the loop, in seconds. In `[0, cycle_duration)`.
    pub phase_offset: f64,
    /// Duration of one full loop, in seconds.
    pub cycle_duration: f64,
}

/// Evenly phased timings for all particles on the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSchedule {
    cycle_duration: f64,
    entries: Vec<ScheduleEntry>,
}

impl ParticleSchedule {
    /// Build a schedule for `particle_count` particles.
    ///
    /// # Panics
    /// Panics if `cycle_duration` is not positive and finite. Callers derive
    /// it from a mapped speed, which never produces such a value.
    pub fn new(particle_count: usize, cycle_duration: f64) -> Self {
        assert!(
            cycle_duration > 0.0 && cycle_duration.is_finite(),
            "cycle duration must be positive and finite, got {cycle_duration}"
        );

        let spacing = cycle_duration / particle_count.max(1) as f64;
        let entries = (0..particle_count)
            .map(|i| ScheduleEntry {
                phase_offset: i as f64 * spacing,
                cycle_duration,
            })
            .collect();

        Self {
            cycle_duration,
            entries,
        }
    }

    /// Loop duration shared by every particle.
    pub fn cycle_duration(&self) -> f64 {
        self.cycle_duration
    }

    /// Distance in seconds between neighbouring particles, if any.
    pub fn spacing(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.cycle_duration / self.entries.len() as f64)
        }
    }

    /// Per-particle timings in phase order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Phase offsets in phase order.
    pub fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.phase_offset)
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no particles.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of a particle along its loop at time `t`, in seconds.
    ///
    /// Returns `(t + phase_offset) mod cycle_duration`, always in
    /// `[0, cycle_duration)` (also for negative `t`), or `None` for an
    /// index outside the schedule.
    pub fn position(&self, index: usize, t: f64) -> Option<f64> {
        let entry = self.entries.get(index)?;
        let pos = (t + entry.phase_offset).rem_euclid(self.cycle_duration);
        // rem_euclid can round up to exactly the modulus for tiny negatives
        Some(if pos >= self.cycle_duration { 0.0 } else { pos })
    }

    /// Position of a particle as a fraction of its loop, in `[0, 1)`.
    pub fn progress(&self, index: usize, t: f64) -> Option<f64> {
        self.position(index, t).map(|pos| pos / self.cycle_duration)
    }
}

/// Build a schedule for `particle_count` particles moving at `speed`, with
/// the default base loop duration.
///
/// # Panics
/// Panics if `speed` is not positive and finite.
pub fn build_schedule(particle_count: usize, speed: f64) -> ParticleSchedule {
    assert!(
        speed > 0.0 && speed.is_finite(),
        "speed must be positive and finite, got {speed}"
    );
    ParticleSchedule::new(particle_count, BASE_CYCLE_SECONDS / speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_schedule() {
        let schedule = build_schedule(0, 1.0);
        assert!(schedule.is_empty());
        assert_eq!(schedule.cycle_duration(), 10.0);
        assert_eq!(schedule.spacing(), None);
        assert_eq!(schedule.position(0, 1.0), None);
    }

    #[test]
    fn test_even_spacing() {
        let schedule = build_schedule(4, 2.0);
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.cycle_duration(), 5.0);
        let offsets: Vec<f64> = schedule.offsets().collect();
        assert_eq!(offsets, vec![0.0, 1.25, 2.5, 3.75]);
        assert!(schedule.entries().iter().all(|e| e.cycle_duration == 5.0));
    }

    #[test]
    fn test_offsets_partition_one_cycle() {
        for n in 1..=25 {
            let schedule = build_schedule(n, 0.7);
            let cycle = schedule.cycle_duration();
            let spacing = schedule.spacing().unwrap();
            assert_relative_eq!(spacing * n as f64, cycle, epsilon = 1e-9);

            let offsets: Vec<f64> = schedule.offsets().collect();
            assert_eq!(offsets[0], 0.0);
            for pair in offsets.windows(2) {
                assert!(pair[1] > pair[0]);
                assert_relative_eq!(pair[1] - pair[0], spacing, epsilon = 1e-9);
            }
            assert!(*offsets.last().unwrap() < cycle);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = build_schedule(17, 3.3);
        let b = build_schedule(17, 3.3);
        for (x, y) in a.offsets().zip(b.offsets()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_position_wraps() {
        let schedule = build_schedule(2, 1.0);
        // cycle 10s, offsets 0 and 5
        assert_eq!(schedule.position(0, 3.0), Some(3.0));
        assert_eq!(schedule.position(1, 3.0), Some(8.0));
        assert_eq!(schedule.position(1, 7.0), Some(2.0));
        assert_eq!(schedule.position(0, -2.0), Some(8.0));
        assert_eq!(schedule.progress(1, 0.0), Some(0.5));
        assert_eq!(schedule.position(2, 0.0), None);
    }

    #[test]
    fn test_position_stays_below_cycle() {
        let schedule = build_schedule(3, 0.75);
        for t in [-1e-17, -1e-300, 0.0, 1e6, 13.333_333_333_333_334] {
            for i in 0..schedule.len() {
                let pos = schedule.position(i, t).unwrap();
                assert!((0.0..schedule.cycle_duration()).contains(&pos));
            }
        }
    }

    #[test]
    #[should_panic(expected = "speed must be positive")]
    fn test_zero_speed_panics() {
        build_schedule(3, 0.0);
    }
}
