//! Transition detector.

use tracing::debug;

use crate::circuit::CircuitState;

use super::StateStore;

/// Outcome of comparing the current state with the committed baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionEvent {
    /// Baseline before this cycle
    pub previous: CircuitState,
    /// State evaluated in this cycle
    pub current: CircuitState,
    /// Whether U or R differs from the baseline (exact comparison)
    pub changed: bool,
}

impl TransitionEvent {
    /// Whether the renderer should play the one-shot pulse.
    pub fn fires_pulse(&self) -> bool {
        self.changed
    }
}

/// Compare `current` with the stored baseline, then commit `current` as the
/// new baseline.
///
/// The commit happens unconditionally and after the comparison, so an
/// unchanged state never fires twice and a real change is never missed.
/// Comparison is exact: the smallest representable step counts as a change.
pub fn detect_and_commit(store: &mut StateStore, current: CircuitState) -> TransitionEvent {
    let previous = store.previous();
    let changed =
        current.voltage != previous.voltage || current.resistance != previous.resistance;

    store.set_previous(current);

    if changed {
        debug!(%previous, %current, "circuit state changed");
    }

    TransitionEvent {
        previous,
        current,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_cycle_with_defaults_does_not_fire() {
        let mut store = StateStore::new();
        let event = detect_and_commit(&mut store, CircuitState::default());
        assert!(!event.changed);
        assert_eq!(event.previous, CircuitState::default());
    }

    #[test]
    fn test_change_fires_once() {
        let mut store = StateStore::new();
        let base = CircuitState::new(20.0, 150.0);
        assert!(!detect_and_commit(&mut store, base).changed);
        assert!(!detect_and_commit(&mut store, base).changed);

        let moved = base.with_voltage(25.0);
        let event = detect_and_commit(&mut store, moved);
        assert!(event.changed);
        assert!(event.fires_pulse());
        assert_eq!(event.previous, base);
        assert_eq!(event.current, moved);

        assert!(!detect_and_commit(&mut store, moved).changed);
        assert_eq!(store.previous(), moved);
    }

    #[test]
    fn test_resistance_change_fires() {
        let mut store = StateStore::new();
        let event = detect_and_commit(&mut store, CircuitState::new(20.0, 151.0));
        assert!(event.changed);
    }

    #[test]
    fn test_smallest_step_counts() {
        let mut store = StateStore::new();
        let nudged = CircuitState::new(f64::from_bits(20.0_f64.to_bits() + 1), 150.0);
        assert!(detect_and_commit(&mut store, nudged).changed);
    }
}
