//! Quantity calculator: Ohm's law with a defined zero-resistance fallback.

use tracing::warn;

use super::CircuitState;

/// Current derived from a circuit state. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantity {
    /// Current in amperes
    pub current: f64,
}

impl DerivedQuantity {
    /// Derive the current for a circuit state.
    pub fn from_state(state: &CircuitState) -> Self {
        Self {
            current: compute_current(state.voltage, state.resistance),
        }
    }
}

/// Compute I = U / R.
///
/// A resistance that is not strictly positive (zero, negative or NaN) reads
/// as "no current" and yields 0 instead of dividing. The function is total.
pub fn compute_current(voltage: f64, resistance: f64) -> f64 {
    // `!(r > 0)` also catches NaN
    if !(resistance > 0.0) {
        if resistance != 0.0 {
            warn!(resistance, "non-positive resistance, treating current as zero");
        }
        return 0.0;
    }
    voltage / resistance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ohms_law() {
        assert_eq!(compute_current(20.0, 150.0), 20.0 / 150.0);
        assert_eq!(compute_current(300.0, 1.0), 300.0);
        assert_eq!(compute_current(0.0, 150.0), 0.0);
        assert_relative_eq!(compute_current(12.0, 4.0), 3.0);
    }

    #[test]
    fn test_zero_resistance_fallback() {
        assert_eq!(compute_current(20.0, 0.0), 0.0);
        assert_eq!(compute_current(0.0, 0.0), 0.0);
        assert_eq!(compute_current(600.0, -0.0), 0.0);
    }

    #[test]
    fn test_negative_and_nan_resistance_fallback() {
        assert_eq!(compute_current(20.0, -10.0), 0.0);
        assert_eq!(compute_current(20.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_derived_quantity_tracks_state() {
        let state = CircuitState::new(10.0, 5.0);
        assert_eq!(DerivedQuantity::from_state(&state).current, 2.0);

        let state = state.with_resistance(20.0);
        assert_eq!(DerivedQuantity::from_state(&state).current, 0.5);
    }
}
