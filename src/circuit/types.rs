//! Core types for circuit state.

use std::fmt;

use crate::error::{OhmError, Result};
use crate::{DEFAULT_RESISTANCE, DEFAULT_VOLTAGE};

/// The pair (U, R) describing the circuit at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitState {
    /// Source voltage in volts
    pub voltage: f64,
    /// Load resistance in ohms
    pub resistance: f64,
}

impl CircuitState {
    /// Create a circuit state from a voltage and a resistance.
    pub fn new(voltage: f64, resistance: f64) -> Self {
        Self {
            voltage,
            resistance,
        }
    }

    /// Return a copy with a different voltage.
    pub fn with_voltage(self, voltage: f64) -> Self {
        Self { voltage, ..self }
    }

    /// Return a copy with a different resistance.
    pub fn with_resistance(self, resistance: f64) -> Self {
        Self { resistance, ..self }
    }
}

impl Default for CircuitState {
    fn default() -> Self {
        Self::new(DEFAULT_VOLTAGE, DEFAULT_RESISTANCE)
    }
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U={} V, R={} Ω", self.voltage, self.resistance)
    }
}

/// Input ranges enforced by the interaction layer before values reach the store.
///
/// The engine itself accepts any value; these limits are what the sliders
/// allow, and keep R strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    pub min_voltage: f64,
    pub max_voltage: f64,
    pub min_resistance: f64,
    pub max_resistance: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_voltage: 0.0,
            max_voltage: 300.0,
            min_resistance: 1.0,
            max_resistance: 500.0,
        }
    }
}

impl InputLimits {
    /// The wider ranges used by the later revisions of the visualizer.
    pub fn extended() -> Self {
        Self {
            max_voltage: 600.0,
            max_resistance: 600.0,
            ..Self::default()
        }
    }

    /// Check that both ranges are ordered and that R stays strictly positive.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.min_voltage,
            self.max_voltage,
            self.min_resistance,
            self.max_resistance,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(OhmError::invalid_config("input limits must be finite"));
        }
        if self.min_voltage < 0.0 || self.min_voltage > self.max_voltage {
            return Err(OhmError::invalid_config(format!(
                "voltage range [{}, {}] is not a non-negative interval",
                self.min_voltage, self.max_voltage
            )));
        }
        if self.min_resistance <= 0.0 || self.min_resistance > self.max_resistance {
            return Err(OhmError::invalid_config(format!(
                "resistance range [{}, {}] must be strictly positive and ordered",
                self.min_resistance, self.max_resistance
            )));
        }
        Ok(())
    }

    /// Clamp a voltage into range. NaN clamps to the minimum.
    pub fn clamp_voltage(&self, voltage: f64) -> f64 {
        clamp_or_min(voltage, self.min_voltage, self.max_voltage)
    }

    /// Clamp a resistance into range. NaN clamps to the minimum.
    pub fn clamp_resistance(&self, resistance: f64) -> f64 {
        clamp_or_min(resistance, self.min_resistance, self.max_resistance)
    }

    /// Clamp both values of a circuit state.
    pub fn clamp(&self, state: CircuitState) -> CircuitState {
        CircuitState::new(
            self.clamp_voltage(state.voltage),
            self.clamp_resistance(state.resistance),
        )
    }
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CircuitState::default();
        assert_eq!(state.voltage, 20.0);
        assert_eq!(state.resistance, 150.0);
    }

    #[test]
    fn test_clamp_keeps_resistance_positive() {
        let limits = InputLimits::default();
        let clamped = limits.clamp(CircuitState::new(-5.0, 0.0));
        assert_eq!(clamped, CircuitState::new(0.0, 1.0));

        let clamped = limits.clamp(CircuitState::new(1000.0, 1e6));
        assert_eq!(clamped, CircuitState::new(300.0, 500.0));

        assert_eq!(limits.clamp_resistance(f64::NAN), 1.0);
    }

    #[test]
    fn test_extended_limits() {
        let limits = InputLimits::extended();
        assert_eq!(limits.clamp_voltage(550.0), 550.0);
        assert_eq!(limits.clamp_resistance(700.0), 600.0);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_invalid_limits() {
        let limits = InputLimits {
            min_resistance: 0.0,
            ..InputLimits::default()
        };
        assert!(limits.validate().is_err());

        let limits = InputLimits {
            min_voltage: 10.0,
            max_voltage: 5.0,
            ..InputLimits::default()
        };
        assert!(limits.validate().is_err());
    }
}
