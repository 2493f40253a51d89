//! Reactive state store.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::circuit::CircuitState;
use crate::error::OhmError;
use crate::{DEFAULT_RESISTANCE, DEFAULT_VOLTAGE};

/// Keys held by the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// Current source voltage
    Voltage,
    /// Current load resistance
    Resistance,
    /// Voltage committed by the last evaluation cycle
    PreviousVoltage,
    /// Resistance committed by the last evaluation cycle
    PreviousResistance,
}

impl StateKey {
    /// All keys, in a stable order.
    pub const ALL: [StateKey; 4] = [
        StateKey::Voltage,
        StateKey::Resistance,
        StateKey::PreviousVoltage,
        StateKey::PreviousResistance,
    ];

    /// Value returned when the key has never been written.
    pub fn default_value(&self) -> f64 {
        match self {
            StateKey::Voltage | StateKey::PreviousVoltage => DEFAULT_VOLTAGE,
            StateKey::Resistance | StateKey::PreviousResistance => DEFAULT_RESISTANCE,
        }
    }

    /// Short name used in event input.
    pub fn name(&self) -> &'static str {
        match self {
            StateKey::Voltage => "U",
            StateKey::Resistance => "R",
            StateKey::PreviousVoltage => "prev_U",
            StateKey::PreviousResistance => "prev_R",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StateKey {
    type Err = OhmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "U" | "u" => Ok(StateKey::Voltage),
            "R" | "r" => Ok(StateKey::Resistance),
            "prev_U" | "prev_u" => Ok(StateKey::PreviousVoltage),
            "prev_R" | "prev_r" => Ok(StateKey::PreviousResistance),
            other => Err(OhmError::UnknownKey {
                key: other.to_string(),
            }),
        }
    }
}

/// Session-scoped key-value state.
///
/// Reads of absent keys return the key's default without writing it;
/// [`StateStore::initialize`] performs the one-time write at session start.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    values: HashMap<StateKey, f64>,
}

impl StateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the defaults for the circuit keys that are still absent.
    pub fn initialize(&mut self) {
        for key in [StateKey::Voltage, StateKey::Resistance] {
            self.values.entry(key).or_insert_with(|| key.default_value());
        }
    }

    /// Get a value, or the key's default if it was never written.
    pub fn get(&self, key: StateKey) -> f64 {
        self.values
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_value())
    }

    /// Overwrite a value.
    pub fn set(&mut self, key: StateKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Whether the key has been written.
    pub fn contains(&self, key: StateKey) -> bool {
        self.values.contains_key(&key)
    }

    /// The current circuit state.
    pub fn circuit(&self) -> CircuitState {
        CircuitState::new(
            self.get(StateKey::Voltage),
            self.get(StateKey::Resistance),
        )
    }

    /// Overwrite the current circuit state.
    pub fn set_circuit(&mut self, state: CircuitState) {
        self.set(StateKey::Voltage, state.voltage);
        self.set(StateKey::Resistance, state.resistance);
    }

    /// The circuit state committed by the last evaluation cycle.
    pub fn previous(&self) -> CircuitState {
        CircuitState::new(
            self.get(StateKey::PreviousVoltage),
            self.get(StateKey::PreviousResistance),
        )
    }

    /// Overwrite the committed baseline.
    pub fn set_previous(&mut self, state: CircuitState) {
        self.set(StateKey::PreviousVoltage, state.voltage);
        self.set(StateKey::PreviousResistance, state.resistance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_default_does_not_write() {
        let store = StateStore::new();
        assert_eq!(store.get(StateKey::Voltage), 20.0);
        assert_eq!(store.get(StateKey::PreviousResistance), 150.0);
        assert!(!store.contains(StateKey::Voltage));
        assert_eq!(store.circuit(), CircuitState::default());
        assert_eq!(store.previous(), CircuitState::default());
    }

    #[test]
    fn test_initialize_writes_once() {
        let mut store = StateStore::new();
        store.set(StateKey::Voltage, 42.0);
        store.initialize();
        assert_eq!(store.get(StateKey::Voltage), 42.0);
        assert!(store.contains(StateKey::Resistance));
        assert_eq!(store.get(StateKey::Resistance), 150.0);
        assert!(!store.contains(StateKey::PreviousVoltage));
    }

    #[test]
    fn test_set_circuit_and_previous() {
        let mut store = StateStore::new();
        store.set_circuit(CircuitState::new(5.0, 10.0));
        store.set_previous(CircuitState::new(1.0, 2.0));
        assert_eq!(store.circuit(), CircuitState::new(5.0, 10.0));
        assert_eq!(store.previous(), CircuitState::new(1.0, 2.0));
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in StateKey::ALL {
            assert_eq!(key.name().parse::<StateKey>().unwrap(), key);
        }
        assert!("I".parse::<StateKey>().is_err());
    }
}
