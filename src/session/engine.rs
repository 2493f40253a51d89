//! Evaluation cycle and the per-session facade.

use tracing::{debug, trace};

use crate::animation::{AnimationConfig, AnimationParameters, ParticleSchedule};
use crate::circuit::{CircuitState, DerivedQuantity, InputLimits};
use crate::error::Result;
use crate::events::InteractionEvent;

use super::{detect_and_commit, StateKey, StateStore, TransitionEvent};

/// Everything the renderer needs after one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The circuit state that was evaluated
    pub state: CircuitState,
    /// Derived current
    pub current: DerivedQuantity,
    /// Animation pacing and density
    pub animation: AnimationParameters,
    /// Per-particle timing
    pub schedule: ParticleSchedule,
    /// Pulse trigger
    pub transition: TransitionEvent,
}

/// Run one evaluation cycle against a store.
///
/// Reads the circuit, derives I, maps it to animation parameters, expands
/// the schedule, then detects and commits the transition. The commit is the
/// only write and happens exactly once.
pub fn evaluate(store: &mut StateStore, config: &AnimationConfig) -> Evaluation {
    let state = store.circuit();
    let current = DerivedQuantity::from_state(&state);
    let animation = config.map(state.voltage, current.current);
    let schedule = ParticleSchedule::new(
        animation.particle_count,
        config.cycle_duration(animation.speed),
    );
    let transition = detect_and_commit(store, state);

    debug!(
        voltage = state.voltage,
        resistance = state.resistance,
        current = current.current,
        speed = animation.speed,
        particles = animation.particle_count,
        changed = transition.changed,
        "evaluated cycle"
    );

    Evaluation {
        state,
        current,
        animation,
        schedule,
        transition,
    }
}

/// Configuration for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Current-to-animation mapping.
    pub animation: AnimationConfig,
    /// Ranges applied to user input.
    pub limits: InputLimits,
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation mapping.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Set the input limits.
    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate both halves of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.animation.validate()?;
        self.limits.validate()
    }
}

/// One interactive session: a store plus the configuration it is driven with.
///
/// The session plays the role of the input layer: setters clamp values into
/// [`InputLimits`] before writing the store, so R never lands on zero.
#[derive(Debug, Clone)]
pub struct Session {
    store: StateStore,
    config: EngineConfig,
}

impl Session {
    /// Start a session with default configuration.
    pub fn new() -> Self {
        let mut store = StateStore::new();
        store.initialize();
        Self {
            store,
            config: EngineConfig::default(),
        }
    }

    /// Start a session with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let mut store = StateStore::new();
        store.initialize();
        Ok(Self { store, config })
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only access to the store.
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// The current circuit state.
    pub fn state(&self) -> CircuitState {
        self.store.circuit()
    }

    /// Set the source voltage (clamped).
    pub fn set_voltage(&mut self, voltage: f64) {
        let clamped = self.config.limits.clamp_voltage(voltage);
        if clamped != voltage {
            trace!(requested = voltage, clamped, "voltage clamped");
        }
        self.store.set(StateKey::Voltage, clamped);
    }

    /// Set the load resistance (clamped).
    pub fn set_resistance(&mut self, resistance: f64) {
        let clamped = self.config.limits.clamp_resistance(resistance);
        if clamped != resistance {
            trace!(requested = resistance, clamped, "resistance clamped");
        }
        self.store.set(StateKey::Resistance, clamped);
    }

    /// Apply an interaction event to the store.
    pub fn apply(&mut self, event: &InteractionEvent) {
        if let Some(voltage) = event.voltage {
            self.set_voltage(voltage);
        }
        if let Some(resistance) = event.resistance {
            self.set_resistance(resistance);
        }
    }

    /// Run one evaluation cycle.
    pub fn evaluate(&mut self) -> Evaluation {
        evaluate(&mut self.store, &self.config.animation)
    }

    /// Apply an event and evaluate in one step.
    pub fn handle(&mut self, event: &InteractionEvent) -> Evaluation {
        self.apply(event);
        self.evaluate()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_defaults() {
        let mut store = StateStore::new();
        let eval = evaluate(&mut store, &AnimationConfig::default());

        assert_relative_eq!(eval.current.current, 0.133_333_333_333_333_33, epsilon = 1e-12);
        assert_eq!(eval.animation.particle_count, 3);
        assert_eq!(eval.schedule.len(), 3);
        assert_relative_eq!(eval.schedule.cycle_duration(), 18.75, epsilon = 1e-9);
        assert!(!eval.transition.changed);
    }

    #[test]
    fn test_evaluate_commits_once() {
        let mut store = StateStore::new();
        store.set(StateKey::Voltage, 40.0);

        let eval = evaluate(&mut store, &AnimationConfig::default());
        assert!(eval.transition.changed);
        assert_eq!(store.previous(), CircuitState::new(40.0, 150.0));

        let eval = evaluate(&mut store, &AnimationConfig::default());
        assert!(!eval.transition.changed);
    }

    #[test]
    fn test_session_clamps_input() {
        let mut session = Session::new();
        session.set_resistance(0.0);
        session.set_voltage(1_000.0);
        assert_eq!(session.state(), CircuitState::new(300.0, 1.0));

        let eval = session.evaluate();
        assert_eq!(eval.animation.speed, 12.0);
        assert_eq!(eval.animation.particle_count, 25);
    }

    #[test]
    fn test_session_handle_event() {
        let mut session = Session::new();
        assert!(!session.evaluate().transition.changed);

        let event = InteractionEvent::resistance(100.0);
        let eval = session.handle(&event);
        assert!(eval.transition.changed);
        assert_eq!(eval.state, CircuitState::new(20.0, 100.0));
        assert_relative_eq!(eval.current.current, 0.2);

        assert!(!session.handle(&event).transition.changed);
    }

    #[test]
    fn test_session_rejects_bad_config() {
        let config = EngineConfig::new()
            .with_animation(AnimationConfig::new().with_base_cycle(-1.0));
        assert!(Session::with_config(config).is_err());

        let config = EngineConfig::new().with_limits(InputLimits::extended());
        let mut session = Session::with_config(config).unwrap();
        session.set_voltage(550.0);
        assert_eq!(session.state().voltage, 550.0);
    }
}
