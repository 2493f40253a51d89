//! # Ohmflow Core
//!
//! The animation-parameter engine behind an interactive Ohm's law visualizer.
//!
//! A single DC source U drives a single resistor R. The engine derives the
//! current I = U / R and turns it into everything a renderer needs to show
//! current flowing around the circuit:
//!
//! - how fast particles loop (speed) and how many there are (particle count)
//! - a per-particle phase schedule that keeps them evenly spaced
//! - a one-shot "changed" flag that triggers a pulse on the ammeter
//!
//! ## Architecture
//!
//! - [`circuit`] - Circuit state, input limits and the current calculator
//! - [`animation`] - Current-to-animation mapping and particle schedules
//! - [`session`] - Per-session state store, transition detection, evaluation cycle
//! - [`events`] - Interaction events delivered by the input layer
//! - [`readout`] - Meter labels for the diagram
//!
//! ## Usage
//!
//! ```
//! use ohmflow_core::{InteractionEvent, Session};
//!
//! let mut session = Session::new();
//! let eval = session.evaluate();
//! assert_eq!(eval.animation.particle_count, 3);
//!
//! let eval = session.handle(&InteractionEvent::voltage(25.0));
//! assert!(eval.transition.changed);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! ohmflow -U 20 -R 150
//! printf 'U=25\nR=1k\n' | ohmflow --events
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmOhmSession } from 'ohmflow_core';
//!
//! const session = new WasmOhmSession();
//! session.set_voltage(25);
//! session.evaluate();
//! ```

pub mod animation;
pub mod circuit;
pub mod error;
pub mod events;
pub mod readout;
pub mod session;

// Re-export main types for convenience
pub use animation::{
    build_schedule, map_to_animation, AnimationConfig, AnimationParameters, ParticleSchedule,
};
pub use circuit::{compute_current, CircuitState, InputLimits};
pub use error::{OhmError, Result};
pub use events::InteractionEvent;
pub use session::{detect_and_commit, evaluate, EngineConfig, Evaluation, Session, StateStore};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmOhmSession;

/// Source voltage at session start, in volts
pub const DEFAULT_VOLTAGE: f64 = 20.0;

/// Load resistance at session start, in ohms
pub const DEFAULT_RESISTANCE: f64 = 150.0;
