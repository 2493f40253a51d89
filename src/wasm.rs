//! WASM bindings for Ohmflow Core.
//!
//! The browser side owns the sliders, the diagram and the animation loop;
//! it calls into this session once per slider change.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmOhmSession } from 'ohmflow_core';
//!
//! await init();
//!
//! const session = new WasmOhmSession();
//!
//! slider.oninput = () => {
//!   session.set_voltage(Number(slider.value));
//!   session.evaluate();
//!   ammeterLabel.textContent = session.current_label();
//!   for (const offset of session.phase_offsets()) {
//!     spawnDot(offset, session.cycle_duration);
//!   }
//!   if (session.changed) pulseAmmeter();
//! };
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::InputLimits;
use crate::readout::Readout;
use crate::session::{EngineConfig, Evaluation, Session};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible visualizer session.
///
/// Wraps a native [`Session`] and keeps the latest evaluation for the
/// getters below.
#[wasm_bindgen]
pub struct WasmOhmSession {
    session: Session,
    last: Evaluation,
    readout: Readout,
}

#[wasm_bindgen]
impl WasmOhmSession {
    /// Start a session with the default ranges (U up to 300 V, R up to 500 Ω).
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmOhmSession {
        Self::from_session(Session::new())
    }

    /// Start a session with the wider ranges (U and R up to 600).
    #[wasm_bindgen]
    pub fn extended() -> Result<WasmOhmSession, JsValue> {
        let config = EngineConfig::new().with_limits(InputLimits::extended());
        let session = Session::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_session(session))
    }

    /// Set the source voltage in volts.
    #[wasm_bindgen]
    pub fn set_voltage(&mut self, voltage: f64) {
        self.session.set_voltage(voltage);
    }

    /// Set the load resistance in ohms.
    #[wasm_bindgen]
    pub fn set_resistance(&mut self, resistance: f64) {
        self.session.set_resistance(resistance);
    }

    /// Run one evaluation cycle. Call once per input event.
    #[wasm_bindgen]
    pub fn evaluate(&mut self) {
        self.last = self.session.evaluate();
        self.readout = Readout::from_evaluation(&self.last);
    }

    /// Current in amperes.
    #[wasm_bindgen(getter)]
    pub fn current(&self) -> f64 {
        self.last.current.current
    }

    /// Animation speed.
    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f64 {
        self.last.animation.speed
    }

    /// Number of particles on the loop.
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.last.animation.particle_count
    }

    /// Loop duration in seconds.
    #[wasm_bindgen(getter)]
    pub fn cycle_duration(&self) -> f64 {
        self.last.schedule.cycle_duration()
    }

    /// Whether the last cycle should fire the ammeter pulse.
    #[wasm_bindgen(getter)]
    pub fn changed(&self) -> bool {
        self.last.transition.changed
    }

    /// Phase offsets in seconds, one per particle.
    #[wasm_bindgen]
    pub fn phase_offsets(&self) -> Vec<f64> {
        self.last.schedule.offsets().collect()
    }

    /// Voltmeter label, e.g. "20.0 V".
    #[wasm_bindgen]
    pub fn voltage_label(&self) -> String {
        self.readout.voltage.clone()
    }

    /// Resistor label, e.g. "150 Ω".
    #[wasm_bindgen]
    pub fn resistance_label(&self) -> String {
        self.readout.resistance.clone()
    }

    /// Ammeter label, e.g. "0.133 A".
    #[wasm_bindgen]
    pub fn current_label(&self) -> String {
        self.readout.current.clone()
    }
}

impl WasmOhmSession {
    fn from_session(mut session: Session) -> Self {
        let last = session.evaluate();
        let readout = Readout::from_evaluation(&last);
        Self {
            session,
            last,
            readout,
        }
    }
}

impl Default for WasmOhmSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
