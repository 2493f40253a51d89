//! Circuit state and the quantities derived from it.
//!
//! The visualized circuit is a single DC voltage source driving a single
//! resistor. [`CircuitState`] holds the pair (U, R); [`compute_current`]
//! derives I from it with the defined R = 0 fallback.

mod current;
mod types;
mod value;

pub use current::{compute_current, DerivedQuantity};
pub use types::{CircuitState, InputLimits};
pub use value::parse_value;
