//! Per-session state and the evaluation cycle.
//!
//! Each interactive session owns exactly one [`StateStore`]. Every user
//! interaction runs one synchronous cycle:
//!
//! ```text
//! read (U, R) -> compute I -> map to (speed, count) -> build schedule
//!             -> detect transition -> commit baseline
//! ```
//!
//! Nothing here blocks or performs I/O. Sessions share no state, so serving
//! several of them needs no locking.

mod engine;
mod store;
mod transition;

pub use engine::{evaluate, EngineConfig, Evaluation, Session};
pub use store::{StateKey, StateStore};
pub use transition::{detect_and_commit, TransitionEvent};
