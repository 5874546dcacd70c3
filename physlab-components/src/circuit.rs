//! The Ohm's law circuit bench.
//!
//! A single DC loop: one source, one resistor. The model holds the two
//! user inputs (voltage and resistance) and keeps the derived current and
//! power up to date through every mutation, so readers never observe a
//! stale value.

mod ohms_law;
mod preset;
mod types;

pub use ohms_law::OhmsLaw;
pub use preset::CircuitPreset;
pub use types::{CircuitStatus, Hazard};
