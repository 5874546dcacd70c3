//! Foundation types shared by the physlab model crates.
//!
//! The models in this workspace follow two conventions that this crate
//! encodes once:
//!
//! - Every user-adjustable field lives in a closed interval and is clamped
//!   into it on write, never rejected. [`Bounds`] is that interval.
//! - Named scenario presets are the only fallible entry point, and the only
//!   failure is a name that matches nothing. [`Preset`] and
//!   [`UnknownPresetError`] cover that seam.

pub mod bounds;
pub mod preset;

pub use bounds::Bounds;
pub use preset::{Preset, UnknownPresetError};
