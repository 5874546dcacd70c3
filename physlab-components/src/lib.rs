//! The physlab classroom models.
//!
//! Two independent, single-owner models sit behind the physlab demos. Each
//! holds a handful of clamped user inputs, recomputes its derived
//! quantities eagerly on every write, and exposes a formatted status
//! snapshot for the presentation layer to read once per refresh:
//!
//! - [`circuit::OhmsLaw`] — voltage and resistance in, current and power
//!   out, with hazard detection and preset circuit scenarios.
//! - [`optics::Vision`] — near point, object distance, lens power, and age
//!   in; required corrective power, effective near point, and focus
//!   quality out.
//!
//! Every setter is total: out-of-range input clamps into the supported
//! interval. The only fallible operation is applying a preset by name.

pub mod circuit;
pub mod optics;
