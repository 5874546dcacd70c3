//! The vision and eyeglass optics bench.
//!
//! Models one eye looking at one object through an optional corrective
//! lens. The eye is characterized by its near point (the closest distance
//! it can focus); the thin-lens formula `1/f = 1/v - 1/u` relates the
//! corrective lens to the distances involved. All distances are in
//! centimeters at the API, lens powers in diopters.

mod preset;
mod types;
mod vision;

pub use preset::VisionPreset;
pub use types::{LensType, VisionCondition, VisionStatus};
pub use vision::Vision;
