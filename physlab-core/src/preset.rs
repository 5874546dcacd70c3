//! Named scenario presets and the one error they can produce.
//!
//! Each physlab model ships a small fixed set of teaching scenarios,
//! applied atomically by name from UI buttons. The registry is an enum per
//! model; this module provides the shared lookup trait and the
//! "unknown name" error, which is the only failure mode in the workspace.

use std::str::FromStr;

use thiserror::Error;

/// Error returned when a preset name matches nothing in the registry.
///
/// The failed lookup leaves the model untouched; no partial mutation
/// occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset: {name}")]
pub struct UnknownPresetError {
    /// The name that failed to match any preset.
    pub name: String,
}

/// A fixed registry of named scenarios for one model.
///
/// Implementors are small `Copy` enums. [`ALL`](Self::ALL) lists every
/// preset in the order a UI should offer them, and [`name`](Self::name)
/// is the stable lookup key. [`from_name`](Self::from_name) provides the
/// reverse lookup; `FromStr` implementations delegate to it so presets
/// also work with `str::parse`.
pub trait Preset: Copy + FromStr<Err = UnknownPresetError> + 'static {
    /// Every preset, in presentation order.
    const ALL: &'static [Self];

    /// The stable lookup key for this preset.
    fn name(&self) -> &'static str;

    /// Looks up a preset by its key.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownPresetError`] carrying the rejected name if no
    /// preset matches.
    fn from_name(name: &str) -> Result<Self, UnknownPresetError> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| UnknownPresetError {
                name: name.to_owned(),
            })
    }
}
