use std::str::FromStr;

use physlab_core::{Preset, UnknownPresetError};
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::centimeter};

/// A preset patient case: a near point and an age, applied together.
///
/// Presets write both fields directly, bypassing the age-driven near-point
/// coupling, so a case like [`Presbyopia`](Self::Presbyopia) can pin an
/// exaggerated near point that the age formula alone would not produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisionPreset {
    Normal,
    MildMyopia,
    ModerateMyopia,
    MildHyperopia,
    Presbyopia,
}

impl VisionPreset {
    /// The case's near point.
    pub fn near_point(&self) -> Length {
        let cm = match self {
            Self::Normal => 25.0,
            Self::MildMyopia => 15.0,
            Self::ModerateMyopia => 12.0,
            Self::MildHyperopia => 40.0,
            Self::Presbyopia => 50.0,
        };
        Length::new::<centimeter>(cm)
    }

    /// The case's age, in years.
    pub fn age(&self) -> u32 {
        match self {
            Self::Normal => 25,
            Self::MildMyopia => 20,
            Self::ModerateMyopia => 18,
            Self::MildHyperopia => 45,
            Self::Presbyopia => 60,
        }
    }

    /// A one-line caption for the case-selection UI.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal Vision - Student",
            Self::MildMyopia => "Mild Myopia - Young Adult",
            Self::ModerateMyopia => "Moderate Myopia - Teen",
            Self::MildHyperopia => "Mild Hyperopia - Middle-aged",
            Self::Presbyopia => "Presbyopia - Elderly",
        }
    }
}

impl Preset for VisionPreset {
    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::MildMyopia,
        Self::ModerateMyopia,
        Self::MildHyperopia,
        Self::Presbyopia,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::MildMyopia => "mild_myopia",
            Self::ModerateMyopia => "moderate_myopia",
            Self::MildHyperopia => "mild_hyperopia",
            Self::Presbyopia => "presbyopia",
        }
    }
}

impl FromStr for VisionPreset {
    type Err = UnknownPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
