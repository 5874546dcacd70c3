use std::fmt;

use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::centimeter};

/// A vision condition, classified from the eye's near point and age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisionCondition {
    Normal,
    Myopia,
    Hyperopia,
    Presbyopia,
}

impl VisionCondition {
    /// A one-line caption for display next to the condition name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal Vision",
            Self::Myopia => "Myopia (Nearsighted)",
            Self::Hyperopia => "Hyperopia (Farsighted)",
            Self::Presbyopia => "Presbyopia (Age-related)",
        }
    }

    /// The textbook near point for this condition.
    pub fn typical_near_point(&self) -> Length {
        let cm = match self {
            Self::Normal => 25.0,
            Self::Myopia => 15.0,
            Self::Hyperopia => 40.0,
            Self::Presbyopia => 50.0,
        };
        Length::new::<centimeter>(cm)
    }
}

impl fmt::Display for VisionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "Normal",
            Self::Myopia => "Myopia",
            Self::Hyperopia => "Hyperopia",
            Self::Presbyopia => "Presbyopia",
        };
        f.write_str(name)
    }
}

/// The corrective lens shape an eye needs, if any.
///
/// Myopia calls for a diverging (concave) lens, hyperopia and presbyopia
/// for a converging (convex) one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensType {
    Concave,
    Convex,
    None,
}

impl fmt::Display for LensType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Concave => "Concave",
            Self::Convex => "Convex",
            Self::None => "None",
        };
        f.write_str(name)
    }
}

/// A formatted snapshot of the optics bench, read once per visual refresh.
///
/// Distances carry one decimal place, powers a sign and two places, and
/// `focus_quality` is an integer percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionStatus {
    pub near_point: String,
    pub object_distance: String,
    pub required_power: String,
    pub lens_power: String,
    pub condition: String,
    pub lens_type: String,
    pub focus_quality: String,
    pub age: String,
}
