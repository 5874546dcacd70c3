use std::str::FromStr;

use physlab_core::{Preset, UnknownPresetError};
use serde::{Deserialize, Serialize};
use uom::si::{
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance},
};

/// A preset circuit scenario: a fixed source voltage and load resistance.
///
/// Presets are applied through the bench's clamping setters, so a literal
/// outside the supported interval stores as the nearest bound (see
/// [`ShortCircuit`](Self::ShortCircuit)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitPreset {
    /// 12 V across 10 Ω.
    Normal,
    /// 24 V across 2 Ω.
    HighCurrent,
    /// 5 V across 50 Ω.
    LowCurrent,
    /// 12 V across a nominal 0.1 Ω; the stored resistance clamps to the
    /// 1 Ω floor when applied.
    ShortCircuit,
    /// 12 V across 100 Ω.
    OpenCircuit,
}

impl CircuitPreset {
    /// The scenario's (voltage, resistance) pair, before clamping.
    pub fn values(&self) -> (ElectricPotential, ElectricalResistance) {
        let (v, r) = match self {
            Self::Normal => (12.0, 10.0),
            Self::HighCurrent => (24.0, 2.0),
            Self::LowCurrent => (5.0, 50.0),
            Self::ShortCircuit => (12.0, 0.1),
            Self::OpenCircuit => (12.0, 100.0),
        };
        (
            ElectricPotential::new::<volt>(v),
            ElectricalResistance::new::<ohm>(r),
        )
    }
}

impl Preset for CircuitPreset {
    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::HighCurrent,
        Self::LowCurrent,
        Self::ShortCircuit,
        Self::OpenCircuit,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::HighCurrent => "high_current",
            Self::LowCurrent => "low_current",
            Self::ShortCircuit => "short_circuit",
            Self::OpenCircuit => "open_circuit",
        }
    }
}

impl FromStr for CircuitPreset {
    type Err = UnknownPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_listed_under_its_own_name() {
        for &preset in CircuitPreset::ALL {
            assert_eq!(CircuitPreset::from_name(preset.name()), Ok(preset));
            assert_eq!(preset.name().parse(), Ok(preset));
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "warp_core".parse::<CircuitPreset>().unwrap_err();
        assert_eq!(err.name, "warp_core");
    }
}
