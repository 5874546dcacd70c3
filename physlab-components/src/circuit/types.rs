use std::fmt;

use serde::{Deserialize, Serialize};

/// A hazardous bench configuration detected by [`OhmsLaw::hazard`].
///
/// The `Display` text is the warning shown to the student.
///
/// [`OhmsLaw::hazard`]: crate::circuit::OhmsLaw::hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    /// Current above 20 A.
    HighCurrent,
    /// Power dissipation above 500 W.
    HighPowerDissipation,
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::HighCurrent => "WARNING: Very high current! Risk of short circuit!",
            Self::HighPowerDissipation => "WARNING: Very high power dissipation!",
        };
        f.write_str(message)
    }
}

/// A formatted snapshot of the bench, read once per visual refresh.
///
/// Values are preformatted strings: voltage, resistance, and power to two
/// decimal places, current to three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitStatus {
    pub voltage: String,
    pub current: String,
    pub resistance: String,
    pub power: String,
}
