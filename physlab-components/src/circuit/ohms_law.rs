use std::fmt;

use physlab_core::{Bounds, Preset, UnknownPresetError};
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power},
    power::watt,
};

use crate::circuit::{CircuitPreset, CircuitStatus, Hazard};

/// Supported source voltage, in volts.
const MIN_VOLTAGE: f64 = 1.0;
const MAX_VOLTAGE: f64 = 50.0;

/// Supported load resistance, in ohms.
const MIN_RESISTANCE: f64 = 1.0;
const MAX_RESISTANCE: f64 = 100.0;

/// Floor applied to the divisor only, in ohms.
///
/// The stored resistance never drops below [`MIN_RESISTANCE`]; this floor
/// exists solely so the division in [`OhmsLaw::update`] can never hit
/// zero.
const DIVIDER_FLOOR: f64 = 0.1;

/// Current above which the bench is considered hazardous, in amperes.
const HIGH_CURRENT_LIMIT: f64 = 20.0;

/// Power above which the bench is considered hazardous, in watts.
const HIGH_POWER_LIMIT: f64 = 500.0;

/// The Ohm's law bench: `I = V / R`, `P = V * I`.
///
/// `voltage` and `resistance` are the user inputs; `current` and `power`
/// are derived and recomputed before any setter returns, so they are never
/// independently settable and never stale. Out-of-range input clamps into
/// the supported interval rather than failing.
///
/// # Examples
///
/// ```
/// use physlab_components::circuit::OhmsLaw;
/// use uom::si::{
///     electric_current::ampere,
///     electric_potential::volt,
///     f64::ElectricPotential,
///     power::watt,
/// };
///
/// let mut bench = OhmsLaw::default();
/// bench.set_voltage(ElectricPotential::new::<volt>(24.0));
///
/// assert_eq!(bench.current().get::<ampere>(), 2.4);
/// assert_eq!(bench.power().get::<watt>(), 57.6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OhmsLaw {
    voltage: ElectricPotential,
    resistance: ElectricalResistance,
    current: ElectricCurrent,
    power: Power,
}

impl OhmsLaw {
    /// Creates a bench with the given source voltage and load resistance,
    /// each clamped into its supported interval.
    pub fn new(voltage: ElectricPotential, resistance: ElectricalResistance) -> Self {
        let mut bench = Self {
            voltage: Self::voltage_bounds().clamp(voltage),
            resistance: Self::resistance_bounds().clamp(resistance),
            current: ElectricCurrent::new::<ampere>(0.0),
            power: Power::new::<watt>(0.0),
        };
        bench.update();
        bench
    }

    /// The interval source voltage is clamped into. Suitable for
    /// configuring a UI slider.
    pub fn voltage_bounds() -> Bounds<ElectricPotential> {
        Bounds::new(
            ElectricPotential::new::<volt>(MIN_VOLTAGE),
            ElectricPotential::new::<volt>(MAX_VOLTAGE),
        )
    }

    /// The interval load resistance is clamped into.
    pub fn resistance_bounds() -> Bounds<ElectricalResistance> {
        Bounds::new(
            ElectricalResistance::new::<ohm>(MIN_RESISTANCE),
            ElectricalResistance::new::<ohm>(MAX_RESISTANCE),
        )
    }

    /// The source voltage.
    pub fn voltage(&self) -> ElectricPotential {
        self.voltage
    }

    /// The load resistance.
    pub fn resistance(&self) -> ElectricalResistance {
        self.resistance
    }

    /// The derived current through the loop.
    pub fn current(&self) -> ElectricCurrent {
        self.current
    }

    /// The derived power dissipated in the load.
    pub fn power(&self) -> Power {
        self.power
    }

    /// Sets the source voltage, clamped, and recomputes current and power.
    pub fn set_voltage(&mut self, voltage: ElectricPotential) {
        self.voltage = Self::voltage_bounds().clamp(voltage);
        self.update();
    }

    /// Sets the load resistance, clamped, and recomputes current and power.
    pub fn set_resistance(&mut self, resistance: ElectricalResistance) {
        self.resistance = Self::resistance_bounds().clamp(resistance);
        self.update();
    }

    /// Applies a preset scenario through the clamping setters.
    ///
    /// Each field clamps independently, so a preset's literal value may
    /// store as a bound: `short_circuit` asks for 0.1 Ω and stores the
    /// 1 Ω floor.
    pub fn apply_preset(&mut self, preset: CircuitPreset) {
        let (voltage, resistance) = preset.values();
        self.set_voltage(voltage);
        self.set_resistance(resistance);
    }

    /// Looks up a preset by name and applies it.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownPresetError`] and leaves every field untouched
    /// if `name` matches no preset.
    pub fn apply_preset_named(&mut self, name: &str) -> Result<CircuitPreset, UnknownPresetError> {
        let preset = CircuitPreset::from_name(name)?;
        self.apply_preset(preset);
        Ok(preset)
    }

    /// Reports the hazard present on the bench, if any.
    ///
    /// Both thresholds are strict: a bench sitting exactly at 20 A or
    /// 500 W is safe.
    pub fn hazard(&self) -> Option<Hazard> {
        if self.current > ElectricCurrent::new::<ampere>(HIGH_CURRENT_LIMIT) {
            return Some(Hazard::HighCurrent);
        }
        if self.power > Power::new::<watt>(HIGH_POWER_LIMIT) {
            return Some(Hazard::HighPowerDissipation);
        }
        None
    }

    /// Returns `true` if the bench configuration is hazardous.
    pub fn is_dangerous(&self) -> bool {
        self.hazard().is_some()
    }

    /// Visual speed multiplier for electron animation, proportional to
    /// current flow.
    pub fn electron_speed_factor(&self, base_speed: f64) -> f64 {
        base_speed * (1.0 + self.current.get::<ampere>() * 0.5)
    }

    /// Scales an RGBA color by current intensity; higher current yields a
    /// brighter color. Alpha is left untouched.
    pub fn intensity_color(&self, base_color: [f32; 4]) -> [f32; 4] {
        // Normalize against the largest reachable current (50 V / 1 Ω).
        let intensity = (self.current.get::<ampere>() / 50.0).min(1.0) as f32;
        let scale = 0.3 + 0.7 * intensity;

        let [r, g, b, a] = base_color;
        [r * scale, g * scale, b * scale, a]
    }

    /// A formatted snapshot of the four electrical values, for display.
    pub fn status(&self) -> CircuitStatus {
        CircuitStatus {
            voltage: format!("{:.2}", self.voltage.get::<volt>()),
            current: format!("{:.3}", self.current.get::<ampere>()),
            resistance: format!("{:.2}", self.resistance.get::<ohm>()),
            power: format!("{:.2}", self.power.get::<watt>()),
        }
    }

    /// Recomputes the derived values from the current inputs.
    ///
    /// Every mutator ends here before returning.
    fn update(&mut self) {
        let floor = ElectricalResistance::new::<ohm>(DIVIDER_FLOOR);
        let divisor = if self.resistance > floor {
            self.resistance
        } else {
            floor
        };

        self.current = self.voltage / divisor;
        self.power = self.voltage * self.current;
    }
}

impl Default for OhmsLaw {
    /// A 12 V source across a 10 Ω load.
    fn default() -> Self {
        Self::new(
            ElectricPotential::new::<volt>(12.0),
            ElectricalResistance::new::<ohm>(10.0),
        )
    }
}

impl fmt::Display for OhmsLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "V={:.2}V, I={:.3}A, R={:.2}Ω, P={:.2}W",
            self.voltage.get::<volt>(),
            self.current.get::<ampere>(),
            self.resistance.get::<ohm>(),
            self.power.get::<watt>(),
        )
    }
}
