//! Sweeps the Ohm's law bench the way the demo's voltage slider does,
//! then walks the preset scenarios and reports any hazards.

use physlab_components::circuit::{CircuitPreset, OhmsLaw};
use physlab_core::Preset;
use uom::si::{electric_potential::volt, f64::ElectricPotential};

fn main() {
    let mut bench = OhmsLaw::default();

    physlab_examples::banner("Voltage sweep across the default 10 Ω load");
    for volts in (5..=50).step_by(5) {
        bench.set_voltage(ElectricPotential::new::<volt>(f64::from(volts)));
        println!("  {bench}");
    }

    println!();
    physlab_examples::banner("Preset scenarios");
    for &preset in CircuitPreset::ALL {
        bench.apply_preset(preset);
        println!("  {:<14} {}", preset.name(), bench);
        if let Some(hazard) = bench.hazard() {
            println!("  {:<14} {hazard}", "");
        }
    }
}
