//! Walks the optics bench through its preset patient cases, prescribes
//! the computed corrective lens for each, and reports the resulting
//! focus quality — the same loop the demo's case buttons drive.

use physlab_components::optics::{Vision, VisionPreset};
use physlab_core::Preset;
use uom::si::length::centimeter;

fn main() {
    physlab_examples::banner("Vision clinic");

    let mut patient = Vision::default();
    for &case in VisionPreset::ALL {
        patient.apply_preset(case);
        patient.set_lens_power(0.0);

        println!("{} ({})", case.name(), case.description());
        println!("  unaided:   {patient}");
        println!(
            "  condition: {}",
            patient.vision_condition().description(),
        );

        patient.set_lens_power(patient.required_power());
        println!("  corrected: {patient}");
        println!(
            "  near point through lens: {:.1} cm, focus at {:.0} cm: {:.0}%",
            patient.effective_near_point().get::<centimeter>(),
            patient.object_distance().get::<centimeter>(),
            patient.focus_quality() * 100.0,
        );
        println!(
            "  prescription {}",
            if patient.is_clear_vision() { "ok" } else { "off" },
        );
        println!();
    }
}
