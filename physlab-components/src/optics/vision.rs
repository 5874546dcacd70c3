use std::fmt;

use physlab_core::{Bounds, Preset, UnknownPresetError};
use uom::si::{f64::Length, length::centimeter};

use crate::optics::{LensType, VisionCondition, VisionPreset, VisionStatus};

/// The near point of a healthy adult eye, in centimeters.
const NORMAL_NEAR_POINT_CM: f64 = 25.0;

/// Supported near point, in centimeters.
const MIN_NEAR_POINT_CM: f64 = 10.0;
const MAX_NEAR_POINT_CM: f64 = 100.0;

/// Supported object distance, in centimeters.
const MIN_OBJECT_DISTANCE_CM: f64 = 5.0;
const MAX_OBJECT_DISTANCE_CM: f64 = 200.0;

/// Supported corrective lens power, in diopters.
const MIN_LENS_POWER: f64 = -10.0;
const MAX_LENS_POWER: f64 = 10.0;

/// Supported age, in years.
const MIN_AGE: u32 = 5;
const MAX_AGE: u32 = 100;

/// Age above which the near point starts receding.
const PRESBYOPIA_ONSET_AGE: u32 = 40;

/// Near points within this many centimeters of normal need no correction.
const NEAR_POINT_TOLERANCE_CM: f64 = 0.1;

/// Near points within this many centimeters of normal need no lens.
const LENS_TYPE_MARGIN_CM: f64 = 2.0;

/// Lens powers below this magnitude (in diopters) count as no lens.
const NEGLIGIBLE_LENS_POWER: f64 = 0.01;

/// Lens powers within this many diopters of the required power count as a
/// correct prescription.
const PRESCRIPTION_TOLERANCE: f64 = 0.25;

/// Guard width (in meters) around the singular thin-lens denominator.
const SINGULAR_FOCAL_TOLERANCE: f64 = 0.001;

/// Distance error (in centimeters) under which focus is considered sharp.
const SHARP_FOCUS_TOLERANCE_CM: f64 = 2.0;

/// Distance error (in centimeters) at which focus quality reaches zero.
const MAX_BLUR_DISTANCE_CM: f64 = 30.0;

/// An eye, an object, and an optional corrective lens.
///
/// `near_point`, `object_distance`, `lens_power`, and `age` are the user
/// inputs; `required_power` is derived from the near point via the
/// thin-lens formula and recomputed before any mutator of the near point
/// returns — including the implicit change driven by [`set_age`].
///
/// Ages above 40 model presbyopia by overwriting the near point; that
/// coupling between two nominally independent fields is deliberate and is
/// isolated in [`presbyopia_near_point`](Self::presbyopia_near_point).
///
/// # Examples
///
/// ```
/// use physlab_components::optics::{Vision, VisionCondition};
/// use uom::si::{f64::Length, length::centimeter};
///
/// let mut patient = Vision::default();
/// patient.set_near_point(Length::new::<centimeter>(15.0));
///
/// assert_eq!(patient.vision_condition(), VisionCondition::Myopia);
/// assert!(patient.required_power() < 0.0); // concave correction
/// ```
///
/// [`set_age`]: Self::set_age
#[derive(Debug, Clone, PartialEq)]
pub struct Vision {
    near_point: Length,
    object_distance: Length,
    /// Corrective lens power in diopters (reciprocal meters). Kept as a
    /// raw `f64` because the thin-lens algebra below works on reciprocal
    /// distances.
    lens_power: f64,
    age: u32,
    /// Derived: the corrective power that restores a 25 cm near point.
    required_power: f64,
}

impl Vision {
    /// Creates a patient with the given near point and object distance,
    /// each clamped, no corrective lens, and age 25.
    pub fn new(near_point: Length, object_distance: Length) -> Self {
        let mut patient = Self {
            near_point: Self::near_point_bounds().clamp(near_point),
            object_distance: Self::object_distance_bounds().clamp(object_distance),
            lens_power: 0.0,
            age: 25,
            required_power: 0.0,
        };
        patient.update_required_power();
        patient
    }

    /// The interval the near point is clamped into.
    pub fn near_point_bounds() -> Bounds<Length> {
        Bounds::new(
            Length::new::<centimeter>(MIN_NEAR_POINT_CM),
            Length::new::<centimeter>(MAX_NEAR_POINT_CM),
        )
    }

    /// The interval the object distance is clamped into.
    pub fn object_distance_bounds() -> Bounds<Length> {
        Bounds::new(
            Length::new::<centimeter>(MIN_OBJECT_DISTANCE_CM),
            Length::new::<centimeter>(MAX_OBJECT_DISTANCE_CM),
        )
    }

    /// The interval lens power (in diopters) is clamped into.
    pub fn lens_power_bounds() -> Bounds<f64> {
        Bounds::new(MIN_LENS_POWER, MAX_LENS_POWER)
    }

    /// The interval age (in years) is clamped into.
    pub fn age_bounds() -> Bounds<u32> {
        Bounds::new(MIN_AGE, MAX_AGE)
    }

    /// The eye's unaided near point.
    pub fn near_point(&self) -> Length {
        self.near_point
    }

    /// The distance to the object being viewed.
    pub fn object_distance(&self) -> Length {
        self.object_distance
    }

    /// The corrective lens power currently worn, in diopters.
    pub fn lens_power(&self) -> f64 {
        self.lens_power
    }

    /// The patient's age, in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The derived corrective power (in diopters) that restores a normal
    /// 25 cm near point. Zero when the near point is already normal;
    /// negative for myopia, positive for hyperopia.
    pub fn required_power(&self) -> f64 {
        self.required_power
    }

    /// Sets the near point, clamped, and recomputes the required power.
    pub fn set_near_point(&mut self, near_point: Length) {
        self.near_point = Self::near_point_bounds().clamp(near_point);
        self.update_required_power();
    }

    /// Sets the object distance, clamped.
    pub fn set_object_distance(&mut self, object_distance: Length) {
        self.object_distance = Self::object_distance_bounds().clamp(object_distance);
    }

    /// Sets the worn lens power, clamped.
    pub fn set_lens_power(&mut self, lens_power: f64) {
        self.lens_power = Self::lens_power_bounds().clamp(lens_power);
    }

    /// Sets the age, clamped, and applies presbyopia.
    ///
    /// Ages above 40 overwrite the near point via
    /// [`presbyopia_near_point`](Self::presbyopia_near_point) and
    /// recompute the required power. Ages of 40 and below leave the near
    /// point untouched — they do not restore an earlier value.
    pub fn set_age(&mut self, age: u32) {
        self.age = Self::age_bounds().clamp(age);
        if self.age > PRESBYOPIA_ONSET_AGE {
            self.near_point = Self::presbyopia_near_point(self.age);
            self.update_required_power();
        }
    }

    /// The presbyopic near point for an age above the onset: 25 cm at the
    /// onset, receding linearly to 55 cm at age 100.
    ///
    /// This is the single place where age writes to the near point.
    fn presbyopia_near_point(age: u32) -> Length {
        let age_factor = f64::from(age - PRESBYOPIA_ONSET_AGE) / 60.0;
        Length::new::<centimeter>(NORMAL_NEAR_POINT_CM + age_factor * 30.0)
    }

    /// Classifies the vision condition from the near point and age.
    pub fn vision_condition(&self) -> VisionCondition {
        let near_point_cm = self.near_point.get::<centimeter>();

        if near_point_cm < 20.0 {
            VisionCondition::Myopia
        } else if near_point_cm > 30.0 {
            if self.age > 45 {
                VisionCondition::Presbyopia
            } else {
                VisionCondition::Hyperopia
            }
        } else {
            VisionCondition::Normal
        }
    }

    /// The corrective lens shape this eye needs, judged against the
    /// normal near point with a ±2 cm margin.
    pub fn lens_type(&self) -> LensType {
        let near_point_cm = self.near_point.get::<centimeter>();

        if near_point_cm < NORMAL_NEAR_POINT_CM - LENS_TYPE_MARGIN_CM {
            LensType::Concave
        } else if near_point_cm > NORMAL_NEAR_POINT_CM + LENS_TYPE_MARGIN_CM {
            LensType::Convex
        } else {
            LensType::None
        }
    }

    /// Returns `true` if the worn lens is within 0.25 D of the required
    /// correction.
    pub fn is_clear_vision(&self) -> bool {
        (self.lens_power - self.required_power).abs() < PRESCRIPTION_TOLERANCE
    }

    /// The near point achieved through the worn lens.
    ///
    /// With no meaningful lens power this is the unaided near point.
    /// Otherwise the thin-lens formula places the image of an object held
    /// at the normal 25 cm: `f = 1/P`, `u = -0.25 m`,
    /// `v = f*u / (f + u)`, and the result is `|v|` clamped into the
    /// supported near-point interval.
    ///
    /// When the focal length lands within 1 mm of the object distance the
    /// denominator is singular and the unaided near point is returned
    /// instead. That guard exists only to keep the division finite; it is
    /// not a physically meaningful branch.
    pub fn effective_near_point(&self) -> Length {
        if self.lens_power.abs() < NEGLIGIBLE_LENS_POWER {
            return self.near_point;
        }

        let focal_length = 1.0 / self.lens_power; // meters
        let object = -NORMAL_NEAR_POINT_CM / 100.0; // -0.25 m

        if (focal_length - object).abs() > SINGULAR_FOCAL_TOLERANCE {
            let image = (focal_length * object) / (focal_length + object);
            let corrected = Length::new::<centimeter>(image.abs() * 100.0);
            return Self::near_point_bounds().clamp(corrected);
        }

        self.near_point
    }

    /// Focus quality at the current object distance, from 0.0 (fully
    /// blurred) to 1.0 (sharp).
    ///
    /// Quality is 1.0 within 2 cm of the effective near point and falls
    /// off linearly to zero over 30 cm of error.
    pub fn focus_quality(&self) -> f64 {
        let effective = self.effective_near_point();
        let error = (self.object_distance - effective).abs();

        if error < Length::new::<centimeter>(SHARP_FOCUS_TOLERANCE_CM) {
            return 1.0;
        }

        let error_cm = error.get::<centimeter>();
        (1.0 - error_cm / MAX_BLUR_DISTANCE_CM).max(0.0)
    }

    /// Where rays converge behind the lens system: the unaided near point
    /// without a lens, otherwise the corrected one.
    pub fn ray_convergence_point(&self, lens_present: bool) -> Length {
        if !lens_present || self.lens_power.abs() < NEGLIGIBLE_LENS_POWER {
            return self.near_point;
        }
        self.effective_near_point()
    }

    /// Applies a preset patient case.
    ///
    /// The case writes the near point and age directly — bypassing both
    /// the clamps and the age-driven near-point coupling — and recomputes
    /// the required power. Object distance and worn lens are untouched.
    pub fn apply_preset(&mut self, preset: VisionPreset) {
        self.near_point = preset.near_point();
        self.age = preset.age();
        self.update_required_power();
    }

    /// Looks up a preset patient case by name and applies it.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownPresetError`] and leaves every field untouched
    /// if `name` matches no case.
    pub fn apply_preset_named(&mut self, name: &str) -> Result<VisionPreset, UnknownPresetError> {
        let preset = VisionPreset::from_name(name)?;
        self.apply_preset(preset);
        Ok(preset)
    }

    /// A formatted snapshot of the bench, for display.
    pub fn status(&self) -> VisionStatus {
        VisionStatus {
            near_point: format!("{:.1}", self.near_point.get::<centimeter>()),
            object_distance: format!("{:.1}", self.object_distance.get::<centimeter>()),
            required_power: format!("{:+.2}", self.required_power),
            lens_power: format!("{:+.2}", self.lens_power),
            condition: self.vision_condition().to_string(),
            lens_type: self.lens_type().to_string(),
            focus_quality: format!("{:.0}", self.focus_quality() * 100.0),
            age: self.age.to_string(),
        }
    }

    /// Recomputes the required corrective power from the near point.
    ///
    /// Every mutator of the near point ends here before returning. Within
    /// 0.1 cm of normal the power is exactly zero; otherwise the
    /// thin-lens formula is applied with the object at the normal near
    /// point and the image at the defective one (both distances negative,
    /// in meters): `P = 1/v - 1/u`.
    fn update_required_power(&mut self) {
        let near_point_cm = self.near_point.get::<centimeter>();

        if (near_point_cm - NORMAL_NEAR_POINT_CM).abs() < NEAR_POINT_TOLERANCE_CM {
            self.required_power = 0.0;
            return;
        }

        let image = -near_point_cm / 100.0;
        let object = -NORMAL_NEAR_POINT_CM / 100.0;

        self.required_power = 1.0 / image - 1.0 / object;
    }
}

impl Default for Vision {
    /// A normal 25 cm near point viewing an object at 25 cm.
    fn default() -> Self {
        Self::new(
            Length::new::<centimeter>(NORMAL_NEAR_POINT_CM),
            Length::new::<centimeter>(NORMAL_NEAR_POINT_CM),
        )
    }
}

impl fmt::Display for Vision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vision: {}, Near Point: {:.1}cm, Required: {:+.2}D, Current: {:+.2}D",
            self.vision_condition(),
            self.near_point.get::<centimeter>(),
            self.required_power,
            self.lens_power,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cm(value: f64) -> Length {
        Length::new::<centimeter>(value)
    }

    #[test]
    fn normal_near_point_needs_no_correction() {
        let patient = Vision::default();

        assert_eq!(patient.required_power(), 0.0);
        assert_eq!(patient.vision_condition(), VisionCondition::Normal);
        assert_eq!(patient.lens_type(), LensType::None);
    }

    #[test]
    fn myopia_needs_a_concave_lens() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(15.0));

        // 1/(-0.15) - 1/(-0.25) = -8/3 D.
        assert_relative_eq!(patient.required_power(), -8.0 / 3.0);
        assert_eq!(patient.vision_condition(), VisionCondition::Myopia);
        assert_eq!(patient.lens_type(), LensType::Concave);
    }

    #[test]
    fn hyperopia_needs_a_convex_lens() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(40.0));

        // 1/(-0.40) - 1/(-0.25) = +1.5 D.
        assert_relative_eq!(patient.required_power(), 1.5);
        assert_eq!(patient.vision_condition(), VisionCondition::Hyperopia);
        assert_eq!(patient.lens_type(), LensType::Convex);
    }

    #[test]
    fn inputs_clamp_to_their_bounds() {
        let mut patient = Vision::default();

        patient.set_near_point(cm(3.0));
        assert_eq!(patient.near_point().get::<centimeter>(), 10.0);

        patient.set_object_distance(cm(1000.0));
        assert_eq!(patient.object_distance().get::<centimeter>(), 200.0);

        patient.set_lens_power(-25.0);
        assert_eq!(patient.lens_power(), -10.0);

        patient.set_age(130);
        assert_eq!(patient.age(), 100);
    }

    #[test]
    fn age_over_forty_recedes_the_near_point() {
        let mut patient = Vision::default();
        patient.set_age(60);

        // 25 + (20/60) * 30 = 35 cm.
        assert_relative_eq!(patient.near_point().get::<centimeter>(), 35.0);
        // 1/(-0.35) - 1/(-0.25) ≈ +1.142857 D.
        assert_relative_eq!(patient.required_power(), 8.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn age_at_or_below_forty_leaves_the_near_point_alone() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(15.0));

        patient.set_age(30);
        assert_eq!(patient.near_point().get::<centimeter>(), 15.0);

        // Dropping the age back down does not restore anything either.
        patient.set_age(60);
        patient.set_age(30);
        assert_relative_eq!(patient.near_point().get::<centimeter>(), 35.0);
    }

    #[test]
    fn presbyopia_requires_a_receded_near_point_and_age() {
        let mut patient = Vision::default();

        patient.set_near_point(cm(31.0));
        patient.set_age(40);
        assert_eq!(patient.vision_condition(), VisionCondition::Hyperopia);

        // set_age(46) also recedes the near point (28 cm < 30 cm), so pin
        // the near point afterwards to exercise the age branch.
        patient.set_age(46);
        patient.set_near_point(cm(31.0));
        assert_eq!(patient.vision_condition(), VisionCondition::Presbyopia);
    }

    #[test]
    fn effective_near_point_without_a_lens_is_the_unaided_one() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(40.0));

        assert_eq!(patient.effective_near_point(), patient.near_point());
    }

    #[test]
    fn converging_lens_pushes_the_near_point_out() {
        let mut patient = Vision::default();
        patient.set_lens_power(2.0);

        // f = 0.5 m, u = -0.25 m: v = (0.5 * -0.25) / 0.25 = -0.5 m.
        assert_relative_eq!(
            patient.effective_near_point().get::<centimeter>(),
            50.0,
        );
    }

    #[test]
    fn diverging_lens_pulls_the_near_point_in() {
        let mut patient = Vision::default();
        patient.set_lens_power(-2.0);

        // f = -0.5 m, u = -0.25 m: v = 0.125 / -0.75 = -1/6 m.
        assert_relative_eq!(
            patient.effective_near_point().get::<centimeter>(),
            100.0 / 6.0,
            epsilon = 1e-12,
        );
    }

    #[test]
    fn effective_near_point_clamps_into_the_supported_interval() {
        let mut patient = Vision::default();

        // f = 1/3.9 m puts the image near 10 m; the result clamps to
        // the 100 cm ceiling.
        patient.set_lens_power(3.9);
        assert_relative_eq!(
            patient.effective_near_point().get::<centimeter>(),
            100.0,
        );
    }

    #[test]
    fn lens_power_matching_normal_focal_length_is_left_alone() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(40.0));

        // -4 D gives f = -0.25 m, exactly the object distance, which
        // makes the thin-lens denominator singular. The guard returns the
        // unaided near point; this pins the behavior, it is not physics.
        patient.set_lens_power(-4.0);
        assert_eq!(patient.effective_near_point(), patient.near_point());
    }

    #[test]
    fn focus_is_sharp_at_the_effective_near_point() {
        let mut patient = Vision::default();
        patient.set_object_distance(cm(25.0));

        assert_eq!(patient.focus_quality(), 1.0);

        // Within the 2 cm tolerance it is still sharp.
        patient.set_object_distance(cm(26.5));
        assert_eq!(patient.focus_quality(), 1.0);
    }

    #[test]
    fn focus_quality_falls_off_linearly_and_floors_at_zero() {
        let mut patient = Vision::default();

        patient.set_object_distance(cm(40.0)); // 15 cm of error
        assert_relative_eq!(patient.focus_quality(), 0.5);

        patient.set_object_distance(cm(55.0)); // 30 cm of error
        assert_relative_eq!(patient.focus_quality(), 0.0);

        patient.set_object_distance(cm(70.0)); // beyond the falloff
        assert_eq!(patient.focus_quality(), 0.0);
    }

    #[test]
    fn a_correct_prescription_reads_as_clear_vision() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(15.0));
        assert!(!patient.is_clear_vision());

        patient.set_lens_power(-2.7); // required is -8/3 ≈ -2.67 D
        assert!(patient.is_clear_vision());
    }

    #[test]
    fn rays_converge_at_the_unaided_point_without_a_lens() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(40.0));
        patient.set_lens_power(2.0);

        assert_eq!(patient.ray_convergence_point(false), patient.near_point());
        assert_relative_eq!(
            patient.ray_convergence_point(true).get::<centimeter>(),
            50.0,
        );
    }

    #[test]
    fn presets_bypass_the_age_coupling() {
        let mut patient = Vision::default();
        patient.apply_preset(VisionPreset::Presbyopia);

        // The age formula alone would give 35 cm at age 60; the case pins
        // 50 cm directly.
        assert_eq!(patient.near_point().get::<centimeter>(), 50.0);
        assert_eq!(patient.age(), 60);
        // 1/(-0.50) - 1/(-0.25) = +2 D.
        assert_relative_eq!(patient.required_power(), 2.0);
        assert_eq!(patient.vision_condition(), VisionCondition::Presbyopia);
    }

    #[test]
    fn presets_apply_by_name_and_unknown_names_do_nothing() {
        let mut patient = Vision::default();

        let preset = patient.apply_preset_named("mild_myopia").unwrap();
        assert_eq!(preset, VisionPreset::MildMyopia);
        assert_eq!(patient.near_point().get::<centimeter>(), 15.0);

        let before = patient.clone();
        let err = patient.apply_preset_named("x_ray").unwrap_err();
        assert_eq!(err.name, "x_ray");
        assert_eq!(patient, before);
    }

    #[test]
    fn status_uses_fixed_precision_and_signed_powers() {
        let mut patient = Vision::default();
        patient.set_age(60);

        let status = patient.status();
        assert_eq!(status.near_point, "35.0");
        assert_eq!(status.object_distance, "25.0");
        assert_eq!(status.required_power, "+1.14");
        assert_eq!(status.lens_power, "+0.00");
        assert_eq!(status.condition, "Presbyopia");
        assert_eq!(status.lens_type, "Convex");
        assert_eq!(status.age, "60");
    }

    #[test]
    fn status_focus_quality_is_an_integer_percent() {
        let mut patient = Vision::default();
        patient.set_object_distance(cm(40.0));

        assert_eq!(patient.status().focus_quality, "50");
    }

    #[test]
    fn display_matches_the_bench_readout() {
        let mut patient = Vision::default();
        patient.set_near_point(cm(15.0));
        patient.set_lens_power(-2.5);

        assert_eq!(
            patient.to_string(),
            "Vision: Myopia, Near Point: 15.0cm, Required: -2.67D, Current: -2.50D",
        );
    }
}
