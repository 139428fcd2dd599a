//! BMI, BMI category and ideal weight range

use super::rounding::round_half_up;
use crate::models::{BiometricProfile, BmiCategory, BodyAssessment, Gender, IdealWeightRange};

/// Healthy BMI band used for the ideal weight range: (min, max)
const MALE_BMI_BAND: (f64, f64) = (20.0, 25.0);
const FEMALE_BMI_BAND: (f64, f64) = (18.5, 24.9);

/// Body mass index. A zero height yields infinity; callers validate first.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI; each threshold belongs to the band above it
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseI
    } else if bmi < 40.0 {
        BmiCategory::ObeseII
    } else {
        BmiCategory::ObeseIII
    }
}

/// Weight range (whole kg) that puts a person of this height in the healthy band
pub fn calculate_ideal_weight(height_cm: f64, gender: Gender) -> IdealWeightRange {
    let height_m = height_cm / 100.0;
    let (min_bmi, max_bmi) = match gender {
        Gender::Male => MALE_BMI_BAND,
        Gender::Female => FEMALE_BMI_BAND,
    };

    IdealWeightRange {
        min: round_half_up(min_bmi * height_m * height_m),
        max: round_half_up(max_bmi * height_m * height_m),
    }
}

pub fn assess_body(profile: &BiometricProfile) -> BodyAssessment {
    let bmi = calculate_bmi(profile.weight, profile.height);
    BodyAssessment {
        bmi,
        category: bmi_category(bmi),
        ideal_weight: calculate_ideal_weight(profile.height, profile.gender),
    }
}
