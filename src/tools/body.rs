//! Body Assessment Tool
//!
//! BMI and ideal weight without the full plan inputs.

use serde::Serialize;

use crate::models::{validate_height, validate_weight, BmiCategory, Gender, IdealWeightRange};
use crate::nutrition::{bmi_category, calculate_bmi, calculate_ideal_weight, round_half_up};

/// Response for assess_body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessBodyResponse {
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: &'static str,
    pub ideal_weight: IdealWeightRange,
}

pub fn assess(weight: f64, height: f64, gender: &str) -> Result<AssessBodyResponse, String> {
    let gender: Gender = gender.parse().map_err(|e| format!("{}", e))?;
    validate_weight(weight).map_err(|e| e.to_string())?;
    validate_height(height).map_err(|e| e.to_string())?;

    let bmi = calculate_bmi(weight, height);
    let category = bmi_category(bmi);

    Ok(AssessBodyResponse {
        // one decimal for display; the category uses the unrounded value
        bmi: round_half_up(bmi * 10.0) / 10.0,
        category,
        category_label: category.label(),
        ideal_weight: calculate_ideal_weight(height, gender),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess() {
        let response = assess(95.0, 175.0, "male").unwrap();
        assert_eq!(response.bmi, 31.0);
        assert_eq!(response.category, BmiCategory::ObeseI);
        assert_eq!(response.category_label, "Obesity class I");
        assert_eq!(response.ideal_weight, IdealWeightRange { min: 61.0, max: 77.0 });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["categoryLabel"], "Obesity class I");
        assert_eq!(json["idealWeight"]["min"], 61.0);
    }

    #[test]
    fn test_assess_validates_input() {
        assert!(assess(20.0, 175.0, "male").unwrap_err().contains("weight"));
        assert!(assess(70.0, 90.0, "female").unwrap_err().contains("height"));
        assert!(assess(70.0, 170.0, "other").unwrap_err().contains("other"));
    }
}
