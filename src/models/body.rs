//! Body composition models
//!
//! BMI classification and ideal weight range.

use serde::{Deserialize, Serialize};

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 to below 35
    ObeseI,
    /// 35 to below 40
    ObeseII,
    /// 40 and above
    ObeseIII,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObeseI => "obeseI",
            BmiCategory::ObeseII => "obeseII",
            BmiCategory::ObeseIII => "obeseIII",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseI => "Obesity class I",
            BmiCategory::ObeseII => "Obesity class II",
            BmiCategory::ObeseIII => "Obesity class III",
        }
    }
}

/// Healthy weight band for a height, in whole kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyAssessment {
    pub bmi: f64,
    pub category: BmiCategory,
    pub ideal_weight: IdealWeightRange,
}
