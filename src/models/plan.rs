//! Nutrition plan model
//!
//! Result of running a profile through the calculator.

use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Bodyweight-based guard rails shown next to the plan (grams per day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceValues {
    pub min_protein: i64,
    pub max_protein: i64,
    pub min_carbs: i64,
    pub min_fat: i64,
}

/// Computed energy budget and macro split for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    /// kcal/day
    pub bmr: f64,
    /// kcal/day
    pub tdee: f64,
    pub daily_calories: i64,
    pub macros: Macros,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_values: Option<ReferenceValues>,
}
