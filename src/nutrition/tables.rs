//! Lookup tables for the calculator
//!
//! Activity factors, goal adjustments, macro ratios and meal distribution
//! tables. All tables are constant; `validate_tables` checks the ratio
//! tables once at start-up.

use serde::Serialize;

use super::error::{NutritionError, NutritionResult};
use crate::models::{ActivityLevel, Goal, MealSlot};

// ============================================================================
// Energy Density (kcal per gram)
// ============================================================================

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

// ============================================================================
// Mifflin-St Jeor Coefficients
// ============================================================================

pub const MSJ_WEIGHT_COEF: f64 = 10.0;
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
pub const MSJ_AGE_COEF: f64 = 5.0;
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

// ============================================================================
// Reference Values (grams per kg of bodyweight)
// ============================================================================

pub const MIN_PROTEIN_G_PER_KG: f64 = 1.6;
pub const MAX_PROTEIN_G_PER_KG: f64 = 2.2;
pub const MIN_CARBS_G_PER_KG: f64 = 3.0;
pub const MIN_FAT_G_PER_KG: f64 = 0.8;

// ============================================================================
// Activity and Goal Factors
// ============================================================================

/// TDEE multiplier for an activity level
pub const fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::Extreme => 1.9,
    }
}

/// Flat kcal/day offset applied by the additive policy
pub const fn goal_offset(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => -500.0,
        Goal::Maintain => 0.0,
        Goal::Gain => 500.0,
        Goal::Performance => 300.0,
    }
}

/// Share of TDEE kept by the multiplicative policy
pub const fn goal_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => 0.8,
        Goal::Maintain => 1.0,
        Goal::Gain => 1.15,
        Goal::Performance => 1.2,
    }
}

// ============================================================================
// Macro Ratios
// ============================================================================

/// Fractions of daily calories per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroRatios {
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

pub const fn macro_ratios(goal: Goal) -> MacroRatios {
    match goal {
        Goal::Lose => MacroRatios { protein: 0.40, carbs: 0.30, fat: 0.30 },
        Goal::Maintain => MacroRatios { protein: 0.30, carbs: 0.40, fat: 0.30 },
        Goal::Gain => MacroRatios { protein: 0.30, carbs: 0.50, fat: 0.20 },
        Goal::Performance => MacroRatios { protein: 0.25, carbs: 0.55, fat: 0.20 },
    }
}

// ============================================================================
// Meal Distribution Tables
// ============================================================================

/// Meal count used when a count has no table and the policy allows fallback
pub const DEFAULT_MEAL_COUNT: u32 = 5;

pub const SUPPORTED_MEAL_COUNTS: [u32; 4] = [3, 4, 5, 6];

pub type MealTable = &'static [(MealSlot, f64)];

const THREE_MEALS: MealTable = &[
    (MealSlot::Breakfast, 0.30),
    (MealSlot::Lunch, 0.40),
    (MealSlot::Dinner, 0.30),
];

const FOUR_MEALS: MealTable = &[
    (MealSlot::Breakfast, 0.25),
    (MealSlot::MorningSnack, 0.15),
    (MealSlot::Lunch, 0.35),
    (MealSlot::Dinner, 0.25),
];

const FIVE_MEALS: MealTable = &[
    (MealSlot::Breakfast, 0.25),
    (MealSlot::MorningSnack, 0.10),
    (MealSlot::Lunch, 0.30),
    (MealSlot::AfternoonSnack, 0.10),
    (MealSlot::Dinner, 0.25),
];

const SIX_MEALS: MealTable = &[
    (MealSlot::Breakfast, 0.20),
    (MealSlot::MorningSnack, 0.10),
    (MealSlot::Lunch, 0.25),
    (MealSlot::AfternoonSnack, 0.10),
    (MealSlot::Dinner, 0.25),
    (MealSlot::Supper, 0.10),
];

/// Slot fractions for a meal count, if one is defined
pub fn meal_table(meal_count: u32) -> Option<MealTable> {
    match meal_count {
        3 => Some(THREE_MEALS),
        4 => Some(FOUR_MEALS),
        5 => Some(FIVE_MEALS),
        6 => Some(SIX_MEALS),
        _ => None,
    }
}

// ============================================================================
// Validation
// ============================================================================

const RATIO_TOLERANCE: f64 = 1e-9;

fn check_sum(table: String, sum: f64) -> NutritionResult<()> {
    if (sum - 1.0).abs() > RATIO_TOLERANCE {
        return Err(NutritionError::InvalidRatioTable { table, sum });
    }
    Ok(())
}

/// Verify that every macro split and meal table sums to 1.0
pub fn validate_tables() -> NutritionResult<()> {
    for goal in Goal::ALL {
        check_sum(format!("macros/{}", goal), macro_ratios(goal).sum())?;
    }

    for count in SUPPORTED_MEAL_COUNTS {
        if let Some(table) = meal_table(count) {
            let sum: f64 = table.iter().map(|(_, fraction)| fraction).sum();
            check_sum(format!("meals/{}", count), sum)?;
        }
    }

    Ok(())
}
