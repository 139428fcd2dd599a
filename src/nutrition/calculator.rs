//! Energy and macronutrient calculations
//!
//! BMR (Mifflin-St Jeor) -> TDEE -> daily calorie target -> macro split.
//! Every function is pure. Inputs are not range-checked here; see
//! `BiometricProfile::validate` for the boundary checks.

use tracing::debug;

use super::error::NutritionResult;
use super::rounding::round_to_i64;
use super::tables::{
    activity_factor, goal_multiplier, goal_offset, macro_ratios, CARBS_KCAL_PER_GRAM,
    FAT_KCAL_PER_GRAM, MAX_PROTEIN_G_PER_KG, MIN_CARBS_G_PER_KG, MIN_FAT_G_PER_KG,
    MIN_PROTEIN_G_PER_KG, MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT,
    MSJ_WEIGHT_COEF, PROTEIN_KCAL_PER_GRAM,
};
use crate::config::{CaloriePolicy, CalculatorConfig};
use crate::models::{
    ActivityLevel, BiometricProfile, Gender, Goal, Macros, NutritionPlan, ReferenceValues,
};

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor, 1990)
///
/// - male: `10w + 6.25h - 5a + 5`
/// - female: `10w + 6.25h - 5a - 161`
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let gender_constant = match gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female => MSJ_FEMALE_CONSTANT,
    };

    MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * f64::from(age_years)
        + gender_constant
}

/// Total daily energy expenditure: BMR times the activity factor
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_factor(activity_level)
}

/// TDEE for a raw activity key, failing on keys that aren't in the table
pub fn calculate_tdee_for_key(bmr: f64, activity_key: &str) -> NutritionResult<f64> {
    let level: ActivityLevel = activity_key.parse()?;
    Ok(calculate_tdee(bmr, level))
}

/// Daily calorie target for a goal, rounded to a whole kcal
pub fn calculate_daily_calories(tdee: f64, goal: Goal, policy: CaloriePolicy) -> i64 {
    let target = match policy {
        CaloriePolicy::Additive => tdee + goal_offset(goal),
        CaloriePolicy::Multiplicative => tdee * goal_multiplier(goal),
    };
    round_to_i64(target)
}

/// Daily calorie target for a raw goal key
pub fn calculate_daily_calories_for_key(
    tdee: f64,
    goal_key: &str,
    policy: CaloriePolicy,
) -> NutritionResult<i64> {
    let goal: Goal = goal_key.parse()?;
    Ok(calculate_daily_calories(tdee, goal, policy))
}

/// Split daily calories into grams of protein, carbs and fat.
///
/// Each macro is rounded on its own, so the macro calories can miss
/// `daily_calories` by a few kcal.
pub fn calculate_macros(daily_calories: i64, goal: Goal) -> Macros {
    let ratios = macro_ratios(goal);
    let calories = daily_calories as f64;

    Macros {
        protein: round_to_i64(calories * ratios.protein / PROTEIN_KCAL_PER_GRAM),
        carbs: round_to_i64(calories * ratios.carbs / CARBS_KCAL_PER_GRAM),
        fat: round_to_i64(calories * ratios.fat / FAT_KCAL_PER_GRAM),
    }
}

/// Macro split for a raw goal key
pub fn calculate_macros_for_key(daily_calories: i64, goal_key: &str) -> NutritionResult<Macros> {
    let goal: Goal = goal_key.parse()?;
    Ok(calculate_macros(daily_calories, goal))
}

/// Bodyweight-based protein/carb/fat bounds
pub fn calculate_reference_values(weight_kg: f64) -> ReferenceValues {
    ReferenceValues {
        min_protein: round_to_i64(weight_kg * MIN_PROTEIN_G_PER_KG),
        max_protein: round_to_i64(weight_kg * MAX_PROTEIN_G_PER_KG),
        min_carbs: round_to_i64(weight_kg * MIN_CARBS_G_PER_KG),
        min_fat: round_to_i64(weight_kg * MIN_FAT_G_PER_KG),
    }
}

/// Run the whole pipeline for a profile
pub fn calculate_nutrition_plan(
    profile: &BiometricProfile,
    config: &CalculatorConfig,
) -> NutritionPlan {
    let bmr = calculate_bmr(profile.gender, profile.weight, profile.height, profile.age);
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let daily_calories = calculate_daily_calories(tdee, profile.goal, config.calorie_policy);
    let macros = calculate_macros(daily_calories, profile.goal);

    debug!(
        bmr,
        tdee,
        daily_calories,
        goal = %profile.goal,
        policy = %config.calorie_policy,
        "Calculated nutrition plan"
    );

    NutritionPlan {
        bmr,
        tdee,
        daily_calories,
        macros,
        reference_values: Some(calculate_reference_values(profile.weight)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::NutritionError;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn reference_client() -> BiometricProfile {
        BiometricProfile {
            gender: Gender::Male,
            weight: 78.0,
            height: 180.0,
            age: 32,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Gain,
        }
    }

    #[test]
    fn test_bmr_male() {
        // 780 + 1125 - 160 + 5
        assert_eq!(calculate_bmr(Gender::Male, 78.0, 180.0, 32), 1750.0);
    }

    #[test]
    fn test_bmr_female() {
        // 600 + 1031.25 - 140 - 161
        assert_eq!(calculate_bmr(Gender::Female, 60.0, 165.0, 28), 1330.25);
    }

    #[test]
    fn test_bmr_is_linear() {
        let base = calculate_bmr(Gender::Female, 60.0, 165.0, 30);
        assert!(approx_eq(calculate_bmr(Gender::Female, 61.0, 165.0, 30) - base, 10.0, 1e-9));
        assert!(approx_eq(calculate_bmr(Gender::Female, 60.0, 166.0, 30) - base, 6.25, 1e-9));
        assert!(approx_eq(calculate_bmr(Gender::Female, 60.0, 165.0, 31) - base, -5.0, 1e-9));
    }

    #[test]
    fn test_bmr_degenerate_input_does_not_panic() {
        assert_eq!(calculate_bmr(Gender::Male, 0.0, 0.0, 0), 5.0);
    }

    #[test]
    fn test_tdee_uses_factor_table() {
        assert_eq!(calculate_tdee(1750.0, ActivityLevel::Moderate), 2712.5);
        assert_eq!(calculate_tdee(1000.0, ActivityLevel::Sedentary), 1200.0);
        assert_eq!(calculate_tdee(1000.0, ActivityLevel::Extreme), 1900.0);
    }

    #[test]
    fn test_tdee_for_unknown_key_fails() {
        assert_eq!(
            calculate_tdee_for_key(1750.0, "very_active"),
            Err(NutritionError::InvalidActivityLevel("very_active".to_string()))
        );
        assert_eq!(calculate_tdee_for_key(1000.0, "light"), Ok(1375.0));
    }

    #[test]
    fn test_daily_calories_rounds_half_up() {
        assert_eq!(calculate_daily_calories(2712.5, Goal::Maintain, CaloriePolicy::Additive), 2713);
        assert_eq!(calculate_daily_calories(2712.4, Goal::Maintain, CaloriePolicy::Additive), 2712);
    }

    #[test]
    fn test_daily_calories_additive() {
        let p = CaloriePolicy::Additive;
        assert_eq!(calculate_daily_calories(2500.0, Goal::Lose, p), 2000);
        assert_eq!(calculate_daily_calories(2500.0, Goal::Gain, p), 3000);
        assert_eq!(calculate_daily_calories(2500.0, Goal::Performance, p), 2800);
    }

    #[test]
    fn test_daily_calories_multiplicative() {
        let p = CaloriePolicy::Multiplicative;
        assert_eq!(calculate_daily_calories(2500.0, Goal::Lose, p), 2000);
        assert_eq!(calculate_daily_calories(2000.0, Goal::Lose, p), 1600);
        assert_eq!(calculate_daily_calories(2000.0, Goal::Gain, p), 2300);
        assert_eq!(calculate_daily_calories(2000.0, Goal::Performance, p), 2400);
    }

    #[test]
    fn test_daily_calories_unknown_goal_fails() {
        assert_eq!(
            calculate_daily_calories_for_key(2000.0, "shred", CaloriePolicy::Additive),
            Err(NutritionError::InvalidGoal("shred".to_string()))
        );
    }

    #[test]
    fn test_macros_gain() {
        let macros = calculate_macros(3213, Goal::Gain);
        assert_eq!(macros, Macros { protein: 241, carbs: 402, fat: 71 });
    }

    #[test]
    fn test_macros_lose() {
        // 2000 * 0.4 / 4, 2000 * 0.3 / 4, 2000 * 0.3 / 9
        let macros = calculate_macros(2000, Goal::Lose);
        assert_eq!(macros, Macros { protein: 200, carbs: 150, fat: 67 });
    }

    #[test]
    fn test_macros_are_not_renormalized() {
        let macros = calculate_macros(2000, Goal::Lose);
        let kcal = macros.protein * 4 + macros.carbs * 4 + macros.fat * 9;
        // 67 g fat is 603 kcal instead of 600
        assert_eq!(kcal, 2003);
    }

    #[test]
    fn test_macros_unknown_goal_fails() {
        assert!(matches!(
            calculate_macros_for_key(2000, "recomp"),
            Err(NutritionError::InvalidGoal(_))
        ));
    }

    #[test]
    fn test_reference_values() {
        let refs = calculate_reference_values(78.0);
        assert_eq!(
            refs,
            ReferenceValues { min_protein: 125, max_protein: 172, min_carbs: 234, min_fat: 62 }
        );
    }

    #[test]
    fn test_end_to_end_reference_client() {
        let plan = calculate_nutrition_plan(&reference_client(), &CalculatorConfig::default());
        assert_eq!(plan.bmr, 1750.0);
        assert_eq!(plan.tdee, 2712.5);
        assert_eq!(plan.daily_calories, 3213);
        assert_eq!(plan.macros, Macros { protein: 241, carbs: 402, fat: 71 });
        assert!(plan.reference_values.is_some());
    }

    #[test]
    fn test_end_to_end_multiplicative() {
        let config = CalculatorConfig {
            calorie_policy: CaloriePolicy::Multiplicative,
            ..CalculatorConfig::default()
        };
        let plan = calculate_nutrition_plan(&reference_client(), &config);
        // 2712.5 * 1.15 = 3119.375
        assert_eq!(plan.daily_calories, 3119);
    }

    #[test]
    fn test_plan_is_idempotent() {
        let config = CalculatorConfig::default();
        let first = calculate_nutrition_plan(&reference_client(), &config);
        let second = calculate_nutrition_plan(&reference_client(), &config);
        assert_eq!(first, second);
    }
}
