//! Meal distribution
//!
//! Splits a plan's calories and macros across the meals of the day using
//! the fixed per-count tables. Each slot and each value is rounded on its
//! own; the rounding drift is kept, not corrected.

use tracing::warn;

use super::error::{NutritionError, NutritionResult};
use super::rounding::round_to_i64;
use super::tables::{meal_table, MealTable, DEFAULT_MEAL_COUNT};
use crate::config::MealCountPolicy;
use crate::models::{MealAllocation, MealDistribution, NutritionPlan};

/// Pick the table for a meal count according to the policy
pub fn resolve_meal_table(meal_count: u32, policy: MealCountPolicy) -> NutritionResult<MealTable> {
    if let Some(table) = meal_table(meal_count) {
        return Ok(table);
    }

    match policy {
        MealCountPolicy::Strict => Err(NutritionError::UnsupportedMealCount(meal_count)),
        MealCountPolicy::Fallback => {
            warn!(
                "Unsupported meal count {}. Using the {}-meal distribution.",
                meal_count, DEFAULT_MEAL_COUNT
            );
            meal_table(DEFAULT_MEAL_COUNT).ok_or(NutritionError::UnsupportedMealCount(meal_count))
        }
    }
}

/// Allocate the plan's budget across `meal_count` meals
pub fn distribute_meals(
    plan: &NutritionPlan,
    meal_count: u32,
    policy: MealCountPolicy,
) -> NutritionResult<MealDistribution> {
    let table = resolve_meal_table(meal_count, policy)?;
    let calories = plan.daily_calories as f64;
    let macros = plan.macros;

    let mut distribution = MealDistribution::new();
    for &(slot, fraction) in table {
        distribution.insert(
            slot,
            MealAllocation {
                calories: round_to_i64(calories * fraction),
                protein: round_to_i64(macros.protein as f64 * fraction),
                carbs: round_to_i64(macros.carbs as f64 * fraction),
                fat: round_to_i64(macros.fat as f64 * fraction),
            },
        );
    }

    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Macros, MealSlot};

    fn plan(daily_calories: i64, protein: i64, carbs: i64, fat: i64) -> NutritionPlan {
        NutritionPlan {
            bmr: 0.0,
            tdee: 0.0,
            daily_calories,
            macros: Macros { protein, carbs, fat },
            reference_values: None,
        }
    }

    #[test]
    fn test_five_meals_of_2450() {
        let dist = distribute_meals(&plan(2450, 184, 245, 82), 5, MealCountPolicy::Strict).unwrap();

        let calories: Vec<(MealSlot, i64)> =
            dist.iter().map(|(slot, a)| (*slot, a.calories)).collect();
        assert_eq!(
            calories,
            vec![
                (MealSlot::Breakfast, 613),
                (MealSlot::MorningSnack, 245),
                (MealSlot::Lunch, 735),
                (MealSlot::AfternoonSnack, 245),
                (MealSlot::Dinner, 613),
            ]
        );
        // Drift from independent rounding is kept
        assert_eq!(dist.totals().calories, 2451);
    }

    #[test]
    fn test_totals_stay_within_one_per_slot() {
        let source = plan(3213, 241, 402, 71);
        for count in 3..=6 {
            let dist = distribute_meals(&source, count, MealCountPolicy::Strict).unwrap();
            let totals = dist.totals();
            let tolerance = dist.len() as i64;
            assert!((totals.calories - source.daily_calories).abs() <= tolerance);
            assert!((totals.protein - source.macros.protein).abs() <= tolerance);
            assert!((totals.carbs - source.macros.carbs).abs() <= tolerance);
            assert!((totals.fat - source.macros.fat).abs() <= tolerance);
        }
    }

    #[test]
    fn test_slot_sets_per_count() {
        let source = plan(2000, 150, 200, 67);
        let slots = |count| -> Vec<MealSlot> {
            distribute_meals(&source, count, MealCountPolicy::Strict)
                .unwrap()
                .slots()
                .collect()
        };

        assert_eq!(slots(3), vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]);
        assert_eq!(
            slots(4),
            vec![MealSlot::Breakfast, MealSlot::MorningSnack, MealSlot::Lunch, MealSlot::Dinner]
        );
        assert_eq!(slots(6).last(), Some(&MealSlot::Supper));
    }

    #[test]
    fn test_three_meals_values() {
        let dist = distribute_meals(&plan(2000, 150, 200, 67), 3, MealCountPolicy::Strict).unwrap();
        let lunch = dist.get(MealSlot::Lunch).unwrap();
        assert_eq!(*lunch, MealAllocation { calories: 800, protein: 60, carbs: 80, fat: 27 });
    }

    #[test]
    fn test_unsupported_count_falls_back_to_five() {
        let source = plan(2450, 184, 245, 82);
        let fallback = distribute_meals(&source, 8, MealCountPolicy::Fallback).unwrap();
        let five = distribute_meals(&source, 5, MealCountPolicy::Fallback).unwrap();
        assert_eq!(fallback, five);
    }

    #[test]
    fn test_unsupported_count_strict_fails() {
        let err = distribute_meals(&plan(2450, 184, 245, 82), 2, MealCountPolicy::Strict).unwrap_err();
        assert_eq!(err, NutritionError::UnsupportedMealCount(2));
    }

    #[test]
    fn test_distribution_is_idempotent() {
        let source = plan(2780, 209, 278, 93);
        let a = distribute_meals(&source, 6, MealCountPolicy::Fallback).unwrap();
        let b = distribute_meals(&source, 6, MealCountPolicy::Fallback).unwrap();
        assert_eq!(a, b);
    }
}
