//! Nutrition calculator
//!
//! Pure functions from client biometrics to calorie targets, macro splits,
//! meal distributions, body assessments and adjusted diet templates.

pub mod body;
pub mod calculator;
pub mod error;
pub mod meals;
pub mod rounding;
pub mod tables;
pub mod templates;

pub use body::{assess_body, bmi_category, calculate_bmi, calculate_ideal_weight};
pub use calculator::{
    calculate_bmr, calculate_daily_calories, calculate_daily_calories_for_key, calculate_macros,
    calculate_macros_for_key, calculate_nutrition_plan, calculate_reference_values,
    calculate_tdee, calculate_tdee_for_key,
};
pub use error::{NutritionError, NutritionResult};
pub use meals::{distribute_meals, resolve_meal_table};
pub use rounding::{round_half_up, round_to_i64};
pub use tables::{validate_tables, DEFAULT_MEAL_COUNT, SUPPORTED_MEAL_COUNTS};
pub use templates::{adjust_template, diet_template};
