//! Nutrition Plan Tools
//!
//! Validate intake input, run the calculator and shape the responses.

use serde::Serialize;
use tracing::info;

use crate::config::CalculatorConfig;
use crate::models::{
    BiometricProfile, BodyAssessment, Macros, MealAllocation, MealDistribution, NutritionPlan,
    Restriction,
};
use crate::nutrition::{
    adjust_template, assess_body, calculate_nutrition_plan, diet_template, distribute_meals,
    DEFAULT_MEAL_COUNT,
};
use crate::tools::templates::{template_view, TemplateView};

/// Upper bound for a hand-entered daily budget (kcal)
pub const MAX_DAILY_CALORIES: i64 = 20_000;
/// Upper bound for a hand-entered macro target (grams)
pub const MAX_MACRO_GRAMS: i64 = 5_000;

/// Raw intake fields as they arrive from a form or tool call
#[derive(Debug, Clone)]
pub struct ProfileInput<'a> {
    pub gender: &'a str,
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub activity_level: &'a str,
    pub goal: &'a str,
}

/// Meal split with its totals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealsView {
    pub meal_count: usize,
    pub meals: MealDistribution,
    pub totals: MealAllocation,
}

impl MealsView {
    fn new(meals: MealDistribution) -> Self {
        Self {
            meal_count: meals.len(),
            totals: meals.totals(),
            meals,
        }
    }
}

/// Response for calculate_nutrition_plan
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePlanResponse {
    pub profile: BiometricProfile,
    pub plan: NutritionPlan,
    pub assessment: BodyAssessment,
    pub distribution: MealsView,
    pub calorie_policy: &'static str,
    pub meal_count_policy: &'static str,
}

/// Response for distribute_meals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeMealsResponse {
    pub daily_calories: i64,
    pub macros: Macros,
    pub distribution: MealsView,
}

/// Response for generate_diet
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDietResponse {
    pub profile: BiometricProfile,
    pub restriction: Restriction,
    pub plan: NutritionPlan,
    pub distribution: MealsView,
    pub template: TemplateView,
}

/// Parse and range-check intake fields
pub fn parse_profile(input: &ProfileInput<'_>) -> Result<BiometricProfile, String> {
    let profile = BiometricProfile {
        gender: input.gender.parse().map_err(|e| format!("{}", e))?,
        weight: input.weight,
        height: input.height,
        age: input.age,
        activity_level: input.activity_level.parse().map_err(|e| format!("{}", e))?,
        goal: input.goal.parse().map_err(|e| format!("{}", e))?,
    };
    profile.validate().map_err(|e| e.to_string())?;
    Ok(profile)
}

fn distribute(
    config: &CalculatorConfig,
    plan: &NutritionPlan,
    meal_count: Option<u32>,
) -> Result<MealsView, String> {
    let count = meal_count.unwrap_or(DEFAULT_MEAL_COUNT);
    let meals = distribute_meals(plan, count, config.meal_count_policy).map_err(|e| e.to_string())?;
    Ok(MealsView::new(meals))
}

/// Full plan for a client: energy, macros, body assessment and meal split
pub fn calculate_plan(
    config: &CalculatorConfig,
    input: &ProfileInput<'_>,
    meal_count: Option<u32>,
) -> Result<CalculatePlanResponse, String> {
    let profile = parse_profile(input)?;
    let plan = calculate_nutrition_plan(&profile, config);
    let distribution = distribute(config, &plan, meal_count)?;

    info!(
        "Calculated plan: {} kcal, {} meals ({} policy)",
        plan.daily_calories, distribution.meal_count, config.calorie_policy
    );

    Ok(CalculatePlanResponse {
        assessment: assess_body(&profile),
        profile,
        plan,
        distribution,
        calorie_policy: config.calorie_policy.as_str(),
        meal_count_policy: config.meal_count_policy.as_str(),
    })
}

/// Split an existing calorie/macro budget across meals
pub fn distribute_budget(
    config: &CalculatorConfig,
    daily_calories: i64,
    macros: Macros,
    meal_count: Option<u32>,
) -> Result<DistributeMealsResponse, String> {
    if !(1..=MAX_DAILY_CALORIES).contains(&daily_calories) {
        return Err(format!(
            "daily_calories must be between 1 and {}, got {}",
            MAX_DAILY_CALORIES, daily_calories
        ));
    }
    let grams = [macros.protein, macros.carbs, macros.fat];
    if grams.iter().any(|g| !(0..=MAX_MACRO_GRAMS).contains(g)) {
        return Err(format!("macros must be between 0 and {} g", MAX_MACRO_GRAMS));
    }

    let plan = NutritionPlan {
        bmr: 0.0,
        tdee: 0.0,
        daily_calories,
        macros,
        reference_values: None,
    };
    let distribution = distribute(config, &plan, meal_count)?;

    Ok(DistributeMealsResponse {
        daily_calories,
        macros,
        distribution,
    })
}

/// Plan plus a diet template rescaled to the plan's calories
pub fn generate_diet(
    config: &CalculatorConfig,
    input: &ProfileInput<'_>,
    restriction: Option<&str>,
    meal_count: Option<u32>,
) -> Result<GenerateDietResponse, String> {
    let profile = parse_profile(input)?;
    let restriction: Restriction = restriction
        .unwrap_or_default()
        .parse()
        .map_err(|e| format!("{}", e))?;

    let plan = calculate_nutrition_plan(&profile, config);
    let distribution = distribute(config, &plan, meal_count)?;
    let template = diet_template(profile.goal, restriction);
    let adjusted = adjust_template(&template, &plan).map_err(|e| e.to_string())?;

    info!(
        "Generated '{}' diet for {} kcal",
        adjusted.title, plan.daily_calories
    );

    Ok(GenerateDietResponse {
        profile,
        restriction,
        plan,
        distribution,
        template: template_view(&adjusted),
    })
}
