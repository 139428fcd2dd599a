//! Diet Template Tools

use serde::Serialize;

use crate::models::{DietTemplate, Goal, MealSlot, Nutrition, Restriction, TemplateFood, TemplateKind};
use crate::nutrition::diet_template;

/// One meal of a template with its subtotal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMealView {
    pub slot: MealSlot,
    pub label: &'static str,
    pub foods: Vec<TemplateFood>,
    pub totals: Nutrition,
}

/// Template laid out meal by meal, with totals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateView {
    pub kind: TemplateKind,
    pub title: String,
    pub description: String,
    pub meals: Vec<TemplateMealView>,
    pub totals: Nutrition,
    pub food_count: usize,
}

pub fn template_view(template: &DietTemplate) -> TemplateView {
    let meals = template
        .meals
        .iter()
        .map(|(slot, foods)| TemplateMealView {
            slot: *slot,
            label: slot.label(),
            foods: foods.clone(),
            totals: template.meal_nutrition(*slot),
        })
        .collect();

    TemplateView {
        kind: template.kind,
        title: template.title.clone(),
        description: template.description.clone(),
        meals,
        totals: template.total_nutrition(),
        food_count: template.food_count(),
    }
}

/// Look up the unscaled template for a goal and optional restriction
pub fn get_template(goal: &str, restriction: Option<&str>) -> Result<TemplateView, String> {
    let goal: Goal = goal.parse().map_err(|e| format!("{}", e))?;
    let restriction: Restriction = restriction
        .unwrap_or_default()
        .parse()
        .map_err(|e| format!("{}", e))?;

    Ok(template_view(&diet_template(goal, restriction)))
}
