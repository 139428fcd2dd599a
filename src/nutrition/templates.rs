//! Built-in diet templates and template adjustment
//!
//! Each template is a full day of foods with baseline calories and macros.
//! `adjust_template` rescales every food linearly so the day hits the
//! plan's calorie target.

use std::collections::BTreeMap;

use tracing::debug;

use super::error::{NutritionError, NutritionResult};
use crate::models::{
    DietTemplate, Goal, MealSlot, Nutrition, NutritionPlan, Restriction, TemplateFood,
    TemplateKind,
};

// ============================================================================
// Template Data
// ============================================================================

struct FoodSeed {
    food: &'static str,
    quantity: &'static str,
    nutrition: Nutrition,
}

const fn food(
    food: &'static str,
    quantity: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> FoodSeed {
    FoodSeed {
        food,
        quantity,
        nutrition: Nutrition::new(calories, protein, carbs, fat),
    }
}

struct TemplateSeed {
    kind: TemplateKind,
    title: &'static str,
    description: &'static str,
    meals: &'static [(MealSlot, &'static [FoodSeed])],
}

const LOSE: TemplateSeed = TemplateSeed {
    kind: TemplateKind::Lose,
    title: "Weight Loss Diet",
    description: "Calorie-deficit meal plan for healthy fat loss.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Scrambled eggs", "2 units", 180.0, 12.0, 0.0, 14.0),
            food("Whole wheat toast", "1 slice", 80.0, 3.0, 15.0, 1.0),
            food("Tomato", "1/2 unit", 15.0, 1.0, 3.0, 0.0),
        ]),
        (MealSlot::MorningSnack, &[
            food("Apple", "1 medium", 95.0, 0.0, 25.0, 0.0),
            food("Mixed nuts", "10g", 60.0, 2.0, 1.0, 6.0),
        ]),
        (MealSlot::Lunch, &[
            food("Grilled chicken breast", "120g", 198.0, 37.0, 0.0, 4.0),
            food("Steamed broccoli", "100g", 55.0, 3.0, 11.0, 0.0),
            food("Brown rice", "50g cooked", 65.0, 1.5, 14.0, 0.5),
            food("Olive oil", "5ml", 40.0, 0.0, 0.0, 4.5),
        ]),
        (MealSlot::AfternoonSnack, &[
            food("Plain nonfat yogurt", "170g", 100.0, 17.0, 6.0, 0.0),
            food("Strawberries", "100g", 35.0, 0.7, 8.0, 0.3),
        ]),
        (MealSlot::Dinner, &[
            food("Baked fish", "120g", 140.0, 28.0, 0.0, 3.0),
            food("Steamed vegetables", "150g", 75.0, 4.0, 15.0, 0.0),
            food("Sweet potato", "80g", 70.0, 1.5, 16.0, 0.0),
        ]),
        (MealSlot::Supper, &[
            food("Green tea", "1 cup", 0.0, 0.0, 0.0, 0.0),
            food("Cottage cheese", "50g", 60.0, 10.0, 2.0, 2.0),
        ]),
    ],
};

const MAINTAIN: TemplateSeed = TemplateSeed {
    kind: TemplateKind::Maintain,
    title: "Maintenance Diet",
    description: "Balanced meal plan to hold current weight with a focus on health.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Scrambled eggs", "2 units", 180.0, 12.0, 0.0, 14.0),
            food("Whole wheat bread", "2 slices", 160.0, 8.0, 28.0, 2.0),
            food("Avocado", "1/4 unit", 80.0, 1.0, 4.0, 7.0),
        ]),
        (MealSlot::MorningSnack, &[
            food("Banana", "1 unit", 105.0, 1.0, 27.0, 0.0),
            food("Peanut butter", "10g", 60.0, 2.5, 2.0, 5.0),
        ]),
        (MealSlot::Lunch, &[
            food("Grilled chicken fillet", "150g", 250.0, 47.0, 0.0, 5.0),
            food("Brown rice", "100g", 130.0, 3.0, 27.0, 1.0),
            food("Beans", "80g", 80.0, 5.0, 14.0, 0.5),
            food("Leaf salad", "as desired", 25.0, 2.0, 5.0, 0.0),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::AfternoonSnack, &[
            food("Greek yogurt", "170g", 150.0, 15.0, 8.0, 5.0),
            food("Granola", "20g", 90.0, 3.0, 15.0, 3.0),
        ]),
        (MealSlot::Dinner, &[
            food("Lean beef", "150g", 200.0, 40.0, 0.0, 7.0),
            food("Potato", "100g", 130.0, 3.0, 30.0, 0.0),
            food("Mixed vegetables", "150g", 70.0, 3.0, 15.0, 0.0),
            food("Olive oil", "5ml", 45.0, 0.0, 0.0, 5.0),
        ]),
        (MealSlot::Supper, &[
            food("Chamomile tea", "1 cup", 0.0, 0.0, 0.0, 0.0),
            food("Mixed nuts", "15g", 90.0, 3.0, 2.0, 8.0),
        ]),
    ],
};

const GAIN: TemplateSeed = TemplateSeed {
    kind: TemplateKind::Gain,
    title: "Muscle Gain Diet",
    description: "Calorie-surplus meal plan to support muscle growth.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Whole eggs", "3 units", 270.0, 18.0, 0.0, 21.0),
            food("Whole wheat bread", "3 slices", 240.0, 12.0, 42.0, 3.0),
            food("Peanut butter", "20g", 120.0, 5.0, 4.0, 10.0),
            food("Banana", "1 unit", 105.0, 1.0, 27.0, 0.0),
        ]),
        (MealSlot::MorningSnack, &[
            food("Whey protein", "30g (1 scoop)", 120.0, 24.0, 3.0, 1.5),
            food("Rolled oats", "40g", 150.0, 5.0, 27.0, 3.0),
            food("Whole milk", "250ml", 150.0, 8.0, 12.0, 8.0),
        ]),
        (MealSlot::Lunch, &[
            food("Beef", "180g", 350.0, 50.0, 0.0, 16.0),
            food("White rice", "150g", 200.0, 4.0, 45.0, 0.5),
            food("Beans", "100g", 100.0, 7.0, 18.0, 0.5),
            food("Vegetables", "100g", 50.0, 2.0, 10.0, 0.0),
            food("Olive oil", "15ml", 135.0, 0.0, 0.0, 15.0),
        ]),
        (MealSlot::AfternoonSnack, &[
            food("Sweet potato", "150g", 135.0, 2.0, 32.0, 0.0),
            food("Shredded chicken", "100g", 165.0, 31.0, 0.0, 3.5),
            food("Avocado", "1/2 unit", 160.0, 2.0, 8.0, 15.0),
        ]),
        (MealSlot::Dinner, &[
            food("Salmon", "180g", 370.0, 40.0, 0.0, 22.0),
            food("Brown rice", "150g", 195.0, 4.5, 40.0, 1.5),
            food("Broccoli", "120g", 42.0, 5.0, 8.0, 0.5),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::Supper, &[
            food("Greek yogurt", "200g", 180.0, 18.0, 10.0, 7.0),
            food("Whey protein", "15g (1/2 scoop)", 60.0, 12.0, 1.5, 0.75),
            food("Honey", "15g", 45.0, 0.0, 12.0, 0.0),
        ]),
    ],
};

const PERFORMANCE: TemplateSeed = TemplateSeed {
    kind: TemplateKind::Performance,
    title: "Sports Performance Diet",
    description: "Meal plan tuned for athletic performance and recovery.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Scrambled eggs", "3 units", 270.0, 18.0, 0.0, 21.0),
            food("Oats", "50g", 190.0, 7.0, 33.0, 3.5),
            food("Banana", "1 unit", 105.0, 1.0, 27.0, 0.0),
            food("Honey", "10g", 30.0, 0.0, 8.0, 0.0),
        ]),
        (MealSlot::MorningSnack, &[
            food("Whole wheat bread", "2 slices", 160.0, 8.0, 28.0, 2.0),
            food("Tuna in water", "90g", 100.0, 22.0, 0.0, 1.0),
        ]),
        (MealSlot::Lunch, &[
            food("Chicken breast", "170g", 280.0, 53.0, 0.0, 6.0),
            food("Brown rice", "150g", 195.0, 4.5, 40.0, 1.5),
            food("Sweet potato", "150g", 135.0, 2.0, 32.0, 0.0),
            food("Broccoli", "100g", 35.0, 2.5, 7.0, 0.4),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::PreWorkoutSnack, &[
            food("Banana", "1 unit", 105.0, 1.0, 27.0, 0.0),
            food("Peanut butter", "15g", 90.0, 3.5, 3.0, 7.5),
        ]),
        (MealSlot::PostWorkout, &[
            food("Whey protein", "30g (1 scoop)", 120.0, 24.0, 3.0, 1.5),
            food("Dextrose", "30g", 120.0, 0.0, 30.0, 0.0),
        ]),
        (MealSlot::Dinner, &[
            food("Lean beef", "170g", 290.0, 52.0, 0.0, 8.0),
            food("Quinoa", "100g", 120.0, 4.0, 21.0, 2.0),
            food("Mixed vegetables", "150g", 70.0, 3.0, 15.0, 0.0),
            food("Olive oil", "5ml", 45.0, 0.0, 0.0, 5.0),
        ]),
        (MealSlot::Supper, &[
            food("Greek yogurt", "200g", 180.0, 18.0, 10.0, 7.0),
            food("Casein", "30g (1 scoop)", 110.0, 24.0, 3.0, 0.5),
            food("Walnuts", "15g", 100.0, 2.5, 2.0, 9.0),
        ]),
    ],
};

const VEGETARIAN: TemplateSeed = TemplateSeed {
    kind: TemplateKind::Vegetarian,
    title: "Vegetarian Diet",
    description: "Balanced meal plan without meat, fish or poultry.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Scrambled eggs", "2 units", 180.0, 12.0, 0.0, 14.0),
            food("Whole wheat bread", "2 slices", 160.0, 8.0, 28.0, 2.0),
            food("Avocado", "1/4 unit", 80.0, 1.0, 4.0, 7.0),
        ]),
        (MealSlot::MorningSnack, &[
            food("Yogurt", "170g", 100.0, 8.0, 12.0, 2.5),
            food("Granola", "30g", 120.0, 3.0, 20.0, 4.0),
        ]),
        (MealSlot::Lunch, &[
            food("Lentils", "150g cooked", 170.0, 13.0, 30.0, 0.5),
            food("Brown rice", "100g", 130.0, 3.0, 27.0, 1.0),
            food("Broccoli", "100g", 35.0, 2.5, 7.0, 0.4),
            food("Tofu", "100g", 80.0, 8.0, 2.0, 4.0),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::AfternoonSnack, &[
            food("Apple", "1 unit", 95.0, 0.0, 25.0, 0.0),
            food("Mixed nuts", "30g", 180.0, 6.0, 5.0, 16.0),
        ]),
        (MealSlot::Dinner, &[
            food("Chickpeas", "150g cooked", 270.0, 14.0, 45.0, 4.0),
            food("Mixed vegetables", "200g", 100.0, 5.0, 20.0, 0.5),
            food("Cheese", "30g", 110.0, 7.0, 0.5, 9.0),
            food("Olive oil", "5ml", 45.0, 0.0, 0.0, 5.0),
        ]),
        (MealSlot::Supper, &[
            food("Chamomile tea", "1 cup", 0.0, 0.0, 0.0, 0.0),
            food("Greek yogurt", "100g", 90.0, 9.0, 5.0, 3.5),
        ]),
    ],
};

const VEGAN: TemplateSeed = TemplateSeed {
    kind: TemplateKind::Vegan,
    title: "Vegan Diet",
    description: "Meal plan based exclusively on plant foods.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Oats", "50g", 190.0, 7.0, 33.0, 3.5),
            food("Fortified plant milk", "250ml", 90.0, 3.0, 12.0, 3.5),
            food("Banana", "1 unit", 105.0, 1.0, 27.0, 0.0),
            food("Peanut butter", "15g", 90.0, 3.5, 3.0, 7.5),
        ]),
        (MealSlot::MorningSnack, &[
            food("Fruit smoothie", "300ml", 150.0, 2.0, 35.0, 1.0),
            food("Plant protein powder", "30g", 110.0, 22.0, 5.0, 1.0),
        ]),
        (MealSlot::Lunch, &[
            food("Firm tofu", "150g", 120.0, 12.0, 3.0, 6.0),
            food("Brown rice", "150g", 195.0, 4.5, 40.0, 1.5),
            food("Lentils", "100g cooked", 115.0, 9.0, 20.0, 0.4),
            food("Mixed vegetables", "200g", 100.0, 5.0, 20.0, 0.5),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::AfternoonSnack, &[
            food("Dried fruit", "30g", 80.0, 1.0, 20.0, 0.0),
            food("Walnuts", "30g", 200.0, 5.0, 4.0, 18.0),
        ]),
        (MealSlot::Dinner, &[
            food("Seitan", "120g", 180.0, 35.0, 8.0, 2.0),
            food("Quinoa", "150g", 180.0, 6.0, 31.0, 3.0),
            food("Pumpkin", "200g", 60.0, 2.0, 14.0, 0.0),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::Supper, &[
            food("Green tea", "1 cup", 0.0, 0.0, 0.0, 0.0),
            food("Hummus", "50g", 80.0, 4.0, 8.0, 4.0),
            food("Carrot", "100g", 40.0, 1.0, 9.0, 0.0),
        ]),
    ],
};

const GLUTEN_FREE: TemplateSeed = TemplateSeed {
    kind: TemplateKind::GlutenFree,
    title: "Gluten-Free Diet",
    description: "Gluten-free meal plan for intolerant or celiac clients.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Scrambled eggs", "2 units", 180.0, 12.0, 0.0, 14.0),
            food("Tapioca", "50g", 170.0, 0.0, 42.0, 0.0),
            food("White cheese", "30g", 80.0, 4.0, 1.0, 7.0),
        ]),
        (MealSlot::MorningSnack, &[
            food("Banana", "1 unit", 105.0, 1.0, 27.0, 0.0),
            food("Mixed nuts", "20g", 120.0, 4.0, 3.0, 10.0),
        ]),
        (MealSlot::Lunch, &[
            food("Grilled chicken", "150g", 250.0, 47.0, 0.0, 5.0),
            food("Brown rice", "120g", 155.0, 3.5, 32.0, 1.0),
            food("Sweet potato", "100g", 90.0, 1.5, 21.0, 0.0),
            food("Mixed vegetables", "150g", 75.0, 3.0, 15.0, 0.5),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::AfternoonSnack, &[
            food("Plain yogurt", "170g", 100.0, 8.0, 12.0, 2.5),
            food("Berries", "100g", 60.0, 1.0, 14.0, 0.5),
        ]),
        (MealSlot::Dinner, &[
            food("Salmon", "150g", 280.0, 35.0, 0.0, 16.0),
            food("Quinoa", "100g", 120.0, 4.0, 21.0, 2.0),
            food("Asparagus", "100g", 25.0, 2.5, 5.0, 0.0),
            food("Olive oil", "5ml", 45.0, 0.0, 0.0, 5.0),
        ]),
        (MealSlot::Supper, &[
            food("Chamomile tea", "1 cup", 0.0, 0.0, 0.0, 0.0),
            food("Cottage cheese", "80g", 80.0, 14.0, 3.0, 2.0),
        ]),
    ],
};

const LACTOSE_FREE: TemplateSeed = TemplateSeed {
    kind: TemplateKind::LactoseFree,
    title: "Lactose-Free Diet",
    description: "Dairy-free meal plan for lactose intolerant clients.",
    meals: &[
        (MealSlot::Breakfast, &[
            food("Scrambled eggs", "2 units", 180.0, 12.0, 0.0, 14.0),
            food("Whole wheat bread", "2 slices", 160.0, 8.0, 28.0, 2.0),
            food("Avocado", "1/4 unit", 80.0, 1.0, 4.0, 7.0),
        ]),
        (MealSlot::MorningSnack, &[
            food("Coconut yogurt", "170g", 120.0, 2.0, 12.0, 7.0),
            food("Dairy-free granola", "30g", 120.0, 3.0, 20.0, 4.0),
        ]),
        (MealSlot::Lunch, &[
            food("Chicken breast", "150g", 250.0, 47.0, 0.0, 5.0),
            food("Brown rice", "120g", 155.0, 3.5, 32.0, 1.0),
            food("Beans", "100g", 100.0, 7.0, 18.0, 0.5),
            food("Mixed vegetables", "150g", 75.0, 3.0, 15.0, 0.5),
            food("Olive oil", "10ml", 90.0, 0.0, 0.0, 10.0),
        ]),
        (MealSlot::AfternoonSnack, &[
            food("Banana", "1 unit", 105.0, 1.0, 27.0, 0.0),
            food("Peanut butter", "15g", 90.0, 3.5, 3.0, 7.5),
        ]),
        (MealSlot::Dinner, &[
            food("Baked fish", "150g", 180.0, 36.0, 0.0, 4.0),
            food("Sweet potato", "120g", 110.0, 2.0, 26.0, 0.0),
            food("Broccoli", "100g", 35.0, 2.5, 7.0, 0.4),
            food("Olive oil", "5ml", 45.0, 0.0, 0.0, 5.0),
        ]),
        (MealSlot::Supper, &[
            food("Chamomile tea", "1 cup", 0.0, 0.0, 0.0, 0.0),
            food("Fruit", "100g", 60.0, 1.0, 15.0, 0.0),
        ]),
    ],
};

// ============================================================================
// Lookup and Adjustment
// ============================================================================

impl TemplateSeed {
    fn build(&self) -> DietTemplate {
        let meals: BTreeMap<MealSlot, Vec<TemplateFood>> = self
            .meals
            .iter()
            .map(|(slot, foods)| {
                let foods = foods
                    .iter()
                    .map(|seed| TemplateFood {
                        food: seed.food.to_string(),
                        quantity: seed.quantity.to_string(),
                        nutrition: seed.nutrition,
                    })
                    .collect();
                (*slot, foods)
            })
            .collect();

        DietTemplate {
            kind: self.kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
            meals,
        }
    }
}

/// Template for a goal, unless a dietary restriction overrides it
pub fn diet_template(goal: Goal, restriction: Restriction) -> DietTemplate {
    let seed = match restriction {
        Restriction::Vegetarian => &VEGETARIAN,
        Restriction::Vegan => &VEGAN,
        Restriction::Gluten => &GLUTEN_FREE,
        Restriction::Lactose => &LACTOSE_FREE,
        Restriction::None => match goal {
            Goal::Lose => &LOSE,
            Goal::Maintain => &MAINTAIN,
            Goal::Gain => &GAIN,
            Goal::Performance => &PERFORMANCE,
        },
    };
    seed.build()
}

/// Rescale a template so its total calories match the plan.
///
/// Every food's calories and macros are multiplied by
/// `daily_calories / template_calories` and rounded to whole numbers.
pub fn adjust_template(
    template: &DietTemplate,
    plan: &NutritionPlan,
) -> NutritionResult<DietTemplate> {
    let template_calories = template.total_nutrition().calories;
    if template_calories <= 0.0 {
        return Err(NutritionError::EmptyTemplate(template.title.clone()));
    }

    let factor = plan.daily_calories as f64 / template_calories;
    debug!(
        "Adjusting template '{}' from {} kcal to {} kcal (factor {:.4})",
        template.title, template_calories, plan.daily_calories, factor
    );

    let mut adjusted = template.clone();
    for foods in adjusted.meals.values_mut() {
        for item in foods.iter_mut() {
            item.nutrition = item.nutrition.scale(factor).rounded();
        }
    }

    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macros;

    fn plan(daily_calories: i64) -> NutritionPlan {
        NutritionPlan {
            bmr: 0.0,
            tdee: 0.0,
            daily_calories,
            macros: Macros::default(),
            reference_values: None,
        }
    }

    #[test]
    fn test_goal_templates() {
        assert_eq!(diet_template(Goal::Lose, Restriction::None).kind, TemplateKind::Lose);
        assert_eq!(diet_template(Goal::Maintain, Restriction::None).kind, TemplateKind::Maintain);
        assert_eq!(diet_template(Goal::Gain, Restriction::None).kind, TemplateKind::Gain);
        assert_eq!(
            diet_template(Goal::Performance, Restriction::None).kind,
            TemplateKind::Performance
        );
    }

    #[test]
    fn test_restriction_overrides_goal() {
        assert_eq!(diet_template(Goal::Gain, Restriction::Vegan).kind, TemplateKind::Vegan);
        assert_eq!(diet_template(Goal::Lose, Restriction::Gluten).kind, TemplateKind::GlutenFree);
        assert_eq!(
            diet_template(Goal::Maintain, Restriction::Lactose).kind,
            TemplateKind::LactoseFree
        );
        assert_eq!(
            diet_template(Goal::Performance, Restriction::Vegetarian).kind,
            TemplateKind::Vegetarian
        );
    }

    #[test]
    fn test_lose_template_total() {
        let template = diet_template(Goal::Lose, Restriction::None);
        assert_eq!(template.total_nutrition().calories, 1268.0);
        assert_eq!(template.meals.len(), 6);
    }

    #[test]
    fn test_performance_template_uses_workout_slots() {
        let template = diet_template(Goal::Performance, Restriction::None);
        assert!(template.meals.contains_key(&MealSlot::PreWorkoutSnack));
        assert!(template.meals.contains_key(&MealSlot::PostWorkout));
        assert!(!template.meals.contains_key(&MealSlot::AfternoonSnack));
    }

    #[test]
    fn test_every_template_has_calories() {
        for restriction in [
            Restriction::None,
            Restriction::Vegetarian,
            Restriction::Vegan,
            Restriction::Gluten,
            Restriction::Lactose,
        ] {
            for goal in Goal::ALL {
                assert!(diet_template(goal, restriction).total_nutrition().calories > 0.0);
            }
        }
    }

    #[test]
    fn test_adjust_doubles_template() {
        let template = diet_template(Goal::Lose, Restriction::None);
        let adjusted = adjust_template(&template, &plan(2536)).unwrap();

        let eggs = &adjusted.meals[&MealSlot::Breakfast][0];
        assert_eq!(eggs.food, "Scrambled eggs");
        assert_eq!(eggs.nutrition, Nutrition::new(360.0, 24.0, 0.0, 28.0));
        assert_eq!(adjusted.total_nutrition().calories, 2536.0);
        // Source template is untouched
        assert_eq!(template.total_nutrition().calories, 1268.0);
    }

    #[test]
    fn test_adjust_rounds_each_food() {
        let template = diet_template(Goal::Maintain, Restriction::None);
        let target = 2600;
        let adjusted = adjust_template(&template, &plan(target)).unwrap();

        for foods in adjusted.meals.values() {
            for item in foods {
                assert_eq!(item.nutrition, item.nutrition.rounded());
            }
        }
        // Rounding error is at most half a kcal per food
        let drift = (adjusted.total_nutrition().calories - target as f64).abs();
        assert!(drift <= adjusted.food_count() as f64 * 0.5);
    }

    #[test]
    fn test_adjust_empty_template_fails() {
        let template = DietTemplate {
            kind: TemplateKind::Maintain,
            title: "Empty".to_string(),
            description: String::new(),
            meals: BTreeMap::new(),
        };
        assert_eq!(
            adjust_template(&template, &plan(2000)),
            Err(NutritionError::EmptyTemplate("Empty".to_string()))
        );
    }
}
