//! Diet template models
//!
//! Pre-built meal plans that get rescaled to a client's calorie target.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{MealSlot, Nutrition};
use crate::nutrition::NutritionError;

/// Dietary restriction selected on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Restriction {
    #[default]
    None,
    Vegetarian,
    Vegan,
    Gluten,
    Lactose,
}

impl Restriction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Restriction::None => "none",
            Restriction::Vegetarian => "vegetarian",
            Restriction::Vegan => "vegan",
            Restriction::Gluten => "gluten",
            Restriction::Lactose => "lactose",
        }
    }
}

impl FromStr for Restriction {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Restriction::None),
            "vegetarian" => Ok(Restriction::Vegetarian),
            "vegan" => Ok(Restriction::Vegan),
            "gluten" | "glutenfree" | "gluten_free" => Ok(Restriction::Gluten),
            "lactose" | "lactosefree" | "lactose_free" => Ok(Restriction::Lactose),
            _ => Err(NutritionError::InvalidRestriction(s.to_string())),
        }
    }
}

/// Which built-in template a diet was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateKind {
    Lose,
    Maintain,
    Gain,
    Performance,
    Vegetarian,
    Vegan,
    GlutenFree,
    LactoseFree,
}

/// A single food line in a template meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateFood {
    pub food: String,
    pub quantity: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietTemplate {
    pub kind: TemplateKind,
    pub title: String,
    pub description: String,
    pub meals: BTreeMap<MealSlot, Vec<TemplateFood>>,
}

impl DietTemplate {
    /// Nutrition of one meal, summed over its foods
    pub fn meal_nutrition(&self, slot: MealSlot) -> Nutrition {
        self.meals
            .get(&slot)
            .map(|foods| foods.iter().map(|f| f.nutrition).sum())
            .unwrap_or_default()
    }

    /// Nutrition of the whole template
    pub fn total_nutrition(&self) -> Nutrition {
        self.meals
            .values()
            .flat_map(|foods| foods.iter().map(|f| f.nutrition))
            .sum()
    }

    pub fn food_count(&self) -> usize {
        self.meals.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restriction_parsing() {
        assert_eq!("".parse::<Restriction>().unwrap(), Restriction::None);
        assert_eq!("Vegan".parse::<Restriction>().unwrap(), Restriction::Vegan);
        assert_eq!("gluten_free".parse::<Restriction>().unwrap(), Restriction::Gluten);
        assert!(matches!(
            "keto".parse::<Restriction>(),
            Err(NutritionError::InvalidRestriction(_))
        ));
    }

    #[test]
    fn test_template_totals() {
        let mut meals = BTreeMap::new();
        meals.insert(
            MealSlot::Breakfast,
            vec![
                TemplateFood {
                    food: "Scrambled eggs".to_string(),
                    quantity: "2 units".to_string(),
                    nutrition: Nutrition::new(180.0, 12.0, 0.0, 14.0),
                },
                TemplateFood {
                    food: "Whole wheat toast".to_string(),
                    quantity: "1 slice".to_string(),
                    nutrition: Nutrition::new(80.0, 3.0, 15.0, 1.0),
                },
            ],
        );
        meals.insert(
            MealSlot::Lunch,
            vec![TemplateFood {
                food: "Grilled chicken breast".to_string(),
                quantity: "120g".to_string(),
                nutrition: Nutrition::new(198.0, 37.0, 0.0, 4.0),
            }],
        );
        let template = DietTemplate {
            kind: TemplateKind::Lose,
            title: "Test".to_string(),
            description: String::new(),
            meals,
        };

        assert_eq!(template.food_count(), 3);
        assert_eq!(template.meal_nutrition(MealSlot::Breakfast).calories, 260.0);
        assert_eq!(template.meal_nutrition(MealSlot::Dinner), Nutrition::zero());
        assert_eq!(template.total_nutrition().calories, 458.0);
    }

    #[test]
    fn test_food_serializes_flat() {
        let food = TemplateFood {
            food: "Apple".to_string(),
            quantity: "1 medium".to_string(),
            nutrition: Nutrition::new(95.0, 0.0, 25.0, 0.0),
        };
        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["calories"], 95.0);
        assert_eq!(json["food"], "Apple");
    }
}
