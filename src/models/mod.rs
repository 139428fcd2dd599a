//! Data models
//!
//! Plain value types passed in and out of the calculator.

mod body;
mod meal;
mod nutrition;
mod plan;
mod profile;
mod template;

pub use body::{BmiCategory, BodyAssessment, IdealWeightRange};
pub use meal::{MealAllocation, MealDistribution, MealSlot};
pub use nutrition::Nutrition;
pub use plan::{Macros, NutritionPlan, ReferenceValues};
pub use profile::{
    validate_age, validate_height, validate_weight, ActivityLevel, BiometricProfile, Gender,
    Goal, ProfileError, AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG,
};
pub use template::{DietTemplate, Restriction, TemplateFood, TemplateKind};
