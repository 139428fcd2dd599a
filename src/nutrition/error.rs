//! Calculator error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NutritionError {
    #[error("invalid activity level: '{0}' (expected sedentary, light, moderate, active or extreme)")]
    InvalidActivityLevel(String),

    #[error("invalid goal: '{0}' (expected lose, maintain, gain or performance)")]
    InvalidGoal(String),

    #[error("invalid gender: '{0}' (expected male or female)")]
    InvalidGender(String),

    #[error("invalid restriction: '{0}' (expected none, vegetarian, vegan, gluten or lactose)")]
    InvalidRestriction(String),

    #[error("invalid meal slot: '{0}'")]
    InvalidMealSlot(String),

    #[error("unsupported meal count: {0} (expected 3, 4, 5 or 6)")]
    UnsupportedMealCount(u32),

    #[error("template '{0}' has no calories to scale from")]
    EmptyTemplate(String),

    #[error("ratio table '{table}' sums to {sum}, expected 1.0")]
    InvalidRatioTable { table: String, sum: f64 },
}

/// Result type for calculator operations
pub type NutritionResult<T> = Result<T, NutritionError>;
